// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # clitag
//!
//! One crate for generated parsers. Re-exports:
//! - [`Command`] derive macro from `clitag-derive-impl`
//! - All runtime items from `clitag-core` ([`ArgsError`], [`FromArgs`],
//!   [`tokens`], [`convert`])
//!
//! # Quick Start
//!
//! ```rust
//! use clitag::{Command, FromArgs};
//!
//! #[derive(Command, Debug)]
//! struct Serve {
//!     #[cli("type:option short:p default:8080")]
//!     port: u16,
//!     root: String,
//! }
//!
//! let serve = new_serve(["-p=3000", "./public"]).unwrap();
//! assert_eq!(serve.port, 3000);
//! assert_eq!(serve.root, "./public");
//!
//! let serve = Serve::from_args(["site"]).unwrap();
//! assert_eq!(serve.port, 8080);
//! ```

pub use clitag_core::*;
pub use clitag_derive_impl::Command;
