// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Attribute Quick Reference
//!
//! ## Command-Level `#[command(...)]`
//!
//! ```rust,ignore
//! #[derive(Command)]
//! #[command(
//!     module = "args",          // Optional: emit the constructor inside `mod args`
//!     constructor = "parse_cp"  // Optional: constructor name (default: `new_{snake_type}`)
//! )]
//! pub struct Cp { /* ... */ }
//! ```
//!
//! ## Field-Level `#[cli("...")]`
//!
//! The attribute carries one metadata string of space-separated `key:value`
//! pairs. Values may be quoted with `'`, `"` or a backtick to embed spaces.
//!
//! ```rust,ignore
//! pub struct Cp {
//!     #[cli("type:option short:r")]          // --recursive=true, -r=true
//!     pub recursive: bool,
//!
//!     #[cli("type:option name:'BufferSize' default:4096")]
//!     pub buffer: usize,                      // --buffer-size=8192
//!
//!     #[cli("type:option name:'' short:v")]  // short only: -v=1
//!     pub verbose: bool,
//!
//!     pub from: String,                       // positional #1
//!
//!     #[cli("type:argument")]
//!     pub to: String,                         // positional #2
//! }
//! ```
//!
//! | Key | Values | Effect |
//! |-----|--------|--------|
//! | `type` | `option`, `argument` | Role of the field (default: `argument`) |
//! | `name` | any | Long option name, kebab-cased (default: field name) |
//! | `short` | any | Short option key, verbatim |
//! | `default` | literal | Initial value, checked against the field type |
//!
//! # Generated Code Overview
//!
//! For a `Cp` command the macro generates:
//!
//! | Generated Item | Description |
//! |----------------|-------------|
//! | `fn new_cp(items)` | Parses tokens into `Cp` or returns `clitag::ArgsError` |
//! | `impl FromArgs for Cp` | Delegates to `new_cp` |

mod command;

use proc_macro::TokenStream;

/// Derive macro generating a command-line token parser.
///
/// # Overview
///
/// Every named field of the struct becomes either an option or a positional
/// argument according to its `#[cli("...")]` metadata string. The macro emits
/// a constructor `new_{snake_type}` that walks the tokens once:
///
/// 1. `--key=value` is matched against long options
/// 2. `-key=value` is matched against short options
/// 3. anything else fills the next positional argument, in declaration order
///
/// A positional value starting with `-` is written as `\-value`; exactly one
/// leading backslash is removed.
///
/// # Supported Field Types
///
/// `String`, `bool`, `f32`, `f64`, `isize`, `i8`, `i16`, `i32`, `i64`,
/// `usize`, `u8`, `u16`, `u32`, `u64`. Any other type is a compile error.
///
/// # Example
///
/// ```rust,ignore
/// use clitag::Command;
///
/// #[derive(Command)]
/// pub struct Serve {
///     #[cli("type:option short:p name:'ListenPort' default:8080")]
///     pub port: u16,
///     pub root: String,
/// }
///
/// let serve = new_serve(["--listen-port=80", "/srv"])?;
/// assert_eq!(serve.port, 80);
/// ```
#[proc_macro_derive(Command, attributes(command, cli))]
pub fn derive_command(input: TokenStream) -> TokenStream {
    command::derive(input)
}
