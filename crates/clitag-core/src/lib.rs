// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime support for clitag generated parsers.
//!
//! Code emitted by `#[derive(Command)]` refers to this crate through the
//! `clitag` facade. It can also be used directly when writing a parser by
//! hand that should behave like a generated one.
//!
//! # Overview
//!
//! - [`ArgsError`]: Every error a generated constructor can return
//! - [`tokens`]: Option prefix handling and `key=value` splitting
//! - [`convert`]: Base-10 integer, float and boolean conversion
//! - [`FromArgs`]: Trait implemented for every derived command
//!
//! # Example
//!
//! ```rust
//! use clitag_core::{ArgsError, tokens};
//!
//! let (key, value) = tokens::split_option("port=8080");
//! assert_eq!(key, "port");
//! assert_eq!(value, Some("8080"));
//!
//! let err = ArgsError::unknown_long("colour", "--colour=red");
//! assert_eq!(err.to_string(), "wrong long option 'colour' from '--colour=red'");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convert;
mod error;
pub mod tokens;

pub use error::ArgsError;

/// Construct a value from a sequence of command-line tokens.
///
/// Implemented by `#[derive(Command)]` for every annotated struct. The
/// implementation delegates to the generated `new_{type}` constructor.
///
/// # Example
///
/// ```rust,ignore
/// use clitag::{Command, FromArgs};
///
/// #[derive(Command)]
/// struct Copy {
///     from: String,
///     to: String,
/// }
///
/// let copy = Copy::from_args(["a.txt", "b.txt"])?;
/// ```
pub trait FromArgs: Sized {
    /// Parse `items` into `Self`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError`] for unknown options, surplus positional tokens,
    /// options without a value and values that fail conversion.
    fn from_args<I>(items: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>;

    /// Parse the arguments of the current process, skipping the program name.
    ///
    /// # Errors
    ///
    /// Same as [`FromArgs::from_args`].
    fn from_env() -> Result<Self, ArgsError> {
        let items: Vec<String> = std::env::args().skip(1).collect();
        tracing::debug!(
            command = std::any::type_name::<Self>(),
            tokens = items.len(),
            "parsing process arguments"
        );

        Self::from_args(&items).inspect_err(|err| {
            tracing::debug!(
                command = std::any::type_name::<Self>(),
                error = %err,
                "failed to parse process arguments"
            );
        })
    }
}
