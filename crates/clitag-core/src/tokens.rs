// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Token helpers shared by generated constructors.
//!
//! A token is classified by its prefix, in this order:
//!
//! | Prefix | Meaning | Example |
//! |--------|---------|---------|
//! | [`LONG_PREFIX`] | Long option, key is kebab-case | `--listen-port=80` |
//! | [`SHORT_PREFIX`] | Short option, key is verbatim | `-p=80` |
//! | anything else | Positional argument | `input.txt` |
//!
//! A positional value that itself starts with `-` is written with a leading
//! [`ESCAPE`] marker (`\-5`), which [`strip_escape`] removes.

/// Prefix of a long option token.
pub const LONG_PREFIX: &str = "--";

/// Prefix of a short option token.
pub const SHORT_PREFIX: &str = "-";

/// Marker protecting a positional value from option detection.
pub const ESCAPE: char = '\\';

/// Split the remainder of an option token on the first `=`.
///
/// Returns the key and, when `=` is present, the value. Everything after the
/// first `=` belongs to the value, including further `=` characters.
///
/// # Example
///
/// ```rust
/// use clitag_core::tokens::split_option;
///
/// assert_eq!(split_option("filter=a=b"), ("filter", Some("a=b")));
/// assert_eq!(split_option("verbose"), ("verbose", None));
/// assert_eq!(split_option("name="), ("name", Some("")));
/// ```
#[must_use]
pub fn split_option(rest: &str) -> (&str, Option<&str>) {
    match rest.split_once('=') {
        Some((key, value)) => (key, Some(value)),
        None => (rest, None)
    }
}

/// Remove exactly one leading [`ESCAPE`] marker.
///
/// # Example
///
/// ```rust
/// use clitag_core::tokens::strip_escape;
///
/// assert_eq!(strip_escape(r"\-5"), "-5");
/// assert_eq!(strip_escape(r"\\x"), r"\x");
/// assert_eq!(strip_escape("plain"), "plain");
/// ```
#[must_use]
pub fn strip_escape(item: &str) -> &str {
    item.strip_prefix(ESCAPE).unwrap_or(item)
}
