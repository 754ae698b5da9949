// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error type returned by generated constructors.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::convert::InvalidBool;

/// Failure to turn command-line tokens into a command value.
///
/// Conversion failures carry the underlying parse error unchanged so callers
/// can match on the standard library error kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    /// A `--key` token did not match any long option.
    #[error("wrong long option '{key}' from '{item}'")]
    UnknownLongOption {
        /// Key after the prefix, before `=`.
        key:  String,
        /// Full originating token.
        item: String
    },

    /// A `-key` token did not match any short option.
    #[error("wrong short option '{key}' from '{item}'")]
    UnknownShortOption {
        /// Key after the prefix, before `=`.
        key:  String,
        /// Full originating token.
        item: String
    },

    /// A positional token arrived after every argument was filled.
    #[error("wrong argument '{item}'")]
    UnexpectedArgument {
        /// Token with the escape marker already stripped.
        item: String
    },

    /// A known option was given without `=value`.
    #[error("missing value for option '{key}' in '{item}'")]
    MissingValue {
        /// Matched option key.
        key:  String,
        /// Full originating token.
        item: String
    },

    /// Integer conversion failed.
    #[error(transparent)]
    Int(#[from] ParseIntError),

    /// Float conversion failed.
    #[error(transparent)]
    Float(#[from] ParseFloatError),

    /// Boolean conversion failed.
    #[error(transparent)]
    Bool(#[from] InvalidBool)
}

impl ArgsError {
    /// Build [`ArgsError::UnknownLongOption`].
    #[must_use]
    pub fn unknown_long(key: &str, item: &str) -> Self {
        Self::UnknownLongOption {
            key:  key.to_owned(),
            item: item.to_owned()
        }
    }

    /// Build [`ArgsError::UnknownShortOption`].
    #[must_use]
    pub fn unknown_short(key: &str, item: &str) -> Self {
        Self::UnknownShortOption {
            key:  key.to_owned(),
            item: item.to_owned()
        }
    }

    /// Build [`ArgsError::UnexpectedArgument`].
    #[must_use]
    pub fn unexpected(item: &str) -> Self {
        Self::UnexpectedArgument {
            item: item.to_owned()
        }
    }

    /// Build [`ArgsError::MissingValue`].
    #[must_use]
    pub fn missing_value(key: &str, item: &str) -> Self {
        Self::MissingValue {
            key:  key.to_owned(),
            item: item.to_owned()
        }
    }
}
