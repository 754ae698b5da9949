// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Scalar conversion used by generated constructors.
//!
//! Generated code only imports this module when the command has at least one
//! non-`String` field.
//!
//! | Field type | Function | Error |
//! |------------|----------|-------|
//! | `isize`, `i8` .. `i64`, `usize`, `u8` .. `u64` | [`integer`] | [`ParseIntError`] |
//! | `f32`, `f64` | [`float`] | [`ParseFloatError`] |
//! | `bool` | [`boolean`] | [`InvalidBool`] |

use std::{
    num::{ParseFloatError, ParseIntError},
    str::FromStr
};

use thiserror::Error;

/// Integer types parsed in base 10 at their own width.
pub trait Decimal: Sized {
    /// Parse a base-10 literal, rejecting values outside the type's range.
    ///
    /// # Errors
    ///
    /// Returns [`ParseIntError`] for empty input, invalid digits and overflow.
    fn from_decimal(src: &str) -> Result<Self, ParseIntError>;
}

macro_rules! impl_decimal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Decimal for $ty {
                fn from_decimal(src: &str) -> Result<Self, ParseIntError> {
                    <$ty>::from_str_radix(src, 10)
                }
            }
        )*
    };
}

impl_decimal!(isize, i8, i16, i32, i64, usize, u8, u16, u32, u64);

/// Parse a base-10 integer of type `T`.
///
/// # Errors
///
/// Returns the [`ParseIntError`] produced by `from_str_radix`.
///
/// # Example
///
/// ```rust
/// use clitag_core::convert::integer;
///
/// assert_eq!(integer::<i8>("-12"), Ok(-12));
/// assert!(integer::<u8>("256").is_err());
/// ```
pub fn integer<T: Decimal>(src: &str) -> Result<T, ParseIntError> {
    T::from_decimal(src)
}

/// Parse a floating point number of type `T`.
///
/// # Errors
///
/// Returns the [`ParseFloatError`] produced by the standard parser.
pub fn float<T>(src: &str) -> Result<T, ParseFloatError>
where
    T: FromStr<Err = ParseFloatError>
{
    src.parse()
}

/// Value that is not one of the accepted boolean literals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid boolean literal '{0}'")]
pub struct InvalidBool(pub String);

/// Parse a boolean literal.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and `0`, `f`, `F`, `FALSE`,
/// `false`, `False`.
///
/// # Errors
///
/// Returns [`InvalidBool`] carrying the rejected input.
///
/// # Example
///
/// ```rust
/// use clitag_core::convert::boolean;
///
/// assert_eq!(boolean("T"), Ok(true));
/// assert_eq!(boolean("0"), Ok(false));
/// assert!(boolean("yes").is_err());
/// ```
pub fn boolean(src: &str) -> Result<bool, InvalidBool> {
    match src {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(InvalidBool(src.to_owned()))
    }
}
