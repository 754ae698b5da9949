// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Scalar field types supported by the Command derive.
//!
//! # Type Mapping
//!
//! | Rust Type | Kind | Bits | Conversion |
//! |-----------|------|------|------------|
//! | `String` | `String` | - | none |
//! | `isize` / `usize` | `Isize` / `Usize` | pointer | `convert::integer` |
//! | `i8` .. `i64` | `I8` .. `I64` | 8 .. 64 | `convert::integer` |
//! | `u8` .. `u64` | `U8` .. `U64` | 8 .. 64 | `convert::integer` |
//! | `f32`, `f64` | `F32`, `F64` | 32, 64 | `convert::float` |
//! | `bool` | `Bool` | - | `convert::boolean` |

use clitag_core::convert;
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{PathArguments, Type};

/// Closed set of field types a command may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    /// `String`, assigned without conversion.
    String,
    /// `isize`.
    Isize,
    /// `i8`.
    I8,
    /// `i16`.
    I16,
    /// `i32`.
    I32,
    /// `i64`.
    I64,
    /// `usize`.
    Usize,
    /// `u8`.
    U8,
    /// `u16`.
    U16,
    /// `u32`.
    U32,
    /// `u64`.
    U64,
    /// `f32`.
    F32,
    /// `f64`.
    F64,
    /// `bool`, parsed from the accepted boolean literals.
    Bool
}

impl VariableKind {
    /// Resolve a field type.
    ///
    /// Accepts a bare identifier (`u16`) or a path ending in one with no
    /// generic arguments (`std::string::String`). Returns `None` for
    /// everything else, including references, `Option<T>` and tuples.
    #[must_use]
    pub fn from_type(ty: &Type) -> Option<Self> {
        let Type::Path(type_path) = ty else {
            return None;
        };
        if type_path.qself.is_some() {
            return None;
        }
        let segment = type_path.path.segments.last()?;
        if !matches!(segment.arguments, PathArguments::None) {
            return None;
        }

        let kind = match segment.ident.to_string().as_str() {
            "String" => Self::String,
            "isize" => Self::Isize,
            "i8" => Self::I8,
            "i16" => Self::I16,
            "i32" => Self::I32,
            "i64" => Self::I64,
            "usize" => Self::Usize,
            "u8" => Self::U8,
            "u16" => Self::U16,
            "u32" => Self::U32,
            "u64" => Self::U64,
            "f32" => Self::F32,
            "f64" => Self::F64,
            "bool" => Self::Bool,
            _ => return None
        };
        Some(kind)
    }

    /// Rust type tokens for this kind.
    #[must_use]
    pub fn rust_type(self) -> TokenStream {
        match self {
            Self::String => quote!(::std::string::String),
            Self::Isize => quote!(isize),
            Self::I8 => quote!(i8),
            Self::I16 => quote!(i16),
            Self::I32 => quote!(i32),
            Self::I64 => quote!(i64),
            Self::Usize => quote!(usize),
            Self::U8 => quote!(u8),
            Self::U16 => quote!(u16),
            Self::U32 => quote!(u32),
            Self::U64 => quote!(u64),
            Self::F32 => quote!(f32),
            Self::F64 => quote!(f64),
            Self::Bool => quote!(bool)
        }
    }

    /// Check if the kind needs the `convert` facility.
    #[must_use]
    pub fn needs_conversion(self) -> bool {
        self != Self::String
    }

    /// Check if the kind is parsed with `convert::integer`.
    #[must_use]
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Isize
                | Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::Usize
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
        )
    }

    /// Check if the kind is parsed with `convert::float`.
    #[must_use]
    pub fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Turn a `default:` literal into a typed initializer expression.
    ///
    /// The literal goes through the same conversion the generated code uses
    /// at runtime, so a default that compiles is a value the user could also
    /// have typed on the command line.
    ///
    /// # Errors
    ///
    /// Returns a message when the literal does not convert to this kind or is
    /// a non-finite float.
    pub fn default_value(self, src: &str) -> Result<TokenStream, String> {
        fn lit<T: ToTokens, E: ToString>(parsed: Result<T, E>) -> Result<TokenStream, String> {
            parsed
                .map(|v| v.into_token_stream())
                .map_err(|err| err.to_string())
        }

        match self {
            Self::String => Ok(quote!(::std::string::String::from(#src))),
            Self::Isize => lit(convert::integer::<isize>(src)),
            Self::I8 => lit(convert::integer::<i8>(src)),
            Self::I16 => lit(convert::integer::<i16>(src)),
            Self::I32 => lit(convert::integer::<i32>(src)),
            Self::I64 => lit(convert::integer::<i64>(src)),
            Self::Usize => lit(convert::integer::<usize>(src)),
            Self::U8 => lit(convert::integer::<u8>(src)),
            Self::U16 => lit(convert::integer::<u16>(src)),
            Self::U32 => lit(convert::integer::<u32>(src)),
            Self::U64 => lit(convert::integer::<u64>(src)),
            Self::F32 => match convert::float::<f32>(src) {
                Ok(v) if v.is_finite() => Ok(v.into_token_stream()),
                Ok(_) => Err(non_finite(src)),
                Err(err) => Err(err.to_string())
            },
            Self::F64 => match convert::float::<f64>(src) {
                Ok(v) if v.is_finite() => Ok(v.into_token_stream()),
                Ok(_) => Err(non_finite(src)),
                Err(err) => Err(err.to_string())
            },
            Self::Bool => lit(convert::boolean(src))
        }
    }
}

fn non_finite(src: &str) -> String {
    format!("default '{src}' is not a finite number")
}
