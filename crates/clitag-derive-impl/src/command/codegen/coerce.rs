// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-type assignment statements.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! command.name = value.to_owned();                    // String
//! command.port = convert::integer::<u16>(value)?;     // integers, base 10
//! command.ratio = convert::float::<f32>(value)?;      // floats
//! command.force = convert::boolean(value)?;           // bool
//! ```
//!
//! A failed conversion returns from the constructor with the underlying
//! parse error converted into `ArgsError` by `?`.

use proc_macro2::TokenStream;
use quote::quote;

use super::EmitContext;
use crate::command::parse::FieldDef;

/// Assign `value` (an `&str` expression) to the field.
///
/// Marks the context as needing the `convert` import for every kind except
/// `String`.
pub fn assign(field: &FieldDef, value: &TokenStream, ctx: &mut EmitContext) -> TokenStream {
    let ident = &field.ident;
    let ty = field.kind.rust_type();

    if !field.kind.needs_conversion() {
        return quote! {
            command.#ident = ::std::borrow::ToOwned::to_owned(#value);
        };
    }

    ctx.require_convert();
    let expr = if field.kind.is_integer() {
        quote!(convert::integer::<#ty>(#value)?)
    } else if field.kind.is_float() {
        quote!(convert::float::<#ty>(#value)?)
    } else {
        quote!(convert::boolean(#value)?)
    };

    quote! {
        command.#ident = #expr;
    }
}
