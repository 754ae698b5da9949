// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Positional argument branch.
//!
//! A countdown starts at the number of declared arguments. Each positional
//! token fills the argument whose arm matches the current count, so the
//! first declared argument is matched by the highest arm.
//!
//! ```rust,ignore
//! let item = tokens::strip_escape(item);
//! match remaining {
//!     2 => { command.src = item.to_owned(); remaining -= 1; }
//!     1 => { command.dst = item.to_owned(); remaining -= 1; }
//!     _ => return Err(ArgsError::unexpected(item)),
//! }
//! ```

use proc_macro2::{Literal, TokenStream};
use quote::quote;

use super::{EmitContext, coerce};
use crate::command::parse::FieldDef;

/// Declaration of the countdown.
#[must_use]
pub fn counter(arguments: &[FieldDef]) -> TokenStream {
    let total = Literal::usize_unsuffixed(arguments.len());
    quote!(let mut remaining: usize = #total;)
}

/// Fallback body handling a token that is not an option.
pub fn body(arguments: &[FieldDef], ctx: &mut EmitContext) -> TokenStream {
    if arguments.is_empty() {
        return quote! {
            return ::core::result::Result::Err(ArgsError::unexpected(tokens::strip_escape(item)));
        };
    }

    let total = arguments.len();
    let arms: Vec<TokenStream> = arguments
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let count = Literal::usize_unsuffixed(total - index);
            let assign = coerce::assign(field, &quote!(item), ctx);
            quote! {
                #count => {
                    #assign
                    remaining -= 1;
                }
            }
        })
        .collect();

    quote! {
        let item = tokens::strip_escape(item);
        match remaining {
            #(#arms)*
            _ => return ::core::result::Result::Err(ArgsError::unexpected(item)),
        }
    }
}
