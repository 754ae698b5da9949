// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Long and short option branches.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! if let Some(rest) = item.strip_prefix(tokens::LONG_PREFIX) {
//!     let (key, value) = tokens::split_option(rest);
//!     match key {
//!         "listen-port" => {
//!             let value = value.ok_or_else(|| ArgsError::missing_value(key, item))?;
//!             command.listen_port = convert::integer::<u16>(value)?;
//!         }
//!         _ => return Err(ArgsError::unknown_long(key, item)),
//!     }
//! }
//! ```
//!
//! The long branch is tried before the short one, so `--x` never reaches the
//! short table while long options exist. A branch is only emitted for a
//! non-empty table; without it a prefixed token is treated as positional.

use proc_macro2::TokenStream;
use quote::quote;

use super::{EmitContext, coerce, naming};
use crate::command::parse::FieldDef;

/// Which option table a branch dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    Long,
    Short
}

impl Prefix {
    fn constant(self) -> TokenStream {
        match self {
            Self::Long => quote!(tokens::LONG_PREFIX),
            Self::Short => quote!(tokens::SHORT_PREFIX)
        }
    }

    fn unknown(self) -> TokenStream {
        match self {
            Self::Long => quote!(ArgsError::unknown_long),
            Self::Short => quote!(ArgsError::unknown_short)
        }
    }

    fn label(self, field: &FieldDef) -> String {
        match self {
            Self::Long => naming::long_label(field),
            Self::Short => naming::short_label(field)
        }
    }
}

/// Guard expression selecting tokens with this prefix.
#[must_use]
pub fn guard(prefix: Prefix) -> TokenStream {
    let constant = prefix.constant();
    quote!(let ::core::option::Option::Some(rest) = item.strip_prefix(#constant))
}

/// Body matching `rest` against a non-empty option table.
pub fn body(prefix: Prefix, options: &[FieldDef], ctx: &mut EmitContext) -> TokenStream {
    let unknown = prefix.unknown();
    let arms: Vec<TokenStream> = options
        .iter()
        .map(|field| {
            let label = prefix.label(field);
            let assign = coerce::assign(field, &quote!(value), ctx);
            quote! {
                #label => {
                    let value = value.ok_or_else(|| ArgsError::missing_value(key, item))?;
                    #assign
                }
            }
        })
        .collect();

    quote! {
        let (key, value) = tokens::split_option(rest);
        match key {
            #(#arms)*
            _ => return ::core::result::Result::Err(#unknown(key, item)),
        }
    }
}
