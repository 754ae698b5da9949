// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Code generation for the Command derive.
//!
//! # Generated Unit
//!
//! ```rust,ignore
//! /// Parse command-line tokens into [`Serve`].
//! fn new_serve<I>(items: I) -> Result<Serve, ::clitag::ArgsError>
//! where
//!     I: IntoIterator,
//!     I::Item: AsRef<str>,
//! {
//!     use ::clitag::ArgsError;
//!     use ::clitag::tokens;
//!     use ::clitag::convert;          // only when a field needs conversion
//!
//!     let mut command = Serve { port: 8080u16, root: Default::default() };
//!     let mut remaining: usize = 1;   // only when arguments exist
//!     for item in items {
//!         let item: &str = item.as_ref();
//!         if let Some(rest) = item.strip_prefix(tokens::LONG_PREFIX) { ... }     // long options
//!         else if let Some(rest) = item.strip_prefix(tokens::SHORT_PREFIX) { ... } // short options
//!         else { ... }
//!     }
//!     Ok(command)
//! }
//!
//! impl ::clitag::FromArgs for Serve { ... }
//! ```
//!
//! With `#[command(module = "cli")]` the constructor lives in a module of
//! that name, re-exporting the parent scope.

mod chain;
mod coerce;
mod naming;
mod options;
mod positional;


use proc_macro2::TokenStream;
use quote::quote;

use self::{chain::DispatchChain, options::Prefix};
use super::parse::CommandDef;

/// Per-invocation emission state.
#[derive(Debug, Default)]
pub struct EmitContext {
    needs_convert: bool
}

impl EmitContext {
    /// Record that emitted code calls into `convert`.
    pub fn require_convert(&mut self) {
        self.needs_convert = true;
    }

    /// Check if any emitted statement calls into `convert`.
    #[must_use]
    pub fn needs_convert(&self) -> bool {
        self.needs_convert
    }

    /// Scoped imports for the constructor body.
    #[must_use]
    pub fn imports(&self) -> TokenStream {
        let convert = self.needs_convert().then(|| quote!(use ::clitag::convert;));
        quote! {
            use ::clitag::ArgsError;
            use ::clitag::tokens;
            #convert
        }
    }
}

/// Generate the constructor and the `FromArgs` impl.
///
/// # Errors
///
/// Fails on an invalid `module` or `constructor` name, or if the dispatch
/// chain is assembled out of order.
pub fn generate(command: &CommandDef) -> syn::Result<TokenStream> {
    let ident = &command.ident;
    let vis = &command.vis;
    let ctor = naming::constructor(command)?;
    let module = naming::module(command)?;

    let mut ctx = EmitContext::default();
    let dispatch = dispatch(command, &mut ctx)?;
    let imports = ctx.imports();
    let counter = command
        .has_arguments()
        .then(|| positional::counter(&command.arguments));

    let inits: Vec<TokenStream> = command
        .fields
        .iter()
        .map(|field| {
            let name = &field.ident;
            let init = field.initializer();
            quote!(#name: #init)
        })
        .collect();

    let doc = format!("Parse command-line tokens into [`{ident}`].");
    let function = |fn_vis: TokenStream| {
        quote! {
            #[doc = #doc]
            #fn_vis fn #ctor<I>(items: I) -> ::core::result::Result<#ident, ::clitag::ArgsError>
            where
                I: ::core::iter::IntoIterator,
                I::Item: ::core::convert::AsRef<str>,
            {
                #imports

                #[allow(unused_mut)]
                let mut command = #ident { #(#inits),* };
                #counter
                for item in items {
                    let item: &str = ::core::convert::AsRef::<str>::as_ref(&item);
                    #dispatch
                }
                ::core::result::Result::Ok(command)
            }
        }
    };

    let (unit, path) = match &module {
        Some(module) => {
            let doc = format!("Argument parser for [`{ident}`].");
            let inner = function(quote!(pub));
            let unit = quote! {
                #[doc = #doc]
                #vis mod #module {
                    use super::*;

                    #inner
                }
            };
            (unit, quote!(#module::#ctor))
        }
        None => (function(quote!(#vis)), quote!(#ctor))
    };

    Ok(quote! {
        #unit

        impl ::clitag::FromArgs for #ident {
            fn from_args<I>(items: I) -> ::core::result::Result<Self, ::clitag::ArgsError>
            where
                I: ::core::iter::IntoIterator,
                I::Item: ::core::convert::AsRef<str>,
            {
                #path(items)
            }
        }
    })
}

fn dispatch(command: &CommandDef, ctx: &mut EmitContext) -> syn::Result<TokenStream> {
    let mut chain = DispatchChain::default();
    for (prefix, table) in [
        (Prefix::Long, &command.long_options),
        (Prefix::Short, &command.short_options)
    ] {
        if !table.is_empty() {
            chain.branch(options::guard(prefix), options::body(prefix, table, ctx))?;
        }
    }
    chain.fallback(positional::body(&command.arguments, ctx))?;
    Ok(chain.into_tokens())
}
