// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Ordered dispatch over a token.
//!
//! Branches are tried in insertion order; the fallback runs when no guard
//! matched. Rendering produces a flat `if / else if / else` chain:
//!
//! ```rust,ignore
//! if let Some(rest) = item.strip_prefix(tokens::LONG_PREFIX) { ... }
//! else if let Some(rest) = item.strip_prefix(tokens::SHORT_PREFIX) { ... }
//! else { ... }
//! ```

use proc_macro2::{Span, TokenStream};
use quote::quote;

struct Branch {
    guard: TokenStream,
    body:  TokenStream
}

/// Prioritized list of guarded branches with an optional fallback.
#[derive(Default)]
pub struct DispatchChain {
    branches: Vec<Branch>,
    fallback: Option<TokenStream>
}

impl DispatchChain {
    /// Append a guarded branch after the existing ones.
    ///
    /// # Errors
    ///
    /// Fails once a fallback is set, since the branch could never run.
    pub fn branch(&mut self, guard: TokenStream, body: TokenStream) -> syn::Result<()> {
        if self.fallback.is_some() {
            return Err(syn::Error::new(
                Span::call_site(),
                "dispatch chain already ends with a fallback branch"
            ));
        }
        self.branches.push(Branch {
            guard,
            body
        });
        Ok(())
    }

    /// Set the branch taken when no guard matched.
    ///
    /// # Errors
    ///
    /// Fails if a fallback is already set.
    pub fn fallback(&mut self, body: TokenStream) -> syn::Result<()> {
        if self.fallback.is_some() {
            return Err(syn::Error::new(
                Span::call_site(),
                "dispatch chain fallback branch set twice"
            ));
        }
        self.fallback = Some(body);
        Ok(())
    }

    /// Render the chain as statements.
    #[must_use]
    pub fn into_tokens(self) -> TokenStream {
        let has_branches = !self.branches.is_empty();
        let mut tokens = TokenStream::new();

        for (index, Branch { guard, body }) in self.branches.into_iter().enumerate() {
            if index > 0 {
                tokens.extend(quote!(else));
            }
            tokens.extend(quote!(if #guard { #body }));
        }

        match self.fallback {
            Some(body) if has_branches => tokens.extend(quote!(else { #body })),
            Some(body) => tokens.extend(quote!({ #body })),
            None => {}
        }

        tokens
    }
}
