// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Names derived from the command model.
//!
//! | Source | Rule | Example |
//! |--------|------|---------|
//! | Long option | kebab-case of `name` | `ListenPort` → `listen-port`, `Ipv4Addr` → `ipv4-addr` |
//! | Short option | verbatim `short` | `p` → `p` |
//! | Constructor | `new_` + snake_case type | `HttpServe` → `new_http_serve` |

use convert_case::{Boundary, Case, Casing, Converter};
use proc_macro2::Span;
use syn::Ident;

use crate::command::parse::{CommandDef, FieldDef};

/// Word boundaries of a long option name.
///
/// A new word starts at a capital letter that follows a lowercase letter or
/// a digit, and at `_`, `-` or a space. Digits stay attached to their word
/// and runs of capitals are not split.
const LONG_BOUNDARIES: [Boundary; 5] = [
    Boundary::Underscore,
    Boundary::Hyphen,
    Boundary::Space,
    Boundary::LowerUpper,
    Boundary::DigitUpper
];

/// Case label matched against the key of a `--key=value` token.
#[must_use]
pub fn long_label(field: &FieldDef) -> String {
    Converter::new()
        .set_boundaries(&LONG_BOUNDARIES)
        .to_case(Case::Kebab)
        .convert(&field.name)
}

/// Case label matched against the key of a `-key=value` token.
#[must_use]
pub fn short_label(field: &FieldDef) -> String {
    field.short.clone()
}

/// Constructor function name.
///
/// # Errors
///
/// Returns an error if `#[command(constructor = "...")]` is not a valid
/// identifier.
pub fn constructor(command: &CommandDef) -> syn::Result<Ident> {
    match &command.constructor {
        Some(name) => parse_ident(command, name, "constructor"),
        None => Ok(Ident::new(
            &format!("new_{}", command.name_str().to_case(Case::Snake)),
            Span::call_site()
        ))
    }
}

/// Namespace module name, if configured.
///
/// # Errors
///
/// Returns an error if `#[command(module = "...")]` is not a valid
/// identifier.
pub fn module(command: &CommandDef) -> syn::Result<Option<Ident>> {
    command
        .module
        .as_deref()
        .map(|name| parse_ident(command, name, "module"))
        .transpose()
}

fn parse_ident(command: &CommandDef, name: &str, what: &str) -> syn::Result<Ident> {
    syn::parse_str::<Ident>(name)
        .map(|ident| Ident::new(&ident.to_string(), Span::call_site()))
        .map_err(|_| {
            syn::Error::new(
                command.ident.span(),
                format!("invalid {what} name '{name}', expected a Rust identifier")
            )
        })
}

#[cfg(test)]
mod tests {
    use syn::DeriveInput;

    use super::*;

    fn command(input: DeriveInput) -> CommandDef {
        CommandDef::from_derive_input(&input).unwrap()
    }

    #[test]
    fn long_label_splits_capitalized_segments() {
        let cmd = command(syn::parse_quote! {
            struct Cmd {
                #[cli("type:option name:'FooBar'")]
                value: i32
            }
        });
        assert_eq!(long_label(&cmd.long_options[0]), "foo-bar");
    }

    #[test]
    fn long_label_from_snake_case_field() {
        let cmd = command(syn::parse_quote! {
            struct Cmd {
                #[cli("type:option")]
                dry_run: bool
            }
        });
        assert_eq!(long_label(&cmd.long_options[0]), "dry-run");
    }

    #[test]
    fn digits_stay_in_their_word() {
        let cmd = command(syn::parse_quote! {
            struct Cmd {
                #[cli("type:option name:'Ipv4Addr'")]
                addr: String,
                #[cli("type:option")]
                http2: bool,
                #[cli("type:option name:'Http2'")]
                upgrade: bool
            }
        });
        let labels: Vec<String> = cmd.long_options.iter().map(long_label).collect();
        assert_eq!(labels, ["ipv4-addr", "http2", "http2"]);
    }

    #[test]
    fn capital_runs_are_one_word() {
        let cmd = command(syn::parse_quote! {
            struct Cmd {
                #[cli("type:option name:'MaxTCPConns'")]
                conns: u32
            }
        });
        assert_eq!(long_label(&cmd.long_options[0]), "max-tcpconns");
    }

    #[test]
    fn short_label_is_verbatim() {
        let cmd = command(syn::parse_quote! {
            struct Cmd {
                #[cli("type:option short:Xy")]
                value: i32
            }
        });
        assert_eq!(short_label(&cmd.short_options[0]), "Xy");
    }

    #[test]
    fn default_constructor_name() {
        let cmd = command(syn::parse_quote! {
            struct HttpServe {}
        });
        assert_eq!(constructor(&cmd).unwrap().to_string(), "new_http_serve");
    }

    #[test]
    fn constructor_override() {
        let cmd = command(syn::parse_quote! {
            #[command(constructor = "parse_args")]
            struct Cmd {}
        });
        assert_eq!(constructor(&cmd).unwrap().to_string(), "parse_args");
    }

    #[test]
    fn invalid_constructor_is_an_error() {
        let cmd = command(syn::parse_quote! {
            #[command(constructor = "not valid")]
            struct Cmd {}
        });
        let err = constructor(&cmd).unwrap_err();
        assert!(err.to_string().contains("invalid constructor name"));
    }

    #[test]
    fn keyword_module_is_an_error() {
        let cmd = command(syn::parse_quote! {
            #[command(module = "type")]
            struct Cmd {}
        });
        assert!(module(&cmd).is_err());
    }

    #[test]
    fn module_absent_by_default() {
        let cmd = command(syn::parse_quote! {
            struct Cmd {}
        });
        assert!(module(&cmd).unwrap().is_none());
    }
}
