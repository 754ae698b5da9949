// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level metadata parsing.
//!
//! # Metadata Keys
//!
//! | Key | Effect |
//! |-----|--------|
//! | `type` | `option` or `argument` (default) |
//! | `name` | Long option name, replaces the field name |
//! | `short` | Short option key |
//! | `default` | Initial value literal |
//!
//! Every error is prefixed with `Type.field` and carries the span of the
//! offending field, so the compiler points at the declaration.

use std::fmt::Display;

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{Attribute, Expr, ExprLit, Field, Ident, Lit, LitStr, Meta, ext::IdentExt};

use super::{
    kind::VariableKind,
    lexer::{Props, parse_props}
};

/// Bucket a field lands in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldRole {
    /// Matched by `--name=value` and/or `-short=value`.
    Option,

    /// Filled from positional tokens in declaration order.
    #[default]
    Argument
}

impl FieldRole {
    fn from_value(value: &str) -> Option<Self> {
        match value {
            "option" => Some(Self::Option),
            "argument" => Some(Self::Argument),
            _ => None
        }
    }
}

/// One named field of a command struct.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Struct field assigned by the generated code.
    pub ident: Ident,

    /// Long option source name. Empty when `name:''` disables the long form.
    pub name: String,

    /// Short option key. Empty when not configured.
    pub short: String,

    /// Scalar type of the field.
    pub kind: VariableKind,

    /// Option or positional argument.
    pub role: FieldRole,

    /// Typed initializer converted from the `default:` literal.
    pub default: Option<TokenStream>
}

impl FieldDef {
    /// Parse and classify one struct field.
    ///
    /// # Errors
    ///
    /// - field has no name (tuple struct)
    /// - field type is not a supported scalar
    /// - more than one `#[cli]` attribute, or a malformed one
    /// - unterminated quote in the metadata string
    /// - unknown metadata key or invalid `type` value
    /// - `default` literal that does not convert to the field type
    /// - option with neither a long name nor a short key
    pub fn from_field(field: &Field, owner: &Ident) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom(format!(
                "error parsing {owner}: command fields must have exactly one name"
            ))
            .with_span(field)
        })?;
        let label = format!("{owner}.{ident}");
        let fail =
            |msg: &dyn Display| darling::Error::custom(format!("error parsing {label}: {msg}"));

        let kind = VariableKind::from_type(&field.ty).ok_or_else(|| {
            let ty = field.ty.to_token_stream();
            fail(&format_args!("unsupported field type `{ty}`")).with_span(&field.ty)
        })?;

        let props = match cli_attr(&field.attrs)? {
            Some(lit) => parse_props(&lit.value()).map_err(|err| fail(&err).with_span(&lit))?,
            None => Props::default()
        };

        let mut def = Self {
            name: ident.unraw().to_string(),
            ident,
            short: String::new(),
            kind,
            role: FieldRole::default(),
            default: None
        };

        let mut default = None;
        for (key, value) in props.iter() {
            match key {
                "short" => def.short = value.to_owned(),
                "default" => default = Some(value),
                "name" => def.name = value.to_owned(),
                "type" => {
                    def.role = FieldRole::from_value(value).ok_or_else(|| {
                        fail(&format_args!(
                            "undefined type '{value}', expected 'option' or 'argument'"
                        ))
                        .with_span(field)
                    })?;
                }
                _ => {
                    return Err(fail(&format_args!(
                        "undefined property '{key}', expected: short, default, type, name"
                    ))
                    .with_span(field));
                }
            }
        }

        def.default = default
            .map(|src| {
                kind.default_value(src)
                    .map_err(|err| fail(&format_args!("invalid default: {err}")).with_span(field))
            })
            .transpose()?;

        if def.is_option() && def.name.is_empty() && def.short.is_empty() {
            return Err(fail(&"option needs a non-empty name or short key").with_span(field));
        }

        Ok(def)
    }

    /// Check if the field is matched by an option token.
    #[must_use]
    pub fn is_option(&self) -> bool {
        self.role == FieldRole::Option
    }

    /// Check if the field is matched by `--name`.
    #[must_use]
    pub fn is_long(&self) -> bool {
        self.is_option() && !self.name.is_empty()
    }

    /// Check if the field is matched by `-short`.
    #[must_use]
    pub fn is_short(&self) -> bool {
        self.is_option() && !self.short.is_empty()
    }

    /// Check if the field is filled from a positional token.
    #[must_use]
    pub fn is_argument(&self) -> bool {
        self.role == FieldRole::Argument
    }

    /// Initial value expression for the generated struct literal.
    ///
    /// Falls back to `Default::default()` when no `default:` was given.
    #[must_use]
    pub fn initializer(&self) -> TokenStream {
        self.default
            .clone()
            .unwrap_or_else(|| quote::quote!(::core::default::Default::default()))
    }
}

/// Find the single `#[cli("...")]` or `#[cli = "..."]` attribute.
fn cli_attr(attrs: &[Attribute]) -> darling::Result<Option<LitStr>> {
    let mut found: Option<LitStr> = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("cli")) {
        let lit = match &attr.meta {
            Meta::List(_) => attr.parse_args::<LitStr>().map_err(darling::Error::from)?,
            Meta::NameValue(meta) => match &meta.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(lit), ..
                }) => lit.clone(),
                other => {
                    return Err(darling::Error::custom("expected a string literal").with_span(other));
                }
            },
            Meta::Path(_) => {
                return Err(darling::Error::custom(
                    "expected #[cli(\"...\")] with a metadata string"
                )
                .with_span(attr));
            }
        };

        if found.is_some() {
            return Err(darling::Error::custom("duplicate #[cli] attribute").with_span(attr));
        }
        found = Some(lit);
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use syn::{DeriveInput, Fields};

    use super::*;

    fn parse_fields(input: DeriveInput) -> Vec<darling::Result<FieldDef>> {
        let syn::Data::Struct(data) = &input.data else {
            panic!("expected struct");
        };
        match &data.fields {
            Fields::Named(named) => named
                .named
                .iter()
                .map(|f| FieldDef::from_field(f, &input.ident))
                .collect(),
            Fields::Unnamed(unnamed) => unnamed
                .unnamed
                .iter()
                .map(|f| FieldDef::from_field(f, &input.ident))
                .collect(),
            Fields::Unit => Vec::new()
        }
    }

    fn single(input: DeriveInput) -> darling::Result<FieldDef> {
        parse_fields(input).remove(0)
    }

    #[test]
    fn plain_field_is_argument() {
        let def = single(syn::parse_quote! {
            struct Cmd { path: String }
        })
        .unwrap();
        assert_eq!(def.role, FieldRole::Argument);
        assert_eq!(def.name, "path");
        assert!(def.short.is_empty());
        assert!(def.default.is_none());
        assert!(def.is_argument());
        assert!(!def.is_long());
    }

    #[test]
    fn option_with_name_and_short() {
        let def = single(syn::parse_quote! {
            struct Cmd {
                #[cli("type:option short:p name:'ListenPort'")]
                port: u16
            }
        })
        .unwrap();
        assert_eq!(def.role, FieldRole::Option);
        assert_eq!(def.name, "ListenPort");
        assert_eq!(def.short, "p");
        assert_eq!(def.kind, VariableKind::U16);
        assert!(def.is_long());
        assert!(def.is_short());
    }

    #[test]
    fn name_value_attribute_form() {
        let def = single(syn::parse_quote! {
            struct Cmd {
                #[cli = "type:option short:v"]
                verbose: bool
            }
        })
        .unwrap();
        assert!(def.is_short());
        assert!(def.is_long());
    }

    #[test]
    fn empty_name_disables_long_form() {
        let def = single(syn::parse_quote! {
            struct Cmd {
                #[cli("type:option name:'' short:v")]
                verbose: bool
            }
        })
        .unwrap();
        assert!(!def.is_long());
        assert!(def.is_short());
    }

    #[test]
    fn raw_identifier_name_is_unraw() {
        let def = single(syn::parse_quote! {
            struct Cmd {
                #[cli("type:option")]
                r#type: String
            }
        })
        .unwrap();
        assert_eq!(def.name, "type");
    }

    #[test]
    fn explicit_argument_type() {
        let def = single(syn::parse_quote! {
            struct Cmd {
                #[cli("type:argument")]
                count: i64
            }
        })
        .unwrap();
        assert!(def.is_argument());
    }

    #[test]
    fn unknown_key_is_named() {
        let err = single(syn::parse_quote! {
            struct Cmd {
                #[cli("type:option foo:bar")]
                value: String
            }
        })
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'foo'"), "{msg}");
        assert!(msg.contains("Cmd.value"), "{msg}");
    }

    #[test]
    fn invalid_type_value_is_named() {
        let err = single(syn::parse_quote! {
            struct Cmd {
                #[cli("type:flag")]
                value: String
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("'flag'"));
    }

    #[test]
    fn unsupported_type_is_named() {
        let err = single(syn::parse_quote! {
            struct Cmd { values: Vec<String> }
        })
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("unsupported field type"), "{msg}");
        assert!(msg.contains("Vec"), "{msg}");
    }

    #[test]
    fn unnamed_field_is_rejected() {
        let err = single(syn::parse_quote! {
            struct Cmd(String);
        })
        .unwrap_err();
        assert!(err.to_string().contains("exactly one name"));
    }

    #[test]
    fn unterminated_quote_is_rejected() {
        let err = single(syn::parse_quote! {
            struct Cmd {
                #[cli("type:option name:'Oops")]
                value: String
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("unterminated quote"));
    }

    #[test]
    fn duplicate_cli_attribute_is_rejected() {
        let err = single(syn::parse_quote! {
            struct Cmd {
                #[cli("type:option")]
                #[cli("short:v")]
                value: String
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn bare_cli_path_is_rejected() {
        assert!(
            single(syn::parse_quote! {
                struct Cmd {
                    #[cli]
                    value: String
                }
            })
            .is_err()
        );
    }

    #[test]
    fn valid_default_is_kept() {
        let def = single(syn::parse_quote! {
            struct Cmd {
                #[cli("type:option default:8080")]
                port: u16
            }
        })
        .unwrap();
        let default = def.default.as_ref().map(ToString::to_string);
        assert_eq!(default.as_deref(), Some("8080u16"));
        assert_eq!(def.initializer().to_string(), "8080u16");
    }

    #[test]
    fn default_is_converted_while_parsing() {
        let def = single(syn::parse_quote! {
            struct Cmd {
                #[cli("type:option default:T")]
                force: bool
            }
        })
        .unwrap();
        assert_eq!(def.initializer().to_string(), "true");
    }

    #[test]
    fn last_default_is_the_one_converted() {
        let def = single(syn::parse_quote! {
            struct Cmd {
                #[cli("type:option default:many default:3")]
                retries: u8
            }
        })
        .unwrap();
        assert_eq!(def.initializer().to_string(), "3u8");
    }

    #[test]
    fn invalid_default_is_rejected() {
        let err = single(syn::parse_quote! {
            struct Cmd {
                #[cli("type:option default:many")]
                port: u16
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("invalid default"));
    }

    #[test]
    fn missing_default_uses_default_trait() {
        let def = single(syn::parse_quote! {
            struct Cmd { port: u16 }
        })
        .unwrap();
        assert!(def.initializer().to_string().contains("Default :: default"));
    }

    #[test]
    fn unreachable_option_is_rejected() {
        let err = single(syn::parse_quote! {
            struct Cmd {
                #[cli("type:option name:''")]
                value: String
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("non-empty name or short"));
    }

    #[test]
    fn later_duplicate_key_wins() {
        let def = single(syn::parse_quote! {
            struct Cmd {
                #[cli("type:option short:a short:b")]
                value: String
            }
        })
        .unwrap();
        assert_eq!(def.short, "b");
    }
}
