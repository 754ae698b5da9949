// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! CommandDef struct definition and constructor.
//!
//! [`CommandDef`] is the model every code generator receives. It is built
//! once per macro invocation and never mutated afterwards.
//!
//! # Classification
//!
//! ```text
//! FieldDef ──┬── role = Option ──┬── name non-empty  → long_options
//!            │                   └── short non-empty → short_options
//!            └── role = Argument ──────────────────→ arguments
//! ```
//!
//! Both option branches may fire for the same field. Declaration order is
//! kept in all three lists.

use darling::FromDeriveInput;
use syn::{DeriveInput, Ident, Visibility};

use super::{attrs::CommandAttrs, field::FieldDef};

/// Complete parsed command definition.
#[derive(Debug)]
pub struct CommandDef {
    /// Struct identifier (e.g., `Serve`).
    pub ident: Ident,

    /// Struct visibility, propagated to the constructor.
    pub vis: Visibility,

    /// Namespace for the emitted unit.
    pub module: Option<String>,

    /// Constructor name override.
    pub constructor: Option<String>,

    /// Positional arguments in declaration order.
    pub arguments: Vec<FieldDef>,

    /// Fields matched by `--name`.
    pub long_options: Vec<FieldDef>,

    /// Fields matched by `-short`.
    pub short_options: Vec<FieldDef>,

    /// Every field in declaration order, for the struct literal.
    pub fields: Vec<FieldDef>
}

impl CommandDef {
    /// Parse a command definition from syn's `DeriveInput`.
    ///
    /// 1. Parses `#[command(...)]` with darling and checks the input shape
    /// 2. Parses every named field, accumulating errors
    /// 3. Classifies fields into arguments, long and short options
    ///
    /// # Errors
    ///
    /// - Applied to an enum, union, tuple struct or unit struct
    /// - Applied to a generic struct
    /// - Any field error (see [`FieldDef::from_field`]); all field errors are
    ///   reported together and no command is produced
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = CommandAttrs::from_derive_input(input)?;

        if !attrs.generics.params.is_empty() {
            return Err(
                darling::Error::custom("Command cannot be derived for generic structs")
                    .with_span(&attrs.generics)
            );
        }

        let syn::Data::Struct(data) = &input.data else {
            return Err(darling::Error::custom("Command can only be derived for structs")
                .with_span(&input.ident));
        };

        let mut errors = darling::Error::accumulator();
        let fields: Vec<FieldDef> = data
            .fields
            .iter()
            .filter_map(|field| errors.handle(FieldDef::from_field(field, &attrs.ident)))
            .collect();
        errors.finish()?;

        let mut command = Self {
            ident: attrs.ident,
            vis: attrs.vis,
            module: attrs.module,
            constructor: attrs.constructor,
            arguments: Vec::new(),
            long_options: Vec::new(),
            short_options: Vec::new(),
            fields: Vec::new()
        };

        for field in fields {
            if field.is_long() {
                command.long_options.push(field.clone());
            }
            if field.is_short() {
                command.short_options.push(field.clone());
            }
            if field.is_argument() {
                command.arguments.push(field.clone());
            }
            command.fields.push(field);
        }

        Ok(command)
    }

    /// Get the struct name as a string.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }

    /// Check if the command declares positional arguments.
    #[must_use]
    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }
}
