// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command-level attribute parsing with darling.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `module` | No | - | Emit the constructor inside `mod {module}` |
//! | `constructor` | No | `new_{snake_type}` | Constructor function name |

use darling::FromDeriveInput;
use syn::{Generics, Ident, Visibility};

/// Command-level attributes parsed from `#[command(...)]`.
///
/// `supports(struct_named)` makes darling reject enums, unions, tuple
/// structs and unit structs before any field is looked at.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(command), supports(struct_named))]
pub struct CommandAttrs {
    /// Struct identifier (e.g., `Serve`).
    pub ident: Ident,

    /// Struct visibility.
    pub vis: Visibility,

    /// Generic parameters, rejected by the model builder.
    pub generics: Generics,

    /// Namespace the emitted unit is wrapped in.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// #[command(module = "args")]
    /// pub struct Serve { ... }
    ///
    /// // Generates: pub mod args { use super::*; pub fn new_serve(...) ... }
    /// ```
    #[darling(default)]
    pub module: Option<String>,

    /// Constructor name override.
    #[darling(default)]
    pub constructor: Option<String>
}
