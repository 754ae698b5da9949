// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model building for the Command derive macro.
//!
//! Command-level attributes like `#[command(module = "args")]` are parsed
//! with darling's `FromDeriveInput`. Field-level metadata is a single string
//! in `#[cli("...")]` that goes through the hand-written [`lexer`], because
//! its `key:value` grammar with shell-like quoting is not Rust meta syntax.
//!
//! # Data Structures
//!
//! ```text
//! CommandDef
//! ├── ident: Ident              (struct name, e.g., "Serve")
//! ├── vis: Visibility
//! ├── module: Option<String>    (namespace for the emitted unit)
//! ├── constructor: Option<String>
//! ├── arguments: Vec<FieldDef>  (declaration order = positional order)
//! ├── long_options: Vec<FieldDef>
//! └── short_options: Vec<FieldDef>
//!     └── FieldDef
//!         ├── ident: Ident      (assignment target)
//!         ├── name: String      (long option source, may be empty)
//!         ├── short: String     (short option key, may be empty)
//!         ├── kind: VariableKind
//!         ├── role: FieldRole
//!         └── default: Option<TokenStream> (typed initializer)
//! ```
//!
//! A field that is both a long and a short option is stored in both option
//! lists.

mod attrs;
mod def;
mod field;
mod kind;
pub mod lexer;

pub use def::CommandDef;
pub use field::FieldDef;
