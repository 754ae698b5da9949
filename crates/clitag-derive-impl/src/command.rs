// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! command.rs (orchestrator)
//! │
//! ├── parse/          → Model building (CommandDef, FieldDef)
//! │   ├── lexer.rs    → Metadata string lexer
//! │   ├── kind.rs     → Supported scalar types
//! │   ├── field.rs    → Per-field classification
//! │   ├── attrs.rs    → #[command(...)] via darling
//! │   └── def.rs      → CommandDef and its constructor
//! │
//! └── codegen/        → Constructor emission
//!     ├── chain.rs    → Ordered if / else-if dispatch
//!     ├── options.rs  → Long and short option branches
//!     ├── positional.rs → Positional countdown branch
//!     ├── coerce.rs   → Per-type conversion statements
//!     └── naming.rs   → Case labels and constructor name
//! ```

mod codegen;
pub mod parse;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::CommandDef;

/// Main entry point for the Command derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let command = match CommandDef::from_derive_input(&input) {
        Ok(command) => command,
        Err(err) => return err.write_errors().into()
    };

    match codegen::generate(&command) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into()
    }
}
