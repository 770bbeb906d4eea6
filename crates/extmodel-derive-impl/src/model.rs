// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

//! ExtModel derive macro implementation.
//!
//! Orchestrates parsing of the attribute surface into a [`ModelDef`] and
//! delegates code generation to [`generate`].
//!
//! # Architecture
//!
//! ```text
//! model.rs (orchestrator)
//! │
//! ├── parse/           → Attribute parsing (ModelDef)
//! │   ├── attrs.rs       → #[model(...)] struct-level options
//! │   ├── field.rs       → #[model_field(...)] + reference(...)
//! │   ├── association.rs → #[model_association(...)]
//! │   └── validation.rs  → #[model_validation(...)]
//! │
//! └── generate.rs      → impl ExtModel (model_name + model_config)
//! ```
//!
//! Parsing is strict about structure (named structs only, known option
//! names, known type strings) and lenient about semantics: conflicting
//! nullability flags or malformed validator parameters pass through so the
//! assembler in `extmodel-core` can report them as warnings instead of
//! failing the build.

mod generate;
pub mod parse;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::ModelDef;

/// Main entry point for the ExtModel derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ModelDef::from_derive_input(&input) {
        Ok(model) => generate::expand(&model).into(),
        Err(err) => err.write_errors().into()
    }
}
