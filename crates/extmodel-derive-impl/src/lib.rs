// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

//! Proc-macro implementation behind `extmodel-derive`.
//!
//! This crate is an implementation detail. Depend on `extmodel-derive`
//! instead; it re-exports the macro together with the runtime types.
//!
//! # Attribute Quick Reference
//!
//! ## Struct-Level `#[model(...)]`
//!
//! ```rust,ignore
//! #[derive(ExtModel)]
//! #[model(
//!     name = "MyApp.model.Book",  // Optional: defaults to the struct ident
//!     id_property = "bookId",     // Optional: default "id"
//!     paging,                     // Optional: paged reader
//!     read_method = "bookService.read",
//!     has_many(Chapter)           // Optional: plain hasMany declarations
//! )]
//! pub struct Book { /* ... */ }
//! ```
//!
//! ## Field-Level Attributes
//!
//! ```rust,ignore
//! pub struct Book {
//!     pub id: i64,                               // Autodetected as "int"
//!
//!     #[model_field(default_value = "unknown", allow_blank = false)]
//!     pub title: String,
//!
//!     #[model_field(type = "date", date_format = "c")]
//!     pub published: NaiveDate,
//!
//!     #[model_field(skip)]                       // Excluded from the model
//!     pub internal: String,
//!
//!     #[model_association(belongs_to, model = Author)]
//!     pub author_id: i64,
//!
//!     #[model_validation(length, min = "1", max = "255")]
//!     pub isbn: String,
//! }
//! ```
//!
//! Struct-level `#[model_field(name = "...")]`, `#[model_association(...,
//! property_name = "...")]` and `#[model_validation(..., field = "...")]`
//! attributes may be repeated to declare members the struct does not carry.
//!
//! # Generated Code Overview
//!
//! For a `Book` struct the macro generates one impl:
//!
//! | Item | Description |
//! |------|-------------|
//! | `impl ExtModel for Book` | `model_name()` plus `model_config()` |
//!
//! `model_config()` builds an `extmodel_core::ModelConfig`; calling
//! `.assemble()` on it yields the client model document. Association
//! targets given as type paths resolve through `<T as ExtModel>::
//! model_name()`, so renaming a model propagates to every referrer.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

use proc_macro::TokenStream;

mod model;
mod utils;

/// Derive macro generating an `ExtModel` implementation for a struct.
///
/// See the [crate documentation](crate) for the attribute surface.
#[proc_macro_derive(
    ExtModel,
    attributes(model, model_field, model_association, model_validation)
)]
pub fn derive_ext_model(input: TokenStream) -> TokenStream {
    model::derive(input)
}
