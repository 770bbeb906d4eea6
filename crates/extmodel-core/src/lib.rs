// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

//! Core types and descriptor assembly for extmodel.
//!
//! This crate turns a resolved model definition ([`ModelConfig`]) into the
//! configuration document consumed by Ext JS / Sencha Touch on the client
//! side: field list, id/version/client-id properties, associations,
//! validations and the proxy/reader/writer block.
//!
//! Most users derive the definition with `#[derive(ExtModel)]` from the
//! `extmodel-derive` crate; this crate can also be used standalone by
//! building a [`ModelConfig`] by hand.
//!
//! # Overview
//!
//! - [`ModelConfig`] — the resolved model definition and entry point
//! - [`ModelField`] / [`ModelType`] — field definitions and type resolution
//! - [`ModelAssociation`] / [`ReferenceConfig`] — relationships
//! - [`ModelValidation`] / [`ValidationType`] — client-side validators
//! - [`GeneratedModel`] / [`GeneratorWarning`] — assembly output
//!
//! # Usage
//!
//! ```rust
//! use extmodel_core::{ModelConfig, ModelField};
//!
//! let model = ModelConfig {
//!     name: "User".into(),
//!     fields: vec![ModelField {
//!         name: "email".into(),
//!         native_type: Some("String".into()),
//!         ..ModelField::default()
//!     }],
//!     ..ModelConfig::default()
//! };
//!
//! let generated = model.assemble();
//! assert!(generated.warnings.is_empty());
//! assert_eq!(generated.document["idProperty"], "id");
//! ```
//!
//! Assembly is a pure, single-pass function over owned data: no I/O, no
//! global state, and the same input always produces a byte-identical
//! document. Serializing the document to text is left to the caller
//! (`serde_json::to_string` works; key order is preserved).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod association;
mod field;
mod generator;
mod model;
mod reference;
mod types;
mod validation;

pub use association::{AssociationType, ModelAssociation};
pub use field::{DefaultValue, FieldType, ModelField};
pub use generator::{GeneratedModel, GeneratorWarning};
pub use model::{ModelConfig, WriteOptions};
pub use reference::ReferenceConfig;
pub use types::ModelType;
pub use validation::{ModelValidation, ValidationParam, ValidationType};

/// A type that describes itself as a client-side data model.
///
/// Implemented by `#[derive(ExtModel)]`; manual implementations are fine for
/// models that cannot carry the derive.
///
/// # Example
///
/// ```rust
/// use extmodel_core::{ExtModel, ModelConfig};
///
/// struct Author;
///
/// impl ExtModel for Author {
///     fn model_name() -> &'static str {
///         "Author"
///     }
///
///     fn model_config() -> ModelConfig {
///         ModelConfig {
///             name: Self::model_name().into(),
///             ..ModelConfig::default()
///         }
///     }
/// }
/// ```
pub trait ExtModel {
    /// Name of the model as emitted in the document and used by other
    /// models to refer to this one from associations.
    fn model_name() -> &'static str;

    /// The resolved model definition.
    ///
    /// Constructed fresh on every call; the definition is plain owned data
    /// and callers may cache it if they assemble the same model repeatedly.
    fn model_config() -> ModelConfig;
}
