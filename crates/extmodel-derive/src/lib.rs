// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # extmodel-derive
//!
//! One crate, all pieces. Re-exports:
//! - [`ExtModel`] derive macro from `extmodel-derive-impl`
//! - All runtime types from `extmodel-core` ([`ModelConfig`],
//!   [`GeneratedModel`], [`GeneratorWarning`], ...)

// Re-export all core types
// Re-export the derive macro
pub use extmodel_core::*;
pub use extmodel_derive_impl::ExtModel;
