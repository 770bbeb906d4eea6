// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

//! Reference configuration for a field.
//!
//! A reference declares that a field points at another model, either as a
//! plain lookup (`ty`) or with an ownership direction (`child`/`parent`).
//! At most one of the three may be set; `child` and `parent` together is a
//! configuration error reported at assembly.

use serde::Serialize;

/// Reference block attached to a [`ModelField`](crate::ModelField).
///
/// Corresponds to the `reference` config of `Ext.data.field.Field`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceConfig {
    /// The type this field references, for a plain (non-owning) reference.
    pub ty: Option<String>,

    /// Referenced entity is an owned child of this one: it is deleted when
    /// this entity is deleted. Set instead of `ty`.
    pub child: Option<String>,

    /// Referenced entity is the owning parent of this one: this entity is
    /// deleted when the referenced one is deleted. Set instead of `ty`.
    pub parent: Option<String>,

    /// Name of the association. The client derives one when absent.
    pub association: Option<String>,

    /// Role played by the referenced entity. Defaults client-side to the
    /// field name minus an `Id` suffix.
    pub role: Option<String>,

    /// Inverse role of this entity with respect to the referenced one.
    pub inverse: Option<String>
}

impl ReferenceConfig {
    /// Whether any of `ty`/`child`/`parent` is set.
    ///
    /// An unconfigured reference emits nothing.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.ty.is_some() || self.child.is_some() || self.parent.is_some()
    }

    /// Whether both ownership directions are set, which is a conflict.
    #[must_use]
    pub fn ownership_conflict(&self) -> bool {
        self.child.is_some() && self.parent.is_some()
    }
}
