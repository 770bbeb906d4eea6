// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

//! Association definitions.
//!
//! An association declares a relationship from one model to another and
//! maps to an entry of the `associations` array in the emitted document.
//! Foreign key, getter and setter names have documented defaults computed
//! at assembly; see [`ModelAssociation`].

use serde::Serialize;

/// Kind of an association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AssociationType {
    /// One-to-many, emitted as `"hasMany"`.
    HasMany,
    /// Many-to-one, emitted as `"belongsTo"`.
    BelongsTo,
    /// One-to-one, emitted as `"hasOne"`.
    HasOne
}

impl AssociationType {
    /// Name of the association kind in the emitted document.
    #[must_use]
    pub fn js_name(self) -> &'static str {
        match self {
            Self::HasMany => "hasMany",
            Self::BelongsTo => "belongsTo",
            Self::HasOne => "hasOne"
        }
    }

    /// Whether this kind supports the `autoLoad` property.
    #[must_use]
    pub fn supports_auto_load(self) -> bool {
        self == Self::HasMany
    }

    /// Whether this kind supports `getterName`/`setterName`.
    #[must_use]
    pub fn supports_accessors(self) -> bool {
        matches!(self, Self::BelongsTo | Self::HasOne)
    }
}

/// Definition of a single association.
///
/// The `model` is the already-resolved name of the target model; name
/// resolution (a target type to its configured model name) happens in the
/// layer that builds the definition, typically the derive macro through
/// [`ExtModel::model_name`](crate::ExtModel::model_name).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelAssociation {
    /// Kind of the association.
    pub kind: AssociationType,

    /// Name of the field this association belongs to.
    pub property_name: String,

    /// Resolved name of the associated model.
    pub model: String,

    /// Foreign key on the associated model. Defaults at assembly to
    /// `lowercase(ownerModelName) + "_id"` for hasMany and to
    /// `propertyName + "_id"` for belongsTo/hasOne.
    pub foreign_key: Option<String>,

    /// Primary key on the associated model.
    pub primary_key: Option<String>,

    /// Load the related store eagerly. Only meaningful for hasMany.
    pub auto_load: bool,

    /// Name of the function created on the owner model to retrieve the
    /// child store. Only meaningful for hasMany.
    pub name: Option<String>,

    /// Setter added to the owner model. Only meaningful for
    /// belongsTo/hasOne; defaults to `"set" + Capitalize(propertyName)`.
    pub setter_name: Option<String>,

    /// Getter added to the owner model. Only meaningful for
    /// belongsTo/hasOne; defaults to `"get" + Capitalize(propertyName)`.
    pub getter_name: Option<String>,

    /// Instance name override. Works around the client picking only one
    /// association when two share a target type.
    pub instance_name: Option<String>
}

impl ModelAssociation {
    /// Create an association of the given kind between a property and a
    /// resolved target model name. Everything else starts unset.
    #[must_use]
    pub fn new(
        kind: AssociationType,
        property_name: impl Into<String>,
        model: impl Into<String>
    ) -> Self {
        Self {
            kind,
            property_name: property_name.into(),
            model: model.into(),
            foreign_key: None,
            primary_key: None,
            auto_load: false,
            name: None,
            setter_name: None,
            getter_name: None,
            instance_name: None
        }
    }
}
