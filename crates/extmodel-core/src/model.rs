// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

//! The resolved model definition.
//!
//! [`ModelConfig`] is the single input of descriptor assembly: class-level
//! settings plus the ordered field, association and validation lists.
//! Construction happens once per generation request, typically through
//! `#[derive(ExtModel)]`; nothing is mutated afterwards and ownership is
//! strictly tree-shaped.

use serde::Serialize;

use crate::{ModelAssociation, ModelField, ModelValidation};

/// Writer option bundle (`allDataOptions`/`partialDataOptions`).
///
/// Controls which record data the client writer sends. The two bundles
/// have different defaults, see [`all_data`](Self::all_data) and
/// [`partial_data`](Self::partial_data).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WriteOptions {
    /// Include associated data.
    pub associated: bool,

    /// Only include fields that have been modified.
    pub changes: bool,

    /// Include critical fields. Only meaningful when `changes` is true.
    pub critical: bool,

    /// Only include persistent fields.
    pub persist: bool
}

impl WriteOptions {
    /// Defaults of the `allDataOptions` bundle.
    #[must_use]
    pub fn all_data() -> Self {
        Self {
            associated: false,
            changes: false,
            critical: false,
            persist: true
        }
    }

    /// Defaults of the `partialDataOptions` bundle.
    #[must_use]
    pub fn partial_data() -> Self {
        Self {
            associated: false,
            changes: true,
            critical: true,
            persist: false
        }
    }
}

/// Resolved class-level configuration and the ordered member lists.
///
/// Assemble with [`assemble`](Self::assemble). All `Option` members emit
/// nothing when `None`; names follow the emitted document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelConfig {
    /// Model name. The derive defaults it to the type's name.
    pub name: String,

    /// Name of the id property, `"id"` by default. A non-default value
    /// also sets `idParam` on the proxy.
    pub id_property: String,

    /// Name of the version property.
    pub version_property: Option<String>,

    /// Name of the client-id property.
    pub client_id_property: Option<String>,

    /// Superclass of the generated model.
    pub extend: String,

    /// Add a reader root of `"records"`. An explicit
    /// [`root_property`](Self::root_property) wins over this.
    pub paging: bool,

    /// Suppress the page/start/limit parameters on the proxy. Always
    /// honored when true, independent of any other proxy setting.
    pub disable_paging_parameters: bool,

    /// Remote read method reference (`action.methodName`). When it is the
    /// only remote method, it is emitted as `directFn` instead of an `api`
    /// block.
    pub read_method: Option<String>,

    /// Remote create method reference.
    pub create_method: Option<String>,

    /// Remote update method reference.
    pub update_method: Option<String>,

    /// Remote destroy method reference.
    pub destroy_method: Option<String>,

    /// Reader `messageProperty` override.
    pub message_property: Option<String>,

    /// Reader `successProperty` override.
    pub success_property: Option<String>,

    /// Reader `totalProperty` override.
    pub total_property: Option<String>,

    /// Explicit reader root. Takes precedence over the
    /// [`paging`](Self::paging)-implied `"records"`.
    pub root_property: Option<String>,

    /// Writer type name for the proxy.
    pub writer: Option<String>,

    /// Reader type name for the proxy.
    pub reader: Option<String>,

    /// Writer `writeAllFields` setting.
    pub write_all_fields: Option<bool>,

    /// Identifier generator name.
    pub identifier: Option<String>,

    /// Writer options for complete records.
    pub all_data_options: Option<WriteOptions>,

    /// Writer options for partial (changed) records.
    pub partial_data_options: Option<WriteOptions>,

    /// Plain hasMany declarations without foreign keys: resolved target
    /// model names only.
    pub has_many: Vec<String>,

    /// Ordered field definitions.
    pub fields: Vec<ModelField>,

    /// Ordered association definitions.
    pub associations: Vec<ModelAssociation>,

    /// Ordered validator definitions.
    pub validations: Vec<ModelValidation>
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            id_property: "id".into(),
            version_property: None,
            client_id_property: None,
            extend: "Ext.data.Model".into(),
            paging: false,
            disable_paging_parameters: false,
            read_method: None,
            create_method: None,
            update_method: None,
            destroy_method: None,
            message_property: None,
            success_property: None,
            total_property: None,
            root_property: None,
            writer: None,
            reader: None,
            write_all_fields: None,
            identifier: None,
            all_data_options: None,
            partial_data_options: None,
            has_many: Vec::new(),
            fields: Vec::new(),
            associations: Vec::new(),
            validations: Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_id_property_is_id() {
        let model = ModelConfig::default();
        assert_eq!(model.id_property, "id");
        assert_eq!(model.extend, "Ext.data.Model");
        assert!(model.version_property.is_none());
        assert!(model.client_id_property.is_none());
    }

    #[test]
    fn write_option_bundles_differ() {
        let all = WriteOptions::all_data();
        assert!(!all.associated && !all.changes && !all.critical);
        assert!(all.persist);

        let partial = WriteOptions::partial_data();
        assert!(!partial.associated);
        assert!(partial.changes && partial.critical);
        assert!(!partial.persist);
    }
}
