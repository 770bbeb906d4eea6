// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

//! Struct-level attribute parsing with darling.
//!
//! # Supported Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `name` | struct ident | Full client model name |
//! | `id_property` | `"id"` | Identifier field name |
//! | `version_property` | — | Version field name |
//! | `client_id_property` | — | Client-generated id field name |
//! | `identifier` | — | Identifier generation strategy |
//! | `extend` | `"Ext.data.Model"` | Client base class |
//! | `paging` | `false` | Paged reader (`rootProperty: "records"`) |
//! | `disable_paging_parameters` | `false` | Null out page/start/limit |
//! | `read_method` … `destroy_method` | — | Remote API functions |
//! | `message_property`, `success_property`, `total_property`, `root_property` | — | Reader overrides |
//! | `reader`, `writer` | — | Reader/writer type names |
//! | `write_all_fields` | — | Writer `writeAllFields` |
//! | `all_data_options(...)`, `partial_data_options(...)` | — | Writer option bundles |
//! | `has_many(...)` | — | Plain hasMany target types |

use darling::{FromDeriveInput, FromMeta, util::PathList};
use syn::Ident;

/// Struct-level options parsed from `#[model(...)]`.
///
/// Struct-level `#[model_field]`, `#[model_association]` and
/// `#[model_validation]` attributes are forwarded into `attrs` and parsed
/// by the coordinator; they declare virtual members, not options.
#[derive(Debug, FromDeriveInput)]
#[darling(
    attributes(model),
    supports(struct_named),
    forward_attrs(model_field, model_association, model_validation)
)]
pub struct ModelAttrs {
    /// Struct identifier (e.g. `Book`).
    pub ident: Ident,

    /// Forwarded struct-level member declarations.
    pub attrs: Vec<syn::Attribute>,

    /// Client model name. Defaults to the struct ident.
    #[darling(default)]
    pub name: Option<String>,

    /// Identifier field name. Defaults to `"id"`.
    #[darling(default)]
    pub id_property: Option<String>,

    /// Version field name.
    #[darling(default)]
    pub version_property: Option<String>,

    /// Client-generated id field name.
    #[darling(default)]
    pub client_id_property: Option<String>,

    /// Identifier generation strategy (e.g. `"uuid"`).
    #[darling(default)]
    pub identifier: Option<String>,

    /// Client base class. Defaults to `"Ext.data.Model"`.
    #[darling(default)]
    pub extend: Option<String>,

    /// Paged reader.
    #[darling(default)]
    pub paging: bool,

    /// Null out the proxy's page/start/limit parameters.
    #[darling(default)]
    pub disable_paging_parameters: bool,

    /// Remote read function.
    #[darling(default)]
    pub read_method: Option<String>,

    /// Remote create function.
    #[darling(default)]
    pub create_method: Option<String>,

    /// Remote update function.
    #[darling(default)]
    pub update_method: Option<String>,

    /// Remote destroy function.
    #[darling(default)]
    pub destroy_method: Option<String>,

    /// Reader `messageProperty`.
    #[darling(default)]
    pub message_property: Option<String>,

    /// Reader `successProperty`.
    #[darling(default)]
    pub success_property: Option<String>,

    /// Reader `totalProperty`.
    #[darling(default)]
    pub total_property: Option<String>,

    /// Reader `rootProperty`. Wins over the paging-implied root.
    #[darling(default)]
    pub root_property: Option<String>,

    /// Reader type name.
    #[darling(default)]
    pub reader: Option<String>,

    /// Writer type name.
    #[darling(default)]
    pub writer: Option<String>,

    /// Writer `writeAllFields`.
    #[darling(default)]
    pub write_all_fields: Option<bool>,

    /// Writer option bundle for full records.
    #[darling(default)]
    pub all_data_options: Option<WriteOptionsAttr>,

    /// Writer option bundle for changed records.
    #[darling(default)]
    pub partial_data_options: Option<WriteOptionsAttr>,

    /// Plain hasMany declarations; each path must implement `ExtModel`.
    #[darling(default)]
    pub has_many: PathList
}

/// Writer option bundle overrides.
///
/// Unset options keep the bundle's own defaults: `all_data_options` starts
/// from `(false, false, false, persist = true)`, `partial_data_options`
/// from `(false, changes = true, critical = true, false)`.
#[derive(Debug, Clone, Default, FromMeta)]
#[darling(default)]
pub struct WriteOptionsAttr {
    /// Include associated records.
    pub associated: Option<bool>,

    /// Only include changed fields.
    pub changes: Option<bool>,

    /// Always include critical fields.
    pub critical: Option<bool>,

    /// Only include persistent fields.
    pub persist: Option<bool>
}

#[cfg(test)]
mod tests {
    use syn::{DeriveInput, parse_quote};

    use super::*;

    #[test]
    fn defaults_when_no_model_attribute() {
        let input: DeriveInput = parse_quote! {
            struct Book {
                id: i64,
            }
        };

        let attrs = ModelAttrs::from_derive_input(&input).unwrap();
        assert_eq!(attrs.ident, "Book");
        assert!(attrs.name.is_none());
        assert!(!attrs.paging);
        assert!(attrs.has_many.is_empty());
    }

    #[test]
    fn parses_full_option_set() {
        let input: DeriveInput = parse_quote! {
            #[model(
                name = "MyApp.model.Book",
                id_property = "bookId",
                paging,
                disable_paging_parameters,
                read_method = "bookService.read",
                root_property = "rows",
                writer = "deep",
                write_all_fields = false,
                all_data_options(associated = true),
                has_many(Chapter, Review)
            )]
            struct Book {
                id: i64,
            }
        };

        let attrs = ModelAttrs::from_derive_input(&input).unwrap();
        assert_eq!(attrs.name.as_deref(), Some("MyApp.model.Book"));
        assert_eq!(attrs.id_property.as_deref(), Some("bookId"));
        assert!(attrs.paging);
        assert!(attrs.disable_paging_parameters);
        assert_eq!(attrs.read_method.as_deref(), Some("bookService.read"));
        assert_eq!(attrs.root_property.as_deref(), Some("rows"));
        assert_eq!(attrs.write_all_fields, Some(false));
        assert_eq!(
            attrs.all_data_options.unwrap().associated,
            Some(true)
        );
        assert_eq!(attrs.has_many.len(), 2);
    }

    #[test]
    fn unknown_option_is_rejected() {
        let input: DeriveInput = parse_quote! {
            #[model(table = "books")]
            struct Book {
                id: i64,
            }
        };

        assert!(ModelAttrs::from_derive_input(&input).is_err());
    }

    #[test]
    fn member_declarations_are_forwarded() {
        let input: DeriveInput = parse_quote! {
            #[model_field(name = "virtualField")]
            #[model_validation(presence, field = "title")]
            struct Book {
                id: i64,
            }
        };

        let attrs = ModelAttrs::from_derive_input(&input).unwrap();
        assert_eq!(attrs.attrs.len(), 2);
    }
}
