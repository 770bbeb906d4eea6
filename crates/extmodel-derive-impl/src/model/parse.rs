// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

//! Attribute parsing for the ExtModel derive macro.
//!
//! Struct-level options in `#[model(...)]` are parsed with [`darling`]'s
//! `FromDeriveInput`, which validates option names and rejects non-struct
//! inputs. Field-level attributes are parsed per field: `#[model_field]`
//! through darling's `FromMeta`, `#[model_validation]` manually because its
//! parameter names are free-form and may include the `type` keyword.
//!
//! # Data Structures
//!
//! ```text
//! ModelDef
//! ├── ident: Ident               (struct name, e.g. "Book")
//! ├── attrs: ModelAttrs          (parsed #[model(...)])
//! ├── fields: Vec<FieldDef>      (members first, then virtual fields)
//! ├── associations: Vec<AssociationDef>
//! └── validations: Vec<ValidationDef>
//! ```
//!
//! Errors are accumulated so a struct with three bad attributes reports
//! all three at once.

pub mod association;
pub mod attrs;
pub mod field;
pub mod validation;

use darling::{FromDeriveInput, FromMeta};
use syn::{DeriveInput, Ident};

pub use self::{
    association::{AssociationDef, AssociationKind, TargetModel},
    attrs::ModelAttrs,
    field::{FieldAttrs, FieldDef},
    validation::ValidationDef
};

/// Complete parsed model definition.
///
/// Created once per derive invocation and handed to the generator.
/// Member fields keep their declaration order; virtual fields declared at
/// struct level follow them.
#[derive(Debug)]
pub struct ModelDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct-level `#[model(...)]` options.
    pub attrs: ModelAttrs,

    /// Emitted fields in order.
    pub fields: Vec<FieldDef>,

    /// Associations in declaration order.
    pub associations: Vec<AssociationDef>,

    /// Validators in declaration order.
    pub validations: Vec<ValidationDef>
}

impl ModelDef {
    /// Parse a complete model definition from derive input.
    ///
    /// Structural problems (enum input, tuple struct, unknown option or
    /// type names, missing association targets) are compile errors.
    /// Semantic conflicts are deliberately left for the assembler to
    /// report as warnings.
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = ModelAttrs::from_derive_input(input)?;
        let mut errors = darling::Error::accumulator();

        let mut fields = Vec::new();
        let mut associations = Vec::new();
        let mut validations = Vec::new();

        if let syn::Data::Struct(data) = &input.data {
            for member in &data.fields {
                // supports(struct_named) guarantees an ident.
                let Some(ident) = &member.ident else { continue };

                let mut field_attrs: Option<FieldAttrs> = None;
                for attr in &member.attrs {
                    if !attr.path().is_ident("model_field") {
                        continue;
                    }
                    if field_attrs.is_some() {
                        errors.push(
                            darling::Error::custom(
                                "duplicate #[model_field] attribute"
                            )
                            .with_span(attr)
                        );
                        continue;
                    }
                    field_attrs =
                        errors.handle(FieldAttrs::from_meta(&attr.meta));
                }
                let has_field_attr = field_attrs.is_some();
                let field_attrs = field_attrs.unwrap_or_default();
                let name = field_attrs
                    .name
                    .clone()
                    .unwrap_or_else(|| ident.to_string());

                let mut has_association = false;
                for attr in &member.attrs {
                    if attr.path().is_ident("model_association") {
                        has_association = true;
                        if let Some(assoc) = errors.handle(
                            AssociationDef::from_attr(attr, Some(&name))
                        ) {
                            associations.push(assoc);
                        }
                    } else if attr.path().is_ident("model_validation") {
                        if let Some(validation) = errors.handle(
                            ValidationDef::from_attr(attr, Some(&name))
                        ) {
                            validations.push(validation);
                        }
                    }
                }

                // An association member is not a data field unless it asks
                // to be one with an explicit #[model_field].
                let emit_field =
                    !field_attrs.skip && (!has_association || has_field_attr);
                if emit_field {
                    fields.push(FieldDef {
                        name,
                        native_type: crate::utils::native_type_name(
                            &member.ty
                        ),
                        attrs: field_attrs
                    });
                }
            }
        }

        // Struct-level attributes declare virtual members: fields the
        // struct does not carry but the client model should.
        for attr in &attrs.attrs {
            if attr.path().is_ident("model_field") {
                if let Some(virtual_field) =
                    errors.handle(FieldDef::from_virtual_attr(attr))
                {
                    fields.push(virtual_field);
                }
            } else if attr.path().is_ident("model_association") {
                if let Some(assoc) =
                    errors.handle(AssociationDef::from_attr(attr, None))
                {
                    associations.push(assoc);
                }
            } else if attr.path().is_ident("model_validation") {
                if let Some(validation) =
                    errors.handle(ValidationDef::from_attr(attr, None))
                {
                    validations.push(validation);
                }
            }
        }

        errors.finish()?;

        Ok(Self {
            ident: attrs.ident.clone(),
            attrs,
            fields,
            associations,
            validations
        })
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn parses_plain_struct_with_member_fields() {
        let input: DeriveInput = parse_quote! {
            struct Book {
                id: i64,
                title: String,
            }
        };

        let model = ModelDef::from_derive_input(&input).unwrap();
        assert_eq!(model.ident, "Book");
        assert_eq!(model.fields.len(), 2);
        assert_eq!(model.fields[0].name, "id");
        assert_eq!(model.fields[0].native_type.as_deref(), Some("i64"));
        assert_eq!(model.fields[1].native_type.as_deref(), Some("String"));
    }

    #[test]
    fn skip_excludes_a_member() {
        let input: DeriveInput = parse_quote! {
            struct Book {
                id: i64,
                #[model_field(skip)]
                internal: String,
            }
        };

        let model = ModelDef::from_derive_input(&input).unwrap();
        assert_eq!(model.fields.len(), 1);
        assert_eq!(model.fields[0].name, "id");
    }

    #[test]
    fn association_member_is_not_a_field_by_default() {
        let input: DeriveInput = parse_quote! {
            struct Book {
                id: i64,
                #[model_association(belongs_to, model = "Author")]
                author_id: i64,
            }
        };

        let model = ModelDef::from_derive_input(&input).unwrap();
        assert_eq!(model.fields.len(), 1);
        assert_eq!(model.associations.len(), 1);
        assert_eq!(model.associations[0].property_name, "author_id");
    }

    #[test]
    fn association_member_with_model_field_is_both() {
        let input: DeriveInput = parse_quote! {
            struct Book {
                #[model_field(allow_null = true)]
                #[model_association(belongs_to, model = "Author")]
                author_id: i64,
            }
        };

        let model = ModelDef::from_derive_input(&input).unwrap();
        assert_eq!(model.fields.len(), 1);
        assert_eq!(model.associations.len(), 1);
    }

    #[test]
    fn virtual_fields_follow_members() {
        let input: DeriveInput = parse_quote! {
            #[model_field(name = "computed", type = "number")]
            struct Book {
                id: i64,
            }
        };

        let model = ModelDef::from_derive_input(&input).unwrap();
        assert_eq!(model.fields.len(), 2);
        assert_eq!(model.fields[1].name, "computed");
        assert!(model.fields[1].native_type.is_none());
    }

    #[test]
    fn validation_takes_field_name_from_member() {
        let input: DeriveInput = parse_quote! {
            struct Book {
                #[model_field(name = "bookTitle")]
                #[model_validation(presence)]
                title: String,
            }
        };

        let model = ModelDef::from_derive_input(&input).unwrap();
        assert_eq!(model.validations.len(), 1);
        assert_eq!(model.validations[0].field, "bookTitle");
    }

    #[test]
    fn rejects_enum_input() {
        let input: DeriveInput = parse_quote! {
            enum NotAModel {
                A,
                B,
            }
        };

        assert!(ModelDef::from_derive_input(&input).is_err());
    }

    #[test]
    fn rejects_tuple_struct() {
        let input: DeriveInput = parse_quote! {
            struct Pair(i64, i64);
        };

        assert!(ModelDef::from_derive_input(&input).is_err());
    }

    #[test]
    fn duplicate_model_field_attr_is_an_error() {
        let input: DeriveInput = parse_quote! {
            struct Book {
                #[model_field(unique)]
                #[model_field(critical)]
                isbn: String,
            }
        };

        assert!(ModelDef::from_derive_input(&input).is_err());
    }

    #[test]
    fn errors_accumulate_across_fields() {
        let input: DeriveInput = parse_quote! {
            struct Book {
                #[model_field(type = "uuid")]
                id: i64,
                #[model_validation(sparkle)]
                title: String,
            }
        };

        let err = ModelDef::from_derive_input(&input).unwrap_err();
        assert_eq!(err.len(), 2);
    }
}
