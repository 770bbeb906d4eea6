// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! `#[model_field(...)]` is a key-value attribute and parses through
//! darling. The same structure serves member fields and struct-level
//! virtual declarations; virtual declarations additionally require `name`
//! and have no native type to autodetect from.

use darling::{FromMeta, util::PathList};
use syn::Attribute;

/// A field the generated model emits.
#[derive(Debug)]
pub struct FieldDef {
    /// Emitted field name. Explicit `name` override or the member ident.
    pub name: String,

    /// Rust type name for autodetection. `None` for virtual fields.
    pub native_type: Option<String>,

    /// Parsed `#[model_field(...)]` options.
    pub attrs: FieldAttrs
}

impl FieldDef {
    /// Parse a struct-level `#[model_field(...)]` virtual declaration.
    pub fn from_virtual_attr(attr: &Attribute) -> darling::Result<Self> {
        let attrs = FieldAttrs::from_meta(&attr.meta)?;
        let Some(name) = attrs.name.clone() else {
            return Err(darling::Error::custom(
                "a struct-level #[model_field] requires `name`"
            )
            .with_span(attr));
        };

        Ok(Self {
            name,
            native_type: None,
            attrs
        })
    }
}

/// Options parsed from `#[model_field(...)]`.
#[derive(Debug, Default, FromMeta)]
#[darling(default)]
pub struct FieldAttrs {
    /// Emitted field name override.
    pub name: Option<String>,

    /// Explicit client type, overriding autodetection.
    #[darling(rename = "type")]
    pub ty: Option<ModelTypeName>,

    /// Free-form custom client type, overriding everything.
    pub custom_type: Option<String>,

    /// Default value literal. `""` omits it, `"undefined"` emits `null`.
    pub default_value: Option<String>,

    /// Date parsing format, emitted for date fields only.
    pub date_format: Option<String>,

    /// Legacy nullability flag.
    pub use_null: Option<bool>,

    /// Nullability flag.
    pub allow_null: Option<bool>,

    /// Whether the client accepts blank values.
    pub allow_blank: Option<bool>,

    /// Uniqueness marker.
    pub unique: bool,

    /// Mapping path into the raw server record.
    pub mapping: Option<String>,

    /// Whether the field is written back. Defaults to true.
    pub persist: Option<bool>,

    /// Always include the field in partial writes.
    pub critical: bool,

    /// Fields a calculated field depends on.
    pub depends: PathList,

    /// Client-side convert function body.
    pub convert: Option<String>,

    /// Client-side calculate function body.
    pub calculate: Option<String>,

    /// Nested reference block.
    pub reference: Option<ReferenceAttrs>,

    /// Exclude the member from the model.
    pub skip: bool
}

/// Nested `reference(...)` options.
#[derive(Debug, Clone, Default, FromMeta)]
#[darling(default)]
pub struct ReferenceAttrs {
    /// Target model name.
    #[darling(rename = "type")]
    pub ty: Option<String>,

    /// Owned-child target model name.
    pub child: Option<String>,

    /// Owning-parent target model name.
    pub parent: Option<String>,

    /// Association name override.
    pub association: Option<String>,

    /// Role name override.
    pub role: Option<String>,

    /// Inverse role name override.
    pub inverse: Option<String>
}

/// Recognized client type names for `type = "..."`.
///
/// `integer`/`bool` are accepted as aliases so the attribute reads
/// naturally either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromMeta)]
#[darling(rename_all = "lowercase")]
pub enum ModelTypeName {
    /// No conversion.
    Auto,
    /// Integer, client name `int`.
    Int,
    /// Alias for [`ModelTypeName::Int`].
    Integer,
    /// Floating point, client name `float`.
    Float,
    /// Floating point, client name `number`. Distinct from
    /// [`ModelTypeName::Float`] in the emitted document.
    Number,
    /// Text.
    String,
    /// Date.
    Date,
    /// Boolean.
    Boolean,
    /// Alias for [`ModelTypeName::Boolean`].
    Bool
}

impl ModelTypeName {
    /// Variant name of the corresponding runtime `ModelType`.
    pub fn variant(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Int | Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Number => "Number",
            Self::String => "String",
            Self::Date => "Date",
            Self::Boolean | Self::Bool => "Boolean"
        }
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn parse(attr: Attribute) -> darling::Result<FieldAttrs> {
        FieldAttrs::from_meta(&attr.meta)
    }

    #[test]
    fn full_option_set() {
        let attrs = parse(parse_quote! {
            #[model_field(
                name = "bookTitle",
                type = "string",
                default_value = "untitled",
                allow_blank = false,
                unique,
                mapping = "attributes.title",
                persist = false,
                critical,
                depends(author, year),
                convert = "function(v) { return v.trim(); }"
            )]
        })
        .unwrap();

        assert_eq!(attrs.name.as_deref(), Some("bookTitle"));
        assert_eq!(attrs.ty, Some(ModelTypeName::String));
        assert_eq!(attrs.default_value.as_deref(), Some("untitled"));
        assert_eq!(attrs.allow_blank, Some(false));
        assert!(attrs.unique);
        assert_eq!(attrs.persist, Some(false));
        assert!(attrs.critical);
        assert_eq!(attrs.depends.len(), 2);
        assert!(attrs.convert.is_some());
    }

    #[test]
    fn type_aliases_resolve_to_same_variant() {
        let int = parse(parse_quote! { #[model_field(type = "int")] })
            .unwrap();
        let integer =
            parse(parse_quote! { #[model_field(type = "integer")] })
                .unwrap();
        assert_eq!(int.ty.unwrap().variant(), "Integer");
        assert_eq!(integer.ty.unwrap().variant(), "Integer");
    }

    #[test]
    fn unknown_type_name_is_rejected() {
        assert!(parse(parse_quote! { #[model_field(type = "uuid")] }).is_err());
    }

    #[test]
    fn reference_block_parses() {
        let attrs = parse(parse_quote! {
            #[model_field(reference(parent = "Customer", role = "owner"))]
        })
        .unwrap();

        let reference = attrs.reference.unwrap();
        assert_eq!(reference.parent.as_deref(), Some("Customer"));
        assert_eq!(reference.role.as_deref(), Some("owner"));
        assert!(reference.ty.is_none());
    }

    #[test]
    fn virtual_declaration_requires_name() {
        let attr: Attribute = parse_quote! {
            #[model_field(type = "number")]
        };
        assert!(FieldDef::from_virtual_attr(&attr).is_err());

        let attr: Attribute = parse_quote! {
            #[model_field(name = "score", type = "number")]
        };
        let field = FieldDef::from_virtual_attr(&attr).unwrap();
        assert_eq!(field.name, "score");
        assert!(field.native_type.is_none());
    }
}
