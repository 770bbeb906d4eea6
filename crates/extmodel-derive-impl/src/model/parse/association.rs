// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

//! Association attribute parsing.
//!
//! `#[model_association(has_many | belongs_to | has_one, model = ..., ...)]`
//! on a member names exactly one kind and a target. The target is either a
//! type path, resolved at runtime through `ExtModel::model_name()`, or a
//! string literal used verbatim for models outside this crate.

use darling::{FromMeta, util::Flag};
use syn::{Attribute, Expr};

/// Association kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationKind {
    /// One-to-many.
    HasMany,
    /// Many-to-one.
    BelongsTo,
    /// One-to-one.
    HasOne
}

impl AssociationKind {
    /// Variant name of the corresponding runtime `AssociationType`.
    pub fn variant(self) -> &'static str {
        match self {
            Self::HasMany => "HasMany",
            Self::BelongsTo => "BelongsTo",
            Self::HasOne => "HasOne"
        }
    }
}

/// Association target: a type implementing `ExtModel` or a literal name.
#[derive(Debug, Clone)]
pub enum TargetModel {
    /// Resolved at runtime via `<T as ExtModel>::model_name()`.
    Path(syn::Path),
    /// Used verbatim.
    Name(String)
}

impl FromMeta for TargetModel {
    fn from_expr(expr: &Expr) -> darling::Result<Self> {
        match expr {
            Expr::Lit(lit) => {
                if let syn::Lit::Str(s) = &lit.lit {
                    Ok(Self::Name(s.value()))
                } else {
                    Err(darling::Error::unexpected_expr_type(expr))
                }
            }
            Expr::Path(path) => Ok(Self::Path(path.path.clone())),
            _ => Err(darling::Error::unexpected_expr_type(expr))
        }
    }
}

/// Options parsed from `#[model_association(...)]`.
#[derive(Debug, FromMeta)]
pub struct AssociationAttrs {
    /// One-to-many kind marker.
    #[darling(default)]
    pub has_many: Flag,

    /// Many-to-one kind marker.
    #[darling(default)]
    pub belongs_to: Flag,

    /// One-to-one kind marker.
    #[darling(default)]
    pub has_one: Flag,

    /// Association target.
    pub model: TargetModel,

    /// Property name; required for struct-level declarations.
    #[darling(default)]
    pub property_name: Option<String>,

    /// Foreign key override.
    #[darling(default)]
    pub foreign_key: Option<String>,

    /// Primary key override.
    #[darling(default)]
    pub primary_key: Option<String>,

    /// Eager loading, hasMany only.
    #[darling(default)]
    pub auto_load: bool,

    /// Store name override, hasMany only.
    #[darling(default)]
    pub name: Option<String>,

    /// Setter name override, belongsTo/hasOne only.
    #[darling(default)]
    pub setter_name: Option<String>,

    /// Getter name override, belongsTo/hasOne only.
    #[darling(default)]
    pub getter_name: Option<String>,

    /// Instance name override.
    #[darling(default)]
    pub instance_name: Option<String>
}

/// A parsed association with its kind and property name settled.
#[derive(Debug)]
pub struct AssociationDef {
    /// Association kind.
    pub kind: AssociationKind,

    /// Owning property name.
    pub property_name: String,

    /// Remaining options.
    pub attrs: AssociationAttrs
}

impl AssociationDef {
    /// Parse a `#[model_association(...)]` attribute.
    ///
    /// `member` is the emitted name of the carrying field, if any; a
    /// struct-level declaration has none and must name `property_name`
    /// itself.
    pub fn from_attr(
        attr: &Attribute,
        member: Option<&str>
    ) -> darling::Result<Self> {
        let attrs = AssociationAttrs::from_meta(&attr.meta)?;

        let kinds = [
            (attrs.has_many, AssociationKind::HasMany),
            (attrs.belongs_to, AssociationKind::BelongsTo),
            (attrs.has_one, AssociationKind::HasOne)
        ];
        let mut named = kinds.iter().filter(|(flag, _)| flag.is_present());
        let kind = match (named.next(), named.next()) {
            (Some((_, kind)), None) => *kind,
            _ => {
                return Err(darling::Error::custom(
                    "specify exactly one of `has_many`, `belongs_to`, `has_one`"
                )
                .with_span(attr));
            }
        };

        let property_name = match (&attrs.property_name, member) {
            (Some(name), _) => name.clone(),
            (None, Some(member)) => member.to_string(),
            (None, None) => {
                return Err(darling::Error::custom(
                    "a struct-level #[model_association] requires `property_name`"
                )
                .with_span(attr));
            }
        };

        Ok(Self {
            kind,
            property_name,
            attrs
        })
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn member_association_with_path_target() {
        let attr: Attribute = parse_quote! {
            #[model_association(belongs_to, model = Author, foreign_key = "authorId")]
        };
        let assoc = AssociationDef::from_attr(&attr, Some("author_id")).unwrap();
        assert_eq!(assoc.kind, AssociationKind::BelongsTo);
        assert_eq!(assoc.property_name, "author_id");
        assert!(matches!(assoc.attrs.model, TargetModel::Path(_)));
        assert_eq!(assoc.attrs.foreign_key.as_deref(), Some("authorId"));
    }

    #[test]
    fn string_target_is_kept_verbatim() {
        let attr: Attribute = parse_quote! {
            #[model_association(has_many, model = "MyApp.model.Chapter")]
        };
        let assoc = AssociationDef::from_attr(&attr, Some("chapters")).unwrap();
        match &assoc.attrs.model {
            TargetModel::Name(name) => assert_eq!(name, "MyApp.model.Chapter"),
            other => panic!("expected literal target, got {other:?}")
        }
    }

    #[test]
    fn kind_is_mandatory_and_exclusive() {
        let attr: Attribute = parse_quote! {
            #[model_association(model = Author)]
        };
        assert!(AssociationDef::from_attr(&attr, Some("a")).is_err());

        let attr: Attribute = parse_quote! {
            #[model_association(has_many, has_one, model = Author)]
        };
        assert!(AssociationDef::from_attr(&attr, Some("a")).is_err());
    }

    #[test]
    fn struct_level_requires_property_name() {
        let attr: Attribute = parse_quote! {
            #[model_association(has_many, model = Chapter)]
        };
        assert!(AssociationDef::from_attr(&attr, None).is_err());

        let attr: Attribute = parse_quote! {
            #[model_association(has_many, model = Chapter, property_name = "chapters")]
        };
        let assoc = AssociationDef::from_attr(&attr, None).unwrap();
        assert_eq!(assoc.property_name, "chapters");
    }

    #[test]
    fn missing_model_is_rejected() {
        let attr: Attribute = parse_quote! {
            #[model_association(has_many)]
        };
        assert!(AssociationDef::from_attr(&attr, Some("a")).is_err());
    }
}
