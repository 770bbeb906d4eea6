// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

//! Validation attribute parsing.
//!
//! `#[model_validation(kind, name = "value", ...)]` does not fit darling's
//! key-value model: the parameter names are free-form and `type` — the
//! natural parameter name for a generic validator — is a Rust keyword. The
//! attribute is parsed manually, with `Ident::parse_any` so keywords pass.
//!
//! Only the kind name and attribute structure are checked here. Parameter
//! arity and shape are checked later, during assembly, where problems
//! surface as warnings instead of compile errors.

use syn::{
    Attribute, LitStr, Token,
    ext::IdentExt,
    parse::{Parse, ParseStream}
};

/// A parsed validator declaration.
#[derive(Debug)]
pub struct ValidationDef {
    /// Variant name of the corresponding runtime `ValidationType`.
    pub kind: &'static str,

    /// Validated field name.
    pub field: String,

    /// Ordered parameter name/value pairs, uninterpreted.
    pub params: Vec<(String, String)>
}

impl ValidationDef {
    /// Parse a `#[model_validation(...)]` attribute.
    ///
    /// `member` is the emitted name of the carrying field, if any. A
    /// struct-level declaration must carry `field = "..."` instead; a
    /// member-level one may use it to override.
    pub fn from_attr(
        attr: &Attribute,
        member: Option<&str>
    ) -> darling::Result<Self> {
        let raw: RawValidation = attr
            .parse_args()
            .map_err(|e| darling::Error::from(e).with_span(attr))?;

        let kind = match kind_variant(&raw.kind.to_string()) {
            Some(kind) => kind,
            None => {
                return Err(darling::Error::unknown_value(
                    &raw.kind.to_string()
                )
                .with_span(&raw.kind));
            }
        };

        let field = match (raw.field, member) {
            (Some(field), _) => field,
            (None, Some(member)) => member.to_string(),
            (None, None) => {
                return Err(darling::Error::custom(
                    "a struct-level #[model_validation] requires `field`"
                )
                .with_span(attr));
            }
        };

        Ok(Self {
            kind,
            field,
            params: raw.params
        })
    }
}

/// Raw attribute body: a kind ident followed by `name = "value"` pairs.
struct RawValidation {
    kind: syn::Ident,
    field: Option<String>,
    params: Vec<(String, String)>
}

impl Parse for RawValidation {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let kind: syn::Ident = input.parse()?;
        let mut field = None;
        let mut params = Vec::new();

        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            let name = syn::Ident::parse_any(input)?;
            input.parse::<Token![=]>()?;
            let value: LitStr = input.parse()?;
            if name == "field" {
                field = Some(value.value());
            } else {
                params.push((name.to_string(), value.value()));
            }
        }

        Ok(Self {
            kind,
            field,
            params
        })
    }
}

fn kind_variant(name: &str) -> Option<&'static str> {
    Some(match name {
        "presence" => "Presence",
        "format" => "Format",
        "length" => "Length",
        "range" => "Range",
        "email" => "Email",
        "future" => "Future",
        "past" => "Past",
        "digits" => "Digits",
        "inclusion" => "Inclusion",
        "not_blank" => "NotBlank",
        "credit_card_number" => "CreditCardNumber",
        "generic" => "Generic",
        _ => return None
    })
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn bare_kind_on_a_member() {
        let attr: Attribute = parse_quote! {
            #[model_validation(presence)]
        };
        let def = ValidationDef::from_attr(&attr, Some("title")).unwrap();
        assert_eq!(def.kind, "Presence");
        assert_eq!(def.field, "title");
        assert!(def.params.is_empty());
    }

    #[test]
    fn parameters_keep_order() {
        let attr: Attribute = parse_quote! {
            #[model_validation(length, min = "1", max = "255")]
        };
        let def = ValidationDef::from_attr(&attr, Some("isbn")).unwrap();
        assert_eq!(def.kind, "Length");
        assert_eq!(
            def.params,
            vec![
                ("min".to_string(), "1".to_string()),
                ("max".to_string(), "255".to_string())
            ]
        );
    }

    #[test]
    fn type_keyword_is_a_valid_parameter_name() {
        let attr: Attribute = parse_quote! {
            #[model_validation(generic, type = "uniqueUsername", strict = "true")]
        };
        let def = ValidationDef::from_attr(&attr, Some("name")).unwrap();
        assert_eq!(def.kind, "Generic");
        assert_eq!(def.params[0], ("type".to_string(), "uniqueUsername".to_string()));
    }

    #[test]
    fn struct_level_requires_field() {
        let attr: Attribute = parse_quote! {
            #[model_validation(email)]
        };
        assert!(ValidationDef::from_attr(&attr, None).is_err());

        let attr: Attribute = parse_quote! {
            #[model_validation(email, field = "contact")]
        };
        let def = ValidationDef::from_attr(&attr, None).unwrap();
        assert_eq!(def.field, "contact");
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let attr: Attribute = parse_quote! {
            #[model_validation(sparkle)]
        };
        assert!(ValidationDef::from_attr(&attr, Some("title")).is_err());

        // Kinds outside the fixed runtime enumeration are unknown too.
        let attr: Attribute = parse_quote! {
            #[model_validation(url)]
        };
        assert!(ValidationDef::from_attr(&attr, Some("homepage")).is_err());
    }

    #[test]
    fn malformed_parameters_are_not_checked_here() {
        // Wrong arity for digits; the assembler reports it, not the macro.
        let attr: Attribute = parse_quote! {
            #[model_validation(digits, integer = "2")]
        };
        assert!(ValidationDef::from_attr(&attr, Some("amount")).is_ok());
    }
}
