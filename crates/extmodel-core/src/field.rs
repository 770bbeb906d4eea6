// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

//! Field definitions and the type/default resolution rules.
//!
//! Every field resolves to exactly one emitted type with a fixed
//! precedence: a custom type wins over an explicit [`ModelType`], which
//! wins over autodetection from the native type; with nothing to go on the
//! result is `auto`. Default values have their own three-way rule, see
//! [`ModelField::resolve_default`].

use serde::Serialize;

use crate::{ModelType, ReferenceConfig};

/// Resolved emitted type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType<'a> {
    /// A custom field type, emitted verbatim.
    Custom(&'a str),
    /// One of the standard types.
    Standard(ModelType)
}

impl<'a> FieldType<'a> {
    /// Name of the type in the emitted document.
    #[must_use]
    pub fn js_name(&self) -> &'a str {
        match self {
            Self::Custom(name) => name,
            Self::Standard(ty) => ty.js_name()
        }
    }

    /// The standard type, if this is not a custom one.
    #[must_use]
    pub fn standard(&self) -> Option<ModelType> {
        match self {
            Self::Custom(_) => None,
            Self::Standard(ty) => Some(*ty)
        }
    }
}

/// Resolved default value of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue<'a> {
    /// No default; the property is omitted entirely.
    Omit,
    /// The `undefined` sentinel: emit the "no value" marker to suppress
    /// implicit defaulting on the client.
    Undefined,
    /// A literal default. Quoting is decided by the resolved field type,
    /// not by parsing the string.
    Literal(&'a str)
}

/// Definition of a single model field.
///
/// Plain owned data; immutable once constructed. Built by
/// `#[derive(ExtModel)]` or by hand with struct update syntax:
///
/// ```rust
/// use extmodel_core::{ModelField, ModelType};
///
/// let field = ModelField {
///     name: "lastLogin".into(),
///     ty: Some(ModelType::Date),
///     date_format: Some("c".into()),
///     ..ModelField::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelField {
    /// Field name as emitted.
    pub name: String,

    /// Explicit field type. `None` or [`ModelType::Auto`] means
    /// unspecified, enabling autodetection from
    /// [`native_type`](Self::native_type).
    pub ty: Option<ModelType>,

    /// Custom field type, emitted verbatim. Takes precedence over
    /// [`ty`](Self::ty).
    pub custom_type: Option<String>,

    /// Bare name of the native type backing this field, e.g. `"i64"`.
    /// `None` disables autodetection (virtual fields).
    pub native_type: Option<String>,

    /// Raw default value. Empty or absent emits no default; the
    /// [`DEFAULT_VALUE_UNDEFINED`](Self::DEFAULT_VALUE_UNDEFINED) sentinel
    /// emits the "no value" marker.
    pub default_value: Option<String>,

    /// Date parse format. Only meaningful when the resolved type is
    /// [`ModelType::Date`]; ignored otherwise.
    pub date_format: Option<String>,

    /// Use null when a value cannot be parsed, instead of the type's zero
    /// value. Synonym of [`allow_null`](Self::allow_null); when both are
    /// set their OR applies, and an explicit true/false disagreement is
    /// reported as a configuration conflict.
    pub use_null: Option<bool>,

    /// Current name of the [`use_null`](Self::use_null) flag.
    pub allow_null: Option<bool>,

    /// Whether an empty string is a valid value.
    pub allow_blank: Option<bool>,

    /// Whether the value must be unique within the store.
    pub unique: bool,

    /// Mapping expression extracting the value from raw data.
    pub mapping: Option<String>,

    /// Whether the field is written back to the server. Defaults to true;
    /// only the `false` case is emitted.
    pub persist: bool,

    /// A critical field is always sent to the server even when unchanged.
    pub critical: bool,

    /// Names of fields this field's value depends on.
    pub depends: Vec<String>,

    /// Convert function body coercing raw values into the field's type.
    pub convert: Option<String>,

    /// Calculate function body deriving the value from record data.
    pub calculate: Option<String>,

    /// Reference to another model.
    pub reference: Option<ReferenceConfig>
}

impl Default for ModelField {
    fn default() -> Self {
        Self {
            name: String::new(),
            ty: None,
            custom_type: None,
            native_type: None,
            default_value: None,
            date_format: None,
            use_null: None,
            allow_null: None,
            allow_blank: None,
            unique: false,
            mapping: None,
            persist: true,
            critical: false,
            depends: Vec::new(),
            convert: None,
            calculate: None,
            reference: None
        }
    }
}

impl ModelField {
    /// Sentinel for [`default_value`](Self::default_value): emit the
    /// "no value" marker instead of a literal, preventing the client from
    /// defaulting the field.
    pub const DEFAULT_VALUE_UNDEFINED: &'static str = "undefined";

    /// Resolve the emitted type.
    ///
    /// Precedence: custom type, then explicit type, then autodetection
    /// from the native type, then `auto`. An explicit [`ModelType::Auto`]
    /// counts as unspecified and still autodetects. Pure and total;
    /// unresolvable types are never an error.
    #[must_use]
    pub fn resolve_type(&self) -> FieldType<'_> {
        if let Some(custom) = self.custom_type.as_deref()
            && !custom.is_empty()
        {
            return FieldType::Custom(custom);
        }
        if let Some(ty) = self.ty
            && ty != ModelType::Auto
        {
            return FieldType::Standard(ty);
        }
        match self.native_type.as_deref() {
            Some(native) => FieldType::Standard(ModelType::from_native(native)),
            None => FieldType::Standard(ModelType::Auto)
        }
    }

    /// Resolve the default value.
    ///
    /// Empty or absent resolves to [`DefaultValue::Omit`]; the
    /// [`DEFAULT_VALUE_UNDEFINED`](Self::DEFAULT_VALUE_UNDEFINED) sentinel
    /// to [`DefaultValue::Undefined`]; anything else is a literal.
    #[must_use]
    pub fn resolve_default(&self) -> DefaultValue<'_> {
        match self.default_value.as_deref() {
            None | Some("") => DefaultValue::Omit,
            Some(Self::DEFAULT_VALUE_UNDEFINED) => DefaultValue::Undefined,
            Some(literal) => DefaultValue::Literal(literal)
        }
    }

    /// Effective nullability flag, the OR of the two synonyms.
    ///
    /// Returns `None` when neither flag is set. Whether the two flags
    /// disagree is checked separately by
    /// [`nullability_conflict`](Self::nullability_conflict).
    #[must_use]
    pub fn effective_allow_null(&self) -> Option<bool> {
        match (self.use_null, self.allow_null) {
            (None, None) => None,
            (a, b) => Some(a.unwrap_or(false) || b.unwrap_or(false))
        }
    }

    /// Whether `use_null` and `allow_null` are both set and disagree.
    #[must_use]
    pub fn nullability_conflict(&self) -> bool {
        matches!(
            (self.use_null, self.allow_null),
            (Some(a), Some(b)) if a != b
        )
    }
}
