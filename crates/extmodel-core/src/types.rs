// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

//! Field types valid in an Ext JS / Sencha Touch model.
//!
//! [`ModelType`] mirrors the client-side field type enumeration and carries
//! the autodetection table: a static mapping from Rust native type names to
//! emitted field types. Autodetection never fails; unknown native types fall
//! back to [`ModelType::Auto`].

use std::fmt;

use serde::Serialize;

/// Field type as understood by the client-side data framework.
///
/// # Autodetection
///
/// | Native type names | Detected type |
/// |-------------------|---------------|
/// | `i8`–`i128`, `u8`–`u128`, `isize`, `usize`, `BigInt` | [`Integer`](ModelType::Integer) |
/// | `f32`, `f64`, `Decimal` | [`Float`](ModelType::Float) |
/// | `String`, `str` | [`String`](ModelType::String) |
/// | `bool` | [`Boolean`](ModelType::Boolean) |
/// | `DateTime`, `NaiveDate`, `NaiveDateTime`, `Date`, `OffsetDateTime`, `PrimitiveDateTime`, `SystemTime` | [`Date`](ModelType::Date) |
/// | anything else | [`Auto`](ModelType::Auto) |
///
/// Date detection covers both the chrono and time crates; `Decimal` covers
/// rust_decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ModelType {
    /// No conversion on the client; the raw value is kept as-is.
    Auto,
    /// Integral number, emitted as `"int"`.
    Integer,
    /// Floating point number, emitted as `"float"`.
    Float,
    /// Alias for [`Float`](ModelType::Float), emitted as `"number"`.
    Number,
    /// Text, emitted as `"string"`.
    String,
    /// Date or timestamp, emitted as `"date"`.
    Date,
    /// Boolean, emitted as `"boolean"`.
    Boolean
}

impl ModelType {
    /// Name of the type in the emitted document.
    #[must_use]
    pub fn js_name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Integer => "int",
            Self::Float => "float",
            Self::Number => "number",
            Self::String => "string",
            Self::Date => "date",
            Self::Boolean => "boolean"
        }
    }

    /// Whether this type matches the given native (Rust) type name.
    ///
    /// The name is the bare last path segment of the type, e.g. `"i64"`,
    /// `"String"`, `"NaiveDate"`. [`Auto`](ModelType::Auto) matches nothing.
    #[must_use]
    pub fn supports(self, native: &str) -> bool {
        match self {
            Self::Auto => false,
            Self::Integer => matches!(
                native,
                "i8" | "i16"
                    | "i32"
                    | "i64"
                    | "i128"
                    | "isize"
                    | "u8"
                    | "u16"
                    | "u32"
                    | "u64"
                    | "u128"
                    | "usize"
                    | "BigInt"
            ),
            Self::Float | Self::Number => {
                matches!(native, "f32" | "f64" | "Decimal")
            }
            Self::String => matches!(native, "String" | "str"),
            Self::Date => matches!(
                native,
                "DateTime"
                    | "NaiveDate"
                    | "NaiveDateTime"
                    | "Date"
                    | "OffsetDateTime"
                    | "PrimitiveDateTime"
                    | "SystemTime"
            ),
            Self::Boolean => native == "bool"
        }
    }

    /// Detect the emitted type for a native (Rust) type name.
    ///
    /// Falls back to [`Auto`](ModelType::Auto) when no entry matches; this
    /// function is total and never fails.
    #[must_use]
    pub fn from_native(native: &str) -> Self {
        const DETECTABLE: [ModelType; 5] = [
            ModelType::Integer,
            ModelType::Float,
            ModelType::String,
            ModelType::Date,
            ModelType::Boolean,
        ];

        DETECTABLE
            .into_iter()
            .find(|t| t.supports(native))
            .unwrap_or(ModelType::Auto)
    }

    /// Whether the emitted value is a bare numeric or boolean literal.
    ///
    /// Decides default-value quoting: string and date defaults are quoted,
    /// numbers and booleans are not.
    #[must_use]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::Integer | Self::Float | Self::Number | Self::Boolean
        )
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.js_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_detect_as_int() {
        for native in ["i8", "i16", "i32", "i64", "u64", "usize", "BigInt"] {
            assert_eq!(ModelType::from_native(native), ModelType::Integer);
        }
    }

    #[test]
    fn floats_detect_as_float_not_number() {
        // Float and Number share a support table; detection resolves to
        // Float because it comes first.
        assert_eq!(ModelType::from_native("f64"), ModelType::Float);
        assert_eq!(ModelType::from_native("Decimal"), ModelType::Float);
        assert!(ModelType::Number.supports("f32"));
    }

    #[test]
    fn dates_cover_chrono_and_time() {
        for native in [
            "DateTime",
            "NaiveDate",
            "NaiveDateTime",
            "Date",
            "OffsetDateTime",
            "PrimitiveDateTime",
            "SystemTime",
        ] {
            assert_eq!(ModelType::from_native(native), ModelType::Date);
        }
    }

    #[test]
    fn unknown_falls_back_to_auto() {
        assert_eq!(ModelType::from_native("Uuid"), ModelType::Auto);
        assert_eq!(ModelType::from_native(""), ModelType::Auto);
    }

    #[test]
    fn auto_supports_nothing() {
        assert!(!ModelType::Auto.supports("i32"));
        assert!(!ModelType::Auto.supports("auto"));
    }

    #[test]
    fn js_names() {
        assert_eq!(ModelType::Integer.js_name(), "int");
        assert_eq!(ModelType::Number.js_name(), "number");
        assert_eq!(ModelType::Boolean.js_name(), "boolean");
    }

    #[test]
    fn literal_types() {
        assert!(ModelType::Integer.is_literal());
        assert!(ModelType::Boolean.is_literal());
        assert!(!ModelType::String.is_literal());
        assert!(!ModelType::Date.is_literal());
        assert!(!ModelType::Auto.is_literal());
    }
}
