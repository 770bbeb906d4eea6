// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

//! Client-side validator definitions and the well-formedness table.
//!
//! Each [`ValidationType`] has a fixed arity/shape contract its parameter
//! list must satisfy. The check is advisory: malformed validators are
//! reported as warnings at assembly but still emitted, generation is
//! best-effort per validator.
//!
//! # Well-formedness table
//!
//! | Kind | Requirement |
//! |------|-------------|
//! | `Generic` | has a parameter named `type` |
//! | `Digits` | exactly `integer` and `fraction`, both values `\d+` |
//! | `Format` | exactly one parameter `matcher`, non-blank |
//! | `Inclusion` | exactly one parameter `list` |
//! | `Length` | 1–2 parameters, `min` and/or `max`, values `\d+` |
//! | `Range` | 1–2 parameters, `min` and/or `max`, values `\d+(\.\d+)?` |
//! | everything else | always well-formed |

use std::fmt;

use serde::Serialize;

/// A single name/value validator parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationParam {
    /// Parameter name, e.g. `"min"`.
    pub name: String,

    /// Parameter value, kept verbatim as text.
    pub value: String
}

impl ValidationParam {
    /// Create a parameter.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into()
        }
    }
}

/// Kind of a client-side validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValidationType {
    /// Free-form validator; the emitted type comes from the `type`
    /// parameter and the remaining parameters pass through.
    Generic,
    /// Credit card number check.
    CreditCardNumber,
    /// Digit count check with `integer` and `fraction` parts.
    Digits,
    /// E-mail address format.
    Email,
    /// Regular expression match via the `matcher` parameter.
    Format,
    /// Date must lie in the future.
    Future,
    /// Value must be one of the `list` parameter entries.
    Inclusion,
    /// String length bounds via `min`/`max`.
    Length,
    /// Non-blank string.
    NotBlank,
    /// Date must lie in the past.
    Past,
    /// Value must be present.
    Presence,
    /// Numeric bounds via `min`/`max`.
    Range
}

impl ValidationType {
    /// Name of the validator in the emitted document.
    #[must_use]
    pub fn js_name(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::CreditCardNumber => "creditCardNumber",
            Self::Digits => "digits",
            Self::Email => "email",
            Self::Format => "format",
            Self::Future => "future",
            Self::Inclusion => "inclusion",
            Self::Length => "length",
            Self::NotBlank => "notBlank",
            Self::Past => "past",
            Self::Presence => "presence",
            Self::Range => "range"
        }
    }

    /// Whether the validator is built into the client framework rather
    /// than supplied by an extension.
    #[must_use]
    pub fn is_builtin(self) -> bool {
        matches!(
            self,
            Self::Email
                | Self::Format
                | Self::Inclusion
                | Self::Length
                | Self::Presence
        )
    }

    /// Check the parameter list against this kind's contract.
    ///
    /// Returns the reason when malformed. The caller turns this into a
    /// non-fatal warning; the validator is emitted either way.
    pub fn check(self, params: &[ValidationParam]) -> Result<(), &'static str> {
        match self {
            Self::Generic => {
                if param_exists(params, "type") {
                    Ok(())
                } else {
                    Err("missing `type` parameter")
                }
            }
            Self::Digits => {
                if params.len() != 2
                    || !param_exists(params, "integer")
                    || !param_exists(params, "fraction")
                {
                    Err("expects exactly `integer` and `fraction` parameters")
                } else if !params.iter().all(|p| is_integer(&p.value)) {
                    Err("`integer` and `fraction` values must be numeric")
                } else {
                    Ok(())
                }
            }
            Self::Format => match params {
                [p] if p.name == "matcher" && !p.value.trim().is_empty() => {
                    Ok(())
                }
                _ => Err("expects exactly one non-blank `matcher` parameter")
            },
            Self::Inclusion => match params {
                [p] if p.name == "list" => Ok(()),
                _ => Err("expects exactly one `list` parameter")
            },
            Self::Length => check_bounds(params, is_integer)
                .map_err(|_| "expects numeric `min` and/or `max` parameters"),
            Self::Range => check_bounds(params, is_decimal)
                .map_err(|_| "expects numeric `min` and/or `max` parameters"),
            Self::CreditCardNumber
            | Self::Email
            | Self::Future
            | Self::NotBlank
            | Self::Past
            | Self::Presence => Ok(())
        }
    }
}

impl fmt::Display for ValidationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.js_name())
    }
}

/// Definition of a single validator attached to a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelValidation {
    /// Kind of the validator.
    pub kind: ValidationType,

    /// Name of the field the validator applies to.
    pub field: String,

    /// Ordered name/value parameter list, emitted verbatim.
    pub params: Vec<ValidationParam>
}

impl ModelValidation {
    /// Create a validator for a field with the given parameters.
    pub fn new(
        kind: ValidationType,
        field: impl Into<String>,
        params: Vec<ValidationParam>
    ) -> Self {
        Self {
            kind,
            field: field.into(),
            params
        }
    }
}

fn param_exists(params: &[ValidationParam], name: &str) -> bool {
    params.iter().any(|p| p.name == name)
}

fn is_integer(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn is_decimal(value: &str) -> bool {
    match value.split_once('.') {
        Some((int, frac)) => is_integer(int) && is_integer(frac),
        None => is_integer(value)
    }
}

/// Shared min/max contract of `Length` and `Range`: one or two parameters,
/// at least one of `min`/`max` present, every value numeric per `valid`.
fn check_bounds(
    params: &[ValidationParam],
    valid: fn(&str) -> bool
) -> Result<(), ()> {
    let arity_ok = matches!(params.len(), 1 | 2);
    let bound_present =
        param_exists(params, "min") || param_exists(params, "max");
    if arity_ok && bound_present && params.iter().all(|p| valid(&p.value)) {
        Ok(())
    } else {
        Err(())
    }
}
