//! Shared validation helpers for inbound HTTP adapters.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{CategoryValidationError, Error, QuestionValidationError};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidInteger,
    OutOfRange,
    Blank,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidInteger => "invalid_integer",
            Self::OutOfRange => "out_of_range",
            Self::Blank => "blank",
        }
    }
}

/// Newtype wrapper for wire field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: ValidationCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

/// A required field was absent or `null`.
pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ValidationCode::MissingField,
        format!("missing required field: {name}"),
    )
}

/// Require an optional body field, naming it when absent.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Map a question validation failure onto the field it concerns.
pub(crate) fn question_field_error(error: &QuestionValidationError) -> Error {
    let code = match error {
        QuestionValidationError::EmptyQuestion | QuestionValidationError::EmptyAnswer => {
            ValidationCode::Blank
        }
        QuestionValidationError::InvalidId { .. }
        | QuestionValidationError::InvalidDifficulty { .. } => ValidationCode::OutOfRange,
    };
    field_error(FieldName(error.field()), code, error.to_string())
}

/// Map a category id validation failure onto `field`.
pub(crate) fn category_field_error(field: FieldName, error: &CategoryValidationError) -> Error {
    field_error(field, ValidationCode::OutOfRange, error.to_string())
}

/// Integer accepted either as a JSON number or as a numeric string.
///
/// The trivia web client posts form values, so ids and ratings arrive as
/// `"3"` as often as `3`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseInteger {
    /// A JSON number.
    Number(i64),
    /// A string holding a decimal integer, surrounding whitespace allowed.
    Text(String),
}

impl LooseInteger {
    /// Resolve to an integer, naming `field` when the text is not numeric.
    pub(crate) fn resolve(&self, field: FieldName) -> Result<i64, Error> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => text.trim().parse().map_err(|_| {
                let name = field.as_str();
                field_error(
                    field,
                    ValidationCode::InvalidInteger,
                    format!("{name} must be an integer"),
                )
            }),
        }
    }
}

impl From<i64> for LooseInteger {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}
