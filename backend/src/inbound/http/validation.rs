//! Shared request parsing helpers for inbound HTTP adapters.

use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::Error;

/// Newtype wrapper for HTTP field names.
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

/// Build the unprocessable error raised when a required field is absent.
pub(crate) fn missing_field_error(field: FieldName) -> Error {
    Error::unprocessable(format!("missing required field: {}", field.as_str()))
        .with_details(json!({ "field": field.as_str() }))
}

/// Integer field that clients may send either as a JSON number or as a
/// string holding a number, e.g. `3` or `"3"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i32),
    Text(String),
}

impl IntOrString {
    /// Integer value, or `None` for blank or non-numeric text.
    pub fn to_int(&self) -> Option<i32> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// Resolve an optional [`IntOrString`] field, treating unusable text as
/// absent.
pub(crate) fn optional_int(value: Option<&IntOrString>) -> Option<i32> {
    value.and_then(IntOrString::to_int)
}

/// Resolve a required [`IntOrString`] field.
pub(crate) fn required_int(value: Option<&IntOrString>, field: FieldName) -> Result<i32, Error> {
    optional_int(value).ok_or_else(|| missing_field_error(field))
}
