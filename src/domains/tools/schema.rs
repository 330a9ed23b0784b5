//! Input validation primitives shared by all tool definitions.
//!
//! Each tool validates its raw JSON input field by field using these helpers,
//! collecting `FieldError`s in declaration order. Defaults are applied as an
//! explicit fill step after a field has been checked, never as a hidden
//! side effect of deserialization.

use serde::Serialize;
use serde_json::Value;

/// A single validation failure, addressed by field path.
///
/// The list of field errors is serialized verbatim into the `details` array
/// of a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field path within the input object. Empty for body-level errors.
    pub path: String,

    /// Caller-facing message, e.g. `"message is required"`.
    pub message: String,
}

impl FieldError {
    /// Create a field error with an explicit message.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Standard "required field missing" error.
    pub fn required(field: &str) -> Self {
        Self::new(field, format!("{field} is required"))
    }

    /// Standard "wrong type, expected string" error.
    pub fn expected_string(field: &str) -> Self {
        Self::new(field, format!("{field} must be a string"))
    }
}

/// Check that the raw input is an object (or null, which counts as an empty
/// object so that required-field errors can still be reported per field).
pub fn ensure_object(input: &Value) -> Result<(), Vec<FieldError>> {
    match input {
        Value::Object(_) | Value::Null => Ok(()),
        _ => Err(vec![FieldError::new("", "input must be an object")]),
    }
}

/// Extract a required string field.
pub fn required_str(input: &Value, field: &str) -> Result<String, FieldError> {
    match input.get(field) {
        None | Some(Value::Null) => Err(FieldError::required(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(FieldError::expected_string(field)),
    }
}

/// Extract an optional string field, substituting `default` when the field
/// is absent (or null). A present-but-empty string is kept as-is.
pub fn optional_str_or(input: &Value, field: &str, default: &str) -> Result<String, FieldError> {
    match input.get(field) {
        None | Some(Value::Null) => Ok(default.to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(FieldError::expected_string(field)),
    }
}

/// Extract an optional string field with no default.
pub fn optional_str(input: &Value, field: &str) -> Result<Option<String>, FieldError> {
    match input.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(FieldError::expected_string(field)),
    }
}
