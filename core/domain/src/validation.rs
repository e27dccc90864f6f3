//! Request payload validation
//!
//! Payloads are plain data records; the checks serde cannot express live in a
//! separate [`Validate`] implementation. Failures are reported per field with
//! a location path such as `["body", "name"]`.

use serde::Serialize;
use thiserror::Error;

pub type ValidationResult = Result<(), ValidationError>;

/// Validation checks for a deserialized payload
pub trait Validate {
    fn validate(&self) -> ValidationResult;
}

/// A single failed check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Location of the offending value, e.g. `["body", "name"]`
    pub loc: Vec<String>,
    /// Human readable message
    pub msg: String,
    /// Machine readable error kind
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new<I, S>(loc: I, msg: impl Into<String>, kind: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            loc: loc.into_iter().map(Into::into).collect(),
            msg: msg.into(),
            kind: kind.into(),
        }
    }
}

/// All failed checks for one request
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("validation failed: {}", summary(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a validation error with a single entry
    pub fn single(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Ok(())` when nothing was collected
    pub fn into_result(self) -> ValidationResult {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.loc.join("."), e.msg))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_is_ok() {
        assert!(ValidationError::new().into_result().is_ok());
    }

    #[test]
    fn test_display_lists_every_field() {
        let mut errors = ValidationError::new();
        errors.push(FieldError::new(["body", "name"], "must not be blank", "string_too_short"));
        errors.push(FieldError::new(["path", "id"], "not an integer", "int_parsing"));

        let err = errors.into_result().unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation failed: body.name: must not be blank; path.id: not an integer"
        );
    }

    #[test]
    fn test_field_error_serializes_kind_as_type() {
        let error = FieldError::new(["body"], "missing field `units`", "missing");
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "loc": ["body"],
                "msg": "missing field `units`",
                "type": "missing"
            })
        );
    }
}
