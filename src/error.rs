//! Validation errors.
//!
//! Every hard failure carries the [`FieldPath`] of the offending value so an outer
//! layer (HTTP, CLI) can render a precise message. `KeyPatternMismatch` is the one
//! kind that is normally recovered locally: records drop the entry instead of failing.
use serde_json::Value;
use thiserror::Error;

use crate::path::FieldPath;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A dictionary key does not match the key grammar of its record.
    #[error("key {key:?} does not match {expected}")]
    KeyPatternMismatch { key: String, expected: String },
    /// A primitive fails its regex or literal table.
    #[error("invalid value {actual}: must be {expected}")]
    ValuePatternMismatch { actual: String, expected: String },
    /// None of the candidate shapes of a variant matched.
    #[error("expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: &'static str },
    #[error("missing required field {field:?}")]
    MissingRequiredField { field: String },
    /// Structurally the wrong JSON kind (e.g. an array where an object was expected).
    #[error("expected {expected}, got {actual}")]
    TypeMismatch { expected: &'static str, actual: &'static str },
    /// Only raised when undeclared fields are denied.
    #[error("unknown field {field:?}")]
    UnknownField { field: String },
}

impl ErrorKind {
    /// Stable identifier, suitable for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::KeyPatternMismatch { .. } => "KEY_PATTERN_MISMATCH",
            ErrorKind::ValuePatternMismatch { .. } => "VALUE_PATTERN_MISMATCH",
            ErrorKind::ShapeMismatch { .. } => "SHAPE_MISMATCH",
            ErrorKind::MissingRequiredField { .. } => "MISSING_REQUIRED_FIELD",
            ErrorKind::TypeMismatch { .. } => "TYPE_MISMATCH",
            ErrorKind::UnknownField { .. } => "UNKNOWN_FIELD",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {kind}")]
pub struct SchemaError {
    path: FieldPath,
    kind: ErrorKind,
}

pub type SchemaResult<T> = Result<T, SchemaError>;

impl SchemaError {
    pub fn new(path: FieldPath, kind: ErrorKind) -> Self {
        Self { path, kind }
    }

    pub fn key_pattern(path: &FieldPath, key: &str, expected: impl Into<String>) -> Self {
        Self::new(path.clone(), ErrorKind::KeyPatternMismatch {
            key: key.to_string(),
            expected: expected.into(),
        })
    }

    pub fn value_pattern(path: &FieldPath, actual: &Value, expected: impl Into<String>) -> Self {
        Self::new(path.clone(), ErrorKind::ValuePatternMismatch {
            actual: actual.to_string(),
            expected: expected.into(),
        })
    }

    pub fn shape(path: &FieldPath, expected: impl Into<String>, actual: &Value) -> Self {
        Self::new(path.clone(), ErrorKind::ShapeMismatch {
            expected: expected.into(),
            actual: json_kind(actual),
        })
    }

    pub fn missing_field(path: &FieldPath, field: &str) -> Self {
        Self::new(path.key(field), ErrorKind::MissingRequiredField { field: field.to_string() })
    }

    pub fn type_mismatch(path: &FieldPath, expected: &'static str, actual: &Value) -> Self {
        Self::new(path.clone(), ErrorKind::TypeMismatch { expected, actual: json_kind(actual) })
    }

    pub fn unknown_field(path: &FieldPath, field: &str) -> Self {
        Self::new(path.key(field), ErrorKind::UnknownField { field: field.to_string() })
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// True when the value was rejected for its JSON kind alone, before any of its
    /// content was inspected.
    pub fn is_kind_miss_at(&self, path: &FieldPath) -> bool {
        matches!(self.kind, ErrorKind::TypeMismatch { .. }) && &self.path == path
    }
}

/// JSON kind name used in error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
