use serde_json::{json, Value};

use super::{Schema, Scope};
use crate::error::{SchemaError, SchemaResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct Bool;

impl Schema for Bool {
    type Output = bool;

    fn validate(&self, value: &Value, scope: &Scope<'_>) -> SchemaResult<bool> {
        value.as_bool().ok_or_else(|| SchemaError::type_mismatch(scope.path(), "boolean", value))
    }

    fn describe(&self) -> Value {
        json!({ "type": "boolean" })
    }
}

/// Any JSON number, kept exactly as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct Number;

impl Schema for Number {
    type Output = serde_json::Number;

    fn validate(&self, value: &Value, scope: &Scope<'_>) -> SchemaResult<serde_json::Number> {
        match value {
            Value::Number(n) => Ok(n.clone()),
            _ => Err(SchemaError::type_mismatch(scope.path(), "number", value)),
        }
    }

    fn describe(&self) -> Value {
        json!({ "type": "number" })
    }
}

/// Any string with at least one non-whitespace character.
#[derive(Debug, Clone, Copy)]
pub struct NonEmptyString {
    pub expected: &'static str,
}

impl Schema for NonEmptyString {
    type Output = String;

    fn validate(&self, value: &Value, scope: &Scope<'_>) -> SchemaResult<String> {
        let s = value.as_str().ok_or_else(|| {
            SchemaError::type_mismatch(scope.path(), "string", value)
        })?;
        if s.trim().is_empty() {
            return Err(SchemaError::value_pattern(scope.path(), value, self.expected));
        }
        Ok(s.to_string())
    }

    fn describe(&self) -> Value {
        json!({ "type": "string", "minLength": 1, "description": self.expected })
    }
}

/// Homogeneous array; every element is validated, the first failure aborts.
#[derive(Debug, Clone, Copy)]
pub struct ArrayOf<S> {
    pub item: S,
}

impl<S: Schema> Schema for ArrayOf<S> {
    type Output = Vec<S::Output>;

    fn validate(&self, value: &Value, scope: &Scope<'_>) -> SchemaResult<Self::Output> {
        let xs = value.as_array().ok_or_else(|| {
            SchemaError::type_mismatch(scope.path(), "array", value)
        })?;
        xs.iter()
            .enumerate()
            .map(|(i, x)| self.item.validate(x, &scope.index(i)))
            .collect()
    }

    fn describe(&self) -> Value {
        json!({ "type": "array", "items": self.item.describe() })
    }
}
