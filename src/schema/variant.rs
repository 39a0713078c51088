//! Ordered trial over a closed set of shapes.
//!
//! Shapes are attempted in declaration order and the first success wins. A shape
//! that rejects the input for its JSON kind alone is a plain miss; a shape that
//! accepted the kind and then failed inside it has *committed*, and its error is the
//! one worth reporting. When every shape fails, the last committed failure is
//! surfaced, otherwise a `ShapeMismatch` listing every shape.
use serde_json::{json, Value};

use super::{Schema, Scope};
use crate::error::{SchemaError, SchemaResult};

/// One candidate of a [`Variant`], producing the variant's common output type.
pub trait Shape<T> {
    fn label(&self) -> &'static str;
    fn attempt(&self, value: &Value, scope: &Scope<'_>) -> SchemaResult<T>;
    fn describe(&self) -> Value;
}

struct Mapped<S, F> {
    label: &'static str,
    schema: S,
    wrap: F,
}

impl<T, S, F> Shape<T> for Mapped<S, F>
where
    S: Schema,
    F: Fn(S::Output) -> T,
{
    fn label(&self) -> &'static str {
        self.label
    }

    fn attempt(&self, value: &Value, scope: &Scope<'_>) -> SchemaResult<T> {
        self.schema.validate(value, scope).map(&self.wrap)
    }

    fn describe(&self) -> Value {
        self.schema.describe()
    }
}

pub struct Variant<T> {
    shapes: Vec<Box<dyn Shape<T> + Send + Sync>>,
}

impl<T> Default for Variant<T> {
    fn default() -> Self {
        Self { shapes: Vec::new() }
    }
}

impl<T: 'static> Variant<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate; `wrap` lifts the shape's output into the variant type.
    pub fn shape<S, F>(mut self, label: &'static str, schema: S, wrap: F) -> Self
    where
        S: Schema + Send + Sync + 'static,
        F: Fn(S::Output) -> T + Send + Sync + 'static,
    {
        self.shapes.push(Box::new(Mapped { label, schema, wrap }));
        self
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.shapes.iter().map(|s| s.label()).collect()
    }

    fn expected(&self) -> String {
        match self.labels().as_slice() {
            [] => "nothing".to_string(),
            [only] => only.to_string(),
            [init @ .., last] => format!("{}, or {}", init.join(", "), last),
        }
    }
}

impl<T: 'static> Schema for Variant<T> {
    type Output = T;

    fn validate(&self, value: &Value, scope: &Scope<'_>) -> SchemaResult<T> {
        let mut committed: Option<SchemaError> = None;
        for shape in &self.shapes {
            match shape.attempt(value, scope) {
                Ok(out) => {
                    tracing::trace!(path = %scope.path(), shape = shape.label(), "variant resolved");
                    return Ok(out);
                }
                Err(error) if error.is_kind_miss_at(scope.path()) => {
                    tracing::trace!(path = %scope.path(), shape = shape.label(), "shape does not apply");
                }
                Err(error) => {
                    tracing::trace!(path = %scope.path(), shape = shape.label(), %error, "shape failed");
                    committed = Some(error);
                }
            }
        }
        Err(committed.unwrap_or_else(|| SchemaError::shape(scope.path(), self.expected(), value)))
    }

    fn describe(&self) -> Value {
        let arms: Vec<Value> = self.shapes.iter().map(|s| s.describe()).collect();
        json!({ "oneOf": arms })
    }
}
