//! Schema combinators.
//!
//! A [`Schema`] turns an untyped `serde_json::Value` into a typed value or a
//! [`SchemaError`]. The leaves are refinements (regex patterns, literal tables); the
//! combinators on top of them are:
//!
//! - [`Variant`]: ordered trial over a closed set of shapes,
//! - [`Record`]: open dictionary with independent key admission and value validation,
//! - [`ObjectReader`]: fixed-shape struct with required/optional named fields.
//!
//! Schemas hold no mutable state; the category schemas are built once as `Lazy`
//! statics and shared by every call.
pub mod refine;
pub mod primitive;
pub mod variant;
pub mod record;
pub mod object;

use serde_json::Value;

use crate::error::SchemaResult;
use crate::options::Options;
use crate::path::FieldPath;

pub use refine::{Literal, OneOf, Pattern};
pub use primitive::{ArrayOf, Bool, NonEmptyString, Number};
pub use variant::{Shape, Variant};
pub use record::{KeyRule, Record};
pub use object::{ObjectReader, ObjectShape};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// Where a validator is looking, and under which options.
#[derive(Debug, Clone)]
pub struct Scope<'o> {
    path: FieldPath,
    options: &'o Options,
}

pub trait Schema {
    type Output;

    fn validate(&self, value: &Value, scope: &Scope<'_>) -> SchemaResult<Self::Output>;

    /// JSON-Schema fragment describing the accepted input.
    fn describe(&self) -> Value;
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl<'o> Scope<'o> {
    pub fn new(options: &'o Options) -> Self {
        Self { path: FieldPath::root(), options }
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn options(&self) -> &'o Options {
        self.options
    }

    pub fn key(&self, key: &str) -> Scope<'o> {
        Scope { path: self.path.key(key), options: self.options }
    }

    pub fn index(&self, index: usize) -> Scope<'o> {
        Scope { path: self.path.index(index), options: self.options }
    }
}

impl<S: Schema + ?Sized> Schema for &S {
    type Output = S::Output;

    fn validate(&self, value: &Value, scope: &Scope<'_>) -> SchemaResult<Self::Output> {
        (**self).validate(value, scope)
    }

    fn describe(&self) -> Value {
        (**self).describe()
    }
}

/// Validate `value` at the document root.
pub fn validate_root<S: Schema>(schema: &S, value: &Value, options: &Options) -> SchemaResult<S::Output> {
    schema.validate(value, &Scope::new(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_extends_path_without_touching_parent() {
        let options = Options::default();
        let root = Scope::new(&options);
        let child = root.key("colors").key("primary");
        assert!(root.path().is_root());
        assert_eq!(child.path().to_string(), "colors.primary");
        assert_eq!(root.index(2).path().to_string(), "[2]");
    }
}
