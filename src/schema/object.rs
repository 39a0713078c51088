//! Fixed-shape objects with required and optional named fields.
//!
//! No defaults are materialized: an absent optional field stays `None`. Undeclared
//! fields are ignored unless [`UnknownFields::Deny`] is set, in which case
//! [`ObjectReader::finish`] reports the first one.
use serde_json::{json, Map, Value};

use super::record::expect_object;
use super::{Schema, Scope};
use crate::error::{SchemaError, SchemaResult};
use crate::options::UnknownFields;

pub struct ObjectReader<'v, 's, 'o> {
    map: &'v Map<String, Value>,
    scope: &'s Scope<'o>,
    declared: Vec<&'static str>,
}

impl<'v, 's, 'o> ObjectReader<'v, 's, 'o> {
    pub fn new(value: &'v Value, scope: &'s Scope<'o>) -> SchemaResult<Self> {
        let map = expect_object(value, scope)?;
        Ok(Self { map, scope, declared: Vec::new() })
    }

    pub fn required<S: Schema>(&mut self, name: &'static str, schema: &S) -> SchemaResult<S::Output> {
        self.optional(name, schema)?
            .ok_or_else(|| SchemaError::missing_field(self.scope.path(), name))
    }

    pub fn optional<S: Schema>(&mut self, name: &'static str, schema: &S) -> SchemaResult<Option<S::Output>> {
        self.declared.push(name);
        match self.map.get(name) {
            Some(raw) => schema.validate(raw, &self.scope.key(name)).map(Some),
            None => Ok(None),
        }
    }

    pub fn finish(self) -> SchemaResult<()> {
        if self.scope.options().unknown_fields == UnknownFields::Ignore {
            return Ok(());
        }
        match self.map.keys().find(|k| !self.declared.iter().any(|d| *d == k.as_str())) {
            Some(extra) => Err(SchemaError::unknown_field(self.scope.path(), extra)),
            None => Ok(()),
        }
    }
}

/// Builds the JSON-Schema description of a struct.
#[derive(Debug, Default)]
pub struct ObjectShape {
    properties: Map<String, Value>,
    required: Vec<Value>,
}

impl ObjectShape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, name: &str, schema: Value) -> Self {
        self.required.push(Value::from(name));
        self.properties.insert(name.to_string(), schema);
        self
    }

    pub fn optional(mut self, name: &str, schema: Value) -> Self {
        self.properties.insert(name.to_string(), schema);
        self
    }

    pub fn build(self) -> Value {
        let mut o = json!({ "type": "object", "properties": self.properties });
        if !self.required.is_empty() {
            o["required"] = Value::Array(self.required);
        }
        o
    }
}
