//! Refinements: a primitive narrowed by an anchored regex or a literal table.
//! A refinement never transforms its input.
use std::marker::PhantomData;

use regex::Regex;
use serde_json::{json, Value};

use super::{KeyRule, Schema, Scope};
use crate::error::{SchemaError, SchemaResult};

// ————————————————————————————————————————————————————————————————————————————
// REGEX PATTERNS
// ————————————————————————————————————————————————————————————————————————————

/// String refinement. `T` is the typed wrapper the accepted string is stored in.
#[derive(Debug)]
pub struct Pattern<T = String> {
    regex: Regex,
    expected: &'static str,
    _out: PhantomData<fn() -> T>,
}

impl<T> Pattern<T> {
    /// The pattern is anchored on both ends, so the whole string must match.
    ///
    /// Panics on an invalid regex; patterns are string literals.
    pub fn new(pattern: &str, expected: &'static str) -> Self {
        let anchored = format!("^(?:{pattern})$");
        let regex = Regex::new(&anchored)
            .unwrap_or_else(|error| panic!("invalid pattern {pattern:?}: {error}"));
        Self { regex, expected, _out: PhantomData }
    }

    pub fn is_match(&self, s: &str) -> bool {
        self.regex.is_match(s)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn expected(&self) -> &'static str {
        self.expected
    }
}

impl<T: From<String>> Schema for Pattern<T> {
    type Output = T;

    fn validate(&self, value: &Value, scope: &Scope<'_>) -> SchemaResult<T> {
        let s = value.as_str().ok_or_else(|| {
            SchemaError::type_mismatch(scope.path(), "string", value)
        })?;
        if !self.is_match(s) {
            return Err(SchemaError::value_pattern(scope.path(), value, self.expected));
        }
        Ok(T::from(s.to_string()))
    }

    fn describe(&self) -> Value {
        json!({ "type": "string", "pattern": self.as_str(), "description": self.expected })
    }
}

impl<T> KeyRule for Pattern<T> {
    fn admit(&self, key: &str, scope: &Scope<'_>) -> SchemaResult<()> {
        if self.is_match(key) {
            Ok(())
        } else {
            Err(SchemaError::key_pattern(scope.path(), key, self.expected))
        }
    }

    fn key_pattern(&self) -> &str {
        self.as_str()
    }
}

// ————————————————————————————————————————————————————————————————————————————
// LITERAL TABLES
// ————————————————————————————————————————————————————————————————————————————

/// A raw JSON literal that can appear in a [`OneOf`] table.
pub trait Literal: Copy + 'static {
    /// JSON kind name, for type mismatch errors.
    const KIND: &'static str;

    fn is_kind(value: &Value) -> bool;
    fn matches(&self, value: &Value) -> bool;
    fn to_json(&self) -> Value;
}

impl Literal for &'static str {
    const KIND: &'static str = "string";

    fn is_kind(value: &Value) -> bool {
        value.is_string()
    }

    fn matches(&self, value: &Value) -> bool {
        value.as_str() == Some(*self)
    }

    fn to_json(&self) -> Value {
        Value::from(*self)
    }
}

impl Literal for u64 {
    const KIND: &'static str = "number";

    fn is_kind(value: &Value) -> bool {
        value.is_number()
    }

    // 400.0 and -100 are numbers but not integer literals of the table
    fn matches(&self, value: &Value) -> bool {
        value.as_u64() == Some(*self)
    }

    fn to_json(&self) -> Value {
        Value::from(*self)
    }
}

/// Enumeration refinement: the raw literal must be one of the table's entries, and
/// maps to the entry's typed value.
#[derive(Debug)]
pub struct OneOf<L: Literal, T: 'static> {
    table: &'static [(L, T)],
    expected: &'static str,
}

impl<L: Literal, T: 'static> OneOf<L, T> {
    pub const fn new(table: &'static [(L, T)], expected: &'static str) -> Self {
        Self { table, expected }
    }
}

impl<L: Literal, T: Copy + 'static> Schema for OneOf<L, T> {
    type Output = T;

    fn validate(&self, value: &Value, scope: &Scope<'_>) -> SchemaResult<T> {
        if !L::is_kind(value) {
            return Err(SchemaError::type_mismatch(scope.path(), L::KIND, value));
        }
        self.table
            .iter()
            .find(|(lit, _)| lit.matches(value))
            .map(|(_, out)| *out)
            .ok_or_else(|| SchemaError::value_pattern(scope.path(), value, self.expected))
    }

    fn describe(&self) -> Value {
        let choices: Vec<Value> = self.table.iter().map(|(lit, _)| lit.to_json()).collect();
        json!({ "enum": choices, "description": self.expected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::error::ErrorKind;
    use serde_json::json;

    const LEVELS: OneOf<u64, u8> = OneOf::new(&[(1, 1), (2, 2), (3, 3)], "one of 1, 2, 3");
    const MODES: OneOf<&'static str, bool> = OneOf::new(&[("on", true), ("off", false)], "on or off");

    #[test]
    fn pattern_is_anchored() {
        let digits: Pattern = Pattern::new("[0-9]+", "digits");
        assert!(digits.is_match("123"));
        assert!(!digits.is_match("12a"));
        assert!(!digits.is_match("a12"));
    }

    #[test]
    fn pattern_returns_input_unchanged() {
        let options = Options::default();
        let scope = Scope::new(&options);
        let px: Pattern = Pattern::new("[0-9]+px", "pixels");
        for raw in ["0px", "640px", "1280px"] {
            assert_eq!(px.validate(&json!(raw), &scope).unwrap(), raw);
        }
    }

    #[test]
    fn pattern_reports_type_and_value_errors() {
        let options = Options::default();
        let scope = Scope::new(&options).key("sm");
        let px: Pattern = Pattern::new("[0-9]+px", "pixels");

        let err = px.validate(&json!(640), &scope).unwrap_err();
        assert_eq!(err.code(), "TYPE_MISMATCH");

        let err = px.validate(&json!("40rem"), &scope).unwrap_err();
        assert_eq!(err.path().to_string(), "sm");
        assert!(matches!(err.kind(), ErrorKind::ValuePatternMismatch { actual, .. } if actual == "\"40rem\""));
    }

    #[test]
    fn pattern_as_key_rule() {
        let options = Options::default();
        let scope = Scope::new(&options).key("SM");
        let lower: Pattern = Pattern::new("[a-z]+", "lowercase");
        let err = lower.admit("SM", &scope).unwrap_err();
        assert_eq!(err.code(), "KEY_PATTERN_MISMATCH");
        assert!(lower.admit("sm", &scope).is_ok());
    }

    #[test]
    fn numeric_literals_reject_lookalikes() {
        let options = Options::default();
        let scope = Scope::new(&options);
        assert_eq!(LEVELS.validate(&json!(2), &scope).unwrap(), 2);
        for bad in [json!(0), json!(4), json!(-1), json!(2.5)] {
            let err = LEVELS.validate(&bad, &scope).unwrap_err();
            assert_eq!(err.code(), "VALUE_PATTERN_MISMATCH", "{bad}");
        }
        assert_eq!(LEVELS.validate(&json!("2"), &scope).unwrap_err().code(), "TYPE_MISMATCH");
    }

    #[test]
    fn string_literals_map_to_typed_values() {
        let options = Options::default();
        let scope = Scope::new(&options);
        assert!(MODES.validate(&json!("on"), &scope).unwrap());
        assert!(!MODES.validate(&json!("off"), &scope).unwrap());
        assert!(MODES.validate(&json!("On"), &scope).is_err());
        assert_eq!(MODES.describe()["enum"], json!(["on", "off"]));
    }
}
