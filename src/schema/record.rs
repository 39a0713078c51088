//! Pattern-keyed records: open dictionaries of named tokens.
//!
//! Key admission and value validation are two separate validators with different
//! failure semantics. A key outside the key grammar is excluded from the output and
//! the decode carries on; a value under an admitted key that fails its schema fails
//! the whole record.
use indexmap::IndexMap;
use serde_json::{json, Value};

use super::{Schema, Scope};
use crate::error::{SchemaError, SchemaResult};
use crate::options::InadmissibleKeys;

/// Decides whether a dictionary key names a token at all.
pub trait KeyRule {
    /// `scope` points at the entry being admitted.
    fn admit(&self, key: &str, scope: &Scope<'_>) -> SchemaResult<()>;

    /// Regex source used for `patternProperties` when describing the record.
    fn key_pattern(&self) -> &str;
}

impl<K: KeyRule + ?Sized> KeyRule for &K {
    fn admit(&self, key: &str, scope: &Scope<'_>) -> SchemaResult<()> {
        (**self).admit(key, scope)
    }

    fn key_pattern(&self) -> &str {
        (**self).key_pattern()
    }
}

/// Run `rule` for one entry. `Ok(false)` means the entry is skipped; with
/// [`InadmissibleKeys::Deny`] the key error is returned instead.
pub fn admit_entry<K: KeyRule + ?Sized>(rule: &K, key: &str, entry: &Scope<'_>) -> SchemaResult<bool> {
    match rule.admit(key, entry) {
        Ok(()) => Ok(true),
        Err(error) => match entry.options().inadmissible_keys {
            InadmissibleKeys::Drop => {
                tracing::debug!(path = %entry.path(), key = %key, "dropping entry with inadmissible key");
                Ok(false)
            }
            InadmissibleKeys::Deny => Err(error),
        },
    }
}

/// Expect a JSON object at `scope`.
pub fn expect_object<'v>(value: &'v Value, scope: &Scope<'_>) -> SchemaResult<&'v serde_json::Map<String, Value>> {
    value.as_object().ok_or_else(|| SchemaError::type_mismatch(scope.path(), "object", value))
}

#[derive(Debug, Clone, Copy)]
pub struct Record<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Record<K, V> {
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K: KeyRule, V: Schema> Schema for Record<K, V> {
    type Output = IndexMap<String, V::Output>;

    fn validate(&self, value: &Value, scope: &Scope<'_>) -> SchemaResult<Self::Output> {
        let map = expect_object(value, scope)?;
        let mut out = IndexMap::with_capacity(map.len());
        for (key, raw) in map {
            let entry = scope.key(key);
            if !admit_entry(&self.key, key, &entry)? {
                continue;
            }
            let typed = self.value.validate(raw, &entry)?;
            out.insert(key.clone(), typed);
        }
        Ok(out)
    }

    fn describe(&self) -> Value {
        json!({
            "type": "object",
            "patternProperties": { (self.key.key_pattern()): self.value.describe() },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::schema::Pattern;
    use once_cell::sync::Lazy;
    use serde_json::json;

    static NAME: Lazy<Pattern> = Lazy::new(|| Pattern::new("[a-z]+", "lowercase letters"));
    static PIXELS: Lazy<Pattern> = Lazy::new(|| Pattern::new("[0-9]+px", "pixels"));

    fn record() -> Record<&'static Pattern, &'static Pattern> {
        Record::new(&*NAME, &*PIXELS)
    }

    fn run(value: Value, options: &Options) -> SchemaResult<IndexMap<String, String>> {
        record().validate(&value, &Scope::new(options).key("sizes"))
    }

    #[test]
    fn inadmissible_key_vanishes_without_touching_siblings() {
        let options = Options::default();
        let with_bad_key = run(json!({"sm": "1px", "BAD": "2px", "lg": "3px"}), &options).unwrap();
        let without = run(json!({"sm": "1px", "lg": "3px"}), &options).unwrap();
        assert_eq!(with_bad_key, without);
        assert_eq!(with_bad_key.keys().collect::<Vec<_>>(), ["sm", "lg"]);
    }

    #[test]
    fn inadmissible_key_with_garbage_value_is_still_dropped() {
        let options = Options::default();
        let out = run(json!({"Nope": {"deep": [1, 2]}}), &options).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn bad_value_under_admitted_key_fails_whole_record() {
        let options = Options::default();
        let err = run(json!({"sm": "1px", "md": "1rem", "lg": "3px"}), &options).unwrap_err();
        assert_eq!(err.path().to_string(), "sizes.md");
        assert_eq!(err.code(), "VALUE_PATTERN_MISMATCH");
    }

    #[test]
    fn deny_mode_turns_key_mismatch_into_error() {
        let options = Options { inadmissible_keys: InadmissibleKeys::Deny, ..Options::default() };
        let err = run(json!({"sm": "1px", "BAD": "2px"}), &options).unwrap_err();
        assert_eq!(err.code(), "KEY_PATTERN_MISMATCH");
        assert_eq!(err.path().to_string(), "sizes.BAD");
    }

    #[test]
    fn non_object_is_type_mismatch() {
        let options = Options::default();
        let err = run(json!(["sm", "1px"]), &options).unwrap_err();
        assert_eq!(err.code(), "TYPE_MISMATCH");
        assert_eq!(err.path().to_string(), "sizes");
    }

    #[test]
    fn describe_uses_pattern_properties() {
        let schema = record().describe();
        assert!(schema["patternProperties"]["^(?:[a-z]+)$"].is_object());
    }
}
