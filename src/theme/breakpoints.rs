//! Breakpoint tokens: lowercase names to whole pixel widths (`"640px"`).
use std::fmt;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::schema::{Pattern, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Breakpoint(String);

pub type Breakpoints = IndexMap<String, Breakpoint>;
pub type BreakpointsSchema = Record<&'static Pattern, &'static Pattern<Breakpoint>>;

pub static BREAKPOINT_NAME: Lazy<Pattern> = Lazy::new(|| Pattern::new("[a-z0-9]+", "lowercase alphanumeric (e.g. sm, md, 2xl)"));

pub static BREAKPOINT_VALUE: Lazy<Pattern<Breakpoint>> = Lazy::new(|| Pattern::new("[0-9]+px", "a pixel width (e.g. 640px)"));

pub static BREAKPOINTS: Lazy<BreakpointsSchema> = Lazy::new(|| Record::new(&*BREAKPOINT_NAME, &*BREAKPOINT_VALUE));

impl From<String> for Breakpoint {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Breakpoint {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Width in pixels, for building media queries.
    pub fn pixels(&self) -> Option<u32> {
        self.0.strip_suffix("px")?.parse().ok()
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::schema::validate_root;
    use serde_json::{json, Value};

    fn run(input: Value) -> crate::error::SchemaResult<Breakpoints> {
        validate_root(&*BREAKPOINTS, &input, &Options::default())
    }

    #[test]
    fn pixel_values_round_trip_exactly() {
        let input = json!({"sm": "640px", "md": "768px"});
        let out = run(input.clone()).unwrap();
        assert_eq!(serde_json::to_value(&out).unwrap(), input);
        assert_eq!(out["md"].pixels(), Some(768));
    }

    #[test]
    fn uppercase_name_is_dropped() {
        let out = run(json!({"SM": "640px"})).unwrap();
        assert!(out.is_empty());
        assert_eq!(serde_json::to_value(&out).unwrap(), json!({}));
    }

    #[test]
    fn non_pixel_values_fail() {
        for bad in ["40rem", "768", "768 px", "-1px", "1.5px"] {
            let err = run(json!({"sm": bad})).unwrap_err();
            assert_eq!(err.code(), "VALUE_PATTERN_MISMATCH", "{bad}");
        }
        assert_eq!(run(json!({"sm": 640})).unwrap_err().code(), "TYPE_MISMATCH");
    }

    #[test]
    fn numeric_names_are_lowercase_alphanumeric() {
        let out = run(json!({"2xl": "1536px", "x-large": "1920px"})).unwrap();
        assert_eq!(out.keys().collect::<Vec<_>>(), ["2xl"]);
    }
}
