//! Interaction timing primitives: CSS `<time>` durations and easing functions.
use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::css::number_source;
use crate::schema::Pattern;

/// `300ms`, `0.2s`, `.5s`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Duration(String);

/// `ease-in-out`, `cubic-bezier(0.4, 0, 0.2, 1)`, `steps(4, jump-end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Easing(String);

pub static DURATION: Lazy<Pattern<Duration>> = Lazy::new(|| {
    Pattern::new(&format!("{}(?:ms|s)", number_source()), "a CSS time in ms or s (e.g. 300ms, 0.2s)")
});

pub static EASING: Lazy<Pattern<Easing>> = Lazy::new(|| {
    let n = format!("-?{}", number_source());
    let keywords = "linear|ease|ease-in|ease-out|ease-in-out|step-start|step-end";
    let bezier = format!(r"cubic-bezier\(\s*{n}\s*,\s*{n}\s*,\s*{n}\s*,\s*{n}\s*\)");
    let steps = r"steps\(\s*\d+\s*(?:,\s*(?:jump-start|jump-end|jump-none|jump-both|start|end)\s*)?\)";
    Pattern::new(
        &format!("{keywords}|{bezier}|{steps}"),
        "a CSS easing function (linear, ease, ease-in, ease-out, ease-in-out, cubic-bezier(...), steps(...))",
    )
});

impl From<String> for Duration {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<String> for Easing {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Duration {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The duration in milliseconds. `None` only for a string that bypassed [`DURATION`].
    pub fn millis(&self) -> Option<f64> {
        let (number, scale) = match self.0.strip_suffix("ms") {
            Some(number) => (number, 1.0),
            None => (self.0.strip_suffix('s')?, 1000.0),
        };
        number.parse::<f64>().ok().map(|n| n * scale)
    }
}

impl Easing {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
