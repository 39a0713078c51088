//! CSS value and token-name grammars shared by the category schemas.
use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::schema::Pattern;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// A color literal exactly as written (`#007bff`, `rgba(0, 0, 0, 0.5)`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Color(String);

/// A CSS length exactly as written (`1.5rem`, `0`, `calc(100% - 2rem)`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Length(String);

// ————————————————————————————————————————————————————————————————————————————
// GRAMMARS
// ————————————————————————————————————————————————————————————————————————————

const NUMBER: &str = r"(?:\d+(?:\.\d+)?|\.\d+)";
const UNITS: &str = "px|rem|em|%|vh|vw|vmin|vmax|ch|ex|pt";
const FUNCTIONS: &str = "calc|min|max|clamp|var";

pub static KEBAB_CASE: Lazy<Pattern> = Lazy::new(|| {
    Pattern::new("[a-z]+[a-z0-9]*(?:-[a-z0-9]+)*", "kebab-case (e.g. primary, primary-hover, gray-500)")
});

/// Like [`KEBAB_CASE`] but segments may start with a digit (`2xl`, `inner-2`).
pub static KEBAB_CASE_NUMERIC: Lazy<Pattern> = Lazy::new(|| {
    Pattern::new("[a-z0-9]+(?:-[a-z0-9]+)*", "kebab-case, digits allowed (e.g. sm, 2xl, card-hover)")
});

pub static COLOR: Lazy<Pattern<Color>> = Lazy::new(|| {
    Pattern::new(
        r"#[0-9a-fA-F]{6}(?:[0-9a-fA-F]{2})?|(?:rgba?|hsla?)\([^;{}]+\)",
        "hex #RRGGBB[AA], rgb(...), rgba(...), hsl(...), or hsla(...)",
    )
});

pub static LENGTH: Lazy<Pattern<Length>> = Lazy::new(|| Pattern::new(&length_source(), "a CSS length (e.g. 1rem, 16px, 0, calc(...))"));

/// Signed variant, for properties such as `letter-spacing`.
pub static SIGNED_LENGTH: Lazy<Pattern<Length>> = Lazy::new(|| {
    Pattern::new(&format!("[+-]?(?:{})", length_source()), "a CSS length, optionally negative (e.g. -0.02em)")
});

/// No statement or block delimiters; a value, not a stylesheet fragment.
pub static DECLARATION_VALUE: Lazy<Pattern> = Lazy::new(|| {
    Pattern::new(r"[^;{}]*[^;{}\s][^;{}]*", "a non-empty CSS value without ';', '{' or '}'")
});

pub fn length_source() -> String {
    format!(r"0|{NUMBER}(?:{UNITS})|(?:{FUNCTIONS})\([^;{{}}]+\)")
}

pub fn number_source() -> &'static str {
    NUMBER
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl From<String> for Color {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<String> for Length {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Color {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Length {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
