//! Font tokens: a category name (`title`, `body`, `mono`) to a font configuration.
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::Value;

use crate::css::{self, Length};
use crate::error::SchemaResult;
use crate::schema::{ArrayOf, NonEmptyString, ObjectReader, ObjectShape, OneOf, Pattern, Record, Schema, Scope};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u16")]
pub enum FontWeight {
    Thin,
    ExtraLight,
    Light,
    Regular,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontConfig {
    pub family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<FontWeight>>,
    /// Absent means `normal` to consumers; not filled in here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<TextTransform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

pub type Fonts = IndexMap<String, FontConfig>;
pub type FontsSchema = Record<&'static Pattern, FontConfigSchema>;

#[derive(Debug, Clone, Copy, Default)]
pub struct FontConfigSchema;

// ————————————————————————————————————————————————————————————————————————————
// GRAMMARS
// ————————————————————————————————————————————————————————————————————————————

pub const FONT_WEIGHT: OneOf<u64, FontWeight> = OneOf::new(
    &[
        (100, FontWeight::Thin),
        (200, FontWeight::ExtraLight),
        (300, FontWeight::Light),
        (400, FontWeight::Regular),
        (500, FontWeight::Medium),
        (600, FontWeight::SemiBold),
        (700, FontWeight::Bold),
        (800, FontWeight::ExtraBold),
        (900, FontWeight::Black),
    ],
    "one of 100, 200, 300, 400, 500, 600, 700, 800, 900",
);

pub const FONT_STYLE: OneOf<&'static str, FontStyle> = OneOf::new(
    &[("normal", FontStyle::Normal), ("italic", FontStyle::Italic), ("oblique", FontStyle::Oblique)],
    "one of normal, italic, oblique",
);

pub const TEXT_TRANSFORM: OneOf<&'static str, TextTransform> = OneOf::new(
    &[
        ("none", TextTransform::None),
        ("uppercase", TextTransform::Uppercase),
        ("lowercase", TextTransform::Lowercase),
        ("capitalize", TextTransform::Capitalize),
    ],
    "one of none, uppercase, lowercase, capitalize",
);

const FAMILY: NonEmptyString = NonEmptyString { expected: "a font family name" };
const FALLBACK: NonEmptyString = NonEmptyString { expected: "a fallback font stack" };
const URL: NonEmptyString = NonEmptyString { expected: "a font stylesheet URL" };

pub static FONT_NAME: Lazy<Pattern> = Lazy::new(|| Pattern::new("[a-zA-Z]+", "letters only (e.g. title, body, mono)"));

/// Unitless multiplier (`1.5`) or a length (`24px`).
pub static LINE_HEIGHT: Lazy<Pattern> = Lazy::new(|| {
    Pattern::new(
        &format!("{}|{}", css::number_source(), css::length_source()),
        "a unitless number or a CSS length (e.g. 1.5, 24px)",
    )
});

pub static FONTS: Lazy<FontsSchema> = Lazy::new(|| Record::new(&*FONT_NAME, FontConfigSchema));

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl FontWeight {
    pub fn value(self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::ExtraLight => 200,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
            FontWeight::Black => 900,
        }
    }
}

impl From<FontWeight> for u16 {
    fn from(weight: FontWeight) -> u16 {
        weight.value()
    }
}

impl FontConfig {
    pub fn style_or_default(&self) -> FontStyle {
        self.style.unwrap_or_default()
    }
}

impl Schema for FontConfigSchema {
    type Output = FontConfig;

    fn validate(&self, value: &Value, scope: &Scope<'_>) -> SchemaResult<FontConfig> {
        let mut obj = ObjectReader::new(value, scope)?;
        let config = FontConfig {
            family: obj.required("family", &FAMILY)?,
            fallback: obj.optional("fallback", &FALLBACK)?,
            weights: obj.optional("weights", &ArrayOf { item: FONT_WEIGHT })?,
            style: obj.optional("style", &FONT_STYLE)?,
            size: obj.optional("size", &*css::LENGTH)?,
            line_height: obj.optional("lineHeight", &*LINE_HEIGHT)?,
            letter_spacing: obj.optional("letterSpacing", &*css::SIGNED_LENGTH)?,
            transform: obj.optional("transform", &TEXT_TRANSFORM)?,
            url: obj.optional("url", &URL)?,
        };
        obj.finish()?;
        Ok(config)
    }

    fn describe(&self) -> Value {
        let mut style = FONT_STYLE.describe();
        style["default"] = Value::from("normal");
        ObjectShape::new()
            .required("family", FAMILY.describe())
            .optional("fallback", FALLBACK.describe())
            .optional("weights", ArrayOf { item: FONT_WEIGHT }.describe())
            .optional("style", style)
            .optional("size", css::LENGTH.describe())
            .optional("lineHeight", LINE_HEIGHT.describe())
            .optional("letterSpacing", css::SIGNED_LENGTH.describe())
            .optional("transform", TEXT_TRANSFORM.describe())
            .optional("url", URL.describe())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::schema::validate_root;
    use serde_json::json;

    fn font(value: Value) -> SchemaResult<FontConfig> {
        validate_root(&FontConfigSchema, &value, &Options::default())
    }

    #[test]
    fn every_literal_weight_is_accepted() {
        for w in (100..=900).step_by(100) {
            let config = font(json!({"family": "Inter", "weights": [w]})).unwrap();
            assert_eq!(config.weights.unwrap()[0].value(), w as u16);
        }
    }

    #[test]
    fn off_grid_weights_are_rejected() {
        for w in [json!(50), json!(150), json!(1000), json!(-100), json!(400.5)] {
            let err = font(json!({"family": "Inter", "weights": [w.clone()]})).unwrap_err();
            assert_eq!(err.code(), "VALUE_PATTERN_MISMATCH", "{w}");
            assert_eq!(err.path().to_string(), "weights[0]");
        }
    }

    #[test]
    fn one_bad_weight_fails_the_font() {
        let err = font(json!({"family": "Inter", "weights": [400, 750]})).unwrap_err();
        assert_eq!(err.path().to_string(), "weights[1]");
    }

    #[test]
    fn family_is_required() {
        let err = font(json!({"fallback": "sans-serif"})).unwrap_err();
        assert_eq!(err.code(), "MISSING_REQUIRED_FIELD");
    }

    #[test]
    fn full_config_round_trips_verbatim() {
        let input = json!({
            "family": "Inter",
            "fallback": "system-ui, sans-serif",
            "weights": [400, 700],
            "style": "italic",
            "size": "16px",
            "lineHeight": "1.5",
            "letterSpacing": "-0.01em",
            "transform": "uppercase",
            "url": "https://fonts.googleapis.com/css2?family=Inter"
        });
        let config = font(input.clone()).unwrap();
        assert_eq!(config.style, Some(FontStyle::Italic));
        assert_eq!(config.transform, Some(TextTransform::Uppercase));
        assert_eq!(serde_json::to_value(&config).unwrap(), input);
    }

    #[test]
    fn style_is_not_defaulted_by_validation() {
        let config = font(json!({"family": "Inter"})).unwrap();
        assert_eq!(config.style, None);
        assert_eq!(config.style_or_default(), FontStyle::Normal);
    }

    #[test]
    fn enumerations_are_case_sensitive() {
        assert!(font(json!({"family": "Inter", "style": "Italic"})).is_err());
        assert!(font(json!({"family": "Inter", "transform": "title"})).is_err());
        assert!(font(json!({"family": "Inter", "lineHeight": "tall"})).is_err());
    }

    #[test]
    fn category_names_are_letters_only() {
        let input = json!({
            "title": {"family": "Bely Display"},
            "body2": {"family": "Inter"},
            "mono-code": {"family": "JetBrains Mono"}
        });
        let fonts = validate_root(&*FONTS, &input, &Options::default()).unwrap();
        assert_eq!(fonts.keys().collect::<Vec<_>>(), ["title"]);
    }
}
