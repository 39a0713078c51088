//! The theme document: seven independently optional token categories.
//!
//! ```text
//! {
//!   "colors":       { "<kebab-name>": "<color>" },
//!   "fonts":        { "<letters>": { "family": ..., ... } },
//!   "spacing":      { "<camelName>": "<classes | length>" },
//!   "animations":   { "<name>": true | "<class>" | { ... }, "duration": {...}, ... },
//!   "breakpoints":  { "<lowercase>": "<N>px" },
//!   "shadows":      { "<kebab-name>": "<box-shadow>" },
//!   "borderRadius": { "<kebab-name> | DEFAULT": "<length>" }
//! }
//! ```
//!
//! No category depends on another; `{}` is a valid (empty) theme.
pub mod animations;
pub mod breakpoints;
pub mod colors;
pub mod fonts;
pub mod radius;
pub mod shadows;
pub mod spacing;

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::SchemaResult;
use crate::options::Options;
use crate::schema::{validate_root, ObjectReader, ObjectShape, Schema, Scope};

pub use animations::{AnimationConfig, AnimationItem, AnimationValue, Animations};
pub use breakpoints::{Breakpoint, Breakpoints};
pub use colors::Colors;
pub use fonts::{FontConfig, FontStyle, FontWeight, Fonts, TextTransform};
pub use radius::BorderRadius;
pub use shadows::Shadows;
pub use spacing::Spacing;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Colors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts: Option<Fonts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animations: Option<Animations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakpoints: Option<Breakpoints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadows: Option<Shadows>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BorderRadius>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeSchema;

impl Theme {
    /// Validate with the default (lenient) options.
    pub fn from_value(value: &Value) -> SchemaResult<Theme> {
        Self::from_value_with(value, &Options::default())
    }

    pub fn from_value_with(value: &Value, options: &Options) -> SchemaResult<Theme> {
        validate_root(&ThemeSchema, value, options)
    }

    /// Number of categories present.
    pub fn category_count(&self) -> usize {
        [
            self.colors.is_some(),
            self.fonts.is_some(),
            self.spacing.is_some(),
            self.animations.is_some(),
            self.breakpoints.is_some(),
            self.shadows.is_some(),
            self.border_radius.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.category_count() == 0
    }
}

impl Schema for ThemeSchema {
    type Output = Theme;

    fn validate(&self, value: &Value, scope: &Scope<'_>) -> SchemaResult<Theme> {
        let mut obj = ObjectReader::new(value, scope)?;
        let theme = Theme {
            colors: obj.optional("colors", &*colors::COLORS)?,
            fonts: obj.optional("fonts", &*fonts::FONTS)?,
            spacing: obj.optional("spacing", &*spacing::SPACING)?,
            animations: obj.optional("animations", &animations::AnimationsSchema)?,
            breakpoints: obj.optional("breakpoints", &*breakpoints::BREAKPOINTS)?,
            shadows: obj.optional("shadows", &*shadows::SHADOWS)?,
            border_radius: obj.optional("borderRadius", &*radius::BORDER_RADIUS)?,
        };
        obj.finish()?;
        tracing::debug!(path = %scope.path(), categories = theme.category_count(), "theme validated");
        Ok(theme)
    }

    fn describe(&self) -> Value {
        ObjectShape::new()
            .optional("colors", colors::COLORS.describe())
            .optional("fonts", fonts::FONTS.describe())
            .optional("spacing", spacing::SPACING.describe())
            .optional("animations", animations::AnimationsSchema.describe())
            .optional("breakpoints", breakpoints::BREAKPOINTS.describe())
            .optional("shadows", shadows::SHADOWS.describe())
            .optional("borderRadius", radius::BORDER_RADIUS.describe())
            .build()
    }
}

/// Complete JSON-Schema document for theme files, for editor tooling.
pub fn describe() -> Value {
    let mut doc = json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "Theme",
        "description": "Design tokens: colors, fonts, spacing, animations, breakpoints, shadows, border radius. Entries whose names do not match a category's name pattern are ignored.",
    });
    if let (Some(doc), Value::Object(body)) = (doc.as_object_mut(), ThemeSchema.describe()) {
        doc.extend(body);
    }
    doc
}
