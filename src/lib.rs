//! Validation and normalization of design-token theme documents.
//!
//! A theme is a JSON object with up to seven token categories (colors, fonts,
//! spacing, animations, breakpoints, shadows, border radius). [`validate_theme`]
//! either returns a typed [`Theme`] holding the admitted subset of the input, or a
//! [`SchemaError`] naming the offending path.
pub mod cli;
pub mod css;
pub mod error;
pub mod options;
pub mod path;
pub mod path_de;
pub mod schema;
pub mod theme;
pub mod timing;

pub use error::{ErrorKind, SchemaError, SchemaResult};
pub use options::Options;
pub use path::FieldPath;
pub use theme::Theme;

/// Validate a theme document with the given options.
pub fn validate_theme(value: &serde_json::Value, options: &Options) -> SchemaResult<Theme> {
    Theme::from_value_with(value, options)
}
