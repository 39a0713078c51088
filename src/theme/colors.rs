//! Color tokens: kebab-case semantic names to color literals.
use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::css::{self, Color};
use crate::schema::{Pattern, Record};

pub type Colors = IndexMap<String, Color>;
pub type ColorsSchema = Record<&'static Pattern, &'static Pattern<Color>>;

pub static COLORS: Lazy<ColorsSchema> = Lazy::new(|| Record::new(&*css::KEBAB_CASE, &*css::COLOR));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::schema::validate_root;
    use serde_json::json;

    #[test]
    fn semantic_names_and_scales_preserved_verbatim() {
        let input = json!({"primary": "#007bff", "primary-hover": "#0056b3", "gray-500": "rgb(107, 114, 128)"});
        let colors = validate_root(&*COLORS, &input, &Options::default()).unwrap();
        assert_eq!(colors["primary"].as_str(), "#007bff");
        assert_eq!(colors["primary-hover"].as_str(), "#0056b3");
        assert_eq!(serde_json::to_value(&colors).unwrap(), input);
    }

    #[test]
    fn non_kebab_names_are_dropped() {
        let input = json!({"Primary": "#007bff", "text_muted": "#6b7280", "accent": "#ff00ff"});
        let colors = validate_root(&*COLORS, &input, &Options::default()).unwrap();
        assert_eq!(colors.keys().collect::<Vec<_>>(), ["accent"]);
    }

    #[test]
    fn invalid_color_under_valid_name_fails() {
        let input = json!({"primary": "#007bff", "secondary": "blue"});
        let err = validate_root(&*COLORS, &input, &Options::default()).unwrap_err();
        assert_eq!(err.path().to_string(), "secondary");
        assert_eq!(err.code(), "VALUE_PATTERN_MISMATCH");
    }
}
