//! Border radius tokens. `DEFAULT` names the unsuffixed `rounded` utility.
use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::css::{self, Length};
use crate::schema::{Pattern, Record};

pub type BorderRadius = IndexMap<String, Length>;
pub type BorderRadiusSchema = Record<&'static Pattern, &'static Pattern<Length>>;

pub static RADIUS_NAME: Lazy<Pattern> = Lazy::new(|| {
    Pattern::new("DEFAULT|[a-z0-9]+(?:-[a-z0-9]+)*", "kebab-case or DEFAULT (e.g. sm, 2xl, DEFAULT)")
});

/// Full rounding is spelled as a large length (`9999px`).
pub static BORDER_RADIUS: Lazy<BorderRadiusSchema> = Lazy::new(|| Record::new(&*RADIUS_NAME, &*css::LENGTH));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::schema::validate_root;
    use serde_json::json;

    #[test]
    fn tailwind_scale() {
        let input = json!({
            "none": "0",
            "sm": "0.125rem",
            "DEFAULT": "0.25rem",
            "2xl": "1rem",
            "full": "9999px"
        });
        let radius = validate_root(&*BORDER_RADIUS, &input, &Options::default()).unwrap();
        assert_eq!(serde_json::to_value(&radius).unwrap(), input);
    }

    #[test]
    fn other_uppercase_names_are_dropped() {
        let input = json!({"Default": "4px", "LG": "8px", "lg": "8px"});
        let radius = validate_root(&*BORDER_RADIUS, &input, &Options::default()).unwrap();
        assert_eq!(radius.keys().collect::<Vec<_>>(), ["lg"]);
    }

    #[test]
    fn non_lengths_fail() {
        for bad in [json!("round"), json!("8"), json!(8)] {
            assert!(validate_root(&*BORDER_RADIUS, &json!({"lg": bad}), &Options::default()).is_err());
        }
    }
}
