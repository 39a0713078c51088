//! Shadow tokens: `box-shadow` values, including `inset` and `none` forms.
use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::css;
use crate::schema::{Pattern, Record};

pub type Shadows = IndexMap<String, String>;
pub type ShadowsSchema = Record<&'static Pattern, &'static Pattern>;

pub static SHADOWS: Lazy<ShadowsSchema> = Lazy::new(|| Record::new(&*css::KEBAB_CASE_NUMERIC, &*css::DECLARATION_VALUE));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::schema::validate_root;
    use serde_json::json;

    #[test]
    fn box_shadow_forms() {
        let input = json!({
            "sm": "0 1px 2px 0 rgb(0 0 0 / 0.05)",
            "md": "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
            "inner": "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)",
            "none": "none",
            "2xl": "0 25px 50px -12px rgb(0 0 0 / 0.25)",
            "card-hover": "0 8px 16px rgba(0,0,0,0.2)"
        });
        let shadows = validate_root(&*SHADOWS, &input, &Options::default()).unwrap();
        assert_eq!(serde_json::to_value(&shadows).unwrap(), input);
    }

    #[test]
    fn empty_or_injected_values_fail() {
        for bad in ["", "  ", "none; color: red", ";", "none; } body { color: red"] {
            let err = validate_root(&*SHADOWS, &json!({"sm": bad}), &Options::default()).unwrap_err();
            assert_eq!(err.code(), "VALUE_PATTERN_MISMATCH", "{bad:?}");
        }
    }

    #[test]
    fn names_must_be_kebab_case() {
        let input = json!({"cardHover": "none", "card_hover": "none", "card-hover": "none"});
        let shadows = validate_root(&*SHADOWS, &input, &Options::default()).unwrap();
        assert_eq!(shadows.keys().collect::<Vec<_>>(), ["card-hover"]);
    }
}
