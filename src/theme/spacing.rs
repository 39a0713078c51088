//! Spacing tokens: a Tailwind-style utility class list or a raw CSS length.
use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::css;
use crate::schema::{Pattern, Record};

pub type Spacing = IndexMap<String, String>;
pub type SpacingSchema = Record<&'static Pattern, &'static Pattern>;

/// camelCase names (`section`, `containerSmall`).
pub static SPACING_NAME: Lazy<Pattern> = Lazy::new(|| {
    Pattern::new("[a-z][a-zA-Z0-9]*", "alphanumeric starting with a lowercase letter (e.g. section, containerSmall)")
});

pub static SPACING_VALUE: Lazy<Pattern> = Lazy::new(|| {
    // arbitrary values (`bg-[#FFF]`, `grid-cols-[1fr,2fr]`) may use any case and commas
    let class = r"[a-z!-][a-zA-Z0-9:/\[\]().,%#_!+*'-]*";
    Pattern::new(
        &format!(r"{}|{class}(?:\s+{class})*", css::length_source()),
        "Tailwind utility classes (e.g. max-w-7xl mx-auto px-4) or a CSS length (e.g. 4rem)",
    )
});

pub static SPACING: Lazy<SpacingSchema> = Lazy::new(|| Record::new(&*SPACING_NAME, &*SPACING_VALUE));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::schema::validate_root;
    use serde_json::json;

    #[test]
    fn classes_and_lengths_are_both_accepted() {
        let input = json!({
            "section": "py-16 sm:py-20",
            "container": "max-w-7xl mx-auto px-4",
            "containerSmall": "max-w-[72rem] mx-auto",
            "gap": "1.5rem",
            "padding": "calc(100% - 2rem)",
            "grid": "grid-cols-[1fr,2fr] gap-4",
            "banner": "bg-[#FFF] p-[calc(1rem+2px)]"
        });
        let spacing = validate_root(&*SPACING, &input, &Options::default()).unwrap();
        assert_eq!(serde_json::to_value(&spacing).unwrap(), input);
    }

    #[test]
    fn kebab_and_capitalized_names_are_dropped() {
        let input = json!({"container-small": "px-4", "Gap": "1rem", "gap": "1rem"});
        let spacing = validate_root(&*SPACING, &input, &Options::default()).unwrap();
        assert_eq!(spacing.keys().collect::<Vec<_>>(), ["gap"]);
    }

    #[test]
    fn malformed_values_fail() {
        for bad in [json!("16"), json!(""), json!("px-4;color:red"), json!("Px-4"), json!("p-[1rem]{x}"), json!(16)] {
            let err = validate_root(&*SPACING, &json!({"gap": bad.clone()}), &Options::default()).unwrap_err();
            assert_eq!(err.path().to_string(), "gap", "{bad}");
        }
    }
}
