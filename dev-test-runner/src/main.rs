use colored::Colorize;
use serde_json::{json, Value};
use theme_schema::{validate_theme, Options};

/// Realistic theme documents, each with whether it should validate.
fn fixtures() -> Vec<(&'static str, bool, Value)> {
    vec![
        (
            "marketing site",
            true,
            json!({
                "colors": {
                    "primary": "#007bff",
                    "primary-hover": "#0056b3",
                    "surface": "rgb(255 255 255)",
                    "overlay": "rgba(0, 0, 0, 0.5)",
                    "accent": "hsl(280, 60%, 50%)"
                },
                "fonts": {
                    "title": {"family": "Bely Display", "weights": [400, 700], "transform": "uppercase"},
                    "body": {"family": "Inter", "fallback": "system-ui, sans-serif", "size": "1rem", "lineHeight": "1.6"},
                    "mono": {"family": "JetBrains Mono", "url": "https://fonts.example.com/jbm.css"}
                },
                "spacing": {"section": "py-16 md:py-24", "gutter": "1.5rem", "cardPadding": "p-6"},
                "animations": {
                    "fadeIn": true,
                    "slideUp": "animate-slide-up",
                    "pulse": {"enabled": true, "duration": "2s", "easing": "ease-in-out"},
                    "duration": {"fast": "150ms", "slow": "500ms"},
                    "keyframes": {"wiggle": {"0%": {"transform": "rotate(-3deg)"}, "50%": {"transform": "rotate(3deg)"}, "100%": {"transform": "rotate(-3deg)"}}}
                },
                "breakpoints": {"sm": "640px", "md": "768px", "lg": "1024px", "2xl": "1536px"},
                "shadows": {"card": "0 1px 3px rgba(0,0,0,0.12)", "inner": "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)"},
                "borderRadius": {"DEFAULT": "0.25rem", "lg": "0.5rem", "full": "9999px"}
            }),
        ),
        ("empty theme", true, json!({})),
        (
            "legacy keys are dropped",
            true,
            json!({"breakpoints": {"SM": "640px", "md": "768px"}, "colors": {"Primary": "#000000"}}),
        ),
        ("rem breakpoint", false, json!({"breakpoints": {"sm": "40rem"}})),
        ("named color", false, json!({"colors": {"primary": "blue"}})),
        ("off-scale font weight", false, json!({"fonts": {"body": {"family": "Inter", "weights": [400, 750]}}})),
        ("font without family", false, json!({"fonts": {"body": {"size": "16px"}}})),
        ("numeric animation", false, json!({"animations": {"fadeIn": 1}})),
    ]
}

fn main() {
    let options = Options::default();
    let mut surprises = 0;
    for (name, should_pass, document) in fixtures() {
        let result = validate_theme(&document, &options);
        let as_expected = result.is_ok() == should_pass;
        if !as_expected {
            surprises += 1;
        }
        let mark = if as_expected { "✅".normal() } else { "❌".red().bold() };
        match result {
            Ok(theme) => {
                eprintln!("{mark} {name}: {}", "ok".green());
                let admitted = serde_json::to_string(&theme).unwrap_or_default();
                eprintln!("    {}", admitted.dimmed());
            }
            Err(error) => {
                eprintln!("{mark} {name}: {}", "rejected".yellow());
                eprintln!("    [{}] {error}", error.code());
            }
        }
    }
    if surprises > 0 {
        eprintln!("{}", format!("{surprises} fixture(s) did not behave as expected").red().bold());
        std::process::exit(1);
    }
}
