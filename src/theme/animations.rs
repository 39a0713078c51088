//! Animation tokens.
//!
//! An animation entry is one of three shapes, tried in this order:
//!
//! 1. `true` / `false`: toggle a built-in animation,
//! 2. a string: the utility class that runs it (`"animate-fade-in"`),
//! 3. an object: an [`AnimationConfig`].
//!
//! Under the keys `duration`, `easing` and `keyframes` an object is a group of
//! named timing tokens or keyframe definitions rather than an animation. Any other
//! value under those keys is an ordinary animation entry. Entries keep their input
//! order.
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::SchemaResult;
use crate::schema::record::{admit_entry, expect_object};
use crate::schema::{Bool, NonEmptyString, Number, ObjectReader, ObjectShape, Pattern, Record, Schema, Scope, Variant};
use crate::timing::{Duration, Easing, DURATION, EASING};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnimationValue {
    Enabled(bool),
    Class(String),
    Config(AnimationConfig),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyframes: Option<Keyframes>,
}

/// A CSS declaration value inside a keyframe step (`"0"`, `0`, `"translateY(8px)"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DeclarationValue {
    Text(String),
    Number(serde_json::Number),
}

/// Step (`from`, `to`, `50%`) to CSS declarations.
pub type Keyframes = IndexMap<String, IndexMap<String, DeclarationValue>>;

/// One admitted key of the animations category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnimationItem {
    Animation(AnimationValue),
    Durations(IndexMap<String, Duration>),
    Easings(IndexMap<String, Easing>),
    Keyframes(IndexMap<String, Keyframes>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Animations {
    pub items: IndexMap<String, AnimationItem>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationConfigSchema;

#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationsSchema;

pub type KeyframesSchema = Record<&'static Pattern, Record<&'static Pattern, &'static Variant<DeclarationValue>>>;

// ————————————————————————————————————————————————————————————————————————————
// GRAMMARS
// ————————————————————————————————————————————————————————————————————————————

const CLASS_NAME: NonEmptyString = NonEmptyString { expected: "an animation class name" };

pub static ANIMATION_NAME: Lazy<Pattern> = Lazy::new(|| {
    Pattern::new("[a-zA-Z][a-zA-Z0-9]*", "alphanumeric starting with a letter (e.g. fadeIn, slideUp2)")
});

pub static TOKEN_NAME: Lazy<Pattern> = Lazy::new(|| {
    Pattern::new("[a-zA-Z][a-zA-Z0-9]*(?:-[a-zA-Z0-9]+)*", "a token name (e.g. fast, ease-out-strong)")
});

static KEYFRAME_STEP: Lazy<Pattern> = Lazy::new(|| {
    Pattern::new(r"from|to|100(?:\.0+)?%|[1-9]?[0-9](?:\.[0-9]+)?%", "from, to, or a percentage 0%..100%")
});

static CSS_PROPERTY: Lazy<Pattern> = Lazy::new(|| {
    Pattern::new("-{0,2}[a-zA-Z][a-zA-Z0-9-]*", "a CSS property name (e.g. opacity, transform)")
});

static DECLARATION: Lazy<Variant<DeclarationValue>> = Lazy::new(|| {
    Variant::new()
        .shape("a CSS value string", &*crate::css::DECLARATION_VALUE, DeclarationValue::Text)
        .shape("a number", Number, DeclarationValue::Number)
});

pub static KEYFRAMES: Lazy<KeyframesSchema> = Lazy::new(|| {
    Record::new(&*KEYFRAME_STEP, Record::new(&*CSS_PROPERTY, &*DECLARATION))
});

pub static ANIMATION_VALUE: Lazy<Variant<AnimationValue>> = Lazy::new(|| {
    Variant::new()
        .shape("a boolean", Bool, AnimationValue::Enabled)
        .shape("an animation class name", CLASS_NAME, AnimationValue::Class)
        .shape("an animation config object", AnimationConfigSchema, AnimationValue::Config)
});

static DURATION_TOKENS: Lazy<Record<&'static Pattern, &'static Pattern<Duration>>> =
    Lazy::new(|| Record::new(&*TOKEN_NAME, &*DURATION));

static EASING_TOKENS: Lazy<Record<&'static Pattern, &'static Pattern<Easing>>> =
    Lazy::new(|| Record::new(&*TOKEN_NAME, &*EASING));

static KEYFRAME_TOKENS: Lazy<Record<&'static Pattern, &'static KeyframesSchema>> =
    Lazy::new(|| Record::new(&*ANIMATION_NAME, &*KEYFRAMES));

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl AnimationValue {
    /// Whether the animation should run at all. A config without `enabled` is on.
    pub fn is_enabled(&self) -> bool {
        match self {
            AnimationValue::Enabled(on) => *on,
            AnimationValue::Class(_) => true,
            AnimationValue::Config(config) => config.enabled.unwrap_or(true),
        }
    }
}

impl Animations {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn animation(&self, name: &str) -> Option<&AnimationValue> {
        match self.items.get(name)? {
            AnimationItem::Animation(value) => Some(value),
            _ => None,
        }
    }

    /// Animation entries in input order, without the token groups.
    pub fn animations(&self) -> impl Iterator<Item = (&str, &AnimationValue)> {
        self.items.iter().filter_map(|(name, item)| match item {
            AnimationItem::Animation(value) => Some((name.as_str(), value)),
            _ => None,
        })
    }

    pub fn durations(&self) -> Option<&IndexMap<String, Duration>> {
        match self.items.get("duration")? {
            AnimationItem::Durations(tokens) => Some(tokens),
            _ => None,
        }
    }

    pub fn easings(&self) -> Option<&IndexMap<String, Easing>> {
        match self.items.get("easing")? {
            AnimationItem::Easings(tokens) => Some(tokens),
            _ => None,
        }
    }

    pub fn keyframes(&self) -> Option<&IndexMap<String, Keyframes>> {
        match self.items.get("keyframes")? {
            AnimationItem::Keyframes(definitions) => Some(definitions),
            _ => None,
        }
    }
}

impl Schema for AnimationConfigSchema {
    type Output = AnimationConfig;

    fn validate(&self, value: &Value, scope: &Scope<'_>) -> SchemaResult<AnimationConfig> {
        let mut obj = ObjectReader::new(value, scope)?;
        let config = AnimationConfig {
            enabled: obj.optional("enabled", &Bool)?,
            duration: obj.optional("duration", &*DURATION)?,
            delay: obj.optional("delay", &*DURATION)?,
            easing: obj.optional("easing", &*EASING)?,
            keyframes: obj.optional("keyframes", &*KEYFRAMES)?,
        };
        obj.finish()?;
        Ok(config)
    }

    fn describe(&self) -> Value {
        ObjectShape::new()
            .optional("enabled", Bool.describe())
            .optional("duration", DURATION.describe())
            .optional("delay", DURATION.describe())
            .optional("easing", EASING.describe())
            .optional("keyframes", KEYFRAMES.describe())
            .build()
    }
}

impl Schema for AnimationsSchema {
    type Output = Animations;

    fn validate(&self, value: &Value, scope: &Scope<'_>) -> SchemaResult<Animations> {
        let map = expect_object(value, scope)?;
        let mut out = Animations::default();
        for (key, raw) in map {
            let entry = scope.key(key);
            let item = match (key.as_str(), raw.is_object()) {
                ("duration", true) => AnimationItem::Durations(DURATION_TOKENS.validate(raw, &entry)?),
                ("easing", true) => AnimationItem::Easings(EASING_TOKENS.validate(raw, &entry)?),
                ("keyframes", true) => AnimationItem::Keyframes(KEYFRAME_TOKENS.validate(raw, &entry)?),
                _ => {
                    if !admit_entry(&*ANIMATION_NAME, key, &entry)? {
                        continue;
                    }
                    AnimationItem::Animation(ANIMATION_VALUE.validate(raw, &entry)?)
                }
            };
            out.items.insert(key.clone(), item);
        }
        Ok(out)
    }

    fn describe(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "duration": { "anyOf": [DURATION_TOKENS.describe(), ANIMATION_VALUE.describe()] },
                "easing": { "anyOf": [EASING_TOKENS.describe(), ANIMATION_VALUE.describe()] },
                "keyframes": { "anyOf": [KEYFRAME_TOKENS.describe(), ANIMATION_VALUE.describe()] },
            },
            "patternProperties": { (ANIMATION_NAME.as_str()): ANIMATION_VALUE.describe() },
        })
    }
}
