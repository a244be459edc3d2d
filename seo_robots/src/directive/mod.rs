//! Directive record: one robots instruction with optional bot scope and modification
//!
//! Text form is `[bot:]value[:modification]`. Empty fields are never emitted, and a
//! directive whose `value` is empty is ignorable everywhere in the engine.

pub mod scope;

pub use scope::{group_by_bot, scope_key, BotGroup, GLOBAL_SCOPE};

use crate::catalog::ADVANCED_DIRECTIVE_NAMES;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::str::FromStr;

pub const KEY_VALUE: &str = "value";
pub const KEY_BOT: &str = "bot";
pub const KEY_MODIFICATION: &str = "modification";

/// Structured robots directive. Fields are trimmed on every way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Directive {
    #[serde(default, deserialize_with = "scalar_string")]
    value: String,
    #[serde(default, deserialize_with = "scalar_string")]
    bot: String,
    #[serde(default, deserialize_with = "scalar_string")]
    modification: String,
}

/// How a two-part `a:b` token is read.
///
/// The grammar is ambiguous: `max-snippet:50` and `googlebot:noindex` have the same
/// shape. When the first part (lowercased) names a known advanced directive the token is
/// `value:modification`, otherwise `bot:value`. A bot literally named like an advanced
/// directive therefore cannot be expressed in two-part form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwoPartReading {
    ValueWithModification,
    BotWithValue,
}

impl TwoPartReading {
    pub fn resolve(first: &str, known_advanced: &[&str]) -> Self {
        let lowered = first.trim().to_lowercase();
        if known_advanced.iter().any(|name| *name == lowered) {
            Self::ValueWithModification
        } else {
            Self::BotWithValue
        }
    }
}

impl Directive {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
            ..Self::default()
        }
    }

    pub fn with_bot(mut self, bot: &str) -> Self {
        self.bot = bot.trim().to_string();
        self
    }

    pub fn with_modification(mut self, modification: &str) -> Self {
        self.modification = modification.trim().to_string();
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn bot(&self) -> &str {
        &self.bot
    }

    pub fn modification(&self) -> &str {
        &self.modification
    }

    /// A directive without a value carries no instruction
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn is_global(&self) -> bool {
        self.bot.is_empty()
    }

    /// Parse a token, using `known_advanced` to disambiguate two-part tokens.
    ///
    /// Never fails: blank input yields an empty directive, and three or more parts are
    /// `bot:value:modification` with the remainder rejoined so timestamps keep their colons.
    pub fn parse(text: &str, known_advanced: &[&str]) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::default();
        }

        let parts: Vec<&str> = text.split(':').collect();
        match parts.as_slice() {
            [value] => Self::new(value),
            [first, second] => match TwoPartReading::resolve(first, known_advanced) {
                TwoPartReading::ValueWithModification => {
                    Self::new(first).with_modification(second)
                }
                TwoPartReading::BotWithValue => Self::new(second).with_bot(first),
            },
            [bot, value, rest @ ..] => Self::new(value)
                .with_bot(bot)
                .with_modification(&rest.join(":")),
            [] => Self::default(),
        }
    }

    /// Parse with the catalog's advanced directive names as the tiebreaker
    pub fn parse_with_catalog(text: &str) -> Self {
        Self::parse(text, &ADVANCED_DIRECTIVE_NAMES)
    }

    /// `bot:value:modification` with empty fields omitted
    pub fn serialize(&self) -> String {
        [&self.bot, &self.value, &self.modification]
            .into_iter()
            .filter(|field| !field.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(":")
    }

    pub fn to_record(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (KEY_VALUE.to_string(), self.value.clone()),
            (KEY_BOT.to_string(), self.bot.clone()),
            (KEY_MODIFICATION.to_string(), self.modification.clone()),
        ])
    }

    /// Missing keys default to empty; unknown keys are ignored
    pub fn from_record(record: &BTreeMap<String, String>) -> Self {
        let field = |key: &str| record.get(key).map(String::as_str).unwrap_or("");
        Self::new(field(KEY_VALUE))
            .with_bot(field(KEY_BOT))
            .with_modification(field(KEY_MODIFICATION))
    }

    /// Read a stored JSON record whose scalars may be numbers (`"modification": 50`).
    /// Anything that is not an object yields an empty directive.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        let field = |key: &str| object.get(key).map(json_scalar_to_string).unwrap_or_default();
        Self::new(&field(KEY_VALUE))
            .with_bot(&field(KEY_BOT))
            .with_modification(&field(KEY_MODIFICATION))
    }
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl FromStr for Directive {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_with_catalog(s))
    }
}

fn json_scalar_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
    Null(()),
}

fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Integer(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Flag(b) => b.to_string(),
        Scalar::Null(()) => String::new(),
    };
    Ok(text.trim().to_string())
}
