//! The two input shapes of a directive collection

use crate::builder::{
    build_from_flat, build_from_structured, build_x_robots_from_structured,
    convert_legacy_flat_to_structured,
};
use crate::directive::Directive;
use crate::logging::codes;
use crate::validation::{ValidationResult, Validator};
use serde_json::Value;
use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("Directive collection must be a JSON array, found {found}")]
    UnsupportedShape { found: &'static str },

    #[error("Directive collection is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered directives, either as legacy strings or as structured records
#[derive(Debug, Clone, PartialEq)]
pub enum DirectiveCollection {
    Flat(Vec<String>),
    Structured(Vec<Directive>),
}

impl DirectiveCollection {
    /// Read a JSON array. Only-string arrays are flat; anything else is read
    /// record by record, with string elements parsed as directive tokens.
    pub fn from_json(value: &Value) -> Result<Self, CollectionError> {
        let Value::Array(items) = value else {
            let found = match value {
                Value::Null => "null",
                Value::Bool(_) => "boolean",
                Value::Number(_) => "number",
                Value::String(_) => "string",
                Value::Object(_) => "object",
                Value::Array(_) => "array",
            };
            crate::log_error!(
                codes::collection::UNSUPPORTED_SHAPE,
                "Directive collection is not an array",
                "found" => found
            );
            return Err(CollectionError::UnsupportedShape { found });
        };

        if items.iter().all(Value::is_string) {
            let tokens = items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect();
            return Ok(Self::Flat(tokens));
        }

        let directives = items
            .iter()
            .map(|item| match item {
                Value::String(token) => Directive::parse_with_catalog(token),
                other => Directive::from_value(other),
            })
            .collect();
        Ok(Self::Structured(directives))
    }

    pub fn from_json_str(text: &str) -> Result<Self, CollectionError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Flat(tokens) => tokens.len(),
            Self::Structured(directives) => directives.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_flat(&self) -> bool {
        matches!(self, Self::Flat(_))
    }

    /// Structured view; flat tokens are parsed, structured input is borrowed
    pub fn to_structured(&self) -> Cow<'_, [Directive]> {
        match self {
            Self::Flat(tokens) => Cow::Owned(convert_legacy_flat_to_structured(tokens)),
            Self::Structured(directives) => Cow::Borrowed(directives),
        }
    }

    pub fn validate(&self) -> ValidationResult {
        self.validate_with(&Validator::default())
    }

    pub fn validate_with(&self, validator: &Validator) -> ValidationResult {
        match self {
            Self::Flat(tokens) => validator.validate_flat(tokens),
            Self::Structured(directives) => validator.validate_structured(directives),
        }
    }

    pub fn build_meta_robots(&self) -> String {
        match self {
            Self::Flat(tokens) => build_from_flat(tokens),
            Self::Structured(directives) => build_from_structured(directives),
        }
    }

    /// X-Robots-Tag is always rendered from the structured form
    pub fn build_x_robots(&self) -> String {
        build_x_robots_from_structured(&self.to_structured())
    }
}

impl From<Vec<Directive>> for DirectiveCollection {
    fn from(directives: Vec<Directive>) -> Self {
        Self::Structured(directives)
    }
}

impl From<Vec<String>> for DirectiveCollection {
    fn from(tokens: Vec<String>) -> Self {
        Self::Flat(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_string_array_is_flat() {
        let collection =
            DirectiveCollection::from_json(&json!(["noindex", "googlebot:nofollow"])).unwrap();
        assert!(collection.is_flat());
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.build_meta_robots(), "NOINDEX, GOOGLEBOT: NOFOLLOW");
        assert_eq!(collection.build_x_robots(), "NOINDEX, googlebot: NOFOLLOW");
    }

    #[test]
    fn test_record_array_is_structured() {
        let collection = DirectiveCollection::from_json(&json!([
            {"value": "noindex"},
            {"value": "max-snippet", "modification": 50},
            "googlebot:noarchive"
        ]))
        .unwrap();

        assert_matches!(&collection, DirectiveCollection::Structured(directives) if directives.len() == 3);
        assert_eq!(
            collection.build_meta_robots(),
            "NOINDEX, MAX-SNIPPET:50, NOARCHIVE"
        );
        assert_eq!(
            collection.build_x_robots(),
            "NOINDEX, MAX-SNIPPET:50, googlebot: NOARCHIVE"
        );
    }

    #[test]
    fn test_non_array_rejected() {
        assert_matches!(
            DirectiveCollection::from_json(&json!({"value": "noindex"})),
            Err(CollectionError::UnsupportedShape { found: "object" })
        );
        assert_matches!(
            DirectiveCollection::from_json_str("[noindex"),
            Err(CollectionError::Json(_))
        );
    }

    #[test]
    fn test_validation_dispatch() {
        let flat = DirectiveCollection::from(vec!["index".to_string(), "noindex".to_string()]);
        assert!(!flat.validate().valid);

        let structured = DirectiveCollection::from(vec![
            Directive::new("index").with_bot("googlebot"),
            Directive::new("noindex").with_bot("bingbot"),
        ]);
        assert!(structured.validate().valid);
    }

    #[test]
    fn test_to_structured_borrows_structured_input() {
        let collection = DirectiveCollection::from(vec![Directive::new("noindex")]);
        assert_matches!(collection.to_structured(), Cow::Borrowed(_));

        let flat = DirectiveCollection::from(vec!["max-snippet:10".to_string()]);
        assert_eq!(
            flat.to_structured().into_owned(),
            vec![Directive::new("max-snippet").with_modification("10")]
        );
    }
}
