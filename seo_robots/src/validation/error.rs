//! Validation issues reported for directive collections

use crate::catalog::DirectiveKind;
use crate::logging::codes;
use thiserror::Error;

/// A single problem found by the validator. Issues are data, never raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// Advanced directive modification failed its value rule
    #[error("Invalid value '{value}' for directive '{directive}'{}: expected {expected}", scope_suffix(.bot))]
    InvalidValue {
        directive: DirectiveKind,
        value: String,
        expected: String,
        bot: Option<String>,
    },

    /// `name:value` token whose name is not an advanced directive
    #[error("Unknown advanced directive '{name}' with value '{value}'")]
    UnknownAdvancedDirective { name: String, value: String },

    /// Two contradictory directives in one scope
    #[error("Conflicting directives: '{first}' and '{second}' cannot be used together{}", scope_suffix(.bot))]
    Conflict {
        first: DirectiveKind,
        second: DirectiveKind,
        bot: Option<String>,
    },

    /// Collection or token exceeds a compile-time limit
    #[error("Directive limit exceeded: {limit_type} is {actual_value}, maximum allowed is {limit_value}")]
    LimitExceeded {
        limit_type: String,
        actual_value: usize,
        limit_value: usize,
    },
}

fn scope_suffix(bot: &Option<String>) -> String {
    match bot {
        Some(bot) => format!(" for bot '{}'", bot),
        None => String::new(),
    }
}

impl ValidationIssue {
    pub fn invalid_value(directive: DirectiveKind, value: &str, bot: Option<&str>) -> Self {
        let expected = directive
            .value_rule()
            .map(|rule| rule.describe())
            .unwrap_or_else(|| "no value".to_string());

        Self::InvalidValue {
            directive,
            value: value.to_string(),
            expected,
            bot: bot.map(str::to_string),
        }
    }

    pub fn unknown_advanced_directive(name: &str, value: &str) -> Self {
        Self::UnknownAdvancedDirective {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn conflict(first: DirectiveKind, second: DirectiveKind, bot: Option<&str>) -> Self {
        Self::Conflict {
            first,
            second,
            bot: bot.map(str::to_string),
        }
    }

    pub fn limit_exceeded(limit_type: &str, actual_value: usize, limit_value: usize) -> Self {
        Self::LimitExceeded {
            limit_type: limit_type.to_string(),
            actual_value,
            limit_value,
        }
    }

    /// Code used when the issue is logged
    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::InvalidValue { .. } => codes::validation::INVALID_VALUE,
            Self::UnknownAdvancedDirective { .. } => codes::validation::UNKNOWN_ADVANCED_DIRECTIVE,
            Self::Conflict { .. } => codes::validation::CONFLICTING_DIRECTIVES,
            Self::LimitExceeded { .. } => codes::validation::LIMIT_EXCEEDED,
        }
    }

    /// Bot scope the issue belongs to, if any
    pub fn bot(&self) -> Option<&str> {
        match self {
            Self::InvalidValue { bot, .. } | Self::Conflict { bot, .. } => bot.as_deref(),
            Self::UnknownAdvancedDirective { .. } | Self::LimitExceeded { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message_names_allowed_set() {
        let issue = ValidationIssue::invalid_value(DirectiveKind::MaxImagePreview, "huge", None);
        assert_eq!(
            issue.to_string(),
            "Invalid value 'huge' for directive 'max-image-preview': expected one of: none, standard, large"
        );
    }

    #[test]
    fn test_conflict_message_with_bot() {
        let issue =
            ValidationIssue::conflict(DirectiveKind::Index, DirectiveKind::NoIndex, Some("googlebot"));
        assert_eq!(
            issue.to_string(),
            "Conflicting directives: 'index' and 'noindex' cannot be used together for bot 'googlebot'"
        );
        assert_eq!(issue.bot(), Some("googlebot"));
        assert_eq!(issue.error_code(), codes::validation::CONFLICTING_DIRECTIVES);
    }

    #[test]
    fn test_global_conflict_message() {
        let issue = ValidationIssue::conflict(DirectiveKind::All, DirectiveKind::None, None);
        assert_eq!(
            issue.to_string(),
            "Conflicting directives: 'all' and 'none' cannot be used together"
        );
    }
}
