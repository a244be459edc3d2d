//! Directive validation
//!
//! Flat lists are checked token by token against the catalog. Structured
//! collections are checked per bot scope, so a conflict only counts when
//! both directives address the same crawler. Problems are collected into a
//! [`ValidationResult`]; validation never fails with `Err`.

pub mod error;
pub mod types;

pub use error::ValidationIssue;
pub use types::{ConflictPair, ValidationResult};

use crate::catalog::{DirectiveKind, CONFLICT_PAIRS};
use crate::config::compile_time;
use crate::config::runtime::ValidationPreferences;
use crate::directive::scope::group_by_bot;
use crate::directive::Directive;
use crate::logging::codes;

/// Whether a flat token is a basic directive or a well-formed advanced one.
/// Names compare exactly; surrounding whitespace makes a token invalid.
pub fn is_valid_directive_token(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }

    match token.split_once(':') {
        Some((name, value)) => is_valid_value(name, value),
        None => DirectiveKind::from_name(token).is_some_and(|kind| !kind.is_advanced()),
    }
}

/// Check a modification against the value rule of an advanced directive.
/// Names without a value rule are never valid here.
pub fn is_valid_value(name: &str, value: &str) -> bool {
    DirectiveKind::from_name(name)
        .and_then(DirectiveKind::value_rule)
        .is_some_and(|rule| rule.accepts(value))
}

/// Catalog conflict pairs present in a flat list.
///
/// Any `:value` suffix is stripped before comparing, and names match exactly.
pub fn find_conflicts<S: AsRef<str>>(directives: &[S]) -> Vec<ConflictPair> {
    let kinds: Vec<DirectiveKind> = directives
        .iter()
        .filter_map(|entry| {
            let entry = entry.as_ref().trim();
            let name = entry.split_once(':').map_or(entry, |(name, _)| name);
            DirectiveKind::from_name(name)
        })
        .collect();

    conflicts_among(&kinds)
}

fn conflicts_among(kinds: &[DirectiveKind]) -> Vec<ConflictPair> {
    CONFLICT_PAIRS
        .iter()
        .filter(|(first, second)| kinds.contains(first) && kinds.contains(second))
        .map(|&(first, second)| ConflictPair { first, second })
        .collect()
}

/// Validates directive lists under a set of runtime preferences
#[derive(Debug, Clone, Default)]
pub struct Validator {
    preferences: ValidationPreferences,
}

impl Validator {
    pub fn new(preferences: ValidationPreferences) -> Self {
        Self { preferences }
    }

    pub fn preferences(&self) -> &ValidationPreferences {
        &self.preferences
    }

    /// Validate a legacy flat list of `name` / `name:value` tokens
    pub fn validate_flat<S: AsRef<str>>(&self, directives: &[S]) -> ValidationResult {
        let mut issues = self.check_limits(directives.iter().map(|entry| entry.as_ref().len()));

        for entry in directives {
            let entry = entry.as_ref().trim();
            let Some((name, value)) = entry.split_once(':') else {
                continue;
            };

            match DirectiveKind::from_name(name.trim()) {
                Some(kind) if kind.is_advanced() => {
                    if !is_valid_value(kind.as_str(), value) {
                        issues.push(ValidationIssue::invalid_value(kind, value, None));
                    }
                }
                _ => issues.push(ValidationIssue::unknown_advanced_directive(name, value)),
            }
        }

        issues.extend(
            find_conflicts(directives)
                .into_iter()
                .map(|pair| ValidationIssue::conflict(pair.first, pair.second, None)),
        );

        self.finish(issues, directives.len())
    }

    /// Validate a structured collection, one bot scope at a time
    pub fn validate_structured(&self, directives: &[Directive]) -> ValidationResult {
        let mut issues =
            self.check_limits(directives.iter().map(|directive| directive.serialize().len()));

        for group in group_by_bot(directives) {
            let bot = (!group.is_global()).then_some(group.key.as_str());
            let mut kinds = Vec::with_capacity(group.directives.len());

            for directive in &group.directives {
                let Some(kind) = DirectiveKind::from_name(&directive.value().to_lowercase()) else {
                    continue;
                };
                kinds.push(kind);

                if kind.is_advanced() && !is_valid_value(kind.as_str(), directive.modification()) {
                    issues.push(ValidationIssue::invalid_value(
                        kind,
                        directive.modification(),
                        bot,
                    ));
                }
            }

            issues.extend(
                conflicts_among(&kinds)
                    .into_iter()
                    .map(|pair| ValidationIssue::conflict(pair.first, pair.second, bot)),
            );
        }

        self.finish(issues, directives.len())
    }

    fn check_limits(&self, token_lengths: impl ExactSizeIterator<Item = usize>) -> Vec<ValidationIssue> {
        if !self.preferences.enforce_limits {
            return Vec::new();
        }

        let mut issues = Vec::new();
        let count = token_lengths.len();
        if count > compile_time::validation::MAX_DIRECTIVES {
            issues.push(ValidationIssue::limit_exceeded(
                "directive count",
                count,
                compile_time::validation::MAX_DIRECTIVES,
            ));
        }

        if let Some(longest) = token_lengths.max() {
            if longest > compile_time::validation::MAX_TOKEN_LENGTH {
                issues.push(ValidationIssue::limit_exceeded(
                    "token length",
                    longest,
                    compile_time::validation::MAX_TOKEN_LENGTH,
                ));
            }
        }

        issues
    }

    fn finish(&self, issues: Vec<ValidationIssue>, directive_count: usize) -> ValidationResult {
        if self.preferences.log_issue_details {
            for issue in &issues {
                crate::log_warning!(issue.error_code(), &issue.to_string(),
                    "bot" => issue.bot().unwrap_or("*"));
            }
        }

        if issues.is_empty() {
            crate::log_success!(
                codes::success::VALIDATION_PASSED,
                "Directive validation passed",
                "directive_count" => directive_count
            );
        } else {
            crate::log_debug!("Directive validation found issues",
                "directive_count" => directive_count,
                "issue_count" => issues.len());
        }

        ValidationResult::from_issues(issues)
    }
}

/// Validate a flat list with preferences taken from the environment
pub fn validate_flat<S: AsRef<str>>(directives: &[S]) -> ValidationResult {
    Validator::default().validate_flat(directives)
}

/// Validate a structured collection with preferences taken from the environment
pub fn validate_structured(directives: &[Directive]) -> ValidationResult {
    Validator::default().validate_structured(directives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BASIC_DIRECTIVES;
    use assert_matches::assert_matches;

    fn validator() -> Validator {
        Validator::new(ValidationPreferences {
            enforce_limits: true,
            log_issue_details: false,
        })
    }

    #[test]
    fn test_every_basic_name_is_a_valid_token() {
        for kind in BASIC_DIRECTIVES {
            assert!(is_valid_directive_token(kind.as_str()), "{} should be valid", kind);
        }
    }

    #[test]
    fn test_token_is_not_trimmed() {
        assert!(!is_valid_directive_token(" noindex"));
        assert!(!is_valid_directive_token("noindex "));
        assert!(!is_valid_directive_token(" max-snippet:5"));
    }

    #[test]
    fn test_token_validity() {
        assert!(is_valid_directive_token("noindex"));
        assert!(is_valid_directive_token("max-snippet:-1"));
        assert!(is_valid_directive_token("max-image-preview:large"));
        assert!(is_valid_directive_token("unavailable_after:2025-12-31"));

        assert!(!is_valid_directive_token(""));
        assert!(!is_valid_directive_token("max-snippet"));
        assert!(!is_valid_directive_token("max-snippet:-2"));
        assert!(!is_valid_directive_token("max-video-preview:abc"));
        assert!(!is_valid_directive_token("noindex:5"));
        assert!(!is_valid_directive_token("crawl-delay"));
    }

    #[test]
    fn test_is_valid_value_unknown_name() {
        assert!(!is_valid_value("crawl-delay", "10"));
        assert!(!is_valid_value("noindex", ""));
        assert!(is_valid_value("max-video-preview", "0"));
    }

    #[test]
    fn test_find_conflicts_strips_values() {
        let conflicts = find_conflicts(&["index", "noindex", "max-snippet:5"]);
        assert_eq!(
            conflicts,
            vec![ConflictPair {
                first: DirectiveKind::Index,
                second: DirectiveKind::NoIndex
            }]
        );

        assert!(find_conflicts(&["noindex", "nofollow"]).is_empty());
    }

    #[test]
    fn test_find_conflicts_is_case_sensitive() {
        assert!(find_conflicts(&["INDEX", "noindex"]).is_empty());
    }

    #[test]
    fn test_flat_invalid_image_preview_names_allowed_set() {
        let result = validator().validate_flat(&["max-image-preview:huge"]);
        assert!(!result.valid);
        let messages = result.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("none, standard, large"));
    }

    #[test]
    fn test_flat_unknown_advanced() {
        let result = validator().validate_flat(&["crawl-delay:10"]);
        assert_matches!(
            result.errors.as_slice(),
            [ValidationIssue::UnknownAdvancedDirective { name, value }]
                if name == "crawl-delay" && value == "10"
        );
    }

    #[test]
    fn test_flat_valid_list() {
        let result = validator().validate_flat(&["noindex", "nofollow", "max-snippet:50"]);
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_flat_conflicts_reported() {
        let result = validator().validate_flat(&["all", "none", "follow", "nofollow"]);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 2);
        assert!(result.has_conflicts());
    }

    #[test]
    fn test_structured_conflict_scoped_to_bot() {
        let directives = vec![
            Directive::new("index").with_bot("googlebot"),
            Directive::new("noindex").with_bot("googlebot"),
        ];
        let result = validator().validate_structured(&directives);
        assert!(!result.valid);
        assert_matches!(
            result.errors.as_slice(),
            [ValidationIssue::Conflict { bot: Some(bot), .. }] if bot == "googlebot"
        );
        assert!(result.messages()[0].contains("googlebot"));
    }

    #[test]
    fn test_structured_no_conflict_across_bots() {
        let directives = vec![
            Directive::new("index").with_bot("googlebot"),
            Directive::new("noindex").with_bot("bingbot"),
        ];
        assert!(validator().validate_structured(&directives).valid);
    }

    #[test]
    fn test_structured_bot_names_compare_case_insensitively() {
        let directives = vec![
            Directive::new("index").with_bot("Googlebot"),
            Directive::new("NOINDEX").with_bot("googlebot"),
        ];
        assert!(validator().validate_structured(&directives).has_conflicts());
    }

    #[test]
    fn test_structured_global_conflict_has_no_bot() {
        let directives = vec![Directive::new("follow"), Directive::new("nofollow")];
        let result = validator().validate_structured(&directives);
        assert_matches!(
            result.errors.as_slice(),
            [ValidationIssue::Conflict { bot: None, .. }]
        );
    }

    #[test]
    fn test_structured_modification_checked() {
        let directives = vec![
            Directive::new("max-snippet").with_modification("50"),
            Directive::new("max-video-preview").with_modification("-5"),
            Directive::new("unavailable_after").with_modification("not a date"),
            Directive::new("max-image-preview"),
        ];
        let result = validator().validate_structured(&directives);
        assert_eq!(result.errors.len(), 3);
        assert!(result
            .errors
            .iter()
            .all(|issue| matches!(issue, ValidationIssue::InvalidValue { .. })));
    }

    #[test]
    fn test_structured_empty_collection_is_valid() {
        assert!(validator().validate_structured(&[]).valid);
    }

    #[test]
    fn test_limit_on_directive_count() {
        let many: Vec<String> = (0..=compile_time::validation::MAX_DIRECTIVES)
            .map(|_| "noindex".to_string())
            .collect();
        let result = validator().validate_flat(&many);
        assert_matches!(
            result.errors.first(),
            Some(ValidationIssue::LimitExceeded { limit_type, .. }) if limit_type == "directive count"
        );

        let relaxed = Validator::new(ValidationPreferences {
            enforce_limits: false,
            log_issue_details: false,
        });
        assert!(relaxed.validate_flat(&many).valid);
    }

    #[test]
    fn test_limit_on_token_length() {
        let long = format!(
            "max-image-preview:{}",
            "x".repeat(compile_time::validation::MAX_TOKEN_LENGTH)
        );
        let result = validator().validate_flat(&[long]);
        assert!(result
            .errors
            .iter()
            .any(|issue| matches!(issue, ValidationIssue::LimitExceeded { .. })));
    }
}
