use super::error::ValidationIssue;
use crate::catalog::DirectiveKind;
use serde::{Serialize, Serializer};

/// Outcome of validating a directive or a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(serialize_with = "serialize_messages")]
    pub errors: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn from_issues(errors: Vec<ValidationIssue>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn valid() -> Self {
        Self::from_issues(Vec::new())
    }

    /// Descriptive error strings, one per issue
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn has_conflicts(&self) -> bool {
        self.errors
            .iter()
            .any(|issue| matches!(issue, ValidationIssue::Conflict { .. }))
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

fn serialize_messages<S>(errors: &[ValidationIssue], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(errors.iter().map(ToString::to_string))
}

/// A catalog conflict pair found in a directive list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ConflictPair {
    pub first: DirectiveKind,
    pub second: DirectiveKind,
}

impl ConflictPair {
    pub fn names(&self) -> (&'static str, &'static str) {
        (self.first.as_str(), self.second.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serializes_messages() {
        let result = ValidationResult::from_issues(vec![ValidationIssue::conflict(
            DirectiveKind::Follow,
            DirectiveKind::NoFollow,
            None,
        )]);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(
            json["errors"][0],
            "Conflicting directives: 'follow' and 'nofollow' cannot be used together"
        );
        assert!(result.has_conflicts());
    }

    #[test]
    fn test_default_is_valid() {
        let result = ValidationResult::default();
        assert!(result.valid);
        assert!(result.messages().is_empty());
    }
}
