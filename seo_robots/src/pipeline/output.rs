use crate::validation::ValidationResult;
use serde::Serialize;

/// Rendered robots values for one collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineOutput {
    pub meta_robots: String,
    pub x_robots_tag: String,
    /// Absent when validation was switched off
    pub validation: Option<ValidationResult>,
}

impl PipelineOutput {
    pub fn new(
        meta_robots: String,
        x_robots_tag: String,
        validation: Option<ValidationResult>,
    ) -> Self {
        Self {
            meta_robots,
            x_robots_tag,
            validation,
        }
    }

    /// True unless validation ran and reported issues
    pub fn is_valid(&self) -> bool {
        self.validation.as_ref().map_or(true, |result| result.valid)
    }
}
