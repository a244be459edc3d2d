//! Consolidated event codes and classification system
//!
//! Single source of truth for the codes the directive engine logs with and their metadata.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// CLASSIFICATION TYPES
// ============================================================================

/// Severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct CodeMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl CodeMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Directive validation codes
pub mod validation {
    use super::Code;

    pub const INVALID_VALUE: Code = Code::new("E100");
    pub const UNKNOWN_ADVANCED_DIRECTIVE: Code = Code::new("E101");
    pub const CONFLICTING_DIRECTIVES: Code = Code::new("E102");
    pub const LIMIT_EXCEEDED: Code = Code::new("E103");
}

/// Collection input codes
pub mod collection {
    use super::Code;

    pub const UNSUPPORTED_SHAPE: Code = Code::new("E120");
}

/// Stored configuration migration codes
pub mod migration {
    use super::Code;

    pub const MALFORMED_STORED_VALUE: Code = Code::new("E200");
    pub const UNKNOWN_RULE_FORMAT: Code = Code::new("W201");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const VALIDATION_PASSED: Code = Code::new("I010");
    pub const META_ROBOTS_RENDERED: Code = Code::new("I020");
    pub const X_ROBOTS_RENDERED: Code = Code::new("I021");
    pub const PIPELINE_COMPLETE: Code = Code::new("I030");
    pub const MIGRATION_COMPLETE: Code = Code::new("I040");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

static CODE_REGISTRY: OnceLock<HashMap<&'static str, CodeMetadata>> = OnceLock::new();

fn get_code_registry() -> &'static HashMap<&'static str, CodeMetadata> {
    CODE_REGISTRY.get_or_init(|| {
        let entries = [
            CodeMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                "Logging system initialization failed",
                "Check logging preferences and compile-time limits",
            ),
            CodeMetadata::new(
                "E100",
                "Validation",
                Severity::Medium,
                "Advanced directive value failed its value rule",
                "Use a value accepted by the directive (see the catalog)",
            ),
            CodeMetadata::new(
                "E101",
                "Validation",
                Severity::Medium,
                "Parameterized token does not name an advanced directive",
                "Use max-snippet, max-image-preview, max-video-preview or unavailable_after",
            ),
            CodeMetadata::new(
                "E102",
                "Validation",
                Severity::High,
                "Contradictory directives in the same scope",
                "Remove one directive of the conflicting pair",
            ),
            CodeMetadata::new(
                "E103",
                "Validation",
                Severity::Medium,
                "Directive collection exceeds a compile-time limit",
                "Reduce the number or length of directives",
            ),
            CodeMetadata::new(
                "E120",
                "Collection",
                Severity::High,
                "Directive collection has an unsupported shape",
                "Provide a JSON array of strings or directive records",
            ),
            CodeMetadata::new(
                "E200",
                "Migration",
                Severity::Medium,
                "Stored configuration value could not be decoded",
                "Inspect the stored value; it was left untouched",
            ),
            CodeMetadata::new(
                "W201",
                "Migration",
                Severity::Low,
                "Stored rule had neither a legacy code nor directives",
                "Review the rule; default directives were added",
            ),
            CodeMetadata::new(
                "I001",
                "System",
                Severity::Low,
                "Logging system initialized",
                "None",
            ),
            CodeMetadata::new(
                "I010",
                "Validation",
                Severity::Low,
                "Directive collection passed validation",
                "None",
            ),
            CodeMetadata::new(
                "I020",
                "Render",
                Severity::Low,
                "Meta robots value rendered",
                "None",
            ),
            CodeMetadata::new(
                "I021",
                "Render",
                Severity::Low,
                "X-Robots-Tag value rendered",
                "None",
            ),
            CodeMetadata::new(
                "I030",
                "Pipeline",
                Severity::Low,
                "Directive pipeline completed",
                "None",
            ),
            CodeMetadata::new(
                "I040",
                "Migration",
                Severity::Low,
                "Stored configuration migrated to directive arrays",
                "Persist the migrated document",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific code
pub fn get_code_metadata(code: &str) -> Option<&'static CodeMetadata> {
    get_code_registry().get(code)
}

/// Get severity from code
pub fn get_severity(code: &str) -> Severity {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Get human-readable description for code
pub fn get_description(code: &str) -> &'static str {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for code
pub fn get_action(code: &str) -> &'static str {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category from code
pub fn get_category(code: &str) -> &'static str {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
