//! Robots directive engine
//!
//! Parses, validates and renders SEO robots directives for meta tags and the
//! `X-Robots-Tag` header, and maps legacy numeric robots codes to directive sets.

// Internal modules
#[macro_use]
pub mod logging;
pub mod builder;
pub mod catalog;
pub mod collection;
pub mod config;
pub mod directive;
pub mod legacy;
pub mod pipeline;
pub mod validation;

// Re-export key types for library consumers
pub use catalog::{DirectiveKind, ValueRule};
pub use collection::{CollectionError, DirectiveCollection};
pub use directive::Directive;
pub use legacy::{code_to_directives, MigrationError, MigrationReport};
pub use pipeline::{process, PipelineOutput};
pub use validation::{ValidationIssue, ValidationResult, Validator};
