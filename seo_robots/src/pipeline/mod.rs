//! Validate-then-render in one call
//!
//! Validation is advisory: both output strings are produced whatever the
//! validator reports.

pub mod output;

pub use output::PipelineOutput;

use crate::collection::DirectiveCollection;
use crate::config::runtime::{PipelinePreferences, RuntimeConfig};
use crate::logging::codes;
use crate::validation::Validator;
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    validator: Validator,
    preferences: PipelinePreferences,
}

impl Pipeline {
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            validator: Validator::new(config.validation.clone()),
            preferences: config.pipeline.clone(),
        }
    }

    pub fn process(&self, collection: &DirectiveCollection) -> PipelineOutput {
        let start_time = Instant::now();

        crate::log_info!("Processing directive collection",
            "directives" => collection.len(),
            "flat" => collection.is_flat()
        );

        let validation = self
            .preferences
            .validate_before_render
            .then(|| collection.validate_with(&self.validator));

        let meta_robots = collection.build_meta_robots();
        crate::log_success!(
            codes::success::META_ROBOTS_RENDERED,
            "Meta robots value rendered",
            "value" => meta_robots
        );

        let x_robots_tag = collection.build_x_robots();
        crate::log_success!(
            codes::success::X_ROBOTS_RENDERED,
            "X-Robots-Tag value rendered",
            "value" => x_robots_tag
        );

        let output = PipelineOutput::new(meta_robots, x_robots_tag, validation);

        crate::log_success!(
            codes::success::PIPELINE_COMPLETE,
            "Directive pipeline complete",
            "valid" => output.is_valid(),
            "duration_ms" => start_time.elapsed().as_millis()
        );

        output
    }
}

/// Run the pipeline with preferences taken from the environment
pub fn process(collection: &DirectiveCollection) -> PipelineOutput {
    Pipeline::default().process(collection)
}

/// Run the pipeline with explicit preferences
pub fn process_with_config(
    collection: &DirectiveCollection,
    config: &RuntimeConfig,
) -> PipelineOutput {
    Pipeline::new(config).process(collection)
}
