//! Renders directive collections into output strings
//!
//! Builders never validate. Whatever they are given is rendered, invalid
//! modifications included; validation is a separate advisory step.

pub mod flat;
pub mod meta;
pub mod x_robots;

pub use flat::{build_from_flat, convert_legacy_flat_to_structured};
pub use meta::build_from_structured;
pub use x_robots::build_x_robots_from_structured;

use std::collections::HashSet;

/// Separator between rendered directives and between rendered groups
pub const DIRECTIVE_SEPARATOR: &str = ", ";

/// Ordered token list that drops repeats, keeping the first occurrence
#[derive(Debug, Default)]
pub(crate) struct UniqueTokens {
    seen: HashSet<String>,
    tokens: Vec<String>,
}

impl UniqueTokens {
    pub(crate) fn push(&mut self, token: String) {
        if self.seen.insert(token.clone()) {
            self.tokens.push(token);
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub(crate) fn join(&self) -> String {
        self.tokens.join(DIRECTIVE_SEPARATOR)
    }
}

/// `value[:modification]`, omitting the colon when there is no modification
pub(crate) fn render_token(value: &str, modification: &str) -> String {
    if modification.is_empty() {
        value.to_string()
    } else {
        format!("{}:{}", value, modification)
    }
}
