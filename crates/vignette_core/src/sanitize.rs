//! Sanitization result type.

use serde::{Deserialize, Serialize};

/// Result of rewriting a story for content-policy safety.
///
/// Produced fresh per request and owned by one orchestrator invocation;
/// never persisted by this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SanitizationResult {
    /// The rewritten story text
    sanitized_story: String,
    /// One human-readable description per rewrite rule that matched,
    /// in rule order
    warnings: Vec<String>,
}

impl SanitizationResult {
    /// Create a new sanitization result.
    pub fn new(sanitized_story: String, warnings: Vec<String>) -> Self {
        Self {
            sanitized_story,
            warnings,
        }
    }

    /// Whether any rewrite rule matched.
    pub fn was_modified(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Consume the result, returning the rewritten story.
    pub fn into_story(self) -> String {
        self.sanitized_story
    }
}
