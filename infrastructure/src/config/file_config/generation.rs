//! Generation configuration from TOML (`[generation]` section)

use serde::{Deserialize, Serialize};
use soalgen_domain::DEFAULT_MAX_CONCEPTS;
use soalgen_application::DEFAULT_QUESTIONS;

/// Raw generation configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Questions per quiz
    pub num_questions: usize,
    /// Show explanations in console output
    pub include_explanations: bool,
    /// Cap for the concept overview
    pub max_concepts: usize,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            num_questions: DEFAULT_QUESTIONS,
            include_explanations: true,
            max_concepts: DEFAULT_MAX_CONCEPTS,
        }
    }
}
