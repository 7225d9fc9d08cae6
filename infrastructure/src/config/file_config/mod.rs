//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod generation;
mod output;
mod repl;

pub use generation::FileGenerationConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use soalgen_application::{GenerationParams, MAX_QUESTIONS, MIN_QUESTIONS};

/// A problem detected in a configuration file
///
/// Issues are warnings: the value is clamped or replaced by a default and
/// the run continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub field: String,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generation settings
    pub generation: FileGenerationConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration, returning all detected issues
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&self.generation.num_questions) {
            issues.push(ConfigIssue {
                field: "generation.num_questions".to_string(),
                message: format!(
                    "generation.num_questions: {} is outside {}..={}, clamping",
                    self.generation.num_questions, MIN_QUESTIONS, MAX_QUESTIONS
                ),
            });
        }
        if self.generation.max_concepts == 0 {
            issues.push(ConfigIssue {
                field: "generation.max_concepts".to_string(),
                message: "generation.max_concepts: 0 disables concept mining, using the default"
                    .to_string(),
            });
        }
        issues
    }

    /// Fold the file values into runtime generation parameters
    pub fn to_generation_params(&self) -> GenerationParams {
        let defaults = GenerationParams::default();
        GenerationParams {
            num_questions: GenerationParams::clamp_count(self.generation.num_questions),
            include_explanations: self.generation.include_explanations,
            max_concepts: if self.generation.max_concepts == 0 {
                defaults.max_concepts
            } else {
                self.generation.max_concepts
            },
            seed: None,
        }
    }
}
