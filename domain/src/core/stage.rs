//! Pipeline stages
//!
//! The generation pipeline runs three stages in a fixed order. Progress
//! reporting and logging key off these values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stage of the document-to-quiz pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStage {
    /// Pulling raw text out of the uploaded document
    Extraction,
    /// Mining key concepts from the cleaned material
    Concepts,
    /// Assembling questions from templates and concept pools
    Synthesis,
}

impl PipelineStage {
    /// Stage order within the pipeline, starting at 1
    pub fn number(&self) -> usize {
        match self {
            PipelineStage::Extraction => 1,
            PipelineStage::Concepts => 2,
            PipelineStage::Synthesis => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Extraction => "extraction",
            PipelineStage::Concepts => "concepts",
            PipelineStage::Synthesis => "synthesis",
        }
    }

    /// Human-readable name for progress displays
    pub fn display_name(&self) -> &'static str {
        match self {
            PipelineStage::Extraction => "Text Extraction",
            PipelineStage::Concepts => "Concept Mining",
            PipelineStage::Synthesis => "Question Synthesis",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
