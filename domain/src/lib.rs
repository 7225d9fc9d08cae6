//! Domain layer for soalgen
//!
//! Pure quiz-generation logic with no I/O dependencies:
//! - Material cleaning, sentence selection, and concept mining
//! - Question synthesis from template pools
//! - Quiz analytics (difficulty distribution, result grading)
//!
//! Everything in this crate is deterministic given an RNG, which keeps the
//! whole pipeline reproducible under a fixed seed.

pub mod analytics;
pub mod config;
pub mod core;
pub mod material;
pub mod question;
pub mod synthesis;

// Re-export commonly used types
pub use analytics::{
    AnalyticsReport, AnswerRecord, DifficultyDistribution, Performance, ResultSummary,
};
pub use config::{ExportFormat, OutputFormat, SourceFormat};
pub use core::error::DomainError;
pub use core::stage::PipelineStage;
pub use material::{DEFAULT_MAX_CONCEPTS, Material, MIN_CONTENT_CHARS};
pub use question::{Difficulty, OPTION_COUNT, Question, QuestionType, Quiz};
pub use synthesis::{
    GenerationError, QuestionSynthesizer, SlotIncident, SynthesisRun, TemplateCategory,
    fallback_question,
};
