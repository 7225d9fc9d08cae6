//! Application layer for soalgen
//!
//! Use cases orchestrate the domain pipeline through ports. Adapters for
//! the ports live in the infrastructure and presentation layers and are
//! injected by the binary.

pub mod config;
pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use config::generation_params::{
    DEFAULT_QUESTIONS, GenerationParams, MAX_QUESTIONS, MIN_QUESTIONS,
};
pub use ports::document_source::{DocumentSource, ExtractionError};
pub use ports::export_sink::{ExportError, ExportSink};
pub use ports::progress::{NoProgress, ProgressNotifier};
pub use session::QuizSession;
pub use use_cases::generate_quiz::{
    GenerateError, GenerateQuizInput, GenerateQuizOutput, GenerateQuizUseCase,
};
pub use use_cases::ingest_material::{
    IngestError, IngestInput, IngestMaterialUseCase, IngestOutput,
};
