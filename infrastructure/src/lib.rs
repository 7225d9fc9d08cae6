//! Infrastructure layer for soalgen
//!
//! Adapters for the application ports: document text extraction, export
//! writers, and configuration file loading.

pub mod config;
pub mod export;
pub mod extract;

pub use config::{ConfigIssue, ConfigLoader, FileConfig};
pub use export::{EXPORT_FILE_STEM, QuizExporter};
pub use extract::DocumentReader;
