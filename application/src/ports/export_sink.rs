//! Export sink port
//!
//! Interface for writing a generated quiz to disk in one of the export
//! formats.

use soalgen_domain::{ExportFormat, Quiz};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while exporting a quiz
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write export file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode {format} export: {reason}")]
    Encode {
        format: ExportFormat,
        reason: String,
    },
}

/// Writes quizzes to export artifacts
pub trait ExportSink: Send + Sync {
    /// Write `quiz` in `format` under `dir`, returning the artifact path
    fn export(&self, quiz: &Quiz, format: ExportFormat, dir: &Path)
    -> Result<PathBuf, ExportError>;
}
