//! Document source port
//!
//! Interface for pulling raw text out of an uploaded document. The real
//! implementation sniffs the file extension and parses the container;
//! tests stub it with canned text.

use soalgen_domain::SourceFormat;
use std::path::Path;
use thiserror::Error;

/// Errors raised while extracting text from a document
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported file format '{extension}' (expected pdf, docx, or txt)")]
    UnsupportedFormat { extension: String },

    #[error("Document too large: {size} bytes (maximum {max})")]
    TooLarge { size: u64, max: u64 },

    #[error("Failed to parse {format} content: {reason}")]
    Malformed {
        format: SourceFormat,
        reason: String,
    },
}

impl ExtractionError {
    /// Check if this error means the file type is not handled at all
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ExtractionError::UnsupportedFormat { .. })
    }
}

/// Extracts raw text from documents on disk
pub trait DocumentSource: Send + Sync {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_display() {
        let error = ExtractionError::UnsupportedFormat {
            extension: "md".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unsupported file format 'md' (expected pdf, docx, or txt)"
        );
        assert!(error.is_unsupported());
    }

    #[test]
    fn test_malformed_display_names_the_format() {
        let error = ExtractionError::Malformed {
            format: SourceFormat::Pdf,
            reason: "bad xref table".to_string(),
        };
        assert!(error.to_string().contains("pdf"));
        assert!(!error.is_unsupported());
    }
}
