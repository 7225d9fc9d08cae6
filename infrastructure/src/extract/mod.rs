//! Document text extraction
//!
//! [`DocumentReader`] implements the [`DocumentSource`] port. It resolves
//! the container format from the file extension, applies the size cap, and
//! routes the bytes to the format-specific extractor.

mod docx;
mod pdf;
mod txt;

use soalgen_application::ports::document_source::{DocumentSource, ExtractionError};
use soalgen_domain::SourceFormat;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Largest document accepted for extraction (10 MB)
pub const MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Reads PDF, DOCX, and plain-text documents from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentReader;

impl DocumentReader {
    pub fn new() -> Self {
        Self
    }

    /// Extract text from in-memory bytes of a known format
    pub fn extract_bytes(&self, bytes: &[u8], format: SourceFormat) -> Result<String, ExtractionError> {
        match format {
            SourceFormat::Pdf => pdf::extract(bytes),
            SourceFormat::Docx => docx::extract(bytes),
            SourceFormat::Txt => txt::extract(bytes),
        }
    }
}

impl DocumentSource for DocumentReader {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let format = SourceFormat::from_extension(extension).ok_or_else(|| {
            ExtractionError::UnsupportedFormat {
                extension: extension.to_string(),
            }
        })?;

        let size = fs::metadata(path)?.len();
        if size > MAX_DOCUMENT_BYTES {
            return Err(ExtractionError::TooLarge {
                size,
                max: MAX_DOCUMENT_BYTES,
            });
        }

        debug!("Reading {} as {format}", path.display());
        let bytes = fs::read(path)?;
        let text = self.extract_bytes(&bytes, format)?;
        info!(
            "Extracted {} characters from {}",
            text.chars().count(),
            path.display()
        );
        Ok(text)
    }
}
