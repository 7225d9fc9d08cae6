//! PDF text extraction via `pdf-extract`

use soalgen_application::ports::document_source::ExtractionError;
use soalgen_domain::SourceFormat;

pub(super) fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|error| ExtractionError::Malformed {
        format: SourceFormat::Pdf,
        reason: error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_malformed() {
        let error = extract(b"this is not a pdf").unwrap_err();
        assert!(matches!(
            error,
            ExtractionError::Malformed {
                format: SourceFormat::Pdf,
                ..
            }
        ));
    }
}
