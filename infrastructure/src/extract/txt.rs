//! Plain-text extraction (strict UTF-8)

use soalgen_application::ports::document_source::ExtractionError;
use soalgen_domain::SourceFormat;

pub(super) fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(text.to_string()),
        Err(error) => Err(ExtractionError::Malformed {
            format: SourceFormat::Txt,
            reason: format!("invalid UTF-8: {error}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passes_through() {
        assert_eq!(extract("Halo dunia é".as_bytes()).unwrap(), "Halo dunia é");
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let error = extract(&[0xff, 0xfe, 0x41]).unwrap_err();
        assert!(matches!(
            error,
            ExtractionError::Malformed {
                format: SourceFormat::Txt,
                ..
            }
        ));
    }
}
