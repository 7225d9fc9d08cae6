//! Teaching material entity
//!
//! [`Material`] wraps text that survived cleaning and the minimum-length
//! gate. Construction is the only way in, so every downstream consumer can
//! rely on the text being normalized and long enough to generate from.

mod cleaning;
mod concepts;
mod sentences;

pub use cleaning::clean_text;
pub use concepts::{DEFAULT_MAX_CONCEPTS, FREQUENT_CONCEPT_LIMIT, frequent_concepts, key_concepts};
pub use sentences::{MIN_SENTENCE_CHARS, MIN_SENTENCE_WORDS, meaningful_sentences, split_sentences};

use crate::core::error::DomainError;
use crate::core::string::truncate;

/// Minimum cleaned length for material to be usable
pub const MIN_CONTENT_CHARS: usize = 100;

/// Cleaned, validated source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Material {
    text: String,
}

impl Material {
    /// Clean raw extracted text and validate its length
    pub fn from_raw(raw: &str) -> Result<Self, DomainError> {
        let text = clean_text(raw);
        let actual = text.chars().count();
        if actual < MIN_CONTENT_CHARS {
            return Err(DomainError::InsufficientContent {
                actual,
                minimum: MIN_CONTENT_CHARS,
            });
        }
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Short excerpt for console display
    pub fn preview(&self, max_len: usize) -> String {
        truncate(&self.text, max_len)
    }

    /// Concept overview shown after ingestion
    pub fn key_concepts(&self, max_concepts: usize) -> Vec<String> {
        key_concepts(&self.text, max_concepts)
    }

    /// Concept pool used by question synthesis
    pub fn frequent_concepts(&self) -> Vec<String> {
        frequent_concepts(&self.text)
    }

    /// Sentence pool used for fill-in-the-blank questions
    pub fn meaningful_sentences(&self) -> Vec<String> {
        meaningful_sentences(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Fotosintesis adalah proses pembentukan energi pada tumbuhan \
        hijau. Energi cahaya diserap oleh Klorofil di dalam daun. Hasil akhirnya \
        berupa Glukosa dan oksigen yang dilepaskan ke udara.";

    #[test]
    fn test_from_raw_accepts_substantial_text() {
        let material = Material::from_raw(SAMPLE).unwrap();
        assert!(material.char_count() >= MIN_CONTENT_CHARS);
    }

    #[test]
    fn test_from_raw_rejects_short_text() {
        let error = Material::from_raw("Terlalu pendek.").unwrap_err();
        assert!(error.is_insufficient_content());
        match error {
            DomainError::InsufficientContent { actual, minimum } => {
                assert_eq!(actual, 15);
                assert_eq!(minimum, MIN_CONTENT_CHARS);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_raw_measures_after_cleaning() {
        // Padding with symbols does not help a short document pass the gate
        let raw = format!("pendek {}", "*".repeat(200));
        assert!(Material::from_raw(&raw).is_err());
    }

    #[test]
    fn test_preview_truncates() {
        let material = Material::from_raw(SAMPLE).unwrap();
        let preview = material.preview(20);
        assert!(preview.ends_with("..."));
        assert!(preview.len() <= 20);
    }

    #[test]
    fn test_concept_accessors_delegate() {
        let material = Material::from_raw(SAMPLE).unwrap();
        assert!(
            material
                .key_concepts(20)
                .contains(&"fotosintesis".to_string())
        );
        assert!(
            material
                .frequent_concepts()
                .contains(&"klorofil".to_string())
        );
        assert!(!material.meaningful_sentences().is_empty());
    }
}
