//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Extracted text too short: {actual} characters (minimum {minimum})")]
    InsufficientContent { actual: usize, minimum: usize },

    #[error("A question needs exactly {expected} options, got {actual}")]
    InvalidOptionCount { expected: usize, actual: usize },

    #[error("Correct answer is not one of the options")]
    CorrectAnswerMissing,
}

impl DomainError {
    /// Check if this error means the uploaded material was too thin to work with
    pub fn is_insufficient_content(&self) -> bool {
        matches!(self, DomainError::InsufficientContent { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_content_display() {
        let error = DomainError::InsufficientContent {
            actual: 42,
            minimum: 100,
        };
        assert_eq!(
            error.to_string(),
            "Extracted text too short: 42 characters (minimum 100)"
        );
    }

    #[test]
    fn test_is_insufficient_content_check() {
        let short = DomainError::InsufficientContent {
            actual: 0,
            minimum: 100,
        };
        assert!(short.is_insufficient_content());
        assert!(!DomainError::CorrectAnswerMissing.is_insufficient_content());
    }
}
