//! Output formatter trait

use crate::config::OutputConfig;
use soalgen_domain::{AnalyticsReport, Quiz};

/// Trait for formatting generated quizzes
pub trait QuizFormatter {
    /// Format the full quiz, question by question
    fn format_quiz(&self, quiz: &Quiz, config: &OutputConfig) -> String;

    /// Format the counts-only summary
    fn format_summary(&self, quiz: &Quiz, analytics: &AnalyticsReport) -> String;

    /// Format as JSON
    fn format_json(&self, quiz: &Quiz) -> String;
}
