//! Quiz analytics
//!
//! Distribution and scoring summaries derived from a generated quiz and,
//! after a quiz run, from the recorded answers.

use crate::question::{Difficulty, Question};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Accuracy at or above this is rated Excellent
pub const EXCELLENT_THRESHOLD: f64 = 80.0;

/// Accuracy at or above this is rated Good
pub const GOOD_THRESHOLD: f64 = 60.0;

/// Question counts per difficulty level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyDistribution {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl DifficultyDistribution {
    pub fn record(&mut self, difficulty: Difficulty) {
        match difficulty {
            Difficulty::Easy => self.easy += 1,
            Difficulty::Medium => self.medium += 1,
            Difficulty::Hard => self.hard += 1,
        }
    }

    pub fn count(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    pub fn total(&self) -> usize {
        self.easy + self.medium + self.hard
    }

    /// Weighted mean of the difficulty levels, None for an empty quiz
    pub fn average(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let weighted: usize = Difficulty::ALL
            .iter()
            .map(|difficulty| self.count(*difficulty) * difficulty.weight())
            .sum();
        Some(weighted as f64 / total as f64)
    }

    /// Indonesian label for the average difficulty, "N/A" for an empty quiz
    pub fn average_label(&self) -> &'static str {
        match self.average() {
            None => "N/A",
            Some(average) if average < 1.5 => "Mudah",
            Some(average) if average < 2.5 => "Sedang",
            Some(_) => "Sulit",
        }
    }
}

/// Performance rating for a quiz run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Performance {
    Excellent,
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl Performance {
    pub fn from_accuracy(accuracy: f64) -> Self {
        if accuracy >= EXCELLENT_THRESHOLD {
            Performance::Excellent
        } else if accuracy >= GOOD_THRESHOLD {
            Performance::Good
        } else {
            Performance::NeedsImprovement
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Performance::Excellent => "Excellent",
            Performance::Good => "Good",
            Performance::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for Performance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One graded answer from a quiz run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub selected: String,
    pub is_correct: bool,
}

impl AnswerRecord {
    /// Grade a selected option against its question
    pub fn graded(question_index: usize, selected: impl Into<String>, question: &Question) -> Self {
        let selected = selected.into();
        let is_correct = question.is_correct(&selected);
        Self {
            question_index,
            selected,
            is_correct,
        }
    }
}

/// Score summary over a set of answer records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub correct_answers: usize,
    pub total_questions: usize,
    pub accuracy: f64,
    pub performance: Performance,
}

impl ResultSummary {
    pub fn from_records(records: &[AnswerRecord]) -> Self {
        let total_questions = records.len();
        let correct_answers = records.iter().filter(|record| record.is_correct).count();
        let accuracy = if total_questions > 0 {
            correct_answers as f64 / total_questions as f64 * 100.0
        } else {
            0.0
        };
        Self {
            correct_answers,
            total_questions,
            accuracy,
            performance: Performance::from_accuracy(accuracy),
        }
    }
}

/// Analytics for a generated quiz
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub total_questions: usize,
    pub difficulty_distribution: DifficultyDistribution,
    pub question_types: BTreeMap<String, usize>,
    pub generation_time: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub quiz_results: Option<ResultSummary>,
}

impl AnalyticsReport {
    /// Build the report for a freshly generated quiz
    pub fn for_questions(questions: &[Question]) -> Self {
        let mut difficulty_distribution = DifficultyDistribution::default();
        let mut question_types: BTreeMap<String, usize> = BTreeMap::new();
        for question in questions {
            difficulty_distribution.record(question.difficulty());
            *question_types
                .entry(question.question_type().as_str().to_string())
                .or_insert(0) += 1;
        }
        Self {
            total_questions: questions.len(),
            difficulty_distribution,
            question_types,
            generation_time: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            quiz_results: None,
        }
    }

    /// Attach graded answers from a quiz run
    pub fn with_results(mut self, records: &[AnswerRecord]) -> Self {
        self.quiz_results = Some(ResultSummary::from_records(records));
        self
    }

    pub fn average_difficulty_label(&self) -> &'static str {
        self.difficulty_distribution.average_label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(difficulty: Difficulty) -> Question {
        Question::new(
            "Apa itu?",
            vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            "a",
            "",
            difficulty,
        )
    }

    #[test]
    fn test_distribution_counts_every_level() {
        let questions = vec![
            question(Difficulty::Easy),
            question(Difficulty::Easy),
            question(Difficulty::Hard),
        ];
        let report = AnalyticsReport::for_questions(&questions);
        assert_eq!(report.difficulty_distribution.easy, 2);
        assert_eq!(report.difficulty_distribution.medium, 0);
        assert_eq!(report.difficulty_distribution.hard, 1);
        assert_eq!(report.total_questions, 3);
        assert_eq!(report.question_types.get("pilihan_ganda"), Some(&3));
    }

    #[test]
    fn test_average_buckets() {
        let easy = DifficultyDistribution {
            easy: 3,
            medium: 1,
            hard: 0,
        };
        assert_eq!(easy.average_label(), "Mudah");

        let medium = DifficultyDistribution {
            easy: 1,
            medium: 1,
            hard: 1,
        };
        assert_eq!(medium.average(), Some(2.0));
        assert_eq!(medium.average_label(), "Sedang");

        let hard = DifficultyDistribution {
            easy: 0,
            medium: 1,
            hard: 3,
        };
        assert_eq!(hard.average_label(), "Sulit");
    }

    #[test]
    fn test_empty_distribution_has_no_average() {
        let empty = DifficultyDistribution::default();
        assert_eq!(empty.average(), None);
        assert_eq!(empty.average_label(), "N/A");
    }

    #[test]
    fn test_boundary_accuracies() {
        assert_eq!(Performance::from_accuracy(80.0), Performance::Excellent);
        assert_eq!(Performance::from_accuracy(79.9), Performance::Good);
        assert_eq!(Performance::from_accuracy(60.0), Performance::Good);
        assert_eq!(
            Performance::from_accuracy(59.9),
            Performance::NeedsImprovement
        );
    }

    #[test]
    fn test_summary_over_empty_records() {
        let summary = ResultSummary::from_records(&[]);
        assert_eq!(summary.total_questions, 0);
        assert_eq!(summary.correct_answers, 0);
        assert_eq!(summary.accuracy, 0.0);
        assert_eq!(summary.performance, Performance::NeedsImprovement);
    }

    #[test]
    fn test_graded_records_roll_up() {
        let q = question(Difficulty::Medium);
        let records = vec![
            AnswerRecord::graded(0, "a", &q),
            AnswerRecord::graded(1, "b", &q),
            AnswerRecord::graded(2, "a", &q),
            AnswerRecord::graded(3, "a", &q),
        ];
        let summary = ResultSummary::from_records(&records);
        assert_eq!(summary.correct_answers, 3);
        assert_eq!(summary.accuracy, 75.0);
        assert_eq!(summary.performance, Performance::Good);
    }

    #[test]
    fn test_with_results_attaches_summary() {
        let q = question(Difficulty::Easy);
        let report = AnalyticsReport::for_questions(std::slice::from_ref(&q))
            .with_results(&[AnswerRecord::graded(0, "a", &q)]);
        let results = report.quiz_results.unwrap();
        assert_eq!(results.accuracy, 100.0);
        assert_eq!(results.performance, Performance::Excellent);
    }

    #[test]
    fn test_performance_serializes_with_space() {
        let json = serde_json::to_string(&Performance::NeedsImprovement).unwrap();
        assert_eq!(json, "\"Needs Improvement\"");
    }
}
