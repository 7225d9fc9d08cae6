//! Question entity

use super::value_objects::{Difficulty, QuestionType};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of options every question carries
pub const OPTION_COUNT: usize = 4;

/// A multiple-choice question
///
/// Invariants: exactly [`OPTION_COUNT`] options, and the correct answer is
/// one of them. Serialized field names match the export contract, so a
/// question written to JSON reads back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    text: String,
    options: Vec<String>,
    correct_answer: String,
    explanation: String,
    #[serde(rename = "type")]
    question_type: QuestionType,
    difficulty: Difficulty,
}

impl Question {
    /// Create a new question
    ///
    /// # Panics
    /// Panics if the option count is wrong or the correct answer is not
    /// among the options
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        explanation: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        let correct_answer = correct_answer.into();
        assert_eq!(options.len(), OPTION_COUNT, "Question needs {OPTION_COUNT} options");
        assert!(
            options.contains(&correct_answer),
            "Correct answer must be one of the options"
        );
        Self {
            text: text.into(),
            options,
            correct_answer,
            explanation: explanation.into(),
            question_type: QuestionType::MultipleChoice,
            difficulty,
        }
    }

    /// Try to create a question, returning the violated invariant on failure
    pub fn try_new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        explanation: impl Into<String>,
        difficulty: Difficulty,
    ) -> Result<Self, DomainError> {
        let correct_answer = correct_answer.into();
        if options.len() != OPTION_COUNT {
            return Err(DomainError::InvalidOptionCount {
                expected: OPTION_COUNT,
                actual: options.len(),
            });
        }
        if !options.contains(&correct_answer) {
            return Err(DomainError::CorrectAnswerMissing);
        }
        Ok(Self {
            text: text.into(),
            options,
            correct_answer,
            explanation: explanation.into(),
            question_type: QuestionType::MultipleChoice,
            difficulty,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Position of the correct answer within the options
    pub fn correct_index(&self) -> usize {
        self.options
            .iter()
            .position(|option| option == &self.correct_answer)
            .unwrap_or(0)
    }

    /// Display letter for an option index (A, B, C, D)
    pub fn letter(index: usize) -> char {
        (b'A' + index as u8) as char
    }

    /// Check whether a selected option is the correct one
    pub fn is_correct(&self, selected: &str) -> bool {
        self.correct_answer == selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec![
            "Jawaban pertama".to_string(),
            "Jawaban kedua".to_string(),
            "Jawaban ketiga".to_string(),
            "Jawaban keempat".to_string(),
        ]
    }

    #[test]
    fn test_question_creation() {
        let question = Question::new(
            "Apa itu fotosintesis?",
            options(),
            "Jawaban kedua",
            "Penjelasan singkat.",
            Difficulty::Medium,
        );
        assert_eq!(question.text(), "Apa itu fotosintesis?");
        assert_eq!(question.correct_index(), 1);
        assert!(question.is_correct("Jawaban kedua"));
        assert!(!question.is_correct("Jawaban pertama"));
    }

    #[test]
    #[should_panic]
    fn test_wrong_option_count_panics() {
        Question::new(
            "Apa itu?",
            vec!["satu".to_string(), "dua".to_string()],
            "satu",
            "",
            Difficulty::Easy,
        );
    }

    #[test]
    fn test_try_new_rejects_missing_answer() {
        let result = Question::try_new(
            "Apa itu?",
            options(),
            "Bukan opsi",
            "",
            Difficulty::Easy,
        );
        assert_eq!(result.unwrap_err(), DomainError::CorrectAnswerMissing);
    }

    #[test]
    fn test_try_new_rejects_wrong_count() {
        let result = Question::try_new("Apa itu?", vec![], "x", "", Difficulty::Easy);
        assert_eq!(
            result.unwrap_err(),
            DomainError::InvalidOptionCount {
                expected: OPTION_COUNT,
                actual: 0
            }
        );
    }

    #[test]
    fn test_letters() {
        assert_eq!(Question::letter(0), 'A');
        assert_eq!(Question::letter(3), 'D');
    }

    #[test]
    fn test_serialized_field_names() {
        let question = Question::new(
            "Apa itu fotosintesis?",
            options(),
            "Jawaban pertama",
            "Karena begitu.",
            Difficulty::Easy,
        );
        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(value["question"], "Apa itu fotosintesis?");
        assert_eq!(value["type"], "pilihan_ganda");
        assert_eq!(value["difficulty"], "easy");
        assert_eq!(value["options"].as_array().unwrap().len(), 4);
        assert_eq!(value["correct_answer"], "Jawaban pertama");
        assert_eq!(value["explanation"], "Karena begitu.");

        let back: Question = serde_json::from_value(value).unwrap();
        assert_eq!(back, question);
    }
}
