//! Quiz aggregate

use super::entities::Question;
use serde::{Deserialize, Serialize};

/// An ordered set of generated questions
///
/// Serializes transparently as a JSON array, which is exactly the export
/// payload shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quiz {
    questions: Vec<Question>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}

impl From<Vec<Question>> for Quiz {
    fn from(questions: Vec<Question>) -> Self {
        Quiz::new(questions)
    }
}

impl<'a> IntoIterator for &'a Quiz {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::Difficulty;

    fn question(text: &str) -> Question {
        Question::new(
            text,
            vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            "a",
            "",
            Difficulty::Easy,
        )
    }

    #[test]
    fn test_quiz_serializes_as_array() {
        let quiz = Quiz::new(vec![question("Satu?"), question("Dua?")]);
        let value = serde_json::to_value(&quiz).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_quiz() {
        let quiz = Quiz::default();
        assert!(quiz.is_empty());
        assert_eq!(quiz.len(), 0);
    }

    #[test]
    fn test_iteration() {
        let quiz = Quiz::new(vec![question("Satu?"), question("Dua?")]);
        let texts: Vec<&str> = quiz.iter().map(|q| q.text()).collect();
        assert_eq!(texts, vec!["Satu?", "Dua?"]);
    }
}
