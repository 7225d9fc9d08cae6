//! Interactive session state
//!
//! Holds everything an interactive run accumulates: loaded material, the
//! current quiz, analytics, and graded answers. State invalidation is
//! centralized here so loading new material can never leave a stale quiz
//! behind.

use crate::config::generation_params::GenerationParams;
use soalgen_domain::{AnalyticsReport, AnswerRecord, Material, Quiz};
use std::path::PathBuf;

/// State for one interactive session
#[derive(Debug, Default)]
pub struct QuizSession {
    params: GenerationParams,
    source: Option<PathBuf>,
    material: Option<Material>,
    quiz: Option<Quiz>,
    analytics: Option<AnalyticsReport>,
    answers: Vec<AnswerRecord>,
}

impl QuizSession {
    pub fn new(params: GenerationParams) -> Self {
        Self {
            params,
            ..Default::default()
        }
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut GenerationParams {
        &mut self.params
    }

    pub fn source(&self) -> Option<&PathBuf> {
        self.source.as_ref()
    }

    pub fn material(&self) -> Option<&Material> {
        self.material.as_ref()
    }

    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    pub fn analytics(&self) -> Option<&AnalyticsReport> {
        self.analytics.as_ref()
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn has_material(&self) -> bool {
        self.material.is_some()
    }

    pub fn has_quiz(&self) -> bool {
        self.quiz.is_some()
    }

    /// Swap in newly ingested material, dropping any quiz built on the old one
    pub fn load_material(&mut self, source: PathBuf, material: Material) {
        self.source = Some(source);
        self.material = Some(material);
        self.reset_quiz();
    }

    /// Store a freshly generated quiz and its analytics
    pub fn record_generation(&mut self, quiz: Quiz, analytics: AnalyticsReport) {
        self.quiz = Some(quiz);
        self.analytics = Some(analytics);
        self.answers.clear();
    }

    /// Store graded answers and fold them into the analytics
    pub fn record_answers(&mut self, answers: Vec<AnswerRecord>) {
        self.analytics = self
            .analytics
            .take()
            .map(|analytics| analytics.with_results(&answers));
        self.answers = answers;
    }

    /// Drop the current quiz so the next generation starts clean
    pub fn reset_quiz(&mut self) {
        self.quiz = None;
        self.analytics = None;
        self.answers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soalgen_domain::{Difficulty, Question};

    fn material() -> Material {
        Material::from_raw(
            "Fotosintesis adalah proses pembentukan energi pada tumbuhan hijau \
             yang berlangsung di dalam daun dan membutuhkan cahaya matahari.",
        )
        .unwrap()
    }

    fn quiz() -> Quiz {
        Quiz::new(vec![Question::new(
            "Apa itu fotosintesis?",
            vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            "a",
            "",
            Difficulty::Easy,
        )])
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = QuizSession::new(GenerationParams::default());
        assert!(!session.has_material());
        assert!(!session.has_quiz());
        assert!(session.answers().is_empty());
    }

    #[test]
    fn test_loading_material_invalidates_the_quiz() {
        let mut session = QuizSession::new(GenerationParams::default());
        session.load_material(PathBuf::from("a.txt"), material());
        let q = quiz();
        let analytics = AnalyticsReport::for_questions(q.questions());
        session.record_generation(q, analytics);
        assert!(session.has_quiz());

        session.load_material(PathBuf::from("b.txt"), material());
        assert!(session.has_material());
        assert!(!session.has_quiz());
        assert_eq!(session.source(), Some(&PathBuf::from("b.txt")));
    }

    #[test]
    fn test_recorded_answers_update_analytics() {
        let mut session = QuizSession::new(GenerationParams::default());
        session.load_material(PathBuf::from("a.txt"), material());
        let q = quiz();
        let analytics = AnalyticsReport::for_questions(q.questions());
        let record = AnswerRecord::graded(0, "a", &q.questions()[0]);
        session.record_generation(q, analytics);

        session.record_answers(vec![record]);
        assert_eq!(session.answers().len(), 1);
        let results = session.analytics().unwrap().quiz_results.clone().unwrap();
        assert_eq!(results.correct_answers, 1);
    }

    #[test]
    fn test_reset_clears_quiz_but_keeps_material() {
        let mut session = QuizSession::new(GenerationParams::default());
        session.load_material(PathBuf::from("a.txt"), material());
        let q = quiz();
        let analytics = AnalyticsReport::for_questions(q.questions());
        session.record_generation(q, analytics);

        session.reset_quiz();
        assert!(session.has_material());
        assert!(!session.has_quiz());
        assert!(session.analytics().is_none());
    }
}
