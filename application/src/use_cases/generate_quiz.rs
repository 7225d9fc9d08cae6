//! Generate quiz use case
//!
//! Drives concept mining and question synthesis over validated material
//! and rolls the result up into a quiz with analytics.

use crate::config::generation_params::{GenerationParams, MAX_QUESTIONS, MIN_QUESTIONS};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use rand::SeedableRng;
use rand::rngs::StdRng;
use soalgen_domain::{
    AnalyticsReport, Material, PipelineStage, QuestionSynthesizer, Quiz, SlotIncident,
};
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during quiz generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Question count must be between {min} and {max}, got {requested}")]
    InvalidQuestionCount {
        requested: usize,
        min: usize,
        max: usize,
    },
}

/// Input for the GenerateQuiz use case
#[derive(Debug, Clone)]
pub struct GenerateQuizInput {
    pub material: Material,
    pub params: GenerationParams,
}

impl GenerateQuizInput {
    pub fn new(material: Material, params: GenerationParams) -> Self {
        Self { material, params }
    }
}

/// Result of a generation run
#[derive(Debug, Clone)]
pub struct GenerateQuizOutput {
    pub quiz: Quiz,
    pub analytics: AnalyticsReport,
    /// Slots that degraded to the fallback question
    pub incidents: Vec<SlotIncident>,
}

/// Use case for generating a quiz from material
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateQuizUseCase;

impl GenerateQuizUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Execute the use case with default (no-op) progress
    pub fn execute(&self, input: GenerateQuizInput) -> Result<GenerateQuizOutput, GenerateError> {
        self.execute_with_progress(input, &NoProgress)
    }

    /// Execute the use case with progress callbacks
    pub fn execute_with_progress(
        &self,
        input: GenerateQuizInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<GenerateQuizOutput, GenerateError> {
        let count = input.params.num_questions;
        if !input.params.is_count_valid() {
            return Err(GenerateError::InvalidQuestionCount {
                requested: count,
                min: MIN_QUESTIONS,
                max: MAX_QUESTIONS,
            });
        }

        let mut rng = match input.params.seed {
            Some(seed) => {
                debug!("Seeding generator with {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        let concepts_stage = PipelineStage::Concepts;
        progress.on_stage_start(&concepts_stage, 1);
        let synthesizer = QuestionSynthesizer::for_material(&input.material);
        info!(
            "Pools ready: {} concepts, {} usable sentences",
            synthesizer.concepts().len(),
            synthesizer.sentences().len()
        );
        progress.on_unit_complete(
            &concepts_stage,
            &format!("{} konsep", synthesizer.concepts().len()),
            true,
        );
        progress.on_stage_complete(&concepts_stage);

        let synthesis_stage = PipelineStage::Synthesis;
        progress.on_stage_start(&synthesis_stage, count);
        let run = synthesizer.generate(count, &mut rng);
        let degraded: HashSet<usize> = run.incidents.iter().map(|incident| incident.slot).collect();
        for slot in 0..count {
            progress.on_unit_complete(
                &synthesis_stage,
                &format!("soal {}", slot + 1),
                !degraded.contains(&slot),
            );
        }
        progress.on_stage_complete(&synthesis_stage);

        for incident in &run.incidents {
            warn!(
                "Slot {} degraded to the fallback question: {}",
                incident.slot, incident.error
            );
        }

        let quiz = Quiz::new(run.questions);
        let analytics = AnalyticsReport::for_questions(quiz.questions());
        info!(
            "Generated {} questions ({} fallbacks)",
            quiz.len(),
            run.incidents.len()
        );

        Ok(GenerateQuizOutput {
            quiz,
            analytics,
            incidents: run.incidents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soalgen_domain::PipelineStage;
    use std::sync::Mutex;

    fn material() -> Material {
        Material::from_raw(
            "Fotosintesis adalah proses pembentukan energi pada tumbuhan hijau. \
             Energi cahaya diserap oleh Klorofil di dalam daun tumbuhan. Hasil \
             akhirnya berupa Glukosa dan oksigen yang dilepaskan ke udara bebas. \
             Fotosintesis membutuhkan Cahaya matahari setiap harinya.",
        )
        .unwrap()
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_stage_start(&self, stage: &PipelineStage, total_units: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start:{stage}:{total_units}"));
        }

        fn on_unit_complete(&self, stage: &PipelineStage, _label: &str, success: bool) {
            self.events
                .lock()
                .unwrap()
                .push(format!("unit:{stage}:{success}"));
        }

        fn on_stage_complete(&self, stage: &PipelineStage) {
            self.events.lock().unwrap().push(format!("end:{stage}"));
        }
    }

    #[test]
    fn test_generates_the_requested_count() {
        let use_case = GenerateQuizUseCase::new();
        let params = GenerationParams::default().with_num_questions(7).with_seed(1);
        let output = use_case
            .execute(GenerateQuizInput::new(material(), params))
            .unwrap();
        assert_eq!(output.quiz.len(), 7);
        assert_eq!(output.analytics.total_questions, 7);
    }

    #[test]
    fn test_rejects_out_of_range_counts() {
        let use_case = GenerateQuizUseCase::new();
        for requested in [0, 4, 21, 100] {
            let params = GenerationParams::default().with_num_questions(requested);
            let error = use_case
                .execute(GenerateQuizInput::new(material(), params))
                .unwrap_err();
            assert_eq!(
                error,
                GenerateError::InvalidQuestionCount {
                    requested,
                    min: MIN_QUESTIONS,
                    max: MAX_QUESTIONS,
                }
            );
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_quiz() {
        let use_case = GenerateQuizUseCase::new();
        let params = GenerationParams::default().with_seed(42);
        let first = use_case
            .execute(GenerateQuizInput::new(material(), params.clone()))
            .unwrap();
        let second = use_case
            .execute(GenerateQuizInput::new(material(), params))
            .unwrap();
        assert_eq!(first.quiz, second.quiz);
    }

    #[test]
    fn test_progress_sees_both_stages() {
        let use_case = GenerateQuizUseCase::new();
        let params = GenerationParams::default().with_num_questions(5).with_seed(3);
        let progress = RecordingProgress::default();
        use_case
            .execute_with_progress(GenerateQuizInput::new(material(), params), &progress)
            .unwrap();

        let events = progress.events.lock().unwrap();
        assert_eq!(events[0], "start:concepts:1");
        assert_eq!(events[1], "unit:concepts:true");
        assert_eq!(events[2], "end:concepts");
        assert_eq!(events[3], "start:synthesis:5");
        assert_eq!(events.iter().filter(|e| e.starts_with("unit:synthesis")).count(), 5);
        assert_eq!(events.last().unwrap(), "end:synthesis");
    }

    #[test]
    fn test_analytics_match_the_quiz() {
        let use_case = GenerateQuizUseCase::new();
        let params = GenerationParams::default().with_seed(9);
        let output = use_case
            .execute(GenerateQuizInput::new(material(), params))
            .unwrap();
        assert_eq!(
            output.analytics.difficulty_distribution.total(),
            output.quiz.len()
        );
        assert_eq!(
            output.analytics.question_types.get("pilihan_ganda"),
            Some(&output.quiz.len())
        );
    }
}
