//! Generation parameters
//!
//! Runtime knobs for a single generation run, already merged from config
//! files and CLI flags by the time they reach a use case.

use soalgen_domain::DEFAULT_MAX_CONCEPTS;

/// Smallest allowed question count
pub const MIN_QUESTIONS: usize = 5;

/// Largest allowed question count
pub const MAX_QUESTIONS: usize = 20;

/// Question count used when nothing is configured
pub const DEFAULT_QUESTIONS: usize = 10;

/// Parameters for one quiz generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationParams {
    /// How many questions to synthesize
    pub num_questions: usize,
    /// Whether console output shows explanations (exports always carry them)
    pub include_explanations: bool,
    /// Cap for the concept overview after ingestion
    pub max_concepts: usize,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            num_questions: DEFAULT_QUESTIONS,
            include_explanations: true,
            max_concepts: DEFAULT_MAX_CONCEPTS,
            seed: None,
        }
    }
}

impl GenerationParams {
    pub fn with_num_questions(mut self, num_questions: usize) -> Self {
        self.num_questions = num_questions;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_explanations(mut self, include_explanations: bool) -> Self {
        self.include_explanations = include_explanations;
        self
    }

    pub fn with_max_concepts(mut self, max_concepts: usize) -> Self {
        self.max_concepts = max_concepts;
        self
    }

    /// Whether the question count is inside the allowed range
    pub fn is_count_valid(&self) -> bool {
        (MIN_QUESTIONS..=MAX_QUESTIONS).contains(&self.num_questions)
    }

    /// Force a question count into the allowed range
    pub fn clamp_count(count: usize) -> usize {
        count.clamp(MIN_QUESTIONS, MAX_QUESTIONS)
    }
}
