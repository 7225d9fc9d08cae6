//! Question synthesis
//!
//! Turns mined concepts and sentences into a fixed number of questions.
//! Slots rotate through the template categories; when the material gives
//! the synthesizer nothing to work with, it degrades rather than failing:
//!
//! - no concepts: fill-in-the-blank questions built from sentences
//! - no usable sentence either: a generic comprehension question
//!
//! Every run returns exactly the requested number of questions, plus an
//! incident record for each slot that had to fall back.

mod options;
pub mod templates;

pub use templates::TemplateCategory;

use crate::material::Material;
use crate::question::{Difficulty, Question};
use options::assemble;
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

/// Marker substituted for the removed word in blank questions
pub const BLANK_MARKER: &str = "______";

/// A word must be strictly longer than this to be blanked out
const MIN_BLANK_WORD_CHARS: usize = 4;

/// Why a slot could not be filled from its template category
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Concept pool is empty")]
    EmptyConceptPool,

    #[error("Template pool for '{0}' is empty")]
    EmptyTemplatePool(&'static str),

    #[error("No word long enough to blank out in: {0}")]
    NoBlankCandidate(String),
}

/// A slot that fell back to the generic question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotIncident {
    pub slot: usize,
    pub error: GenerationError,
}

/// Outcome of a synthesis run
#[derive(Debug, Clone)]
pub struct SynthesisRun {
    pub questions: Vec<Question>,
    pub incidents: Vec<SlotIncident>,
}

impl SynthesisRun {
    /// Number of slots that degraded to the fallback question
    pub fn fallback_count(&self) -> usize {
        self.incidents.len()
    }
}

/// Synthesizes questions from concept and sentence pools
#[derive(Debug, Clone)]
pub struct QuestionSynthesizer {
    concepts: Vec<String>,
    sentences: Vec<String>,
}

impl QuestionSynthesizer {
    /// Build pools from material
    pub fn for_material(material: &Material) -> Self {
        Self {
            concepts: material.frequent_concepts(),
            sentences: material.meaningful_sentences(),
        }
    }

    /// Build from explicit pools
    pub fn with_pools(concepts: Vec<String>, sentences: Vec<String>) -> Self {
        Self {
            concepts,
            sentences,
        }
    }

    pub fn concepts(&self) -> &[String] {
        &self.concepts
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Generate exactly `count` questions
    ///
    /// Never fails: a slot whose category cannot be satisfied yields the
    /// generic fallback question and an incident entry.
    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> SynthesisRun {
        let mut questions = Vec::with_capacity(count);
        let mut incidents = Vec::new();
        for slot in 0..count {
            match self.synthesize_slot(slot, rng) {
                Ok(question) => questions.push(question),
                Err(error) => {
                    incidents.push(SlotIncident { slot, error });
                    questions.push(fallback_question());
                }
            }
        }
        SynthesisRun {
            questions,
            incidents,
        }
    }

    fn synthesize_slot<R: Rng + ?Sized>(
        &self,
        slot: usize,
        rng: &mut R,
    ) -> Result<Question, GenerationError> {
        if self.concepts.is_empty() {
            return self.sentence_blank_question(rng);
        }

        let mut category = TemplateCategory::for_slot(slot);
        let concept = self
            .concepts
            .choose(rng)
            .ok_or(GenerationError::EmptyConceptPool)?;
        let mut template = *category
            .question_templates()
            .choose(rng)
            .ok_or(GenerationError::EmptyTemplatePool(category.as_str()))?;

        // Comparison stems need a partner concept. With fewer than two
        // concepts the slot demotes itself to a simple stem.
        let text = if templates::needs_two_concepts(template) {
            if self.concepts.len() >= 2 {
                let second = self.partner_concept(concept, rng)?;
                templates::render_pair(template, concept, &second)
            } else {
                category = TemplateCategory::Simple;
                template = *category
                    .question_templates()
                    .choose(rng)
                    .ok_or(GenerationError::EmptyTemplatePool(category.as_str()))?;
                templates::render(template, concept)
            }
        } else {
            templates::render(template, concept)
        };

        let assembled = assemble(category, concept, rng)?;
        let difficulty = Difficulty::sample(rng);

        Ok(Question::new(
            text,
            assembled.options,
            assembled.correct_answer,
            assembled.explanation,
            difficulty,
        ))
    }

    /// A concept other than `first`, drawn at random
    fn partner_concept<R: Rng + ?Sized>(
        &self,
        first: &str,
        rng: &mut R,
    ) -> Result<String, GenerationError> {
        let others: Vec<&String> = self
            .concepts
            .iter()
            .filter(|concept| concept.as_str() != first)
            .collect();
        others
            .choose(rng)
            .map(|concept| (*concept).clone())
            .ok_or(GenerationError::EmptyConceptPool)
    }

    /// Fill-in-the-blank question from the sentence pool
    fn sentence_blank_question<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Question, GenerationError> {
        let Some(sentence) = self.sentences.choose(rng) else {
            return Ok(fallback_question());
        };

        let words: Vec<&str> = sentence.split_whitespace().collect();
        let candidates: Vec<&str> = words
            .iter()
            .copied()
            .filter(|word| word.chars().count() > MIN_BLANK_WORD_CHARS)
            .collect();
        let blank_word = *candidates
            .choose(rng)
            .ok_or_else(|| GenerationError::NoBlankCandidate(sentence.clone()))?;

        let text = format!(
            "Lengkapi kalimat: {}",
            sentence.replacen(blank_word, BLANK_MARKER, 1)
        );

        let mut choices = vec![blank_word.to_string()];
        for _ in 0..3 {
            choices.push(format!("Opsi{}", rng.gen_range(1..=100)));
        }
        choices.shuffle(rng);

        Ok(Question::new(
            text,
            choices,
            blank_word,
            format!("Kata '{blank_word}' adalah jawaban yang tepat untuk melengkapi kalimat."),
            Difficulty::Easy,
        ))
    }
}

/// Generic comprehension question used when a slot cannot be filled
pub fn fallback_question() -> Question {
    let options = vec![
        "Materi sangat jelas dan mudah dipahami".to_string(),
        "Materi cukup jelas dengan beberapa bagian yang rumit".to_string(),
        "Materi cukup sulit dipahami".to_string(),
        "Materi sangat sulit dan perlu penjelasan lebih".to_string(),
    ];
    Question::new(
        "Apa yang Anda pahami tentang materi yang telah dipelajari?",
        options.clone(),
        options[0].clone(),
        "Soal ini menguji pemahaman umum terhadap materi.",
        Difficulty::Easy,
    )
}
