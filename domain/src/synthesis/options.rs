//! Option assembly
//!
//! Builds the four-option block for a template question: one rendered
//! correct answer plus three distractors sampled from the general pool and
//! the category's targeted pool. Duplicates are skipped and the block is
//! padded with placeholder options if the pool runs dry, so the option
//! count invariant holds no matter what.

use super::GenerationError;
use super::templates::{self, GENERAL_DISTRACTORS, TemplateCategory};
use crate::question::OPTION_COUNT;
use rand::Rng;
use rand::seq::SliceRandom;

/// Distractors sampled per question
const DISTRACTOR_SAMPLE: usize = 3;

pub(super) struct AssembledOptions {
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

pub(super) fn assemble<R: Rng + ?Sized>(
    category: TemplateCategory,
    concept: &str,
    rng: &mut R,
) -> Result<AssembledOptions, GenerationError> {
    let correct_template = category
        .answer_templates()
        .choose(rng)
        .ok_or(GenerationError::EmptyTemplatePool(category.as_str()))?;
    let correct_answer = templates::render(correct_template, concept);

    let mut pool: Vec<String> = GENERAL_DISTRACTORS
        .iter()
        .map(|template| templates::render(template, concept))
        .collect();
    pool.extend(
        category
            .specific_distractors()
            .iter()
            .map(|template| templates::render(template, concept)),
    );

    let sample_size = DISTRACTOR_SAMPLE.min(pool.len());
    let sampled: Vec<String> = pool.choose_multiple(rng, sample_size).cloned().collect();

    let mut options = vec![correct_answer.clone()];
    for distractor in sampled {
        if options.len() < OPTION_COUNT && !options.contains(&distractor) {
            options.push(distractor);
        }
    }
    while options.len() < OPTION_COUNT {
        options.push(format!("Opsi {}", options.len() + 1));
    }
    options.shuffle(rng);

    let explanation = templates::render(category.explanation_template(), concept);

    Ok(AssembledOptions {
        options,
        correct_answer,
        explanation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_assemble_produces_four_options_with_answer() {
        let mut rng = StdRng::seed_from_u64(11);
        for category in TemplateCategory::ALL {
            let assembled = assemble(category, "fotosintesis", &mut rng).unwrap();
            assert_eq!(assembled.options.len(), OPTION_COUNT);
            assert!(assembled.options.contains(&assembled.correct_answer));
        }
    }

    #[test]
    fn test_distractors_come_from_the_pools() {
        let mut rng = StdRng::seed_from_u64(3);
        let assembled = assemble(TemplateCategory::Definition, "osmosis", &mut rng).unwrap();

        let mut allowed: Vec<String> = GENERAL_DISTRACTORS
            .iter()
            .chain(TemplateCategory::Definition.specific_distractors())
            .map(|template| templates::render(template, "osmosis"))
            .collect();
        allowed.push(assembled.correct_answer.clone());

        for option in &assembled.options {
            assert!(allowed.contains(option), "unexpected option: {option}");
        }
    }

    #[test]
    fn test_explanation_mentions_the_concept() {
        let mut rng = StdRng::seed_from_u64(5);
        let assembled = assemble(TemplateCategory::Simple, "respirasi", &mut rng).unwrap();
        assert!(assembled.explanation.contains("respirasi"));
    }

    #[test]
    fn test_assembly_is_reproducible() {
        let a = assemble(
            TemplateCategory::Application,
            "difusi",
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();
        let b = assemble(
            TemplateCategory::Application,
            "difusi",
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();
        assert_eq!(a.options, b.options);
        assert_eq!(a.correct_answer, b.correct_answer);
    }
}
