//! Concept mining
//!
//! Two scanners pull candidate concepts out of cleaned material:
//!
//! - [`key_concepts`] walks sentence by sentence and picks up title-cased
//!   words plus words introduced by a label ending in a colon. These drive
//!   the concept overview shown after ingestion.
//! - [`frequent_concepts`] takes every capitalized word in the text and
//!   keeps the most repeated ones. These feed question synthesis.
//!
//! Both rank candidates by how often they appear; ties keep the order in
//! which they first occurred, so output is deterministic for a given text.

use super::sentences::split_sentences;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Default cap for [`key_concepts`]
pub const DEFAULT_MAX_CONCEPTS: usize = 20;

/// Cap for [`frequent_concepts`]
pub const FREQUENT_CONCEPT_LIMIT: usize = 15;

static TITLE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]+\b").unwrap());

/// Title-cased and colon-introduced words, ranked by frequency
pub fn key_concepts(text: &str, max_concepts: usize) -> Vec<String> {
    let mut candidates = Vec::new();
    for sentence in split_sentences(text) {
        let words: Vec<&str> = sentence.split_whitespace().collect();
        for (i, word) in words.iter().enumerate() {
            let cleaned = alphabetic_only(word);
            if cleaned.chars().count() > 3
                && (is_title_cased(&cleaned) || (i > 0 && words[i - 1].ends_with(':')))
            {
                candidates.push(cleaned.to_lowercase());
            }
        }
    }
    rank_by_frequency(candidates, max_concepts)
}

/// Repeated capitalized words, ranked by frequency
pub fn frequent_concepts(text: &str) -> Vec<String> {
    let candidates: Vec<String> = TITLE_WORD
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|word| word.len() > 4)
        .map(str::to_lowercase)
        .collect();
    rank_by_frequency(candidates, FREQUENT_CONCEPT_LIMIT)
}

/// Keep only alphabetic characters, dropping digits and punctuation
fn alphabetic_only(word: &str) -> String {
    word.chars().filter(|c| c.is_alphabetic()).collect()
}

/// An uppercase first character followed by lowercase only
fn is_title_cased(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.is_uppercase() && chars.all(char::is_lowercase),
        None => false,
    }
}

/// Deduplicate candidates and order them by descending count
///
/// The sort is stable over first-occurrence order, which is what makes
/// concept extraction reproducible across runs.
fn rank_by_frequency(candidates: Vec<String>, limit: usize) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut ranked: Vec<String> = Vec::new();
    for candidate in candidates {
        match counts.get_mut(&candidate) {
            Some(count) => *count += 1,
            None => {
                counts.insert(candidate.clone(), 1);
                ranked.push(candidate);
            }
        }
    }
    ranked.sort_by(|a, b| counts[b.as_str()].cmp(&counts[a.as_str()]));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_cased_words_are_concepts() {
        let concepts = key_concepts("Proses Fotosintesis terjadi di daun hijau.", 20);
        assert_eq!(concepts, vec!["proses", "fotosintesis"]);
    }

    #[test]
    fn test_short_words_are_skipped() {
        // "Air" survives the title check but not the length check
        let concepts = key_concepts("Air adalah zat penting.", 20);
        assert!(concepts.is_empty());
    }

    #[test]
    fn test_colon_introduces_a_concept() {
        let concepts = key_concepts("definisi: respirasi adalah pertukaran gas.", 20);
        assert_eq!(concepts, vec!["respirasi"]);
    }

    #[test]
    fn test_all_caps_is_not_title_cased() {
        let concepts = key_concepts("Standar NASA berlaku di sini.", 20);
        assert_eq!(concepts, vec!["standar"]);
    }

    #[test]
    fn test_frequency_beats_position() {
        let text = "Mitokondria penting. Energi berasal dari sini. Energi disimpan.";
        let concepts = key_concepts(text, 20);
        assert_eq!(concepts, vec!["energi", "mitokondria"]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let concepts = key_concepts("Klorofil menyerap cahaya. Glukosa tersimpan di akar.", 20);
        assert_eq!(concepts, vec!["klorofil", "glukosa"]);
    }

    #[test]
    fn test_max_concepts_truncates() {
        let text = "Alpha Bravo Charlie Delta Echo.";
        let concepts = key_concepts(text, 3);
        assert_eq!(concepts, vec!["alpha", "bravo", "charlie"]);
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        let text = "Fotosintesis butuh Cahaya. Cahaya dan Klorofil bekerja sama.";
        let first = key_concepts(text, 20);
        let second = key_concepts(text, 20);
        assert_eq!(first, second);
    }

    #[test]
    fn test_frequent_concepts_need_five_letters() {
        // "Daun" has four letters and is dropped; "Cahaya" stays
        let concepts = frequent_concepts("Daun menyerap Cahaya. Cahaya masuk ke Daun.");
        assert_eq!(concepts, vec!["cahaya"]);
    }

    #[test]
    fn test_frequent_concepts_rank_by_count() {
        let text = "Energi Cahaya Energi Klorofil Energi Cahaya";
        let concepts = frequent_concepts(text);
        assert_eq!(concepts, vec!["energi", "cahaya", "klorofil"]);
    }

    #[test]
    fn test_digits_are_stripped_before_the_checks() {
        let concepts = key_concepts("Abad21 membawa Teknologi baru.", 20);
        assert_eq!(concepts, vec!["abad", "teknologi"]);
    }
}
