//! Sentence selection
//!
//! Fill-in-the-blank questions need sentences with enough substance to
//! survive having a word removed. Fragments and headings are filtered out.

/// Minimum word count for a sentence to be usable
pub const MIN_SENTENCE_WORDS: usize = 5;

/// A sentence must be strictly longer than this many characters
pub const MIN_SENTENCE_CHARS: usize = 20;

/// Split text on sentence-ending punctuation
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(['.', '!', '?'])
}

/// Sentences long enough to carry a question
pub fn meaningful_sentences(text: &str) -> Vec<String> {
    split_sentences(text)
        .map(str::trim)
        .filter(|sentence| {
            sentence.split_whitespace().count() >= MIN_SENTENCE_WORDS
                && sentence.chars().count() > MIN_SENTENCE_CHARS
        })
        .map(ToOwned::to_owned)
        .collect()
}
