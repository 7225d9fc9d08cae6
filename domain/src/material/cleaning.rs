//! Text normalization for extracted documents
//!
//! PDF and DOCX extraction leaves line breaks, tabs, and stray symbols all
//! over the text. Cleaning collapses whitespace first, then strips every
//! character outside the allowed set, so a symbol squeezed between spaces
//! can still leave a double space behind. Sentence splitting tolerates that.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Anything outside word characters, whitespace, and basic punctuation
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s.,!?;:()-]").unwrap());

/// Collapse whitespace runs, strip disallowed characters, and trim
pub fn clean_text(raw: &str) -> String {
    let collapsed = WHITESPACE.replace_all(raw, " ");
    let kept = DISALLOWED.replace_all(&collapsed, "");
    kept.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(clean_text("satu\n\ndua\t\ttiga"), "satu dua tiga");
    }

    #[test]
    fn test_strips_disallowed_characters() {
        assert_eq!(clean_text("Hasil: 50% *penting*"), "Hasil: 50 penting");
        assert_eq!(clean_text("a@b#c"), "abc");
    }

    #[test]
    fn test_keeps_allowed_punctuation() {
        let text = "Apa itu (fotosintesis)? Proses, penting; sekali: ya - benar!";
        assert_eq!(clean_text(text), text);
    }

    #[test]
    fn test_keeps_unicode_word_characters() {
        assert_eq!(clean_text("énergie café"), "énergie café");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(clean_text("  tengah  "), "tengah");
    }

    #[test]
    fn test_standalone_symbol_leaves_double_space() {
        // Collapse runs before stripping, so a freestanding symbol
        // becomes a gap of two spaces.
        assert_eq!(clean_text("kiri * kanan"), "kiri  kanan");
    }
}
