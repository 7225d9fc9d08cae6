//! String utilities for the domain layer.

/// Shorten `s` to at most `max_len` bytes, appending `...` when cut.
///
/// The cut point backs up to a character boundary, so multibyte text
/// never produces an invalid slice.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3).min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

/// Uppercase the first character and lowercase the rest
///
/// Template pools interpolate concepts both mid-sentence (`{concept}`) and
/// sentence-initial (`{Concept}`); this produces the capitalized form.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
