//! Plain-text rendering
//!
//! Numbered question blocks with lettered options, the marked correct
//! answer, and the explanation when present.

use soalgen_domain::{Question, Quiz};
use std::fmt::Write;

pub(super) fn render(quiz: &Quiz) -> String {
    let mut out = String::from("SOAL DAN JAWABAN\n================\n\n");
    for (index, question) in quiz.iter().enumerate() {
        // Infallible: writing to a String cannot fail
        let _ = write_block(&mut out, index, question);
    }
    out
}

fn write_block(out: &mut String, index: usize, question: &Question) -> std::fmt::Result {
    writeln!(out, "{}. {}", index + 1, question.text())?;
    for (position, option) in question.options().iter().enumerate() {
        writeln!(out, "   {}. {}", Question::letter(position), option)?;
    }
    writeln!(out, "   ✅ Jawaban: {}", question.correct_answer())?;
    if !question.explanation().is_empty() {
        writeln!(out, "   💡 Penjelasan: {}", question.explanation())?;
    }
    writeln!(out)
}
