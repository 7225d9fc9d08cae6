//! CSV rendering
//!
//! One row per question. The four option columns are labeled `Opsi_A`
//! through `Opsi_D` to match the answer letters shown on screen.

use soalgen_application::ExportError;
use soalgen_domain::{ExportFormat, Question, Quiz};

const HEADER: [&str; 10] = [
    "No",
    "Soal",
    "Jawaban_Benar",
    "Penjelasan",
    "Tipe",
    "Kesulitan",
    "Opsi_A",
    "Opsi_B",
    "Opsi_C",
    "Opsi_D",
];

pub(super) fn render(quiz: &Quiz) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(HEADER).map_err(encode_error)?;
    for (index, question) in quiz.iter().enumerate() {
        writer
            .write_record(row(index, question))
            .map_err(encode_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| encode_error(e.into_error()))?;
    String::from_utf8(bytes).map_err(encode_error)
}

fn row(index: usize, question: &Question) -> Vec<String> {
    let mut record = vec![
        (index + 1).to_string(),
        question.text().to_string(),
        question.correct_answer().to_string(),
        question.explanation().to_string(),
        question.question_type().as_str().to_string(),
        question.difficulty().as_str().to_string(),
    ];
    record.extend(question.options().iter().cloned());
    record
}

fn encode_error(error: impl std::fmt::Display) -> ExportError {
    ExportError::Encode {
        format: ExportFormat::Csv,
        reason: error.to_string(),
    }
}
