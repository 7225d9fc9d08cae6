//! Quiz export artifacts
//!
//! Renders a generated quiz into one of the supported export formats and
//! writes it under a target directory. The file name is fixed; only the
//! extension varies per format.

mod csv;
mod json;
mod text;

use soalgen_application::{ExportError, ExportSink};
use soalgen_domain::{ExportFormat, Quiz};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of every export artifact
pub const EXPORT_FILE_STEM: &str = "soal_dan_jawaban";

/// Renders quizzes to CSV, JSON, or plain text files
#[derive(Debug, Clone, Copy, Default)]
pub struct QuizExporter;

impl QuizExporter {
    pub fn new() -> Self {
        Self
    }

    /// Render `quiz` to the in-memory representation of `format`
    pub fn render(&self, quiz: &Quiz, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => csv::render(quiz),
            ExportFormat::Json => json::render(quiz),
            ExportFormat::Txt => Ok(text::render(quiz)),
        }
    }
}

impl ExportSink for QuizExporter {
    fn export(
        &self,
        quiz: &Quiz,
        format: ExportFormat,
        dir: &Path,
    ) -> Result<PathBuf, ExportError> {
        let rendered = self.render(quiz, format)?;

        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.{}", EXPORT_FILE_STEM, format.extension()));

        let mut writer = BufWriter::new(File::create(&path)?);
        writer.write_all(rendered.as_bytes())?;
        writer.flush()?;

        info!(
            "Exported {} questions as {} to {}",
            quiz.len(),
            format,
            path.display()
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soalgen_domain::{Difficulty, Question};

    fn sample_quiz() -> Quiz {
        let questions = vec![
            Question::new(
                "Apa yang dimaksud dengan fotosintesis?",
                vec![
                    "Proses pembentukan energi".to_string(),
                    "Opsi 2".to_string(),
                    "Opsi 3".to_string(),
                    "Opsi 4".to_string(),
                ],
                "Proses pembentukan energi",
                "Fotosintesis mengubah cahaya menjadi energi kimia.",
                Difficulty::Easy,
            ),
            Question::new(
                "Lengkapi kalimat: Klorofil menyerap ______ matahari.",
                vec![
                    "cahaya".to_string(),
                    "Opsi42".to_string(),
                    "Opsi7".to_string(),
                    "Opsi99".to_string(),
                ],
                "cahaya",
                "",
                Difficulty::Medium,
            ),
        ];
        Quiz::new(questions)
    }

    #[test]
    fn test_export_writes_file_with_expected_name() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = QuizExporter::new();

        let path = exporter
            .export(&sample_quiz(), ExportFormat::Json, dir.path())
            .unwrap();

        assert_eq!(path.file_name().unwrap(), "soal_dan_jawaban.json");
        assert!(path.exists());
    }

    #[test]
    fn test_export_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("keluaran").join("kuis");
        let exporter = QuizExporter::new();

        let path = exporter
            .export(&sample_quiz(), ExportFormat::Txt, &nested)
            .unwrap();

        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }

    #[test]
    fn test_each_format_gets_its_own_extension() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = QuizExporter::new();
        let quiz = sample_quiz();

        for (format, name) in [
            (ExportFormat::Csv, "soal_dan_jawaban.csv"),
            (ExportFormat::Json, "soal_dan_jawaban.json"),
            (ExportFormat::Txt, "soal_dan_jawaban.txt"),
        ] {
            let path = exporter.export(&quiz, format, dir.path()).unwrap();
            assert_eq!(path.file_name().unwrap(), name);
        }
    }
}
