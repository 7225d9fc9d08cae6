//! JSON rendering
//!
//! Pretty-printed array of question objects. Field names come from the
//! domain serde attributes, so the keys match the on-screen contract
//! (`question`, `options`, `correct_answer`, `explanation`, `type`,
//! `difficulty`).

use soalgen_application::ExportError;
use soalgen_domain::{ExportFormat, Quiz};

pub(super) fn render(quiz: &Quiz) -> Result<String, ExportError> {
    serde_json::to_string_pretty(quiz).map_err(|e| ExportError::Encode {
        format: ExportFormat::Json,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use soalgen_domain::{Difficulty, Question};

    #[test]
    fn test_json_is_an_array_with_contract_keys() {
        let quiz = Quiz::new(vec![Question::new(
            "Apa itu energi?",
            vec![
                "Kemampuan melakukan usaha".to_string(),
                "Opsi 2".to_string(),
                "Opsi 3".to_string(),
                "Opsi 4".to_string(),
            ],
            "Kemampuan melakukan usaha",
            "Energi adalah kemampuan melakukan usaha.",
            Difficulty::Medium,
        )]);

        let rendered = render(&quiz).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["question"], "Apa itu energi?");
        assert_eq!(array[0]["type"], "pilihan_ganda");
        assert_eq!(array[0]["difficulty"], "medium");
        assert_eq!(array[0]["options"].as_array().unwrap().len(), 4);
        assert_eq!(array[0]["correct_answer"], "Kemampuan melakukan usaha");
    }

    #[test]
    fn test_json_is_pretty_printed() {
        let quiz = Quiz::new(Vec::new());
        assert_eq!(render(&quiz).unwrap(), "[]");
    }
}
