//! Question template pools
//!
//! Five template categories rotate across question slots. Each category
//! carries its own question stems, correct-answer stems, targeted
//! distractors, and an explanation stem. Placeholders:
//!
//! - `{concept}` interpolates the concept as-is (lowercase)
//! - `{Concept}` interpolates the capitalized form
//! - `{concept1}` / `{concept2}` appear only in comparison stems

use crate::core::string::capitalize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Template category, rotated per question slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    Definition,
    CauseEffect,
    Comparison,
    Application,
    Simple,
}

impl TemplateCategory {
    /// Rotation order across question slots
    pub const ALL: [TemplateCategory; 5] = [
        TemplateCategory::Definition,
        TemplateCategory::CauseEffect,
        TemplateCategory::Comparison,
        TemplateCategory::Application,
        TemplateCategory::Simple,
    ];

    /// Category assigned to a question slot (round-robin)
    pub fn for_slot(slot: usize) -> Self {
        Self::ALL[slot % Self::ALL.len()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::Definition => "definition",
            TemplateCategory::CauseEffect => "cause_effect",
            TemplateCategory::Comparison => "comparison",
            TemplateCategory::Application => "application",
            TemplateCategory::Simple => "simple",
        }
    }

    /// Question stems for this category
    pub fn question_templates(&self) -> &'static [&'static str] {
        match self {
            TemplateCategory::Definition => &[
                "Apa yang dimaksud dengan {concept}?",
                "Jelaskan pengertian dari {concept}!",
                "Definisikan konsep {concept}!",
            ],
            TemplateCategory::CauseEffect => &[
                "Apa penyebab dari {concept}?",
                "Apa dampak dari {concept}?",
                "Bagaimana {concept} mempengaruhi proses lainnya?",
            ],
            TemplateCategory::Comparison => &[
                "Bandingkan {concept1} dan {concept2}!",
                "Apa perbedaan antara {concept1} dengan {concept2}?",
                "Apa persamaan {concept1} dan {concept2}?",
            ],
            TemplateCategory::Application => &[
                "Bagaimana cara menerapkan {concept} dalam kehidupan sehari-hari?",
                "Berikan contoh penerapan {concept}!",
                "Aplikasi apa saja yang menggunakan prinsip {concept}?",
            ],
            TemplateCategory::Simple => &[
                "Apa itu {concept}?",
                "Jelaskan {concept} secara singkat!",
                "Apa fungsi dari {concept}?",
            ],
        }
    }

    /// Correct-answer stems for this category
    pub fn answer_templates(&self) -> &'static [&'static str] {
        match self {
            TemplateCategory::Definition => &[
                "{Concept} adalah konsep penting yang dijelaskan dalam materi",
                "Definisi {concept} tercantum secara detail dalam pembahasan",
                "{Concept} merujuk pada pengertian yang spesifik dalam konteks materi",
            ],
            TemplateCategory::CauseEffect => &[
                "{Concept} dipengaruhi oleh berbagai faktor yang saling terkait",
                "Dampak {concept} dapat dilihat dari beberapa aspek dalam materi",
                "Penyebab {concept} dijelaskan melalui mekanisme tertentu",
            ],
            TemplateCategory::Comparison => &[
                "Perbandingan menunjukkan perbedaan karakteristik yang signifikan",
                "Persamaan dan perbedaan dijelaskan melalui analisis komparatif",
                "Kedua konsep memiliki keunikan dan karakteristik masing-masing",
            ],
            TemplateCategory::Application => &[
                "{Concept} dapat diaplikasikan dalam berbagai situasi praktis",
                "Penerapan {concept} membutuhkan pemahaman konsep yang mendalam",
                "Aplikasi {concept} meliputi beberapa implementasi yang relevan",
            ],
            TemplateCategory::Simple => &[
                "{Concept} adalah elemen fundamental dalam materi",
                "Pemahaman {concept} penting untuk menguasai topik ini",
                "{Concept} memiliki peran kunci dalam pembahasan",
            ],
        }
    }

    /// Category-specific distractor stems (may be empty)
    pub fn specific_distractors(&self) -> &'static [&'static str] {
        match self {
            TemplateCategory::Definition => &[
                "{Concept} memiliki pengertian yang berbeda dari penjelasan materi",
                "Definisi {concept} tidak konsisten dengan pembahasan",
            ],
            TemplateCategory::CauseEffect => &[
                "{Concept} tidak memiliki hubungan sebab-akibat yang jelas",
                "Hubungan kausalitas tidak terbukti dalam materi",
            ],
            TemplateCategory::Comparison => &[
                "Perbandingan yang dilakukan tidak akurat",
                "Tidak ada perbedaan signifikan antara konsep-konsep tersebut",
            ],
            TemplateCategory::Application | TemplateCategory::Simple => &[],
        }
    }

    /// Explanation stem for this category
    pub fn explanation_template(&self) -> &'static str {
        match self {
            TemplateCategory::Definition => {
                "Jawaban benar karena sesuai dengan definisi {concept} yang dijelaskan dalam materi."
            }
            TemplateCategory::CauseEffect => {
                "Jawaban benar karena mencerminkan hubungan sebab-akibat {concept} yang tepat."
            }
            TemplateCategory::Comparison => {
                "Jawaban benar karena menunjukkan perbandingan yang akurat berdasarkan materi."
            }
            TemplateCategory::Application => {
                "Jawaban benar karena sesuai dengan penerapan {concept} dalam konteks yang relevan."
            }
            TemplateCategory::Simple => {
                "Jawaban benar karena sesuai dengan penjelasan {concept} dalam materi pembelajaran."
            }
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Distractor stems shared by every category
pub const GENERAL_DISTRACTORS: [&str; 4] = [
    "Konsep {concept} tidak relevan dengan materi",
    "{Concept} adalah istilah yang sudah usang",
    "Tidak ada penjelasan yang cukup dalam materi",
    "Jawaban tersebut tidak sesuai dengan konteks pembahasan",
];

/// Interpolate a single concept into a template
pub fn render(template: &str, concept: &str) -> String {
    template
        .replace("{Concept}", &capitalize(concept))
        .replace("{concept}", concept)
}

/// Interpolate a concept pair into a comparison template
pub fn render_pair(template: &str, first: &str, second: &str) -> String {
    template
        .replace("{concept1}", first)
        .replace("{concept2}", second)
}

/// Whether a template wants two distinct concepts
pub fn needs_two_concepts(template: &str) -> bool {
    template.contains("{concept1}")
}
