//! Console output formatter for generated quizzes

use crate::config::OutputConfig;
use crate::output::formatter::QuizFormatter;
use colored::Colorize;
use soalgen_domain::{AnalyticsReport, Difficulty, Question, Quiz};

/// How many concepts the overview chips show
const CONCEPT_CHIP_LIMIT: usize = 8;

/// Formats quizzes and analytics for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete quiz, question by question
    pub fn format_quiz(quiz: &Quiz, config: &OutputConfig) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Soal yang Digenerate"));
        output.push('\n');

        for (index, question) in quiz.iter().enumerate() {
            output.push('\n');
            output.push_str(&Self::format_question(index, question, config));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format one numbered question block
    pub fn format_question(index: usize, question: &Question, config: &OutputConfig) -> String {
        let mut output = String::new();

        let tier = format!("[{}]", question.difficulty().as_str().to_uppercase());
        let tier = match question.difficulty() {
            Difficulty::Easy => tier.green(),
            Difficulty::Medium => tier.yellow(),
            Difficulty::Hard => tier.red(),
        };
        output.push_str(&format!(
            "{} {}\n",
            format!("Soal #{}", index + 1).bold(),
            tier.bold()
        ));
        output.push_str(&format!("{}\n", question.text().bold()));

        for (position, option) in question.options().iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", Question::letter(position), option));
        }

        if config.show_answers {
            let correct = question.correct_index();
            output.push_str(&format!(
                "  {}\n",
                format!(
                    "✅ Jawaban Benar: {}. {}",
                    Question::letter(correct),
                    question.correct_answer()
                )
                .green()
            ));
            if config.include_explanations && !question.explanation().is_empty() {
                output.push_str(&format!(
                    "  {} {}\n",
                    "💡 Penjelasan:".cyan(),
                    question.explanation()
                ));
            }
        }

        output
    }

    /// Format the analytics section with distribution bars
    pub fn format_analytics(analytics: &AnalyticsReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Analytics"));

        let dist = &analytics.difficulty_distribution;
        output.push_str(&format!(
            "{} {}\n",
            "Total Soal:".cyan().bold(),
            analytics.total_questions
        ));
        output.push_str("Distribusi Kesulitan:\n");
        output.push_str(&Self::distribution_bar("Mudah", dist.easy));
        output.push_str(&Self::distribution_bar("Sedang", dist.medium));
        output.push_str(&Self::distribution_bar("Sulit", dist.hard));
        output.push_str(&format!(
            "{} {}\n",
            "Rata-rata Kesulitan:".cyan().bold(),
            analytics.average_difficulty_label()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Waktu Generate:".cyan().bold(),
            analytics.generation_time
        ));

        if let Some(results) = &analytics.quiz_results {
            output.push_str(&format!("\n{}\n", "Hasil Kuis:".green().bold()));
            output.push_str(&format!(
                "  Jawaban Benar: {}/{}\n",
                results.correct_answers, results.total_questions
            ));
            output.push_str(&format!("  Akurasi: {:.1}%\n", results.accuracy));
            output.push_str(&format!("  Performa: {}\n", results.performance));
        }

        output
    }

    /// Format the counts-only summary
    pub fn format_summary(quiz: &Quiz, analytics: &AnalyticsReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== Ringkasan Kuis ===".cyan().bold()));

        let dist = &analytics.difficulty_distribution;
        output.push_str(&format!("{} {}\n", "Total Soal:".bold(), quiz.len()));
        output.push_str(&format!(
            "Mudah: {} | Sedang: {} | Sulit: {}\n",
            dist.easy, dist.medium, dist.hard
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Rata-rata Kesulitan:".dimmed(),
            analytics.average_difficulty_label()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Waktu Generate:".dimmed(),
            analytics.generation_time
        ));

        output
    }

    /// Format as JSON
    pub fn format_json(quiz: &Quiz) -> String {
        serde_json::to_string_pretty(quiz).unwrap_or_else(|_| "[]".to_string())
    }

    /// Format the concept overview chips (first few, backticked)
    pub fn format_concepts(concepts: &[String]) -> String {
        if concepts.is_empty() {
            return String::new();
        }
        let chips = concepts
            .iter()
            .take(CONCEPT_CHIP_LIMIT)
            .map(|concept| format!("`{}`", concept))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "{}\n{}\n",
            "Konsep Kunci yang Terdeteksi:".cyan().bold(),
            chips
        )
    }

    fn distribution_bar(label: &str, count: usize) -> String {
        format!("  {:<6} {} {}\n", label, "#".repeat(count), count)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl QuizFormatter for ConsoleFormatter {
    fn format_quiz(&self, quiz: &Quiz, config: &OutputConfig) -> String {
        Self::format_quiz(quiz, config)
    }

    fn format_summary(&self, quiz: &Quiz, analytics: &AnalyticsReport) -> String {
        Self::format_summary(quiz, analytics)
    }

    fn format_json(&self, quiz: &Quiz) -> String {
        Self::format_json(quiz)
    }
}
