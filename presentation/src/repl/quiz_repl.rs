//! REPL (Read-Eval-Print Loop) for interactive quiz sessions

use crate::ConsoleFormatter;
use crate::ProgressReporter;
use crate::config::{OutputConfig, ReplConfig};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use soalgen_application::{
    DocumentSource, ExportSink, GenerateQuizInput, GenerateQuizUseCase, GenerationParams,
    IngestInput, IngestMaterialUseCase, MAX_QUESTIONS, MIN_QUESTIONS, QuizSession,
};
use soalgen_domain::{AnswerRecord, ExportFormat, Question};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Interactive quiz REPL
pub struct QuizRepl<S: DocumentSource + 'static, E: ExportSink + 'static> {
    ingest: IngestMaterialUseCase<S>,
    generate: GenerateQuizUseCase,
    exporter: Arc<E>,
    session: QuizSession,
    output: OutputConfig,
    repl: ReplConfig,
}

impl<S, E> QuizRepl<S, E>
where
    S: DocumentSource + 'static,
    E: ExportSink + 'static,
{
    /// Create a new QuizRepl
    pub fn new(source: Arc<S>, exporter: Arc<E>, params: GenerationParams) -> Self {
        Self {
            ingest: IngestMaterialUseCase::new(source),
            generate: GenerateQuizUseCase::new(),
            exporter,
            session: QuizSession::new(params),
            output: OutputConfig::default(),
            repl: ReplConfig::default(),
        }
    }

    /// Set the output configuration
    pub fn with_output_config(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Set the REPL configuration
    pub fn with_repl_config(mut self, repl: ReplConfig) -> Self {
        self.repl = repl;
        self
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self
            .repl
            .history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("soalgen").join("history.txt")));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim().to_string();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(&line);

                    if line.starts_with('/') {
                        if self.handle_command(&line, &mut rl) {
                            break;
                        }
                        continue;
                    }

                    // Bare input is a path to load
                    self.load_material(&line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          soalgen - Interactive Mode         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Load a material file (pdf, docx, txt) to get started:");
        println!("  >>> materi/fotosintesis.pdf");
        println!();
        println!("Commands:");
        println!("  /load <path>  - Load a material file");
        println!("  /generate [n] - Generate questions");
        println!("  /quiz         - Answer the generated questions");
        println!("  /help         - Show all commands");
        println!("  /quit         - Exit");
        println!();
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  /load <path>        - Load a material file (pdf, docx, txt)");
        println!("  /generate [count]   - Generate questions from the loaded material");
        println!("  /regenerate         - Discard the quiz and generate again");
        println!("  /show               - Show the generated questions");
        println!("  /answers            - Toggle answer visibility");
        println!("  /concepts           - Show the detected key concepts");
        println!("  /analytics          - Show quiz analytics");
        println!("  /quiz               - Answer the questions interactively");
        println!("  /export <fmt> [dir] - Export as csv, json, or txt");
        println!("  /set <key> <value>  - Change a setting (questions, explanations,");
        println!("                        progress, seed)");
        println!("  /quit, /exit, /q    - Exit");
        println!();
        println!("Bare input is treated as a path to load.");
        println!();
    }

    /// Handle slash commands. Returns true if the REPL should exit.
    fn handle_command(&mut self, line: &str, rl: &mut DefaultEditor) -> bool {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();

        match command {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                self.print_help();
                false
            }
            "/load" => {
                match args.first() {
                    Some(path) => self.load_material(path),
                    None => println!("Usage: /load <path>"),
                }
                false
            }
            "/generate" => {
                if let Some(raw) = args.first() {
                    match raw.parse::<usize>() {
                        Ok(count) if (MIN_QUESTIONS..=MAX_QUESTIONS).contains(&count) => {
                            self.session.params_mut().num_questions = count;
                        }
                        _ => {
                            println!(
                                "Count must be a number between {} and {}.",
                                MIN_QUESTIONS, MAX_QUESTIONS
                            );
                            return false;
                        }
                    }
                }
                self.generate_quiz();
                false
            }
            "/regenerate" => {
                self.session.reset_quiz();
                self.generate_quiz();
                false
            }
            "/show" => {
                self.show_quiz();
                false
            }
            "/answers" => {
                self.output.show_answers = !self.output.show_answers;
                println!(
                    "Answers {}",
                    if self.output.show_answers {
                        "shown"
                    } else {
                        "hidden"
                    }
                );
                false
            }
            "/concepts" => {
                self.show_concepts();
                false
            }
            "/analytics" => {
                self.show_analytics();
                false
            }
            "/quiz" => {
                self.take_quiz(rl);
                false
            }
            "/export" => {
                self.export_quiz(&args);
                false
            }
            "/set" => {
                self.set_option(&args);
                false
            }
            _ => {
                // Absolute paths share the slash prefix with commands
                if Path::new(line).exists() {
                    self.load_material(line);
                } else {
                    println!("Unknown command: {}", command);
                    println!("Type /help for available commands");
                }
                false
            }
        }
    }

    fn load_material(&mut self, path: &str) {
        let input = IngestInput::new(path).with_max_concepts(self.session.params().max_concepts);
        let result = if self.repl.show_progress {
            let progress = ProgressReporter::new();
            self.ingest.execute_with_progress(input, &progress)
        } else {
            self.ingest.execute(input)
        };

        match result {
            Ok(output) => {
                println!();
                println!(
                    "Loaded {} ({} characters)",
                    path,
                    output.material.char_count()
                );
                println!("{}", output.material.preview(300).dimmed());
                println!();
                print!("{}", ConsoleFormatter::format_concepts(&output.concepts));
                self.session.load_material(PathBuf::from(path), output.material);
                println!();
            }
            Err(e) => {
                eprintln!("Error: {}", e);
            }
        }
    }

    fn generate_quiz(&mut self) {
        let Some(material) = self.session.material() else {
            println!("No material loaded. Use /load <path> first.");
            return;
        };
        let input = GenerateQuizInput::new(material.clone(), self.session.params().clone());

        let result = if self.repl.show_progress {
            let progress = ProgressReporter::new();
            self.generate.execute_with_progress(input, &progress)
        } else {
            self.generate.execute(input)
        };

        match result {
            Ok(output) => {
                println!();
                if output.incidents.is_empty() {
                    println!("Generated {} questions.", output.quiz.len());
                } else {
                    println!(
                        "Generated {} questions ({} fallback).",
                        output.quiz.len(),
                        output.incidents.len()
                    );
                }
                println!("Type /show to see them or /quiz to answer them.");
                self.session.record_generation(output.quiz, output.analytics);
            }
            Err(e) => eprintln!("Error: {}", e),
        }
        println!();
    }

    fn show_quiz(&self) {
        match self.session.quiz() {
            Some(quiz) => println!("{}", ConsoleFormatter::format_quiz(quiz, &self.output)),
            None => println!("No quiz yet. Use /generate first."),
        }
    }

    fn show_concepts(&self) {
        match self.session.material() {
            Some(material) => {
                let concepts = material.key_concepts(self.session.params().max_concepts);
                if concepts.is_empty() {
                    println!("No concepts detected in the loaded material.");
                } else {
                    print!("{}", ConsoleFormatter::format_concepts(&concepts));
                }
            }
            None => println!("No material loaded. Use /load <path> first."),
        }
    }

    fn show_analytics(&self) {
        match self.session.analytics() {
            Some(analytics) => println!("{}", ConsoleFormatter::format_analytics(analytics)),
            None => println!("No quiz yet. Use /generate first."),
        }
    }

    /// Walk through the quiz question by question, grading each answer
    fn take_quiz(&mut self, rl: &mut DefaultEditor) {
        let Some(quiz) = self.session.quiz() else {
            println!("No quiz yet. Use /generate first.");
            return;
        };
        let questions: Vec<Question> = quiz.questions().to_vec();

        println!();
        let hidden = OutputConfig {
            show_answers: false,
            ..self.output.clone()
        };
        let mut records = Vec::with_capacity(questions.len());

        for (index, question) in questions.iter().enumerate() {
            print!("{}", ConsoleFormatter::format_question(index, question, &hidden));

            let Some(choice) = Self::read_choice(rl, question.options().len()) else {
                println!("Quiz aborted.");
                return;
            };
            let selected = question.options()[choice].clone();
            let record = AnswerRecord::graded(index, selected, question);
            if record.is_correct {
                println!("{}", "Benar!".green().bold());
            } else {
                println!(
                    "{} Jawaban yang benar: {}. {}",
                    "Salah.".red().bold(),
                    Question::letter(question.correct_index()),
                    question.correct_answer()
                );
            }
            println!();
            records.push(record);
        }

        self.session.record_answers(records);
        if let Some(results) = self
            .session
            .analytics()
            .and_then(|analytics| analytics.quiz_results.as_ref())
        {
            println!(
                "{} {}/{} benar ({:.1}%)",
                "Hasil:".bold(),
                results.correct_answers,
                results.total_questions,
                results.accuracy
            );
            println!("{} {}", "Performa:".bold(), results.performance);
        }
        println!();
    }

    /// Prompt for an option letter. None aborts the quiz.
    fn read_choice(rl: &mut DefaultEditor, option_count: usize) -> Option<usize> {
        loop {
            match rl.readline("Jawaban (A-D): ") {
                Ok(line) => {
                    let line = line.trim().to_uppercase();
                    let mut chars = line.chars();
                    match (chars.next(), chars.next()) {
                        (Some(letter), None) if letter.is_ascii_uppercase() => {
                            let choice = (letter as u8 - b'A') as usize;
                            if choice < option_count {
                                return Some(choice);
                            }
                            println!("Pilih salah satu huruf A-D.");
                        }
                        _ => println!("Pilih salah satu huruf A-D."),
                    }
                }
                Err(_) => return None,
            }
        }
    }

    fn export_quiz(&self, args: &[&str]) {
        let Some(quiz) = self.session.quiz() else {
            println!("No quiz yet. Use /generate first.");
            return;
        };
        let Some(raw) = args.first() else {
            println!("Usage: /export <csv|json|txt> [dir]");
            return;
        };
        let format: ExportFormat = match raw.parse() {
            Ok(format) => format,
            Err(e) => {
                println!("{}", e);
                return;
            }
        };
        let dir = PathBuf::from(args.get(1).copied().unwrap_or("."));

        match self.exporter.export(quiz, format, &dir) {
            Ok(path) => println!("Saved {}", path.display()),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    fn set_option(&mut self, args: &[&str]) {
        let (Some(key), Some(value)) = (args.first(), args.get(1)) else {
            println!("Usage: /set <questions|explanations|progress|seed> <value>");
            return;
        };

        match *key {
            "questions" => match value.parse::<usize>() {
                Ok(count) if (MIN_QUESTIONS..=MAX_QUESTIONS).contains(&count) => {
                    self.session.params_mut().num_questions = count;
                    println!("questions = {}", count);
                }
                _ => println!(
                    "questions must be a number between {} and {}",
                    MIN_QUESTIONS, MAX_QUESTIONS
                ),
            },
            "explanations" => match Self::parse_bool(value) {
                Some(on) => {
                    self.session.params_mut().include_explanations = on;
                    self.output.include_explanations = on;
                    println!("explanations = {}", on);
                }
                None => println!("explanations must be on or off"),
            },
            "progress" => match Self::parse_bool(value) {
                Some(on) => {
                    self.repl.show_progress = on;
                    println!("progress = {}", on);
                }
                None => println!("progress must be on or off"),
            },
            "seed" => match *value {
                "off" | "none" => {
                    self.session.params_mut().seed = None;
                    println!("seed cleared");
                }
                _ => match value.parse::<u64>() {
                    Ok(seed) => {
                        self.session.params_mut().seed = Some(seed);
                        println!("seed = {}", seed);
                    }
                    Err(_) => println!("seed must be a number, off, or none"),
                },
            },
            _ => println!(
                "Unknown setting: {} (try questions, explanations, progress, seed)",
                key
            ),
        }
    }

    fn parse_bool(value: &str) -> Option<bool> {
        match value {
            "on" | "true" | "yes" => Some(true),
            "off" | "false" | "no" => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soalgen_application::{ExportError, ExtractionError};
    use soalgen_domain::Quiz;

    struct StubSource;

    impl DocumentSource for StubSource {
        fn extract(&self, _path: &Path) -> Result<String, ExtractionError> {
            Ok("Fotosintesis adalah proses pembentukan energi pada tumbuhan hijau \
                yang berlangsung di dalam daun dan membutuhkan cahaya matahari."
                .to_string())
        }
    }

    struct NullSink;

    impl ExportSink for NullSink {
        fn export(
            &self,
            _quiz: &Quiz,
            format: ExportFormat,
            dir: &Path,
        ) -> Result<PathBuf, ExportError> {
            Ok(dir.join(format!("quiz.{}", format.extension())))
        }
    }

    fn repl() -> QuizRepl<StubSource, NullSink> {
        QuizRepl::new(
            Arc::new(StubSource),
            Arc::new(NullSink),
            GenerationParams::default(),
        )
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(QuizRepl::<StubSource, NullSink>::parse_bool("on"), Some(true));
        assert_eq!(QuizRepl::<StubSource, NullSink>::parse_bool("no"), Some(false));
        assert_eq!(QuizRepl::<StubSource, NullSink>::parse_bool("maybe"), None);
    }

    #[test]
    fn test_set_questions_rejects_out_of_range() {
        let mut repl = repl();
        repl.set_option(&["questions", "15"]);
        assert_eq!(repl.session.params().num_questions, 15);

        repl.set_option(&["questions", "99"]);
        assert_eq!(repl.session.params().num_questions, 15);
    }

    #[test]
    fn test_set_seed_roundtrip() {
        let mut repl = repl();
        repl.set_option(&["seed", "42"]);
        assert_eq!(repl.session.params().seed, Some(42));

        repl.set_option(&["seed", "off"]);
        assert_eq!(repl.session.params().seed, None);
    }

    #[test]
    fn test_set_explanations_updates_both_layers() {
        let mut repl = repl();
        repl.set_option(&["explanations", "off"]);
        assert!(!repl.session.params().include_explanations);
        assert!(!repl.output.include_explanations);
    }

    #[test]
    fn test_load_material_populates_the_session() {
        let mut repl = repl();
        repl.repl.show_progress = false;
        repl.load_material("materi.txt");
        assert!(repl.session.has_material());
        assert!(!repl.session.has_quiz());
    }

    #[test]
    fn test_generate_without_material_leaves_session_empty() {
        let mut repl = repl();
        repl.generate_quiz();
        assert!(!repl.session.has_quiz());
    }
}
