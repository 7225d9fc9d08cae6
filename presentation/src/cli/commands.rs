//! CLI command definitions

use clap::{Parser, ValueEnum};
use soalgen_application::{MAX_QUESTIONS, MIN_QUESTIONS};
use soalgen_domain::{ExportFormat, OutputFormat};
use std::path::PathBuf;

/// Output format for the generated quiz
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputArg {
    /// Full formatted output with answers and analytics
    Full,
    /// Compact counts-only summary
    Summary,
    /// JSON output
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Full => OutputFormat::Full,
            OutputArg::Summary => OutputFormat::Summary,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

/// Export artifact format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportArg {
    /// One CSV row per question
    Csv,
    /// Array of question objects
    Json,
    /// Numbered plain-text blocks
    Txt,
}

impl From<ExportArg> for ExportFormat {
    fn from(arg: ExportArg) -> Self {
        match arg {
            ExportArg::Csv => ExportFormat::Csv,
            ExportArg::Json => ExportFormat::Json,
            ExportArg::Txt => ExportFormat::Txt,
        }
    }
}

/// CLI arguments for soalgen
#[derive(Parser, Debug)]
#[command(name = "soalgen")]
#[command(author, version, about = "Generate multiple-choice quizzes from teaching material")]
#[command(long_about = r#"
Soalgen turns teaching material (PDF, DOCX, or TXT) into a multiple-choice
quiz with answers, explanations, and difficulty analytics.

The pipeline has three stages:
1. Text Extraction: read and clean the document text
2. Concept Mining: detect salient terms and usable sentences
3. Question Synthesis: fill rotating templates with the mined concepts

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./soalgen.toml      Project-level config (or ./.soalgen.toml)
3. ~/.config/soalgen/config.toml   Global config

Example:
  soalgen materi.pdf
  soalgen materi.docx -n 15 --export csv --export json
  soalgen materi.txt --seed 42 -o json
  soalgen --interactive
"#)]
pub struct Cli {
    /// Material file to generate questions from (pdf, docx, or txt)
    pub file: Option<PathBuf>,

    /// Number of questions to generate
    #[arg(short = 'n', long, value_name = "COUNT",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(MIN_QUESTIONS as u64..=MAX_QUESTIONS as u64))]
    pub num_questions: Option<usize>,

    /// Fixed RNG seed for reproducible generation
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Hide answer explanations in console output
    #[arg(long)]
    pub no_explanations: bool,

    /// Hide correct answers in console output
    #[arg(long)]
    pub no_answers: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputArg>,

    /// Export the quiz after generation (can be specified multiple times)
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub export: Vec<ExportArg>,

    /// Directory for export artifacts
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub export_dir: PathBuf,

    /// Start the interactive quiz session
    #[arg(short, long)]
    pub interactive: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
