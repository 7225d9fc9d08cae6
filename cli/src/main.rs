//! CLI entrypoint for soalgen
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use soalgen_application::{
    ExportSink, GenerateQuizInput, GenerateQuizUseCase, IngestInput, IngestMaterialUseCase,
};
use soalgen_domain::{ExportFormat, OutputFormat};
use soalgen_infrastructure::{ConfigLoader, DocumentReader, QuizExporter};
use soalgen_presentation::{
    Cli, ConsoleFormatter, OutputConfig, ProgressReporter, QuizRepl, ReplConfig,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting soalgen");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration: defaults, then global, then project, then --config
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        match ConfigLoader::load(cli.config.as_ref()) {
            Ok(config) => config,
            Err(e) => bail!("Failed to load configuration: {}", e),
        }
    };

    for issue in file_config.validate() {
        warn!("{}", issue.message);
    }

    // Fold file values and CLI flags into generation parameters
    let mut params = file_config.to_generation_params();
    if let Some(count) = cli.num_questions {
        params.num_questions = count;
    }
    if cli.no_explanations {
        params.include_explanations = false;
    }
    if cli.seed.is_some() {
        params.seed = cli.seed;
    }

    if !file_config.output.color {
        colored::control::set_override(false);
    }

    let output_config = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .or(file_config.output.format)
            .unwrap_or_default(),
        color: file_config.output.color,
        show_answers: !cli.no_answers,
        include_explanations: params.include_explanations,
    };

    // === Dependency Injection ===
    // Create infrastructure adapters (document reader + file exporter)
    let reader = Arc::new(DocumentReader::new());
    let exporter = Arc::new(QuizExporter::new());

    // Interactive mode
    if cli.interactive {
        let repl_config = ReplConfig {
            show_progress: file_config.repl.show_progress && !cli.quiet,
            history_file: file_config.repl.history_file.clone().map(PathBuf::from),
        };

        let mut repl = QuizRepl::new(reader, exporter, params)
            .with_output_config(output_config)
            .with_repl_config(repl_config);

        repl.run()?;
        return Ok(());
    }

    // Single file mode - a material file is required
    let file = match cli.file {
        Some(f) => f,
        None => bail!("A material file is required. Use --interactive for the REPL."),
    };

    // Print header
    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|                 soalgen - Quiz Generator                   |");
        println!("+============================================================+");
        println!();
        println!("File: {}", file.display());
        println!();
    }

    // Stage 1: extract text from the document
    let ingest = IngestMaterialUseCase::new(Arc::clone(&reader));
    let input = IngestInput::new(file).with_max_concepts(params.max_concepts);

    let ingested = if cli.quiet {
        ingest.execute(input)?
    } else {
        let progress = ProgressReporter::new();
        ingest.execute_with_progress(input, &progress)?
    };

    if !cli.quiet {
        println!();
        println!("{}", ingested.material.preview(300));
        println!();
        let concepts = ConsoleFormatter::format_concepts(&ingested.concepts);
        if !concepts.is_empty() {
            println!("{}", concepts);
        }
    }

    // Stages 2 and 3: mine concepts and synthesize questions
    let use_case = GenerateQuizUseCase::new();
    let input = GenerateQuizInput::new(ingested.material, params);

    let generated = if cli.quiet {
        use_case.execute(input)?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress)?
    };

    if !generated.incidents.is_empty() {
        warn!(
            "{} question slots fell back to the generic template",
            generated.incidents.len()
        );
    }

    // Output results
    let output = match output_config.format {
        OutputFormat::Full => {
            let mut rendered = ConsoleFormatter::format_quiz(&generated.quiz, &output_config);
            rendered.push_str(&ConsoleFormatter::format_analytics(&generated.analytics));
            rendered
        }
        OutputFormat::Summary => {
            ConsoleFormatter::format_summary(&generated.quiz, &generated.analytics)
        }
        OutputFormat::Json => ConsoleFormatter::format_json(&generated.quiz),
    };

    println!("{}", output);

    // Export to files
    for arg in cli.export {
        let format = ExportFormat::from(arg);
        let path = exporter.export(&generated.quiz, format, &cli.export_dir)?;
        println!("Saved {}", path.display());
    }

    Ok(())
}
