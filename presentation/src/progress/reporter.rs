//! Progress reporting for the generation pipeline

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use soalgen_application::ProgressNotifier;
use soalgen_domain::PipelineStage;
use std::sync::Mutex;

/// Reports pipeline progress with fancy progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            stage_bar: Mutex::new(None),
        }
    }

    fn stage_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }

    fn stage_display_name(stage: &PipelineStage) -> String {
        format!("Stage {}: {}", stage.number(), stage.display_name())
    }

    fn stage_short_name(stage: &PipelineStage) -> String {
        format!("Stage {}", stage.number())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: &PipelineStage, total_units: usize) {
        let stage_name = Self::stage_display_name(stage);

        let pb = self.multi.add(ProgressBar::new(total_units as u64));
        pb.set_style(Self::stage_style());
        pb.set_prefix(stage_name);
        pb.set_message("Starting...");

        *self.stage_bar.lock().unwrap() = Some(pb);
    }

    fn on_unit_complete(&self, _stage: &PipelineStage, label: &str, success: bool) {
        if let Some(pb) = self.stage_bar.lock().unwrap().as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), label)
            } else {
                format!("{} {}", "x".red(), label)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_stage_complete(&self, stage: &PipelineStage) {
        if let Some(pb) = self.stage_bar.lock().unwrap().take() {
            let stage_name = Self::stage_short_name(stage);
            pb.finish_with_message(format!("{} complete!", stage_name.green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: &PipelineStage, total_units: usize) {
        let stage_name = ProgressReporter::stage_display_name(stage);
        println!(
            "{} {} ({} tasks)",
            "->".cyan(),
            stage_name.bold(),
            total_units
        );
    }

    fn on_unit_complete(&self, _stage: &PipelineStage, label: &str, success: bool) {
        if success {
            println!("  {} {}", "v".green(), label);
        } else {
            println!("  {} {} (failed)", "x".red(), label);
        }
    }

    fn on_stage_complete(&self, _stage: &PipelineStage) {
        println!();
    }
}
