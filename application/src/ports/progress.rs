//! Progress notification port
//!
//! Defines the interface for reporting progress during pipeline runs.

use soalgen_domain::PipelineStage;

/// Callback for progress updates during a pipeline run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain text, silence).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a stage starts
    fn on_stage_start(&self, stage: &PipelineStage, total_units: usize);

    /// Called when a unit of work completes within a stage
    fn on_unit_complete(&self, stage: &PipelineStage, label: &str, success: bool);

    /// Called when a stage completes
    fn on_stage_complete(&self, stage: &PipelineStage);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: &PipelineStage, _total_units: usize) {}
    fn on_unit_complete(&self, _stage: &PipelineStage, _label: &str, _success: bool) {}
    fn on_stage_complete(&self, _stage: &PipelineStage) {}
}
