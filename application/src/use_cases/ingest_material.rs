//! Ingest material use case
//!
//! Extracts raw text from an uploaded document, cleans and validates it,
//! and mines the concept overview shown to the user.

use crate::ports::document_source::{DocumentSource, ExtractionError};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use soalgen_domain::{DEFAULT_MAX_CONCEPTS, DomainError, Material, PipelineStage};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during material ingestion
#[derive(Error, Debug)]
pub enum IngestError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Material(#[from] DomainError),
}

impl IngestError {
    /// Check if the document was readable but too thin to generate from
    pub fn is_insufficient_content(&self) -> bool {
        matches!(
            self,
            IngestError::Material(DomainError::InsufficientContent { .. })
        )
    }
}

/// Input for the IngestMaterial use case
#[derive(Debug, Clone)]
pub struct IngestInput {
    /// Document to ingest
    pub path: PathBuf,
    /// Cap for the concept overview
    pub max_concepts: usize,
}

impl IngestInput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_concepts: DEFAULT_MAX_CONCEPTS,
        }
    }

    pub fn with_max_concepts(mut self, max_concepts: usize) -> Self {
        self.max_concepts = max_concepts;
        self
    }
}

/// Result of a successful ingestion
#[derive(Debug, Clone)]
pub struct IngestOutput {
    pub material: Material,
    /// Concept overview, ranked by frequency
    pub concepts: Vec<String>,
}

/// Use case for turning a document into generation-ready material
pub struct IngestMaterialUseCase<S: DocumentSource> {
    source: Arc<S>,
}

impl<S: DocumentSource> IngestMaterialUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Execute the use case with default (no-op) progress
    pub fn execute(&self, input: IngestInput) -> Result<IngestOutput, IngestError> {
        self.execute_with_progress(input, &NoProgress)
    }

    /// Execute the use case with progress callbacks
    pub fn execute_with_progress(
        &self,
        input: IngestInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<IngestOutput, IngestError> {
        let stage = PipelineStage::Extraction;
        let label = input.path.display().to_string();
        info!("Extracting text from {label}");

        progress.on_stage_start(&stage, 1);
        let raw = match self.source.extract(&input.path) {
            Ok(raw) => {
                progress.on_unit_complete(&stage, &label, true);
                raw
            }
            Err(error) => {
                warn!("Extraction failed: {error}");
                progress.on_unit_complete(&stage, &label, false);
                progress.on_stage_complete(&stage);
                return Err(error.into());
            }
        };
        progress.on_stage_complete(&stage);

        let material = match Material::from_raw(&raw) {
            Ok(material) => material,
            Err(error) => {
                warn!("Material rejected: {error}");
                return Err(error.into());
            }
        };
        info!("Material ready: {} characters", material.char_count());

        let concepts = material.key_concepts(input.max_concepts);
        Ok(IngestOutput { material, concepts })
    }
}
