//! Port definitions
//!
//! Interfaces the application layer depends on. Infrastructure implements
//! document extraction and export; presentation implements progress.

pub mod document_source;
pub mod export_sink;
pub mod progress;

pub use document_source::{DocumentSource, ExtractionError};
pub use export_sink::{ExportError, ExportSink};
pub use progress::{NoProgress, ProgressNotifier};
