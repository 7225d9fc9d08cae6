//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod export_format;
mod output_format;
mod source_format;

pub use export_format::ExportFormat;
pub use output_format::OutputFormat;
pub use source_format::SourceFormat;
