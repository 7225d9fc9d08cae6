//! Application use cases

pub mod generate_quiz;
pub mod ingest_material;

pub use generate_quiz::GenerateQuizUseCase;
pub use ingest_material::IngestMaterialUseCase;
