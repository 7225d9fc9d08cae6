//! Application-level configuration

pub mod generation_params;

pub use generation_params::GenerationParams;
