//! Core domain primitives shared across modules

pub mod error;
pub mod stage;
pub mod string;
