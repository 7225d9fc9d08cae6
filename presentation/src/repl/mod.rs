//! Interactive quiz module
//!
//! Provides a readline-based interactive session for loading material,
//! generating quizzes, and answering them.

mod quiz_repl;

pub use quiz_repl::QuizRepl;
