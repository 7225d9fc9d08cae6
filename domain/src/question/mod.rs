//! Question entities and value objects

mod entities;
mod quiz;
mod value_objects;

pub use entities::{OPTION_COUNT, Question};
pub use quiz::Quiz;
pub use value_objects::{Difficulty, QuestionType};
