pub mod catalog;
pub mod console;
pub mod exercise;

pub use crate::utils::error::Result;
pub use catalog::ExerciseId;
pub use console::Console;
pub use exercise::{Exercise, ExerciseRunner};
