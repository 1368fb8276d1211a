pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, ExerciseConfig, RunOptions};
pub use core::{Console, Exercise, ExerciseId, ExerciseRunner};
pub use utils::error::{ExerciseError, Result};
