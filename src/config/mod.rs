pub mod cli;
pub mod toml_config;

pub use cli::{CliConfig, Command, RunOptions};
pub use toml_config::ExerciseConfig;
