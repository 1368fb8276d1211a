use crate::config::toml_config::ExerciseConfig;
use crate::core::catalog::ExerciseId;
use crate::domain::stats::AverageMode;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "oop-exercises")]
#[command(about = "Classroom object-oriented programming exercises")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines on stderr")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available exercises
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run one exercise against stdin/stdout
    Run {
        #[arg(value_enum)]
        exercise: ExerciseId,

        #[command(flatten)]
        options: RunOptions,
    },
}

/// Options shared by the umbrella binary and the per-exercise binaries.
#[derive(Debug, Clone, Default, Args)]
pub struct RunOptions {
    /// Path to a TOML file overriding the exercise defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Average scores with integer division (83.5 becomes 83)
    #[arg(long)]
    pub truncate_average: bool,
}

impl RunOptions {
    /// Loads the config file (or defaults), applies flag overrides and validates.
    pub fn resolve(&self) -> Result<ExerciseConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path.display());
                ExerciseConfig::from_file(path)?
            }
            None => ExerciseConfig::default(),
        };

        if self.truncate_average {
            config.array.average = AverageMode::Truncated;
            tracing::debug!("Average mode overridden to: {:?}", config.array.average);
        }

        config.validate()?;
        Ok(config)
    }
}
