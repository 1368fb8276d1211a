use crate::config::cli::RunOptions;
use crate::core::{Console, ExerciseId, ExerciseRunner};
use crate::utils::error::{ExerciseError, Result};
use crate::utils::logger;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::io;
use std::process::ExitCode;

#[derive(Debug, Parser)]
struct StandaloneArgs {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(flatten)]
    options: RunOptions,
}

/// Runs one exercise against the process's stdin/stdout.
pub fn execute(id: ExerciseId, options: &RunOptions) -> Result<()> {
    let config = options.resolve()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    ExerciseRunner::from_catalog(id, &config).run(&mut console)
}

/// Prints the failure for the user and picks the exit code.
pub fn report_failure(e: &ExerciseError) -> ExitCode {
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    ExitCode::from(e.exit_code())
}

fn standalone_command(id: ExerciseId) -> clap::Command {
    StandaloneArgs::command().name(id.as_str()).about(id.title())
}

/// Entry point shared by the per-exercise binaries under `src/bin/`.
pub fn run_standalone(id: ExerciseId) -> ExitCode {
    let matches = standalone_command(id).get_matches();
    let args = match StandaloneArgs::from_arg_matches(&matches) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    logger::init_cli_logger(args.verbose);

    match execute(id, &args.options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standalone_command_is_named_after_exercise() {
        let command = standalone_command(ExerciseId::CircleArea);
        assert_eq!(command.get_name(), "circle-area");
        command.debug_assert();
    }

    #[test]
    fn test_standalone_args_parse_run_options() {
        let matches = standalone_command(ExerciseId::ArrayStats)
            .try_get_matches_from(["array_stats", "-v", "--truncate-average", "-c", "seed.toml"])
            .unwrap();
        let args = StandaloneArgs::from_arg_matches(&matches).unwrap();
        assert!(args.verbose);
        assert!(args.options.truncate_average);
        assert_eq!(args.options.config.as_deref(), Some(std::path::Path::new("seed.toml")));
    }

    #[test]
    fn test_report_failure_exit_codes() {
        let input = ExerciseError::UnexpectedEofError {
            expected: "a number".to_string(),
        };
        assert_eq!(report_failure(&input), ExitCode::from(1));

        let config = ExerciseError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(report_failure(&config), ExitCode::from(2));

        let age = ExerciseError::InvalidAgeError { age: 0 };
        assert_ne!(report_failure(&age), ExitCode::SUCCESS);
    }
}
