use clap::Parser;
use oop_exercises::app::listing;
use oop_exercises::app::standalone::{execute, report_failure};
use oop_exercises::config::Command;
use oop_exercises::utils::logger;
use oop_exercises::CliConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::parse();

    // Logs go to stderr; stdout carries the transcript.
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    match config.command {
        Command::List { json } => match list(json) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("❌ Listing failed: {:#}", e);
                eprintln!("❌ {:#}", e);
                ExitCode::from(3)
            }
        },
        Command::Run { exercise, options } => match execute(exercise, &options) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => report_failure(&e),
        },
    }
}

fn list(json: bool) -> anyhow::Result<()> {
    let rendered = listing::render(json)?;
    println!("{}", rendered);
    Ok(())
}
