//! survey-deck binary entry point

use std::process::ExitCode;

use clap::Parser;
use survey_deck::{Args, run};

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr; stdout may carry the rendered HTML
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            tracing::error!("cannot read working directory: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&args, &cwd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
