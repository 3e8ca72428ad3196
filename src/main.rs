//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `status_gate` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use status_gate::analysis::{compare_files, summarize_file};
use status_gate::config::{Cli, Command, LogFormat};
use status_gate::initialization::init_logger_with;
use status_gate::{run_load, Config};

#[tokio::main]
async fn main() {
    // Load HOST and friends from a .env file if one exists
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = dispatch(cli.command).await {
        eprintln!("status_gate error: {:#}", e);
        process::exit(1);
    }
}

async fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Run(cmd) => {
            let config = Config::from(cmd);
            init_logger_with(config.log_level.clone().into(), config.log_format.clone())
                .context("Failed to initialize logger")?;

            let report = run_load(config).await?;
            println!("{}", report.summary_line());
            Ok(())
        }
        Command::Summarize(cmd) => {
            init_logger_with(log::LevelFilter::Warn, LogFormat::Plain)
                .context("Failed to initialize logger")?;
            let rows = summarize_file(&cmd.input, cmd.output.as_deref())?;
            if let Some(output) = &cmd.output {
                println!("Summarized {} rows into {}", rows, output.display());
            }
            Ok(())
        }
        Command::Compare(cmd) => {
            init_logger_with(log::LevelFilter::Warn, LogFormat::Plain)
                .context("Failed to initialize logger")?;
            let rows = compare_files(
                &cmd.baseline,
                &cmd.candidate,
                cmd.stride,
                cmd.output.as_deref(),
            )?;
            if let Some(output) = &cmd.output {
                println!("Compared {} rows into {}", rows, output.display());
            }
            Ok(())
        }
    }
}
