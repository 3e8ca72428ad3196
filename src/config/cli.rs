//! Command-line interface definitions.
//!
//! The binary parses these with clap and converts `RunCommand` into the
//! library [`Config`].

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    DEFAULT_COMPARE_STRIDE, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, DEFAULT_VUS,
};
use crate::config::types::{Config, LogFormat, LogLevel};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "status_gate", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load the target and classify every response
    Run(RunCommand),
    /// Reduce rows of latency samples to min/max/range/avg
    Summarize(SummarizeCommand),
    /// Put two summarized runs side by side
    Compare(CompareCommand),
}

/// Options for `run`.
#[derive(Debug, Args)]
pub struct RunCommand {
    /// Target URL
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Number of concurrent virtual users
    #[arg(long, default_value_t = DEFAULT_VUS)]
    pub vus: usize,

    /// Total iterations shared across all virtual users
    #[arg(long)]
    pub iterations: Option<u64>,

    /// Stop starting new iterations after this many seconds
    #[arg(long)]
    pub duration: Option<u64>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Keep connections alive between iterations
    #[arg(long)]
    pub connection_reuse: bool,

    /// HTTP User-Agent header
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Write a JSON summary of the run to this path
    #[arg(long)]
    pub summary_export: Option<PathBuf>,

    /// Write one CSV row per iteration to this path
    #[arg(long)]
    pub samples_csv: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Options for `summarize`.
#[derive(Debug, Args)]
pub struct SummarizeCommand {
    /// CSV with a header row and `label,value,value,...` rows
    pub input: PathBuf,

    /// Output path (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Options for `compare`.
#[derive(Debug, Args)]
pub struct CompareCommand {
    /// Summarized baseline run
    pub baseline: PathBuf,

    /// Summarized candidate run
    pub candidate: PathBuf,

    /// Take the first row, then every N-th row
    #[arg(long, default_value_t = DEFAULT_COMPARE_STRIDE)]
    pub stride: usize,

    /// Output path (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl From<RunCommand> for Config {
    fn from(cmd: RunCommand) -> Self {
        Config {
            host: cmd.host,
            log_level: cmd.log_level,
            log_format: cmd.log_format,
            vus: cmd.vus,
            iterations: cmd.iterations,
            duration_seconds: cmd.duration,
            timeout_seconds: cmd.timeout_seconds,
            connection_reuse: cmd.connection_reuse,
            user_agent: cmd.user_agent,
            summary_export: cmd.summary_export,
            samples_csv: cmd.samples_csv,
        }
    }
}
