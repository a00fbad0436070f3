use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the fmtcheck binary.
#[derive(Parser, Debug)]
#[command(
    name = "fmtcheck",
    version,
    about = "Checks logger format strings against the arguments passed at each call site"
)]
pub struct CliArgs {
    /// Snapshot files, or directories to search for `*.json` snapshots.
    #[arg(value_name = "SNAPSHOT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Path to a fmtcheck.json config file.
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for diagnostics.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable color in text output. Defaults to whether stderr is a terminal.
    #[arg(long)]
    pub pretty: Option<bool>,

    /// Exit with a non-zero status when any diagnostic is reported.
    #[arg(long = "fail-on-warnings")]
    pub fail_on_warnings: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
