#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

use fmtcheck::cli::args::{CliArgs, OutputFormat};
use fmtcheck::cli::driver;
use fmtcheck::cli::reporter::Reporter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_DIAGNOSTICS_PRESENT: i32 = 1;

fn main() -> Result<()> {
    // Initialize tracing if FMTCHECK_LOG or RUST_LOG is set (zero cost otherwise).
    // Supports FMTCHECK_LOG_FORMAT=tree|json|text (see src/tracing_config.rs).
    fmtcheck::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    let result = driver::run(&args, &cwd)?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result.diagnostics)
                .context("failed to serialize diagnostics")?;
            println!("{json}");
        }
        OutputFormat::Text => {
            if result.has_diagnostics() {
                let pretty = args
                    .pretty
                    .unwrap_or_else(|| std::io::stderr().is_terminal());
                let mut reporter = Reporter::new(pretty);
                for (file, source) in &result.sources {
                    reporter.add_source(file.as_str(), source.as_str());
                }
                let output = reporter.render(&result.diagnostics);
                eprintln!("{output}");
                eprintln!(
                    "\nFound {} problem(s) in {} checked file(s).",
                    result.diagnostics.len(),
                    result.files_checked.len()
                );
            }
        }
    }

    if args.fail_on_warnings && result.has_diagnostics() {
        std::process::exit(EXIT_DIAGNOSTICS_PRESENT);
    }

    std::process::exit(EXIT_SUCCESS);
}
