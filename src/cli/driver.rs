use anyhow::{Result, bail};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use fmtcheck_checker::{CheckStats, CheckerOptions};
use fmtcheck_common::Diagnostic;

use crate::cli::args::CliArgs;
use crate::cli::config::{CONFIG_FILE_NAME, resolve_options};
use crate::snapshot::load_snapshot;

/// Outcome of one CLI run.
#[derive(Debug, Default)]
pub struct CheckResult {
    pub diagnostics: Vec<Diagnostic>,
    pub files_checked: Vec<PathBuf>,
    /// `(file, source)` for every snapshot that shipped its source text.
    pub sources: Vec<(String, String)>,
    pub stats: CheckStats,
}

impl CheckResult {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

pub fn run(args: &CliArgs, cwd: &Path) -> Result<CheckResult> {
    let options = resolve_options(args.config.as_deref(), cwd)?;
    let files = discover_snapshots(&args.inputs, cwd)?;
    check_files(&files, &options)
}

/// Loads and checks each snapshot in order.
pub fn check_files(files: &[PathBuf], options: &CheckerOptions) -> Result<CheckResult> {
    let mut result = CheckResult::default();

    for path in files {
        let snapshot = load_snapshot(path)?;
        let report = snapshot.check(options);
        debug!(
            path = %path.display(),
            diagnostics = report.diagnostics.len(),
            calls = report.stats.calls,
            "checked snapshot"
        );

        accumulate(&mut result.stats, report.stats);
        result.diagnostics.extend(report.diagnostics);
        if let Some(source) = snapshot.source {
            result.sources.push((snapshot.file, source));
        }
        result.files_checked.push(path.clone());
    }

    info!(
        files = result.files_checked.len(),
        diagnostics = result.diagnostics.len(),
        "check complete"
    );
    Ok(result)
}

fn accumulate(total: &mut CheckStats, stats: CheckStats) {
    total.calls += stats.calls;
    total.checked += stats.checked;
    total.skipped += stats.skipped;
    total.abstained += stats.abstained;
}

/// Expands the CLI inputs to snapshot files.
///
/// Files are taken as given; directories are walked for `*.json`, skipping
/// any `fmtcheck.json` config file. Directory results are sorted so runs are
/// reproducible.
pub fn discover_snapshots(inputs: &[PathBuf], cwd: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        let path = if input.is_absolute() {
            input.clone()
        } else {
            cwd.join(input)
        };

        if path.is_file() {
            files.push(path);
        } else if path.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(&path)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .map(|e| e.into_path())
                .filter(|p| is_snapshot_file(p))
                .collect();
            found.sort();
            files.extend(found);
        } else {
            bail!("input not found: {}", path.display());
        }
    }

    Ok(files)
}

fn is_snapshot_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
        && path.file_name().is_none_or(|name| name != CONFIG_FILE_NAME)
}
