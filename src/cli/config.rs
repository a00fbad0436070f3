//! `fmtcheck.json` loading.
//!
//! The config file is `CheckerOptions` in JSON, with `//` and `/* */`
//! comments and trailing commas allowed:
//!
//! ```jsonc
//! {
//!   // the interface whose methods take a format string
//!   "loggerInterface": "\\App\\Log\\Logger",
//!   "formatMethods": ["errorf", "warnf",],
//! }
//! ```

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tracing::debug;

use fmtcheck_checker::CheckerOptions;
use fmtcheck_index::normalize_fqn;

pub const CONFIG_FILE_NAME: &str = "fmtcheck.json";

pub fn parse_config(source: &str) -> Result<CheckerOptions> {
    let stripped = strip_jsonc(source);
    let normalized = remove_trailing_commas(&stripped);
    let mut options: CheckerOptions =
        serde_json::from_str(&normalized).context("failed to parse fmtcheck config JSON")?;

    let interface = normalize_fqn(&options.logger_interface);
    if interface == "\\" {
        bail!("loggerInterface must name an interface");
    }
    options.logger_interface = interface;
    options.format_methods.retain(|name| !name.trim().is_empty());
    Ok(options)
}

pub fn load_config(path: &Path) -> Result<CheckerOptions> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("invalid config: {}", path.display()))
}

/// The options to check with: the explicit `--config`, else a
/// `fmtcheck.json` in `cwd`, else the defaults.
pub fn resolve_options(explicit: Option<&Path>, cwd: &Path) -> Result<CheckerOptions> {
    let path = match explicit {
        Some(path) => Some(absolutize(path, cwd)),
        None => {
            let candidate = cwd.join(CONFIG_FILE_NAME);
            candidate.is_file().then_some(candidate)
        }
    };

    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_config(&path)
        }
        None => Ok(CheckerOptions::default()),
    }
}

fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

fn strip_jsonc(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escape = false;
    let mut in_line_comment = false;
    let mut in_block_comment = false;

    while let Some(ch) = chars.next() {
        if in_line_comment {
            if ch == '\n' {
                in_line_comment = false;
                out.push(ch);
            }
            continue;
        }

        if in_block_comment {
            if ch == '*' {
                if let Some('/') = chars.peek().copied() {
                    chars.next();
                    in_block_comment = false;
                }
            } else if ch == '\n' {
                out.push(ch);
            }
            continue;
        }

        if in_string {
            out.push(ch);
            if escape {
                escape = false;
            } else if ch == '\\' {
                escape = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => {
                in_string = true;
                out.push(ch);
            }
            '/' if chars.peek() == Some(&'/') => {
                chars.next();
                in_line_comment = true;
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                in_block_comment = true;
            }
            _ => out.push(ch),
        }
    }

    out
}

fn remove_trailing_commas(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escape = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            if escape {
                escape = false;
            } else if ch == '\\' {
                escape = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        if ch == '"' {
            in_string = true;
            out.push(ch);
            continue;
        }

        if ch == ',' {
            let next = chars.clone().find(|c| !c.is_whitespace());
            if matches!(next, Some('}' | ']')) {
                continue;
            }
        }

        out.push(ch);
    }

    out
}
