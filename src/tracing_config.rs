//! Tracing configuration for debugging resolution decisions.
//!
//! Supports three output formats controlled by `FMTCHECK_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Why was this call skipped?
//! FMTCHECK_LOG=debug FMTCHECK_LOG_FORMAT=tree fmtcheck snapshot.json
//!
//! # Every resolution step, as JSON lines
//! FMTCHECK_LOG=trace FMTCHECK_LOG_FORMAT=json fmtcheck snapshot.json
//!
//! # Fine-grained filtering
//! FMTCHECK_LOG="fmtcheck_checker::constant_resolver=trace" fmtcheck snapshots/
//! ```
//!
//! The subscriber is only initialised when `FMTCHECK_LOG` (or `RUST_LOG`) is
//! set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("FMTCHECK_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `FMTCHECK_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("FMTCHECK_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `FMTCHECK_LOG` nor `RUST_LOG` is set. All
/// output goes to stderr so it never mixes with JSON reports on stdout.
pub fn init_tracing() {
    let has_own_log = std::env::var("FMTCHECK_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_own_log && !has_rust_log {
        return;
    }

    let filter = build_filter();

    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_writer(std::io::stderr)
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
