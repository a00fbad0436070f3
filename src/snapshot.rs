//! Project snapshots.
//!
//! A snapshot is the host's export of one PHP file: its flattened AST plus
//! the parts of the symbol index the checker may consult.
//!
//! ```json
//! {
//!   "file": "src/Service.php",
//!   "source": "<?php ...",
//!   "root": 0,
//!   "nodes": [{"kind": "sourceFile", "statements": [1], "pos": 0, "end": 120}, ...],
//!   "index": {"ready": true, "classes": [], "functions": [], "constants": []}
//! }
//! ```

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use fmtcheck_ast::{NodeArena, NodeIndex};
use fmtcheck_checker::{CheckStats, CheckerOptions, CheckerState};
use fmtcheck_common::Diagnostic;
use fmtcheck_index::{InMemoryIndex, IndexSnapshot};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotFile {
    file: String,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    root: Option<NodeIndex>,
    nodes: NodeArena,
    #[serde(default)]
    index: IndexSnapshot,
}

/// A loaded snapshot, ready to check.
#[derive(Debug)]
pub struct Snapshot {
    pub file: String,
    pub source: Option<String>,
    pub root: NodeIndex,
    pub arena: NodeArena,
    pub index: InMemoryIndex,
}

/// Result of checking one snapshot.
#[derive(Debug)]
pub struct SnapshotReport {
    pub diagnostics: Vec<Diagnostic>,
    pub stats: CheckStats,
}

pub fn parse_snapshot(text: &str) -> Result<Snapshot> {
    let raw: SnapshotFile =
        serde_json::from_str(text).context("failed to parse snapshot JSON")?;

    let root = raw.root.unwrap_or(NodeIndex(0));
    if raw.nodes.get(root).is_none() {
        bail!(
            "snapshot root {} is out of range ({} nodes)",
            root.0,
            raw.nodes.len()
        );
    }

    let mut arena = raw.nodes;
    arena.link_parents();

    Ok(Snapshot {
        file: raw.file,
        source: raw.source,
        root,
        arena,
        index: InMemoryIndex::from_snapshot(raw.index),
    })
}

pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot: {}", path.display()))?;
    let snapshot = parse_snapshot(&text)
        .with_context(|| format!("invalid snapshot: {}", path.display()))?;
    debug!(
        path = %path.display(),
        file = %snapshot.file,
        nodes = snapshot.arena.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

impl Snapshot {
    pub fn check(&self, options: &CheckerOptions) -> SnapshotReport {
        let mut state = CheckerState::new(
            &self.arena,
            &self.index,
            self.file.clone(),
            options.clone(),
        );
        state.check_source_file(self.root);
        SnapshotReport {
            stats: state.stats,
            diagnostics: state.take_diagnostics(),
        }
    }
}
