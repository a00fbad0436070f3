//! fmtcheck: checks logger format strings against call-site arguments.
//!
//! The analysis lives in the workspace crates; this crate re-exports them
//! and adds the host harness used by the `fmtcheck` binary.
//!
//! - `common` - diagnostics, spans, positions, limits
//! - `scanner` - the `%`-placeholder state machine
//! - `ast` - the flattened host AST
//! - `index` - the symbol index the resolvers consult
//! - `checker` - type/constant resolution and call-site validation
//! - `snapshot` - loading exported project snapshots
//! - `cli` - argument parsing, config, driver and reporter

// Foundational types
pub use fmtcheck_common as common;
pub use fmtcheck_common::{Diagnostic, DiagnosticCategory, TextRange};

// Format-string scanning
pub use fmtcheck_scanner as scanner;
pub use fmtcheck_scanner::{FormatPlaceholder, scan};

// Host AST and symbol index
pub use fmtcheck_ast as ast;
pub use fmtcheck_index as index;

// Resolution and validation
pub use fmtcheck_checker as checker;
pub use fmtcheck_checker::{CallCheck, CallChecker, CheckerOptions, CheckerState};

pub mod snapshot;
pub use snapshot::{Snapshot, SnapshotReport, load_snapshot, parse_snapshot};

// Tracing configuration (FMTCHECK_LOG / FMTCHECK_LOG_FORMAT)
pub mod tracing_config;

pub mod cli;
