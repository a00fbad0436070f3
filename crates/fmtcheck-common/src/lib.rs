//! Common types and utilities for fmtcheck.
//!
//! This crate provides foundational types used across all fmtcheck crates:
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, message table)
//! - Source spans (`TextRange`)
//! - Position/line-map types for rendering locations
//! - Analysis limits and thresholds

// Diagnostic types and the message table
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::TextRange;

// Centralized limits and thresholds
pub mod limits;

// Line/column positions for reporting
pub mod position;
pub use position::{LineMap, Position};
