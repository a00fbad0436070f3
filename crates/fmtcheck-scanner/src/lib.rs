//! printf-style format-string scanner for fmtcheck.
//!
//! This crate provides the lexical phase of the checker:
//! - `scan` - turns format-string text into placeholders
//! - `FormatPlaceholder` - one `%...` specifier with its character span
//! - `PlaceholderKind` - the value kind a conversion letter expects

mod format_string;

pub use format_string::{FormatPlaceholder, FormatScanner, PlaceholderKind, ScannerState, scan};
