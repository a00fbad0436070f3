//! Diagnostic types and message lookup for the format-string checker.
//!
//! Message data lives in `data.rs`. Every message the checker can emit has a
//! stable code so hosts can filter or suppress individual warnings.

use serde::Serialize;

mod data;
pub use data::{DIAGNOSTIC_MESSAGES, diagnostic_codes, diagnostic_messages};

use crate::span::TextRange;

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category. Every format-string problem is reported as a
/// warning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning,
}

impl DiagnosticCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Warning => "warning",
        }
    }
}

/// A checker diagnostic anchored on a byte range of the host file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    #[must_use]
    pub const fn warning(file: String, start: u32, length: u32, message: String, code: u32) -> Self {
        Self {
            file,
            start,
            length,
            message_text: message,
            category: DiagnosticCategory::Warning,
            code,
        }
    }

    /// Create a warning from a message definition and its `{0}`-style arguments.
    #[must_use]
    pub fn from_message(
        file: &str,
        range: TextRange,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            file: file.to_string(),
            start: range.pos,
            length: range.len(),
            message_text: format_message(message.message, args),
            category: message.category,
            code: message.code,
        }
    }

    /// The anchored range as a `TextRange`.
    #[must_use]
    pub const fn range(&self) -> TextRange {
        TextRange::new(self.start, self.start.saturating_add(self.length))
    }
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}
