//! Message table for every diagnostic the checker emits.

use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    pub const NO_FORMAT_ITEM_FOUND: u32 = 9001;
    pub const FORMAT_LINE_EXPECTING_ONLY_PARAMETERS: u32 = 9002;
    pub const UNUSED_FORMAT_ITEM: u32 = 9003;
    pub const INVALID_FORMAT_FUNCTION_USAGE: u32 = 9004;
}

pub mod diagnostic_messages {
    pub const NO_FORMAT_ITEM_FOUND: &str =
        "No format item found in first parameter but call has more than one argument";
    pub const FORMAT_LINE_EXPECTING_ONLY_PARAMETERS: &str =
        "Format line expecting only {0} parameters";
    pub const UNUSED_FORMAT_ITEM: &str = "Unused format item";
    pub const INVALID_FORMAT_FUNCTION_USAGE: &str = "Invalid format function usage";
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::NO_FORMAT_ITEM_FOUND,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::NO_FORMAT_ITEM_FOUND,
    },
    DiagnosticMessage {
        code: diagnostic_codes::FORMAT_LINE_EXPECTING_ONLY_PARAMETERS,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::FORMAT_LINE_EXPECTING_ONLY_PARAMETERS,
    },
    DiagnosticMessage {
        code: diagnostic_codes::UNUSED_FORMAT_ITEM,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::UNUSED_FORMAT_ITEM,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_FORMAT_FUNCTION_USAGE,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::INVALID_FORMAT_FUNCTION_USAGE,
    },
];
