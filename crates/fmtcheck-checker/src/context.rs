//! Shared inputs for one checking pass.

use serde::{Deserialize, Serialize};

use fmtcheck_ast::NodeArena;
use fmtcheck_index::SymbolIndex;

/// Canonical name of the logger interface whose calls are validated.
pub const DEFAULT_LOGGER_INTERFACE: &str = "\\Logger\\Logger";

/// Methods whose first argument is a format string.
pub const DEFAULT_FORMAT_METHODS: &[&str] =
    &["infof", "fatalf", "errorf", "warningf", "noticef", "debugf"];

/// Which calls count as logger format calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerOptions {
    /// Compared verbatim with the receiver's resolved type.
    pub logger_interface: String,
    /// Compared verbatim with the called method's name.
    pub format_methods: Vec<String>,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            logger_interface: DEFAULT_LOGGER_INTERFACE.to_string(),
            format_methods: DEFAULT_FORMAT_METHODS
                .iter()
                .map(|m| (*m).to_string())
                .collect(),
        }
    }
}

impl CheckerOptions {
    pub fn is_format_method(&self, name: &str) -> bool {
        self.format_methods.iter().any(|m| m == name)
    }
}

/// The file being checked plus everything the resolvers consult.
pub struct CheckerContext<'a> {
    pub arena: &'a NodeArena,
    pub index: &'a dyn SymbolIndex,
    pub file_name: String,
    pub options: CheckerOptions,
}

impl<'a> CheckerContext<'a> {
    pub fn new(
        arena: &'a NodeArena,
        index: &'a dyn SymbolIndex,
        file_name: String,
        options: CheckerOptions,
    ) -> Self {
        Self {
            arena,
            index,
            file_name,
            options,
        }
    }

    pub fn is_index_ready(&self) -> bool {
        self.index.is_ready()
    }
}
