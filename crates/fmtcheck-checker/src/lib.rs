//! Logger format-string checker.
//!
//! This crate is organized into several modules:
//! - `context` - `CheckerContext` and `CheckerOptions`
//! - `recursion` - cycle/depth guard shared by the resolvers
//! - `resolution` - `Resolution`, the abstain-aware result type
//! - `signature` - decoder for the host's encoded type signatures
//! - `type_resolver` - expression -> canonical type name
//! - `constant_resolver` - expression -> literal text through constants
//! - `call_checker` - per-call-site validation
//! - `error_reporter` - diagnostic construction
//! - `state` - `CheckerState`, the per-file driver

pub mod call_checker;
pub mod constant_resolver;
pub mod context;
pub mod error_reporter;
pub mod recursion;
pub mod resolution;
pub mod signature;
pub mod state;
pub mod type_resolver;

pub use call_checker::{CallCheck, CallChecker, SkipReason};
pub use constant_resolver::ConstantResolver;
pub use context::{CheckerContext, CheckerOptions};
pub use resolution::Resolution;
pub use signature::TypeSignature;
pub use state::{CheckStats, CheckerState};
pub use type_resolver::{TypeName, TypeResolver};

/// Display name of the inspection, used as the diagnostic source label.
pub const INSPECTION_NAME: &str = "Logger format-string";

pub mod diagnostics {
    pub use fmtcheck_common::diagnostics::{
        Diagnostic, DiagnosticCategory, diagnostic_codes, diagnostic_messages, format_message,
    };
}
