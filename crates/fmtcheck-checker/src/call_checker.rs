//! Per-call-site validation.
//!
//! A call is checked only when it is a method call on the logger interface,
//! names one of the format methods, and passes a string literal as its
//! first argument. Checked calls compare the literal's placeholders with
//! the remaining arguments by position.

use tracing::{debug, trace};

use crate::context::CheckerContext;
use crate::error_reporter::{
    error_excess_argument, error_invalid_format_usage, error_no_format_item,
    error_unused_format_item, placeholder_range,
};
use crate::resolution::Resolution;
use crate::type_resolver::TypeResolver;
use fmtcheck_ast::{MethodReferenceData, NodeIndex, TextRange};
use fmtcheck_common::Diagnostic;
use fmtcheck_scanner::{FormatPlaceholder, scan};

/// Why a call was not validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    NotAMethodCall,
    ReceiverNotLogger,
    UnknownMethod,
    /// `$logger->errorf()`: the call is still being written.
    NoArguments,
    /// The format argument is not a direct string literal.
    DynamicFormat,
}

/// Outcome of [`CallChecker::check_call`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallCheck {
    Skipped(SkipReason),
    /// The symbol index is not ready.
    Abstained,
    /// Validated; the list is empty for a well-formed call.
    Checked(Vec<Diagnostic>),
}

impl CallCheck {
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        match self {
            Self::Checked(diagnostics) => diagnostics,
            Self::Skipped(_) | Self::Abstained => Vec::new(),
        }
    }

    pub const fn is_checked(&self) -> bool {
        matches!(self, Self::Checked(_))
    }
}

pub struct CallChecker<'a, 'ctx> {
    ctx: &'a CheckerContext<'ctx>,
}

impl<'a, 'ctx> CallChecker<'a, 'ctx> {
    pub fn new(ctx: &'a CheckerContext<'ctx>) -> Self {
        Self { ctx }
    }

    /// Diagnostics for `call`; empty when the call is skipped or the index
    /// is not ready.
    pub fn validate(&self, call: NodeIndex) -> Vec<Diagnostic> {
        self.check_call(call).into_diagnostics()
    }

    pub fn check_call(&self, call: NodeIndex) -> CallCheck {
        if !self.ctx.is_index_ready() {
            debug!(call = call.0, "symbol index not ready, skipping call");
            return CallCheck::Abstained;
        }

        let arena = self.ctx.arena;
        let Some(data) = arena.get_method_reference(call) else {
            return CallCheck::Skipped(SkipReason::NotAMethodCall);
        };

        match TypeResolver::new(self.ctx).resolve(data.receiver) {
            Resolution::Resolved(ty) if ty == self.ctx.options.logger_interface.as_str() => {}
            Resolution::IndexNotReady => return CallCheck::Abstained,
            other => {
                trace!(method = %data.name, receiver = ?other, "receiver is not the logger");
                return CallCheck::Skipped(SkipReason::ReceiverNotLogger);
            }
        }

        if !self.ctx.options.is_format_method(&data.name) {
            return CallCheck::Skipped(SkipReason::UnknownMethod);
        }

        let Some(&format_argument) = data.arguments.first() else {
            return CallCheck::Skipped(SkipReason::NoArguments);
        };
        let Some(format) = arena.get_string_literal(format_argument) else {
            trace!(method = %data.name, "format argument is not a literal");
            return CallCheck::Skipped(SkipReason::DynamicFormat);
        };

        let expected = scan(format);
        let literal_range = self.range_or_call(format_argument, call);
        CallCheck::Checked(self.compare(call, data, literal_range, format, &expected))
    }

    fn compare(
        &self,
        call: NodeIndex,
        data: &MethodReferenceData,
        literal_range: TextRange,
        format: &str,
        expected: &[FormatPlaceholder],
    ) -> Vec<Diagnostic> {
        let file = self.ctx.file_name.as_str();
        let provided = &data.arguments[1..];
        let mut diagnostics = Vec::new();

        if expected.is_empty() {
            if let Some(&first) = provided.first() {
                diagnostics.push(error_no_format_item(file, self.range_or_call(first, call)));
            }
        } else {
            for &excess in provided.iter().skip(expected.len()) {
                diagnostics.push(error_excess_argument(
                    file,
                    self.range_or_call(excess, call),
                    expected.len(),
                ));
            }
            for placeholder in expected.iter().skip(provided.len()) {
                let range = placeholder_range(literal_range, format, placeholder);
                diagnostics.push(error_unused_format_item(file, range));
            }
        }

        if !diagnostics.is_empty() {
            debug!(
                method = %data.name,
                expected = expected.len(),
                provided = provided.len(),
                "format call mismatch"
            );
            diagnostics.push(error_invalid_format_usage(file, data.name_range));
        }

        diagnostics
    }

    fn range_or_call(&self, node: NodeIndex, call: NodeIndex) -> TextRange {
        let arena = self.ctx.arena;
        arena
            .range(node)
            .or_else(|| arena.range(call))
            .unwrap_or_default()
    }
}
