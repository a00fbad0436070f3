//! Per-file checking state.

use tracing::debug;

use crate::call_checker::{CallCheck, CallChecker};
use crate::context::{CheckerContext, CheckerOptions};
use fmtcheck_ast::{NodeArena, NodeIndex};
use fmtcheck_common::Diagnostic;
use fmtcheck_index::SymbolIndex;

/// Counters for one file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckStats {
    pub calls: usize,
    pub checked: usize,
    pub skipped: usize,
    pub abstained: usize,
}

/// Walks a file and validates every method call in it.
pub struct CheckerState<'a> {
    pub ctx: CheckerContext<'a>,
    pub diagnostics: Vec<Diagnostic>,
    pub stats: CheckStats,
}

impl<'a> CheckerState<'a> {
    pub fn new(
        arena: &'a NodeArena,
        index: &'a dyn SymbolIndex,
        file_name: String,
        options: CheckerOptions,
    ) -> Self {
        Self {
            ctx: CheckerContext::new(arena, index, file_name, options),
            diagnostics: Vec::new(),
            stats: CheckStats::default(),
        }
    }

    /// Validate every `MethodReference` reachable from `root`, in source
    /// order. Returns the diagnostics collected so far.
    #[tracing::instrument(level = "trace", skip_all, fields(file = %self.ctx.file_name))]
    pub fn check_source_file(&mut self, root: NodeIndex) -> &[Diagnostic] {
        if !self.ctx.is_index_ready() {
            debug!("symbol index not ready, skipping file");
            return &self.diagnostics;
        }

        let arena = self.ctx.arena;
        for node in arena.preorder(root) {
            if arena.get_method_reference(node).is_none() {
                continue;
            }
            self.stats.calls += 1;
            match CallChecker::new(&self.ctx).check_call(node) {
                CallCheck::Checked(found) => {
                    self.stats.checked += 1;
                    self.diagnostics.extend(found);
                }
                CallCheck::Skipped(_) => self.stats.skipped += 1,
                CallCheck::Abstained => self.stats.abstained += 1,
            }
        }

        debug!(
            calls = self.stats.calls,
            checked = self.stats.checked,
            diagnostics = self.diagnostics.len(),
            "file checked"
        );
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}
