//! Expression -> literal text, through constants.
//!
//! Folds string literals, class constants (`Foo::FMT`), global constants
//! (`FMT`, `\App\FMT`), wrapper nodes and integer-typed expressions into
//! the text they stand for. Every node entered is tracked by the recursion
//! guard, so a chain of constants that refers back to itself ends as
//! unresolved.

use tracing::{debug, trace};

use crate::context::CheckerContext;
use crate::recursion::{RecursionGuard, RecursionProfile, RecursionResult};
use crate::resolution::Resolution;
use fmtcheck_ast::{NodeData, NodeIndex};

pub struct ConstantResolver<'a, 'ctx> {
    ctx: &'a CheckerContext<'ctx>,
    guard: RecursionGuard<NodeIndex>,
    targets: Vec<NodeIndex>,
}

impl<'a, 'ctx> ConstantResolver<'a, 'ctx> {
    pub fn new(ctx: &'a CheckerContext<'ctx>) -> Self {
        Self {
            ctx,
            guard: RecursionGuard::with_profile(RecursionProfile::ConstantResolution),
            targets: Vec::new(),
        }
    }

    /// Resolve `expr` to its literal text.
    #[tracing::instrument(level = "trace", skip_all, fields(expr = expr.0))]
    pub fn resolve(&mut self, expr: NodeIndex) -> Resolution<String> {
        self.guard.reset();
        if !self.ctx.is_index_ready() {
            debug!("symbol index not ready, constant resolution abstains");
            return Resolution::IndexNotReady;
        }
        Resolution::from_option(self.resolve_node(expr))
    }

    /// Collapsed form of [`resolve`](Self::resolve): any failure is `None`.
    pub fn resolve_literal(&mut self, expr: NodeIndex) -> Option<String> {
        self.resolve(expr).resolved()
    }

    /// Like [`resolve_literal`](Self::resolve_literal), and appends the
    /// declarations followed along the way to `targets`: the field of each
    /// class constant and the first candidate of each global constant.
    ///
    /// Declarations are appended even when the chain ends unresolved.
    pub fn resolve_literal_with_targets(
        &mut self,
        expr: NodeIndex,
        targets: &mut Vec<NodeIndex>,
    ) -> Option<String> {
        self.targets.clear();
        let value = self.resolve_literal(expr);
        targets.append(&mut self.targets);
        value
    }

    fn resolve_node(&mut self, idx: NodeIndex) -> Option<String> {
        match self.guard.enter(idx) {
            RecursionResult::Entered => {
                let result = self.resolve_entered(idx);
                self.guard.leave(idx);
                result
            }
            RecursionResult::Cycle => {
                debug!(node = idx.0, "constant reference cycle");
                None
            }
            RecursionResult::DepthExceeded | RecursionResult::IterationExceeded => {
                debug!(node = idx.0, "constant resolution limit reached");
                None
            }
        }
    }

    fn resolve_entered(&mut self, idx: NodeIndex) -> Option<String> {
        let arena = self.ctx.arena;
        let index = self.ctx.index;
        let node = arena.get(idx)?;

        match &node.data {
            NodeData::StringLiteral { contents } => Some(contents.clone()),

            NodeData::ClassConstantReference(reference) => {
                let class_fqn = arena.get_class_reference_fqn(reference.class_reference)?;
                let Some(class) = index.classes_by_fqn(class_fqn).into_iter().next() else {
                    trace!(class_fqn, "class not in index");
                    return None;
                };
                let field = index.find_field(class, &reference.name, true)?;
                let declaration = arena.get_constant_declaration(field.declaration)?;
                if declaration.default_value.is_none() {
                    return None;
                }
                self.targets.push(field.declaration);
                self.resolve_node(field.declaration)
            }

            NodeData::ConstantReference(reference) => {
                let mut candidates = index.constants_by_fqn(&reference.fqn);
                if candidates.is_empty() {
                    candidates = index.constants_by_name(&reference.name);
                }
                let Some(constant) = candidates.first() else {
                    trace!(fqn = %reference.fqn, "constant not in index");
                    return None;
                };
                if constant.declaration.is_some() {
                    self.targets.push(constant.declaration);
                }
                self.resolve_node(constant.declaration)
            }

            NodeData::ConstantDeclaration(declaration) => {
                self.resolve_node(declaration.default_value)
            }

            NodeData::Parenthesized { expression } => self.resolve_node(*expression),

            NodeData::Leaf { .. } => {
                let parent = node.parent.into_option()?;
                self.resolve_node(parent)
            }

            NodeData::TypedExpression(expr) if expr.types.is_int() => Some(expr.text.clone()),

            other => {
                trace!(kind = other.kind_name(), "expression does not fold to a literal");
                None
            }
        }
    }
}
