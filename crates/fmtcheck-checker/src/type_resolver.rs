//! Expression -> canonical type name.
//!
//! Only four expression shapes carry a type the checker can use: variables,
//! class references, method calls, and property accesses. Their inferred
//! type union is reduced to one authoritative candidate, which is then
//! decoded against the symbol index until a plain type name remains.

use std::fmt;

use tracing::{debug, trace};

use crate::context::CheckerContext;
use crate::recursion::{RecursionGuard, RecursionProfile, RecursionResult};
use crate::resolution::Resolution;
use crate::signature::TypeSignature;
use fmtcheck_ast::{NodeData, NodeIndex, TypeUnion};

/// A canonical type name such as `\Logger\Logger` or `int`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeName(String);

impl TypeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for TypeName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TypeName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Resolves expression types. The guard is keyed by each signature being
/// decoded and starts empty for every top-level query.
pub struct TypeResolver<'a, 'ctx> {
    ctx: &'a CheckerContext<'ctx>,
    guard: RecursionGuard<&'ctx str>,
}

impl<'a, 'ctx> TypeResolver<'a, 'ctx> {
    pub fn new(ctx: &'a CheckerContext<'ctx>) -> Self {
        Self {
            ctx,
            guard: RecursionGuard::with_profile(RecursionProfile::TypeResolution),
        }
    }

    /// Resolve the type of `expr`, keeping "index not ready" distinct from
    /// "unresolved".
    #[tracing::instrument(level = "trace", skip_all, fields(expr = expr.0))]
    pub fn resolve(&mut self, expr: NodeIndex) -> Resolution<TypeName> {
        self.guard.reset();
        if !self.ctx.is_index_ready() {
            debug!("symbol index not ready, type resolution abstains");
            return Resolution::IndexNotReady;
        }
        Resolution::from_option(self.resolve_expression(expr))
    }

    /// Collapsed form of [`resolve`](Self::resolve): any failure is `None`.
    pub fn resolve_type(&mut self, expr: NodeIndex) -> Option<TypeName> {
        self.resolve(expr).resolved()
    }

    fn resolve_expression(&mut self, expr: NodeIndex) -> Option<TypeName> {
        let arena = self.ctx.arena;
        let node = arena.get(expr)?;
        match &node.data {
            NodeData::Variable(var) => self.resolve_union(&var.types),
            NodeData::ClassReference { fqn } => Some(TypeName::new(fqn.as_str())),
            NodeData::MethodReference(call) => self.resolve_union(&call.types),
            NodeData::FieldReference(field) => self.resolve_union(&field.types),
            other => {
                trace!(kind = other.kind_name(), "expression kind carries no type");
                None
            }
        }
    }

    fn resolve_union(&mut self, types: &'ctx TypeUnion) -> Option<TypeName> {
        let candidate = types.last_candidate()?;
        self.resolve_signature(candidate)
    }

    fn resolve_signature(&mut self, signature: &'ctx str) -> Option<TypeName> {
        match self.guard.enter(signature) {
            RecursionResult::Entered => {
                let result = self.decode_signature(signature);
                self.guard.leave(signature);
                result
            }
            RecursionResult::Cycle => {
                debug!(signature, "type signature cycle");
                None
            }
            RecursionResult::DepthExceeded | RecursionResult::IterationExceeded => {
                debug!(signature, "type resolution limit reached");
                None
            }
        }
    }

    fn decode_signature(&mut self, signature: &'ctx str) -> Option<TypeName> {
        let index = self.ctx.index;
        match TypeSignature::decode(signature) {
            TypeSignature::MemberAccess { class_fqn, member } => {
                let Some(class) = index.classes_by_fqn(class_fqn).into_iter().next() else {
                    trace!(class_fqn, "class not in index");
                    return None;
                };
                if let Some(method) = index.find_method(class, member) {
                    return self.resolve_union(&method.return_type);
                }
                let field = index.find_field(class, member, false)?;
                self.resolve_union(&field.types)
            }
            TypeSignature::FunctionReturn { fqn } => {
                let Some(function) = index.functions_by_fqn(fqn).into_iter().next() else {
                    trace!(fqn, "function not in index");
                    return None;
                };
                self.resolve_union(&function.return_type)
            }
            TypeSignature::ResolvedUnion { last } => last.map(TypeName::new),
            TypeSignature::Canonical(name) => Some(TypeName::new(name)),
            TypeSignature::Malformed => {
                trace!(signature, "malformed member signature");
                None
            }
        }
    }
}
