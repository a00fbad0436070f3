//! The `SymbolIndex` trait.
//!
//! Lookups return every candidate the host knows about; callers treat the
//! first one as authoritative. When several indices hold a same-named
//! symbol, "first" has no defined meaning beyond the order the host
//! returns them in.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::decls::{ClassDecl, ConstantDecl, FieldDecl, FunctionDecl, MethodDecl};
use fmtcheck_common::limits::MAX_INHERITANCE_DEPTH;

/// Whether the index can currently answer queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexAvailability {
    #[default]
    Ready,
    /// The host is (re)building the index; answers would be incomplete.
    NotReady,
}

/// Read-only view of the host's project-wide symbol index.
pub trait SymbolIndex {
    fn availability(&self) -> IndexAvailability;

    fn classes_by_fqn(&self, fqn: &str) -> Vec<&ClassDecl>;

    fn functions_by_fqn(&self, fqn: &str) -> Vec<&FunctionDecl>;

    fn constants_by_fqn(&self, fqn: &str) -> Vec<&ConstantDecl>;

    fn constants_by_name(&self, name: &str) -> Vec<&ConstantDecl>;

    fn is_ready(&self) -> bool {
        self.availability() == IndexAvailability::Ready
    }

    /// `class` followed by its ancestors, nearest first.
    ///
    /// The walk follows the first candidate for each parent FQN, stops at
    /// the first unknown parent, and stops on a repeated class or after
    /// `MAX_INHERITANCE_DEPTH` hops.
    fn lineage<'a>(&'a self, class: &'a ClassDecl) -> Vec<&'a ClassDecl> {
        let mut chain = vec![class];
        let mut seen = FxHashSet::default();
        seen.insert(normalize_fqn(&class.fqn).to_ascii_lowercase());

        let mut current = class;
        for _ in 0..MAX_INHERITANCE_DEPTH {
            let Some(parent_fqn) = current.parent.as_deref() else {
                break;
            };
            let Some(parent) = self.classes_by_fqn(parent_fqn).into_iter().next() else {
                trace!(parent = parent_fqn, "parent class not in index");
                break;
            };
            if !seen.insert(normalize_fqn(&parent.fqn).to_ascii_lowercase()) {
                trace!(class = %parent.fqn, "inheritance cycle");
                break;
            }
            chain.push(parent);
            current = parent;
        }

        chain
    }

    /// Method by name, own methods first, then inherited ones.
    fn find_method<'a>(&'a self, class: &'a ClassDecl, name: &str) -> Option<&'a MethodDecl> {
        self.lineage(class)
            .into_iter()
            .find_map(|owner| owner.own_method(name))
    }

    /// Field (property or class constant) by name.
    fn find_field<'a>(
        &'a self,
        class: &'a ClassDecl,
        name: &str,
        include_inherited: bool,
    ) -> Option<&'a FieldDecl> {
        if !include_inherited {
            return class.own_field(name);
        }
        self.lineage(class)
            .into_iter()
            .find_map(|owner| owner.own_field(name))
    }
}

/// Normalise an FQN to carry exactly one leading backslash.
pub fn normalize_fqn(fqn: &str) -> String {
    let trimmed = fqn.trim().trim_start_matches('\\');
    let mut normalized = String::with_capacity(trimmed.len() + 1);
    normalized.push('\\');
    normalized.push_str(trimmed);
    normalized
}
