//! Abstain-aware resolution results.

/// Outcome of a type or constant resolution.
///
/// `Unresolved` and `IndexNotReady` both mean "cannot tell", but callers
/// must keep them apart: an index that is still building makes the whole
/// check abstain, while an unresolved expression only means this call site
/// is not a candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution<T> {
    Resolved(T),
    /// The chain ended in something that is not interpretable, was cyclic, or
    /// hit a limit.
    Unresolved,
    /// The symbol index is being rebuilt.
    IndexNotReady,
}

impl<T> Resolution<T> {
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Resolved(value),
            None => Self::Unresolved,
        }
    }

    pub fn resolved(self) -> Option<T> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Unresolved | Self::IndexNotReady => None,
        }
    }
}
