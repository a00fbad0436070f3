//! Symbol index for fmtcheck.
//!
//! The host owns a project-wide index of classes, functions, and constants.
//! The checker reaches it only through the [`SymbolIndex`] trait, and treats
//! every miss, and an index that is still being built, as "cannot tell".
//!
//! - `decls` - declaration records returned by lookups
//! - `symbol_index` - the `SymbolIndex` trait and FQN helpers
//! - `in_memory` - `InMemoryIndex`, a hash-map backed implementation

pub mod decls;
pub use decls::{ClassDecl, ConstantDecl, FieldDecl, FunctionDecl, MethodDecl};

pub mod symbol_index;
pub use symbol_index::{IndexAvailability, SymbolIndex, normalize_fqn};

pub mod in_memory;
pub use in_memory::{InMemoryIndex, IndexSnapshot};
