//! Host AST abstraction for fmtcheck.
//!
//! The host owns its syntax tree; the checker reads a flattened copy of the
//! parts it cares about. Nodes live in a `NodeArena` and refer to each other
//! by `NodeIndex`. Each node carries a `NodeData` variant:
//! - references that may denote a logger (`Variable`, `ClassReference`,
//!   `MethodReference`, `FieldReference`)
//! - expressions that may fold to a literal (`StringLiteral`,
//!   `ClassConstantReference`, `ConstantReference`, `ConstantDeclaration`,
//!   `Parenthesized`, `Leaf`, `TypedExpression`)
//! - containers used only for traversal (`SourceFile`, `Block`, `Other`)

pub mod base;
pub use base::NodeIndex;
pub use fmtcheck_common::TextRange;

pub mod node;
pub use node::{
    ClassConstantReferenceData, ConstantDeclarationData, ConstantReferenceData,
    FieldReferenceData, MethodReferenceData, Node, NodeData, TypeUnion, TypedExpressionData,
    VariableData,
};

pub mod arena;
pub use arena::NodeArena;

pub mod builder;
pub use builder::AstBuilder;
