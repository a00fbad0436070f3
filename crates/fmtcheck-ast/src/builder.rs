//! Incremental construction of a `NodeArena`.
//!
//! Nodes are added bottom-up: children first, then the node that owns them.
//! The builder wires each child's `parent` link as the owner is added.

use crate::arena::NodeArena;
use crate::base::NodeIndex;
use crate::node::{
    ClassConstantReferenceData, ConstantDeclarationData, ConstantReferenceData,
    FieldReferenceData, MethodReferenceData, Node, NodeData, TypeUnion, TypedExpressionData,
    VariableData,
};
use fmtcheck_common::TextRange;

#[derive(Debug, Default)]
pub struct AstBuilder {
    arena: NodeArena,
}

impl AstBuilder {
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
        }
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut NodeArena {
        &mut self.arena
    }

    pub fn finish(self) -> NodeArena {
        self.arena
    }

    /// Add a node and adopt its children.
    pub fn add(&mut self, data: NodeData, range: TextRange) -> NodeIndex {
        let index = self.arena.add(Node::new(data, range));
        for child in self.arena.children(index) {
            if let Some(node) = self.arena.get_mut(child) {
                node.parent = index;
            }
        }
        index
    }

    pub fn source_file(&mut self, statements: Vec<NodeIndex>, range: TextRange) -> NodeIndex {
        self.add(NodeData::SourceFile { statements }, range)
    }

    pub fn block(&mut self, statements: Vec<NodeIndex>, range: TextRange) -> NodeIndex {
        self.add(NodeData::Block { statements }, range)
    }

    pub fn variable(&mut self, name: &str, types: TypeUnion, range: TextRange) -> NodeIndex {
        self.add(
            NodeData::Variable(VariableData {
                name: name.to_string(),
                types,
            }),
            range,
        )
    }

    pub fn class_reference(&mut self, fqn: &str, range: TextRange) -> NodeIndex {
        self.add(
            NodeData::ClassReference {
                fqn: fqn.to_string(),
            },
            range,
        )
    }

    pub fn method_reference(
        &mut self,
        receiver: NodeIndex,
        name: &str,
        name_range: TextRange,
        arguments: Vec<NodeIndex>,
        types: TypeUnion,
        range: TextRange,
    ) -> NodeIndex {
        self.add(
            NodeData::MethodReference(MethodReferenceData {
                receiver,
                name: name.to_string(),
                name_range,
                arguments,
                types,
            }),
            range,
        )
    }

    pub fn field_reference(
        &mut self,
        receiver: NodeIndex,
        name: &str,
        types: TypeUnion,
        range: TextRange,
    ) -> NodeIndex {
        self.add(
            NodeData::FieldReference(FieldReferenceData {
                receiver,
                name: name.to_string(),
                types,
            }),
            range,
        )
    }

    pub fn string_literal(&mut self, contents: &str, range: TextRange) -> NodeIndex {
        self.add(
            NodeData::StringLiteral {
                contents: contents.to_string(),
            },
            range,
        )
    }

    pub fn class_constant_reference(
        &mut self,
        class_reference: NodeIndex,
        name: &str,
        range: TextRange,
    ) -> NodeIndex {
        self.add(
            NodeData::ClassConstantReference(ClassConstantReferenceData {
                class_reference,
                name: name.to_string(),
            }),
            range,
        )
    }

    pub fn constant_reference(&mut self, fqn: &str, name: &str, range: TextRange) -> NodeIndex {
        self.add(
            NodeData::ConstantReference(ConstantReferenceData {
                fqn: fqn.to_string(),
                name: name.to_string(),
            }),
            range,
        )
    }

    pub fn constant_declaration(
        &mut self,
        name: &str,
        default_value: NodeIndex,
        range: TextRange,
    ) -> NodeIndex {
        self.add(
            NodeData::ConstantDeclaration(ConstantDeclarationData {
                name: name.to_string(),
                default_value,
            }),
            range,
        )
    }

    pub fn parenthesized(&mut self, expression: NodeIndex, range: TextRange) -> NodeIndex {
        self.add(NodeData::Parenthesized { expression }, range)
    }

    pub fn leaf(&mut self, text: &str, range: TextRange) -> NodeIndex {
        self.add(
            NodeData::Leaf {
                text: text.to_string(),
            },
            range,
        )
    }

    pub fn typed_expression(&mut self, text: &str, types: TypeUnion, range: TextRange) -> NodeIndex {
        self.add(
            NodeData::TypedExpression(TypedExpressionData {
                text: text.to_string(),
                types,
            }),
            range,
        )
    }

    /// Re-point `child`'s parent. Used for `Leaf` tokens whose owner is
    /// added later and does not list them as children.
    pub fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if let Some(node) = self.arena.get_mut(child) {
            node.parent = parent;
        }
    }
}
