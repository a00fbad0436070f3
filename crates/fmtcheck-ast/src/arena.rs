//! Node arena for AST storage.

use serde::{Deserialize, Serialize};

use crate::base::NodeIndex;
use crate::node::{
    ClassConstantReferenceData, ConstantDeclarationData, ConstantReferenceData,
    FieldReferenceData, MethodReferenceData, Node, NodeData, TypedExpressionData, VariableData,
};
use fmtcheck_common::TextRange;

/// Arena-based storage for AST nodes.
/// Nodes are stored contiguously and referenced by index.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Add a node to the arena and return its index
    pub fn add(&mut self, node: Node) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        NodeIndex(index)
    }

    /// Get a node by index
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Get a mutable node by index
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    /// Get the number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn range(&self, index: NodeIndex) -> Option<TextRange> {
        self.get(index).map(Node::range)
    }

    pub fn parent(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.get(index).and_then(|n| n.parent.into_option())
    }

    // -------------------------------------------------------------------------
    // Typed accessors
    // -------------------------------------------------------------------------

    pub fn get_method_reference(&self, index: NodeIndex) -> Option<&MethodReferenceData> {
        match &self.get(index)?.data {
            NodeData::MethodReference(call) => Some(call),
            _ => None,
        }
    }

    pub fn get_field_reference(&self, index: NodeIndex) -> Option<&FieldReferenceData> {
        match &self.get(index)?.data {
            NodeData::FieldReference(field) => Some(field),
            _ => None,
        }
    }

    pub fn get_variable(&self, index: NodeIndex) -> Option<&VariableData> {
        match &self.get(index)?.data {
            NodeData::Variable(var) => Some(var),
            _ => None,
        }
    }

    pub fn get_class_reference_fqn(&self, index: NodeIndex) -> Option<&str> {
        match &self.get(index)?.data {
            NodeData::ClassReference { fqn } => Some(fqn),
            _ => None,
        }
    }

    pub fn get_string_literal(&self, index: NodeIndex) -> Option<&str> {
        match &self.get(index)?.data {
            NodeData::StringLiteral { contents } => Some(contents),
            _ => None,
        }
    }

    pub fn get_class_constant_reference(
        &self,
        index: NodeIndex,
    ) -> Option<&ClassConstantReferenceData> {
        match &self.get(index)?.data {
            NodeData::ClassConstantReference(reference) => Some(reference),
            _ => None,
        }
    }

    pub fn get_constant_reference(&self, index: NodeIndex) -> Option<&ConstantReferenceData> {
        match &self.get(index)?.data {
            NodeData::ConstantReference(reference) => Some(reference),
            _ => None,
        }
    }

    pub fn get_constant_declaration(&self, index: NodeIndex) -> Option<&ConstantDeclarationData> {
        match &self.get(index)?.data {
            NodeData::ConstantDeclaration(decl) => Some(decl),
            _ => None,
        }
    }

    pub fn get_typed_expression(&self, index: NodeIndex) -> Option<&TypedExpressionData> {
        match &self.get(index)?.data {
            NodeData::TypedExpression(expr) => Some(expr),
            _ => None,
        }
    }

    // -------------------------------------------------------------------------
    // Traversal
    // -------------------------------------------------------------------------

    /// Child indices of `index` in source order. `NONE` links are skipped.
    pub fn children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let Some(node) = self.get(index) else {
            return Vec::new();
        };

        let add_opt = |children: &mut Vec<NodeIndex>, idx: NodeIndex| {
            if idx.is_some() {
                children.push(idx);
            }
        };

        let mut children = Vec::new();
        match &node.data {
            NodeData::SourceFile { statements } | NodeData::Block { statements } => {
                children.extend(statements.iter().copied().filter(|i| i.is_some()));
            }
            NodeData::Other { children: list, .. } => {
                children.extend(list.iter().copied().filter(|i| i.is_some()));
            }
            NodeData::MethodReference(call) => {
                add_opt(&mut children, call.receiver);
                children.extend(call.arguments.iter().copied().filter(|i| i.is_some()));
            }
            NodeData::FieldReference(field) => {
                add_opt(&mut children, field.receiver);
            }
            NodeData::ClassConstantReference(reference) => {
                add_opt(&mut children, reference.class_reference);
            }
            NodeData::ConstantDeclaration(decl) => {
                add_opt(&mut children, decl.default_value);
            }
            NodeData::Parenthesized { expression } => {
                add_opt(&mut children, *expression);
            }
            NodeData::Variable(_)
            | NodeData::ClassReference { .. }
            | NodeData::StringLiteral { .. }
            | NodeData::ConstantReference(_)
            | NodeData::Leaf { .. }
            | NodeData::TypedExpression(_) => {}
        }
        children
    }

    /// Point every child's `parent` at its owner, leaving links the host
    /// already set untouched.
    pub fn link_parents(&mut self) {
        for index in 0..self.nodes.len() {
            let owner = NodeIndex(index as u32);
            for child in self.children(owner) {
                if let Some(node) = self.get_mut(child)
                    && node.parent.is_none()
                {
                    node.parent = owner;
                }
            }
        }
    }

    /// All nodes reachable from `root`, parents before children, siblings in
    /// source order. Each node is yielded once even if the links form a cycle.
    pub fn preorder(&self, root: NodeIndex) -> Vec<NodeIndex> {
        let mut seen = vec![false; self.nodes.len()];
        let mut order = Vec::new();
        let mut stack = vec![root];

        while let Some(index) = stack.pop() {
            let Some(slot) = seen.get_mut(index.0 as usize) else {
                continue;
            };
            if *slot {
                continue;
            }
            *slot = true;
            order.push(index);

            let children = self.children(index);
            stack.extend(children.into_iter().rev());
        }

        order
    }
}
