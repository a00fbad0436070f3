//! Node payloads.
//!
//! `NodeData` is a closed tagged union: the checker dispatches on it with
//! `match`, never by inspecting runtime types. Snapshots serialize it with a
//! `kind` tag, e.g. `{"kind": "stringLiteral", "contents": "%d", ...}`.

use serde::{Deserialize, Serialize};

use crate::base::NodeIndex;
use fmtcheck_common::TextRange;

/// The union of candidate type strings a host inferred for an expression.
///
/// Entries are either canonical type names (`\Foo\Bar`, `int`), the wildcard
/// `?` meaning "unknown", or encoded signatures (`#M#C\Foo.bar`, `#C\fn`, ...)
/// that still need decoding against the symbol index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeUnion {
    types: Vec<String>,
}

impl TypeUnion {
    /// Marker for "type unknown".
    pub const WILDCARD: &'static str = "?";
    /// Canonical name of the integer type.
    pub const INT: &'static str = "int";

    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Raw entries in insertion order.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Entries in canonical order (byte-lexicographic, duplicates removed).
    pub fn types_sorted(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.types.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.dedup();
        sorted
    }

    /// The authoritative candidate: the last non-wildcard entry in canonical
    /// order.
    pub fn last_candidate(&self) -> Option<&str> {
        self.types_sorted()
            .into_iter()
            .rev()
            .find(|t| *t != Self::WILDCARD)
    }

    /// Whether the union is exactly the integer type.
    pub fn is_int(&self) -> bool {
        matches!(self.types_sorted().as_slice(), [only] if *only == Self::INT)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableData {
    pub name: String,
    #[serde(default)]
    pub types: TypeUnion,
}

/// `$receiver->name(arguments)` or `Receiver::name(arguments)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodReferenceData {
    pub receiver: NodeIndex,
    pub name: String,
    /// Range of the method-name token.
    pub name_range: TextRange,
    #[serde(default)]
    pub arguments: Vec<NodeIndex>,
    /// Type of the call's result.
    #[serde(default)]
    pub types: TypeUnion,
}

/// `$receiver->name`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldReferenceData {
    pub receiver: NodeIndex,
    pub name: String,
    #[serde(default)]
    pub types: TypeUnion,
}

/// `Class::NAME`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassConstantReferenceData {
    /// A `ClassReference` node.
    pub class_reference: NodeIndex,
    pub name: String,
}

/// A bare global constant, `NAME` or `\Ns\NAME`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstantReferenceData {
    pub fqn: String,
    pub name: String,
}

/// `const NAME = <default_value>;`, at class or global level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstantDeclarationData {
    pub name: String,
    #[serde(default)]
    pub default_value: NodeIndex,
}

/// An expression whose type the host computed, e.g. `42` or `$a + 1`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypedExpressionData {
    pub text: String,
    #[serde(default)]
    pub types: TypeUnion,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NodeData {
    SourceFile {
        #[serde(default)]
        statements: Vec<NodeIndex>,
    },
    Block {
        #[serde(default)]
        statements: Vec<NodeIndex>,
    },
    Variable(VariableData),
    ClassReference {
        fqn: String,
    },
    MethodReference(MethodReferenceData),
    FieldReference(FieldReferenceData),
    StringLiteral {
        /// Decoded contents, quotes excluded.
        contents: String,
    },
    ClassConstantReference(ClassConstantReferenceData),
    ConstantReference(ConstantReferenceData),
    ConstantDeclaration(ConstantDeclarationData),
    Parenthesized {
        expression: NodeIndex,
    },
    /// A bare token; its meaning lives in its parent.
    Leaf {
        #[serde(default)]
        text: String,
    },
    TypedExpression(TypedExpressionData),
    /// Any construct the checker does not interpret. Children are still
    /// walked when checking a whole file.
    Other {
        #[serde(default)]
        text: String,
        #[serde(default)]
        children: Vec<NodeIndex>,
    },
}

impl NodeData {
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::SourceFile { .. } => "SourceFile",
            Self::Block { .. } => "Block",
            Self::Variable(_) => "Variable",
            Self::ClassReference { .. } => "ClassReference",
            Self::MethodReference(_) => "MethodReference",
            Self::FieldReference(_) => "FieldReference",
            Self::StringLiteral { .. } => "StringLiteral",
            Self::ClassConstantReference(_) => "ClassConstantReference",
            Self::ConstantReference(_) => "ConstantReference",
            Self::ConstantDeclaration(_) => "ConstantDeclaration",
            Self::Parenthesized { .. } => "Parenthesized",
            Self::Leaf { .. } => "Leaf",
            Self::TypedExpression(_) => "TypedExpression",
            Self::Other { .. } => "Other",
        }
    }
}

/// A node: payload plus its location and parent link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(flatten)]
    pub data: NodeData,
    pub pos: u32,
    pub end: u32,
    #[serde(default)]
    pub parent: NodeIndex,
}

impl Node {
    pub fn new(data: NodeData, range: TextRange) -> Self {
        Self {
            data,
            pos: range.pos,
            end: range.end,
            parent: NodeIndex::NONE,
        }
    }

    pub const fn range(&self) -> TextRange {
        TextRange::new(self.pos, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_candidate_skips_wildcard() {
        let types = TypeUnion::new(["\\Foo\\Bar", "?"]);
        assert_eq!(types.last_candidate(), Some("\\Foo\\Bar"));
    }

    #[test]
    fn last_candidate_uses_canonical_order() {
        // '#' sorts before '\', so the class name wins over the signature
        let types = TypeUnion::new(["\\Logger\\Logger", "#M#C\\App.logger"]);
        assert_eq!(types.types_sorted(), vec!["#M#C\\App.logger", "\\Logger\\Logger"]);
        assert_eq!(types.last_candidate(), Some("\\Logger\\Logger"));
    }

    #[test]
    fn only_wildcards_has_no_candidate() {
        assert_eq!(TypeUnion::new(["?", "?"]).last_candidate(), None);
        assert_eq!(TypeUnion::default().last_candidate(), None);
    }

    #[test]
    fn is_int_requires_exactly_int() {
        assert!(TypeUnion::new(["int"]).is_int());
        assert!(TypeUnion::new(["int", "int"]).is_int());
        assert!(!TypeUnion::new(["int", "string"]).is_int());
        assert!(!TypeUnion::new(["float"]).is_int());
        assert!(!TypeUnion::default().is_int());
    }

    #[test]
    fn node_deserializes_with_kind_tag() {
        let json = r#"{"kind":"stringLiteral","contents":"%d items","pos":10,"end":20}"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(
            node.data,
            NodeData::StringLiteral {
                contents: "%d items".into()
            }
        );
        assert_eq!(node.range(), TextRange::new(10, 20));
        assert!(node.parent.is_none());
    }

    #[test]
    fn method_reference_deserializes_camel_case_fields() {
        let json = r#"{
            "kind": "methodReference",
            "receiver": 0,
            "name": "errorf",
            "nameRange": {"pos": 9, "end": 15},
            "arguments": [1, 2],
            "pos": 0,
            "end": 30
        }"#;
        let node: Node = serde_json::from_str(json).unwrap();
        let NodeData::MethodReference(call) = node.data else {
            panic!("expected a method reference");
        };
        assert_eq!(call.receiver, NodeIndex(0));
        assert_eq!(call.name_range, TextRange::new(9, 15));
        assert_eq!(call.arguments, vec![NodeIndex(1), NodeIndex(2)]);
        assert!(call.types.is_empty());
    }
}
