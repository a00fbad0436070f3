//! Declaration records.
//!
//! Class constants and properties are both `FieldDecl`s; a field that
//! carries a value points at the `ConstantDeclaration` node holding it.

use fmtcheck_ast::{NodeIndex, TypeUnion};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDecl {
    pub name: String,
    #[serde(default)]
    pub return_type: TypeUnion,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    #[serde(default)]
    pub types: TypeUnion,
    /// The `ConstantDeclaration` node owning the default value, if any.
    #[serde(default)]
    pub declaration: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub fqn: String,
    /// FQN of the parent class.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

impl ClassDecl {
    pub fn new(fqn: impl Into<String>) -> Self {
        Self {
            fqn: fqn.into(),
            parent: None,
            methods: Vec::new(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    #[must_use]
    pub fn with_method(mut self, name: impl Into<String>, return_type: TypeUnion) -> Self {
        self.methods.push(MethodDecl {
            name: name.into(),
            return_type,
        });
        self
    }

    #[must_use]
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        types: TypeUnion,
        declaration: NodeIndex,
    ) -> Self {
        self.fields.push(FieldDecl {
            name: name.into(),
            types,
            declaration,
        });
        self
    }

    /// Own method by name. Method names are case-insensitive.
    pub fn own_method(&self, name: &str) -> Option<&MethodDecl> {
        self.methods
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
    }

    /// Own field by name. Field and constant names are case-sensitive.
    pub fn own_field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDecl {
    pub fqn: String,
    #[serde(default)]
    pub return_type: TypeUnion,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstantDecl {
    pub fqn: String,
    pub name: String,
    /// The `ConstantDeclaration` node owning the value.
    #[serde(default)]
    pub declaration: NodeIndex,
}
