//! Hash-map backed `SymbolIndex`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decls::{ClassDecl, ConstantDecl, FunctionDecl};
use crate::symbol_index::{IndexAvailability, SymbolIndex, normalize_fqn};

/// Serialized form of an index, as shipped in a project snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndexSnapshot {
    #[serde(default = "default_ready")]
    pub ready: bool,
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
    #[serde(default)]
    pub functions: Vec<FunctionDecl>,
    #[serde(default)]
    pub constants: Vec<ConstantDecl>,
}

fn default_ready() -> bool {
    true
}

impl Default for IndexSnapshot {
    fn default() -> Self {
        Self {
            ready: true,
            classes: Vec::new(),
            functions: Vec::new(),
            constants: Vec::new(),
        }
    }
}

/// In-memory symbol index.
///
/// Class and function FQNs are matched case-insensitively, constants
/// case-sensitively. Registering the same FQN twice keeps both records in
/// insertion order.
#[derive(Debug, Default)]
pub struct InMemoryIndex {
    availability: IndexAvailability,
    classes: FxHashMap<String, Vec<ClassDecl>>,
    functions: FxHashMap<String, Vec<FunctionDecl>>,
    constants: Vec<ConstantDecl>,
    constants_by_fqn: FxHashMap<String, Vec<usize>>,
    constants_by_name: FxHashMap<String, Vec<usize>>,
}

fn class_key(fqn: &str) -> String {
    normalize_fqn(fqn).to_ascii_lowercase()
}

impl InMemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: IndexSnapshot) -> Self {
        let mut index = Self::new();
        for class in snapshot.classes {
            index.add_class(class);
        }
        for function in snapshot.functions {
            index.add_function(function);
        }
        for constant in snapshot.constants {
            index.add_constant(constant);
        }
        if !snapshot.ready {
            index.set_availability(IndexAvailability::NotReady);
        }
        debug!(
            classes = index.class_count(),
            functions = index.functions.len(),
            constants = index.constants.len(),
            "loaded symbol index"
        );
        index
    }

    pub fn set_availability(&mut self, availability: IndexAvailability) {
        self.availability = availability;
    }

    pub fn add_class(&mut self, class: ClassDecl) {
        let entry = self.classes.entry(class_key(&class.fqn)).or_default();
        if !entry.is_empty() {
            debug!(fqn = %class.fqn, "duplicate class declaration");
        }
        entry.push(class);
    }

    pub fn add_function(&mut self, function: FunctionDecl) {
        self.functions
            .entry(class_key(&function.fqn))
            .or_default()
            .push(function);
    }

    pub fn add_constant(&mut self, constant: ConstantDecl) {
        let slot = self.constants.len();
        self.constants_by_fqn
            .entry(normalize_fqn(&constant.fqn))
            .or_default()
            .push(slot);
        self.constants_by_name
            .entry(constant.name.clone())
            .or_default()
            .push(slot);
        self.constants.push(constant);
    }

    pub fn class_count(&self) -> usize {
        self.classes.values().map(Vec::len).sum()
    }

    fn constants_at(&self, slots: Option<&Vec<usize>>) -> Vec<&ConstantDecl> {
        slots
            .map(|slots| slots.iter().filter_map(|&i| self.constants.get(i)).collect())
            .unwrap_or_default()
    }
}

impl SymbolIndex for InMemoryIndex {
    fn availability(&self) -> IndexAvailability {
        self.availability
    }

    fn classes_by_fqn(&self, fqn: &str) -> Vec<&ClassDecl> {
        self.classes
            .get(&class_key(fqn))
            .map(|found| found.iter().collect())
            .unwrap_or_default()
    }

    fn functions_by_fqn(&self, fqn: &str) -> Vec<&FunctionDecl> {
        self.functions
            .get(&class_key(fqn))
            .map(|found| found.iter().collect())
            .unwrap_or_default()
    }

    fn constants_by_fqn(&self, fqn: &str) -> Vec<&ConstantDecl> {
        self.constants_at(self.constants_by_fqn.get(&normalize_fqn(fqn)))
    }

    fn constants_by_name(&self, name: &str) -> Vec<&ConstantDecl> {
        self.constants_at(self.constants_by_name.get(name))
    }
}
