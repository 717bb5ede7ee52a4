// Copyright 2025 Cowboy AI, LLC.

//! The read-only application graph the engine classifies
//!
//! Source parsing and semantic-model construction are out of scope for the
//! classification engine — this module defines only the
//! capability set the engine needs to *read* that model, plus a minimal
//! in-memory implementation used by the engine's own test suite and by
//! embedders without a parser of their own yet.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::identifiers::NodeId;

/// The structural kind of a top-level type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    /// A class declaration
    Class,
    /// An interface declaration
    Interface,
    /// A record (or record-like immutable data) declaration
    Record,
    /// An enum declaration
    Enum,
    /// An annotation (marker) declaration
    Annotation,
}

/// A declared modifier on a type, field, or method
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// `public` visibility
    Public,
    /// `private` visibility
    Private,
    /// `protected` visibility
    Protected,
    /// `abstract` — cannot be instantiated directly
    Abstract,
    /// `static` — belongs to the type, not an instance
    Static,
    /// `final` — cannot be further subclassed/overridden
    Final,
}

/// A field declared on a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// The field's name
    pub name: String,
    /// The fully qualified name of the field's declared type
    pub declared_type: String,
    /// Modifiers present on the field
    pub modifiers: BTreeSet<Modifier>,
}

impl FieldDescriptor {
    /// Construct a field descriptor with no modifiers
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            modifiers: BTreeSet::new(),
        }
    }

    /// Attach a modifier
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Whether the declared type names a known collection wrapper
    ///
    /// A conservative, name-based check (`List`, `Set`, `Collection`, `Map`,
    /// or any of those with a generic suffix) — the graph is language
    /// agnostic and carries no richer type information than the FQN string.
    pub fn is_collection_valued(&self) -> bool {
        let base = self.declared_type.split('<').next().unwrap_or("");
        let simple = base.rsplit('.').next().unwrap_or(base);
        matches!(
            simple,
            "List" | "Set" | "Collection" | "Map" | "SortedSet" | "SortedMap"
        )
    }

    /// The element type FQN for a collection-valued field, if determinable
    /// from a single generic parameter (`List<Foo>` -> `Foo`)
    pub fn element_type(&self) -> Option<&str> {
        let start = self.declared_type.find('<')?;
        let end = self.declared_type.rfind('>')?;
        if end <= start + 1 {
            return None;
        }
        let inner = &self.declared_type[start + 1..end];
        if inner.contains(',') {
            return None;
        }
        Some(inner.trim())
    }
}

/// A method declared on a type (constructors use `return_type = None`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// The method's name
    pub name: String,
    /// The fully qualified return type name, or `None` for constructors
    pub return_type: Option<String>,
    /// Ordered fully qualified parameter type names
    pub parameter_types: Vec<String>,
    /// Modifiers present on the method
    pub modifiers: BTreeSet<Modifier>,
    /// Optional role tags a parser may have attached (e.g. `"getter"`)
    pub role_tags: BTreeSet<String>,
}

impl MethodDescriptor {
    /// Construct a method descriptor with no parameters and no modifiers
    pub fn new(name: impl Into<String>, return_type: Option<String>) -> Self {
        Self {
            name: name.into(),
            return_type,
            parameter_types: Vec::new(),
            modifiers: BTreeSet::new(),
            role_tags: BTreeSet::new(),
        }
    }

    /// Attach ordered parameter type FQNs
    pub fn with_parameters(mut self, params: impl IntoIterator<Item = String>) -> Self {
        self.parameter_types = params.into_iter().collect();
        self
    }

    /// Attach a modifier
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// All type FQNs referenced by this method's signature (return + params)
    pub fn referenced_types(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.parameter_types.iter().map(String::as_str).collect();
        if let Some(ret) = &self.return_type {
            out.push(ret.as_str());
        }
        out
    }
}

/// A read-only view of a top-level type entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeNode {
    /// Fully qualified name, e.g. `com.example.Order`
    pub qualified_name: String,
    /// Simple name, e.g. `Order`
    pub simple_name: String,
    /// Package name, e.g. `com.example`
    pub package_name: String,
    /// Structural kind
    pub kind: TypeKind,
    /// Modifiers present on the type itself
    pub modifiers: BTreeSet<Modifier>,
    /// Ordered field descriptors
    pub fields: Vec<FieldDescriptor>,
    /// Ordered method descriptors
    pub methods: Vec<MethodDescriptor>,
    /// Fully qualified annotation names directly present on the type
    pub annotations: BTreeSet<String>,
    /// Fully qualified supertype name, if any
    pub supertype: Option<String>,
    /// Ordered fully qualified implemented-interface names
    pub interfaces: Vec<String>,
}

impl TypeNode {
    /// Construct a minimal type node of the given kind
    pub fn new(qualified_name: impl Into<String>, kind: TypeKind) -> Self {
        let qualified_name = qualified_name.into();
        let (package_name, simple_name) = split_fqn(&qualified_name);
        Self {
            qualified_name,
            simple_name,
            package_name,
            kind,
            modifiers: BTreeSet::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            annotations: BTreeSet::new(),
            supertype: None,
            interfaces: Vec::new(),
        }
    }

    /// This node's stable [`NodeId`]
    pub fn id(&self) -> NodeId {
        NodeId::for_type(self.qualified_name.clone())
    }

    /// Attach ordered fields
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    /// Attach ordered methods
    pub fn with_methods(mut self, methods: impl IntoIterator<Item = MethodDescriptor>) -> Self {
        self.methods = methods.into_iter().collect();
        self
    }

    /// Attach annotations
    pub fn with_annotations(mut self, annotations: impl IntoIterator<Item = String>) -> Self {
        self.annotations = annotations.into_iter().collect();
        self
    }

    /// Attach a modifier
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Set the supertype
    pub fn with_supertype(mut self, supertype: impl Into<String>) -> Self {
        self.supertype = Some(supertype.into());
        self
    }

    /// Attach ordered implemented interfaces
    pub fn with_interfaces(mut self, interfaces: impl IntoIterator<Item = String>) -> Self {
        self.interfaces = interfaces.into_iter().collect();
        self
    }

    /// Whether any annotation's simple name equals `simple_name`
    pub fn has_annotation_simple_name(&self, simple_name: &str) -> bool {
        self.annotations
            .iter()
            .any(|fqn| fqn.rsplit('.').next().unwrap_or(fqn) == simple_name)
    }

    /// Whether any field is literally named `name`
    pub fn has_field_named(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Whether this node's structure looks immutable
    ///
    /// Conservative heuristic: records are immutable by language
    /// definition; classes are considered immutable here only if every
    /// field is `final` (or there are no fields at all is NOT considered
    /// immutable, since it carries no evidence either way).
    pub fn looks_immutable(&self) -> bool {
        match self.kind {
            TypeKind::Record | TypeKind::Enum => true,
            TypeKind::Class => {
                !self.fields.is_empty() && self.fields.iter().all(|f| f.modifiers.contains(&Modifier::Final))
            }
            TypeKind::Interface | TypeKind::Annotation => false,
        }
    }
}

fn split_fqn(fqn: &str) -> (String, String) {
    match fqn.rfind('.') {
        Some(idx) => (fqn[..idx].to_string(), fqn[idx + 1..].to_string()),
        None => (String::new(), fqn.to_string()),
    }
}

/// Abstract, read-only view over the application graph
///
/// Implementations must be deterministic: repeated calls against the same
/// underlying graph must return the same data in the same order.
pub trait GraphQuery {
    /// Look up a type node by its fully qualified name
    fn type_by_fqn(&self, fqn: &str) -> Option<&TypeNode>;

    /// Iterate all type nodes in deterministic order
    fn all_types(&self) -> Box<dyn Iterator<Item = &TypeNode> + '_>;

    /// Direct subtypes of the type named `fqn` (types whose `supertype` or
    /// `interfaces` name it), in deterministic order
    fn direct_subtypes_of<'a>(&'a self, fqn: &str) -> Vec<&'a TypeNode> {
        self.all_types()
            .filter(|t| {
                t.supertype.as_deref() == Some(fqn) || t.interfaces.iter().any(|i| i == fqn)
            })
            .collect()
    }

    /// Type FQNs referenced from the signature of the method named
    /// `method_name` on the type named `owner_fqn`
    fn types_referenced_from_method(&self, owner_fqn: &str, method_name: &str) -> Vec<String> {
        let Some(owner) = self.type_by_fqn(owner_fqn) else {
            return Vec::new();
        };
        owner
            .methods
            .iter()
            .filter(|m| m.name == method_name)
            .flat_map(|m| m.referenced_types().into_iter().map(str::to_owned))
            .collect()
    }

    /// FQNs of types that reference `fqn` in the signature of any of their
    /// methods ("X is used by Y" relationships)
    fn types_using(&self, fqn: &str) -> Vec<&TypeNode> {
        self.all_types()
            .filter(|t| {
                t.methods
                    .iter()
                    .any(|m| m.referenced_types().iter().any(|r| *r == fqn))
            })
            .collect()
    }
}

/// A simple, indexed, in-memory [`GraphQuery`] implementation
///
/// Not part of the engine's functional scope (graph construction is an
/// external collaborator's job) but provided so the engine is directly
/// exercisable in tests and by embedders without a parser of their own yet.
#[derive(Debug, Clone, Default)]
pub struct InMemoryApplicationGraph {
    by_fqn: BTreeMap<String, TypeNode>,
    order: Vec<String>,
}

impl InMemoryApplicationGraph {
    /// Build a graph from an ordered collection of type nodes
    ///
    /// Iteration order (`all_types`) follows insertion order, matching the
    /// determinism contract required of the driver.
    pub fn new(types: impl IntoIterator<Item = TypeNode>) -> Self {
        let mut by_fqn = BTreeMap::new();
        let mut order = Vec::new();
        for t in types {
            let fqn = t.qualified_name.clone();
            if !by_fqn.contains_key(&fqn) {
                order.push(fqn.clone());
            }
            by_fqn.insert(fqn, t);
        }
        Self { by_fqn, order }
    }
}

impl GraphQuery for InMemoryApplicationGraph {
    fn type_by_fqn(&self, fqn: &str) -> Option<&TypeNode> {
        self.by_fqn.get(fqn)
    }

    fn all_types(&self) -> Box<dyn Iterator<Item = &TypeNode> + '_> {
        Box::new(self.order.iter().filter_map(move |fqn| self.by_fqn.get(fqn)))
    }
}
