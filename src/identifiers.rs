// Copyright 2025 Cowboy AI, LLC.

//! Stable identifiers for graph entities

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of graph entity a [`NodeId`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// A top-level type (class, interface, record, enum, annotation)
    Type,
    /// A field of a type
    Field,
    /// A method of a type
    Method,
    /// A package/namespace
    Package,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeKind::Type => "type",
            NodeKind::Field => "field",
            NodeKind::Method => "method",
            NodeKind::Package => "package",
        };
        write!(f, "{s}")
    }
}

/// Stable identifier for a graph entity
///
/// Equality and ordering are both defined over the full rendered string
/// (`"{kind}:{value}"`), matching the textual form callers see — two
/// `NodeId`s with the same kind and value are always interchangeable.
///
/// Immutable: once constructed a `NodeId` never changes.
///
/// # Examples
///
/// ```rust
/// use hexaglue_classifier::{NodeId, NodeKind};
///
/// let id = NodeId::new(NodeKind::Type, "com.example.Order");
/// assert_eq!(id.to_string(), "type:com.example.Order");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId {
    kind: NodeKind,
    value: String,
}

impl NodeId {
    /// Construct a new `NodeId` for the given kind and textual value
    pub fn new(kind: NodeKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Convenience constructor for a type-kind `NodeId`
    pub fn for_type(fqn: impl Into<String>) -> Self {
        Self::new(NodeKind::Type, fqn)
    }

    /// The entity kind this id refers to
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The textual value (e.g. a fully qualified name)
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format_is_kind_colon_value() {
        let id = NodeId::for_type("com.example.Order");
        assert_eq!(id.to_string(), "type:com.example.Order");
    }

    #[test]
    fn equality_is_by_kind_and_value() {
        let a = NodeId::new(NodeKind::Type, "com.example.Order");
        let b = NodeId::new(NodeKind::Type, "com.example.Order");
        let c = NodeId::new(NodeKind::Field, "com.example.Order");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn ordering_is_lexicographic_by_rendered_form() {
        let a = NodeId::for_type("com.example.Alpha");
        let b = NodeId::for_type("com.example.Beta");
        assert!(a < b);
    }
}
