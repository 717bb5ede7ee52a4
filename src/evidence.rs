// Copyright 2025 Cowboy AI, LLC.

//! Evidence supporting a criterion's match
//!
//! Mirrors the `Evidence`/`EvidenceType` shape used for cross-domain
//! predicate reasoning, specialized to the categories a classification
//! criterion can produce.

use serde::{Deserialize, Serialize};

use crate::identifiers::NodeId;

/// Category of evidence a criterion can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EvidenceCategory {
    /// A language-level annotation was observed
    Annotation,
    /// A naming pattern matched
    Naming,
    /// A structural property of the type was observed (fields, supertype, …)
    Structure,
    /// A relationship to another node was observed
    Relationship,
    /// A package/namespace pattern matched
    Package,
}

/// An immutable piece of evidence explaining why a criterion matched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    /// The category of this evidence
    pub category: EvidenceCategory,
    /// Human-readable description
    pub description: String,
    /// Related node ids, if any (e.g. the neighbouring repository found)
    pub related: Vec<NodeId>,
}

impl Evidence {
    /// Build an `Annotation` evidence entry
    pub fn annotation(description: impl Into<String>) -> Self {
        Self {
            category: EvidenceCategory::Annotation,
            description: description.into(),
            related: Vec::new(),
        }
    }

    /// Build a `Naming` evidence entry
    pub fn naming(description: impl Into<String>) -> Self {
        Self {
            category: EvidenceCategory::Naming,
            description: description.into(),
            related: Vec::new(),
        }
    }

    /// Build a `Structure` evidence entry
    pub fn structure(description: impl Into<String>) -> Self {
        Self {
            category: EvidenceCategory::Structure,
            description: description.into(),
            related: Vec::new(),
        }
    }

    /// Build a `Relationship` evidence entry referencing the given node
    pub fn relationship(description: impl Into<String>, related: NodeId) -> Self {
        Self {
            category: EvidenceCategory::Relationship,
            description: description.into(),
            related: vec![related],
        }
    }

    /// Build a `Package` evidence entry
    pub fn package(description: impl Into<String>) -> Self {
        Self {
            category: EvidenceCategory::Package,
            description: description.into(),
            related: Vec::new(),
        }
    }

    /// The (category, description) key used when de-duplicating evidence
    pub fn dedup_key(&self) -> (EvidenceCategory, &str) {
        (self.category, self.description.as_str())
    }
}
