// Copyright 2025 Cowboy AI, LLC.

//! Classification results

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::confidence::ConfidenceLevel;
use crate::conflict::Conflict;
use crate::evidence::Evidence;
use crate::identifiers::NodeId;
use crate::kind::{PortDirection, Target, UNCLASSIFIED};

/// The outcome status of classifying one subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassificationStatus {
    /// A winner was selected with no ambiguity
    Classified,
    /// No criterion matched
    Unclassified,
    /// A winner was selected but an incompatible match tied its priority
    Conflict,
}

/// The classification of a single subject against a single target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// The subject being classified
    pub subject: NodeId,
    /// Which target family this result is for
    pub target: Target,
    /// The outcome status
    pub status: ClassificationStatus,
    /// The winning kind's name, or the sentinel `"UNCLASSIFIED"`
    pub kind_name: String,
    /// Confidence of the winning match, if any
    pub confidence: Option<ConfidenceLevel>,
    /// Id of the winning criterion, if any
    pub winning_criterion_id: Option<String>,
    /// Effective priority of the winning criterion, if any
    pub winning_priority: Option<i32>,
    /// Justification of the winning match, if any
    pub justification: Option<String>,
    /// Merged evidence supporting the winning match
    pub evidence: Vec<Evidence>,
    /// Losing, incompatible matches
    pub conflicts: Vec<Conflict>,
    /// Port direction, meaningful only when `target == Target::Port`
    pub port_direction: Option<PortDirection>,
}

impl ClassificationResult {
    /// Build an `Unclassified` result for `subject` under `target`
    pub fn unclassified(subject: NodeId, target: Target) -> Self {
        Self {
            subject,
            target,
            status: ClassificationStatus::Unclassified,
            kind_name: UNCLASSIFIED.to_string(),
            confidence: None,
            winning_criterion_id: None,
            winning_priority: None,
            justification: None,
            evidence: Vec::new(),
            conflicts: Vec::new(),
            port_direction: None,
        }
    }
}

/// An ordered mapping from subject to classification result, plus
/// convenience views over it
///
/// Insertion order matches the driver's iteration order over the graph's
/// types.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassificationResults {
    entries: IndexMap<NodeId, ClassificationResult>,
}

impl ClassificationResults {
    /// An empty result set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a result, preserving first-seen insertion order
    pub fn insert(&mut self, result: ClassificationResult) {
        self.entries.insert(result.subject.clone(), result);
    }

    /// Look up the result for a given subject
    pub fn get(&self, subject: &NodeId) -> Option<&ClassificationResult> {
        self.entries.get(subject)
    }

    /// How many subjects have a recorded result
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no subjects have a recorded result
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All results, in insertion order
    pub fn all(&self) -> impl Iterator<Item = &ClassificationResult> {
        self.entries.values()
    }

    /// Results for the `Domain` target only, in insertion order
    pub fn domain_only(&self) -> impl Iterator<Item = &ClassificationResult> {
        self.entries.values().filter(|r| r.target == Target::Domain)
    }

    /// Results for the `Port` target only, in insertion order
    pub fn port_only(&self) -> impl Iterator<Item = &ClassificationResult> {
        self.entries.values().filter(|r| r.target == Target::Port)
    }

    /// Results whose status is `Conflict`, in insertion order
    pub fn conflicts_only(&self) -> impl Iterator<Item = &ClassificationResult> {
        self.entries
            .values()
            .filter(|r| r.status == ClassificationStatus::Conflict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_preserved() {
        let mut results = ClassificationResults::new();
        results.insert(ClassificationResult::unclassified(
            NodeId::for_type("b.B"),
            Target::Domain,
        ));
        results.insert(ClassificationResult::unclassified(
            NodeId::for_type("a.A"),
            Target::Domain,
        ));
        let names: Vec<_> = results.all().map(|r| r.subject.value().to_string()).collect();
        assert_eq!(names, vec!["b.B", "a.A"]);
    }

    #[test]
    fn views_filter_by_target_and_status() {
        let mut results = ClassificationResults::new();
        let mut domain_result = ClassificationResult::unclassified(NodeId::for_type("a.A"), Target::Domain);
        domain_result.status = ClassificationStatus::Conflict;
        results.insert(domain_result);
        results.insert(ClassificationResult::unclassified(
            NodeId::for_type("a.APort"),
            Target::Port,
        ));

        assert_eq!(results.domain_only().count(), 1);
        assert_eq!(results.port_only().count(), 1);
        assert_eq!(results.conflicts_only().count(), 1);
    }
}
