// Copyright 2025 Cowboy AI, LLC.

use hexaglue_classifier::{
    classify_domain, domain_classifier, ClassificationStatus, ConfidenceLevel, CriteriaProfile,
    Criterion, DomainKind, Evidence, GraphQuery, InMemoryApplicationGraph, MatchResult,
    NullDiagnosticReporter, Target, TargetClassifier, TypeKind, TypeNode,
};
use pretty_assertions::assert_eq;

struct FixedMatch {
    id: &'static str,
    priority: i32,
    kind: DomainKind,
    confidence: ConfidenceLevel,
}

impl Criterion<DomainKind> for FixedMatch {
    fn id(&self) -> &str {
        self.id
    }
    fn priority(&self) -> i32 {
        self.priority
    }
    fn target_kind(&self) -> DomainKind {
        self.kind
    }
    fn evaluate(&self, _node: &TypeNode, _graph: &dyn GraphQuery) -> MatchResult {
        MatchResult::matched(self.confidence, format!("{} always matches", self.id), vec![Evidence::naming(self.id)])
    }
}

#[test]
fn same_priority_same_kind_breaks_tie_on_id() {
    let classifier = TargetClassifier::new(
        Target::Domain,
        vec![
            Box::new(FixedMatch {
                id: "z-criteria",
                priority: 80,
                kind: DomainKind::Entity,
                confidence: ConfidenceLevel::High,
            }),
            Box::new(FixedMatch {
                id: "a-criteria",
                priority: 80,
                kind: DomainKind::Entity,
                confidence: ConfidenceLevel::High,
            }),
        ],
        Box::new(hexaglue_classifier::DomainCompatibilityPolicy),
    );
    let node = TypeNode::new("com.example.Thing", TypeKind::Class);
    let graph = InMemoryApplicationGraph::new(vec![]);
    let result = classify_domain(
        &classifier,
        &node,
        &graph,
        &CriteriaProfile::default_profile(),
        &NullDiagnosticReporter,
    );

    assert_eq!(result.winning_criterion_id.as_deref(), Some("a-criteria"));
    assert_eq!(result.status, ClassificationStatus::Classified);
    assert!(result.conflicts.is_empty());
}

#[test]
fn same_priority_incompatible_kinds_is_a_conflict() {
    let classifier = TargetClassifier::new(
        Target::Domain,
        vec![
            Box::new(FixedMatch {
                id: "domain.explicit.entity",
                priority: 100,
                kind: DomainKind::Entity,
                confidence: ConfidenceLevel::Explicit,
            }),
            Box::new(FixedMatch {
                id: "domain.explicit.valueObject",
                priority: 100,
                kind: DomainKind::ValueObject,
                confidence: ConfidenceLevel::Explicit,
            }),
        ],
        Box::new(hexaglue_classifier::DomainCompatibilityPolicy),
    );
    let node = TypeNode::new("com.example.Ambiguous", TypeKind::Class);
    let graph = InMemoryApplicationGraph::new(vec![]);
    let result = classify_domain(
        &classifier,
        &node,
        &graph,
        &CriteriaProfile::default_profile(),
        &NullDiagnosticReporter,
    );

    assert_eq!(result.status, ClassificationStatus::Conflict);
    assert!(!result.conflicts.is_empty());
    // id tiebreak still determines the winner even under conflict.
    assert_eq!(result.winning_criterion_id.as_deref(), Some("domain.explicit.entity"));
}

#[test]
fn default_criterion_default_confidence_wins_over_lower_priority() {
    let classifier = domain_classifier();
    let node = TypeNode::new("com.example.Flag", TypeKind::Enum);
    let graph = InMemoryApplicationGraph::new(vec![]);
    let result = classify_domain(
        &classifier,
        &node,
        &graph,
        &CriteriaProfile::default_profile(),
        &NullDiagnosticReporter,
    );
    assert_eq!(result.kind_name, "VALUE_OBJECT");
    assert_eq!(result.winning_criterion_id.as_deref(), Some("domain.semantic.domainEnum"));
}
