// Copyright 2025 Cowboy AI, LLC.

//! Target classifiers: pre-configured criterion sets + compatibility
//! policy + decision policy

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::compatibility::{CompatibilityPolicy, DomainCompatibilityPolicy, PortCompatibilityPolicy};
use crate::criteria::{domain_criteria, port_criteria};
use crate::criterion::{Criterion, MatchResult};
use crate::decision::{decide, CandidateMatch, Decision};
use crate::errors::ClassificationDiagnostic;
use crate::executor::DiagnosticReporter;
use crate::graph::{GraphQuery, TypeKind, TypeNode};
use crate::kind::{DomainKind, PortDirection, PortKind, Target};
use crate::profile::CriteriaProfile;
use crate::results::{ClassificationResult, ClassificationStatus};

/// A pre-configured criterion set, compatibility policy, and decision
/// policy for one target family
pub struct TargetClassifier<K> {
    target: Target,
    criteria: Vec<Box<dyn Criterion<K>>>,
    compatibility: Box<dyn CompatibilityPolicy<K>>,
}

impl<K> TargetClassifier<K>
where
    K: Copy + PartialEq + std::fmt::Display,
{
    /// Construct a target classifier from its criterion set and
    /// compatibility policy
    pub fn new(
        target: Target,
        criteria: Vec<Box<dyn Criterion<K>>>,
        compatibility: Box<dyn CompatibilityPolicy<K>>,
    ) -> Self {
        Self {
            target,
            criteria,
            compatibility,
        }
    }

    /// The target family this classifier argues for
    pub fn target(&self) -> Target {
        self.target
    }

    /// The criteria this classifier evaluates
    pub fn criteria(&self) -> &[Box<dyn Criterion<K>>] {
        &self.criteria
    }

    /// Evaluate every criterion for `node` and run the decision policy,
    /// evaluating every criterion, then running the decision policy
    pub fn decide_for(
        &self,
        node: &TypeNode,
        graph: &dyn GraphQuery,
        profile: &CriteriaProfile,
        reporter: &dyn DiagnosticReporter,
    ) -> Decision<K> {
        let mut candidates = Vec::new();
        for criterion in &self.criteria {
            let effective_priority = profile.effective_priority(criterion.id(), criterion.priority());
            let evaluated = catch_unwind(AssertUnwindSafe(|| criterion.evaluate(node, graph)));
            match evaluated {
                Ok(MatchResult::Match {
                    confidence,
                    justification,
                    evidence,
                }) => {
                    // A disabled criterion (negative effective priority) is
                    // still evaluated, but its match is discarded entirely:
                    // no evidence, no conflict.
                    if effective_priority >= 0 {
                        candidates.push(CandidateMatch {
                            criterion_id: criterion.id().to_string(),
                            kind: criterion.target_kind(),
                            effective_priority,
                            confidence,
                            justification,
                            evidence,
                        });
                    }
                }
                Ok(MatchResult::NoMatch) => {}
                Err(panic) => {
                    reporter.error(
                        &ClassificationDiagnostic::CriterionEvaluationFailed {
                            criterion_id: criterion.id().to_string(),
                            subject: node.qualified_name.clone(),
                            message: panic_message(&panic),
                        }
                        .to_string(),
                        None,
                    );
                }
            }
        }
        decide(candidates, self.compatibility.as_ref())
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "criterion panicked with a non-string payload".to_string()
    }
}

/// The built-in Domain classifier: all `domain.*` criteria, applied to
/// every type node
pub fn domain_classifier() -> TargetClassifier<DomainKind> {
    TargetClassifier::new(
        Target::Domain,
        domain_criteria(),
        Box::new(DomainCompatibilityPolicy),
    )
}

/// The built-in Port classifier: all `port.*` criteria, applied only to
/// interface-kind types
pub fn port_classifier() -> TargetClassifier<PortKind> {
    TargetClassifier::new(Target::Port, port_criteria(), Box::new(PortCompatibilityPolicy))
}

/// Run the Domain classifier for `node` and produce a [`ClassificationResult`]
pub fn classify_domain(
    classifier: &TargetClassifier<DomainKind>,
    node: &TypeNode,
    graph: &dyn GraphQuery,
    profile: &CriteriaProfile,
    reporter: &dyn DiagnosticReporter,
) -> ClassificationResult {
    let subject = node.id();
    match classifier.decide_for(node, graph, profile, reporter) {
        Decision::Unclassified => ClassificationResult::unclassified(subject, Target::Domain),
        Decision::Decided {
            winner,
            evidence,
            conflicts,
            is_conflict,
        } => ClassificationResult {
            subject,
            target: Target::Domain,
            status: if is_conflict {
                ClassificationStatus::Conflict
            } else {
                ClassificationStatus::Classified
            },
            kind_name: winner.kind.to_string(),
            confidence: Some(winner.confidence),
            winning_criterion_id: Some(winner.criterion_id),
            winning_priority: Some(winner.effective_priority),
            justification: Some(winner.justification),
            evidence,
            conflicts,
            port_direction: None,
        },
    }
}

/// Run the Port classifier for `node` and produce a [`ClassificationResult`]
///
/// Returns an `Unclassified` result without evaluating any criterion when
/// `node` is not interface-kind.
pub fn classify_port(
    classifier: &TargetClassifier<PortKind>,
    node: &TypeNode,
    graph: &dyn GraphQuery,
    profile: &CriteriaProfile,
    reporter: &dyn DiagnosticReporter,
) -> ClassificationResult {
    let subject = node.id();
    if node.kind != TypeKind::Interface {
        return ClassificationResult::unclassified(subject, Target::Port);
    }
    match classifier.decide_for(node, graph, profile, reporter) {
        Decision::Unclassified => ClassificationResult::unclassified(subject, Target::Port),
        Decision::Decided {
            winner,
            evidence,
            conflicts,
            is_conflict,
        } => {
            let direction = winner.kind.direction();
            ClassificationResult {
                subject,
                target: Target::Port,
                status: if is_conflict {
                    ClassificationStatus::Conflict
                } else {
                    ClassificationStatus::Classified
                },
                kind_name: winner.kind.to_string(),
                confidence: Some(winner.confidence),
                winning_criterion_id: Some(winner.criterion_id),
                winning_priority: Some(winner.effective_priority),
                justification: Some(winner.justification),
                evidence,
                conflicts,
                port_direction: Some(direction),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::NullDiagnosticReporter;
    use crate::graph::InMemoryApplicationGraph;

    #[test]
    fn port_classifier_skips_non_interface_types_without_evaluating() {
        let node = TypeNode::new("com.example.Order", TypeKind::Class);
        let graph = InMemoryApplicationGraph::new(vec![]);
        let classifier = port_classifier();
        let reporter = NullDiagnosticReporter;
        let result = classify_port(&classifier, &node, &graph, &CriteriaProfile::default_profile(), &reporter);
        assert_eq!(result.status, ClassificationStatus::Unclassified);
        assert_eq!(result.kind_name, "UNCLASSIFIED");
    }

    #[test]
    fn domain_classifier_returns_unclassified_when_nothing_matches() {
        let node = TypeNode::new("com.example.Plain", TypeKind::Class);
        let graph = InMemoryApplicationGraph::new(vec![]);
        let classifier = domain_classifier();
        let reporter = NullDiagnosticReporter;
        let result = classify_domain(&classifier, &node, &graph, &CriteriaProfile::default_profile(), &reporter);
        assert_eq!(result.status, ClassificationStatus::Unclassified);
    }

    #[test]
    fn port_direction_is_driving_for_use_case_winners() {
        use crate::graph::MethodDescriptor;
        // Two methods so `port.signature.commandPattern` (which only matches
        // a single-method interface) stays silent and the naming heuristic
        // is the one actually exercised.
        let node = TypeNode::new("com.example.PlaceOrderUseCase", TypeKind::Interface).with_methods([
            MethodDescriptor::new("execute", None),
            MethodDescriptor::new("describe", Some("java.lang.String".to_string())),
        ]);
        let graph = InMemoryApplicationGraph::new(vec![]);
        let classifier = port_classifier();
        let reporter = NullDiagnosticReporter;
        let result = classify_port(&classifier, &node, &graph, &CriteriaProfile::default_profile(), &reporter);
        assert_eq!(result.kind_name, "USE_CASE");
        assert_eq!(
            result.winning_criterion_id.as_deref(),
            Some("port.naming.useCase")
        );
        assert_eq!(result.port_direction, Some(PortDirection::Driving));
    }

    #[test]
    fn port_direction_is_driving_for_command_winners() {
        use crate::graph::MethodDescriptor;
        let node = TypeNode::new("com.example.CancelOrder", TypeKind::Interface)
            .with_methods([MethodDescriptor::new("cancel", None)]);
        let graph = InMemoryApplicationGraph::new(vec![]);
        let classifier = port_classifier();
        let reporter = NullDiagnosticReporter;
        let result = classify_port(&classifier, &node, &graph, &CriteriaProfile::default_profile(), &reporter);
        assert_eq!(result.kind_name, "COMMAND");
        assert_eq!(result.port_direction, Some(PortDirection::Driving));
    }
}
