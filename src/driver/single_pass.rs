// Copyright 2025 Cowboy AI, LLC.

//! The default, single-pass driver: classify every subject exactly once

use crate::classifier::{classify_domain, classify_port, domain_classifier, port_classifier, TargetClassifier};
use crate::config::ClassificationConfig;
use crate::confidence::ConfidenceLevel;
use crate::executor::{DiagnosticReporter, NullDiagnosticReporter};
use crate::graph::GraphQuery;
use crate::identifiers::NodeId;
use crate::kind::{DomainKind, PortKind, Target, EXPLICIT_CONFIGURATION};
use crate::results::{ClassificationResult, ClassificationResults, ClassificationStatus};

/// Runs the Domain and Port classifiers over every subject in a graph
/// exactly once, honoring exclusions and explicit overrides ahead of any
/// criterion evaluation
///
/// A subject matching both the Domain and Port classifiers keeps only its
/// Domain result — interfaces that also happen to satisfy a Domain
/// criterion (an explicitly annotated `@Entity` interface, say) are rare
/// and the Domain reading is the more specific one; see `DESIGN.md`.
pub struct SinglePassDriver {
    domain: TargetClassifier<DomainKind>,
    port: TargetClassifier<PortKind>,
}

impl Default for SinglePassDriver {
    fn default() -> Self {
        Self {
            domain: domain_classifier(),
            port: port_classifier(),
        }
    }
}

impl SinglePassDriver {
    /// Build a driver from custom classifiers, e.g. to register
    /// additional criteria beyond the shipped reference set
    pub fn new(domain: TargetClassifier<DomainKind>, port: TargetClassifier<PortKind>) -> Self {
        Self { domain, port }
    }

    /// Classify every subject in `graph` under `config`, discarding
    /// non-fatal diagnostic events
    pub fn classify(&self, graph: &dyn GraphQuery, config: &ClassificationConfig) -> ClassificationResults {
        self.classify_with_reporter(graph, config, &NullDiagnosticReporter)
    }

    /// Classify every subject in `graph` under `config`, reporting
    /// non-fatal events to `reporter`
    pub fn classify_with_reporter(
        &self,
        graph: &dyn GraphQuery,
        config: &ClassificationConfig,
        reporter: &dyn DiagnosticReporter,
    ) -> ClassificationResults {
        let mut results = ClassificationResults::new();
        for node in graph.all_types() {
            if config.is_excluded(&node.qualified_name) || node.has_annotation_simple_name("Generated") {
                continue;
            }

            if let Some(kind_name) = config.explicit_classification(&node.qualified_name) {
                results.insert(explicit_override_result(node.id(), kind_name));
                continue;
            }

            let domain_result = classify_domain(&self.domain, node, graph, config.profile(), reporter);
            if domain_result.status != ClassificationStatus::Unclassified {
                results.insert(domain_result);
                continue;
            }

            let port_result = classify_port(&self.port, node, graph, config.profile(), reporter);
            results.insert(if port_result.status != ClassificationStatus::Unclassified {
                port_result
            } else {
                domain_result
            });
        }
        results
    }
}

fn explicit_override_result(subject: NodeId, kind_name: &str) -> ClassificationResult {
    let (target, port_direction) = match (DomainKind::parse(kind_name), PortKind::parse(kind_name)) {
        (Some(_), _) => (Target::Domain, None),
        (None, Some(port_kind)) => (Target::Port, Some(port_kind.direction())),
        (None, None) => (Target::Domain, None),
    };

    ClassificationResult {
        subject,
        target,
        status: ClassificationStatus::Classified,
        kind_name: kind_name.to_string(),
        confidence: Some(ConfidenceLevel::Explicit),
        winning_criterion_id: Some(EXPLICIT_CONFIGURATION.to_string()),
        winning_priority: Some(100),
        justification: Some("explicit configuration override".to_string()),
        evidence: Vec::new(),
        conflicts: Vec::new(),
        port_direction,
    }
}
