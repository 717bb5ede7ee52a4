// Copyright 2025 Cowboy AI, LLC.

//! A deterministic, priority-weighted engine that classifies source-level
//! type declarations into DDD domain-model kinds (Aggregate Root, Entity,
//! Value Object, Identifier, Domain Event, Domain Service) and hexagonal
//! port kinds (Repository, Use Case, Gateway, Command).
//!
//! The engine itself is source-language agnostic: callers provide a
//! read-only [`graph::GraphQuery`] view over whatever they have already
//! parsed, and the engine runs a fixed set of [`criterion::Criterion`]
//! predicates per subject, resolving any disagreement through a total
//! order over priority, confidence, and criterion id (see [`decision`]).
//!
//! Two [`driver`]s orchestrate the classifiers across a whole graph: a
//! [`driver::SinglePassDriver`] for pure, immediate classification of
//! declarations, and a [`driver::ProgressiveDriver`] that adds a bounded,
//! best-effort secondary pass for analyses heavier than declaration
//! inspection.

pub mod classifier;
pub mod compatibility;
pub mod confidence;
pub mod config;
pub mod conflict;
pub mod criteria;
pub mod criterion;
pub mod decision;
pub mod driver;
pub mod errors;
pub mod evidence;
pub mod executor;
pub mod glob;
pub mod graph;
pub mod identifiers;
pub mod kind;
pub mod profile;
pub mod results;

pub use classifier::{classify_domain, classify_port, domain_classifier, port_classifier, TargetClassifier};
pub use compatibility::{CompatibilityPolicy, DomainCompatibilityPolicy, PortCompatibilityPolicy};
pub use confidence::ConfidenceLevel;
pub use config::{ClassificationConfig, ClassificationConfigBuilder};
pub use conflict::Conflict;
pub use criterion::{Criterion, MatchResult};
pub use decision::{decide, CandidateMatch, Decision};
pub use driver::{PassReport, ProgressiveDriver, SinglePassDriver};
pub use errors::{ClassificationDiagnostic, ConfigError, ConfigResult};
pub use evidence::{Evidence, EvidenceCategory};
pub use executor::{
    DiagnosticReporter, DiagnosticSeverity, NoopSecondaryWorker, NullDiagnosticReporter,
    RecordedDiagnostic, RecordingDiagnosticReporter, SecondaryClassifier, SecondaryContext,
    SecondaryExecutor, SecondaryOutcome, TracingDiagnosticReporter,
};
pub use graph::{FieldDescriptor, GraphQuery, InMemoryApplicationGraph, MethodDescriptor, Modifier, TypeKind, TypeNode};
pub use identifiers::{NodeId, NodeKind};
pub use kind::{DomainKind, PortDirection, PortKind, Target, EXPLICIT_CONFIGURATION, UNCLASSIFIED};
pub use profile::CriteriaProfile;
pub use results::{ClassificationResult, ClassificationResults, ClassificationStatus};
