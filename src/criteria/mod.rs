// Copyright 2025 Cowboy AI, LLC.

//! The reference criteria shipped with the engine
//!
//! This module bundles the illustrative, not-exhaustive reference criterion
//! set shipped out of the box. A profile (`crate::profile`) may disable any
//! of them; embedders may supply additional criteria of their own by
//! implementing [`crate::criterion::Criterion`] directly and building a
//! custom [`crate::classifier::TargetClassifier`].

pub mod domain;
pub mod port;

use crate::criterion::Criterion;
use crate::kind::{DomainKind, PortKind};

/// All shipped `domain.*` criteria, in a stable (but not semantically
/// significant — the decision policy's total order is independent of
/// input ordering) order
pub fn domain_criteria() -> Vec<Box<dyn Criterion<DomainKind>>> {
    vec![
        Box::new(domain::ExplicitAggregateRoot),
        Box::new(domain::ExplicitEntity),
        Box::new(domain::ExplicitValueObject),
        Box::new(domain::RepositoryDominant),
        Box::new(domain::RecordSingleId),
        Box::new(domain::ImmutableNoId),
        Box::new(domain::HasIdentity),
        Box::new(domain::NamingDomainEvent),
        Box::new(domain::SemanticDomainEnum),
        Box::new(domain::CollectionElementEntity),
        Box::new(domain::EmbeddedValueObject),
    ]
}

/// All shipped `port.*` criteria
pub fn port_criteria() -> Vec<Box<dyn Criterion<PortKind>>> {
    vec![
        Box::new(port::ExplicitRepository),
        Box::new(port::ExplicitUseCase),
        Box::new(port::ExplicitGateway),
        Box::new(port::NamingRepository),
        Box::new(port::NamingUseCase),
        Box::new(port::NamingGateway),
        Box::new(port::SignatureCommandPattern),
        Box::new(port::PackageDriving),
        Box::new(port::PackageDriven),
    ]
}
