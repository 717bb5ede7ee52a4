// Copyright 2025 Cowboy AI, LLC.

//! Reference `domain.*` criteria

use crate::confidence::ConfidenceLevel;
use crate::criterion::{Criterion, MatchResult};
use crate::evidence::Evidence;
use crate::graph::{GraphQuery, TypeKind, TypeNode};
use crate::kind::DomainKind;

fn simple_name(fqn: &str) -> &str {
    fqn.rsplit('.').next().unwrap_or(fqn)
}

fn is_identifier_component_type(fqn: &str) -> bool {
    matches!(
        simple_name(fqn),
        "String" | "UUID" | "int" | "long" | "short" | "byte" | "Integer" | "Long"
    )
}

/// A type that looks like an aggregate root for the purposes of the
/// collection/embedded-value-object criteria below: a class with a field
/// literally named `id` (the same heuristic `domain.structural.hasIdentity`
/// uses).
fn looks_like_aggregate_root(node: &TypeNode) -> bool {
    node.kind == TypeKind::Class && node.has_field_named("id")
}

/// `domain.explicit.aggregateRoot` — explicit `@AggregateRoot` marker
pub struct ExplicitAggregateRoot;
impl Criterion<DomainKind> for ExplicitAggregateRoot {
    fn id(&self) -> &str {
        "domain.explicit.aggregateRoot"
    }
    fn priority(&self) -> i32 {
        100
    }
    fn target_kind(&self) -> DomainKind {
        DomainKind::AggregateRoot
    }
    fn evaluate(&self, node: &TypeNode, _graph: &dyn GraphQuery) -> MatchResult {
        if node.has_annotation_simple_name("AggregateRoot") {
            MatchResult::matched(
                ConfidenceLevel::Explicit,
                "annotated with an AggregateRoot marker",
                vec![Evidence::annotation("@AggregateRoot present")],
            )
        } else {
            MatchResult::NoMatch
        }
    }
}

/// `domain.explicit.entity` — explicit `@Entity` marker
pub struct ExplicitEntity;
impl Criterion<DomainKind> for ExplicitEntity {
    fn id(&self) -> &str {
        "domain.explicit.entity"
    }
    fn priority(&self) -> i32 {
        100
    }
    fn target_kind(&self) -> DomainKind {
        DomainKind::Entity
    }
    fn evaluate(&self, node: &TypeNode, _graph: &dyn GraphQuery) -> MatchResult {
        if node.has_annotation_simple_name("Entity") {
            MatchResult::matched(
                ConfidenceLevel::Explicit,
                "annotated with an Entity marker",
                vec![Evidence::annotation("@Entity present")],
            )
        } else {
            MatchResult::NoMatch
        }
    }
}

/// `domain.explicit.valueObject` — explicit `@ValueObject` marker
pub struct ExplicitValueObject;
impl Criterion<DomainKind> for ExplicitValueObject {
    fn id(&self) -> &str {
        "domain.explicit.valueObject"
    }
    fn priority(&self) -> i32 {
        100
    }
    fn target_kind(&self) -> DomainKind {
        DomainKind::ValueObject
    }
    fn evaluate(&self, node: &TypeNode, _graph: &dyn GraphQuery) -> MatchResult {
        if node.has_annotation_simple_name("ValueObject") {
            MatchResult::matched(
                ConfidenceLevel::Explicit,
                "annotated with a ValueObject marker",
                vec![Evidence::annotation("@ValueObject present")],
            )
        } else {
            MatchResult::NoMatch
        }
    }
}

/// `domain.structural.repositoryDominant` — referenced by a
/// repository-named interface's method signature
///
/// Uses the same naming heuristic the Port classifier's own
/// `port.naming.repository` criterion uses, so it stays pure and
/// independent of whether the port classifier has already run for the
/// referencing type — see `DESIGN.md`.
pub struct RepositoryDominant;
impl Criterion<DomainKind> for RepositoryDominant {
    fn id(&self) -> &str {
        "domain.structural.repositoryDominant"
    }
    fn priority(&self) -> i32 {
        80
    }
    fn target_kind(&self) -> DomainKind {
        DomainKind::AggregateRoot
    }
    fn evaluate(&self, node: &TypeNode, graph: &dyn GraphQuery) -> MatchResult {
        for user in graph.types_using(&node.qualified_name) {
            if user.kind == TypeKind::Interface && user.simple_name.ends_with("Repository") {
                return MatchResult::matched(
                    ConfidenceLevel::High,
                    format!("referenced by repository {}", user.qualified_name),
                    vec![Evidence::relationship(
                        format!("used in the signature of {}", user.qualified_name),
                        user.id(),
                    )],
                );
            }
        }
        MatchResult::NoMatch
    }
}

/// `domain.naming.recordSingleId` — a record-like type named `*Id` with
/// exactly one primitive/string/UUID component
pub struct RecordSingleId;
impl Criterion<DomainKind> for RecordSingleId {
    fn id(&self) -> &str {
        "domain.naming.recordSingleId"
    }
    fn priority(&self) -> i32 {
        80
    }
    fn target_kind(&self) -> DomainKind {
        DomainKind::Identifier
    }
    fn evaluate(&self, node: &TypeNode, _graph: &dyn GraphQuery) -> MatchResult {
        if node.kind == TypeKind::Record
            && node.simple_name.ends_with("Id")
            && node.fields.len() == 1
            && is_identifier_component_type(&node.fields[0].declared_type)
        {
            MatchResult::matched(
                ConfidenceLevel::High,
                format!("record named {} with a single identifier component", node.simple_name),
                vec![Evidence::naming("name ends with Id, single component")],
            )
        } else {
            MatchResult::NoMatch
        }
    }
}

/// `domain.structural.immutableNoId` — a record-like type not matching the
/// single-id-component naming pattern
pub struct ImmutableNoId;
impl Criterion<DomainKind> for ImmutableNoId {
    fn id(&self) -> &str {
        "domain.structural.immutableNoId"
    }
    fn priority(&self) -> i32 {
        60
    }
    fn target_kind(&self) -> DomainKind {
        DomainKind::ValueObject
    }
    fn evaluate(&self, node: &TypeNode, _graph: &dyn GraphQuery) -> MatchResult {
        if node.kind == TypeKind::Record && !node.simple_name.ends_with("Id") {
            MatchResult::matched(
                ConfidenceLevel::Medium,
                format!("immutable record {} with no identifier shape", node.simple_name),
                vec![Evidence::structure("record-like, not identifier-shaped")],
            )
        } else {
            MatchResult::NoMatch
        }
    }
}

/// `domain.structural.hasIdentity` — a class-like type with a field
/// literally named `id`
pub struct HasIdentity;
impl Criterion<DomainKind> for HasIdentity {
    fn id(&self) -> &str {
        "domain.structural.hasIdentity"
    }
    fn priority(&self) -> i32 {
        65
    }
    fn target_kind(&self) -> DomainKind {
        DomainKind::Entity
    }
    fn evaluate(&self, node: &TypeNode, _graph: &dyn GraphQuery) -> MatchResult {
        if node.kind == TypeKind::Class && node.has_field_named("id") {
            MatchResult::matched(
                ConfidenceLevel::Medium,
                format!("class {} declares an id field", node.simple_name),
                vec![Evidence::structure("field named 'id' present")],
            )
        } else {
            MatchResult::NoMatch
        }
    }
}

/// `domain.naming.domainEvent` — immutable type named `*Event`
pub struct NamingDomainEvent;
impl Criterion<DomainKind> for NamingDomainEvent {
    fn id(&self) -> &str {
        "domain.naming.domainEvent"
    }
    fn priority(&self) -> i32 {
        40
    }
    fn target_kind(&self) -> DomainKind {
        DomainKind::DomainEvent
    }
    fn evaluate(&self, node: &TypeNode, _graph: &dyn GraphQuery) -> MatchResult {
        if node.simple_name.ends_with("Event") && node.looks_immutable() {
            MatchResult::matched(
                ConfidenceLevel::Medium,
                format!("immutable type named {}", node.simple_name),
                vec![Evidence::naming("name ends with Event")],
            )
        } else {
            MatchResult::NoMatch
        }
    }
}

/// `domain.semantic.domainEnum` — any enum-kind type
pub struct SemanticDomainEnum;
impl Criterion<DomainKind> for SemanticDomainEnum {
    fn id(&self) -> &str {
        "domain.semantic.domainEnum"
    }
    fn priority(&self) -> i32 {
        20
    }
    fn target_kind(&self) -> DomainKind {
        DomainKind::ValueObject
    }
    fn evaluate(&self, node: &TypeNode, _graph: &dyn GraphQuery) -> MatchResult {
        if node.kind == TypeKind::Enum {
            MatchResult::matched(
                ConfidenceLevel::Medium,
                format!("{} is an enum", node.simple_name),
                vec![Evidence::structure("enum-kind declaration")],
            )
        } else {
            MatchResult::NoMatch
        }
    }
}

/// `domain.structural.collectionElementEntity` — element type of a
/// collection-valued field of an aggregate-root-like type
pub struct CollectionElementEntity;
impl Criterion<DomainKind> for CollectionElementEntity {
    fn id(&self) -> &str {
        "domain.structural.collectionElementEntity"
    }
    fn priority(&self) -> i32 {
        65
    }
    fn target_kind(&self) -> DomainKind {
        DomainKind::Entity
    }
    fn evaluate(&self, node: &TypeNode, graph: &dyn GraphQuery) -> MatchResult {
        for candidate in graph.all_types() {
            if !looks_like_aggregate_root(candidate) {
                continue;
            }
            for field in &candidate.fields {
                if field.is_collection_valued() && field.element_type() == Some(node.qualified_name.as_str()) {
                    return MatchResult::matched(
                        ConfidenceLevel::High,
                        format!(
                            "element type of collection field {}.{}",
                            candidate.simple_name, field.name
                        ),
                        vec![Evidence::relationship(
                            format!("collection element of {}", candidate.qualified_name),
                            candidate.id(),
                        )],
                    );
                }
            }
        }
        MatchResult::NoMatch
    }
}

/// `domain.structural.embeddedValueObject` — non-collection field of an
/// aggregate-root-like type, and itself immutable
pub struct EmbeddedValueObject;
impl Criterion<DomainKind> for EmbeddedValueObject {
    fn id(&self) -> &str {
        "domain.structural.embeddedValueObject"
    }
    fn priority(&self) -> i32 {
        65
    }
    fn target_kind(&self) -> DomainKind {
        DomainKind::ValueObject
    }
    fn evaluate(&self, node: &TypeNode, graph: &dyn GraphQuery) -> MatchResult {
        if !node.looks_immutable() {
            return MatchResult::NoMatch;
        }
        for candidate in graph.all_types() {
            if !looks_like_aggregate_root(candidate) {
                continue;
            }
            for field in &candidate.fields {
                if !field.is_collection_valued() && field.declared_type == node.qualified_name {
                    return MatchResult::matched(
                        ConfidenceLevel::Medium,
                        format!(
                            "embedded as field {}.{}",
                            candidate.simple_name, field.name
                        ),
                        vec![Evidence::relationship(
                            format!("embedded value object of {}", candidate.qualified_name),
                            candidate.id(),
                        )],
                    );
                }
            }
        }
        MatchResult::NoMatch
    }
}
