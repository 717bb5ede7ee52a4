// Copyright 2025 Cowboy AI, LLC.

//! Kind enumerations for the Domain and Port target families
//!
//! Kind names are also carried as opaque strings in the result record,
//! but the compatibility policy and the criteria themselves need a typed
//! enumeration to avoid stringly-typed bugs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A classification target: which family of kinds a classifier argues over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// Domain-model kinds (Aggregate Root, Entity, Value Object, …)
    Domain,
    /// Port kinds (Repository, Use Case, Gateway, Command)
    Port,
}

/// Domain-model kind a type node can be classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DomainKind {
    /// The single entity that externally represents a cluster of related objects
    AggregateRoot,
    /// An object with continuous identity distinct from its attribute values
    Entity,
    /// An immutable object whose identity is defined by its attributes
    ValueObject,
    /// A value object dedicated to naming an entity
    Identifier,
    /// Something that happened in the domain
    DomainEvent,
    /// A stateless operation that doesn't naturally belong to an entity or value object
    DomainService,
}

impl DomainKind {
    /// The sentinel name used in `ClassificationResult::kind_name`
    pub fn name(self) -> &'static str {
        match self {
            DomainKind::AggregateRoot => "AGGREGATE_ROOT",
            DomainKind::Entity => "ENTITY",
            DomainKind::ValueObject => "VALUE_OBJECT",
            DomainKind::Identifier => "IDENTIFIER",
            DomainKind::DomainEvent => "DOMAIN_EVENT",
            DomainKind::DomainService => "DOMAIN_SERVICE",
        }
    }

    /// Parse a kind name as produced by [`DomainKind::name`]
    pub fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "AGGREGATE_ROOT" => DomainKind::AggregateRoot,
            "ENTITY" => DomainKind::Entity,
            "VALUE_OBJECT" => DomainKind::ValueObject,
            "IDENTIFIER" => DomainKind::Identifier,
            "DOMAIN_EVENT" => DomainKind::DomainEvent,
            "DOMAIN_SERVICE" => DomainKind::DomainService,
            _ => return None,
        })
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Port kind a type node (always interface-kind) can be classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortKind {
    /// A driven port letting the domain retrieve/persist aggregates
    Repository,
    /// A primary (driving) port exposing an application-level operation
    UseCase,
    /// A driven port abstracting an external system
    Gateway,
    /// A primary port shaped as a single command-handling operation
    Command,
}

impl PortKind {
    /// The sentinel name used in `ClassificationResult::kind_name`
    pub fn name(self) -> &'static str {
        match self {
            PortKind::Repository => "REPOSITORY",
            PortKind::UseCase => "USE_CASE",
            PortKind::Gateway => "GATEWAY",
            PortKind::Command => "COMMAND",
        }
    }

    /// Parse a kind name as produced by [`PortKind::name`]
    pub fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "REPOSITORY" => PortKind::Repository,
            "USE_CASE" => PortKind::UseCase,
            "GATEWAY" => PortKind::Gateway,
            "COMMAND" => PortKind::Command,
            _ => return None,
        })
    }

    /// The direction this port kind implies
    pub fn direction(self) -> PortDirection {
        match self {
            PortKind::UseCase | PortKind::Command => PortDirection::Driving,
            PortKind::Repository | PortKind::Gateway => PortDirection::Driven,
        }
    }
}

impl fmt::Display for PortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Whether a port is driving (primary, inbound) or driven (secondary, outbound)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortDirection {
    /// Primary port: drives the application from the outside
    Driving,
    /// Secondary port: the application drives an external system through it
    Driven,
}

/// Sentinel kind-name for a subject with no matching criterion
pub const UNCLASSIFIED: &str = "UNCLASSIFIED";

/// Sentinel criterion id used for explicit configuration overrides
pub const EXPLICIT_CONFIGURATION: &str = "ExplicitConfiguration";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_kind_name_roundtrips() {
        for kind in [
            DomainKind::AggregateRoot,
            DomainKind::Entity,
            DomainKind::ValueObject,
            DomainKind::Identifier,
            DomainKind::DomainEvent,
            DomainKind::DomainService,
        ] {
            assert_eq!(DomainKind::parse(kind.name()), Some(kind));
        }
    }

    #[test]
    fn port_kind_direction_matches_spec() {
        assert_eq!(PortKind::UseCase.direction(), PortDirection::Driving);
        assert_eq!(PortKind::Command.direction(), PortDirection::Driving);
        assert_eq!(PortKind::Repository.direction(), PortDirection::Driven);
        assert_eq!(PortKind::Gateway.direction(), PortDirection::Driven);
    }
}
