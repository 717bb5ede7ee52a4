// Copyright 2025 Cowboy AI, LLC.

//! Reference `port.*` criteria

use crate::confidence::ConfidenceLevel;
use crate::criterion::{Criterion, MatchResult};
use crate::evidence::Evidence;
use crate::graph::{GraphQuery, TypeNode};
use crate::kind::PortKind;

const COMMAND_VERBS: &[&str] = &[
    "create", "process", "execute", "handle", "submit", "issue", "cancel", "apply",
];

fn is_identifier_like(type_name: &str) -> bool {
    let simple = type_name.rsplit('.').next().unwrap_or(type_name);
    simple == "String" || simple == "UUID" || simple.ends_with("Id")
}

fn is_void_or_identifier_like(return_type: &Option<String>) -> bool {
    match return_type {
        None => true,
        Some(t) => is_identifier_like(t),
    }
}

/// `port.explicit.repository` — explicit `@Repository` marker
pub struct ExplicitRepository;
impl Criterion<PortKind> for ExplicitRepository {
    fn id(&self) -> &str {
        "port.explicit.repository"
    }
    fn priority(&self) -> i32 {
        100
    }
    fn target_kind(&self) -> PortKind {
        PortKind::Repository
    }
    fn evaluate(&self, node: &TypeNode, _graph: &dyn GraphQuery) -> MatchResult {
        if node.has_annotation_simple_name("Repository") {
            MatchResult::matched(
                ConfidenceLevel::Explicit,
                "annotated with a Repository marker",
                vec![Evidence::annotation("@Repository present")],
            )
        } else {
            MatchResult::NoMatch
        }
    }
}

/// `port.explicit.useCase` — explicit `@UseCase` marker
pub struct ExplicitUseCase;
impl Criterion<PortKind> for ExplicitUseCase {
    fn id(&self) -> &str {
        "port.explicit.useCase"
    }
    fn priority(&self) -> i32 {
        100
    }
    fn target_kind(&self) -> PortKind {
        PortKind::UseCase
    }
    fn evaluate(&self, node: &TypeNode, _graph: &dyn GraphQuery) -> MatchResult {
        if node.has_annotation_simple_name("UseCase") {
            MatchResult::matched(
                ConfidenceLevel::Explicit,
                "annotated with a UseCase marker",
                vec![Evidence::annotation("@UseCase present")],
            )
        } else {
            MatchResult::NoMatch
        }
    }
}

/// `port.explicit.gateway` — explicit `@Gateway` marker
pub struct ExplicitGateway;
impl Criterion<PortKind> for ExplicitGateway {
    fn id(&self) -> &str {
        "port.explicit.gateway"
    }
    fn priority(&self) -> i32 {
        100
    }
    fn target_kind(&self) -> PortKind {
        PortKind::Gateway
    }
    fn evaluate(&self, node: &TypeNode, _graph: &dyn GraphQuery) -> MatchResult {
        if node.has_annotation_simple_name("Gateway") {
            MatchResult::matched(
                ConfidenceLevel::Explicit,
                "annotated with a Gateway marker",
                vec![Evidence::annotation("@Gateway present")],
            )
        } else {
            MatchResult::NoMatch
        }
    }
}

/// `port.naming.repository` — interface named `*Repository`
pub struct NamingRepository;
impl Criterion<PortKind> for NamingRepository {
    fn id(&self) -> &str {
        "port.naming.repository"
    }
    fn priority(&self) -> i32 {
        50
    }
    fn target_kind(&self) -> PortKind {
        PortKind::Repository
    }
    fn evaluate(&self, node: &TypeNode, _graph: &dyn GraphQuery) -> MatchResult {
        if node.simple_name.ends_with("Repository") {
            MatchResult::matched(
                ConfidenceLevel::High,
                format!("interface named {}", node.simple_name),
                vec![Evidence::naming("name ends with Repository")],
            )
        } else {
            MatchResult::NoMatch
        }
    }
}

/// `port.naming.useCase` — interface named `*UseCase`
pub struct NamingUseCase;
impl Criterion<PortKind> for NamingUseCase {
    fn id(&self) -> &str {
        "port.naming.useCase"
    }
    fn priority(&self) -> i32 {
        50
    }
    fn target_kind(&self) -> PortKind {
        PortKind::UseCase
    }
    fn evaluate(&self, node: &TypeNode, _graph: &dyn GraphQuery) -> MatchResult {
        if node.simple_name.ends_with("UseCase") {
            MatchResult::matched(
                ConfidenceLevel::High,
                format!("interface named {}", node.simple_name),
                vec![Evidence::naming("name ends with UseCase")],
            )
        } else {
            MatchResult::NoMatch
        }
    }
}

/// `port.naming.gateway` — interface named `*Gateway`
pub struct NamingGateway;
impl Criterion<PortKind> for NamingGateway {
    fn id(&self) -> &str {
        "port.naming.gateway"
    }
    fn priority(&self) -> i32 {
        50
    }
    fn target_kind(&self) -> PortKind {
        PortKind::Gateway
    }
    fn evaluate(&self, node: &TypeNode, _graph: &dyn GraphQuery) -> MatchResult {
        if node.simple_name.ends_with("Gateway") {
            MatchResult::matched(
                ConfidenceLevel::High,
                format!("interface named {}", node.simple_name),
                vec![Evidence::naming("name ends with Gateway")],
            )
        } else {
            MatchResult::NoMatch
        }
    }
}

/// `port.signature.commandPattern` — a single-method interface whose
/// method is named after a command verb and returns void or an
/// identifier-like type
pub struct SignatureCommandPattern;
impl Criterion<PortKind> for SignatureCommandPattern {
    fn id(&self) -> &str {
        "port.signature.commandPattern"
    }
    fn priority(&self) -> i32 {
        75
    }
    fn target_kind(&self) -> PortKind {
        PortKind::Command
    }
    fn evaluate(&self, node: &TypeNode, _graph: &dyn GraphQuery) -> MatchResult {
        let [method] = node.methods.as_slice() else {
            return MatchResult::NoMatch;
        };
        let lower = method.name.to_ascii_lowercase();
        let matches_verb = COMMAND_VERBS.iter().any(|verb| lower.starts_with(verb));
        if matches_verb && is_void_or_identifier_like(&method.return_type) {
            MatchResult::matched(
                ConfidenceLevel::High,
                format!("single command-shaped method {}", method.name),
                vec![Evidence::structure("one method, command-verb name, void/identifier return")],
            )
        } else {
            MatchResult::NoMatch
        }
    }
}

/// `port.package.driving` — interface declared in a package segment named
/// `api`, `in`, or `driving`
pub struct PackageDriving;
impl Criterion<PortKind> for PackageDriving {
    fn id(&self) -> &str {
        "port.package.driving"
    }
    fn priority(&self) -> i32 {
        60
    }
    fn target_kind(&self) -> PortKind {
        PortKind::UseCase
    }
    fn evaluate(&self, node: &TypeNode, _graph: &dyn GraphQuery) -> MatchResult {
        if has_package_segment(&node.package_name, &["api", "in", "driving"]) {
            MatchResult::matched(
                ConfidenceLevel::Medium,
                format!("package {} names a driving segment", node.package_name),
                vec![Evidence::package(format!("package segment in {}", node.package_name))],
            )
        } else {
            MatchResult::NoMatch
        }
    }
}

/// `port.package.driven` — interface declared in a package segment named
/// `spi`, `out`, or `driven`
pub struct PackageDriven;
impl Criterion<PortKind> for PackageDriven {
    fn id(&self) -> &str {
        "port.package.driven"
    }
    fn priority(&self) -> i32 {
        60
    }
    fn target_kind(&self) -> PortKind {
        PortKind::Gateway
    }
    fn evaluate(&self, node: &TypeNode, _graph: &dyn GraphQuery) -> MatchResult {
        if has_package_segment(&node.package_name, &["spi", "out", "driven"]) {
            MatchResult::matched(
                ConfidenceLevel::Medium,
                format!("package {} names a driven segment", node.package_name),
                vec![Evidence::package(format!("package segment in {}", node.package_name))],
            )
        } else {
            MatchResult::NoMatch
        }
    }
}

fn has_package_segment(package_name: &str, segments: &[&str]) -> bool {
    package_name.split('.').any(|segment| segments.contains(&segment))
}
