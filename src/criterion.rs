// Copyright 2025 Cowboy AI, LLC.

//! The `Criterion` contract: a single named, priority-bearing predicate

use crate::confidence::ConfidenceLevel;
use crate::evidence::Evidence;
use crate::graph::{GraphQuery, TypeNode};

/// The outcome of evaluating a single [`Criterion`] against a subject
///
/// Invariant: a `Match` always carries a confidence and a non-empty
/// justification; `NoMatch` carries neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// The criterion does not apply to this subject
    NoMatch,
    /// The criterion matched
    Match {
        /// Self-assessed certainty of the match
        confidence: ConfidenceLevel,
        /// Non-empty human-readable justification
        justification: String,
        /// Supporting evidence, in the order discovered
        evidence: Vec<Evidence>,
    },
}

impl MatchResult {
    /// Construct a `Match` result
    ///
    /// # Panics
    ///
    /// Panics if `justification` is empty — a `Match` without a
    /// justification would violate the `MatchResult` invariant.
    pub fn matched(
        confidence: ConfidenceLevel,
        justification: impl Into<String>,
        evidence: Vec<Evidence>,
    ) -> Self {
        let justification = justification.into();
        assert!(
            !justification.is_empty(),
            "a Match must carry a non-empty justification"
        );
        MatchResult::Match {
            confidence,
            justification,
            evidence,
        }
    }

    /// Whether this is a `Match`
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Match { .. })
    }
}

/// A single named, priority-bearing predicate over a type node
///
/// Generic over a kind enumeration `K` (see [`crate::kind::DomainKind`] /
/// [`crate::kind::PortKind`]) so the same contract serves both target
/// families.
///
/// Implementations must be pure and deterministic: `evaluate` must not
/// mutate any state and must return the same result every time it is
/// called with logically-equal inputs. Implementations must never panic
/// for expected domain cases — return [`MatchResult::NoMatch`] instead;
/// the classifier calling into this trait catches and reports unexpected
/// panics instead of letting them abort a run.
pub trait Criterion<K>: Send + Sync {
    /// Stable identifier, of the form `{target}.{category}.{name}`
    fn id(&self) -> &str;

    /// Default priority; negative means "disabled by default"
    fn priority(&self) -> i32;

    /// The kind this criterion argues for
    fn target_kind(&self) -> K;

    /// Evaluate this criterion against `node` using `graph` for any
    /// relationship lookups it needs
    fn evaluate(&self, node: &TypeNode, graph: &dyn GraphQuery) -> MatchResult;

    /// A human name for this criterion; defaults to the id
    fn name(&self) -> &str {
        self.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "non-empty justification")]
    fn matched_panics_on_empty_justification() {
        let _ = MatchResult::matched(ConfidenceLevel::Low, "", Vec::new());
    }

    #[test]
    fn no_match_is_not_a_match() {
        assert!(!MatchResult::NoMatch.is_match());
    }
}
