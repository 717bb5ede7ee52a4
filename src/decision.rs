// Copyright 2025 Cowboy AI, LLC.

//! The decision policy: evaluates all criteria for one subject and selects
//! the winner
//!
//! This is the determinism contract of the whole engine — the ordering
//! below must not be reordered or approximated.

use std::collections::BTreeSet;

use crate::compatibility::CompatibilityPolicy;
use crate::confidence::ConfidenceLevel;
use crate::conflict::Conflict;
use crate::evidence::Evidence;

/// A single criterion's contribution once evaluated: its id, the kind it
/// argued for, its effective priority, and its match details
#[derive(Debug, Clone)]
pub struct CandidateMatch<K> {
    /// The criterion's stable id
    pub criterion_id: String,
    /// The kind this candidate argues for
    pub kind: K,
    /// The criterion's effective priority (post-profile)
    pub effective_priority: i32,
    /// Confidence reported by the criterion
    pub confidence: ConfidenceLevel,
    /// Justification reported by the criterion
    pub justification: String,
    /// Evidence reported by the criterion
    pub evidence: Vec<Evidence>,
}

/// The outcome of running the decision policy over a set of candidates
#[derive(Debug, Clone)]
pub enum Decision<K> {
    /// No criterion matched (or every match was discarded as disabled)
    Unclassified,
    /// A winner was selected; `conflicting` status is carried separately
    /// in `is_conflict`
    Decided {
        /// The winning candidate
        winner: CandidateMatch<K>,
        /// Merged evidence: winner's evidence first, then compatible
        /// matches' evidence, de-duplicated by (category, description)
        evidence: Vec<Evidence>,
        /// Incompatible losing matches, reported as conflicts
        conflicts: Vec<Conflict>,
        /// Whether an incompatible match tied the winner's priority
        is_conflict: bool,
    },
}

/// Run the decision policy over already-evaluated candidates
///
/// `candidates` must contain only effectively-enabled matches (callers are
/// expected to have already discarded matches from criteria whose
/// effective priority is negative — see [`crate::classifier`]).
pub fn decide<K>(candidates: Vec<CandidateMatch<K>>, compatibility: &dyn CompatibilityPolicy<K>) -> Decision<K>
where
    K: Copy + PartialEq + std::fmt::Display,
{
    if candidates.is_empty() {
        return Decision::Unclassified;
    }

    let mut ordered = candidates;
    // Total order (descending): priority, then confidence weight, then
    // ascending criterion id. Stable sort so ties beyond the documented
    // keys (impossible given the id tiebreak, but kept for clarity) don't
    // depend on input order.
    ordered.sort_by(|a, b| {
        b.effective_priority
            .cmp(&a.effective_priority)
            .then_with(|| b.confidence.weight().cmp(&a.confidence.weight()))
            .then_with(|| a.criterion_id.cmp(&b.criterion_id))
    });

    let mut remaining = ordered.into_iter();
    let winner = remaining.next().expect("checked non-empty above");
    let rest: Vec<_> = remaining.collect();

    let mut evidence = winner.evidence.clone();
    let mut seen: BTreeSet<(crate::evidence::EvidenceCategory, String)> = evidence
        .iter()
        .map(|e| (e.category, e.description.clone()))
        .collect();

    let mut conflicts = Vec::new();
    let mut tie_incompatible = false;

    for candidate in rest {
        if compatibility.compatible(candidate.kind, winner.kind) {
            for e in candidate.evidence {
                let key = (e.category, e.description.clone());
                if seen.insert(key) {
                    evidence.push(e);
                }
            }
        } else {
            if candidate.effective_priority == winner.effective_priority {
                tie_incompatible = true;
            }
            conflicts.push(Conflict {
                competing_kind: candidate.kind.to_string(),
                competing_criterion_id: candidate.criterion_id,
                competing_confidence: candidate.confidence,
                competing_priority: candidate.effective_priority,
                rationale: format!(
                    "incompatible with winning kind {}",
                    winner.kind
                ),
            });
        }
    }

    Decision::Decided {
        winner,
        evidence,
        conflicts,
        is_conflict: tie_incompatible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compatibility::DomainCompatibilityPolicy;
    use crate::kind::DomainKind;

    fn candidate(id: &str, kind: DomainKind, priority: i32, confidence: ConfidenceLevel) -> CandidateMatch<DomainKind> {
        CandidateMatch {
            criterion_id: id.to_string(),
            kind,
            effective_priority: priority,
            confidence,
            justification: format!("{id} matched"),
            evidence: vec![Evidence::naming(format!("{id} evidence"))],
        }
    }

    #[test]
    fn empty_candidates_are_unclassified() {
        let outcome = decide::<DomainKind>(vec![], &DomainCompatibilityPolicy);
        assert!(matches!(outcome, Decision::Unclassified));
    }

    #[test]
    fn priority_dominates_confidence() {
        let high_prio_low_conf = candidate("z.low", DomainKind::ValueObject, 90, ConfidenceLevel::Low);
        let low_prio_high_conf = candidate("a.high", DomainKind::Entity, 50, ConfidenceLevel::Explicit);
        let outcome = decide(vec![low_prio_high_conf, high_prio_low_conf], &DomainCompatibilityPolicy);
        match outcome {
            Decision::Decided { winner, .. } => assert_eq!(winner.criterion_id, "z.low"),
            _ => panic!("expected a decision"),
        }
    }

    #[test]
    fn confidence_breaks_priority_ties() {
        let a = candidate("a", DomainKind::Entity, 80, ConfidenceLevel::Medium);
        let b = candidate("b", DomainKind::Entity, 80, ConfidenceLevel::High);
        let outcome = decide(vec![a, b], &DomainCompatibilityPolicy);
        match outcome {
            Decision::Decided { winner, .. } => assert_eq!(winner.criterion_id, "b"),
            _ => panic!("expected a decision"),
        }
    }

    #[test]
    fn id_breaks_remaining_ties() {
        let a = candidate("a-criteria", DomainKind::Entity, 80, ConfidenceLevel::High);
        let z = candidate("z-criteria", DomainKind::Entity, 80, ConfidenceLevel::High);
        let outcome = decide(vec![z, a], &DomainCompatibilityPolicy);
        match outcome {
            Decision::Decided {
                winner,
                conflicts,
                is_conflict,
                ..
            } => {
                assert_eq!(winner.criterion_id, "a-criteria");
                assert!(conflicts.is_empty());
                assert!(!is_conflict);
            }
            _ => panic!("expected a decision"),
        }
    }

    #[test]
    fn compatible_matches_are_absorbed_not_conflicted() {
        let root = candidate("domain.structural.repositoryDominant", DomainKind::AggregateRoot, 80, ConfidenceLevel::High);
        let entity = candidate("domain.structural.hasIdentity", DomainKind::Entity, 60, ConfidenceLevel::Medium);
        let outcome = decide(vec![root, entity], &DomainCompatibilityPolicy);
        match outcome {
            Decision::Decided { conflicts, evidence, .. } => {
                assert!(conflicts.is_empty());
                assert_eq!(evidence.len(), 2);
            }
            _ => panic!("expected a decision"),
        }
    }

    #[test]
    fn incompatible_equal_priority_is_a_conflict() {
        let entity = candidate("domain.explicit.entity", DomainKind::Entity, 100, ConfidenceLevel::Explicit);
        let vo = candidate("domain.explicit.valueObject", DomainKind::ValueObject, 100, ConfidenceLevel::Explicit);
        let outcome = decide(vec![vo, entity], &DomainCompatibilityPolicy);
        match outcome {
            Decision::Decided { is_conflict, conflicts, .. } => {
                assert!(is_conflict);
                assert_eq!(conflicts.len(), 1);
            }
            _ => panic!("expected a decision"),
        }
    }

    #[test]
    fn incompatible_lower_priority_is_not_a_conflict() {
        let vo = candidate("domain.explicit.valueObject", DomainKind::ValueObject, 100, ConfidenceLevel::Explicit);
        let entity = candidate("domain.structural.hasIdentity", DomainKind::Entity, 60, ConfidenceLevel::Medium);
        let outcome = decide(vec![vo, entity], &DomainCompatibilityPolicy);
        match outcome {
            Decision::Decided { is_conflict, conflicts, .. } => {
                assert!(!is_conflict);
                assert_eq!(conflicts.len(), 1);
            }
            _ => panic!("expected a decision"),
        }
    }

    #[test]
    fn winner_is_independent_of_input_order() {
        let a = candidate("domain.naming.recordSingleId", DomainKind::Identifier, 80, ConfidenceLevel::High);
        let b = candidate("domain.structural.immutableNoId", DomainKind::ValueObject, 60, ConfidenceLevel::Medium);
        let c = candidate("domain.semantic.domainEnum", DomainKind::ValueObject, 20, ConfidenceLevel::Medium);

        let forward = decide(vec![a.clone_for_test(), b.clone_for_test(), c.clone_for_test()], &DomainCompatibilityPolicy);
        let shuffled = decide(vec![c, a, b], &DomainCompatibilityPolicy);

        let winner_id = |d: &Decision<DomainKind>| match d {
            Decision::Decided { winner, .. } => winner.criterion_id.clone(),
            Decision::Unclassified => panic!("expected a decision"),
        };
        assert_eq!(winner_id(&forward), winner_id(&shuffled));
    }

    impl CandidateMatch<DomainKind> {
        fn clone_for_test(&self) -> Self {
            CandidateMatch {
                criterion_id: self.criterion_id.clone(),
                kind: self.kind,
                effective_priority: self.effective_priority,
                confidence: self.confidence,
                justification: self.justification.clone(),
                evidence: self.evidence.clone(),
            }
        }
    }
}
