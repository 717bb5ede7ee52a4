// Copyright 2025 Cowboy AI, LLC.

use hexaglue_classifier::{
    decide, CandidateMatch, CompatibilityPolicy, ConfidenceLevel, Decision, DomainCompatibilityPolicy,
    DomainKind, Evidence,
};
use proptest::prelude::*;

fn domain_kind_strategy() -> impl Strategy<Value = DomainKind> {
    prop_oneof![
        Just(DomainKind::AggregateRoot),
        Just(DomainKind::Entity),
        Just(DomainKind::ValueObject),
        Just(DomainKind::Identifier),
        Just(DomainKind::DomainEvent),
        Just(DomainKind::DomainService),
    ]
}

fn confidence_strategy() -> impl Strategy<Value = ConfidenceLevel> {
    prop_oneof![
        Just(ConfidenceLevel::Low),
        Just(ConfidenceLevel::Medium),
        Just(ConfidenceLevel::High),
        Just(ConfidenceLevel::Explicit),
    ]
}

fn candidate_strategy() -> impl Strategy<Value = CandidateMatch<DomainKind>> {
    ("[a-z]{1,8}\\.[a-z]{1,8}\\.[a-z]{1,8}", -10i32..110, domain_kind_strategy(), confidence_strategy()).prop_map(
        |(id, priority, kind, confidence)| CandidateMatch {
            criterion_id: id,
            kind,
            effective_priority: priority,
            confidence,
            justification: "generated".to_string(),
            evidence: vec![Evidence::naming("generated")],
        },
    )
}

fn winner_id(decision: &Decision<DomainKind>) -> Option<String> {
    match decision {
        Decision::Decided { winner, .. } => Some(winner.criterion_id.clone()),
        Decision::Unclassified => None,
    }
}

proptest! {
    #[test]
    fn winner_is_independent_of_candidate_order(
        candidates in prop::collection::vec(candidate_strategy(), 1..8),
    ) {
        let mut shuffled = candidates.clone();
        shuffled.reverse();

        let forward = decide(candidates, &DomainCompatibilityPolicy);
        let backward = decide(shuffled, &DomainCompatibilityPolicy);

        prop_assert_eq!(winner_id(&forward), winner_id(&backward));
    }

    #[test]
    fn winner_has_maximal_priority(
        candidates in prop::collection::vec(candidate_strategy(), 1..8),
    ) {
        let max_priority = candidates.iter().map(|c| c.effective_priority).max().unwrap();
        match decide(candidates, &DomainCompatibilityPolicy) {
            Decision::Decided { winner, .. } => prop_assert_eq!(winner.effective_priority, max_priority),
            Decision::Unclassified => prop_assert!(false, "non-empty candidates must decide"),
        }
    }

    #[test]
    fn conflicts_never_contain_a_compatible_kind(
        candidates in prop::collection::vec(candidate_strategy(), 1..8),
    ) {
        if let Decision::Decided { winner, conflicts, .. } = decide(candidates, &DomainCompatibilityPolicy) {
            let policy = DomainCompatibilityPolicy;
            for conflict in &conflicts {
                let competing_kind = DomainKind::parse(&conflict.competing_kind).expect("kind name roundtrips");
                prop_assert!(!policy.compatible(competing_kind, winner.kind));
            }
        }
    }

    #[test]
    fn is_conflict_iff_tied_incompatible_candidate_exists(
        candidates in prop::collection::vec(candidate_strategy(), 1..8),
    ) {
        if let Decision::Decided { winner, is_conflict, .. } = decide(candidates.clone(), &DomainCompatibilityPolicy) {
            let policy = DomainCompatibilityPolicy;
            let expected = candidates.iter().any(|c| {
                c.criterion_id != winner.criterion_id
                    && c.effective_priority == winner.effective_priority
                    && !policy.compatible(c.kind, winner.kind)
            });
            prop_assert_eq!(is_conflict, expected);
        }
    }
}
