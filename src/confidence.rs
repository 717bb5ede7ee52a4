// Copyright 2025 Cowboy AI, LLC.

//! Confidence levels used to break priority ties

use serde::{Deserialize, Serialize};

/// Self-assessed certainty of a criterion's match
///
/// Totally ordered: `Low < Medium < High < Explicit`. Confidence is
/// consulted only as a tie-breaker once priority has been compared — see
/// [`crate::decision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    /// Weak heuristic signal
    Low,
    /// Ordinary heuristic signal
    Medium,
    /// Strong structural/relational signal
    High,
    /// Derived directly from an explicit, language-level marker
    Explicit,
}

impl ConfidenceLevel {
    /// Numeric weight used for tie-breaking
    ///
    /// Strictly monotone in the level's rank; callers must not depend on
    /// the concrete values, only on their relative order.
    pub fn weight(self) -> u8 {
        match self {
            ConfidenceLevel::Low => 10,
            ConfidenceLevel::Medium => 20,
            ConfidenceLevel::High => 30,
            ConfidenceLevel::Explicit => 40,
        }
    }
}
