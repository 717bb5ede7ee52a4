// Copyright 2025 Cowboy AI, LLC.

//! Records of losing matches reported alongside a classification result

use serde::{Deserialize, Serialize};

use crate::confidence::ConfidenceLevel;

/// An immutable record describing a losing, incompatible match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Name of the competing kind
    pub competing_kind: String,
    /// Id of the competing criterion
    pub competing_criterion_id: String,
    /// Confidence the competing criterion reported
    pub competing_confidence: ConfidenceLevel,
    /// Effective priority the competing criterion ran at
    pub competing_priority: i32,
    /// Short rationale, mentioning the winner's kind
    pub rationale: String,
}
