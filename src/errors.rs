// Copyright 2025 Cowboy AI, LLC.

//! Error and diagnostic types
//!
//! Configuration errors are surfaced at construction time and never
//! deferred into classification. Everything else — graph
//! inconsistencies, criterion failures, secondary-worker timeouts and
//! errors — is localized per subject and reported through a
//! [`crate::executor::DiagnosticReporter`] instead of aborting the run.

use thiserror::Error;

/// Fatal configuration errors, detected at construction time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The `priorities:` block was present but not a mapping
    #[error("priorities block must be a mapping, found {found}")]
    PrioritiesNotAMapping {
        /// A short description of what was found instead
        found: String,
    },

    /// A priority value was not an integer (and not a truncatable float)
    #[error("priority for '{key}' must be an integer, found {found}")]
    NonIntegerPriority {
        /// The offending criterion id
        key: String,
        /// A short description of the offending value
        found: String,
    },

    /// The profile document could not be parsed as YAML at all
    #[error("malformed criteria profile: {0}")]
    MalformedProfile(String),

    /// An exclusion pattern was structurally invalid
    #[error("malformed exclusion pattern '{0}'")]
    MalformedExclusionPattern(String),
}

/// Result type for configuration construction
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Non-fatal, per-subject events reported through a `DiagnosticReporter`
///
/// None of these abort the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationDiagnostic {
    /// A criterion raised an uncaught error; its contribution is discarded
    #[error("criterion '{criterion_id}' failed evaluating subject '{subject}': {message}")]
    CriterionEvaluationFailed {
        /// The failing criterion's id
        criterion_id: String,
        /// The subject being classified
        subject: String,
        /// The underlying error message
        message: String,
    },

    /// A secondary classifier worker did not complete before its timeout
    #[error("secondary classifier '{worker_id}' timed out for subject '{subject}'")]
    SecondaryWorkerTimedOut {
        /// The worker's declared identifier
        worker_id: String,
        /// The subject being classified
        subject: String,
    },

    /// A secondary classifier worker returned a domain-level error
    #[error("secondary classifier '{worker_id}' errored for subject '{subject}': {message}")]
    SecondaryWorkerFailed {
        /// The worker's declared identifier
        worker_id: String,
        /// The subject being classified
        subject: String,
        /// The underlying error message
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_carry_offending_key() {
        let err = ConfigError::NonIntegerPriority {
            key: "domain.naming.domainEvent".to_string(),
            found: "\"high\"".to_string(),
        };
        assert!(err.to_string().contains("domain.naming.domainEvent"));
    }
}
