// Copyright 2025 Cowboy AI, LLC.

//! Classification configuration

use std::collections::BTreeMap;

use crate::glob;
use crate::profile::CriteriaProfile;

/// Immutable configuration for a classification run
///
/// Constructed once via [`ClassificationConfigBuilder`] and read-only
/// thereafter: the builder is a convenience, but it always produces a
/// frozen value.
#[derive(Debug, Clone, Default)]
pub struct ClassificationConfig {
    exclusion_patterns: Vec<String>,
    explicit_classifications: BTreeMap<String, String>,
    profile: CriteriaProfile,
}

impl ClassificationConfig {
    /// Start building a configuration
    pub fn builder() -> ClassificationConfigBuilder {
        ClassificationConfigBuilder::default()
    }

    /// The ordered exclusion glob patterns
    pub fn exclusion_patterns(&self) -> &[String] {
        &self.exclusion_patterns
    }

    /// Whether `fqn` matches any exclusion pattern
    pub fn is_excluded(&self, fqn: &str) -> bool {
        glob::matches_any(self.exclusion_patterns.iter().map(String::as_str), fqn)
    }

    /// The explicit FQN -> kind-name override for `fqn`, if any
    pub fn explicit_classification(&self, fqn: &str) -> Option<&str> {
        self.explicit_classifications.get(fqn).map(String::as_str)
    }

    /// The criteria profile in effect
    pub fn profile(&self) -> &CriteriaProfile {
        &self.profile
    }
}

/// Builder for [`ClassificationConfig`]
#[derive(Debug, Clone, Default)]
pub struct ClassificationConfigBuilder {
    exclusion_patterns: Vec<String>,
    explicit_classifications: BTreeMap<String, String>,
    profile: CriteriaProfile,
}

impl ClassificationConfigBuilder {
    /// Append an exclusion glob pattern
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclusion_patterns.push(pattern.into());
        self
    }

    /// Append multiple exclusion glob patterns
    pub fn exclude_all(mut self, patterns: impl IntoIterator<Item = String>) -> Self {
        self.exclusion_patterns.extend(patterns);
        self
    }

    /// Record an explicit FQN -> kind-name override
    pub fn override_classification(mut self, fqn: impl Into<String>, kind_name: impl Into<String>) -> Self {
        self.explicit_classifications.insert(fqn.into(), kind_name.into());
        self
    }

    /// Set the criteria profile
    pub fn profile(mut self, profile: CriteriaProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Freeze the builder into an immutable [`ClassificationConfig`]
    pub fn build(self) -> ClassificationConfig {
        ClassificationConfig {
            exclusion_patterns: self.exclusion_patterns,
            explicit_classifications: self.explicit_classifications,
            profile: self.profile,
        }
    }
}
