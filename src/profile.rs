// Copyright 2025 Cowboy AI, LLC.

//! Criteria profiles: priority overlays sourced from a text document
//! sourced from a text document

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::errors::{ConfigError, ConfigResult};

const DEFAULT_PROFILE_YAML: &str = include_str!("profiles/default.yaml");
const STRICT_PROFILE_YAML: &str = include_str!("profiles/strict.yaml");
const ANNOTATION_ONLY_PROFILE_YAML: &str = include_str!("profiles/annotation-only.yaml");

/// Raw shape of a profile document before validation
#[derive(Debug, Deserialize)]
struct RawProfileDocument {
    #[serde(default)]
    priorities: Option<serde_yaml::Value>,
}

/// A function `criterion-id -> optional integer priority override`
///
/// Built from a text document shaped as:
///
/// ```yaml
/// priorities:
///   domain.naming.domainEvent: 30
/// ```
///
/// Comments and blank lines are ignored (ordinary YAML semantics). A key
/// whose value is fractional is truncated toward zero. A non-integer
/// scalar, or a non-mapping `priorities` block, is a fatal configuration
/// error. An absent `priorities` block yields the empty profile.
#[derive(Debug, Clone, Default)]
pub struct CriteriaProfile {
    overrides: BTreeMap<String, i32>,
    /// When set, any criterion id whose category segment is not
    /// `explicit` is forced to this priority unless it has an explicit
    /// per-id override above. Used by the built-in `annotation-only`
    /// profile, which cannot be expressed as a literal id -> priority
    /// mapping without enumerating every shipped criterion id ahead of
    /// time.
    blanket_non_explicit: Option<i32>,
}

impl CriteriaProfile {
    /// The empty profile: every criterion runs at its default priority
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a profile document in the format described above
    pub fn parse(text: &str) -> ConfigResult<Self> {
        let doc: RawProfileDocument = serde_yaml::from_str(text)
            .map_err(|e| ConfigError::MalformedProfile(e.to_string()))?;

        let Some(priorities) = doc.priorities else {
            return Ok(Self::empty());
        };

        let mapping = priorities.as_mapping().ok_or_else(|| {
            ConfigError::PrioritiesNotAMapping {
                found: describe_value(&priorities),
            }
        })?;

        let mut overrides = BTreeMap::new();
        for (key, value) in mapping {
            let key = key
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| describe_value(key));
            let priority = integer_priority(&key, value)?;
            overrides.insert(key, priority);
        }

        Ok(Self {
            overrides,
            blanket_non_explicit: None,
        })
    }

    /// The canonical built-in profile: no overrides
    pub fn default_profile() -> Self {
        Self::parse(DEFAULT_PROFILE_YAML).expect("built-in default profile must parse")
    }

    /// The built-in profile that lowers heuristic priorities
    pub fn strict() -> Self {
        Self::parse(STRICT_PROFILE_YAML).expect("built-in strict profile must parse")
    }

    /// The built-in profile that disables every non-`explicit.*` criterion
    pub fn annotation_only() -> Self {
        let mut profile =
            Self::parse(ANNOTATION_ONLY_PROFILE_YAML).expect("built-in annotation-only profile must parse");
        profile.blanket_non_explicit = Some(-1);
        profile
    }

    /// Look up the priority override for a criterion id, if any
    pub fn override_for(&self, criterion_id: &str) -> Option<i32> {
        if let Some(p) = self.overrides.get(criterion_id) {
            return Some(*p);
        }
        if let Some(blanket) = self.blanket_non_explicit {
            if !is_explicit_category(criterion_id) {
                return Some(blanket);
            }
        }
        None
    }

    /// The effective priority for a criterion: the profile's override, or
    /// the criterion's own default priority
    pub fn effective_priority(&self, criterion_id: &str, default_priority: i32) -> i32 {
        self.override_for(criterion_id).unwrap_or(default_priority)
    }
}

fn is_explicit_category(criterion_id: &str) -> bool {
    criterion_id.splitn(3, '.').nth(1) == Some("explicit")
}

fn integer_priority(key: &str, value: &serde_yaml::Value) -> ConfigResult<i32> {
    if let Some(i) = value.as_i64() {
        return Ok(i as i32);
    }
    if let Some(f) = value.as_f64() {
        return Ok(f.trunc() as i32);
    }
    Err(ConfigError::NonIntegerPriority {
        key: key.to_string(),
        found: describe_value(value),
    })
}

fn describe_value(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::String(s) => format!("\"{s}\""),
        serde_yaml::Value::Sequence(_) => "a sequence".to_string(),
        serde_yaml::Value::Mapping(_) => "a mapping".to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Tagged(t) => describe_value(&t.value),
    }
}
