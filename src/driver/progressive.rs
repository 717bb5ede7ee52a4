// Copyright 2025 Cowboy AI, LLC.

//! Optional multi-pass driver: a fast declaration-level pass followed by
//! a bounded, best-effort secondary (body-level) refinement pass

use std::time::{Duration, Instant};

use crate::confidence::ConfidenceLevel;
use crate::config::ClassificationConfig;
use crate::executor::{DiagnosticReporter, NullDiagnosticReporter, SecondaryExecutor, SecondaryOutcome};
use crate::graph::GraphQuery;
use crate::results::ClassificationResults;

use super::single_pass::SinglePassDriver;

/// Per-pass statistics recorded by [`ProgressiveDriver::classify`]
#[derive(Debug, Clone)]
pub struct PassReport {
    /// A short name for the pass (`"declarations"` or `"secondary"`)
    pub name: String,
    /// Wall-clock time spent in this pass
    pub elapsed: Duration,
    /// How many subjects this pass classified or refined
    pub affected: usize,
}

/// A driver that runs the declaration-level pass first, then hands
/// subjects still below `Explicit` confidence to a [`SecondaryExecutor`]
/// for a bounded, best-effort refinement
///
/// Subjects already classified at `Explicit` confidence (an annotation
/// marker or a configuration override) are skipped by the secondary pass
/// — nothing a body-level analysis finds can outrank that.
pub struct ProgressiveDriver {
    declarations: SinglePassDriver,
    secondary: SecondaryExecutor,
    secondary_budget: Duration,
}

impl ProgressiveDriver {
    /// Build a progressive driver from a declaration-level pass and a
    /// secondary executor, capping the secondary pass's total wall-clock
    /// time at `secondary_budget`
    pub fn new(declarations: SinglePassDriver, secondary: SecondaryExecutor, secondary_budget: Duration) -> Self {
        Self {
            declarations,
            secondary,
            secondary_budget,
        }
    }

    /// Run both passes, discarding non-fatal diagnostic events
    pub async fn classify(
        &self,
        graph: &dyn GraphQuery,
        config: &ClassificationConfig,
    ) -> (ClassificationResults, Vec<PassReport>) {
        self.classify_with_reporter(graph, config, &NullDiagnosticReporter).await
    }

    /// Run both passes, reporting non-fatal events to `reporter`
    pub async fn classify_with_reporter(
        &self,
        graph: &dyn GraphQuery,
        config: &ClassificationConfig,
        reporter: &dyn DiagnosticReporter,
    ) -> (ClassificationResults, Vec<PassReport>) {
        let mut reports = Vec::new();

        let started = Instant::now();
        let mut results = self.declarations.classify_with_reporter(graph, config, reporter);
        reports.push(PassReport {
            name: "declarations".to_string(),
            elapsed: started.elapsed(),
            affected: results.len(),
        });

        let started = Instant::now();
        let mut refined = 0usize;
        for node in graph.all_types() {
            if started.elapsed() > self.secondary_budget || self.secondary.is_shutting_down() {
                break;
            }
            let subject = node.id();
            let primary = results.get(&subject).cloned();
            if primary
                .as_ref()
                .is_some_and(|r| r.confidence == Some(ConfidenceLevel::Explicit))
            {
                continue;
            }
            let outcomes = self.secondary.run_all(node, primary.as_ref(), reporter).await;
            for outcome in outcomes {
                if let SecondaryOutcome::Refined(result) = outcome {
                    refined += 1;
                    results.insert(result);
                }
            }
        }
        reports.push(PassReport {
            name: "secondary".to_string(),
            elapsed: started.elapsed(),
            affected: refined,
        });

        (results, reports)
    }
}
