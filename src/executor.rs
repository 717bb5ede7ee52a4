// Copyright 2025 Cowboy AI, LLC.

//! Diagnostic reporting and the secondary (body-level) classifier worker
//! pool

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::errors::ClassificationDiagnostic;
use crate::graph::TypeNode;
use crate::results::ClassificationResult;

/// Severity of a non-fatal diagnostic event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    /// Informational, no action required
    Info,
    /// Something unusual but survivable happened
    Warn,
    /// A subject's classification was affected
    Error,
}

/// Sink for non-fatal, per-subject events raised while classifying
///
/// None of these events abort a run; they are reported and the run
/// continues with the affected contribution discarded.
pub trait DiagnosticReporter: Send + Sync {
    /// Report an event at the given severity
    fn report(&self, severity: DiagnosticSeverity, message: &str, cause: Option<&str>);

    /// Convenience for [`DiagnosticSeverity::Info`]
    fn info(&self, message: &str) {
        self.report(DiagnosticSeverity::Info, message, None);
    }

    /// Convenience for [`DiagnosticSeverity::Warn`]
    fn warn(&self, message: &str) {
        self.report(DiagnosticSeverity::Warn, message, None);
    }

    /// Convenience for [`DiagnosticSeverity::Error`]
    fn error(&self, message: &str, cause: Option<&str>) {
        self.report(DiagnosticSeverity::Error, message, cause);
    }
}

/// A reporter that forwards every event to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnosticReporter;

impl DiagnosticReporter for TracingDiagnosticReporter {
    fn report(&self, severity: DiagnosticSeverity, message: &str, cause: Option<&str>) {
        match (severity, cause) {
            (DiagnosticSeverity::Info, _) => tracing::info!("{message}"),
            (DiagnosticSeverity::Warn, _) => tracing::warn!("{message}"),
            (DiagnosticSeverity::Error, Some(cause)) => tracing::error!(cause, "{message}"),
            (DiagnosticSeverity::Error, None) => tracing::error!("{message}"),
        }
    }
}

/// A reporter that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDiagnosticReporter;

impl DiagnosticReporter for NullDiagnosticReporter {
    fn report(&self, _severity: DiagnosticSeverity, _message: &str, _cause: Option<&str>) {}
}

/// One recorded event, as captured by [`RecordingDiagnosticReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedDiagnostic {
    /// The reported severity
    pub severity: DiagnosticSeverity,
    /// The reported message
    pub message: String,
    /// The reported cause, if any
    pub cause: Option<String>,
}

/// A reporter that keeps every event in memory, for assertions in tests
#[derive(Debug, Default)]
pub struct RecordingDiagnosticReporter {
    events: Mutex<Vec<RecordedDiagnostic>>,
}

impl RecordingDiagnosticReporter {
    /// An empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of every event recorded so far
    pub fn events(&self) -> Vec<RecordedDiagnostic> {
        self.events.lock().expect("diagnostic lock poisoned").clone()
    }
}

impl DiagnosticReporter for RecordingDiagnosticReporter {
    fn report(&self, severity: DiagnosticSeverity, message: &str, cause: Option<&str>) {
        self.events
            .lock()
            .expect("diagnostic lock poisoned")
            .push(RecordedDiagnostic {
                severity,
                message: message.to_string(),
                cause: cause.map(str::to_string),
            });
    }
}

/// Context handed to a secondary classifier alongside the subject it is
/// asked to refine
pub struct SecondaryContext<'a> {
    /// The primary (syntactic/structural-pass) result for this subject, if
    /// a prior pass already produced one
    pub primary_result: Option<&'a ClassificationResult>,
}

/// A body-level classifier that inspects source beyond declarations
/// (method bodies, call graphs, …) and may refine or confirm a primary
/// result
///
/// Secondary classifiers are the engine's hook for analysis heavier than
/// the deterministic, declaration-only criteria in [`crate::criterion`]:
/// they run out-of-band, under a timeout, and their failure never aborts
/// the overall run.
#[async_trait]
pub trait SecondaryClassifier: Send + Sync {
    /// A stable identifier for this worker, used in diagnostics
    fn id(&self) -> &str;

    /// Attempt to classify `node`, optionally refining `context.primary_result`
    async fn classify(
        &self,
        node: &TypeNode,
        context: SecondaryContext<'_>,
    ) -> Result<Option<ClassificationResult>, String>;
}

/// A secondary classifier that never produces a refinement
///
/// Used as the default worker set and in tests exercising the executor's
/// scheduling behavior without a real analysis backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSecondaryWorker {
    id: &'static str,
}

impl NoopSecondaryWorker {
    /// Construct a no-op worker with the given diagnostic id
    pub fn new(id: &'static str) -> Self {
        Self { id }
    }
}

#[async_trait]
impl SecondaryClassifier for NoopSecondaryWorker {
    fn id(&self) -> &str {
        self.id
    }

    async fn classify(
        &self,
        _node: &TypeNode,
        _context: SecondaryContext<'_>,
    ) -> Result<Option<ClassificationResult>, String> {
        Ok(None)
    }
}

/// Outcome of running a secondary worker against one subject
pub enum SecondaryOutcome {
    /// The worker produced a refined result
    Refined(ClassificationResult),
    /// The worker ran to completion and found nothing to refine
    NoOpinion,
    /// The worker did not complete before its timeout
    TimedOut,
    /// The worker returned an error
    Failed(String),
}

/// A bounded-concurrency pool that runs [`SecondaryClassifier`] workers
/// against subjects with a per-classification timeout and cooperative
/// cancellation
///
/// Modeled on a Tokio task pool rather than a dedicated thread pool, since
/// workers are expected to be I/O- or CPU-bound analysis tasks that
/// benefit from being spawned rather than blocking the caller.
pub struct SecondaryExecutor {
    workers: Vec<Arc<dyn SecondaryClassifier>>,
    timeout: Duration,
    cancelled: Arc<AtomicBool>,
}

impl SecondaryExecutor {
    /// Build an executor over the given workers with a per-subject timeout
    pub fn new(workers: Vec<Arc<dyn SecondaryClassifier>>, timeout: Duration) -> Self {
        Self {
            workers,
            timeout,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Request cooperative shutdown
    ///
    /// In-flight work observes this flag between subjects; it is not
    /// preemptive. Idempotent: calling this more than once has no further
    /// effect.
    pub fn shutdown(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether shutdown has been requested
    pub fn is_shutting_down(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Run every worker against `node`, respecting the timeout and
    /// stopping early if shutdown has been requested
    pub async fn run_all(
        &self,
        node: &TypeNode,
        primary_result: Option<&ClassificationResult>,
        reporter: &dyn DiagnosticReporter,
    ) -> Vec<SecondaryOutcome> {
        let mut outcomes = Vec::with_capacity(self.workers.len());
        for worker in &self.workers {
            if self.is_shutting_down() {
                break;
            }
            outcomes.push(self.run_one(worker.as_ref(), node, primary_result, reporter).await);
        }
        outcomes
    }

    async fn run_one(
        &self,
        worker: &dyn SecondaryClassifier,
        node: &TypeNode,
        primary_result: Option<&ClassificationResult>,
        reporter: &dyn DiagnosticReporter,
    ) -> SecondaryOutcome {
        let fut: Pin<Box<dyn Future<Output = Result<Option<ClassificationResult>, String>> + Send + '_>> =
            Box::pin(worker.classify(node, SecondaryContext { primary_result }));

        match tokio::time::timeout(self.timeout, fut).await {
            Ok(Ok(Some(result))) => SecondaryOutcome::Refined(result),
            Ok(Ok(None)) => SecondaryOutcome::NoOpinion,
            Ok(Err(message)) => {
                reporter.error(
                    &ClassificationDiagnostic::SecondaryWorkerFailed {
                        worker_id: worker.id().to_string(),
                        subject: node.qualified_name.clone(),
                        message: message.clone(),
                    }
                    .to_string(),
                    Some(&message),
                );
                SecondaryOutcome::Failed(message)
            }
            Err(_elapsed) => {
                reporter.warn(
                    &ClassificationDiagnostic::SecondaryWorkerTimedOut {
                        worker_id: worker.id().to_string(),
                        subject: node.qualified_name.clone(),
                    }
                    .to_string(),
                );
                SecondaryOutcome::TimedOut
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::TypeKind;

    #[tokio::test]
    async fn noop_worker_yields_no_opinion() {
        let executor = SecondaryExecutor::new(
            vec![Arc::new(NoopSecondaryWorker::new("noop"))],
            Duration::from_millis(50),
        );
        let node = TypeNode::new("com.example.Order", TypeKind::Class);
        let reporter = NullDiagnosticReporter;
        let outcomes = executor.run_all(&node, None, &reporter).await;
        assert_eq!(outcomes.len(), 1);
        assert!(matches!(outcomes[0], SecondaryOutcome::NoOpinion));
    }

    #[tokio::test]
    async fn shutdown_stops_further_workers() {
        let executor = SecondaryExecutor::new(
            vec![
                Arc::new(NoopSecondaryWorker::new("a")),
                Arc::new(NoopSecondaryWorker::new("b")),
            ],
            Duration::from_millis(50),
        );
        executor.shutdown();
        let node = TypeNode::new("com.example.Order", TypeKind::Class);
        let reporter = NullDiagnosticReporter;
        let outcomes = executor.run_all(&node, None, &reporter).await;
        assert!(outcomes.is_empty());
    }

    struct SlowWorker;

    #[async_trait]
    impl SecondaryClassifier for SlowWorker {
        fn id(&self) -> &str {
            "slow"
        }

        async fn classify(
            &self,
            _node: &TypeNode,
            _context: SecondaryContext<'_>,
        ) -> Result<Option<ClassificationResult>, String> {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok(None)
        }
    }

    #[tokio::test]
    async fn worker_exceeding_timeout_is_reported() {
        let executor = SecondaryExecutor::new(vec![Arc::new(SlowWorker)], Duration::from_millis(10));
        let node = TypeNode::new("com.example.Order", TypeKind::Class);
        let reporter = RecordingDiagnosticReporter::new();
        let outcomes = executor.run_all(&node, None, &reporter).await;
        assert!(matches!(outcomes[0], SecondaryOutcome::TimedOut));
        assert_eq!(reporter.events().len(), 1);
        assert_eq!(reporter.events()[0].severity, DiagnosticSeverity::Warn);
    }
}
