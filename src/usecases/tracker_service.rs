//! Main tracker logic: package -> record -> summary -> sink.
//!
//! - Dispatches on the sensor tag with strict arity checks
//! - Reports every success and every failure to the sink, in input order
//! - `ErrorPolicy` decides whether a failing item stops the batch

use crate::domain::{
    BatchStats, DomainError, Summary, WorkoutKind, WorkoutPackage, WorkoutRecord,
};
use crate::ports::ReportSink;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Build a workout record from a raw package.
///
/// Unknown tags and wrong parameter counts fail with `InvalidWorkoutInput`.
pub fn read_package(package: &WorkoutPackage) -> Result<WorkoutRecord, DomainError> {
    let kind: WorkoutKind = package.tag.parse()?;
    WorkoutRecord::from_params(kind, &package.params)
}

/// What to do when one package in a batch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Report the failure and move on to the next package.
    #[default]
    Continue,
    /// Report the failure and stop, returning its error.
    Halt,
}

/// What happened to one reported package.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Reported(Summary),
    Rejected(DomainError),
}

/// Tracker service. Turns packages into reported summaries.
pub struct TrackerService {
    sink: Arc<dyn ReportSink>,
    policy: ErrorPolicy,
}

impl TrackerService {
    pub fn new(sink: Arc<dyn ReportSink>, policy: ErrorPolicy) -> Self {
        Self { sink, policy }
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Process a single package without reporting it.
    pub fn process(&self, package: &WorkoutPackage) -> Result<Summary, DomainError> {
        let record = read_package(package)?;
        let summary = record.summary();
        debug!(
            kind = %record.kind(),
            calories = summary.calories_kcal,
            "workout summarized"
        );
        Ok(summary)
    }

    /// Process a single package and report the outcome to the sink.
    ///
    /// A rejected package is reported, not returned as an error; only sink
    /// failures are.
    pub fn process_and_report(
        &self,
        index: usize,
        package: &WorkoutPackage,
    ) -> Result<Outcome, DomainError> {
        match self.process(package) {
            Ok(summary) => {
                self.sink.report(&summary)?;
                Ok(Outcome::Reported(summary))
            }
            Err(e) => {
                warn!(index, tag = %package.tag, error = %e, "workout package rejected");
                self.sink.report_error(index, package, &e)?;
                Ok(Outcome::Rejected(e))
            }
        }
    }

    /// Process packages in input order.
    pub fn process_batch(&self, packages: &[WorkoutPackage]) -> Result<BatchStats, DomainError> {
        let mut stats = BatchStats::default();

        for (index, package) in packages.iter().enumerate() {
            match self.process_and_report(index, package)? {
                Outcome::Reported(_) => stats.processed += 1,
                Outcome::Rejected(e) => {
                    stats.failed += 1;
                    if self.policy == ErrorPolicy::Halt {
                        info!(index, "halting batch on first failure");
                        return Err(e);
                    }
                }
            }
        }

        info!(
            processed = stats.processed,
            failed = stats.failed,
            "batch finished"
        );
        Ok(stats)
    }
}
