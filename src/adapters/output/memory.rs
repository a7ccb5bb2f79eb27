//! In-memory ReportSink. Collects output for tests and embedding callers.

use crate::domain::{DomainError, Summary, WorkoutPackage};
use crate::ports::ReportSink;
use std::sync::{Mutex, PoisonError};

/// A poisoned lock still yields the data collected so far.
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
    errors: Mutex<Vec<(usize, DomainError)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered summary lines, in report order.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// `(batch index, error)` for every rejected package.
    pub fn errors(&self) -> Vec<(usize, DomainError)> {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ReportSink for MemorySink {
    fn report(&self, summary: &Summary) -> Result<(), DomainError> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(summary.message());
        Ok(())
    }

    fn report_error(
        &self,
        index: usize,
        _package: &WorkoutPackage,
        error: &DomainError,
    ) -> Result<(), DomainError> {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((index, error.clone()));
        Ok(())
    }
}
