//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, Summary, WorkoutPackage};

/// Where raw workout packages come from (built-in batch, file, arguments).
pub trait PackageSource {
    /// Short description for logs, e.g. the file path.
    fn describe(&self) -> String;

    /// Load all packages in input order.
    ///
    /// Fails with `DomainError::Source` when the input cannot be read or a
    /// parameter is not numeric.
    fn packages(&self) -> Result<Vec<WorkoutPackage>, DomainError>;
}

/// Where rendered summaries and per-item failures go.
pub trait ReportSink {
    fn report(&self, summary: &Summary) -> Result<(), DomainError>;

    /// Report a package that could not be processed. `index` is its 0-based
    /// position in the batch.
    fn report_error(
        &self,
        index: usize,
        package: &WorkoutPackage,
        error: &DomainError,
    ) -> Result<(), DomainError>;
}
