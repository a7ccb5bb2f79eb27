//! Inbound port. UI (adapter) calls into the application.

use crate::domain::{BatchStats, DomainError};

/// Input port: an interactive front-end driving the tracker.
pub trait InputPort {
    /// Collect workouts from the user until they stop, reporting each one.
    fn run(&self) -> Result<BatchStats, DomainError>;
}
