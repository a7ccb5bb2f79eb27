//! Core domain layer. No external I/O dependencies.
//!
//! Workout entities, the per-kind formulas and summary rendering live here.

pub mod entities;
pub mod errors;
pub mod summary;
pub mod training;

pub use entities::{BatchStats, Summary, WorkoutDetail, WorkoutKind, WorkoutPackage, WorkoutRecord};
pub use errors::{DomainError, InputFault};
