//! Application use cases. Orchestrate domain logic via ports.

pub mod tracker_service;

pub use tracker_service::{ErrorPolicy, Outcome, TrackerService, read_package};
