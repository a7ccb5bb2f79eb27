//! Infrastructure adapters. Implement ports.
//!
//! Package sources, report sinks, terminal UI. Map errors to DomainError.

pub mod output;
pub mod sources;
pub mod ui;
