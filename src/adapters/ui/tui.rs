//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Asks for a workout kind, then each reading by name, reports the summary
//! and offers to enter another one. Esc / Ctrl-C ends the session. Under
//! `ErrorPolicy::Halt` the first rejected workout ends it with that error.

use crate::domain::{BatchStats, DomainError, WorkoutKind, WorkoutPackage};
use crate::ports::InputPort;
use crate::usecases::{ErrorPolicy, Outcome, TrackerService};
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{Confirm, CustomType, Select};
use std::sync::Arc;
use tracing::info;

/// Applies the prompt theme globally.
pub fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightCyan))
        .with_answered_prompt_prefix(Styled::new("✓").with_fg(Color::LightGreen));
    inquire::set_global_render_config(config);
}

fn prompt_err(e: InquireError) -> DomainError {
    DomainError::Prompt(e.to_string())
}

/// Maps cancellation to `None` so the session ends cleanly.
fn cancellable<T>(result: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(prompt_err(e)),
    }
}

fn help_for(field: &str) -> &'static str {
    match field {
        "steps" | "strokes" | "pool_laps" => "whole number",
        "duration_hours" => "hours, e.g. 1.5",
        "weight_kg" => "kilograms",
        "height_cm" => "centimeters",
        "pool_length_m" => "meters",
        _ => "",
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    service: Arc<TrackerService>,
}

impl TuiInputPort {
    pub fn new(service: Arc<TrackerService>) -> Self {
        Self { service }
    }

    fn prompt_package(&self) -> Result<Option<WorkoutPackage>, DomainError> {
        let Some(kind) = cancellable(
            Select::new("Workout type:", WorkoutKind::ALL.to_vec()).prompt(),
        )?
        else {
            return Ok(None);
        };

        let mut params = Vec::with_capacity(kind.arity());
        for &field in kind.param_names() {
            let value = cancellable(
                CustomType::<f64>::new(&format!("{}:", field))
                    .with_help_message(help_for(field))
                    .with_error_message("Please type a number")
                    .prompt(),
            )?;
            match value {
                Some(v) => params.push(v),
                None => return Ok(None),
            }
        }
        Ok(Some(WorkoutPackage::new(kind.tag(), params)))
    }

    /// Report one entered workout and update `stats`.
    fn handle(
        &self,
        index: usize,
        package: &WorkoutPackage,
        stats: &mut BatchStats,
    ) -> Result<(), DomainError> {
        match self.service.process_and_report(index, package)? {
            Outcome::Reported(_) => stats.processed += 1,
            Outcome::Rejected(e) => {
                stats.failed += 1;
                if self.service.policy() == ErrorPolicy::Halt {
                    return Err(e);
                }
            }
        }
        Ok(())
    }
}

impl InputPort for TuiInputPort {
    fn run(&self) -> Result<BatchStats, DomainError> {
        let mut stats = BatchStats::default();
        let mut index = 0usize;

        while let Some(package) = self.prompt_package()? {
            self.handle(index, &package, &mut stats)?;
            index += 1;

            let more = cancellable(
                Confirm::new("Add another workout?")
                    .with_default(true)
                    .prompt(),
            )?;
            if more != Some(true) {
                break;
            }
        }

        info!(
            processed = stats.processed,
            failed = stats.failed,
            "interactive session finished"
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::output::MemorySink;

    fn port(policy: ErrorPolicy) -> (TuiInputPort, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let service = Arc::new(TrackerService::new(sink.clone(), policy));
        (TuiInputPort::new(service), sink)
    }

    #[test]
    fn test_rejected_workout_continues_by_default() {
        let (port, sink) = port(ErrorPolicy::Continue);
        let mut stats = BatchStats::default();

        port.handle(0, &WorkoutPackage::new("RUN", [15000.0, 0.0, 75.0]), &mut stats)
            .unwrap();
        port.handle(1, &WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0]), &mut stats)
            .unwrap();

        assert_eq!(stats, BatchStats { processed: 1, failed: 1 });
        assert_eq!(sink.lines().len(), 1);
        assert_eq!(sink.errors().len(), 1);
    }

    #[test]
    fn test_rejected_workout_halts_session() {
        let (port, sink) = port(ErrorPolicy::Halt);
        let mut stats = BatchStats::default();

        let err = port
            .handle(0, &WorkoutPackage::new("RUN", [15000.0, 0.0, 75.0]), &mut stats)
            .unwrap_err();

        assert!(err.is_invalid_input());
        assert_eq!(stats, BatchStats { processed: 0, failed: 1 });
        assert_eq!(sink.errors().len(), 1);
    }

    #[test]
    fn test_every_field_has_help() {
        for kind in WorkoutKind::ALL {
            for field in kind.param_names() {
                assert!(!help_for(field).is_empty(), "{field}");
            }
        }
    }

    #[test]
    fn test_cancel_ends_session() {
        let r: Result<Option<f64>, _> = cancellable(Err(InquireError::OperationCanceled));
        assert_eq!(r.unwrap(), None);
        let r: Result<Option<f64>, _> = cancellable(Err(InquireError::OperationInterrupted));
        assert_eq!(r.unwrap(), None);
    }
}
