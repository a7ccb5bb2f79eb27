//! Implements ReportSink on the terminal.
//!
//! Summary lines go to stdout, rejected packages to stderr (red when color is on).

use crate::domain::{DomainError, Summary, WorkoutPackage};
use crate::ports::ReportSink;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{Write, stderr, stdout};

pub struct ConsoleSink {
    color: bool,
}

impl ConsoleSink {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

fn sink_err(e: std::io::Error) -> DomainError {
    DomainError::Sink(e.to_string())
}

/// `#2 [WLK 9000, 1, 75]: Invalid workout input: ...`
pub fn error_line(index: usize, package: &WorkoutPackage, error: &DomainError) -> String {
    let params: Vec<String> = package.params.iter().map(|p| p.to_string()).collect();
    format!(
        "#{} [{} {}]: {}",
        index + 1,
        package.tag,
        params.join(", "),
        error
    )
}

impl ReportSink for ConsoleSink {
    fn report(&self, summary: &Summary) -> Result<(), DomainError> {
        let mut out = stdout().lock();
        writeln!(out, "{}", summary).map_err(sink_err)?;
        out.flush().map_err(sink_err)
    }

    fn report_error(
        &self,
        index: usize,
        package: &WorkoutPackage,
        error: &DomainError,
    ) -> Result<(), DomainError> {
        let line = error_line(index, package, error);
        let mut err = stderr();
        if self.color {
            err.execute(SetForegroundColor(Color::Red)).map_err(sink_err)?;
            err.execute(Print(&line)).map_err(sink_err)?;
            err.execute(ResetColor).map_err(sink_err)?;
            err.execute(Print("\n")).map_err(sink_err)?;
        } else {
            writeln!(err, "{}", line).map_err(sink_err)?;
        }
        err.flush().map_err(sink_err)
    }
}
