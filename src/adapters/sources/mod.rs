//! Package sources. Implement PackageSource.
//!
//! Built-in demo batch, JSON and CSV files, command-line tokens.

pub mod args;
pub mod builtin;
pub mod csv_file;
pub mod json_file;

pub use args::ArgsSource;
pub use builtin::BuiltinSource;
pub use csv_file::CsvFileSource;
pub use json_file::JsonFileSource;

use crate::domain::DomainError;
use crate::ports::PackageSource;
use std::path::Path;

/// Parse the readings that follow a tag. Every position is kept: a blank
/// reading is a source error, except a single trailing one (`RUN,15000,1,75,`).
pub(crate) fn parse_readings<'a>(
    fields: impl IntoIterator<Item = &'a str>,
    location: &str,
) -> Result<Vec<f64>, DomainError> {
    let mut fields: Vec<&str> = fields.into_iter().map(str::trim).collect();
    if fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
        .iter()
        .enumerate()
        .map(|(i, f)| {
            if f.is_empty() {
                return Err(DomainError::Source(format!(
                    "{}: reading {} is blank",
                    location,
                    i + 1
                )));
            }
            f.parse::<f64>().map_err(|_| {
                DomainError::Source(format!("{}: '{}' is not a number", location, f))
            })
        })
        .collect()
}

/// Pick a file source by extension (`.json` or `.csv`, case-insensitive).
pub fn from_path(path: impl AsRef<Path>) -> Result<Box<dyn PackageSource>, DomainError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);
    match ext.as_deref() {
        Some("json") => Ok(Box::new(JsonFileSource::new(path))),
        Some("csv") => Ok(Box::new(CsvFileSource::new(path))),
        _ => Err(DomainError::Source(format!(
            "unsupported input file '{}' (expected .json or .csv)",
            path.display()
        ))),
    }
}
