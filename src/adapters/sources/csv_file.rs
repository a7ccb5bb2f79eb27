//! Implements PackageSource for a CSV file. Uses the `csv` crate.
//!
//! One package per row: `TAG,p1,p2,...`. Rows may differ in length, `#`
//! starts a comment line, there is no header row.

use super::parse_readings;
use crate::domain::{DomainError, WorkoutPackage};
use crate::ports::PackageSource;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn parse<R: Read>(reader: R) -> Result<Vec<WorkoutPackage>, DomainError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut packages = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(|e| DomainError::Source(format!("invalid CSV: {}", e)))?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            if record.iter().all(str::is_empty) {
                continue;
            }
            let mut fields = record.iter();
            // A blank tag still becomes a package so the batch reports it.
            let tag = fields.next().unwrap_or_default().to_string();
            let params = parse_readings(fields, &format!("line {}", line))?;
            packages.push(WorkoutPackage { tag, params });
        }
        Ok(packages)
    }
}

impl PackageSource for CsvFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn packages(&self) -> Result<Vec<WorkoutPackage>, DomainError> {
        let file = std::fs::File::open(&self.path).map_err(|e| {
            DomainError::Source(format!("open {}: {}", self.path.display(), e))
        })?;
        let packages = Self::parse(file)?;
        debug!(path = %self.path.display(), count = packages.len(), "loaded CSV packages");
        Ok(packages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InputFault;
    use std::io::Write;

    #[test]
    fn test_parse_variable_rows() {
        let input = "# tag,readings\nSWM, 720, 1, 80, 25, 40\nRUN,15000,1,75\n\nWLK,9000,1,75,180\n";
        let packages = CsvFileSource::parse(input.as_bytes()).unwrap();

        assert_eq!(
            packages,
            vec![
                WorkoutPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
                WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0]),
                WorkoutPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
            ]
        );
    }

    #[test]
    fn test_short_row_is_kept_for_validation() {
        let packages = CsvFileSource::parse("WLK,9000,1,75\n".as_bytes()).unwrap();
        assert_eq!(packages[0].params.len(), 3);
    }

    #[test]
    fn test_non_numeric_field_names_line() {
        let err = CsvFileSource::parse("RUN,15000,1,75\nRUN,abc,1,75\n".as_bytes()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 2"), "{msg}");
        assert!(msg.contains("'abc'"));
    }

    #[test]
    fn test_blank_field_mid_row_is_rejected() {
        let err = CsvFileSource::parse("SWM,720,1,,80,25,40\n".as_bytes()).unwrap_err();
        assert_eq!(
            err,
            DomainError::Source("line 1: reading 3 is blank".to_string())
        );
    }

    #[test]
    fn test_trailing_comma_is_tolerated() {
        let packages = CsvFileSource::parse("RUN,15000,1,75,\n".as_bytes()).unwrap();
        assert_eq!(packages, vec![WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0])]);
    }

    #[test]
    fn test_blank_tag_row_is_kept_and_rejected_downstream() {
        let packages = CsvFileSource::parse(",15000,1,75\nRUN,15000,1,75\n,,\n".as_bytes()).unwrap();

        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].tag, "");
        let err = crate::usecases::read_package(&packages[0]).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidWorkoutInput(InputFault::UnknownKind(String::new()))
        );
    }

    #[test]
    fn test_reads_file() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "RUN,15000,1,75").unwrap();

        let packages = CsvFileSource::new(file.path()).packages().unwrap();

        assert_eq!(packages, vec![WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0])]);
    }
}
