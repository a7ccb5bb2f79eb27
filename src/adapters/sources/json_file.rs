//! Implements PackageSource for a JSON file.
//!
//! Accepts an array of `["RUN", [15000, 1, 75]]` tuples and/or
//! `{"kind": "RUN", "data": [15000, 1, 75]}` objects.

use crate::domain::{DomainError, WorkoutPackage};
use crate::ports::PackageSource;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPackage {
    Tuple(String, Vec<f64>),
    Object {
        #[serde(alias = "tag", alias = "workout_type")]
        kind: String,
        #[serde(alias = "params")]
        data: Vec<f64>,
    },
}

impl From<RawPackage> for WorkoutPackage {
    fn from(raw: RawPackage) -> Self {
        match raw {
            RawPackage::Tuple(tag, params) => WorkoutPackage { tag, params },
            RawPackage::Object { kind, data } => WorkoutPackage {
                tag: kind,
                params: data,
            },
        }
    }
}

pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn parse(s: &str) -> Result<Vec<WorkoutPackage>, DomainError> {
        let raw: Vec<RawPackage> = serde_json::from_str(s)
            .map_err(|e| DomainError::Source(format!("invalid JSON: {}", e)))?;
        Ok(raw.into_iter().map(WorkoutPackage::from).collect())
    }
}

impl PackageSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn packages(&self) -> Result<Vec<WorkoutPackage>, DomainError> {
        let s = std::fs::read_to_string(&self.path).map_err(|e| {
            DomainError::Source(format!("read {}: {}", self.path.display(), e))
        })?;
        let packages = Self::parse(&s)?;
        debug!(path = %self.path.display(), count = packages.len(), "loaded JSON packages");
        Ok(packages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_tuples_and_objects() {
        let packages = JsonFileSource::parse(
            r#"[
                ["SWM", [720, 1, 80, 25, 40]],
                {"kind": "RUN", "data": [15000, 1, 75]},
                {"workout_type": "WLK", "params": [9000, 1, 75, 180]}
            ]"#,
        )
        .unwrap();

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
    fn test_non_numeric_param_is_source_error() {
        let err = JsonFileSource::parse(r#"[["RUN", [15000, "one", 75]]]"#).unwrap_err();
        assert!(matches!(err, DomainError::Source(_)));
    }

    #[test]
    fn test_reads_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[["RUN", [15000, 1, 75]], ["RN", [1]]]"#).unwrap();

        let packages = JsonFileSource::new(file.path()).packages().unwrap();

        assert_eq!(packages.len(), 2);
        assert_eq!(packages[1].tag, "RN");
    }

    #[test]
    fn test_missing_file() {
        let err = JsonFileSource::new("/nonexistent/workouts.json")
            .packages()
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/workouts.json"));
    }
}
