//! Built-in demo batch: one package of each kind.

use crate::domain::{DomainError, WorkoutPackage};
use crate::ports::PackageSource;

pub struct BuiltinSource;

impl PackageSource for BuiltinSource {
    fn describe(&self) -> String {
        "built-in demo batch".to_string()
    }

    fn packages(&self) -> Result<Vec<WorkoutPackage>, DomainError> {
        Ok(vec![
            WorkoutPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
            WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0]),
            WorkoutPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
        ])
    }
}
