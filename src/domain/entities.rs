//! Domain entities. Pure data structures for the core business.
//!
//! No file/terminal types here. Adapters map their input into `WorkoutPackage`.

use super::errors::{DomainError, InputFault};
use std::fmt;
use std::str::FromStr;

/// Closed set of supported activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    Walking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::Walking,
    ];

    /// Sensor tag identifying this kind in raw packages.
    pub const fn tag(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::Walking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Human-facing name used in summaries.
    pub const fn label(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Walking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Positional parameter names, in package order.
    pub const fn param_names(self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Running => &["steps", "duration_hours", "weight_kg"],
            WorkoutKind::Walking => &["steps", "duration_hours", "weight_kg", "height_cm"],
            WorkoutKind::Swimming => &[
                "strokes",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_laps",
            ],
        }
    }

    pub const fn arity(self) -> usize {
        self.param_names().len()
    }
}

impl FromStr for WorkoutKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUN" => Ok(WorkoutKind::Running),
            "WLK" => Ok(WorkoutKind::Walking),
            "SWM" => Ok(WorkoutKind::Swimming),
            other => Err(InputFault::UnknownKind(other.to_string()).into()),
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw input: a sensor tag plus its ordered numeric readings.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutPackage {
    pub tag: String,
    pub params: Vec<f64>,
}

impl WorkoutPackage {
    pub fn new(tag: impl Into<String>, params: impl Into<Vec<f64>>) -> Self {
        Self {
            tag: tag.into(),
            params: params.into(),
        }
    }
}

/// Variant-specific readings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutDetail {
    Running,
    Walking { height_cm: f64 },
    Swimming { pool_length_m: f64, pool_laps: u64 },
}

/// One validated workout. Built once from a package, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutRecord {
    /// Steps for running/walking, strokes for swimming.
    pub base_units: u64,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub detail: WorkoutDetail,
}

impl WorkoutRecord {
    /// Bind `params` positionally to the fields of `kind`.
    ///
    /// Fails with `InvalidWorkoutInput` on an arity mismatch, on non-positive
    /// duration/weight/height/pool length, or on counts that are not
    /// non-negative integers.
    pub fn from_params(kind: WorkoutKind, params: &[f64]) -> Result<Self, DomainError> {
        if params.len() != kind.arity() {
            return Err(InputFault::Arity {
                tag: kind.tag(),
                expected: kind.arity(),
                got: params.len(),
            }
            .into());
        }

        let base_units = count(kind.param_names()[0], params[0])?;
        let duration_hours = positive("duration_hours", params[1])?;
        let weight_kg = positive("weight_kg", params[2])?;
        let detail = match kind {
            WorkoutKind::Running => WorkoutDetail::Running,
            WorkoutKind::Walking => WorkoutDetail::Walking {
                height_cm: positive("height_cm", params[3])?,
            },
            WorkoutKind::Swimming => WorkoutDetail::Swimming {
                pool_length_m: positive("pool_length_m", params[3])?,
                pool_laps: count("pool_laps", params[4])?,
            },
        };

        Ok(Self {
            base_units,
            duration_hours,
            weight_kg,
            detail,
        })
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.detail {
            WorkoutDetail::Running => WorkoutKind::Running,
            WorkoutDetail::Walking { .. } => WorkoutKind::Walking,
            WorkoutDetail::Swimming { .. } => WorkoutKind::Swimming,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, InputFault> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(InputFault::OutOfRange { field, value })
    }
}

fn count(field: &'static str, value: f64) -> Result<u64, InputFault> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(InputFault::OutOfRange { field, value })
    }
}

/// Derived statistics for one workout, full precision.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub kind_label: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

/// Result of one batch or interactive session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub processed: usize,
    pub failed: usize,
}
