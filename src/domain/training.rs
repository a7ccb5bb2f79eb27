//! Distance, speed and calorie formulas.
//!
//! Running and walking share the step-based distance/speed; swimming overrides
//! mean speed with the pool-based figure and has its own stroke length.

use super::entities::{Summary, WorkoutDetail, WorkoutKind, WorkoutRecord};

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;

/// Step length for running and walking, meters.
const STEP_LEN_M: f64 = 0.65;

mod running {
    pub const MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const MEAN_SPEED_OFFSET: f64 = 20.0;
}

mod walking {
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const MEAN_SPEED_MULTIPLIER: f64 = 0.029;
}

mod swimming {
    /// Stroke length, meters.
    pub const STROKE_LEN_M: f64 = 1.38;
    pub const MEAN_SPEED_OFFSET: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

impl WorkoutRecord {
    fn unit_length_m(&self) -> f64 {
        match self.detail {
            WorkoutDetail::Swimming { .. } => swimming::STROKE_LEN_M,
            _ => STEP_LEN_M,
        }
    }

    /// Distance covered by base units (steps or strokes), km.
    pub fn distance_km(&self) -> f64 {
        self.base_units as f64 * self.unit_length_m() / M_IN_KM
    }

    /// Mean speed, km/h. Swimming uses pool length × laps, not strokes.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self.detail {
            WorkoutDetail::Swimming {
                pool_length_m,
                pool_laps,
            } => pool_length_m * pool_laps as f64 / M_IN_KM / self.duration_hours,
            _ => self.distance_km() / self.duration_hours,
        }
    }

    pub fn calories_kcal(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        match self.detail {
            WorkoutDetail::Running => {
                (running::MEAN_SPEED_MULTIPLIER * speed - running::MEAN_SPEED_OFFSET)
                    * self.weight_kg
                    / M_IN_KM
                    * self.duration_hours
                    * MIN_IN_H
            }
            WorkoutDetail::Walking { height_cm } => {
                // Floor division is part of the formula, not a rounding step.
                let speed_grade = speed.powi(2).div_euclid(height_cm);
                (walking::WEIGHT_MULTIPLIER * self.weight_kg
                    + speed_grade * walking::MEAN_SPEED_MULTIPLIER * self.weight_kg)
                    * self.duration_hours
                    * MIN_IN_H
            }
            WorkoutDetail::Swimming { .. } => {
                (speed + swimming::MEAN_SPEED_OFFSET)
                    * swimming::WEIGHT_MULTIPLIER
                    * self.weight_kg
            }
        }
    }

    pub fn summary(&self) -> Summary {
        let kind: WorkoutKind = self.kind();
        Summary {
            kind_label: kind.label().to_string(),
            duration_hours: self.duration_hours,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: WorkoutKind, params: &[f64]) -> WorkoutRecord {
        WorkoutRecord::from_params(kind, params).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_swimming_reference_values() {
        let rec = record(WorkoutKind::Swimming, &[720.0, 1.0, 80.0, 25.0, 40.0]);
        assert!(approx(rec.distance_km(), 0.9936));
        assert!(approx(rec.mean_speed_kmh(), 1.0));
        assert!(approx(rec.calories_kcal(), 336.0));
    }

    #[test]
    fn test_swimming_distance_is_independent_of_laps() {
        let a = record(WorkoutKind::Swimming, &[720.0, 1.0, 80.0, 25.0, 40.0]);
        let b = record(WorkoutKind::Swimming, &[720.0, 1.0, 80.0, 50.0, 10.0]);
        assert_eq!(a.distance_km(), b.distance_km());
        assert!(approx(b.mean_speed_kmh(), 0.5));
    }

    #[test]
    fn test_running_reference_values() {
        let rec = record(WorkoutKind::Running, &[15000.0, 1.0, 75.0]);
        assert!(approx(rec.distance_km(), 9.75));
        assert!(approx(rec.mean_speed_kmh(), 9.75));
        assert!(approx(rec.calories_kcal(), 699.75));
    }

    #[test]
    fn test_running_calories_are_deterministic() {
        let a = record(WorkoutKind::Running, &[15000.0, 1.0, 75.0]).calories_kcal();
        let b = record(WorkoutKind::Running, &[15000.0, 1.0, 75.0]).calories_kcal();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_walking_reference_values() {
        let rec = record(WorkoutKind::Walking, &[9000.0, 1.0, 75.0, 180.0]);
        assert!(approx(rec.distance_km(), 5.85));
        assert!(approx(rec.mean_speed_kmh(), 5.85));
        // floor(34.2225 / 180) == 0, only the weight term remains
        assert!(approx(rec.calories_kcal(), 157.5));
    }

    #[test]
    fn test_walking_floor_division_steps() {
        // 2 hours, 40000 steps: 26 km, 13 km/h, 169 / 100 floors to 1
        let rec = record(WorkoutKind::Walking, &[40000.0, 2.0, 70.0, 100.0]);
        assert!(approx(rec.mean_speed_kmh(), 13.0));
        let expected = (0.035 * 70.0 + 1.0 * 0.029 * 70.0) * 2.0 * 60.0;
        assert!(approx(rec.calories_kcal(), expected));
    }

    #[test]
    fn test_summary_carries_label_and_full_precision() {
        let summary = record(WorkoutKind::Walking, &[9000.0, 1.0, 75.0, 180.0]).summary();
        assert_eq!(summary.kind_label, "SportsWalking");
        assert_eq!(summary.duration_hours, 1.0);
        assert!(approx(summary.calories_kcal, 157.5));
    }
}
