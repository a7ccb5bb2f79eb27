//! Summary line rendering.
//!
//! Numbers go through `{:.3}`: the exact binary value is rounded to three
//! fractional digits, ties to even.

use super::entities::Summary;
use std::fmt;

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
            self.kind_label,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal,
        )
    }
}

impl Summary {
    pub fn message(&self) -> String {
        self.to_string()
    }
}
