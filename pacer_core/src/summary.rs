//! Rendering of computed workout summaries.

use crate::types::Workout;
use std::fmt;

/// Immutable snapshot of one workout's computed metrics.
///
/// Produced on demand by [`Workout::summary`]; never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub workout_name: &'static str,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl Workout {
    /// Compute all metrics and bundle them with the variant display name.
    pub fn summary(&self) -> Summary {
        let summary = Summary {
            workout_name: self.name(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories(),
        };
        tracing::debug!(
            "Computed {} summary: {:.3} km in {:.3} h",
            summary.workout_name,
            summary.distance_km,
            summary.duration_h
        );
        summary
    }
}

impl fmt::Display for Summary {
    /// Fixed template; every metric at exactly 3 decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout_name,
            self.duration_h,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}
