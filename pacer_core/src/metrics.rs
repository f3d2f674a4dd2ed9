//! Metric formulas for the workout variants.
//!
//! Distance and mean speed are shared by all variants (swimming overrides
//! speed to use pool geometry); each variant has its own calorie formula.
//! All three metrics are pure functions of the workout's fields.

use crate::types::{Workout, M_IN_KM};

/// Minutes in an hour, used to scale the duration-based calorie formulas
const MIN_IN_H: f64 = 60.0;

// Running calorie coefficients
const RUN_SPEED_FACTOR: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

// Sports walking calorie coefficients
const WLK_WEIGHT_FACTOR: f64 = 0.035;
const WLK_SPEED_HEIGHT_FACTOR: f64 = 0.029;

// Swimming calorie coefficients
const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_FACTOR: f64 = 2.0;

impl Workout {
    /// Distance covered over the whole workout, kilometers.
    ///
    /// Proportional to the action count; zero actions means zero distance.
    pub fn distance_km(&self) -> f64 {
        f64::from(self.action()) * self.step_len_m() / M_IN_KM
    }

    /// Mean speed over the whole workout, km/h.
    ///
    /// Swimming derives speed from pool length and lengths completed rather
    /// than from stroke count.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Swimming {
                duration_h,
                length_pool_m,
                count_pool,
                ..
            } => length_pool_m * f64::from(*count_pool) / M_IN_KM / duration_h,
            _ => self.distance_km() / self.duration_h(),
        }
    }

    /// Calories burned over the whole workout, kcal.
    pub fn spent_calories(&self) -> f64 {
        match self {
            Workout::Running {
                duration_h,
                weight_kg,
                ..
            } => {
                (RUN_SPEED_FACTOR * self.mean_speed_kmh() - RUN_SPEED_SHIFT) * weight_kg
                    / M_IN_KM
                    * duration_h
                    * MIN_IN_H
            }
            Workout::SportsWalking {
                duration_h,
                weight_kg,
                height_cm,
                ..
            } => {
                let speed = self.mean_speed_kmh();
                // The reference formula floor-divides speed^2 by height;
                // ordinary division changes the output.
                let speed_height_term = (speed * speed / height_cm).floor();
                (WLK_WEIGHT_FACTOR * weight_kg
                    + speed_height_term * WLK_SPEED_HEIGHT_FACTOR * weight_kg)
                    * duration_h
                    * MIN_IN_H
            }
            Workout::Swimming { weight_kg, .. } => {
                (self.mean_speed_kmh() + SWM_SPEED_SHIFT) * SWM_WEIGHT_FACTOR * weight_kg
            }
        }
    }
}
