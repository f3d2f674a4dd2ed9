//! Core domain types for the Pacer workout statistics system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Sensor packages as emitted by the sensor layer
//! - Workout codes and the code → variant mapping
//! - The workout variants themselves

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Step length for running and sports walking, meters
pub const STEP_LEN_M: f64 = 0.65;

/// Stroke length for swimming, meters
pub const STROKE_LEN_M: f64 = 1.38;

// ============================================================================
// Sensor Package Types
// ============================================================================

/// One reading from the sensor layer: a short workout code plus the
/// positional numeric values recorded for it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// Short wire code selecting a workout variant
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkoutCode {
    Run,
    Swm,
    Wlk,
}

impl WorkoutCode {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutCode::Run => "RUN",
            WorkoutCode::Swm => "SWM",
            WorkoutCode::Wlk => "WLK",
        }
    }

    /// Number of sensor values the matching variant is constructed from
    pub fn arity(self) -> usize {
        match self {
            WorkoutCode::Run => 3,
            WorkoutCode::Wlk => 4,
            WorkoutCode::Swm => 5,
        }
    }
}

impl FromStr for WorkoutCode {
    type Err = Error;

    /// Codes are exact and case-sensitive; anything else is a dispatch miss,
    /// never a default variant.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "RUN" => Ok(WorkoutCode::Run),
            "SWM" => Ok(WorkoutCode::Swm),
            "WLK" => Ok(WorkoutCode::Wlk),
            _ => Err(Error::UnknownWorkoutCode(s.to_string())),
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Workout Variants
// ============================================================================

/// A normalized workout record.
///
/// Every variant carries its own calorie formula (see `metrics`), so the
/// "unimplemented calorie computation" fault of a base-class design is
/// unrepresentable here.
#[derive(Clone, Debug, PartialEq)]
pub enum Workout {
    Running {
        action: u32,
        duration_h: f64,
        weight_kg: f64,
    },
    SportsWalking {
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    },
    Swimming {
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        length_pool_m: f64,
        count_pool: u32,
    },
}

impl Workout {
    /// Display name used in rendered summaries
    pub fn name(&self) -> &'static str {
        match self {
            Workout::Running { .. } => "Running",
            Workout::SportsWalking { .. } => "SportsWalking",
            Workout::Swimming { .. } => "Swimming",
        }
    }

    /// Wire code this variant is dispatched from
    pub fn code(&self) -> WorkoutCode {
        match self {
            Workout::Running { .. } => WorkoutCode::Run,
            Workout::SportsWalking { .. } => WorkoutCode::Wlk,
            Workout::Swimming { .. } => WorkoutCode::Swm,
        }
    }

    /// Action count: steps for running and walking, strokes for swimming
    pub fn action(&self) -> u32 {
        match self {
            Workout::Running { action, .. }
            | Workout::SportsWalking { action, .. }
            | Workout::Swimming { action, .. } => *action,
        }
    }

    /// Workout duration, hours (positive per the dispatch boundary)
    pub fn duration_h(&self) -> f64 {
        match self {
            Workout::Running { duration_h, .. }
            | Workout::SportsWalking { duration_h, .. }
            | Workout::Swimming { duration_h, .. } => *duration_h,
        }
    }

    /// Athlete weight, kilograms (positive per the dispatch boundary)
    pub fn weight_kg(&self) -> f64 {
        match self {
            Workout::Running { weight_kg, .. }
            | Workout::SportsWalking { weight_kg, .. }
            | Workout::Swimming { weight_kg, .. } => *weight_kg,
        }
    }

    /// Distance covered by one action, meters
    pub fn step_len_m(&self) -> f64 {
        match self {
            Workout::Swimming { .. } => STROKE_LEN_M,
            _ => STEP_LEN_M,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_parse_known() {
        assert_eq!("RUN".parse::<WorkoutCode>().unwrap(), WorkoutCode::Run);
        assert_eq!("SWM".parse::<WorkoutCode>().unwrap(), WorkoutCode::Swm);
        assert_eq!("WLK".parse::<WorkoutCode>().unwrap(), WorkoutCode::Wlk);
    }

    #[test]
    fn test_code_parse_unknown_fails() {
        let err = "FLY".parse::<WorkoutCode>().unwrap_err();
        assert!(matches!(err, Error::UnknownWorkoutCode(ref c) if c == "FLY"));
    }

    #[test]
    fn test_code_parse_is_case_sensitive() {
        assert!("run".parse::<WorkoutCode>().is_err());
    }

    #[test]
    fn test_code_display_roundtrip() {
        for code in [WorkoutCode::Run, WorkoutCode::Swm, WorkoutCode::Wlk] {
            assert_eq!(code.to_string().parse::<WorkoutCode>().unwrap(), code);
        }
    }

    #[test]
    fn test_variant_names() {
        let running = Workout::Running {
            action: 1,
            duration_h: 1.0,
            weight_kg: 70.0,
        };
        assert_eq!(running.name(), "Running");
        assert_eq!(running.code(), WorkoutCode::Run);
    }

    #[test]
    fn test_step_len_per_variant() {
        let walking = Workout::SportsWalking {
            action: 1,
            duration_h: 1.0,
            weight_kg: 70.0,
            height_cm: 175.0,
        };
        let swimming = Workout::Swimming {
            action: 1,
            duration_h: 1.0,
            weight_kg: 70.0,
            length_pool_m: 25.0,
            count_pool: 10,
        };
        assert_eq!(walking.step_len_m(), STEP_LEN_M);
        assert_eq!(swimming.step_len_m(), STROKE_LEN_M);
    }
}
