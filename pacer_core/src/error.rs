//! Error types for the pacer_core library.

use crate::types::WorkoutCode;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for pacer_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Sensor package named a code with no matching workout variant
    #[error("unknown workout type: {0}")]
    UnknownWorkoutCode(String),

    /// Sensor package carried the wrong number of values for its code
    #[error("invalid arguments for {code}: expected {expected} values, got {got}")]
    InvalidArguments {
        code: WorkoutCode,
        expected: usize,
        got: usize,
    },

    /// Sensor package carried a value outside the field's valid range
    #[error("invalid {field} value: {value}")]
    InvalidValue { field: &'static str, value: f64 },
}
