//! Dispatch from raw sensor packages to workout records.
//!
//! A package is a short workout code plus the positional values recorded by
//! the sensor layer. All input validation happens here, once: the metric
//! formulas downstream assume validated fields. A package that fails
//! validation is fatal for that record and is never silently skipped.

use crate::types::{SensorPackage, Workout, WorkoutCode};
use crate::{Error, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Build a workout from one sensor package.
///
/// Fails on an unknown code, a wrong value count for the code, or values
/// outside the field's valid range (counts must be non-negative integers,
/// durations/weights/lengths strictly positive).
pub fn read_package(package: &SensorPackage) -> Result<Workout> {
    let code: WorkoutCode = package.workout_type.parse()?;

    let data = &package.data;
    if data.len() != code.arity() {
        return Err(Error::InvalidArguments {
            code,
            expected: code.arity(),
            got: data.len(),
        });
    }

    // First three values are common to every variant
    let action = count_value("action", data[0])?;
    let duration_h = positive_value("duration", data[1])?;
    let weight_kg = positive_value("weight", data[2])?;

    let workout = match code {
        WorkoutCode::Run => Workout::Running {
            action,
            duration_h,
            weight_kg,
        },
        WorkoutCode::Wlk => Workout::SportsWalking {
            action,
            duration_h,
            weight_kg,
            height_cm: positive_value("height", data[3])?,
        },
        WorkoutCode::Swm => Workout::Swimming {
            action,
            duration_h,
            weight_kg,
            length_pool_m: positive_value("length_pool", data[3])?,
            count_pool: count_value("count_pool", data[4])?,
        },
    };

    tracing::debug!("Dispatched {} package to {}", code, workout.name());
    Ok(workout)
}

/// Read a packages file: a JSON array of sensor packages, in input order.
pub fn read_packages_file(path: &Path) -> Result<Vec<SensorPackage>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let packages: Vec<SensorPackage> = serde_json::from_reader(reader)?;
    tracing::debug!("Read {} packages from {:?}", packages.len(), path);
    Ok(packages)
}

/// A count reported by the sensors: non-negative and integral
fn count_value(field: &'static str, value: f64) -> Result<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(Error::InvalidValue { field, value });
    }
    Ok(value as u32)
}

/// A physical quantity the formulas divide or multiply by: strictly positive
fn positive_value(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidValue { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_running() {
        let package = SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]);
        let workout = read_package(&package).unwrap();
        assert_eq!(
            workout,
            Workout::Running {
                action: 15000,
                duration_h: 1.0,
                weight_kg: 75.0,
            }
        );
    }

    #[test]
    fn test_dispatch_walking() {
        let package = SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]);
        let workout = read_package(&package).unwrap();
        assert_eq!(
            workout,
            Workout::SportsWalking {
                action: 9000,
                duration_h: 1.0,
                weight_kg: 75.0,
                height_cm: 180.0,
            }
        );
    }

    #[test]
    fn test_dispatch_swimming() {
        let package = SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]);
        let workout = read_package(&package).unwrap();
        assert_eq!(
            workout,
            Workout::Swimming {
                action: 720,
                duration_h: 1.0,
                weight_kg: 80.0,
                length_pool_m: 25.0,
                count_pool: 40,
            }
        );
    }

    #[test]
    fn test_unknown_code_fails() {
        let package = SensorPackage::new("FLY", vec![100.0, 1.0, 60.0]);
        let err = read_package(&package).unwrap_err();
        assert!(matches!(err, Error::UnknownWorkoutCode(ref c) if c == "FLY"));
    }

    #[test]
    fn test_wrong_arity_fails() {
        let package = SensorPackage::new("RUN", vec![15000.0, 1.0]);
        let err = read_package(&package).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidArguments {
                code: WorkoutCode::Run,
                expected: 3,
                got: 2,
            }
        ));
    }

    #[test]
    fn test_extra_values_fail() {
        let package = SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0, 5.0]);
        let err = read_package(&package).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidArguments {
                expected: 4,
                got: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_non_integral_action_fails() {
        let package = SensorPackage::new("RUN", vec![15000.5, 1.0, 75.0]);
        let err = read_package(&package).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { field: "action", .. }));
    }

    #[test]
    fn test_non_positive_duration_fails() {
        let package = SensorPackage::new("RUN", vec![15000.0, 0.0, 75.0]);
        let err = read_package(&package).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { field: "duration", .. }));
    }

    #[test]
    fn test_non_finite_weight_fails() {
        let package = SensorPackage::new("RUN", vec![15000.0, 1.0, f64::NAN]);
        assert!(read_package(&package).is_err());
    }

    #[test]
    fn test_packages_file_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("packages.json");

        let packages = vec![
            SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ];
        std::fs::write(&path, serde_json::to_string(&packages).unwrap()).unwrap();

        let loaded = read_packages_file(&path).unwrap();
        assert_eq!(loaded, packages);
    }

    #[test]
    fn test_missing_packages_file_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nonexistent.json");
        assert!(matches!(read_packages_file(&path), Err(Error::Io(_))));
    }

    #[test]
    fn test_malformed_packages_file_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("packages.json");
        std::fs::write(&path, "{ not an array }").unwrap();
        assert!(matches!(read_packages_file(&path), Err(Error::Json(_))));
    }
}
