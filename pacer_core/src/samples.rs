//! Built-in sample sensor packages.
//!
//! These mirror the readings the sensor layer emits during a demo run and
//! double as a template for user-supplied package files.

use crate::types::SensorPackage;
use once_cell::sync::Lazy;

/// Cached sample set - built once and reused across all operations
static SAMPLE_PACKAGES: Lazy<Vec<SensorPackage>> = Lazy::new(build_sample_packages);

/// Get a reference to the cached built-in sample packages
pub fn sample_packages() -> &'static [SensorPackage] {
    &SAMPLE_PACKAGES
}

fn build_sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
