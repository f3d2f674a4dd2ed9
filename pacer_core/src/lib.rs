#![forbid(unsafe_code)]

//! Core domain model and calculations for the Pacer workout statistics system.
//!
//! This crate provides:
//! - Domain types (sensor packages, workout codes, workout variants)
//! - Metric formulas (distance, mean speed, spent calories)
//! - Summary rendering
//! - Package dispatch and input validation
//! - Built-in sample packages

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod package;
pub mod samples;
pub mod summary;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use package::{read_package, read_packages_file};
pub use samples::sample_packages;
pub use summary::Summary;
