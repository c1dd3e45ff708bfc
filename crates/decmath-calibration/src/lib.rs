//! # decmath-calibration
//!
//! Micro-benchmarks, crossover search, and persisted tuning profiles for
//! the multiplication thresholds.

pub mod calibration;
pub mod io;
pub mod microbench;
pub mod profile;
pub mod runner;

pub use calibration::{cached_or_default, CalibrationEngine};
pub use profile::TuningProfile;
