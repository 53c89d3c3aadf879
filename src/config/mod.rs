//! Configuration module for rig-config.
//!
//! Provides types for loading and validating rig configurations from TOML
//! files (with `std` feature) or pre-parsed data.

mod calibration;
#[cfg(feature = "std")]
mod loader;
mod motors;
mod stepping;
mod system;
pub mod units;
mod validation;

pub use calibration::Calibration;
pub use motors::MotorMap;
pub use stepping::StepStyle;
pub use system::RigConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Channel, Seconds, StepsPerMm};
