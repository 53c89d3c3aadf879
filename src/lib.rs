//! # rig-config
//!
//! Typed configuration schema and loader for stepper-motor plotter rigs.
//!
//! ## Features
//!
//! - **Typed schema**: channel maps, calibration factors, and stepping
//!   parameters land in a plain immutable struct, not a generic map, so
//!   schema violations are caught at load time
//! - **Strict validation**: channels range-checked against the driver
//!   board, calibration factors required positive, delays non-negative
//! - **no_std compatible**: configuration types and validation work without
//!   the standard library; file I/O and TOML parsing are `std`-gated
//! - **Fail-closed**: a bad document yields a typed error and no partial
//!   configuration, so a consumer never drives motors on guessed values
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rig_config::{load_config, RigConfig};
//!
//! // Load and validate the rig configuration
//! let config: RigConfig = rig_config::load_config("config/rig.toml")?;
//!
//! // Resolve a motor's driver channel
//! let channel = config.channel("x_left").expect("x_left not wired");
//!
//! // Translate millimetres into microsteps for the X axis
//! let cal = config.steps_per_mm("steps_per_mm_x").unwrap();
//! let steps = cal.steps_for(12.5);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//!
//! ## What this crate does not do
//!
//! No motion planning, step-pulse timing, or hardware I/O lives here: the
//! crate is the contract between a configuration file and an external
//! motor-driver program.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;

// Re-exports for ergonomic API
pub use config::{validate_config, Calibration, MotorMap, RigConfig, StepStyle};
pub use error::{ConfigError, Result, SchemaError};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Channel, Seconds, StepsPerMm};
