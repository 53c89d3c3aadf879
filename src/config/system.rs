//! Rig configuration - root configuration structure.

use serde::Deserialize;

use super::calibration::Calibration;
use super::motors::MotorMap;
use super::stepping::StepStyle;
use super::units::{Channel, Seconds, StepsPerMm};

/// Root configuration structure from TOML.
///
/// All four keys are required: a document missing any of them is a schema
/// error. The value is immutable once constructed and safe to share
/// read-only across threads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RigConfig {
    /// Motor name to driver channel assignments.
    pub motors: MotorMap,

    /// Axis calibration factors.
    pub calibration: Calibration,

    /// Stepping waveform mode for all motors.
    pub step_style: StepStyle,

    /// Delay between microstep pulses in seconds.
    pub step_delay: Seconds,
}

impl RigConfig {
    /// Get the channel assigned to a motor by name.
    pub fn channel(&self, motor: &str) -> Option<Channel> {
        self.motors.channel(motor)
    }

    /// Get the calibration factor for an axis key.
    pub fn steps_per_mm(&self, axis: &str) -> Option<StepsPerMm> {
        self.calibration.steps_per_mm(axis)
    }

    /// List all motor names.
    pub fn motor_names(&self) -> impl Iterator<Item = &str> {
        self.motors.names()
    }

    /// List all calibrated axis keys.
    pub fn axis_keys(&self) -> impl Iterator<Item = &str> {
        self.calibration.axes()
    }
}
