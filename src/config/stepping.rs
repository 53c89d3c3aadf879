//! Stepping waveform style.

use core::fmt;

use serde::Deserialize;

/// Driving waveform mode applied to a motor's coils.
///
/// The set mirrors the four styles the driver library accepts; documents use
/// the upper-case names (`"SINGLE"`, `"DOUBLE"`, `"INTERLEAVE"`,
/// `"MICROSTEP"`). Anything else is rejected at load time rather than handed
/// to the driver as an unknown string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StepStyle {
    /// One coil energized at a time (lowest torque, lowest power).
    Single,
    /// Two coils energized at a time (full torque).
    Double,
    /// Alternating single and double stepping (half steps).
    Interleave,
    /// PWM-blended coil currents for the finest position resolution.
    Microstep,
}

impl StepStyle {
    /// The name the driver library knows this style by.
    pub const fn as_str(self) -> &'static str {
        match self {
            StepStyle::Single => "SINGLE",
            StepStyle::Double => "DOUBLE",
            StepStyle::Interleave => "INTERLEAVE",
            StepStyle::Microstep => "MICROSTEP",
        }
    }
}

impl fmt::Display for StepStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
