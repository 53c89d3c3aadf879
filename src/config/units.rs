//! Unit types for rig configuration values.
//!
//! Provides type-safe representations of driver channels, axis calibration
//! factors, and step delays to prevent unit confusion at compile time.

use serde::Deserialize;

use crate::error::SchemaError;

/// Physical motor-driver output channel (1-4).
///
/// Validated at construction against the driver board's four stepper outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Channel(u8);

impl Channel {
    /// Lowest channel on the driver board.
    pub const MIN: u8 = 1;
    /// Highest channel on the driver board.
    pub const MAX: u8 = 4;

    /// Create a new Channel value with validation.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ChannelOutOfRange` if the value is not in 1-4.
    pub fn new(value: u8) -> Result<Self, SchemaError> {
        if Self::is_valid(value) {
            Ok(Self(value))
        } else {
            Err(SchemaError::ChannelOutOfRange(value))
        }
    }

    /// Get the raw channel number.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if a value is a valid channel number.
    #[inline]
    pub const fn is_valid(value: u8) -> bool {
        value >= Self::MIN && value <= Self::MAX
    }
}

impl TryFrom<u8> for Channel {
    type Error = SchemaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Channel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let value = u8::deserialize(deserializer)?;
        Channel::new(value).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}

/// Axis calibration factor in microsteps per millimetre of travel.
///
/// Must be positive; checked by [`validate_config`](crate::validate_config)
/// rather than at deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct StepsPerMm(pub f32);

impl StepsPerMm {
    /// Create a new StepsPerMm value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert a millimetre distance into a signed microstep count,
    /// rounded to the nearest whole step.
    #[inline]
    pub fn steps_for(self, mm: f32) -> i64 {
        libm::roundf(mm * self.0) as i64
    }
}

/// Delay between microstep pulses, in seconds.
///
/// Must be non-negative; checked by [`validate_config`](crate::validate_config).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Seconds(pub f32);

impl Seconds {
    /// Create a new Seconds value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}
