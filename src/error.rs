//! Error types for rig-config.
//!
//! Provides the error taxonomy for configuration loading: file access,
//! document syntax, and schema violations are reported as distinct variants
//! so a consumer can tell a missing file from a bad one.

use core::fmt;

/// Result type alias using the library's error type.
pub type Result<T> = core::result::Result<T, ConfigError>;

/// Configuration loading and validation errors.
///
/// A motor-driver program must refuse to drive any motor when it receives
/// one of these: no default or partial configuration is ever produced, since
/// acting on wrong channel or calibration data can damage hardware.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Configuration file does not exist (std only).
    #[cfg(feature = "std")]
    NotFound(heapless::String<128>),
    /// File exists but could not be read (std only).
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
    /// Malformed TOML syntax.
    ParseError(heapless::String<128>),
    /// Document parsed but does not satisfy the rig schema.
    SchemaError(SchemaError),
}

/// Schema violations: well-formed documents with the wrong shape or values.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// Missing required key, wrong value type, or a leaf rejected during
    /// deserialization (carries the deserializer's message).
    Shape(heapless::String<128>),
    /// Motor channel outside the driver board's 1-4 range.
    ChannelOutOfRange(u8),
    /// Calibration factor must be a positive finite number.
    NonPositiveCalibration {
        /// Axis key, e.g. "steps_per_mm_x".
        axis: heapless::String<32>,
        /// Offending value.
        value: f32,
    },
    /// Step delay must be >= 0 seconds.
    NegativeStepDelay(f32),
    /// Step delay must be a finite number.
    NonFiniteStepDelay(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "std")]
            ConfigError::NotFound(path) => write!(f, "Configuration file not found: {}", path),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::SchemaError(e) => write!(f, "Schema error: {}", e),
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::Shape(msg) => write!(f, "{}", msg),
            SchemaError::ChannelOutOfRange(v) => {
                write!(f, "Invalid channel: {}. Valid range: 1-4", v)
            }
            SchemaError::NonPositiveCalibration { axis, value } => {
                write!(f, "Invalid calibration for '{}': {}. Must be > 0", axis, value)
            }
            SchemaError::NegativeStepDelay(v) => {
                write!(f, "Invalid step delay: {}. Must be >= 0", v)
            }
            SchemaError::NonFiniteStepDelay(v) => {
                write!(f, "Invalid step delay: {}. Must be finite", v)
            }
        }
    }
}

impl From<SchemaError> for ConfigError {
    fn from(e: SchemaError) -> Self {
        ConfigError::SchemaError(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for SchemaError {}
