//! Unit tests for configuration validation.

use proptest::prelude::*;
use rig_config::{parse_config, Channel, ConfigError, SchemaError, StepsPerMm};

fn document_with(motor_channel: i64, calibration: f64, step_delay: f64) -> String {
    format!(
        r#"
step_style = "MICROSTEP"
step_delay = {step_delay}

[motors]
x_left = {motor_channel}

[calibration]
steps_per_mm_x = {calibration}
"#
    )
}

/// Channel 5 exceeds the driver board's four outputs.
#[test]
fn test_channel_above_range_rejected() {
    let result = parse_config(&document_with(5, 80.0, 0.01));
    assert!(matches!(result, Err(ConfigError::SchemaError(_))));
}

/// Channel 0 is below the board's range.
#[test]
fn test_channel_zero_rejected() {
    let result = parse_config(&document_with(0, 80.0, 0.01));
    assert!(matches!(result, Err(ConfigError::SchemaError(_))));
}

/// Negative calibration would reverse every move silently; reject it.
#[test]
fn test_negative_calibration_rejected() {
    let result = parse_config(&document_with(1, -10.0, 0.01));
    assert!(matches!(
        result,
        Err(ConfigError::SchemaError(
            SchemaError::NonPositiveCalibration { .. }
        ))
    ));
}

/// Zero calibration maps every distance to zero steps; reject it.
#[test]
fn test_zero_calibration_rejected() {
    let result = parse_config(&document_with(1, 0.0, 0.01));
    assert!(matches!(
        result,
        Err(ConfigError::SchemaError(
            SchemaError::NonPositiveCalibration { .. }
        ))
    ));
}

/// Negative step delay has no physical meaning.
#[test]
fn test_negative_step_delay_rejected() {
    let result = parse_config(&document_with(1, 80.0, -0.01));
    assert!(matches!(
        result,
        Err(ConfigError::SchemaError(SchemaError::NegativeStepDelay(_)))
    ));
}

/// Zero delay is valid: the driver steps as fast as it can.
#[test]
fn test_zero_step_delay_accepted() {
    let config = parse_config(&document_with(1, 80.0, 0.0)).unwrap();
    assert_eq!(config.step_delay.value(), 0.0);
}

proptest! {
    /// Every channel in 1-4 constructs; everything else fails.
    #[test]
    fn prop_channel_range(value in any::<u8>()) {
        let result = Channel::new(value);
        if (Channel::MIN..=Channel::MAX).contains(&value) {
            prop_assert_eq!(result.unwrap().value(), value);
        } else {
            prop_assert_eq!(result, Err(SchemaError::ChannelOutOfRange(value)));
        }
    }

    /// Any in-range channel in a document loads back as the same number.
    #[test]
    fn prop_in_range_channel_round_trips(channel in 1i64..=4) {
        let config = parse_config(&document_with(channel, 80.0, 0.01)).unwrap();
        prop_assert_eq!(config.channel("x_left").unwrap().value() as i64, channel);
    }

    /// Positive finite calibration factors always validate.
    #[test]
    fn prop_positive_calibration_accepted(factor in 0.001f64..10_000.0) {
        let config = parse_config(&document_with(1, factor, 0.01)).unwrap();
        let loaded = config.steps_per_mm("steps_per_mm_x").unwrap();
        prop_assert!(loaded.value() > 0.0);
    }

    /// Non-positive calibration factors never validate.
    #[test]
    fn prop_non_positive_calibration_rejected(factor in -10_000.0f64..=0.0) {
        let result = parse_config(&document_with(1, factor, 0.01));
        // Hoisted out of `prop_assert!` so its message formatting does not
        // treat the `{ .. }` pattern braces as format placeholders.
        let rejected = matches!(
            result,
            Err(ConfigError::SchemaError(
                SchemaError::NonPositiveCalibration { .. }
            ))
        );
        prop_assert!(rejected);
    }

    /// Non-negative delays always validate.
    #[test]
    fn prop_non_negative_step_delay_accepted(delay in 0.0f64..1.0) {
        let result = parse_config(&document_with(1, 80.0, delay));
        prop_assert!(result.is_ok());
    }

    /// Negative delays never validate.
    #[test]
    fn prop_negative_step_delay_rejected(delay in -10.0f64..=-0.001) {
        let result = parse_config(&document_with(1, 80.0, delay));
        prop_assert!(matches!(
            result,
            Err(ConfigError::SchemaError(SchemaError::NegativeStepDelay(_)))
        ));
    }

    /// Conversion to steps scales linearly with whole millimetres.
    #[test]
    fn prop_steps_for_whole_millimetres(mm in -1_000i32..=1_000) {
        let cal = StepsPerMm::new(80.0);
        prop_assert_eq!(cal.steps_for(mm as f32), i64::from(mm) * 80);
    }
}
