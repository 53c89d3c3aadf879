//! Configuration validation.

use crate::error::{Result, SchemaError};

use super::RigConfig;

/// Validate a rig configuration.
///
/// Checks the invariants the type system does not already enforce:
/// - every calibration factor is positive and finite
/// - the step delay is non-negative and finite
///
/// Channel numbers need no re-check here since [`Channel`](super::units::Channel)
/// is validated at construction. An empty motor table is accepted; whether
/// the rig needs a particular motor wired is the consumer's decision.
pub fn validate_config(config: &RigConfig) -> Result<()> {
    for (axis, factor) in config.calibration.iter() {
        if !(factor.0 > 0.0 && factor.0.is_finite()) {
            return Err(SchemaError::NonPositiveCalibration {
                axis: heapless::String::try_from(axis).unwrap_or_default(),
                value: factor.0,
            }
            .into());
        }
    }

    let delay = config.step_delay.0;
    if !delay.is_finite() {
        return Err(SchemaError::NonFiniteStepDelay(delay).into());
    }
    if delay < 0.0 {
        return Err(SchemaError::NegativeStepDelay(delay).into());
    }

    Ok(())
}
