//! Axis calibration table from TOML.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::units::StepsPerMm;

/// Mapping from axis key to calibration factor.
///
/// Keys follow the `steps_per_mm_<axis>` convention, e.g. `steps_per_mm_x`.
/// The motor-driver program uses these to translate requested millimetre
/// distances into microstep counts.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Calibration(pub FnvIndexMap<String<32>, StepsPerMm, 8>);

// Manual impl: the derived one needs `StepsPerMm: Eq`, which `f32` cannot
// provide. Matches `heapless::IndexMap` equality (same keys, equal values).
impl PartialEq for Calibration {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self.0.iter().all(|(k, v)| other.0.get(k) == Some(v))
    }
}

impl Calibration {
    /// Get the calibration factor for an axis key, if it exists.
    pub fn steps_per_mm(&self, axis: &str) -> Option<StepsPerMm> {
        self.0
            .iter()
            .find(|(k, _)| k.as_str() == axis)
            .map(|(_, v)| *v)
    }

    /// List all axis keys.
    pub fn axes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|s| s.as_str())
    }

    /// Iterate over (axis, factor) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, StepsPerMm)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of calibrated axes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no axes are calibrated.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self(FnvIndexMap::new())
    }
}
