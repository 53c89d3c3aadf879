//! Motor channel map from TOML.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::units::Channel;

/// Mapping from logical motor name to driver-board channel.
///
/// Names are the identifiers the motor-driver program steps by, e.g.
/// `x_left`, `x_right`, `z_axis`. Channel numbers are not required to be
/// unique: gantry rigs commonly wire two motors to mirrored channels, and
/// whether sharing is acceptable is the consumer's concern.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct MotorMap(pub FnvIndexMap<String<32>, Channel, 8>);

impl MotorMap {
    /// Get the channel assigned to a motor, if it exists.
    pub fn channel(&self, name: &str) -> Option<Channel> {
        self.0
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| *v)
    }

    /// List all motor names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|s| s.as_str())
    }

    /// Iterate over (name, channel) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Channel)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of motors declared.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no motors are declared.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for MotorMap {
    fn default() -> Self {
        Self(FnvIndexMap::new())
    }
}
