//! Configuration for the combination entry points.

use serde::{Deserialize, Serialize};

/// What to do when the integrated null mass leaves [0, 1] beyond tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstabilityPolicy {
    /// Return `MetaError::NumericInstability`.
    #[default]
    Fail,
    /// Clamp the p-value into [0, 1] and log a warning.
    Clamp,
}

/// Configuration for `combine_with` and friends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CombineConfig {
    /// Policy for out-of-range integration results.
    pub instability: InstabilityPolicy,
    /// Excursion outside [0, 1] that is clamped silently.
    pub tolerance: f64,
}

impl Default for CombineConfig {
    fn default() -> Self {
        Self {
            instability: InstabilityPolicy::Fail,
            tolerance: 1e-9,
        }
    }
}

impl CombineConfig {
    /// Default configuration with clamping enabled.
    pub fn clamping() -> Self {
        Self {
            instability: InstabilityPolicy::Clamp,
            ..Self::default()
        }
    }
}
