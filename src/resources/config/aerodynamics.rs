use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::DEFAULT_MIN_AIRSPEED;

/// Global tuning for the per-surface force model.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct AerodynamicsConfig {
    /// Below this relative airspeed a surface produces no force [m/s]
    pub min_airspeed_threshold: f64,
}

impl Default for AerodynamicsConfig {
    fn default() -> Self {
        Self {
            min_airspeed_threshold: DEFAULT_MIN_AIRSPEED,
        }
    }
}
