use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Normalised axis commands for one airframe, written by the pilot or the autopilot.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInputs {
    /// Pitch command [-1, 1]
    pub pitch: f64,
    /// Roll command [-1, 1]
    pub roll: f64,
    /// Yaw command [-1, 1]
    pub yaw: f64,
}

impl ControlInputs {
    pub fn new(pitch: f64, roll: f64, yaw: f64) -> Self {
        Self { pitch, roll, yaw }
    }
}
