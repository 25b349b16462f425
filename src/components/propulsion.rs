use bevy::prelude::*;
use nalgebra::{Unit, Vector3};
use serde::{Deserialize, Serialize};

/// Fixed-thrust engine: thrust scales linearly with throttle.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct EngineComponent {
    /// Thrust at full throttle [N]
    pub max_thrust: f64,
    /// Current throttle setting [0-1]
    pub throttle: f64,
    /// Mount point in body frame [m]
    pub mount: Vector3<f64>,
    /// Thrust direction in body frame
    pub thrust_axis: Unit<Vector3<f64>>,
}

impl Default for EngineComponent {
    fn default() -> Self {
        Self {
            max_thrust: 5000.0,
            throttle: 0.0,
            mount: Vector3::zeros(),
            thrust_axis: Vector3::x_axis(),
        }
    }
}

impl EngineComponent {
    pub fn new(max_thrust: f64) -> Self {
        Self {
            max_thrust,
            ..Default::default()
        }
    }

    pub fn set_throttle(&mut self, throttle: f64) {
        self.throttle = throttle.clamp(0.0, 1.0);
    }

    /// Thrust vector in body frame [N]
    pub fn thrust(&self) -> Vector3<f64> {
        self.thrust_axis.as_ref() * (self.throttle.clamp(0.0, 1.0) * self.max_thrust)
    }
}
