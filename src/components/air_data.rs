use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{ISA_SEA_LEVEL_DENSITY, ISA_SEA_LEVEL_PRESSURE, ISA_SEA_LEVEL_TEMP};

/// Air state observed at the airframe origin on the last tick.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct AirData {
    /// Altitude above the sea level datum (m).
    pub altitude: f64,
    /// Air density (kg/m³).
    pub density: f64,
    /// Static temperature (K).
    pub temperature: f64,
    /// Static pressure (Pa).
    pub pressure: f64,
    /// Wind velocity vector in world frame (m/s).
    pub wind_velocity: Vector3<f64>,
    /// Velocity relative to the air in world frame (m/s).
    pub relative_velocity: Vector3<f64>,
    /// True airspeed of the aircraft (m/s).
    pub true_airspeed: f64,
    /// Dynamic pressure acting on the aircraft (Pa).
    pub dynamic_pressure: f64,
}

impl Default for AirData {
    /// Provides a default state for zero airspeed and no wind.
    fn default() -> Self {
        Self {
            altitude: 0.0,
            density: ISA_SEA_LEVEL_DENSITY,
            temperature: ISA_SEA_LEVEL_TEMP,
            pressure: ISA_SEA_LEVEL_PRESSURE,
            wind_velocity: Vector3::zeros(),
            relative_velocity: Vector3::zeros(),
            true_airspeed: 0.0,
            dynamic_pressure: 0.0,
        }
    }
}
