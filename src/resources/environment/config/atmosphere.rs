use serde::{Deserialize, Serialize};

use crate::utils::{DEFAULT_SCALE_HEIGHT, ISA_SEA_LEVEL_DENSITY};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AtmosphereConfig {
    pub model_type: AtmosphereType,
    /// World z of the zero-altitude datum [m]
    pub sea_level_z: f64,
    /// Reference density for the constant and exponential models [kg/m^3]
    pub sea_level_density: f64,
    /// Exponential model scale height [m], non-positive disables the decay
    pub scale_height: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtmosphereType {
    Constant,
    Exponential,
    #[default]
    IsaTroposphere,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            model_type: AtmosphereType::IsaTroposphere,
            sea_level_z: 0.0,
            sea_level_density: ISA_SEA_LEVEL_DENSITY,
            scale_height: DEFAULT_SCALE_HEIGHT,
        }
    }
}

impl AtmosphereConfig {
    pub fn constant(density: f64) -> Self {
        Self {
            model_type: AtmosphereType::Constant,
            sea_level_density: density,
            ..Default::default()
        }
    }

    pub fn exponential(sea_level_density: f64, scale_height: f64) -> Self {
        Self {
            model_type: AtmosphereType::Exponential,
            sea_level_density,
            scale_height,
            ..Default::default()
        }
    }
}
