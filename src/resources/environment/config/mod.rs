mod atmosphere;
mod wind;

pub use atmosphere::{AtmosphereConfig, AtmosphereType};
pub use wind::WindConfig;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::ConfigError;

#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub atmosphere: AtmosphereConfig,
    pub wind: WindConfig,
}

impl EnvironmentConfig {
    pub fn new(atmosphere: AtmosphereConfig, wind: WindConfig) -> Self {
        Self { atmosphere, wind }
    }

    pub fn with_constant_wind(wind_speed: f64, wind_direction: f64) -> Self {
        Self {
            wind: WindConfig::constant(wind_speed, wind_direction),
            atmosphere: AtmosphereConfig::default(),
        }
    }

    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_yaml(&source)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let atmosphere = &self.atmosphere;
        if !(atmosphere.sea_level_density.is_finite() && atmosphere.sea_level_density > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "sea level density must be positive, got {}",
                atmosphere.sea_level_density
            )));
        }
        let wind = &self.wind;
        let scalars = [
            wind.gust_amplitude,
            wind.gust_frequency,
            wind.turbulence_amplitude,
            wind.turbulence_spatial_scale,
            wind.turbulence_time_scale,
            atmosphere.scale_height,
            atmosphere.sea_level_z,
        ];
        if scalars.iter().any(|v| !v.is_finite()) || wind.base.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::ValidationError(
                "environment parameters must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
