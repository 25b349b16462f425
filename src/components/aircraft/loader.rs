use std::path::Path;
use thiserror::Error;

use super::config::AircraftConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

impl AircraftConfig {
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let config: AircraftConfig = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_yaml(&source)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for surface in &self.surfaces {
            let positive = |value: f64| value.is_finite() && value > 0.0;
            if !positive(surface.chord) || !positive(surface.span) {
                return Err(ConfigError::ValidationError(format!(
                    "surface '{}' needs positive chord and span",
                    surface.name
                )));
            }
            let axes_ok = surface.chord_axis.iter().chain(surface.span_axis.iter()).all(|v| v.is_finite())
                && surface.chord_axis.cross(&surface.span_axis).norm() > 1e-6;
            if !axes_ok {
                return Err(ConfigError::ValidationError(format!(
                    "surface '{}' needs non-zero, non-parallel chord and span axes",
                    surface.name
                )));
            }
            let scalars = [
                surface.incidence,
                surface.max_deflection,
                surface.input_multiplier,
                surface.lift_multiplier,
                surface.drag_multiplier,
            ];
            if scalars.iter().any(|v| !v.is_finite())
                || surface.aero_center.iter().any(|v| !v.is_finite())
            {
                return Err(ConfigError::ValidationError(format!(
                    "surface '{}' has non-finite parameters",
                    surface.name
                )));
            }
        }

        if let Some(engine) = &self.engine {
            if !(engine.max_thrust.is_finite() && engine.max_thrust >= 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "engine max thrust must be non-negative, got {}",
                    engine.max_thrust
                )));
            }
            if engine.thrust_axis.norm() <= 1e-6 {
                return Err(ConfigError::ValidationError(
                    "engine thrust axis must be non-zero".to_string(),
                ));
            }
        }

        if let Some(autopilot) = &self.autopilot {
            if !(autopilot.mission.arrival_radius.is_finite() && autopilot.mission.arrival_radius >= 0.0) {
                return Err(ConfigError::ValidationError(
                    "autopilot arrival radius must be non-negative".to_string(),
                ));
            }
        }
        Ok(())
    }
}
