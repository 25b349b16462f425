use bevy::prelude::*;
use nalgebra::Vector3;
use noise::{NoiseFn, Perlin};
use std::f64::consts::PI;

use super::config::{AtmosphereConfig, AtmosphereType, EnvironmentConfig, WindConfig};
use crate::utils::{
    AIR_GAS_CONSTANT, GRAVITY, GUST_HARMONIC_HIGH, GUST_HARMONIC_LOW, ISA_LAPSE_RATE,
    ISA_SEA_LEVEL_PRESSURE, ISA_SEA_LEVEL_TEMP, ISA_TROPOPAUSE_ALTITUDE,
    MIN_TURBULENCE_SPATIAL_SCALE, TURBULENCE_VERTICAL_DAMPING,
};

// Offsets into the noise field so the three turbulence axes stay decorrelated
const TURBULENCE_OFFSETS: [(f64, f64); 3] = [(17.1, 3.3), (9.2, 8.8), (5.7, 1.1)];

/// Air state at one point and instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirSample {
    /// Height above the sea level datum, never negative [m]
    pub altitude: f64,
    /// Air density [kg/m^3]
    pub density: f64,
    /// Static temperature [K]
    pub temperature: f64,
    /// Static pressure [Pa]
    pub pressure: f64,
    /// Local wind velocity in world frame [m/s]
    pub wind: Vector3<f64>,
}

/// Thermodynamic state from the selected atmosphere model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereProperties {
    pub density: f64,
    pub temperature: f64,
    pub pressure: f64,
}

/// Source of air samples for the surface force model.
pub trait AirSampler {
    fn sample(&self, position: &Vector3<f64>, time: f64) -> AirSample;
}

/// Atmosphere and wind for one simulated environment.
///
/// Sampling is a pure function of position, time and the configuration the
/// model was built from; several models can coexist in one process.
#[derive(Resource)]
pub struct EnvironmentModel {
    config: EnvironmentConfig,
    noise: Perlin,
}

impl EnvironmentModel {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            noise: Perlin::new(config.wind.turbulence_seed),
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    pub fn altitude(&self, position: &Vector3<f64>) -> f64 {
        (position.z - self.config.atmosphere.sea_level_z).max(0.0)
    }

    pub fn density_at_altitude(&self, altitude: f64) -> f64 {
        self.atmosphere(altitude).density
    }

    pub fn atmosphere(&self, altitude: f64) -> AtmosphereProperties {
        atmosphere_properties(&self.config.atmosphere, altitude)
    }

    pub fn wind(&self, position: &Vector3<f64>, time: f64) -> Vector3<f64> {
        let wind = &self.config.wind;
        wind.base + gust(wind, time) + self.turbulence(position, time)
    }

    fn turbulence(&self, position: &Vector3<f64>, time: f64) -> Vector3<f64> {
        let wind = &self.config.wind;
        if wind.turbulence_amplitude <= 0.0
            || wind.turbulence_spatial_scale <= MIN_TURBULENCE_SPATIAL_SCALE
        {
            return Vector3::zeros();
        }

        let inv_scale = 1.0 / wind.turbulence_spatial_scale;
        let t = time * wind.turbulence_time_scale.max(0.0);
        let coords = [position.y, position.z, position.x];

        let mut axes = [0.0; 3];
        for (axis, (coord, (space_offset, time_offset))) in axes
            .iter_mut()
            .zip(coords.iter().zip(TURBULENCE_OFFSETS.iter()))
        {
            let unit = self.unit_noise(coord * inv_scale + space_offset, t + time_offset);
            *axis = unit * 2.0 - 1.0;
        }

        Vector3::new(
            axes[0],
            axes[1],
            axes[2] * TURBULENCE_VERTICAL_DAMPING,
        ) * wind.turbulence_amplitude
    }

    /// Coherent noise remapped onto [0, 1].
    fn unit_noise(&self, x: f64, y: f64) -> f64 {
        ((self.noise.get([x, y]) + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

impl AirSampler for EnvironmentModel {
    fn sample(&self, position: &Vector3<f64>, time: f64) -> AirSample {
        let altitude = self.altitude(position);
        let properties = self.atmosphere(altitude);
        AirSample {
            altitude,
            density: properties.density,
            temperature: properties.temperature,
            pressure: properties.pressure,
            wind: self.wind(position, time),
        }
    }
}

pub fn atmosphere_properties(config: &AtmosphereConfig, altitude: f64) -> AtmosphereProperties {
    let h = altitude.max(0.0);
    match config.model_type {
        AtmosphereType::Constant => AtmosphereProperties {
            density: config.sea_level_density,
            temperature: ISA_SEA_LEVEL_TEMP,
            pressure: ISA_SEA_LEVEL_PRESSURE,
        },
        // Temperature and pressure are held at sea level; only density decays.
        AtmosphereType::Exponential => {
            let density = if config.scale_height > 0.0 {
                config.sea_level_density * (-h / config.scale_height).exp()
            } else {
                config.sea_level_density
            };
            AtmosphereProperties {
                density,
                temperature: ISA_SEA_LEVEL_TEMP,
                pressure: ISA_SEA_LEVEL_PRESSURE,
            }
        }
        AtmosphereType::IsaTroposphere => {
            // Above the tropopause the temperature stays at its capped value.
            let temperature = ISA_SEA_LEVEL_TEMP + ISA_LAPSE_RATE * h.min(ISA_TROPOPAUSE_ALTITUDE);
            let exponent = -GRAVITY / (AIR_GAS_CONSTANT * ISA_LAPSE_RATE);
            let pressure = ISA_SEA_LEVEL_PRESSURE * (temperature / ISA_SEA_LEVEL_TEMP).powf(exponent);
            AtmosphereProperties {
                density: pressure / (AIR_GAS_CONSTANT * temperature),
                temperature,
                pressure,
            }
        }
    }
}

fn gust(wind: &WindConfig, time: f64) -> Vector3<f64> {
    if wind.gust_amplitude <= 0.0 || wind.gust_frequency <= 0.0 {
        return Vector3::zeros();
    }
    let omega = 2.0 * PI * wind.gust_frequency;
    let g1 = (omega * time).sin();
    let g2 = (omega * time * GUST_HARMONIC_LOW).cos();
    let g3 = (omega * time * GUST_HARMONIC_HIGH).sin();

    let direction = Vector3::new(g1, g2 + 0.5 * g3, 0.0);
    direction
        .try_normalize(f64::EPSILON)
        .map(|dir| dir * wind.gust_amplitude)
        .unwrap_or_else(Vector3::zeros)
}
