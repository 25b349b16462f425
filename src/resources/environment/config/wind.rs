use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Wind is the sum of a steady base vector, a periodic gust and coherent turbulence.
/// A non-positive amplitude switches the corresponding term off.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindConfig {
    /// Steady wind in world frame [m/s]
    pub base: Vector3<f64>,
    /// Gust magnitude [m/s]
    pub gust_amplitude: f64,
    /// Base gust frequency [Hz]
    pub gust_frequency: f64,
    /// Turbulence magnitude [m/s]
    pub turbulence_amplitude: f64,
    /// Length over which the turbulence field decorrelates [m]
    pub turbulence_spatial_scale: f64,
    /// Rate at which the turbulence field evolves, non-positive freezes it in time
    pub turbulence_time_scale: f64,
    pub turbulence_seed: u32,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            base: Vector3::zeros(),
            gust_amplitude: 0.0,
            gust_frequency: 0.2,
            turbulence_amplitude: 0.0,
            turbulence_spatial_scale: 50.0,
            turbulence_time_scale: 1.0,
            turbulence_seed: 0,
        }
    }
}

impl WindConfig {
    pub fn calm() -> Self {
        Self::default()
    }

    /// Steady wind blowing towards `bearing` degrees (0 = +y/north, 90 = +x/east).
    pub fn constant(speed: f64, bearing: f64) -> Self {
        let angle_rad = bearing.to_radians();
        Self {
            base: Vector3::new(speed * angle_rad.sin(), speed * angle_rad.cos(), 0.0),
            ..Default::default()
        }
    }

    pub fn with_gust(mut self, amplitude: f64, frequency: f64) -> Self {
        self.gust_amplitude = amplitude;
        self.gust_frequency = frequency;
        self
    }

    pub fn with_turbulence(mut self, amplitude: f64, spatial_scale: f64, time_scale: f64) -> Self {
        self.turbulence_amplitude = amplitude;
        self.turbulence_spatial_scale = spatial_scale;
        self.turbulence_time_scale = time_scale;
        self
    }
}
