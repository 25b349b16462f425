pub mod config;
mod environment;

pub use config::AerodynamicsConfig;
pub use environment::{
    atmosphere_properties, AirSample, AirSampler, AtmosphereConfig, AtmosphereProperties,
    AtmosphereType, EnvironmentConfig, EnvironmentModel, WindConfig,
};
