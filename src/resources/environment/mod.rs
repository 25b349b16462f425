mod config;
mod environment;

pub use config::{AtmosphereConfig, AtmosphereType, EnvironmentConfig, WindConfig};
pub use environment::{
    atmosphere_properties, AirSample, AirSampler, AtmosphereProperties, EnvironmentModel,
};
