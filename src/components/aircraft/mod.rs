mod config;
mod loader;

pub use config::{AircraftConfig, AutopilotConfig, EngineConfig, SurfaceConfig};
pub use loader::ConfigError;
