pub mod aerodynamics;
pub mod air_data;
pub mod aircraft;
pub mod autopilot;
pub mod controls;
pub mod physics;
pub mod propulsion;
pub mod spatial;

pub use aerodynamics::{
    AerodynamicCurve, AerodynamicSurface, Airframe, AirfoilProfile, AppliedForce,
    CurveInterpolation, SurfaceGeometry, SurfaceRole,
};
pub use air_data::AirData;
pub use aircraft::{AircraftConfig, AutopilotConfig, ConfigError, EngineConfig, SurfaceConfig};
pub use autopilot::{
    current_pitch, current_roll, Autopilot, AutopilotLimits, AutopilotMode, PidController,
    WaypointMission,
};
pub use controls::ControlInputs;
pub use physics::{Force, ForceCategory, PhysicsComponent};
pub use propulsion::EngineComponent;
pub use spatial::SpatialComponent;
