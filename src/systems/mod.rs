pub mod aerodynamics;
pub mod control;
pub mod physics;
pub mod propulsion;

pub use aerodynamics::{
    aero_surface_force_system, air_data_system, calculate_air_data, compute_surface_force,
    SurfaceForceModel, SurfaceState,
};
pub use control::{apply_mixer, autopilot_system, control_mixer_system, mix, LastAutopilotMode};
pub use physics::{force_calculator_system, sum_forces};
pub use propulsion::engine_thrust_system;
