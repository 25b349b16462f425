mod air_data;
mod surface_forces;

pub use air_data::{air_data_system, calculate_air_data};
pub use surface_forces::{
    aero_surface_force_system, compute_surface_force, SurfaceForceModel, SurfaceState,
};
