use bevy::prelude::*;

use crate::components::{AerodynamicSurface, Airframe, ControlInputs, SurfaceRole};

/// Deflection input for a surface of `role`, or `None` for surfaces the mixer never drives.
pub fn mix(role: SurfaceRole, multiplier: f64, controls: &ControlInputs) -> Option<f64> {
    match role {
        SurfaceRole::Wing => None,
        SurfaceRole::Elevator => Some(controls.pitch),
        SurfaceRole::Aileron => Some(controls.roll * multiplier),
        SurfaceRole::Rudder => Some(controls.yaw),
        SurfaceRole::Elevon => Some((controls.pitch + controls.roll * multiplier).clamp(-1.0, 1.0)),
    }
}

pub fn apply_mixer(surfaces: &mut [AerodynamicSurface], controls: &ControlInputs) {
    for surface in surfaces.iter_mut() {
        if let Some(input) = mix(surface.role, surface.input_multiplier, controls) {
            surface.set_input(input);
        }
    }
}

/// Drive every control surface from the airframe's axis commands.
pub fn control_mixer_system(mut query: Query<(&ControlInputs, &mut Airframe)>) {
    for (controls, mut airframe) in query.iter_mut() {
        apply_mixer(&mut airframe.surfaces, controls);
    }
}
