use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{Force, PhysicsComponent, SpatialComponent};

/// Net force and moment about `center_of_mass` (world frame) of a set of forces.
pub fn sum_forces(forces: &[Force], center_of_mass: &Vector3<f64>) -> (Vector3<f64>, Vector3<f64>) {
    forces
        .iter()
        .fold((Vector3::zeros(), Vector3::zeros()), |(force, moment), f| {
            let arm = f.point - center_of_mass;
            (force + f.vector, moment + arm.cross(&f.vector))
        })
}

/// Collapse this tick's applied forces into the totals the integrator reads.
pub fn force_calculator_system(mut query: Query<(&mut PhysicsComponent, &SpatialComponent)>) {
    for (mut physics, spatial) in query.iter_mut() {
        let center_of_mass = spatial.to_world_point(&physics.center_of_mass);
        let (net_force, net_moment) = sum_forces(&physics.forces, &center_of_mass);
        physics.net_force = net_force;
        physics.net_moment = net_moment;
    }
}
