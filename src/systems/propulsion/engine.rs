use bevy::prelude::*;

use crate::components::{EngineComponent, ForceCategory, PhysicsComponent, SpatialComponent};
use crate::physics::{RigidBody, RigidBodyView};

/// Apply engine thrust at the mount point.
pub fn engine_thrust_system(
    mut query: Query<(&EngineComponent, &SpatialComponent, &mut PhysicsComponent)>,
) {
    for (engine, spatial, mut physics) in query.iter_mut() {
        physics.clear_category(&ForceCategory::Propulsive);

        let thrust = engine.thrust();
        if thrust.norm_squared() <= f64::EPSILON {
            continue;
        }

        let mut body = RigidBodyView::new(spatial, &mut physics, ForceCategory::Propulsive);
        let point = body.to_world_point(&engine.mount);
        let force = body.to_world_direction(&thrust);
        body.apply_force_at_point(force, point);
    }
}
