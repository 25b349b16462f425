use nalgebra::{UnitQuaternion, Vector3};

use super::traits::RigidBody;
use crate::components::{Force, ForceCategory, PhysicsComponent, SpatialComponent};

/// [`RigidBody`] over the ECS components of one entity.
///
/// Applied forces are recorded on the [`PhysicsComponent`] under `category`.
pub struct RigidBodyView<'a> {
    spatial: &'a SpatialComponent,
    physics: &'a mut PhysicsComponent,
    category: ForceCategory,
}

impl<'a> RigidBodyView<'a> {
    pub fn new(
        spatial: &'a SpatialComponent,
        physics: &'a mut PhysicsComponent,
        category: ForceCategory,
    ) -> Self {
        Self {
            spatial,
            physics,
            category,
        }
    }

    pub fn center_of_mass(&self) -> Vector3<f64> {
        self.to_world_point(&self.physics.center_of_mass)
    }
}

impl RigidBody for RigidBodyView<'_> {
    fn position(&self) -> Vector3<f64> {
        self.spatial.position
    }

    fn attitude(&self) -> UnitQuaternion<f64> {
        self.spatial.attitude
    }

    fn point_velocity(&self, world_point: &Vector3<f64>) -> Vector3<f64> {
        let omega_world = self.spatial.attitude * self.spatial.angular_velocity;
        let arm = world_point - self.center_of_mass();
        self.spatial.velocity + omega_world.cross(&arm)
    }

    fn apply_force_at_point(&mut self, force: Vector3<f64>, world_point: Vector3<f64>) {
        self.physics.add_force(Force {
            vector: force,
            point: world_point,
            category: self.category.clone(),
        });
    }
}
