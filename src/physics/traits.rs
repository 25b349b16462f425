use nalgebra::{UnitQuaternion, Vector3};

/// The slice of a rigid-body integrator the force models need.
pub trait RigidBody {
    /// Body origin in world frame [m]
    fn position(&self) -> Vector3<f64>;

    /// Rotation from body to world frame.
    fn attitude(&self) -> UnitQuaternion<f64>;

    /// Velocity of the material point currently at `world_point` [m/s]
    fn point_velocity(&self, world_point: &Vector3<f64>) -> Vector3<f64>;

    /// Queue `force` (world frame) at `world_point` for the next integration step.
    fn apply_force_at_point(&mut self, force: Vector3<f64>, world_point: Vector3<f64>);

    fn to_world_point(&self, body_point: &Vector3<f64>) -> Vector3<f64> {
        self.position() + self.attitude() * body_point
    }

    fn to_world_direction(&self, body_direction: &Vector3<f64>) -> Vector3<f64> {
        self.attitude() * body_direction
    }
}
