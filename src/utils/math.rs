use nalgebra::{Unit, Vector3};

/// Wrap an angle in degrees into the signed range [-180, 180].
pub fn unwrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Remove the component of `vector` along `normal`.
pub fn project_on_plane(vector: &Vector3<f64>, normal: &Unit<Vector3<f64>>) -> Vector3<f64> {
    let normal: &Vector3<f64> = normal;
    vector - normal * vector.dot(normal)
}

/// Signed angle in degrees from `from` to `to`, positive when the rotation is
/// right-handed about `axis`. Returns 0 for degenerate (zero-length) inputs.
pub fn signed_angle_deg(from: &Vector3<f64>, to: &Vector3<f64>, axis: &Vector3<f64>) -> f64 {
    let denom = from.norm() * to.norm();
    if denom <= f64::EPSILON {
        return 0.0;
    }
    let cos = (from.dot(to) / denom).clamp(-1.0, 1.0);
    let angle = cos.acos().to_degrees();
    if from.cross(to).dot(axis) < 0.0 {
        -angle
    } else {
        angle
    }
}
