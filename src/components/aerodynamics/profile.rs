use serde::{Deserialize, Serialize};

use super::curve::{AerodynamicCurve, CurveInterpolation};

const SYMMETRIC_LIFT: [(f64, f64); 7] = [
    (-20.0, -0.8),
    (-10.0, -0.4),
    (0.0, 0.0),
    (10.0, 0.8),
    (15.0, 1.1),
    (20.0, 0.6),
    (30.0, 0.2),
];

const SYMMETRIC_DRAG: [(f64, f64); 5] = [
    (-30.0, 0.25),
    (-15.0, 0.08),
    (0.0, 0.02),
    (15.0, 0.08),
    (30.0, 0.25),
];

const CAMBERED_LIFT: [(f64, f64); 9] = [
    (-15.0, -0.6),
    (-10.0, -0.4),
    (-5.0, -0.2),
    (0.0, 0.2),
    (5.0, 0.7),
    (10.0, 1.1),
    (12.0, 1.3),
    (15.0, 1.0),
    (20.0, 0.5),
];

const CAMBERED_DRAG: [(f64, f64); 8] = [
    (-15.0, 0.12),
    (-10.0, 0.08),
    (-5.0, 0.04),
    (0.0, 0.025),
    (5.0, 0.035),
    (10.0, 0.06),
    (15.0, 0.12),
    (20.0, 0.25),
];

/// Lift and drag curve pair shared by every surface using the same section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirfoilProfile {
    pub lift: AerodynamicCurve,
    pub drag: AerodynamicCurve,
}

impl AirfoilProfile {
    pub fn new(lift: AerodynamicCurve, drag: AerodynamicCurve) -> Self {
        Self { lift, drag }
    }

    /// Symmetric section stalling around 15 degrees.
    pub fn symmetric() -> Self {
        Self::new(
            AerodynamicCurve::from_table(&SYMMETRIC_LIFT, CurveInterpolation::Smooth),
            AerodynamicCurve::from_table(&SYMMETRIC_DRAG, CurveInterpolation::Smooth),
        )
    }

    /// Cambered section with positive zero-AoA lift, stalling around 12 degrees.
    pub fn cambered() -> Self {
        Self::new(
            AerodynamicCurve::from_table(&CAMBERED_LIFT, CurveInterpolation::Smooth),
            AerodynamicCurve::from_table(&CAMBERED_DRAG, CurveInterpolation::Smooth),
        )
    }

    /// (CL, CD) at the given angle of attack in degrees.
    pub fn coefficients(&self, angle_deg: f64) -> (f64, f64) {
        (self.lift.evaluate(angle_deg), self.drag.evaluate(angle_deg))
    }
}
