use nalgebra::{Unit, Vector3};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::profile::AirfoilProfile;
use crate::utils::MIN_SURFACE_AREA;

/// What a surface does when the control mixer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceRole {
    /// Fixed lifting surface, never driven by control input.
    Wing,
    Elevator,
    Aileron,
    Rudder,
    /// Combined pitch and roll surface for tailless layouts.
    Elevon,
}

impl SurfaceRole {
    pub fn is_control(self) -> bool {
        !matches!(self, SurfaceRole::Wing)
    }
}

/// Surface geometry in the airframe body frame (x forward, y left, z up).
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGeometry {
    /// Chord length [m]
    pub chord: f64,
    /// Span length [m]
    pub span: f64,
    /// Leading edge to trailing edge direction.
    pub chord_axis: Unit<Vector3<f64>>,
    pub span_axis: Unit<Vector3<f64>>,
    /// Aerodynamic centre relative to the body origin [m]
    pub aero_center: Vector3<f64>,
}

impl SurfaceGeometry {
    pub fn new(
        chord: f64,
        span: f64,
        chord_axis: Vector3<f64>,
        span_axis: Vector3<f64>,
        aero_center: Vector3<f64>,
    ) -> Self {
        Self {
            chord,
            span,
            chord_axis: Unit::new_normalize(chord_axis),
            span_axis: Unit::new_normalize(span_axis),
            aero_center,
        }
    }

    /// Horizontal surface with the span along body y.
    pub fn horizontal(chord: f64, span: f64, aero_center: Vector3<f64>) -> Self {
        Self::new(chord, span, -Vector3::x(), Vector3::y(), aero_center)
    }

    /// Vertical surface (fin) with the span pointing up.
    pub fn vertical(chord: f64, span: f64, aero_center: Vector3<f64>) -> Self {
        Self::new(chord, span, -Vector3::x(), Vector3::z(), aero_center)
    }

    /// Planform area, floored so a degenerate surface never divides to zero.
    pub fn area(&self) -> f64 {
        (self.chord * self.span).max(MIN_SURFACE_AREA)
    }

    /// `span x chord`, the aerodynamic top of the surface.
    pub fn normal(&self) -> Vector3<f64> {
        self.span_axis.cross(self.chord_axis.as_ref())
    }
}

/// Force applied by a surface on its last tick, in world frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedForce {
    pub force: Vector3<f64>,
    pub point: Vector3<f64>,
    /// Effective angle of attack the coefficients were looked up at [deg]
    pub angle_of_attack: f64,
}

/// One physical lifting or control surface carried by an airframe.
#[derive(Debug, Clone)]
pub struct AerodynamicSurface {
    pub name: String,
    pub geometry: SurfaceGeometry,
    /// `None` leaves the surface inert.
    pub profile: Option<Arc<AirfoilProfile>>,
    pub role: SurfaceRole,
    /// Static incidence/trim added to the angle of attack [deg]
    pub incidence: f64,
    /// Angle of attack shift at full deflection input [deg]
    pub max_deflection: f64,
    /// Gearing applied by the mixer to the roll command.
    pub input_multiplier: f64,
    pub lift_multiplier: f64,
    pub drag_multiplier: f64,
    input: f64,
    last_force: Option<AppliedForce>,
}

impl AerodynamicSurface {
    pub fn new(
        name: impl Into<String>,
        geometry: SurfaceGeometry,
        role: SurfaceRole,
        profile: Option<Arc<AirfoilProfile>>,
    ) -> Self {
        Self {
            name: name.into(),
            geometry,
            profile,
            role,
            incidence: 0.0,
            max_deflection: 20.0,
            input_multiplier: 1.0,
            lift_multiplier: 1.0,
            drag_multiplier: 1.0,
            input: 0.0,
            last_force: None,
        }
    }

    pub fn with_incidence(mut self, incidence: f64) -> Self {
        self.incidence = incidence;
        self
    }

    pub fn with_max_deflection(mut self, max_deflection: f64) -> Self {
        self.max_deflection = max_deflection;
        self
    }

    pub fn with_input_multiplier(mut self, multiplier: f64) -> Self {
        self.input_multiplier = multiplier;
        self
    }

    pub fn input(&self) -> f64 {
        self.input
    }

    /// Normalised deflection command, clamped to [-1, 1].
    pub fn set_input(&mut self, input: f64) {
        self.input = if input.is_nan() { 0.0 } else { input.clamp(-1.0, 1.0) };
    }

    /// Angle of attack shift from trim and, for control surfaces, deflection [deg].
    pub fn angle_offset(&self) -> f64 {
        if self.role.is_control() {
            self.incidence + self.input * self.max_deflection
        } else {
            self.incidence
        }
    }

    pub fn last_force(&self) -> Option<&AppliedForce> {
        self.last_force.as_ref()
    }

    pub(crate) fn record_force(&mut self, applied: Option<AppliedForce>) {
        self.last_force = applied;
    }
}
