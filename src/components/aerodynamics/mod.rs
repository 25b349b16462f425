mod curve;
mod profile;
mod surface;

pub use curve::{AerodynamicCurve, CurveInterpolation};
pub use profile::AirfoilProfile;
pub use surface::{AerodynamicSurface, AppliedForce, SurfaceGeometry, SurfaceRole};

use bevy::prelude::*;

/// The aerodynamic surfaces carried by one rigid airframe.
#[derive(Component, Debug, Clone, Default)]
pub struct Airframe {
    pub name: String,
    pub surfaces: Vec<AerodynamicSurface>,
}

impl Airframe {
    pub fn new(name: impl Into<String>, surfaces: Vec<AerodynamicSurface>) -> Self {
        Self {
            name: name.into(),
            surfaces,
        }
    }

    pub fn surface(&self, name: &str) -> Option<&AerodynamicSurface> {
        self.surfaces.iter().find(|s| s.name == name)
    }
}
