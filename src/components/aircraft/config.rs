use bevy::prelude::*;
use nalgebra::{Unit, Vector3};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::components::{
    AerodynamicSurface, AirfoilProfile, Airframe, Autopilot, AutopilotLimits, EngineComponent,
    PidController, SurfaceGeometry, SurfaceRole, WaypointMission,
};

const BUILTIN_SYMMETRIC: &str = "symmetric";
const BUILTIN_CAMBERED: &str = "cambered";

/// Airframe description as loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftConfig {
    pub name: String,
    /// Centre of mass in body frame [m]
    #[serde(default = "zero_vector")]
    pub center_of_mass: Vector3<f64>,
    /// Named sections; `symmetric` and `cambered` are always available.
    #[serde(default)]
    pub profiles: HashMap<String, AirfoilProfile>,
    #[serde(default)]
    pub surfaces: Vec<SurfaceConfig>,
    #[serde(default)]
    pub engine: Option<EngineConfig>,
    #[serde(default)]
    pub autopilot: Option<AutopilotConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceConfig {
    pub name: String,
    pub role: SurfaceRole,
    #[serde(default)]
    pub profile: Option<String>,
    pub chord: f64,
    pub span: f64,
    #[serde(default = "default_chord_axis")]
    pub chord_axis: Vector3<f64>,
    #[serde(default = "default_span_axis")]
    pub span_axis: Vector3<f64>,
    #[serde(default = "zero_vector")]
    pub aero_center: Vector3<f64>,
    #[serde(default)]
    pub incidence: f64,
    #[serde(default = "default_max_deflection")]
    pub max_deflection: f64,
    #[serde(default = "one")]
    pub input_multiplier: f64,
    #[serde(default = "one")]
    pub lift_multiplier: f64,
    #[serde(default = "one")]
    pub drag_multiplier: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub max_thrust: f64,
    #[serde(default)]
    pub throttle: f64,
    #[serde(default = "zero_vector")]
    pub mount: Vector3<f64>,
    #[serde(default = "forward")]
    pub thrust_axis: Vector3<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutopilotConfig {
    #[serde(default)]
    pub roll_pid: PidController,
    #[serde(default)]
    pub pitch_pid: PidController,
    #[serde(default)]
    pub limits: AutopilotLimits,
    #[serde(default)]
    pub mission: WaypointMission,
    #[serde(default = "enabled")]
    pub engaged: bool,
}

fn zero_vector() -> Vector3<f64> {
    Vector3::zeros()
}

fn forward() -> Vector3<f64> {
    Vector3::x()
}

fn default_chord_axis() -> Vector3<f64> {
    -Vector3::x()
}

fn default_span_axis() -> Vector3<f64> {
    Vector3::y()
}

fn default_max_deflection() -> f64 {
    20.0
}

fn one() -> f64 {
    1.0
}

fn enabled() -> bool {
    true
}

impl AircraftConfig {
    /// Resolve a profile name against the file's own profiles, then the built-ins.
    pub fn resolve_profile(&self, name: &str) -> Option<AirfoilProfile> {
        if let Some(profile) = self.profiles.get(name) {
            return Some(profile.clone());
        }
        match name {
            BUILTIN_SYMMETRIC => Some(AirfoilProfile::symmetric()),
            BUILTIN_CAMBERED => Some(AirfoilProfile::cambered()),
            _ => None,
        }
    }

    /// Build the runtime airframe. Surfaces with unknown profiles stay inert.
    pub fn build_airframe(&self) -> Airframe {
        let mut shared: HashMap<String, Arc<AirfoilProfile>> = HashMap::new();
        let mut surfaces = Vec::with_capacity(self.surfaces.len());

        for surface in &self.surfaces {
            let profile = match &surface.profile {
                Some(name) => match shared.get(name) {
                    Some(profile) => Some(Arc::clone(profile)),
                    None => match self.resolve_profile(name) {
                        Some(profile) => {
                            let profile = Arc::new(profile);
                            shared.insert(name.clone(), Arc::clone(&profile));
                            Some(profile)
                        }
                        None => {
                            warn!(
                                "Surface '{}' of '{}' references unknown profile '{}'; it will produce no force",
                                surface.name, self.name, name
                            );
                            None
                        }
                    },
                },
                None => {
                    warn!(
                        "Surface '{}' of '{}' has no profile; it will produce no force",
                        surface.name, self.name
                    );
                    None
                }
            };

            let geometry = SurfaceGeometry::new(
                surface.chord,
                surface.span,
                surface.chord_axis,
                surface.span_axis,
                surface.aero_center,
            );
            let mut built = AerodynamicSurface::new(&surface.name, geometry, surface.role, profile)
                .with_incidence(surface.incidence)
                .with_max_deflection(surface.max_deflection)
                .with_input_multiplier(surface.input_multiplier);
            built.lift_multiplier = surface.lift_multiplier;
            built.drag_multiplier = surface.drag_multiplier;
            surfaces.push(built);
        }

        info!("Built airframe '{}' with {} surfaces", self.name, surfaces.len());
        Airframe::new(&self.name, surfaces)
    }

    pub fn build_engine(&self) -> Option<EngineComponent> {
        self.engine.as_ref().map(|engine| {
            let mut component = EngineComponent {
                max_thrust: engine.max_thrust,
                throttle: 0.0,
                mount: engine.mount,
                thrust_axis: Unit::new_normalize(engine.thrust_axis),
            };
            component.set_throttle(engine.throttle);
            component
        })
    }

    pub fn build_autopilot(&self) -> Option<Autopilot> {
        self.autopilot.as_ref().map(|config| {
            let mut autopilot = Autopilot::new(
                config.mission.clone(),
                config.roll_pid.clone(),
                config.pitch_pid.clone(),
                config.limits.clone(),
            );
            if !config.engaged {
                autopilot.disengage();
            }
            autopilot
        })
    }
}
