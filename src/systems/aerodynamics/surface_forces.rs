use bevy::prelude::*;
use nalgebra::{Unit, Vector3};

use crate::components::{
    AerodynamicSurface, Airframe, AppliedForce, ForceCategory, PhysicsComponent, SpatialComponent,
};
use crate::physics::{RigidBody, RigidBodyView};
use crate::resources::{AerodynamicsConfig, AirSample, AirSampler, EnvironmentModel};
use crate::utils::{project_on_plane, signed_angle_deg};

// --- Pure Calculation Logic ---

/// World-frame state of one surface needed to evaluate its force.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceState {
    /// Aerodynamic centre in world frame [m]
    pub point: Vector3<f64>,
    /// Velocity of the aerodynamic centre in world frame [m/s]
    pub velocity: Vector3<f64>,
    pub chord_axis: Vector3<f64>,
    pub span_axis: Vector3<f64>,
}

/// Lift plus drag acting on `surface` for the given world state and air sample.
///
/// Returns `None` when the surface has no profile or the relative airspeed is
/// below `min_airspeed`.
pub fn compute_surface_force(
    surface: &AerodynamicSurface,
    state: &SurfaceState,
    air: &AirSample,
    min_airspeed: f64,
) -> Option<AppliedForce> {
    let profile = surface.profile.as_ref()?;

    let relative = state.velocity - air.wind;
    let speed = relative.norm();
    if !speed.is_finite() || speed < min_airspeed {
        return None;
    }

    let span = Unit::try_new(state.span_axis, f64::EPSILON)?;
    let span_dir = span.into_inner();
    let normal = span_dir.cross(&state.chord_axis);

    let incoming = project_on_plane(&-relative, &span);
    let angle_of_attack =
        signed_angle_deg(&state.chord_axis, &incoming, &span_dir) + surface.angle_offset();

    let (c_l, c_d) = profile.coefficients(angle_of_attack);
    let q = 0.5 * air.density * speed * speed;
    let area = surface.geometry.area();
    let lift = q * area * c_l * surface.lift_multiplier;
    let drag = q * area * c_d * surface.drag_multiplier;

    let drag_dir = -relative / speed;
    // Flow along the span leaves no lift direction
    let lift_dir = match drag_dir.cross(&span_dir).try_normalize(f64::EPSILON) {
        Some(dir) if dir.dot(&normal) < 0.0 => -dir,
        Some(dir) => dir,
        None => Vector3::zeros(),
    };

    Some(AppliedForce {
        force: lift_dir * lift + drag_dir * drag,
        point: state.point,
        angle_of_attack,
    })
}

/// Per-surface force model over an injected air source.
pub struct SurfaceForceModel<'a, S: AirSampler + ?Sized> {
    sampler: &'a S,
    min_airspeed: f64,
}

impl<'a, S: AirSampler + ?Sized> SurfaceForceModel<'a, S> {
    pub fn new(sampler: &'a S, min_airspeed: f64) -> Self {
        Self {
            sampler,
            min_airspeed,
        }
    }

    /// Evaluate `surface` on `body` and apply the result at its aerodynamic centre.
    ///
    /// The surface remembers what it applied, or `None` when it stayed inert.
    pub fn apply<B: RigidBody>(
        &self,
        surface: &mut AerodynamicSurface,
        body: &mut B,
        time: f64,
    ) -> Option<Vector3<f64>> {
        let geometry = &surface.geometry;
        let point = body.to_world_point(&geometry.aero_center);
        let state = SurfaceState {
            point,
            velocity: body.point_velocity(&point),
            chord_axis: body.to_world_direction(&geometry.chord_axis),
            span_axis: body.to_world_direction(&geometry.span_axis),
        };
        let air = self.sampler.sample(&point, time);

        let applied = compute_surface_force(surface, &state, &air, self.min_airspeed);
        surface.record_force(applied);

        let Some(applied) = applied else {
            trace!("Surface '{}' inert this tick", surface.name);
            return None;
        };
        body.apply_force_at_point(applied.force, applied.point);
        Some(applied.force)
    }
}

/// Recompute every surface force on every airframe for this tick.
///
/// Airframes without a [`PhysicsComponent`] apply nothing, so their surfaces
/// report no force.
pub fn aero_surface_force_system(
    mut aircraft: Query<(&mut Airframe, &SpatialComponent, &mut PhysicsComponent)>,
    mut unlinked: Query<&mut Airframe, Without<PhysicsComponent>>,
    environment: Res<EnvironmentModel>,
    aero_config: Res<AerodynamicsConfig>,
    time: Res<Time<Fixed>>,
) {
    let model = SurfaceForceModel::new(&*environment, aero_config.min_airspeed_threshold);
    let now = time.elapsed_secs_f64();

    for (mut airframe, spatial, mut physics) in aircraft.iter_mut() {
        // Stale forces must not survive a tick where a surface goes inert
        physics.clear_category(&ForceCategory::Aerodynamic);

        let mut body = RigidBodyView::new(spatial, &mut physics, ForceCategory::Aerodynamic);
        for surface in airframe.surfaces.iter_mut() {
            model.apply(surface, &mut body, now);
        }
    }

    for mut airframe in unlinked.iter_mut() {
        if airframe.surfaces.iter().any(|s| s.last_force().is_some()) {
            for surface in airframe.surfaces.iter_mut() {
                surface.record_force(None);
            }
        }
    }
}
