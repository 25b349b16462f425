use aerosim::components::{AirData, Airframe, ForceCategory, PhysicsComponent};
use bevy::prelude::{Entity, With};
use approx::assert_relative_eq;
use pretty_assertions::assert_eq;

use crate::common::{assert_air_data_valid, assert_physics_valid, level_flight, trainer_config, TestAppBuilder};

#[test]
fn test_every_surface_applies_a_force() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(trainer_config(), level_flight(500.0, 45.0))
        .build();

    app.run_fixed_step();

    let airframe = app.query_single::<Airframe>().expect("airframe spawned");
    assert!(airframe.surfaces.iter().all(|s| s.last_force().is_some()));
    let surface_count = airframe.surfaces.len();

    let physics = app.query_single::<PhysicsComponent>().expect("physics spawned");
    assert_physics_valid(physics);
    let aero_forces = physics
        .forces
        .iter()
        .filter(|f| f.category == ForceCategory::Aerodynamic)
        .count();
    assert_eq!(aero_forces, surface_count);

    // Cambered wing at positive incidence lifts, everything drags
    let aero = physics.total(&ForceCategory::Aerodynamic);
    assert!(aero.z > 0.0, "expected net lift, got {:?}", aero);
    assert!(aero.x < 0.0, "expected net drag, got {:?}", aero);
}

#[test]
fn test_forces_do_not_accumulate_across_ticks() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(trainer_config(), level_flight(500.0, 45.0))
        .build();

    app.run_fixed_step();
    let first = app.query_single::<PhysicsComponent>().expect("physics spawned").clone();
    app.run_fixed_step();
    let second = app.query_single::<PhysicsComponent>().expect("physics spawned");

    assert_eq!(first.forces.len(), second.forces.len());
    assert_relative_eq!(first.net_force, second.net_force, epsilon = 1e-9);
}

#[test]
fn test_stationary_aircraft_has_no_aero_force() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(trainer_config(), level_flight(500.0, 0.0))
        .build();

    app.run_fixed_step();

    let airframe = app.query_single::<Airframe>().expect("airframe spawned");
    assert!(airframe.surfaces.iter().all(|s| s.last_force().is_none()));
    let physics = app.query_single::<PhysicsComponent>().expect("physics spawned");
    assert_eq!(physics.total(&ForceCategory::Aerodynamic), nalgebra::Vector3::zeros());
}

#[test]
fn test_engine_thrust_enters_the_totals() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(trainer_config(), level_flight(500.0, 0.0))
        .build();

    app.run_fixed_step();

    let physics = app.query_single::<PhysicsComponent>().expect("physics spawned");
    // 3000 N at half throttle along the nose
    assert_relative_eq!(
        physics.total(&ForceCategory::Propulsive),
        nalgebra::Vector3::new(1500.0, 0.0, 0.0),
        epsilon = 1e-9
    );
    assert_relative_eq!(physics.net_force, nalgebra::Vector3::new(1500.0, 0.0, 0.0), epsilon = 1e-9);
}

#[test]
fn test_air_data_is_observed() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(trainer_config(), level_flight(1000.0, 50.0))
        .build();

    app.run_fixed_step();

    let air_data = app.query_single::<AirData>().expect("air data spawned");
    assert_air_data_valid(air_data);
    assert_relative_eq!(air_data.altitude, 1000.0);
    assert_relative_eq!(air_data.true_airspeed, 50.0, epsilon = 1e-9);
    assert!(air_data.density < 1.225);
}

#[test]
fn test_two_airframes_fly_side_by_side() {
    let mut wingman = level_flight(500.0, 45.0);
    wingman.position.y = 200.0;
    let mut app = TestAppBuilder::new()
        .with_aircraft(trainer_config(), level_flight(500.0, 45.0))
        .with_aircraft(trainer_config(), wingman)
        .build();

    app.run_fixed_step();

    let airframes = app.query_all::<Airframe>();
    assert_eq!(airframes.len(), 2);
    assert!(airframes
        .iter()
        .all(|a| a.surfaces.iter().all(|s| s.last_force().is_some())));

    let physics = app.query_all::<PhysicsComponent>();
    assert_eq!(physics.len(), 2);
    for body in physics {
        assert_physics_valid(body);
        assert!(body.total(&ForceCategory::Aerodynamic).z > 0.0);
    }
}

#[test]
fn test_unlinked_airframe_reports_no_force() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(trainer_config(), level_flight(500.0, 45.0))
        .build();

    app.run_fixed_step();
    assert!(app
        .query_single::<Airframe>()
        .expect("airframe spawned")
        .surfaces
        .iter()
        .all(|s| s.last_force().is_some()));

    let world = app.app.world_mut();
    let entity = world
        .query_filtered::<Entity, With<Airframe>>()
        .get_single(world)
        .expect("airframe spawned");
    world.entity_mut(entity).remove::<PhysicsComponent>();

    app.run_fixed_step();

    let airframe = app.query_single::<Airframe>().expect("airframe spawned");
    assert!(airframe.surfaces.iter().all(|s| s.last_force().is_none()));
}
