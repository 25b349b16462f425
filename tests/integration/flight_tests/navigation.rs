use aerosim::components::{Airframe, Autopilot, AutopilotMode, ControlInputs};
use pretty_assertions::assert_eq;

use crate::common::{level_flight, trainer_with_mission, TestAppBuilder};

#[test]
fn test_waypoint_inside_radius_advances_on_first_step() {
    let config = trainer_with_mission(&[[40.0, 0.0, 500.0], [2000.0, 0.0, 500.0]], 50.0);
    let mut app = TestAppBuilder::new()
        .with_aircraft(config, level_flight(500.0, 40.0))
        .build();

    app.run_fixed_step();

    let autopilot = app.query_single::<Autopilot>().expect("autopilot spawned");
    assert_eq!(autopilot.current_index(), 1);
    assert_eq!(autopilot.mode(), AutopilotMode::Navigating);
}

#[test]
fn test_distant_waypoint_keeps_index() {
    let config = trainer_with_mission(&[[1000.0, 0.0, 500.0], [2000.0, 0.0, 500.0]], 50.0);
    let mut app = TestAppBuilder::new()
        .with_aircraft(config, level_flight(500.0, 40.0))
        .build();

    app.run_fixed_step();

    let autopilot = app.query_single::<Autopilot>().expect("autopilot spawned");
    assert_eq!(autopilot.current_index(), 0);
}

#[test]
fn test_single_looping_waypoint_stays_at_zero() {
    let config = trainer_with_mission(&[[10.0, 0.0, 500.0]], 50.0);
    let mut app = TestAppBuilder::new()
        .with_aircraft(config, level_flight(500.0, 40.0))
        .build();

    for _ in 0..5 {
        app.run_fixed_step();
        let autopilot = app.query_single::<Autopilot>().expect("autopilot spawned");
        assert_eq!(autopilot.current_index(), 0);
    }
}

#[test]
fn test_banks_toward_waypoint_on_the_right() {
    // -y is starboard in the body frame
    let config = trainer_with_mission(&[[1000.0, -500.0, 500.0]], 50.0);
    let mut app = TestAppBuilder::new()
        .with_aircraft(config, level_flight(500.0, 40.0))
        .build();

    app.run_fixed_step();

    let controls = *app.query_single::<ControlInputs>().expect("controls spawned");
    assert!(controls.roll > 0.0, "expected right roll, got {:?}", controls);
    assert_eq!(controls.yaw, 0.0);

    let airframe = app.query_single::<Airframe>().expect("airframe spawned");
    let left = airframe.surface("aileron_left").map(|s| s.input());
    let right = airframe.surface("aileron_right").map(|s| s.input());
    assert_eq!(left, Some(1.0));
    assert_eq!(right, Some(-1.0));
}

#[test]
fn test_climb_demand_gives_negative_pitch_command() {
    let config = trainer_with_mission(&[[1000.0, 0.0, 800.0]], 50.0);
    let mut app = TestAppBuilder::new()
        .with_aircraft(config, level_flight(500.0, 40.0))
        .build();

    app.run_fixed_step();

    let controls = *app.query_single::<ControlInputs>().expect("controls spawned");
    assert!(controls.pitch < 0.0, "expected nose-up command, got {:?}", controls);
    let airframe = app.query_single::<Airframe>().expect("airframe spawned");
    assert_eq!(airframe.surface("elevator").map(|s| s.input()), Some(-1.0));
}

#[test]
fn test_empty_mission_levels_the_wings() {
    let config = trainer_with_mission(&[], 50.0);
    let mut spatial = level_flight(500.0, 40.0);
    spatial.attitude = nalgebra::UnitQuaternion::from_euler_angles(30f64.to_radians(), 0.0, 0.0);
    let mut app = TestAppBuilder::new().with_aircraft(config, spatial).build();

    app.run_fixed_step();

    let autopilot = app.query_single::<Autopilot>().expect("autopilot spawned");
    assert_eq!(autopilot.mode(), AutopilotMode::Stabilizing);
    let controls = *app.query_single::<ControlInputs>().expect("controls spawned");
    assert!(controls.roll < 0.0, "expected roll back to level, got {:?}", controls);
}
