use aerosim::components::{Airframe, Autopilot, ControlInputs};
use pretty_assertions::assert_eq;

use crate::common::{level_flight, trainer_config, trainer_with_mission, TestAppBuilder};

fn surface_inputs(airframe: &Airframe) -> Vec<(String, f64)> {
    airframe
        .surfaces
        .iter()
        .map(|s| (s.name.clone(), s.input()))
        .collect()
}

#[test]
fn test_mixer_drives_surfaces_from_pilot_inputs() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(trainer_config(), level_flight(500.0, 40.0))
        .build();

    *app.query_single_mut::<ControlInputs>().expect("controls spawned") =
        ControlInputs::new(0.5, -0.25, 0.3);
    app.run_fixed_step();

    let airframe = app.query_single::<Airframe>().expect("airframe spawned");
    assert_eq!(
        surface_inputs(airframe),
        vec![
            ("wing".to_string(), 0.0),
            ("aileron_left".to_string(), -0.25),
            ("aileron_right".to_string(), 0.25),
            ("elevator".to_string(), 0.5),
            ("fin".to_string(), 0.3),
        ]
    );
}

#[test]
fn test_disengage_resets_pid_state() {
    let config = trainer_with_mission(&[[1000.0, -300.0, 600.0]], 50.0);
    let mut app = TestAppBuilder::new()
        .with_aircraft(config, level_flight(500.0, 40.0))
        .build();

    app.run_fixed_steps(10);
    {
        let autopilot = app.query_single::<Autopilot>().expect("autopilot spawned");
        assert!(autopilot.roll_pid.integral() != 0.0);
        assert!(autopilot.pitch_pid.integral() != 0.0);
    }

    app.query_single_mut::<Autopilot>()
        .expect("autopilot spawned")
        .disengage();
    {
        let autopilot = app.query_single::<Autopilot>().expect("autopilot spawned");
        assert!(!autopilot.is_engaged());
        assert_eq!(autopilot.roll_pid.integral(), 0.0);
        assert_eq!(autopilot.roll_pid.last_error(), 0.0);
        assert_eq!(autopilot.pitch_pid.integral(), 0.0);
    }

    // The pilot owns the controls now
    let manual = ControlInputs::new(0.1, 0.0, 0.0);
    *app.query_single_mut::<ControlInputs>().expect("controls spawned") = manual;
    app.run_fixed_steps(3);
    assert_eq!(*app.query_single::<ControlInputs>().expect("controls spawned"), manual);
    let autopilot = app.query_single::<Autopilot>().expect("autopilot spawned");
    assert_eq!(autopilot.roll_pid.integral(), 0.0);
}
