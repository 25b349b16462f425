use aerosim::components::{AircraftConfig, SpatialComponent};
use nalgebra::{UnitQuaternion, Vector3};

pub const TRAINER_YAML: &str = r#"
name: trainer
center_of_mass: [0.2, 0.0, 0.0]
surfaces:
  - name: wing
    role: Wing
    profile: cambered
    chord: 1.5
    span: 10.0
    incidence: 2.0
  - name: aileron_left
    role: Aileron
    profile: symmetric
    chord: 0.3
    span: 1.5
    aero_center: [-0.6, 4.0, 0.0]
  - name: aileron_right
    role: Aileron
    profile: symmetric
    chord: 0.3
    span: 1.5
    aero_center: [-0.6, -4.0, 0.0]
    input_multiplier: -1.0
  - name: elevator
    role: Elevator
    profile: symmetric
    chord: 0.6
    span: 3.0
    aero_center: [-4.5, 0.0, 0.0]
  - name: fin
    role: Rudder
    profile: symmetric
    chord: 0.8
    span: 1.4
    span_axis: [0.0, 0.0, 1.0]
    aero_center: [-4.6, 0.0, 0.7]
engine:
  max_thrust: 3000.0
  throttle: 0.5
"#;

/// Trainer airframe with no autopilot.
pub fn trainer_config() -> AircraftConfig {
    AircraftConfig::from_yaml(TRAINER_YAML).expect("trainer fixture parses")
}

/// Trainer airframe flying `waypoints` with the default autopilot.
pub fn trainer_with_mission(waypoints: &[[f64; 3]], arrival_radius: f64) -> AircraftConfig {
    let waypoints = waypoints
        .iter()
        .map(|w| format!("[{}, {}, {}]", w[0], w[1], w[2]))
        .collect::<Vec<_>>()
        .join(", ");
    let source = format!(
        "{}autopilot:\n  mission:\n    waypoints: [{}]\n    arrival_radius: {}\n    looping: true\n",
        TRAINER_YAML, waypoints, arrival_radius
    );
    AircraftConfig::from_yaml(&source).expect("mission fixture parses")
}

/// Level flight along +x at `speed`, `altitude` metres above the datum.
pub fn level_flight(altitude: f64, speed: f64) -> SpatialComponent {
    SpatialComponent::new(
        Vector3::new(0.0, 0.0, altitude),
        Vector3::new(speed, 0.0, 0.0),
        UnitQuaternion::identity(),
        Vector3::zeros(),
    )
}
