use aerosim::components::AirData;
use aerosim::resources::{AtmosphereConfig, EnvironmentConfig, EnvironmentModel, WindConfig};
use approx::assert_relative_eq;
use nalgebra::Vector3;

use crate::common::{level_flight, trainer_config, TestAppBuilder};

#[test]
fn test_constant_wind_reaches_air_data() {
    let environment = EnvironmentConfig::new(
        AtmosphereConfig::default(),
        WindConfig {
            base: Vector3::new(-10.0, 0.0, 0.0),
            ..WindConfig::calm()
        },
    );
    let mut app = TestAppBuilder::new()
        .with_environment(environment)
        .with_aircraft(trainer_config(), level_flight(300.0, 30.0))
        .build();

    app.run_fixed_step();

    let air_data = app.query_single::<AirData>().expect("air data spawned");
    assert_eq!(air_data.wind_velocity, Vector3::new(-10.0, 0.0, 0.0));
    assert_relative_eq!(air_data.true_airspeed, 40.0, epsilon = 1e-9);
}

#[test]
fn test_replacing_config_rebuilds_model() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(trainer_config(), level_flight(300.0, 30.0))
        .build();

    *app.get_state_mut::<EnvironmentConfig>().expect("environment config") = EnvironmentConfig::new(
        AtmosphereConfig::constant(0.9),
        WindConfig::calm(),
    );
    app.run_fixed_step();

    let model = app.get_state::<EnvironmentModel>().expect("environment model");
    assert_relative_eq!(model.density_at_altitude(5000.0), 0.9);
    let air_data = app.query_single::<AirData>().expect("air data spawned");
    assert_relative_eq!(air_data.density, 0.9);
}
