use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{AirData, SpatialComponent};
use crate::resources::{AirSample, AirSampler, EnvironmentModel};

/// Air data at the airframe origin from one air sample and the body velocity.
pub fn calculate_air_data(velocity: &Vector3<f64>, sample: &AirSample) -> AirData {
    let relative_velocity = velocity - sample.wind;
    let true_airspeed = relative_velocity.norm();

    AirData {
        altitude: sample.altitude,
        density: sample.density,
        temperature: sample.temperature,
        pressure: sample.pressure,
        wind_velocity: sample.wind,
        relative_velocity,
        true_airspeed,
        dynamic_pressure: 0.5 * sample.density * true_airspeed * true_airspeed,
    }
}

/// Refresh the observed air state of every airframe.
pub fn air_data_system(
    mut query: Query<(&mut AirData, &SpatialComponent)>,
    environment: Res<EnvironmentModel>,
    time: Res<Time<Fixed>>,
) {
    let now = time.elapsed_secs_f64();
    for (mut air_data, spatial) in query.iter_mut() {
        let sample = environment.sample(&spatial.position, now);
        *air_data = calculate_air_data(&spatial.velocity, &sample);
    }
}
