use bevy::prelude::*;

use crate::plugins::FlightSet;
use crate::resources::AerodynamicsConfig;
use crate::systems::{aero_surface_force_system, air_data_system};

pub struct AerodynamicsPlugin;

impl Plugin for AerodynamicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AerodynamicsConfig>();

        super::configure_flight_sets(app);
        app.add_systems(
            FixedUpdate,
            (
                air_data_system.in_set(FlightSet::AirData),
                aero_surface_force_system.in_set(FlightSet::Forces),
            ),
        );
    }
}
