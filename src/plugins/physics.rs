use bevy::prelude::*;

use crate::plugins::FlightSet;
use crate::systems::{engine_thrust_system, force_calculator_system};

/// Fixed tick rate, propulsion and per-tick force totals.
///
/// Integration itself belongs to the host; it should run after [`FlightSet::Aggregate`].
pub struct PhysicsPlugin {
    pub timestep: f64,
}

impl Default for PhysicsPlugin {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 120.0, // 120 Hz default physics rate
        }
    }
}

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_seconds(self.timestep));

        super::configure_flight_sets(app);
        app.add_systems(
            FixedUpdate,
            (
                engine_thrust_system.in_set(FlightSet::Forces),
                force_calculator_system.in_set(FlightSet::Aggregate),
            ),
        );
    }
}
