use bevy::app::PluginGroupBuilder;
use bevy::prelude::*;

mod aerodynamics;
mod aircraft;
mod control;
mod environment;
mod physics;

pub use aerodynamics::AerodynamicsPlugin;
pub use aircraft::{spawn_aircraft, AircraftPlugin};
pub use control::ControlPlugin;
pub use environment::EnvironmentPlugin;
pub use physics::PhysicsPlugin;

/// Per-tick stages, run in declaration order inside `FixedUpdate`.
///
/// Control surfaces are set before any force is sampled, and every force is
/// applied before the totals are collapsed for the integrator.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Control,
    AirData,
    Forces,
    Aggregate,
}

pub(crate) fn configure_flight_sets(app: &mut App) {
    app.configure_sets(
        FixedUpdate,
        (
            FlightSet::Control,
            FlightSet::AirData,
            FlightSet::Forces,
            FlightSet::Aggregate,
        )
            .chain(),
    );
}

/// Environment, control, aerodynamics and force aggregation with default settings.
pub struct FlightPlugins;

impl PluginGroup for FlightPlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(EnvironmentPlugin::new())
            .add(ControlPlugin)
            .add(AerodynamicsPlugin)
            .add(PhysicsPlugin::default())
    }
}
