use bevy::prelude::*;

use crate::components::{AirData, AircraftConfig, ControlInputs, PhysicsComponent, SpatialComponent};

/// Spawn an airframe entity with everything the flight systems query.
pub fn spawn_aircraft(
    commands: &mut Commands,
    config: &AircraftConfig,
    spatial: SpatialComponent,
) -> Entity {
    let mut entity = commands.spawn((
        Name::new(config.name.clone()),
        config.build_airframe(),
        spatial,
        PhysicsComponent::with_center_of_mass(config.center_of_mass),
        AirData::default(),
        ControlInputs::default(),
    ));

    if let Some(engine) = config.build_engine() {
        entity.insert(engine);
    }
    if let Some(autopilot) = config.build_autopilot() {
        entity.insert(autopilot);
    }

    let id = entity.id();
    info!("Spawned aircraft '{}' as {:?}", config.name, id);
    id
}

/// Spawns one configured aircraft at startup. Add it once per aircraft.
pub struct AircraftPlugin {
    config: AircraftConfig,
    initial_state: SpatialComponent,
}

impl AircraftPlugin {
    pub fn new(config: AircraftConfig, initial_state: SpatialComponent) -> Self {
        Self {
            config,
            initial_state,
        }
    }
}

impl Plugin for AircraftPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();
        let initial_state = self.initial_state.clone();
        app.add_systems(Startup, move |mut commands: Commands| {
            spawn_aircraft(&mut commands, &config, initial_state.clone());
        });
    }

    fn is_unique(&self) -> bool {
        false
    }
}
