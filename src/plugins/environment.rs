use bevy::prelude::*;

use crate::plugins::FlightSet;
use crate::resources::{EnvironmentConfig, EnvironmentModel};

pub struct EnvironmentPlugin {
    pub config: Option<EnvironmentConfig>,
}

impl Default for EnvironmentPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentPlugin {
    pub fn new() -> Self {
        Self { config: None }
    }

    pub fn with_config(config: EnvironmentConfig) -> Self {
        Self {
            config: Some(config),
        }
    }

    /// Rebuild the sampling model after the config resource is replaced or edited.
    fn rebuild_model(mut commands: Commands, config: Res<EnvironmentConfig>) {
        info!(
            "Environment updated: {:?} atmosphere, base wind {:?}",
            config.atmosphere.model_type, config.wind.base
        );
        commands.insert_resource(EnvironmentModel::new(&config));
    }
}

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone().unwrap_or_default();

        // Both resources exist before the first fixed tick
        app.insert_resource(EnvironmentModel::new(&config))
            .insert_resource(config);

        super::configure_flight_sets(app);
        app.add_systems(
            FixedUpdate,
            Self::rebuild_model
                .run_if(resource_changed::<EnvironmentConfig>)
                .before(FlightSet::AirData),
        );
    }
}
