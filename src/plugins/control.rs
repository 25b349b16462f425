use bevy::prelude::*;

use crate::plugins::FlightSet;
use crate::systems::{autopilot_system, control_mixer_system};

/// Autopilot followed by the control mixer.
pub struct ControlPlugin;

impl Plugin for ControlPlugin {
    fn build(&self, app: &mut App) {
        super::configure_flight_sets(app);
        app.add_systems(
            FixedUpdate,
            (autopilot_system, control_mixer_system)
                .chain()
                .in_set(FlightSet::Control),
        );
    }
}
