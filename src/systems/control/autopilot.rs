use bevy::prelude::*;

use crate::components::{Autopilot, AutopilotMode, ControlInputs, SpatialComponent};

/// Per-entity mode seen on the previous tick, for logging transitions.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastAutopilotMode(pub AutopilotMode);

/// Step every engaged autopilot and write its commands.
pub fn autopilot_system(
    mut commands: Commands,
    mut query: Query<(
        Entity,
        &mut Autopilot,
        &SpatialComponent,
        &mut ControlInputs,
        Option<&LastAutopilotMode>,
    )>,
    time: Res<Time<Fixed>>,
) {
    let dt = time.timestep().as_secs_f64();
    if dt <= 0.0 {
        return;
    }

    for (entity, mut autopilot, spatial, mut controls, last_mode) in query.iter_mut() {
        if !autopilot.is_engaged() {
            continue;
        }

        *controls = autopilot.step(spatial, dt);

        let mode = autopilot.mode();
        if last_mode.map(|m| m.0) != Some(mode) {
            match mode {
                AutopilotMode::Navigating => info!(
                    "Autopilot on {:?} navigating to waypoint {}",
                    entity,
                    autopilot.current_index()
                ),
                AutopilotMode::Stabilizing => {
                    info!("Autopilot on {:?} holding wings level", entity)
                }
            }
            commands.entity(entity).insert(LastAutopilotMode(mode));
        }
    }
}
