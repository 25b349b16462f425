use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Ordered waypoints and progress through them.
///
/// While navigating `index < waypoints.len()`; a finished non-looping mission
/// parks at `index == waypoints.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaypointMission {
    waypoints: Vec<Vector3<f64>>,
    #[serde(skip)]
    index: usize,
    /// Distance at which a waypoint counts as reached [m]
    pub arrival_radius: f64,
    /// Restart from the first waypoint after the last one
    pub looping: bool,
}

impl Default for WaypointMission {
    fn default() -> Self {
        Self::new(Vec::new(), 50.0, true)
    }
}

impl WaypointMission {
    pub fn new(waypoints: Vec<Vector3<f64>>, arrival_radius: f64, looping: bool) -> Self {
        Self {
            waypoints,
            index: 0,
            arrival_radius,
            looping,
        }
    }

    pub fn waypoints(&self) -> &[Vector3<f64>] {
        &self.waypoints
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// True when there is nothing left to fly to.
    pub fn is_complete(&self) -> bool {
        self.index >= self.waypoints.len()
    }

    pub fn current_target(&self) -> Option<&Vector3<f64>> {
        self.waypoints.get(self.index)
    }

    /// Advance past the current waypoint if `position` is inside the arrival
    /// radius. Moves at most one waypoint per call.
    pub fn advance_if_arrived(&mut self, position: &Vector3<f64>) -> bool {
        let arrived = match self.current_target() {
            Some(target) => (target - position).norm() < self.arrival_radius,
            None => false,
        };
        if arrived {
            self.index += 1;
            if self.index >= self.waypoints.len() && self.looping {
                self.index = 0;
            }
        }
        arrived
    }

    /// Start over from the first waypoint.
    pub fn restart(&mut self) {
        self.index = 0;
    }
}
