mod autopilot;
mod mission;
mod pid;

pub use autopilot::{current_pitch, current_roll, Autopilot, AutopilotLimits, AutopilotMode};
pub use mission::WaypointMission;
pub use pid::PidController;
