mod autopilot;
mod mixer;

pub use autopilot::{autopilot_system, LastAutopilotMode};
pub use mixer::{apply_mixer, control_mixer_system, mix};
