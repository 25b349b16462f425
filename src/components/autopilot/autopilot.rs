use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use super::mission::WaypointMission;
use super::pid::PidController;
use crate::components::{ControlInputs, SpatialComponent};
use crate::utils::unwrap_degrees;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutopilotMode {
    /// Steering towards the current waypoint.
    Navigating,
    /// Holding wings and nose level; no waypoint left to fly to.
    Stabilizing,
}

/// Attitude limits and guidance gain for the waypoint law.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutopilotLimits {
    /// Largest commanded bank angle [deg]
    pub max_bank: f64,
    /// Largest commanded pitch angle [deg]
    pub max_pitch: f64,
    /// Fraction of full bank/pitch demanded per metre of offset [1/m]
    pub guidance_gain: f64,
}

impl Default for AutopilotLimits {
    fn default() -> Self {
        Self {
            max_bank: 45.0,
            max_pitch: 20.0,
            guidance_gain: 0.1,
        }
    }
}

/// Waypoint-following autopilot driving roll and pitch through two PID loops.
#[derive(Component, Debug, Clone)]
pub struct Autopilot {
    mission: WaypointMission,
    pub roll_pid: PidController,
    pub pitch_pid: PidController,
    pub limits: AutopilotLimits,
    engaged: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(
            WaypointMission::default(),
            PidController::default(),
            PidController::default(),
            AutopilotLimits::default(),
        )
    }
}

impl Autopilot {
    /// Starts engaged.
    pub fn new(
        mission: WaypointMission,
        roll_pid: PidController,
        pitch_pid: PidController,
        limits: AutopilotLimits,
    ) -> Self {
        Self {
            mission,
            roll_pid,
            pitch_pid,
            limits,
            engaged: true,
        }
    }

    pub fn mission(&self) -> &WaypointMission {
        &self.mission
    }

    pub fn current_index(&self) -> usize {
        self.mission.index()
    }

    pub fn mode(&self) -> AutopilotMode {
        if self.mission.is_complete() {
            AutopilotMode::Stabilizing
        } else {
            AutopilotMode::Navigating
        }
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub fn engage(&mut self) {
        if !self.engaged {
            self.engaged = true;
            self.reset_controllers();
        }
    }

    pub fn disengage(&mut self) {
        if self.engaged {
            self.engaged = false;
            self.reset_controllers();
        }
    }

    /// Replace the mission; progress and controller state start from scratch.
    pub fn assign_mission(&mut self, mut mission: WaypointMission) {
        mission.restart();
        self.mission = mission;
        self.reset_controllers();
    }

    pub fn reset_controllers(&mut self) {
        self.roll_pid.reset();
        self.pitch_pid.reset();
    }

    /// Run one control step and return the axis commands for the mixer.
    ///
    /// The pitch command is the negated PID output in both modes, stabilizing included.
    pub fn step(&mut self, spatial: &SpatialComponent, dt: f64) -> ControlInputs {
        self.mission.advance_if_arrived(&spatial.position);

        let (target_roll, target_pitch) = match self.mission.current_target() {
            Some(target) => self.guidance(spatial, target),
            None => (0.0, 0.0),
        };

        let roll_error = target_roll - current_roll(&spatial.attitude);
        let pitch_error = target_pitch - current_pitch(&spatial.attitude);

        ControlInputs {
            roll: self.roll_pid.update(roll_error, dt),
            // A nose-up error needs a trailing-edge-up (negative) elevator command.
            pitch: -self.pitch_pid.update(pitch_error, dt),
            yaw: 0.0,
        }
    }

    /// Target (roll, pitch) in degrees from the waypoint's offset in body frame.
    pub fn guidance(&self, spatial: &SpatialComponent, target: &Vector3<f64>) -> (f64, f64) {
        let local = spatial.to_body_point(target);
        let right = -local.y;
        let up = local.z;
        let gain = self.limits.guidance_gain;
        (
            (right * gain).clamp(-1.0, 1.0) * self.limits.max_bank,
            (up * gain).clamp(-1.0, 1.0) * self.limits.max_pitch,
        )
    }
}

/// Bank angle in degrees, positive right wing down, in [-180, 180].
pub fn current_roll(attitude: &UnitQuaternion<f64>) -> f64 {
    let (roll, _, _) = attitude.euler_angles();
    unwrap_degrees(roll.to_degrees())
}

/// Pitch angle in degrees, positive nose up, in [-180, 180].
pub fn current_pitch(attitude: &UnitQuaternion<f64>) -> f64 {
    let (_, pitch, _) = attitude.euler_angles();
    -unwrap_degrees(pitch.to_degrees())
}
