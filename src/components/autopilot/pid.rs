use serde::{Deserialize, Serialize};

/// Single-axis PID controller.
///
/// The integral term accumulates without bound; sustained error winds it up
/// until the error changes sign. Call [`PidController::reset`] whenever
/// control authority changes hands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PidController {
    pub p_gain: f64,
    pub i_gain: f64,
    pub d_gain: f64,
    #[serde(skip)]
    integral: f64,
    #[serde(skip)]
    last_error: f64,
}

impl Default for PidController {
    fn default() -> Self {
        Self::new(0.8, 0.1, 0.2)
    }
}

impl PidController {
    pub fn new(p_gain: f64, i_gain: f64, d_gain: f64) -> Self {
        Self {
            p_gain,
            i_gain,
            d_gain,
            integral: 0.0,
            last_error: 0.0,
        }
    }

    /// `dt` must be positive; the host's fixed step guarantees it.
    pub fn update(&mut self, error: f64, dt: f64) -> f64 {
        let proportional = error * self.p_gain;

        self.integral += error * dt;
        let integral = self.integral * self.i_gain;

        let derivative = ((error - self.last_error) / dt) * self.d_gain;
        self.last_error = error;

        proportional + integral + derivative
    }

    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.last_error = 0.0;
    }

    pub fn integral(&self) -> f64 {
        self.integral
    }

    pub fn last_error(&self) -> f64 {
        self.last_error
    }
}
