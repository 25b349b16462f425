use serde::{Deserialize, Serialize};

use crate::components::ConfigError;

/// How values between breakpoints are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveInterpolation {
    #[default]
    Linear,
    /// Cubic Hermite through the breakpoints with finite-difference tangents.
    Smooth,
}

#[derive(Debug, Clone, Deserialize)]
struct CurveDef {
    #[serde(default)]
    interpolation: CurveInterpolation,
    points: Vec<(f64, f64)>,
}

/// Coefficient as a function of angle of attack in degrees.
///
/// Breakpoints are strictly increasing in angle. Queries outside the breakpoint
/// range return the value of the nearest end point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CurveDef")]
pub struct AerodynamicCurve {
    interpolation: CurveInterpolation,
    points: Vec<(f64, f64)>,
}

impl TryFrom<CurveDef> for AerodynamicCurve {
    type Error = ConfigError;

    fn try_from(def: CurveDef) -> Result<Self, Self::Error> {
        Self::new(def.points, def.interpolation)
    }
}

impl AerodynamicCurve {
    pub fn new(
        points: Vec<(f64, f64)>,
        interpolation: CurveInterpolation,
    ) -> Result<Self, ConfigError> {
        if points.is_empty() {
            return Err(ConfigError::ValidationError(
                "aerodynamic curve needs at least one breakpoint".to_string(),
            ));
        }
        if points.iter().any(|(a, c)| !a.is_finite() || !c.is_finite()) {
            return Err(ConfigError::ValidationError(
                "aerodynamic curve breakpoints must be finite".to_string(),
            ));
        }
        if let Some(pair) = points.windows(2).find(|pair| pair[1].0 <= pair[0].0) {
            return Err(ConfigError::ValidationError(format!(
                "aerodynamic curve angles must increase, {} followed by {}",
                pair[0].0, pair[1].0
            )));
        }
        Ok(Self {
            interpolation,
            points,
        })
    }

    pub fn linear(points: Vec<(f64, f64)>) -> Result<Self, ConfigError> {
        Self::new(points, CurveInterpolation::Linear)
    }

    /// Built-in tables are known to be ordered.
    pub(crate) fn from_table(points: &[(f64, f64)], interpolation: CurveInterpolation) -> Self {
        Self {
            interpolation,
            points: points.to_vec(),
        }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn interpolation(&self) -> CurveInterpolation {
        self.interpolation
    }

    pub fn evaluate(&self, angle_deg: f64) -> f64 {
        let points = &self.points;
        let (first, last) = match (points.first(), points.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return 0.0,
        };
        if angle_deg.is_nan() || angle_deg <= first.0 {
            return first.1;
        }
        if angle_deg >= last.0 {
            return last.1;
        }

        let upper = points.partition_point(|(a, _)| *a <= angle_deg);
        let lower = upper - 1;
        let (x0, y0) = points[lower];
        let (x1, y1) = points[upper];
        let h = x1 - x0;
        let t = (angle_deg - x0) / h;

        match self.interpolation {
            CurveInterpolation::Linear => y0 + (y1 - y0) * t,
            CurveInterpolation::Smooth => {
                let m0 = self.tangent(lower);
                let m1 = self.tangent(upper);
                let t2 = t * t;
                let t3 = t2 * t;
                (2.0 * t3 - 3.0 * t2 + 1.0) * y0
                    + (t3 - 2.0 * t2 + t) * h * m0
                    + (-2.0 * t3 + 3.0 * t2) * y1
                    + (t3 - t2) * h * m1
            }
        }
    }

    fn tangent(&self, index: usize) -> f64 {
        let points = &self.points;
        let prev = points[index.saturating_sub(1)];
        let next = points[(index + 1).min(points.len() - 1)];
        if next.0 > prev.0 {
            (next.1 - prev.1) / (next.0 - prev.0)
        } else {
            0.0
        }
    }
}
