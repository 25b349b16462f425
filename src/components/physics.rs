use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Force accumulator read by the external integrator.
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhysicsComponent {
    /// Centre of mass in body frame [m]
    pub center_of_mass: Vector3<f64>,
    /// Sum of `forces` in world frame [N]
    pub net_force: Vector3<f64>,
    /// Moment of `forces` about the centre of mass in world frame [N·m]
    pub net_moment: Vector3<f64>,
    pub forces: Vec<Force>,
}

/// A force in world frame applied at a world point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Force {
    pub vector: Vector3<f64>,
    pub point: Vector3<f64>,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForceCategory {
    Aerodynamic,
    Propulsive,
}

impl PhysicsComponent {
    pub fn with_center_of_mass(center_of_mass: Vector3<f64>) -> Self {
        Self {
            center_of_mass,
            ..Default::default()
        }
    }

    pub fn add_force(&mut self, force: Force) {
        self.forces.push(force);
    }

    pub fn clear_category(&mut self, category: &ForceCategory) {
        self.forces.retain(|f| &f.category != category);
    }

    pub fn total(&self, category: &ForceCategory) -> Vector3<f64> {
        self.forces
            .iter()
            .filter(|f| &f.category == category)
            .fold(Vector3::zeros(), |acc, f| acc + f.vector)
    }
}
