pub mod aerodynamics;

pub use aerodynamics::AerodynamicsConfig;
