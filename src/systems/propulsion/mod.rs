mod engine;

pub use engine::engine_thrust_system;
