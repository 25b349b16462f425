mod fixtures;
mod test_app;

// Re-export
pub use assertions::{assert_air_data_valid, assert_physics_valid};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
