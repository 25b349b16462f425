mod rigid_body;
mod traits;

pub use rigid_body::RigidBodyView;
pub use traits::RigidBody;
