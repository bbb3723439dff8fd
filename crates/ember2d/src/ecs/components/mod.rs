//! Built-in component types
//!
//! Plain data records attached to entities. All of them derive `serde`
//! traits so a scene can be snapshotted to JSON.

pub mod collider;
pub mod lifetime;
pub mod rigid_body;

pub use crate::foundation::math::Transform;
pub use collider::Collider;
pub use lifetime::Lifetime;
pub use rigid_body::RigidBody;
