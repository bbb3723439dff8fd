//! Foundation utilities shared by every subsystem
//!
//! Math types and frame timing. These have no dependencies on the ECS or
//! physics layers.

pub mod math;
pub mod time;

pub use math::{Transform, Vec2, Vec3, Vec4};
pub use time::{FixedTimestep, Timer};
