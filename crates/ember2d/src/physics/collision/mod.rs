//! Collision detection over a closed set of 2D shapes
//!
//! Shapes are stored in model space and positioned by the owning entity's
//! transform at test time. Every pairwise test is recomputed from scratch
//! each tick; manifolds are transient and never cached across frames.

pub mod intersect;
pub mod manifold;
pub mod raycast;
pub mod shape;

pub use intersect::collide;
pub use manifold::Manifold;
pub use raycast::{raycast, Ray, RaycastHit};
pub use shape::Shape;
