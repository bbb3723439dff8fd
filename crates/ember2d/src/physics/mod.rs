//! Physics simulation: rigid-body integration and collision detection
//!
//! The physics context is an explicit value owned by the scene and passed to
//! the systems that need it; there are no global singletons. Simulation is
//! single-threaded and frame-stepped.

pub mod collision;
pub mod collision_system;
pub mod integrator;
pub mod layers;
pub mod physics_system;

pub use collision::{collide, raycast, Manifold, Ray, RaycastHit, Shape};
pub use collision_system::{CollisionPair, CollisionSystem};
pub use layers::CollisionLayers;
pub use physics_system::PhysicsSystem;

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;

/// What happens to a body that reaches the world bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryBehavior {
    /// Clamp position and zero the offending velocity component
    StopVelocity,
    /// Clamp position and leave velocity untouched
    SlideVelocity,
    /// Clamp position and flip the offending velocity component
    ReflectVelocity,
}

/// Optional rectangular world bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Top-left corner of the playable area
    pub top_left: Vec2,
    /// Size of the playable area
    pub size: Vec2,
    /// Response applied at the edge
    pub behavior: BoundaryBehavior,
}

/// Physics context for a scene
///
/// Owns the global gravity vector and optional world bounds. Passed
/// explicitly to the physics system each tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Physics {
    /// Global gravity in units per second squared (y-down worlds use +y)
    pub gravity: Vec2,
    /// Master switch for integration
    pub enabled: bool,
    /// Optional world bounds enforcement
    pub bounds: Option<Bounds>,
}

impl Physics {
    /// Create a context with the given gravity, no bounds
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity,
            enabled: true,
            bounds: None,
        }
    }

    /// Enable world bounds with the given extent and edge behavior
    pub fn set_bounds(&mut self, top_left: Vec2, size: Vec2, behavior: BoundaryBehavior) {
        self.bounds = Some(Bounds {
            top_left,
            size,
            behavior,
        });
    }

    /// Remove world bounds enforcement
    pub fn clear_bounds(&mut self) {
        self.bounds = None;
    }
}

impl Default for Physics {
    fn default() -> Self {
        Self::new(Vec2::zeros())
    }
}
