//! # Ember2D
//!
//! A 2D game engine core written in Rust.
//!
//! ## Features
//!
//! - **ECS Architecture**: Sparse-set component storage with generational
//!   entity handles and deferred destruction
//! - **Rigid-Body Physics**: Semi-implicit Euler integration with drag,
//!   speed limits, and per-body gravity scaling
//! - **Collision Detection**: AABB and circle shapes with contact manifolds,
//!   layer filtering, and enter/exit tracking
//! - **Raycasting**: Swept displacement queries against collision shapes
//! - **Scene Snapshots**: JSON save and restore of world state
//!
//! ## Quick Start
//!
//! ```rust
//! use ember2d::prelude::*;
//!
//! let mut scene = Scene::new(SceneConfig {
//!     gravity: Vec2::new(0.0, 98.0),
//!     ..SceneConfig::default()
//! });
//!
//! let ball = scene.spawn().unwrap();
//! scene.world_mut().add_component(ball, Transform::from_position(Vec2::new(0.0, -50.0))).unwrap();
//! scene.world_mut().add_component(ball, RigidBody::new()).unwrap();
//! scene.world_mut().add_component(ball, Collider::new(Shape::circle(2.0))).unwrap();
//!
//! // One second of simulation, one frame at a time
//! for _ in 0..60 {
//!     scene.update(1.0 / 60.0);
//! }
//! let y = scene.world().get_component::<Transform>(ball).unwrap().position.y;
//! assert!(y > -50.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod ecs;
pub mod physics;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        ecs::{
            components::{Collider, Lifetime, RigidBody, Transform},
            Component, EcsError, Entity, Schedule, System, World,
        },
        foundation::{
            math::{Point2, Vec2},
            time::{FixedTimestep, Timer},
        },
        physics::{
            collide, raycast, BoundaryBehavior, CollisionLayers, CollisionPair, Manifold,
            Physics, Ray, RaycastHit, Shape,
        },
        scene::{Scene, SceneConfig, SceneError, SceneSnapshot},
    };
}
