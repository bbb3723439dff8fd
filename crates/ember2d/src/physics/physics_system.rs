//! Rigid-body physics system
//!
//! Integrates every `(Transform, RigidBody)` entity once per tick and
//! enforces optional world bounds. Owns the scene's [`Physics`] context.

use crate::ecs::components::{RigidBody, Transform};
use crate::ecs::{System, World};
use crate::foundation::math::Vec2;

use super::integrator::integrate;
use super::{BoundaryBehavior, Bounds, Physics};

/// System advancing all rigid bodies by one tick
pub struct PhysicsSystem {
    /// Gravity, enablement, and bounds for this scene
    pub physics: Physics,
}

impl PhysicsSystem {
    /// Create a physics system with the given context
    pub fn new(physics: Physics) -> Self {
        Self { physics }
    }

    fn apply_bounds(bounds: &Bounds, transform: &mut Transform, velocity: &mut Vec2) {
        let min = bounds.top_left;
        let max = bounds.top_left + bounds.size;

        for axis in 0..2 {
            let position = transform.position[axis];
            let clamped = position.clamp(min[axis], max[axis]);
            if clamped == position {
                continue;
            }
            transform.position[axis] = clamped;
            match bounds.behavior {
                BoundaryBehavior::StopVelocity => velocity[axis] = 0.0,
                BoundaryBehavior::SlideVelocity => {}
                BoundaryBehavior::ReflectVelocity => velocity[axis] = -velocity[axis],
            }
        }
    }
}

impl System for PhysicsSystem {
    fn name(&self) -> &'static str {
        "physics"
    }

    fn run(&mut self, world: &mut World, dt: f32) {
        if !self.physics.enabled {
            return;
        }
        if !dt.is_finite() || dt <= 0.0 {
            log::warn!("physics: rejecting tick with dt = {dt}");
            return;
        }

        for (_entity, mut transform, mut body) in world.query2_mut::<Transform, RigidBody>() {
            let delta = integrate(&mut body, self.physics.gravity, dt);
            transform.position += delta;

            if let Some(bounds) = &self.physics.bounds {
                Self::apply_bounds(bounds, &mut transform, &mut body.velocity);
            }
        }
    }
}
