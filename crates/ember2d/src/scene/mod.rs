//! Scene: a world plus the systems that advance it
//!
//! A [`Scene`] bundles the ECS [`World`] with the built-in physics and
//! collision systems and a fixed-timestep stepper. Game code calls
//! [`Scene::update`] once per frame with wall-clock delta time; the scene
//! pays that out in whole fixed steps so simulation behavior does not depend
//! on frame rate.

pub mod snapshot;

pub use snapshot::{SceneError, SceneSnapshot};

use crate::ecs::systems::LifetimeSystem;
use crate::ecs::{Entity, Schedule, System, World};
use crate::foundation::math::Vec2;
use crate::foundation::time::FixedTimestep;
use crate::physics::{CollisionSystem, Physics, PhysicsSystem};

/// Construction parameters for a scene
#[derive(Debug, Clone, Copy)]
pub struct SceneConfig {
    /// Global gravity in units per second squared
    pub gravity: Vec2,
    /// Fixed simulation step in seconds
    pub fixed_dt: f32,
    /// Soft cap on live entities; spawns beyond it are refused
    pub max_entities: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::zeros(),
            fixed_dt: 1.0 / 60.0,
            max_entities: 10_000,
        }
    }
}

/// A self-contained simulation: world, physics, collisions, user systems
pub struct Scene {
    world: World,
    physics: PhysicsSystem,
    collisions: CollisionSystem,
    schedule: Schedule,
    stepper: FixedTimestep,
    max_entities: usize,
}

impl Scene {
    /// Create a scene from a config
    ///
    /// The built-in [`LifetimeSystem`] is pre-registered; game systems added
    /// with [`add_system`](Self::add_system) run after it.
    pub fn new(config: SceneConfig) -> Self {
        let mut schedule = Schedule::new();
        schedule.add_system(LifetimeSystem);

        Self {
            world: World::new(),
            physics: PhysicsSystem::new(Physics::new(config.gravity)),
            collisions: CollisionSystem::new(),
            schedule,
            stepper: FixedTimestep::new(config.fixed_dt),
            max_entities: config.max_entities,
        }
    }

    /// Shared access to the world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the world
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The physics context (gravity, bounds, master switch)
    pub fn physics(&self) -> &Physics {
        &self.physics.physics
    }

    /// Mutable access to the physics context
    pub fn physics_mut(&mut self) -> &mut Physics {
        &mut self.physics.physics
    }

    /// Collision results from the most recent fixed step
    pub fn collisions(&self) -> &CollisionSystem {
        &self.collisions
    }

    /// Register a game system to run each fixed step
    pub fn add_system<S: System + 'static>(&mut self, system: S) {
        self.schedule.add_system(system);
    }

    /// Spawn an entity, refusing once the configured cap is reached
    pub fn spawn(&mut self) -> Option<Entity> {
        if self.world.entity_count() >= self.max_entities {
            log::warn!("scene: entity cap of {} reached, spawn refused", self.max_entities);
            return None;
        }
        Some(self.world.spawn())
    }

    /// The fixed step size in seconds
    pub fn fixed_dt(&self) -> f32 {
        self.stepper.step()
    }

    /// Advance the simulation by one frame's worth of real time
    ///
    /// Runs zero or more fixed steps depending on the accumulated time and
    /// returns how many were run. Each step ticks physics, then collision
    /// detection, then the schedule (which ends with the deferred-destroy
    /// sweep). Negative or non-finite `frame_dt` contributes nothing.
    pub fn update(&mut self, frame_dt: f32) -> u32 {
        let steps = self.stepper.advance(frame_dt);
        let dt = self.stepper.step();
        for _ in 0..steps {
            self.step(dt);
        }
        steps
    }

    /// Run exactly one simulation step of `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.physics.run(&mut self.world, dt);
        self.collisions.run(&mut self.world, dt);
        self.schedule.run(&mut self.world, dt);
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{RigidBody, Transform};

    #[test]
    fn test_update_pays_out_fixed_steps() {
        let mut scene = Scene::new(SceneConfig {
            fixed_dt: 0.01,
            ..SceneConfig::default()
        });

        assert_eq!(scene.update(0.035), 3);
        // 5 ms remainder carries into the next frame
        assert_eq!(scene.update(0.005), 1);
        assert_eq!(scene.update(-1.0), 0);
    }

    #[test]
    fn test_simulation_is_frame_rate_independent() {
        let run = |frame_dt: f32, frames: u32| -> f32 {
            let mut scene = Scene::new(SceneConfig {
                gravity: Vec2::new(0.0, 10.0),
                fixed_dt: 0.01,
                ..SceneConfig::default()
            });
            let entity = scene.spawn().unwrap();
            scene
                .world_mut()
                .add_component(entity, Transform::default())
                .ok();
            scene
                .world_mut()
                .add_component(entity, RigidBody::new())
                .ok();
            for _ in 0..frames {
                scene.update(frame_dt);
            }
            // Bind the borrow so it ends before the scene is dropped
            let transform = scene.world().get_component::<Transform>(entity).unwrap();
            transform.position.y
        };

        // One second simulated at 100 fps and at 50 fps lands in the same place
        let fine = run(0.01, 100);
        let coarse = run(0.02, 50);
        approx::assert_relative_eq!(fine, coarse, epsilon = 1e-4);
    }

    #[test]
    fn test_spawn_respects_entity_cap() {
        let mut scene = Scene::new(SceneConfig {
            max_entities: 2,
            ..SceneConfig::default()
        });

        assert!(scene.spawn().is_some());
        assert!(scene.spawn().is_some());
        assert!(scene.spawn().is_none());
    }
}
