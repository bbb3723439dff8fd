//! Per-tick collision detection over all collidable entities
//!
//! Candidate pairs come from an all-pairs pass with layer filtering (no
//! spatial partitioning); the narrow phase computes a fresh [`Manifold`] per
//! colliding pair. Results are valid for the current frame only; the
//! previous frame's pair set is kept to report entered/exited contacts.

use std::collections::{HashMap, HashSet};

use crate::ecs::components::{Collider, Transform};
use crate::ecs::{Entity, System, World};
use crate::foundation::math::Vec2;

use super::collision::{collide, Manifold, Shape};
use super::layers::CollisionLayers;

/// Collision pair representing two entities that are colliding
///
/// Stores the lower entity index first so a pair hashes identically
/// regardless of test order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionPair {
    /// First entity (lower index)
    pub a: Entity,
    /// Second entity (higher index)
    pub b: Entity,
}

impl CollisionPair {
    /// Create a normalized pair
    pub fn new(a: Entity, b: Entity) -> Self {
        if a.index() <= b.index() {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }
}

/// Snapshot of one collidable entity taken at the start of the tick
struct ColliderEntry {
    entity: Entity,
    position: Vec2,
    shape: Shape,
    layers: CollisionLayers,
    mask: CollisionLayers,
    trigger: bool,
}

/// System detecting collisions between all `(Transform, Collider)` entities
pub struct CollisionSystem {
    current: HashSet<CollisionPair>,
    previous: HashSet<CollisionPair>,
    manifolds: HashMap<CollisionPair, Manifold>,
    triggers: HashSet<CollisionPair>,
}

impl CollisionSystem {
    /// Create an empty collision system
    pub fn new() -> Self {
        Self {
            current: HashSet::new(),
            previous: HashSet::new(),
            manifolds: HashMap::new(),
            triggers: HashSet::new(),
        }
    }

    /// Pairs colliding this frame
    pub fn colliding_pairs(&self) -> &HashSet<CollisionPair> {
        &self.current
    }

    /// Pairs colliding this frame where either collider is a trigger
    ///
    /// Trigger contacts are detected like any other but are meant to carry
    /// no physical response; game code reads them for overlap events.
    pub fn trigger_pairs(&self) -> &HashSet<CollisionPair> {
        &self.triggers
    }

    /// Manifold between two entities this frame, if they collided
    ///
    /// The returned normal points from `a` toward `b` regardless of the
    /// pair's internal ordering.
    pub fn contact_between(&self, a: Entity, b: Entity) -> Option<Manifold> {
        let pair = CollisionPair::new(a, b);
        let manifold = self.manifolds.get(&pair)?;
        if pair.a == a {
            Some(*manifold)
        } else {
            Some(manifold.reversed())
        }
    }

    /// Pairs that started colliding this frame
    pub fn entered(&self) -> Vec<CollisionPair> {
        self.current.difference(&self.previous).copied().collect()
    }

    /// Pairs that stopped colliding this frame
    pub fn exited(&self) -> Vec<CollisionPair> {
        self.previous.difference(&self.current).copied().collect()
    }

    /// Forget all recorded contacts
    pub fn clear(&mut self) {
        self.current.clear();
        self.previous.clear();
        self.manifolds.clear();
        self.triggers.clear();
    }

    /// Snapshot every collidable entity's world position and shape
    ///
    /// An entity that lost a component since the query snapshot is logged
    /// and skipped; one bad entity never blocks the rest of the frame.
    fn gather(world: &World) -> Vec<ColliderEntry> {
        let mut entries = Vec::new();
        for (entity, transform) in world.query::<Transform>() {
            match world.get_component::<Collider>(entity) {
                Ok(collider) => entries.push(ColliderEntry {
                    entity,
                    position: transform.position,
                    shape: collider.shape,
                    layers: collider.layers,
                    mask: collider.mask,
                    trigger: collider.is_trigger,
                }),
                Err(crate::ecs::EcsError::MissingComponent { .. }) => {}
                Err(err) => {
                    log::warn!("collision: skipping entity {entity}: {err}");
                }
            }
        }
        entries
    }
}

impl System for CollisionSystem {
    fn name(&self) -> &'static str {
        "collision"
    }

    fn run(&mut self, world: &mut World, _dt: f32) {
        std::mem::swap(&mut self.current, &mut self.previous);
        self.current.clear();
        self.manifolds.clear();
        self.triggers.clear();

        let entries = Self::gather(world);
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                if !CollisionLayers::should_collide(a.layers, a.mask, b.layers, b.mask) {
                    continue;
                }
                let manifold = collide(&a.shape, a.position, &b.shape, b.position);
                if !manifold.occurred() {
                    continue;
                }
                let pair = CollisionPair::new(a.entity, b.entity);
                // Keep the stored normal oriented pair.a -> pair.b
                let oriented = if pair.a == a.entity {
                    manifold
                } else {
                    manifold.reversed()
                };
                self.current.insert(pair);
                self.manifolds.insert(pair, oriented);
                if a.trigger || b.trigger {
                    self.triggers.insert(pair);
                }
            }
        }
    }
}

impl Default for CollisionSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spawn_collidable(
        world: &mut World,
        position: Vec2,
        shape: Shape,
        layers: CollisionLayers,
        mask: CollisionLayers,
    ) -> Entity {
        let entity = world.spawn();
        world
            .add_component(entity, Transform::from_position(position))
            .ok();
        world
            .add_component(entity, Collider::new(shape).with_layers(layers, mask))
            .ok();
        entity
    }

    #[test]
    fn test_overlapping_circles_are_reported() {
        let mut world = World::new();
        let all = CollisionLayers::all();
        let a = spawn_collidable(&mut world, Vec2::zeros(), Shape::circle(5.0), all, all);
        let b = spawn_collidable(&mut world, Vec2::new(8.0, 0.0), Shape::circle(5.0), all, all);

        let mut system = CollisionSystem::new();
        system.run(&mut world, 1.0 / 60.0);

        assert_eq!(system.colliding_pairs().len(), 1);
        let manifold = system.contact_between(a, b).unwrap();
        assert_relative_eq!(manifold.penetration, 2.0);
        assert_relative_eq!(manifold.normal.x, 1.0);

        // Same contact queried the other way has a flipped normal
        let flipped = system.contact_between(b, a).unwrap();
        assert_relative_eq!(flipped.normal.x, -1.0);
    }

    #[test]
    fn test_layer_filter_suppresses_pair() {
        let mut world = World::new();
        spawn_collidable(
            &mut world,
            Vec2::zeros(),
            Shape::circle(5.0),
            CollisionLayers::PLAYER,
            CollisionLayers::ENEMY,
        );
        spawn_collidable(
            &mut world,
            Vec2::new(8.0, 0.0),
            Shape::circle(5.0),
            CollisionLayers::ENVIRONMENT,
            CollisionLayers::all(),
        );

        let mut system = CollisionSystem::new();
        system.run(&mut world, 1.0 / 60.0);

        assert!(system.colliding_pairs().is_empty());
    }

    #[test]
    fn test_entered_and_exited_deltas() {
        let mut world = World::new();
        let all = CollisionLayers::all();
        let a = spawn_collidable(&mut world, Vec2::zeros(), Shape::circle(5.0), all, all);
        let b = spawn_collidable(&mut world, Vec2::new(8.0, 0.0), Shape::circle(5.0), all, all);

        let mut system = CollisionSystem::new();
        system.run(&mut world, 1.0 / 60.0);
        assert_eq!(system.entered(), vec![CollisionPair::new(a, b)]);
        assert!(system.exited().is_empty());

        // Second frame, still overlapping: no new contacts
        system.run(&mut world, 1.0 / 60.0);
        assert!(system.entered().is_empty());
        assert!(system.exited().is_empty());

        // Move b away: the contact exits
        world
            .get_component_mut::<Transform>(b)
            .unwrap()
            .position
            .x = 50.0;
        system.run(&mut world, 1.0 / 60.0);
        assert!(system.entered().is_empty());
        assert_eq!(system.exited(), vec![CollisionPair::new(a, b)]);
    }

    #[test]
    fn test_manifolds_are_recomputed_each_tick() {
        let mut world = World::new();
        let all = CollisionLayers::all();
        let a = spawn_collidable(&mut world, Vec2::zeros(), Shape::circle(5.0), all, all);
        let b = spawn_collidable(&mut world, Vec2::new(8.0, 0.0), Shape::circle(5.0), all, all);

        let mut system = CollisionSystem::new();
        system.run(&mut world, 1.0 / 60.0);
        assert_relative_eq!(system.contact_between(a, b).unwrap().penetration, 2.0);

        world
            .get_component_mut::<Transform>(b)
            .unwrap()
            .position
            .x = 9.0;
        system.run(&mut world, 1.0 / 60.0);
        assert_relative_eq!(system.contact_between(a, b).unwrap().penetration, 1.0);
    }

    #[test]
    fn test_trigger_contacts_are_reported_separately() {
        let mut world = World::new();
        let all = CollisionLayers::all();
        let solid = spawn_collidable(&mut world, Vec2::zeros(), Shape::circle(5.0), all, all);
        let zone = world.spawn();
        world
            .add_component(zone, Transform::from_position(Vec2::new(8.0, 0.0)))
            .ok();
        world
            .add_component(zone, Collider::new(Shape::circle(5.0)).as_trigger())
            .ok();

        let mut system = CollisionSystem::new();
        system.run(&mut world, 1.0 / 60.0);

        let pair = CollisionPair::new(solid, zone);
        assert!(system.colliding_pairs().contains(&pair));
        assert!(system.trigger_pairs().contains(&pair));

        // A solid-solid contact never lands in the trigger set
        let other = spawn_collidable(&mut world, Vec2::new(2.0, 0.0), Shape::circle(5.0), all, all);
        system.run(&mut world, 1.0 / 60.0);
        let solid_pair = CollisionPair::new(solid, other);
        assert!(system.colliding_pairs().contains(&solid_pair));
        assert!(!system.trigger_pairs().contains(&solid_pair));
    }

    #[test]
    fn test_transform_without_collider_is_ignored() {
        let mut world = World::new();
        let lone = world.spawn();
        world
            .add_component(lone, Transform::from_position(Vec2::zeros()))
            .ok();
        let all = CollisionLayers::all();
        spawn_collidable(&mut world, Vec2::zeros(), Shape::circle(5.0), all, all);

        let mut system = CollisionSystem::new();
        system.run(&mut world, 1.0 / 60.0);
        assert!(system.colliding_pairs().is_empty());
    }
}
