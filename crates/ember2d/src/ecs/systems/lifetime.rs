//! Timed entity expiry

use crate::ecs::components::Lifetime;
use crate::ecs::{Entity, System, World};

/// System despawning entities whose [`Lifetime`] has run out
///
/// Despawns are deferred; expired entities stay alive until the next
/// [`World::refresh`] sweep.
pub struct LifetimeSystem;

impl System for LifetimeSystem {
    fn name(&self) -> &'static str {
        "lifetime"
    }

    fn run(&mut self, world: &mut World, dt: f32) {
        let mut expired: Vec<Entity> = Vec::new();
        for (entity, mut lifetime) in world.query_mut::<Lifetime>() {
            lifetime.tick(dt);
            if lifetime.is_expired() {
                expired.push(entity);
            }
        }

        for entity in expired {
            if let Err(err) = world.despawn(entity) {
                log::warn!("lifetime: could not despawn {entity}: {err}");
            }
        }
    }
}
