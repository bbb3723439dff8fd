//! System trait and frame schedule

use super::world::World;

/// A unit of per-frame logic
///
/// A system runs once per tick over its matching query results, mutating
/// components. Systems must tolerate individual bad entities: log and skip,
/// never abort the frame.
pub trait System {
    /// Human-readable name for logging
    fn name(&self) -> &'static str;

    /// Run the system for one tick
    fn run(&mut self, world: &mut World, dt: f32);
}

/// Ordered, single-threaded system executor
///
/// Systems run strictly in registration order; after the last system the
/// deferred destruction sweep runs, so entities despawned during the frame
/// disappear exactly once per tick.
pub struct Schedule {
    systems: Vec<Box<dyn System>>,
}

impl Schedule {
    /// Create an empty schedule
    pub fn new() -> Self {
        Self {
            systems: Vec::new(),
        }
    }

    /// Append a system; it will run after all previously added systems
    pub fn add_system<S: System + 'static>(&mut self, system: S) {
        log::debug!("registering system '{}'", system.name());
        self.systems.push(Box::new(system));
    }

    /// Number of registered systems
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Whether no systems are registered
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Run every system in registration order, then sweep destroyed entities
    pub fn run(&mut self, world: &mut World, dt: f32) {
        for system in &mut self.systems {
            log::trace!("running system '{}'", system.name());
            system.run(world, dt);
        }
        world.refresh();
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new()
    }
}
