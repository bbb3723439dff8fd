//! ECS World implementation
//!
//! The registry owning all entities and component pools. Component pools sit
//! behind `RefCell` so queries can hand out references without `unsafe`;
//! the engine is single-threaded, so the runtime borrow checks only catch
//! genuine aliasing mistakes.

use std::any::{type_name, TypeId};
use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashMap;

use thiserror::Error;

use super::component::Component;
use super::entity::Entity;
use super::query::{Query, Query2Mut, Query3Mut, QueryMut};
use super::storage::{ComponentPool, Pool};

/// Errors produced by registry operations
///
/// These replace hard assertions so callers can recover in release builds:
/// a missing component or a stale handle is reported, never a crash.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EcsError {
    /// The handle refers to a destroyed or never-created entity
    #[error("entity {0} is not alive")]
    DeadEntity(Entity),

    /// The entity is alive but does not hold the requested component
    #[error("entity {entity} has no {component} component")]
    MissingComponent {
        /// The entity that was queried
        entity: Entity,
        /// Type name of the missing component
        component: &'static str,
    },
}

/// Per-index entity bookkeeping
#[derive(Debug, Clone, Copy)]
struct Slot {
    generation: u32,
    alive: bool,
    pending_destroy: bool,
}

/// ECS World containing all entities and components
pub struct World {
    slots: Vec<Slot>,
    free: Vec<u32>,
    pending: Vec<Entity>,
    pools: HashMap<TypeId, RefCell<Box<dyn ComponentPool>>>,
    alive_count: usize,
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            pending: Vec::new(),
            pools: HashMap::new(),
            alive_count: 0,
        }
    }

    /// Create a new entity with a fresh handle
    ///
    /// Recycled indices carry a bumped generation, so handles to the previous
    /// occupant stay invalid.
    pub fn spawn(&mut self) -> Entity {
        self.alive_count += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.alive = true;
            slot.pending_destroy = false;
            return Entity::new(index, slot.generation);
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            alive: true,
            pending_destroy: false,
        });
        Entity::new(index, 0)
    }

    /// Whether the handle refers to a live entity
    ///
    /// Entities marked for destruction remain alive (and queryable) until the
    /// next [`refresh`](Self::refresh).
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.slots
            .get(entity.index() as usize)
            .is_some_and(|slot| slot.alive && slot.generation == entity.generation())
    }

    /// Mark an entity for destruction
    ///
    /// Components stay attached and iterable until the next
    /// [`refresh`](Self::refresh), which keeps in-flight iteration stable.
    /// Despawning twice in one frame is a no-op.
    pub fn despawn(&mut self, entity: Entity) -> Result<(), EcsError> {
        if !self.is_alive(entity) {
            return Err(EcsError::DeadEntity(entity));
        }
        let slot = &mut self.slots[entity.index() as usize];
        if !slot.pending_destroy {
            slot.pending_destroy = true;
            self.pending.push(entity);
        }
        Ok(())
    }

    /// Sweep entities marked for destruction
    ///
    /// Frees their component storage, invalidates their handles, and recycles
    /// their indices with a bumped generation. Runs once per frame at the end
    /// of the schedule.
    pub fn refresh(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.pending);
        log::trace!("refresh: sweeping {} entities", pending.len());
        for entity in pending {
            for cell in self.pools.values() {
                cell.borrow_mut().remove_entity(entity.index());
            }
            let slot = &mut self.slots[entity.index() as usize];
            slot.alive = false;
            slot.pending_destroy = false;
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(entity.index());
            self.alive_count -= 1;
        }
    }

    /// Add a component to an entity, replacing any prior instance of the type
    ///
    /// Returns the replaced component, if any.
    pub fn add_component<T: Component>(
        &mut self,
        entity: Entity,
        component: T,
    ) -> Result<Option<T>, EcsError> {
        if !self.is_alive(entity) {
            return Err(EcsError::DeadEntity(entity));
        }
        let cell = self
            .pools
            .entry(TypeId::of::<T>())
            .or_insert_with(|| RefCell::new(Box::new(Pool::<T>::new())));
        let mut pool = cell.borrow_mut();
        match pool.as_any_mut().downcast_mut::<Pool<T>>() {
            Some(pool) => Ok(pool.insert(entity.index(), component)),
            // Unreachable: pools are keyed by their own TypeId
            None => Err(EcsError::MissingComponent {
                entity,
                component: type_name::<T>(),
            }),
        }
    }

    /// Borrow a component of an entity
    pub fn get_component<T: Component>(&self, entity: Entity) -> Result<Ref<'_, T>, EcsError> {
        if !self.is_alive(entity) {
            return Err(EcsError::DeadEntity(entity));
        }
        let missing = EcsError::MissingComponent {
            entity,
            component: type_name::<T>(),
        };
        let cell = self.pools.get(&TypeId::of::<T>()).ok_or(missing)?;
        Ref::filter_map(cell.borrow(), |pool| {
            pool.as_any()
                .downcast_ref::<Pool<T>>()
                .and_then(|pool| pool.get(entity.index()))
        })
        .map_err(|_| missing)
    }

    /// Mutably borrow a component of an entity
    pub fn get_component_mut<T: Component>(
        &self,
        entity: Entity,
    ) -> Result<RefMut<'_, T>, EcsError> {
        if !self.is_alive(entity) {
            return Err(EcsError::DeadEntity(entity));
        }
        let missing = EcsError::MissingComponent {
            entity,
            component: type_name::<T>(),
        };
        let cell = self.pools.get(&TypeId::of::<T>()).ok_or(missing)?;
        RefMut::filter_map(cell.borrow_mut(), |pool| {
            pool.as_any_mut()
                .downcast_mut::<Pool<T>>()
                .and_then(|pool| pool.get_mut(entity.index()))
        })
        .map_err(|_| missing)
    }

    /// Whether the entity holds a component of the given type
    ///
    /// Side-effect free; returns false for dead handles.
    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.is_alive(entity)
            && self
                .pools
                .get(&TypeId::of::<T>())
                .is_some_and(|cell| cell.borrow().has(entity.index()))
    }

    /// Detach and return a component, independent of entity lifetime
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Result<Option<T>, EcsError> {
        if !self.is_alive(entity) {
            return Err(EcsError::DeadEntity(entity));
        }
        let Some(cell) = self.pools.get(&TypeId::of::<T>()) else {
            return Ok(None);
        };
        let mut pool = cell.borrow_mut();
        Ok(pool
            .as_any_mut()
            .downcast_mut::<Pool<T>>()
            .and_then(|pool| pool.remove(entity.index())))
    }

    /// Number of live entities (including those pending destruction)
    pub fn entity_count(&self) -> usize {
        self.alive_count
    }

    /// Iterate over all live entity handles
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.alive
                .then(|| Entity::new(index as u32, slot.generation))
        })
    }

    /// Destroy all entities and components immediately
    ///
    /// Every handle held from before the call becomes stale: slot
    /// generations are bumped, not reset, so recycled indices never
    /// resurrect an old handle.
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.alive {
                slot.alive = false;
                slot.pending_destroy = false;
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index as u32);
            }
        }
        self.pending.clear();
        for cell in self.pools.values() {
            cell.borrow_mut().clear();
        }
        self.alive_count = 0;
    }

    /// Query all entities holding a component, with shared access
    pub fn query<T: Component>(&self) -> Query<'_, T> {
        Query::new(self, self.matching(&[TypeId::of::<T>()]))
    }

    /// Query all entities holding a component, with mutable access
    pub fn query_mut<T: Component>(&self) -> QueryMut<'_, T> {
        QueryMut::new(self, self.matching(&[TypeId::of::<T>()]))
    }

    /// Query all entities holding both components, with mutable access
    pub fn query2_mut<A: Component, B: Component>(&self) -> Query2Mut<'_, A, B> {
        Query2Mut::new(self, self.matching(&[TypeId::of::<A>(), TypeId::of::<B>()]))
    }

    /// Query all entities holding all three components, with mutable access
    pub fn query3_mut<A: Component, B: Component, C: Component>(
        &self,
    ) -> Query3Mut<'_, A, B, C> {
        Query3Mut::new(
            self,
            self.matching(&[TypeId::of::<A>(), TypeId::of::<B>(), TypeId::of::<C>()]),
        )
    }

    /// Snapshot of live entities holding all listed component types
    ///
    /// Iteration order follows slot order, so it is stable within a tick.
    fn matching(&self, types: &[TypeId]) -> Vec<Entity> {
        let pools: Vec<_> = types.iter().map(|id| self.pools.get(id)).collect();
        if pools.iter().any(Option::is_none) {
            return Vec::new();
        }
        self.entities()
            .filter(|entity| {
                pools
                    .iter()
                    .all(|pool| pool.is_some_and(|cell| cell.borrow().has(entity.index())))
            })
            .collect()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
