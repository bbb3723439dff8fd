//! Component storage pools
//!
//! Each component type lives in its own sparse-set [`Pool`], erased behind
//! the [`ComponentPool`] trait so the [`World`](super::World) can hold all
//! pools in one map keyed by `TypeId`. The sparse array maps entity indices
//! to a dense array of components, which keeps per-type iteration contiguous.

use std::any::Any;

use super::component::Component;

/// Type-erased interface over a single component pool
pub(crate) trait ComponentPool {
    /// Downcast access for typed reads
    fn as_any(&self) -> &dyn Any;

    /// Downcast access for typed writes
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Drop the component stored for the given entity index, if any
    fn remove_entity(&mut self, index: u32);

    /// Whether a component is stored for the given entity index
    fn has(&self, index: u32) -> bool;

    /// Drop all stored components
    fn clear(&mut self);
}

/// Sparse-set storage for components of a single type
pub(crate) struct Pool<T: Component> {
    /// Entity index -> position in `dense`
    sparse: Vec<Option<u32>>,
    /// Entity index owning each dense slot, parallel to `components`
    entities: Vec<u32>,
    components: Vec<T>,
}

impl<T: Component> Pool<T> {
    pub(crate) fn new() -> Self {
        Self {
            sparse: Vec::new(),
            entities: Vec::new(),
            components: Vec::new(),
        }
    }

    /// Insert a component for an entity index, returning any replaced value
    pub(crate) fn insert(&mut self, index: u32, component: T) -> Option<T> {
        let slot = index as usize;
        if slot >= self.sparse.len() {
            self.sparse.resize(slot + 1, None);
        }

        if let Some(dense) = self.sparse[slot] {
            let old = std::mem::replace(&mut self.components[dense as usize], component);
            return Some(old);
        }

        self.sparse[slot] = Some(self.components.len() as u32);
        self.entities.push(index);
        self.components.push(component);
        None
    }

    pub(crate) fn get(&self, index: u32) -> Option<&T> {
        let dense = (*self.sparse.get(index as usize)?)?;
        self.components.get(dense as usize)
    }

    pub(crate) fn get_mut(&mut self, index: u32) -> Option<&mut T> {
        let dense = (*self.sparse.get(index as usize)?)?;
        self.components.get_mut(dense as usize)
    }

    /// Remove and return the component for an entity index
    ///
    /// Swap-removes from the dense array; the displaced component's sparse
    /// entry is patched to its new position.
    pub(crate) fn remove(&mut self, index: u32) -> Option<T> {
        let slot = index as usize;
        let dense = self.sparse.get_mut(slot)?.take()? as usize;

        let component = self.components.swap_remove(dense);
        self.entities.swap_remove(dense);

        if dense < self.components.len() {
            let moved = self.entities[dense];
            self.sparse[moved as usize] = Some(dense as u32);
        }
        Some(component)
    }

    pub(crate) fn contains(&self, index: u32) -> bool {
        matches!(self.sparse.get(index as usize), Some(Some(_)))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.components.len()
    }
}

impl<T: Component> ComponentPool for Pool<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn remove_entity(&mut self, index: u32) {
        self.remove(index);
    }

    fn has(&self, index: u32) -> bool {
        self.contains(index)
    }

    fn clear(&mut self) {
        self.sparse.clear();
        self.entities.clear();
        self.components.clear();
    }
}
