//! Query system for component access
//!
//! A query snapshots the live entities holding every requested component
//! type, then lazily borrows the components as it is advanced. The sequence
//! is finite, non-restartable, and valid only until the next
//! [`World::refresh`](super::World::refresh); order is unspecified but
//! stable within a tick.
//!
//! Mutable queries hand out `RefMut` guards from the world's interior
//! pools: each yielded item must be dropped before the iterator is advanced
//! again, which `for` loops do naturally. Holding items across iterations
//! (e.g. `collect`) panics on the runtime borrow check rather than aliasing.

use std::cell::{Ref, RefMut};
use std::marker::PhantomData;

use super::component::Component;
use super::entity::Entity;
use super::world::World;

/// Shared-access query over a single component type
pub struct Query<'w, T: Component> {
    world: &'w World,
    matched: Vec<Entity>,
    cursor: usize,
    _marker: PhantomData<T>,
}

impl<'w, T: Component> Query<'w, T> {
    pub(super) fn new(world: &'w World, matched: Vec<Entity>) -> Self {
        Self {
            world,
            matched,
            cursor: 0,
            _marker: PhantomData,
        }
    }

    /// Number of entities matched when the query was created
    pub fn len(&self) -> usize {
        self.matched.len()
    }

    /// Whether the query matched no entities
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }
}

impl<'w, T: Component> Iterator for Query<'w, T> {
    type Item = (Entity, Ref<'w, T>);

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.matched.len() {
            let entity = self.matched[self.cursor];
            self.cursor += 1;
            // A component removed mid-iteration is skipped, not an error
            if let Ok(component) = self.world.get_component::<T>(entity) {
                return Some((entity, component));
            }
        }
        None
    }
}

/// Mutable query over a single component type
pub struct QueryMut<'w, T: Component> {
    world: &'w World,
    matched: Vec<Entity>,
    cursor: usize,
    _marker: PhantomData<T>,
}

impl<'w, T: Component> QueryMut<'w, T> {
    pub(super) fn new(world: &'w World, matched: Vec<Entity>) -> Self {
        Self {
            world,
            matched,
            cursor: 0,
            _marker: PhantomData,
        }
    }
}

impl<'w, T: Component> Iterator for QueryMut<'w, T> {
    type Item = (Entity, RefMut<'w, T>);

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.matched.len() {
            let entity = self.matched[self.cursor];
            self.cursor += 1;
            if let Ok(component) = self.world.get_component_mut::<T>(entity) {
                return Some((entity, component));
            }
        }
        None
    }
}

/// Mutable query over two component types
pub struct Query2Mut<'w, A: Component, B: Component> {
    world: &'w World,
    matched: Vec<Entity>,
    cursor: usize,
    _marker: PhantomData<(A, B)>,
}

impl<'w, A: Component, B: Component> Query2Mut<'w, A, B> {
    pub(super) fn new(world: &'w World, matched: Vec<Entity>) -> Self {
        Self {
            world,
            matched,
            cursor: 0,
            _marker: PhantomData,
        }
    }
}

impl<'w, A: Component, B: Component> Iterator for Query2Mut<'w, A, B> {
    type Item = (Entity, RefMut<'w, A>, RefMut<'w, B>);

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.matched.len() {
            let entity = self.matched[self.cursor];
            self.cursor += 1;
            let Ok(a) = self.world.get_component_mut::<A>(entity) else {
                continue;
            };
            let Ok(b) = self.world.get_component_mut::<B>(entity) else {
                continue;
            };
            return Some((entity, a, b));
        }
        None
    }
}

/// Mutable query over three component types
pub struct Query3Mut<'w, A: Component, B: Component, C: Component> {
    world: &'w World,
    matched: Vec<Entity>,
    cursor: usize,
    _marker: PhantomData<(A, B, C)>,
}

impl<'w, A: Component, B: Component, C: Component> Query3Mut<'w, A, B, C> {
    pub(super) fn new(world: &'w World, matched: Vec<Entity>) -> Self {
        Self {
            world,
            matched,
            cursor: 0,
            _marker: PhantomData,
        }
    }
}

impl<'w, A: Component, B: Component, C: Component> Iterator for Query3Mut<'w, A, B, C> {
    type Item = (Entity, RefMut<'w, A>, RefMut<'w, B>, RefMut<'w, C>);

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.matched.len() {
            let entity = self.matched[self.cursor];
            self.cursor += 1;
            let Ok(a) = self.world.get_component_mut::<A>(entity) else {
                continue;
            };
            let Ok(b) = self.world.get_component_mut::<B>(entity) else {
                continue;
            };
            let Ok(c) = self.world.get_component_mut::<C>(entity) else {
                continue;
            };
            return Some((entity, a, b, c));
        }
        None
    }
}
