//! Entity implementation

use std::fmt;

/// Entity identifier
///
/// An opaque index into the [`World`](super::World) paired with a generation
/// counter. When an index is recycled after destruction its generation is
/// bumped, so handles held across a `refresh` are detected as stale instead
/// of silently aliasing a new entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity {
    index: u32,
    generation: u32,
}

impl Entity {
    /// Create a new entity handle
    pub(super) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Get the entity's slot index
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Get the entity's generation
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}
