//! Entity-Component-System runtime
//!
//! The [`World`] is a sparse registry mapping generational [`Entity`] handles
//! to heterogeneous component pools. Destruction is deferred: `despawn` marks
//! an entity and the per-frame `refresh` sweep frees its storage, so queries
//! started earlier in the frame are never invalidated.

pub mod component;
pub mod components;
pub mod entity;
pub mod query;
pub mod storage;
pub mod system;
pub mod systems;
pub mod world;

pub use component::Component;
pub use entity::Entity;
pub use query::{Query, Query2Mut, Query3Mut, QueryMut};
pub use system::{Schedule, System};
pub use world::{EcsError, World};
