//! Built-in systems shipped with the engine

pub mod lifetime;

pub use lifetime::LifetimeSystem;
