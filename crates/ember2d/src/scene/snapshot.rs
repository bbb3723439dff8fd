//! Scene snapshots: JSON capture and restore
//!
//! A snapshot records the physics context and, per entity, the built-in
//! components it carries. Entity identity is not preserved: applying a
//! snapshot spawns fresh entities, so handles saved before a capture are
//! meaningless against the restored world.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ecs::components::{Collider, Lifetime, RigidBody, Transform};
use crate::ecs::World;
use crate::physics::Physics;

use super::Scene;

/// Errors from saving or loading a scene snapshot
#[derive(Debug, Error)]
pub enum SceneError {
    /// Filesystem failure reading or writing the snapshot
    #[error("snapshot io: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot text was not valid JSON for this format
    #[error("snapshot json: {0}")]
    Json(#[from] serde_json::Error),
}

/// One entity's built-in components
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EntityRecord {
    transform: Option<Transform>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    rigid_body: Option<RigidBody>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    collider: Option<Collider>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    lifetime: Option<Lifetime>,
}

/// Serializable state of a scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneSnapshot {
    physics: Physics,
    entities: Vec<EntityRecord>,
}

impl SceneSnapshot {
    /// Capture the physics context and every live entity's components
    pub fn capture(world: &World, physics: &Physics) -> Self {
        let entities = world
            .entities()
            .map(|entity| EntityRecord {
                transform: world.get_component::<Transform>(entity).ok().map(|c| c.clone()),
                rigid_body: world.get_component::<RigidBody>(entity).ok().map(|c| c.clone()),
                collider: world.get_component::<Collider>(entity).ok().map(|c| c.clone()),
                lifetime: world.get_component::<Lifetime>(entity).ok().map(|c| c.clone()),
            })
            .collect();

        Self {
            physics: physics.clone(),
            entities,
        }
    }

    /// Replace the world's contents and physics context with this snapshot
    ///
    /// The world is cleared first; all previously held entity handles become
    /// dead.
    pub fn apply(&self, world: &mut World, physics: &mut Physics) {
        world.clear();
        *physics = self.physics.clone();

        for record in &self.entities {
            let entity = world.spawn();
            if let Some(transform) = &record.transform {
                world.add_component(entity, transform.clone()).ok();
            }
            if let Some(body) = &record.rigid_body {
                world.add_component(entity, body.clone()).ok();
            }
            if let Some(collider) = &record.collider {
                world.add_component(entity, collider.clone()).ok();
            }
            if let Some(lifetime) = &record.lifetime {
                world.add_component(entity, lifetime.clone()).ok();
            }
        }
    }

    /// Number of entity records in the snapshot
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot from JSON text
    pub fn from_json_str(text: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Write the snapshot to a file as JSON
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneError> {
        let json = self.to_json_string()?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Read a snapshot from a JSON file
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl Scene {
    /// Capture this scene's current state
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot::capture(self.world(), self.physics())
    }

    /// Save this scene's state to a JSON file
    pub fn save_snapshot<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneError> {
        self.snapshot().save_to_path(path)
    }

    /// Replace this scene's world and physics context with a snapshot
    pub fn apply_snapshot(&mut self, snapshot: &SceneSnapshot) {
        snapshot.apply(&mut self.world, &mut self.physics.physics);
    }

    /// Restore state from a JSON file, replacing the current world
    pub fn load_snapshot<P: AsRef<Path>>(&mut self, path: P) -> Result<(), SceneError> {
        let snapshot = SceneSnapshot::load_from_path(path)?;
        self.apply_snapshot(&snapshot);
        Ok(())
    }
}
