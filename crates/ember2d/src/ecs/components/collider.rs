//! Collider component: a bounding shape plus layer filtering

use serde::{Deserialize, Serialize};

use crate::physics::layers::{layer_bits, CollisionLayers};
use crate::physics::Shape;

/// Component marking an entity as collidable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    /// Model-space bounding shape, positioned by the entity's transform
    pub shape: Shape,

    /// Layers this collider lives on
    #[serde(with = "layer_bits")]
    pub layers: CollisionLayers,

    /// Layers this collider is willing to collide with
    #[serde(with = "layer_bits")]
    pub mask: CollisionLayers,

    /// Trigger colliders report contacts but expect no physical response;
    /// their pairs surface via `CollisionSystem::trigger_pairs`
    pub is_trigger: bool,
}

impl Collider {
    /// Create a collider on all layers, colliding with everything
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            layers: CollisionLayers::all(),
            mask: CollisionLayers::all(),
            is_trigger: false,
        }
    }

    /// Restrict the layers this collider lives on and collides with
    pub fn with_layers(mut self, layers: CollisionLayers, mask: CollisionLayers) -> Self {
        self.layers = layers;
        self.mask = mask;
        self
    }

    /// Mark this collider as a trigger volume
    pub fn as_trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }
}
