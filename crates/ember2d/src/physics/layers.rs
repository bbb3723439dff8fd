//! Collision layer system for filtering collision detection
//!
//! Each collider declares the layers it lives on and a mask of layers it is
//! willing to collide with; a pair is only tested when the filter is mutual.

use bitflags::bitflags;

bitflags! {
    /// Collision layer bitmask
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CollisionLayers: u32 {
        /// Player characters
        const PLAYER = 1 << 0;
        /// Enemy characters
        const ENEMY = 1 << 1;
        /// Projectiles (bullets, thrown objects)
        const PROJECTILE = 1 << 2;
        /// Static environment geometry
        const ENVIRONMENT = 1 << 3;
        /// Trigger volumes (no physical response)
        const TRIGGER = 1 << 4;
        /// Debris and small physics objects
        const DEBRIS = 1 << 5;
    }
}

impl CollisionLayers {
    /// Check if two colliders should be tested against each other
    ///
    /// A's layers must appear in B's mask and B's layers in A's mask.
    pub fn should_collide(
        layers_a: CollisionLayers,
        mask_a: CollisionLayers,
        layers_b: CollisionLayers,
        mask_b: CollisionLayers,
    ) -> bool {
        layers_a.intersects(mask_b) && layers_b.intersects(mask_a)
    }
}

impl Default for CollisionLayers {
    fn default() -> Self {
        Self::all()
    }
}

/// Serialize collision layers as their raw bits, keeping the JSON schema flat
pub(crate) mod layer_bits {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::CollisionLayers;

    pub fn serialize<S: Serializer>(
        layers: &CollisionLayers,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(layers.bits())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<CollisionLayers, D::Error> {
        let bits = u32::deserialize(deserializer)?;
        Ok(CollisionLayers::from_bits_truncate(bits))
    }
}
