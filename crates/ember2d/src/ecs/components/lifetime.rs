//! Lifetime component: per-entity countdown to destruction

use serde::{Deserialize, Serialize};

/// Component for entities that expire after a fixed duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lifetime {
    /// Remaining time in seconds
    pub remaining: f32,
}

impl Lifetime {
    /// Create a lifetime with the given duration in seconds
    pub fn new(seconds: f32) -> Self {
        Self { remaining: seconds }
    }

    /// Count down by one tick
    pub fn tick(&mut self, dt: f32) {
        if dt > 0.0 {
            self.remaining -= dt;
        }
    }

    /// Whether the countdown has elapsed
    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }
}
