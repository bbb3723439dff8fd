//! Rigid body component for entities that move under physics
//!
//! Holds velocity, acceleration, drag, and the speed clamp; the actual
//! integration step lives in [`physics::integrator`](crate::physics::integrator).

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;

/// Component for entities simulated by the physics system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigidBody {
    /// Linear velocity in units per second
    pub velocity: Vec2,

    /// Externally applied acceleration in units per second squared
    ///
    /// Gravity is not stored here; the integrator adds it on top each tick.
    pub acceleration: Vec2,

    /// Drag coefficient (>= 0); applied as `v *= 1 / (1 + drag * dt)`
    pub drag: f32,

    /// Maximum speed; non-positive disables the clamp
    pub max_speed: f32,

    /// Multiplier on the global gravity vector (0 = unaffected by gravity)
    pub gravity_scale: f32,

    /// Whether the body is simulated
    pub enabled: bool,
}

impl RigidBody {
    /// Create a new body at rest with gravity enabled
    pub fn new() -> Self {
        Self {
            velocity: Vec2::zeros(),
            acceleration: Vec2::zeros(),
            drag: 0.0,
            max_speed: 0.0,
            gravity_scale: 1.0,
            enabled: true,
        }
    }

    /// Create a body with an initial velocity
    pub fn with_velocity(velocity: Vec2) -> Self {
        Self {
            velocity,
            ..Self::new()
        }
    }

    /// Set the drag coefficient (negative values are clamped to zero)
    pub fn set_drag(&mut self, drag: f32) {
        self.drag = drag.max(0.0);
    }

    /// Set the maximum speed; pass 0 or a negative value to disable the clamp
    pub fn set_max_speed(&mut self, max_speed: f32) {
        self.max_speed = max_speed;
    }

    /// Add an instantaneous velocity change
    pub fn apply_impulse(&mut self, delta_velocity: Vec2) {
        self.velocity += delta_velocity;
    }

    /// Current speed in units per second
    pub fn speed(&self) -> f32 {
        self.velocity.magnitude()
    }

    /// Zero out all motion
    pub fn stop(&mut self) {
        self.velocity = Vec2::zeros();
        self.acceleration = Vec2::zeros();
    }
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_body_is_at_rest() {
        let body = RigidBody::new();

        assert_eq!(body.velocity, Vec2::zeros());
        assert_eq!(body.acceleration, Vec2::zeros());
        assert_eq!(body.gravity_scale, 1.0);
        assert!(body.enabled);
    }

    #[test]
    fn test_drag_cannot_be_negative() {
        let mut body = RigidBody::new();
        body.set_drag(-1.0);
        assert_eq!(body.drag, 0.0);
    }

    #[test]
    fn test_apply_impulse_accumulates() {
        let mut body = RigidBody::with_velocity(Vec2::new(1.0, 0.0));
        body.apply_impulse(Vec2::new(0.0, 2.0));
        assert_eq!(body.velocity, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_stop_clears_motion() {
        let mut body = RigidBody::with_velocity(Vec2::new(3.0, 4.0));
        body.acceleration = Vec2::new(1.0, 1.0);

        body.stop();
        assert_eq!(body.velocity, Vec2::zeros());
        assert_eq!(body.acceleration, Vec2::zeros());
    }
}
