//! Semi-implicit Euler integration for rigid bodies
//!
//! Intentionally lossy game-feel integration, not physical accuracy: error
//! accumulates each frame, and the drag formula is timestep-sensitive (hence
//! the engine-wide fixed step, see
//! [`FixedTimestep`](crate::foundation::time::FixedTimestep)).

use crate::ecs::components::RigidBody;
use crate::foundation::math::Vec2;

/// Advance one body by one tick and return its position delta
///
/// Order per tick: gravity (scaled by the body's gravity scale) joins the
/// external acceleration, velocity integrates, drag damps it as
/// `v *= 1 / (1 + drag * dt)`, then speed is clamped to `max_speed` by
/// rescaling so direction is preserved. A zero, negative, or non-finite `dt`
/// is a no-op so NaN can never propagate through the damping division.
pub fn integrate(body: &mut RigidBody, gravity: Vec2, dt: f32) -> Vec2 {
    if !body.enabled || !dt.is_finite() || dt <= 0.0 {
        return Vec2::zeros();
    }

    let acceleration = body.acceleration + gravity * body.gravity_scale;
    body.velocity += acceleration * dt;

    if body.drag > 0.0 {
        body.velocity /= 1.0 + body.drag * dt;
    }

    if body.max_speed > 0.0 {
        let speed = body.velocity.magnitude();
        if speed > body.max_speed {
            body.velocity *= body.max_speed / speed;
        }
    }

    body.velocity * dt
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_gravity_accelerates_body() {
        let mut body = RigidBody::new();
        let gravity = Vec2::new(0.0, 10.0);

        integrate(&mut body, gravity, DT);
        assert_relative_eq!(body.velocity.y, 10.0 * DT);
    }

    #[test]
    fn test_gravity_scale_multiplies_gravity() {
        let mut body = RigidBody::new();
        body.gravity_scale = 0.0;

        integrate(&mut body, Vec2::new(0.0, 10.0), DT);
        assert_eq!(body.velocity, Vec2::zeros());
    }

    #[test]
    fn test_drag_damps_velocity() {
        let mut body = RigidBody::with_velocity(Vec2::new(12.0, 0.0));
        body.set_drag(2.0);

        integrate(&mut body, Vec2::zeros(), 0.5);
        // v / (1 + 2 * 0.5) = v / 2
        assert_relative_eq!(body.velocity.x, 6.0);
    }

    #[test]
    fn test_speed_clamp_preserves_direction() {
        let mut body = RigidBody::with_velocity(Vec2::new(30.0, 40.0));
        body.set_max_speed(5.0);

        integrate(&mut body, Vec2::zeros(), DT);
        assert!(body.speed() <= 5.0 + f32::EPSILON);
        assert_relative_eq!(body.velocity.x / body.velocity.y, 0.75, epsilon = 1e-5);
    }

    #[test]
    fn test_non_positive_clamp_disables_limit() {
        let mut body = RigidBody::with_velocity(Vec2::new(1000.0, 0.0));
        body.set_max_speed(0.0);

        integrate(&mut body, Vec2::zeros(), DT);
        assert_relative_eq!(body.velocity.x, 1000.0);
    }

    #[test]
    fn test_zero_dt_is_a_noop() {
        let mut body = RigidBody::with_velocity(Vec2::new(3.0, 0.0));
        body.set_drag(5.0);

        let delta = integrate(&mut body, Vec2::new(0.0, 100.0), 0.0);
        assert_eq!(delta, Vec2::zeros());
        assert_eq!(body.velocity, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn test_bad_dt_never_produces_nan() {
        let mut body = RigidBody::with_velocity(Vec2::new(3.0, 0.0));
        body.set_drag(5.0);

        for dt in [-1.0, f32::NAN, f32::INFINITY] {
            integrate(&mut body, Vec2::new(0.0, 9.81), dt);
            assert!(body.velocity.x.is_finite());
            assert!(body.velocity.y.is_finite());
        }
    }

    #[test]
    fn test_disabled_body_is_skipped() {
        let mut body = RigidBody::with_velocity(Vec2::new(3.0, 0.0));
        body.enabled = false;

        let delta = integrate(&mut body, Vec2::new(0.0, 9.81), DT);
        assert_eq!(delta, Vec2::zeros());
        assert_eq!(body.velocity, Vec2::new(3.0, 0.0));
    }
}
