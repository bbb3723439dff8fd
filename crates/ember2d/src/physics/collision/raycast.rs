//! Raycasting against collision shapes
//!
//! Rays here are swept displacements: `direction` is the full movement for
//! the step, not a unit vector, and the hit parameter `t` is the fraction of
//! that displacement traveled before impact. A hit therefore
//! [`occurred`](RaycastHit::occurred) iff `0 <= t < 1`.

use crate::foundation::math::{Point2, Vec2};

use super::shape::Shape;

/// A swept ray for collision queries
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Start point in world space
    pub origin: Point2,
    /// Full displacement for the step (not normalized)
    pub direction: Vec2,
}

impl Ray {
    /// Create a new ray
    pub fn new(origin: Point2, direction: Vec2) -> Self {
        Self { origin, direction }
    }

    /// Point along the ray at fraction `t`
    pub fn point_at(&self, t: f32) -> Point2 {
        self.origin + self.direction * t
    }
}

/// Result of a raycast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// Fraction of the displacement traveled to first impact
    pub t: f32,
    /// Surface normal at the impact point
    pub normal: Vec2,
}

impl RaycastHit {
    /// A result reporting no impact within the step
    pub fn miss() -> Self {
        Self {
            t: f32::INFINITY,
            normal: Vec2::zeros(),
        }
    }

    /// Whether the ray hits within this step
    ///
    /// True iff `0 <= t < 1`.
    pub fn occurred(&self) -> bool {
        self.t >= 0.0 && self.t < 1.0
    }
}

/// Cast a ray against a positioned shape
///
/// A zero-length displacement is a deterministic miss. Rays starting inside
/// the shape miss as well: there is no surface crossing to report.
pub fn raycast(ray: &Ray, shape: &Shape, shape_pos: Vec2) -> RaycastHit {
    match shape {
        Shape::Aabb { half_extents } => raycast_aabb(ray, *half_extents, shape_pos),
        Shape::Circle { radius } => raycast_circle(ray, *radius, shape_pos),
    }
}

/// Slab test against an AABB
fn raycast_aabb(ray: &Ray, half: Vec2, box_pos: Vec2) -> RaycastHit {
    let min = box_pos - half;
    let max = box_pos + half;

    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    let mut normal = Vec2::zeros();

    for axis in 0..2 {
        let origin = ray.origin[axis];
        let dir = ray.direction[axis];

        if dir == 0.0 {
            // Parallel to this slab: must already be within it
            if origin < min[axis] || origin > max[axis] {
                return RaycastHit::miss();
            }
            continue;
        }

        let mut t1 = (min[axis] - origin) / dir;
        let mut t2 = (max[axis] - origin) / dir;
        // The entry face normal opposes the travel direction on this axis
        let axis_normal = -dir.signum();
        if t1 > t2 {
            std::mem::swap(&mut t1, &mut t2);
        }
        if t1 > t_near {
            t_near = t1;
            normal = Vec2::zeros();
            normal[axis] = axis_normal;
        }
        t_far = t_far.min(t2);
        if t_near > t_far {
            return RaycastHit::miss();
        }
    }

    // Entry behind the origin means the ray starts inside or past the box
    if t_near < 0.0 || normal == Vec2::zeros() {
        return RaycastHit::miss();
    }

    RaycastHit { t: t_near, normal }
}

/// Quadratic test against a circle, scaled by the displacement length
fn raycast_circle(ray: &Ray, radius: f32, center: Vec2) -> RaycastHit {
    let oc = ray.origin.coords - center;
    let a = ray.direction.magnitude_squared();
    if a == 0.0 {
        return RaycastHit::miss();
    }

    let b = 2.0 * oc.dot(&ray.direction);
    let c = oc.magnitude_squared() - radius * radius;
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return RaycastHit::miss();
    }

    // First crossing only: exits (the larger root) are not impacts
    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    if t < 0.0 {
        return RaycastHit::miss();
    }

    let hit_point = ray.point_at(t);
    let normal = (hit_point.coords - center) / radius;
    RaycastHit { t, normal }
}
