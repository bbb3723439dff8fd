//! Pairwise intersection tests producing manifolds
//!
//! All tests take world-space shape centers and return a [`Manifold`] whose
//! normal points from shape A toward shape B. Degenerate configurations
//! (coincident centers, exact-tie overlaps) resolve to deterministic
//! fallbacks instead of dividing by zero.

use crate::foundation::math::{Point2, Vec2};

use super::manifold::Manifold;
use super::shape::Shape;

/// Test two positioned shapes for intersection
///
/// Dispatches over the closed shape set; mixed AABB/circle pairs reuse the
/// circle-vs-box test with the normal flipped so it always points A to B.
pub fn collide(shape_a: &Shape, pos_a: Vec2, shape_b: &Shape, pos_b: Vec2) -> Manifold {
    match (shape_a, shape_b) {
        (Shape::Aabb { half_extents: ha }, Shape::Aabb { half_extents: hb }) => {
            aabb_aabb(*ha, pos_a, *hb, pos_b)
        }
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            circle_circle(*ra, pos_a, *rb, pos_b)
        }
        (Shape::Circle { radius }, Shape::Aabb { half_extents }) => {
            circle_aabb(*radius, pos_a, *half_extents, pos_b)
        }
        (Shape::Aabb { half_extents }, Shape::Circle { radius }) => {
            circle_aabb(*radius, pos_b, *half_extents, pos_a).reversed()
        }
    }
}

/// Sign of an axis delta, treating zero as positive for determinism
fn axis_sign(value: f32) -> f32 {
    if value >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// AABB vs AABB: minimum-overlap axis gives the normal
///
/// On an exact overlap tie the X axis wins, keeping behavior deterministic.
/// With exactly coincident centers the zero delta resolves to a +X normal
/// for both argument orders, so this one degenerate configuration does not
/// produce opposite normals when the arguments are swapped.
fn aabb_aabb(half_a: Vec2, pos_a: Vec2, half_b: Vec2, pos_b: Vec2) -> Manifold {
    let delta = pos_b - pos_a;
    let overlap_x = half_a.x + half_b.x - delta.x.abs();
    let overlap_y = half_a.y + half_b.y - delta.y.abs();

    if overlap_x <= 0.0 || overlap_y <= 0.0 {
        return Manifold::none();
    }

    // Center of the overlap rectangle
    let min = Vec2::new(
        (pos_a.x - half_a.x).max(pos_b.x - half_b.x),
        (pos_a.y - half_a.y).max(pos_b.y - half_b.y),
    );
    let max = Vec2::new(
        (pos_a.x + half_a.x).min(pos_b.x + half_b.x),
        (pos_a.y + half_a.y).min(pos_b.y + half_b.y),
    );
    let contact = Point2::from((min + max) * 0.5);

    if overlap_x <= overlap_y {
        Manifold {
            normal: Vec2::new(axis_sign(delta.x), 0.0),
            penetration: overlap_x,
            contact,
        }
    } else {
        Manifold {
            normal: Vec2::new(0.0, axis_sign(delta.y)),
            penetration: overlap_y,
            contact,
        }
    }
}

/// Circle vs circle: overlap iff center distance is below the radii sum
///
/// Coincident centers fall back to a +X normal with full penetration.
fn circle_circle(radius_a: f32, pos_a: Vec2, radius_b: f32, pos_b: Vec2) -> Manifold {
    let delta = pos_b - pos_a;
    let radii_sum = radius_a + radius_b;
    let distance_squared = delta.magnitude_squared();

    if distance_squared >= radii_sum * radii_sum {
        return Manifold::none();
    }

    let distance = distance_squared.sqrt();
    let normal = if distance > 0.0 {
        delta / distance
    } else {
        Vec2::x()
    };

    Manifold {
        normal,
        penetration: radii_sum - distance,
        contact: Point2::from(pos_a + normal * radius_a),
    }
}

/// Circle (A) vs AABB (B): closest-point-on-box test
///
/// A circle center inside the box falls back to the minimum-separation axis,
/// with penetration measured to the nearest face plus the radius.
fn circle_aabb(radius: f32, circle_pos: Vec2, half: Vec2, box_pos: Vec2) -> Manifold {
    let delta = circle_pos - box_pos;
    let closest = Vec2::new(
        delta.x.clamp(-half.x, half.x),
        delta.y.clamp(-half.y, half.y),
    );
    let inside = closest == delta;

    if inside {
        let sep_x = half.x - delta.x.abs();
        let sep_y = half.y - delta.y.abs();
        let (normal, separation) = if sep_x <= sep_y {
            (Vec2::new(-axis_sign(delta.x), 0.0), sep_x)
        } else {
            (Vec2::new(0.0, -axis_sign(delta.y)), sep_y)
        };
        return Manifold {
            normal,
            penetration: radius + separation,
            contact: Point2::from(circle_pos),
        };
    }

    let on_box = box_pos + closest;
    let to_box = on_box - circle_pos;
    let distance_squared = to_box.magnitude_squared();
    if distance_squared >= radius * radius {
        return Manifold::none();
    }

    let distance = distance_squared.sqrt();
    Manifold {
        // distance > 0 here: the center is outside the box
        normal: to_box / distance,
        penetration: radius - distance,
        contact: Point2::from(on_box),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circles_overlapping() {
        let a = Shape::circle(5.0);
        let b = Shape::circle(5.0);
        let manifold = collide(&a, Vec2::zeros(), &b, Vec2::new(8.0, 0.0));

        assert!(manifold.occurred());
        assert_relative_eq!(manifold.penetration, 2.0);
        assert_relative_eq!(manifold.normal.x, 1.0);
        assert_relative_eq!(manifold.normal.y, 0.0);
    }

    #[test]
    fn test_circles_apart() {
        let a = Shape::circle(5.0);
        let b = Shape::circle(5.0);
        let manifold = collide(&a, Vec2::zeros(), &b, Vec2::new(11.0, 0.0));

        assert!(!manifold.occurred());
    }

    #[test]
    fn test_circles_touching_is_no_collision() {
        let a = Shape::circle(5.0);
        let b = Shape::circle(5.0);
        let manifold = collide(&a, Vec2::zeros(), &b, Vec2::new(10.0, 0.0));

        assert!(!manifold.occurred());
    }

    #[test]
    fn test_coincident_circles_fall_back_to_x_normal() {
        let a = Shape::circle(2.0);
        let b = Shape::circle(3.0);
        let manifold = collide(&a, Vec2::new(1.0, 1.0), &b, Vec2::new(1.0, 1.0));

        assert!(manifold.occurred());
        assert_eq!(manifold.normal, Vec2::x());
        assert_relative_eq!(manifold.penetration, 5.0);
    }

    #[test]
    fn test_aabb_overlap_picks_minimum_axis() {
        let a = Shape::aabb(4.0, 4.0);
        let b = Shape::aabb(4.0, 4.0);
        // Deep overlap on y, shallow on x
        let manifold = collide(&a, Vec2::zeros(), &b, Vec2::new(3.5, 1.0));

        assert!(manifold.occurred());
        assert_eq!(manifold.normal, Vec2::new(1.0, 0.0));
        assert_relative_eq!(manifold.penetration, 0.5);
    }

    #[test]
    fn test_aabb_tie_prefers_x_axis() {
        let a = Shape::aabb(4.0, 4.0);
        let b = Shape::aabb(4.0, 4.0);
        let manifold = collide(&a, Vec2::zeros(), &b, Vec2::new(2.0, 2.0));

        assert_eq!(manifold.normal, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_coincident_aabb_centers_pin_plus_x_normal() {
        let a = Shape::aabb(4.0, 4.0);
        let b = Shape::aabb(4.0, 4.0);
        let pos = Vec2::new(1.0, 1.0);

        // Zero delta: both argument orders resolve to the same +X fallback
        let forward = collide(&a, pos, &b, pos);
        let backward = collide(&b, pos, &a, pos);
        assert_eq!(forward.normal, Vec2::new(1.0, 0.0));
        assert_eq!(backward.normal, Vec2::new(1.0, 0.0));
        assert_relative_eq!(forward.penetration, 4.0);
    }

    #[test]
    fn test_aabb_symmetry_flips_normal() {
        let a = Shape::aabb(4.0, 2.0);
        let b = Shape::aabb(2.0, 6.0);
        let pos_a = Vec2::new(0.0, 0.0);
        let pos_b = Vec2::new(2.5, 1.0);

        let forward = collide(&a, pos_a, &b, pos_b);
        let backward = collide(&b, pos_b, &a, pos_a);

        assert_eq!(forward.occurred(), backward.occurred());
        assert_relative_eq!(forward.penetration, backward.penetration);
        assert_eq!(forward.normal, -backward.normal);
    }

    #[test]
    fn test_aabb_separated_on_one_axis() {
        let a = Shape::aabb(2.0, 2.0);
        let b = Shape::aabb(2.0, 2.0);
        let manifold = collide(&a, Vec2::zeros(), &b, Vec2::new(5.0, 0.5));

        assert!(!manifold.occurred());
    }

    #[test]
    fn test_circle_against_box_face() {
        let circle = Shape::circle(1.0);
        let aabb = Shape::aabb(4.0, 4.0);
        // Circle to the right of the box, overlapping its face by 0.5
        let manifold = collide(&circle, Vec2::new(2.5, 0.0), &aabb, Vec2::zeros());

        assert!(manifold.occurred());
        assert_eq!(manifold.normal, Vec2::new(-1.0, 0.0));
        assert_relative_eq!(manifold.penetration, 0.5);
        assert_relative_eq!(manifold.contact.x, 2.0);
    }

    #[test]
    fn test_circle_center_inside_box() {
        let circle = Shape::circle(1.0);
        let aabb = Shape::aabb(4.0, 4.0);
        let manifold = collide(&circle, Vec2::new(1.0, 0.0), &aabb, Vec2::zeros());

        assert!(manifold.occurred());
        // Nearest exit is +x, so the A-to-B normal points -x
        assert_eq!(manifold.normal, Vec2::new(-1.0, 0.0));
        assert_relative_eq!(manifold.penetration, 2.0); // radius 1 + separation 1
    }

    #[test]
    fn test_mixed_pair_is_symmetric() {
        let circle = Shape::circle(1.5);
        let aabb = Shape::aabb(4.0, 4.0);
        let circle_pos = Vec2::new(3.0, 0.5);
        let box_pos = Vec2::zeros();

        let forward = collide(&circle, circle_pos, &aabb, box_pos);
        let backward = collide(&aabb, box_pos, &circle, circle_pos);

        assert_eq!(forward.occurred(), backward.occurred());
        assert_relative_eq!(forward.penetration, backward.penetration);
        assert_eq!(forward.normal, -backward.normal);
    }
}
