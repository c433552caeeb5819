// Internal Dependencies ------------------------------------------------------
use ::geometry::{Circle, Ray};
use ::vector::Vec2;


// Hit Result -----------------------------------------------------------------
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HitResult {
    /// Distance along the ray to the entry point.
    pub distance: f32,
    pub point: Vec2,
    /// Outward unit normal at `point`.
    pub normal: Vec2
}


// 2D Collision ---------------------------------------------------------------
/// Intersects a ray with a circle using the closest approach of the ray to
/// the circle center.
///
/// Circles whose center projects behind the ray origin are never hit, even
/// when the backwards extension of the ray would cross them. The returned
/// distance may be zero or negative when the origin already lies inside the
/// circle, see `ray_intersect_circle_within` for the checked variant.
pub fn ray_intersect_circle(ray: &Ray, circle: &Circle) -> Option<HitResult> {

    let (origin, direction) = (ray.origin(), ray.direction());

    // compute the value t of the closest point to the circle center
    let to_center = circle.center() - origin;
    let t = to_center.dot(direction);
    if t < 0.0 {
        return None;
    }

    // compute the squared distance from the closest point to the center
    let closest = origin + direction * t;
    let perp = circle.center() - closest;
    let d2 = perp.dot(perp);

    let r2 = circle.radius() * circle.radius();
    if d2 > r2 {
        return None;
    }

    // Entry point of the chord
    let dt = (r2 - d2).sqrt();
    let distance = t - dt;
    let point = origin + direction * distance;

    Some(HitResult {
        distance: distance,
        point: point,
        normal: (point - circle.center()).normalize()
    })

}

/// Only accepts hits with `0 < distance < max_distance`.
pub fn ray_intersect_circle_within(
    ray: &Ray,
    circle: &Circle,
    max_distance: f32

) -> Option<HitResult> {
    match ray_intersect_circle(ray, circle) {
        Some(hit) => if hit.distance > 0.0 && hit.distance < max_distance {
            Some(hit)

        } else {
            None
        },
        None => None
    }
}

