//! Pairwise collision predicate
//!
//! Every entity in the game is a circle for collision purposes, so the whole
//! collision system reduces to one overlap test evaluated pairwise each frame.

use glam::Vec2;

/// Two circles collide iff the distance between centers is strictly less
/// than the sum of radii. Touching circles (distance == sum) do not collide.
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let r = ra + rb;
    a.distance_squared(b) < r * r
}
