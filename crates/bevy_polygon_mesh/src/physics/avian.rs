//! Avian2d edge colliders.

pub use avian2d::prelude::Collider;
use bevy::math::Vec2;

/// Builds a polyline collider from points and explicit segment indices.
pub fn polyline_collider(vertices: Vec<Vec2>, segments: Vec<[u32; 2]>) -> Collider {
  Collider::polyline(vertices, Some(segments))
}
