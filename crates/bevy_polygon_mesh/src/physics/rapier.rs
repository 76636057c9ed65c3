//! Rapier2d edge colliders.

use bevy::math::Vec2;
pub use bevy_rapier2d::prelude::Collider;

/// Builds a polyline collider from points and explicit segment indices.
pub fn polyline_collider(vertices: Vec<Vec2>, segments: Vec<[u32; 2]>) -> Collider {
  Collider::polyline(vertices, Some(segments))
}
