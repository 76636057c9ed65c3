//! Evenly spaced points on a circle.

use std::f32::consts::TAU;

use bevy::math::Vec2;

/// Returns `side_count` points on a circle of `radius` around the origin.
///
/// Points start on the +X axis and advance counter-clockwise in steps of
/// `TAU / side_count`. A side count of zero yields no points.
pub fn circumference_points(side_count: u32, radius: f32) -> Vec<Vec2> {
  if side_count == 0 {
    return Vec::new();
  }

  let step = TAU / side_count as f32;
  (0..side_count)
    .map(|i| {
      let angle = step * i as f32;
      Vec2::new(angle.cos() * radius, angle.sin() * radius)
    })
    .collect()
}
