//! Texture coordinates for circle-sampled vertices.

use bevy::math::Vec2;

/// Maps positions into texture space.
///
/// The disc of `outer_radius` lands on the unit square centered at
/// `(0.5, 0.5)`, then both components are scaled by `repeat_count` so the
/// texture tiles. Inner ring vertices of a hollow polygon use the same outer
/// radius, which keeps one continuous mapping across the band.
pub fn map_uvs(vertices: &[Vec2], outer_radius: f32, repeat_count: u32) -> Vec<Vec2> {
  let repeat = repeat_count as f32;
  vertices
    .iter()
    .map(|v| (*v / outer_radius * 0.5 + Vec2::splat(0.5)) * repeat)
    .collect()
}
