//! Boundary gizmos for visual debugging.

use bevy::prelude::*;

use crate::components::PolygonBoundary;
use crate::config::PolygonMeshConfig;

/// Green #88B04B
pub const OUTER_RING_COLOR: Color = Color::srgb(0.533, 0.690, 0.294);

/// Coral #FF6F61
pub const INNER_RING_COLOR: Color = Color::srgb(1.0, 0.435, 0.380);

/// System: Draws each boundary ring as a line strip in world space.
pub fn draw_polygon_boundaries(
  config: Res<PolygonMeshConfig>,
  boundaries: Query<(&PolygonBoundary, &GlobalTransform)>,
  mut gizmos: Gizmos,
) {
  if !config.debug_gizmos {
    return;
  }

  for (boundary, transform) in boundaries.iter() {
    for (i, ring) in boundary.geometry.rings.iter().enumerate() {
      let color = if i == 0 {
        OUTER_RING_COLOR
      } else {
        INNER_RING_COLOR
      };
      gizmos.linestrip_2d(
        ring
          .iter()
          .map(|p| transform.transform_point(p.extend(0.0)).truncate()),
        color,
      );
    }
  }
}
