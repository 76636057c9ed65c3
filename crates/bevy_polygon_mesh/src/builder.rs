//! Mode selection and pipeline orchestration.
//!
//! [`build_polygon`] runs one full generation cycle: clamp, pick filled or
//! hollow, then sample, triangulate, map UVs and close the boundary rings.
//! Nothing is carried over between calls.

use bevy::math::Vec2;

use crate::geometry::{
  CollisionGeometry, Triangle, circumference_points, flatten_indices, map_uvs, triangulate_fan,
  triangulate_ring,
};
use crate::params::{PolygonMode, PolygonParameters};

/// Renderable output of one generation cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
  /// Planar vertex positions (z is implicitly 0).
  pub vertices: Vec<Vec2>,
  /// Triangles indexing into `vertices`.
  pub triangles: Vec<Triangle>,
  /// One texture coordinate per vertex, same order.
  pub uvs: Vec<Vec2>,
}

impl MeshData {
  /// Returns true if the mesh has no triangles.
  pub fn is_empty(&self) -> bool {
    self.triangles.is_empty()
  }

  /// Returns vertex positions as 3D points on the z = 0 plane.
  pub fn positions(&self) -> Vec<[f32; 3]> {
    self.vertices.iter().map(|v| [v.x, v.y, 0.0]).collect()
  }

  /// Returns the flat triangle index buffer.
  pub fn indices(&self) -> Vec<u32> {
    flatten_indices(&self.triangles)
  }

  /// Returns texture coordinates as plain arrays.
  pub fn uv_coords(&self) -> Vec<[f32; 2]> {
    self.uvs.iter().map(|uv| uv.to_array()).collect()
  }

  /// Returns the axis-aligned bounds of the vertices as `(min, max)`.
  pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
    let first = *self.vertices.first()?;
    Some(
      self
        .vertices
        .iter()
        .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v))),
    )
  }
}

/// Everything one generation cycle produces.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonGeometry {
  /// Mode the cycle ran in.
  pub mode: PolygonMode,
  /// Parameters after the inner radius clamp.
  pub params: PolygonParameters,
  /// Mesh buffers for the render sink.
  pub mesh: MeshData,
  /// Boundary rings for the collision sink.
  pub collision: CollisionGeometry,
}

/// Runs the full generation pipeline for `params`.
///
/// Only the inner radius clamp is applied here; other ranges are the
/// parameter source's responsibility (see [`PolygonParameters::sanitized`]).
pub fn build_polygon(params: &PolygonParameters) -> PolygonGeometry {
  let params = params.clamped();
  let mode = params.mode();

  let (mesh, collision) = match mode {
    PolygonMode::Filled => build_filled(&params),
    PolygonMode::Hollow => build_hollow(&params),
  };

  log::trace!(
    "built {:?} polygon: {} vertices, {} triangles, {} boundary points",
    mode,
    mesh.vertices.len(),
    mesh.triangles.len(),
    collision.point_count()
  );

  PolygonGeometry {
    mode,
    params,
    mesh,
    collision,
  }
}

fn build_filled(params: &PolygonParameters) -> (MeshData, CollisionGeometry) {
  let vertices = circumference_points(params.side_count, params.outer_radius);
  let triangles = triangulate_fan(vertices.len() as u32);
  let uvs = map_uvs(&vertices, params.outer_radius, params.uv_repeat_count);
  let collision = CollisionGeometry::filled(&vertices);

  (
    MeshData {
      vertices,
      triangles,
      uvs,
    },
    collision,
  )
}

fn build_hollow(params: &PolygonParameters) -> (MeshData, CollisionGeometry) {
  let outer = circumference_points(params.side_count, params.outer_radius);
  let inner = circumference_points(params.side_count, params.inner_radius);

  let mut vertices = Vec::with_capacity(outer.len() + inner.len());
  vertices.extend_from_slice(&outer);
  vertices.extend_from_slice(&inner);

  let triangles = triangulate_ring(params.side_count);
  // Outer radius for both rings: one continuous mapping across the band.
  let uvs = map_uvs(&vertices, params.outer_radius, params.uv_repeat_count);
  let collision = CollisionGeometry::hollow(&outer, &inner);

  (
    MeshData {
      vertices,
      triangles,
      uvs,
    },
    collision,
  )
}

/// Stateful front end to [`build_polygon`] with optional change detection.
///
/// With change detection off (the default) every call rebuilds. With it on,
/// a call whose clamped parameters equal the previous call's returns `None`.
#[derive(Clone, Debug, Default)]
pub struct PolygonMeshBuilder {
  change_detection: bool,
  last: Option<PolygonParameters>,
}

impl PolygonMeshBuilder {
  /// Creates a builder that rebuilds on every call.
  pub fn new() -> Self {
    Self::default()
  }

  /// Enables or disables skipping unchanged parameters.
  pub fn with_change_detection(mut self, enabled: bool) -> Self {
    self.change_detection = enabled;
    self
  }

  /// Returns whether change detection is enabled.
  pub fn change_detection(&self) -> bool {
    self.change_detection
  }

  /// Forgets the previous parameters so the next call always rebuilds.
  pub fn invalidate(&mut self) {
    self.last = None;
  }

  /// Builds geometry for `params`, or returns `None` if change detection is
  /// on and nothing changed since the last build.
  pub fn build(&mut self, params: &PolygonParameters) -> Option<PolygonGeometry> {
    let effective = params.clamped();
    if self.change_detection && self.last == Some(effective) {
      return None;
    }
    self.last = Some(effective);
    Some(build_polygon(params))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn filled_square_matches_fan_layout() {
    let geometry = build_polygon(&PolygonParameters::filled(4, 2.0));

    assert_eq!(geometry.mode, PolygonMode::Filled);
    assert_eq!(geometry.mesh.vertices.len(), 4);
    assert_eq!(geometry.mesh.indices(), vec![0, 2, 1, 0, 3, 2]);
    assert_eq!(geometry.collision.rings.len(), 1);
    assert_eq!(geometry.collision.rings[0].len(), 5);
    assert_eq!(geometry.collision.rings[0][4], geometry.collision.rings[0][0]);
  }

  #[test]
  fn clamped_inner_radius_is_reported() {
    let geometry = build_polygon(&PolygonParameters::hollow(8, 3.0, 5.0));
    assert!((geometry.params.inner_radius - 2.9).abs() < 1e-6);

    let inner_first = geometry.mesh.vertices[8];
    assert!((inner_first.length() - 2.9).abs() < 1e-5);
  }

  #[test]
  fn bounds_cover_all_vertices() {
    let geometry = build_polygon(&PolygonParameters::filled(4, 2.0));
    let (min, max) = geometry.mesh.bounds().unwrap();
    assert!((min - Vec2::splat(-2.0)).abs().max_element() < 1e-5);
    assert!((max - Vec2::splat(2.0)).abs().max_element() < 1e-5);
  }

  #[test]
  fn builder_rebuilds_every_call_by_default() {
    let mut builder = PolygonMeshBuilder::new();
    let params = PolygonParameters::filled(6, 1.0);
    assert!(builder.build(&params).is_some());
    assert!(builder.build(&params).is_some());
  }

  #[test]
  fn builder_skips_unchanged_parameters() {
    let mut builder = PolygonMeshBuilder::new().with_change_detection(true);
    let params = PolygonParameters::filled(6, 1.0);

    assert!(builder.build(&params).is_some());
    assert!(builder.build(&params).is_none());
    assert!(builder.build(&params.with_repeat(2)).is_some());

    builder.invalidate();
    assert!(builder.build(&params.with_repeat(2)).is_some());
  }

  #[test]
  fn builder_treats_equivalent_clamps_as_unchanged() {
    let mut builder = PolygonMeshBuilder::new().with_change_detection(true);
    assert!(builder.build(&PolygonParameters::hollow(5, 2.0, 4.0)).is_some());
    // Different raw inner radius, same clamped result.
    assert!(builder.build(&PolygonParameters::hollow(5, 2.0, 7.0)).is_none());
  }
}
