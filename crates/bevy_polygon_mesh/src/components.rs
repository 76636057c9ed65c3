//! ECS components for generated polygons.

use bevy::prelude::*;

use crate::config::PolygonMeshConfig;
use crate::geometry::CollisionGeometry;
use crate::params::PolygonParameters;
use crate::sink::CollisionSink;

/// Parameter source for a generated polygon mesh.
///
/// Spawning this on an entity without a `Mesh2d` binds a fresh mesh asset;
/// the mesh is then regenerated from `params` every frame (or on change,
/// see [`PolygonMeshConfig::change_detection`]).
///
/// An inner radius larger than the outer radius is written back clamped.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct PolygonShape {
  pub params: PolygonParameters,
}

impl PolygonShape {
  pub fn new(params: PolygonParameters) -> Self {
    Self { params }
  }

  /// Creates a shape using the configured default parameters.
  pub fn from_config(config: &PolygonMeshConfig) -> Self {
    Self::new(config.defaults)
  }
}

impl From<PolygonParameters> for PolygonShape {
  fn from(params: PolygonParameters) -> Self {
    Self::new(params)
  }
}

/// Collision boundary of a generated polygon.
///
/// Add this next to [`PolygonShape`] to receive boundary rings. With a
/// physics feature enabled, a polyline collider is kept in sync with it.
#[derive(Component, Clone, Debug, Default, PartialEq)]
pub struct PolygonBoundary {
  pub geometry: CollisionGeometry,
}

impl PolygonBoundary {
  /// Returns the boundary as one flat point list, outer ring first.
  pub fn points(&self) -> Vec<Vec2> {
    self.geometry.flattened()
  }
}

impl CollisionSink for PolygonBoundary {
  fn commit_boundary(&mut self, boundary: &CollisionGeometry) {
    self.geometry.clone_from(boundary);
  }
}
