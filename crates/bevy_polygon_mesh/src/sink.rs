//! Output sinks and the host-agnostic generator driver.
//!
//! A host binds a render sink (and optionally a collision sink) once with
//! [`PolygonGenerator::initialize`], then calls
//! [`PolygonGenerator::generate`] once per step. Each call replaces whatever
//! the sinks held before.

use bevy::math::Vec2;
use bevy::mesh::{Indices, Mesh, PrimitiveTopology};

use crate::builder::{MeshData, PolygonMeshBuilder};
use crate::error::GeneratorError;
use crate::geometry::CollisionGeometry;
use crate::params::{PolygonMode, PolygonParameters};

/// Receives the render mesh of each generation cycle.
///
/// Implementations replace their previous contents and are responsible for
/// recomputing normals and bounds after every commit.
pub trait MeshSink {
  fn commit_mesh(&mut self, mesh: &MeshData);
}

/// Receives the collision boundary of each generation cycle.
pub trait CollisionSink {
  fn commit_boundary(&mut self, boundary: &CollisionGeometry);
}

impl MeshSink for Mesh {
  fn commit_mesh(&mut self, mesh: &MeshData) {
    self.insert_attribute(Mesh::ATTRIBUTE_POSITION, mesh.positions());
    self.insert_attribute(Mesh::ATTRIBUTE_UV_0, mesh.uv_coords());
    self.insert_indices(Indices::U32(mesh.indices()));

    // compute_normals panics on anything but indexed triangle lists.
    if self.primitive_topology() == PrimitiveTopology::TriangleList && !mesh.is_empty() {
      self.compute_normals();
    } else {
      self.remove_attribute(Mesh::ATTRIBUTE_NORMAL);
    }
  }
}

impl MeshSink for MeshData {
  fn commit_mesh(&mut self, mesh: &MeshData) {
    self.clone_from(mesh);
  }
}

/// A flat point list: outer ring, then inner ring when hollow.
impl CollisionSink for Vec<Vec2> {
  fn commit_boundary(&mut self, boundary: &CollisionGeometry) {
    self.clear();
    self.extend(boundary.rings.iter().flatten().copied());
  }
}

impl CollisionSink for CollisionGeometry {
  fn commit_boundary(&mut self, boundary: &CollisionGeometry) {
    self.clone_from(boundary);
  }
}

/// Summary of one [`PolygonGenerator::generate`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationReport {
  /// Mode selected for the (clamped) parameters.
  pub mode: PolygonMode,
  /// Vertices committed to the mesh sink.
  pub vertex_count: usize,
  /// Triangles committed to the mesh sink.
  pub triangle_count: usize,
  /// Points committed to the collision sink (0 without one).
  pub boundary_len: usize,
  /// True if change detection skipped the cycle and nothing was committed.
  pub skipped: bool,
}

/// Drives generation into bound sinks, one cycle per host step.
///
/// The collision sink is optional; without one only the mesh is produced.
pub struct PolygonGenerator<M, C> {
  builder: PolygonMeshBuilder,
  mesh_sink: Option<M>,
  collision_sink: Option<C>,
}

impl<M, C> Default for PolygonGenerator<M, C> {
  fn default() -> Self {
    Self {
      builder: PolygonMeshBuilder::new(),
      mesh_sink: None,
      collision_sink: None,
    }
  }
}

impl<M: MeshSink, C: CollisionSink> PolygonGenerator<M, C> {
  /// Creates an unbound generator that rebuilds on every call.
  pub fn new() -> Self {
    Self::default()
  }

  /// Enables or disables skipping cycles whose parameters did not change.
  pub fn with_change_detection(mut self, enabled: bool) -> Self {
    self.builder = self.builder.with_change_detection(enabled);
    self
  }

  /// Binds the output sinks. Rebinding forces the next cycle to rebuild.
  pub fn initialize(&mut self, mesh_sink: M, collision_sink: Option<C>) {
    self.mesh_sink = Some(mesh_sink);
    self.collision_sink = collision_sink;
    self.builder.invalidate();
  }

  /// Returns true once a mesh sink is bound.
  pub fn is_initialized(&self) -> bool {
    self.mesh_sink.is_some()
  }

  /// Returns the bound mesh sink.
  pub fn mesh_sink(&self) -> Option<&M> {
    self.mesh_sink.as_ref()
  }

  /// Returns the bound collision sink.
  pub fn collision_sink(&self) -> Option<&C> {
    self.collision_sink.as_ref()
  }

  /// Unbinds and returns the sinks.
  pub fn into_sinks(self) -> (Option<M>, Option<C>) {
    (self.mesh_sink, self.collision_sink)
  }

  /// Runs one generation cycle and commits the result to the bound sinks.
  pub fn generate(
    &mut self,
    params: &PolygonParameters,
  ) -> Result<GenerationReport, GeneratorError> {
    let Some(mesh_sink) = self.mesh_sink.as_mut() else {
      return Err(GeneratorError::NotInitialized);
    };

    let Some(geometry) = self.builder.build(params) else {
      return Ok(GenerationReport {
        mode: params.mode(),
        vertex_count: 0,
        triangle_count: 0,
        boundary_len: 0,
        skipped: true,
      });
    };

    mesh_sink.commit_mesh(&geometry.mesh);

    let boundary_len = match self.collision_sink.as_mut() {
      Some(sink) => {
        sink.commit_boundary(&geometry.collision);
        geometry.collision.point_count()
      }
      None => 0,
    };

    Ok(GenerationReport {
      mode: geometry.mode,
      vertex_count: geometry.mesh.vertices.len(),
      triangle_count: geometry.mesh.triangles.len(),
      boundary_len,
      skipped: false,
    })
  }
}
