//! Systems binding and regenerating polygon meshes.

use bevy::asset::RenderAssetUsages;
use bevy::camera::primitives::Aabb;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;

use crate::builder::build_polygon;
use crate::components::{PolygonBoundary, PolygonShape};
use crate::config::PolygonMeshConfig;
use crate::sink::{CollisionSink, MeshSink};

/// Creates an empty mesh asset for newly added shapes that have none.
pub fn bind_polygon_meshes(
  mut commands: Commands,
  mut meshes: ResMut<Assets<Mesh>>,
  shapes: Query<Entity, (Added<PolygonShape>, Without<Mesh2d>)>,
) {
  for entity in shapes.iter() {
    let mesh = Mesh::new(
      PrimitiveTopology::TriangleList,
      RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    );
    commands.entity(entity).insert(Mesh2d(meshes.add(mesh)));
    debug!("Bound polygon mesh to {entity}");
  }
}

/// Rebuilds mesh buffers, bounds and boundary rings from each shape.
///
/// Out-of-range parameters are pulled into range and written back without
/// marking the shape changed, so the warning fires once per bad edit.
pub fn regenerate_polygon_meshes(
  mut commands: Commands,
  config: Res<PolygonMeshConfig>,
  mut meshes: ResMut<Assets<Mesh>>,
  mut shapes: Query<(
    Entity,
    &mut PolygonShape,
    Ref<Mesh2d>,
    Option<&mut PolygonBoundary>,
  )>,
) {
  for (entity, mut shape, mesh2d, boundary) in shapes.iter_mut() {
    let stale = shape.is_changed()
      || mesh2d.is_changed()
      || boundary.as_ref().is_some_and(|b| b.is_added());
    if config.change_detection && !stale {
      continue;
    }

    if let Err(e) = shape.params.validate() {
      warn!("Polygon shape on {entity}: {e}, clamping into range");
    }

    let geometry = build_polygon(&shape.params.sanitized());
    if geometry.params != shape.params {
      shape.bypass_change_detection().params = geometry.params;
    }

    let Some(mesh) = meshes.get_mut(&mesh2d.0) else {
      warn!("Polygon shape on {entity} has no loaded mesh asset");
      continue;
    };
    mesh.commit_mesh(&geometry.mesh);

    if let Some((min, max)) = geometry.mesh.bounds() {
      commands
        .entity(entity)
        .insert(Aabb::from_min_max(min.extend(0.0), max.extend(0.0)));
    }

    if let Some(mut boundary) = boundary
      && boundary.geometry != geometry.collision
    {
      boundary.commit_boundary(&geometry.collision);
    }
  }
}
