//! Physics library integration for polygon boundaries.
//!
//! Provides optional feature-gated support for avian2d and rapier2d physics
//! engines. Enable one (but not both) via Cargo features:
//!
//! ```toml
//! bevy_polygon_mesh = { version = "...", features = ["avian2d"] }
//! # or
//! bevy_polygon_mesh = { version = "...", features = ["rapier2d"] }
//! ```

#[cfg(all(feature = "avian2d", feature = "rapier2d"))]
compile_error!("Cannot enable both avian2d and rapier2d features simultaneously");

#[cfg(feature = "avian2d")]
mod avian;

#[cfg(feature = "rapier2d")]
mod rapier;

#[cfg(feature = "avian2d")]
pub use avian::{Collider, polyline_collider};
use bevy::prelude::*;
#[cfg(feature = "rapier2d")]
pub use rapier::{Collider, polyline_collider};

use crate::components::PolygonBoundary;
use crate::geometry::CollisionGeometry;

/// Builds an edge collider tracing every boundary ring.
///
/// Returns None for an empty boundary.
pub fn boundary_collider(geometry: &CollisionGeometry) -> Option<Collider> {
  if geometry.is_empty() {
    return None;
  }
  Some(polyline_collider(geometry.flattened(), geometry.segments()))
}

/// Keeps each entity's collider in sync with its [`PolygonBoundary`].
pub fn sync_polygon_colliders(
  mut commands: Commands,
  boundaries: Query<(Entity, &PolygonBoundary), Changed<PolygonBoundary>>,
) {
  for (entity, boundary) in boundaries.iter() {
    match boundary_collider(&boundary.geometry) {
      Some(collider) => {
        commands.entity(entity).insert(collider);
      }
      None => {
        commands.entity(entity).remove::<Collider>();
      }
    }
  }
}
