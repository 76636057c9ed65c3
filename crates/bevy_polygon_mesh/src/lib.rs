//! Polygon Mesh - procedural regular polygon meshes for Bevy.
//!
//! Generates filled polygons and hollow rings (annuli) with texture
//! coordinates and closed 2D collision boundaries, rebuilt every frame from
//! four parameters: side count, outer radius, inner radius and texture repeat
//! count.
//!
//! The geometry core ([`build_polygon`], [`geometry`]) is engine agnostic and
//! can be driven directly through [`PolygonGenerator`]. [`PolygonMeshPlugin`]
//! wires it into Bevy: spawn a [`PolygonShape`] (plus a [`PolygonBoundary`]
//! for collision) and the mesh follows the parameters.
//!
//! # Usage
//!
//! ```ignore
//! app.add_plugins(PolygonMeshPlugin::default());
//!
//! commands.spawn((
//!   PolygonShape::new(PolygonParameters::hollow(6, 3.0, 1.5)),
//!   PolygonBoundary::default(),
//!   MeshMaterial2d(material),
//! ));
//! ```

use std::path::Path;

use bevy::prelude::*;

pub mod builder;
pub mod components;
pub mod config;
#[cfg(feature = "visual_debug")]
pub mod debug;
pub mod error;
pub mod geometry;
pub mod params;
#[cfg(physics)]
pub mod physics;
pub mod sink;
pub mod systems;

pub use builder::{MeshData, PolygonGeometry, PolygonMeshBuilder, build_polygon};
pub use components::{PolygonBoundary, PolygonShape};
pub use config::PolygonMeshConfig;
pub use error::{ConfigError, GeneratorError, ParameterError};
pub use geometry::{CollisionGeometry, Triangle};
pub use params::{PolygonMode, PolygonParameters};
pub use sink::{CollisionSink, GenerationReport, MeshSink, PolygonGenerator};
pub use systems::{bind_polygon_meshes, regenerate_polygon_meshes};

/// System sets for polygon mesh generation, run in `Update` in this order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolygonMeshSet {
  /// Attach mesh assets to new shapes.
  Bind,
  /// Rebuild meshes and boundaries.
  Generate,
  /// Sync colliders and debug output with the new boundaries.
  Sync,
}

/// Plugin for procedural polygon meshes.
///
/// This plugin provides:
/// - Mesh binding for newly spawned [`PolygonShape`]s
/// - Per-frame mesh, bounds and boundary regeneration
/// - Polyline colliders (with the `avian2d` or `rapier2d` feature)
/// - Boundary gizmos (with the `visual_debug` feature)
///
/// A [`PolygonMeshConfig`] resource inserted before the plugin takes
/// precedence over the plugin's own config.
#[derive(Default)]
pub struct PolygonMeshPlugin {
  /// Configuration inserted as a resource.
  pub config: PolygonMeshConfig,
}

impl PolygonMeshPlugin {
  /// Creates the plugin with the given configuration.
  pub fn with_config(config: PolygonMeshConfig) -> Self {
    Self { config }
  }

  /// Creates the plugin from a TOML config file, using defaults if it cannot
  /// be loaded.
  pub fn from_file(path: impl AsRef<Path>) -> Self {
    Self::with_config(PolygonMeshConfig::load_or_default(path))
  }
}

impl Plugin for PolygonMeshPlugin {
  fn build(&self, app: &mut App) {
    if !app.world().contains_resource::<PolygonMeshConfig>() {
      app.insert_resource(self.config.clone());
    }

    app
      .configure_sets(
        Update,
        (
          PolygonMeshSet::Bind,
          PolygonMeshSet::Generate,
          PolygonMeshSet::Sync,
        )
          .chain(),
      )
      .add_systems(Update, bind_polygon_meshes.in_set(PolygonMeshSet::Bind))
      .add_systems(
        Update,
        regenerate_polygon_meshes.in_set(PolygonMeshSet::Generate),
      );

    #[cfg(physics)]
    app.add_systems(
      Update,
      physics::sync_polygon_colliders.in_set(PolygonMeshSet::Sync),
    );

    // Gizmos need the gizmo infrastructure, absent in headless apps.
    #[cfg(feature = "visual_debug")]
    if app.is_plugin_added::<bevy::gizmos::GizmoPlugin>() {
      app.add_systems(
        Update,
        debug::draw_polygon_boundaries.after(PolygonMeshSet::Generate),
      );
    }
  }
}
