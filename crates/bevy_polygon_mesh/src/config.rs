//! Plugin configuration, loadable from TOML.
//!
//! ```toml
//! change_detection = false
//! debug_gizmos = true
//!
//! [defaults]
//! side_count = 6
//! outer_radius = 3.0
//! inner_radius = 1.5
//! uv_repeat_count = 2
//! ```
//!
//! Every key is optional; missing keys take their default values.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::params::PolygonParameters;

/// Configuration for polygon mesh generation.
#[derive(Resource, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolygonMeshConfig {
  /// Skip regeneration for shapes whose parameters did not change.
  /// Default: false (rebuild every frame)
  pub change_detection: bool,

  /// Draw boundary rings as debug gizmos (requires the `visual_debug`
  /// feature).
  /// Default: false
  pub debug_gizmos: bool,

  /// Parameters used by [`PolygonShape::from_config`](crate::PolygonShape::from_config).
  pub defaults: PolygonParameters,
}

impl PolygonMeshConfig {
  /// Parses a config from TOML text and validates the default parameters.
  pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
    let config: Self = toml::from_str(contents)?;
    config.defaults.validate()?;
    Ok(config)
  }

  /// Reads and parses a config file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Self::from_toml_str(&contents)
  }

  /// Reads a config file, falling back to defaults on any failure.
  pub fn load_or_default(path: impl AsRef<Path>) -> Self {
    let path = path.as_ref();
    match Self::load(path) {
      Ok(config) => {
        info!("Loaded polygon mesh config from {}", path.display());
        config
      }
      Err(e) => {
        warn!(
          "Failed to load polygon mesh config {}: {e}, using defaults",
          path.display()
        );
        Self::default()
      }
    }
  }

  /// Serializes the config as pretty TOML.
  pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(self)
  }

  /// Sets the default polygon parameters.
  pub fn with_defaults(mut self, defaults: PolygonParameters) -> Self {
    self.defaults = defaults;
    self
  }

  /// Enables or disables change detection.
  pub fn with_change_detection(mut self, enabled: bool) -> Self {
    self.change_detection = enabled;
    self
  }

  /// Enables or disables boundary gizmos.
  pub fn with_gizmos(mut self, enabled: bool) -> Self {
    self.debug_gizmos = enabled;
    self
  }
}
