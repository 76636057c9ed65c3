//! Integration tests for TOML configuration loading.

use std::io::Write;

use bevy_polygon_mesh::{ConfigError, ParameterError, PolygonMeshConfig, PolygonParameters};
use tempfile::NamedTempFile;

#[test]
fn empty_config_uses_defaults() {
  let config = PolygonMeshConfig::from_toml_str("").unwrap();
  assert_eq!(config, PolygonMeshConfig::default());
  assert_eq!(config.defaults, PolygonParameters::default());
  assert!(!config.change_detection);
  assert!(!config.debug_gizmos);
}

#[test]
fn partial_defaults_fill_missing_keys() {
  let config = PolygonMeshConfig::from_toml_str(
    r#"
      debug_gizmos = true

      [defaults]
      side_count = 8
      inner_radius = 1.5
    "#,
  )
  .unwrap();

  assert!(config.debug_gizmos);
  assert_eq!(config.defaults.side_count, 8);
  assert_eq!(config.defaults.inner_radius, 1.5);
  assert_eq!(config.defaults.outer_radius, 3.0);
  assert_eq!(config.defaults.uv_repeat_count, 1);
}

#[test]
fn out_of_range_defaults_are_rejected() {
  let err = PolygonMeshConfig::from_toml_str(
    r#"
      [defaults]
      side_count = 101
    "#,
  )
  .unwrap_err();

  assert!(matches!(
    err,
    ConfigError::Invalid(ParameterError::SideCount(101))
  ));
}

#[test]
fn malformed_toml_is_a_parse_error() {
  let err = PolygonMeshConfig::from_toml_str("change_detection = maybe").unwrap_err();
  assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn load_reads_file_and_round_trips() {
  let config = PolygonMeshConfig::default()
    .with_defaults(PolygonParameters::hollow(12, 5.0, 2.0).with_repeat(3))
    .with_change_detection(true);

  let mut file = NamedTempFile::new().unwrap();
  file
    .write_all(config.to_toml_string().unwrap().as_bytes())
    .unwrap();

  let loaded = PolygonMeshConfig::load(file.path()).unwrap();
  assert_eq!(loaded, config);
}

#[test]
fn missing_file_falls_back_to_defaults() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("missing.toml");

  assert!(matches!(
    PolygonMeshConfig::load(&path),
    Err(ConfigError::Io(_))
  ));
  assert_eq!(
    PolygonMeshConfig::load_or_default(&path),
    PolygonMeshConfig::default()
  );
}
