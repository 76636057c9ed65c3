//! Error types for parameter validation, configuration loading and the
//! generator driver.

use std::error::Error;
use std::fmt;
use std::io;

/// A polygon parameter outside the range the parameter source must enforce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParameterError {
  /// Side count outside `[MIN_SIDES, MAX_SIDES]`.
  SideCount(u32),
  /// Outer radius below `MIN_OUTER_RADIUS` (or not finite).
  OuterRadius(f32),
  /// Inner radius negative (or not finite).
  InnerRadius(f32),
  /// Texture repeat count of zero.
  RepeatCount(u32),
}

impl fmt::Display for ParameterError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    use crate::params::{MAX_SIDES, MIN_OUTER_RADIUS, MIN_SIDES};

    match self {
      ParameterError::SideCount(n) => {
        write!(f, "side count {n} outside [{MIN_SIDES}, {MAX_SIDES}]")
      }
      ParameterError::OuterRadius(r) => {
        write!(f, "outer radius {r} below minimum {MIN_OUTER_RADIUS}")
      }
      ParameterError::InnerRadius(r) => write!(f, "inner radius {r} is negative"),
      ParameterError::RepeatCount(n) => write!(f, "uv repeat count {n} must be at least 1"),
    }
  }
}

impl Error for ParameterError {}

/// Error type for loading a [`PolygonMeshConfig`](crate::PolygonMeshConfig).
#[derive(Debug)]
pub enum ConfigError {
  /// The config file could not be read.
  Io(io::Error),
  /// The file is not valid TOML for the config schema.
  Parse(toml::de::Error),
  /// The default parameters are out of range.
  Invalid(ParameterError),
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::Io(e) => write!(f, "I/O error: {e}"),
      ConfigError::Parse(e) => write!(f, "parse error: {e}"),
      ConfigError::Invalid(e) => write!(f, "invalid default parameters: {e}"),
    }
  }
}

impl Error for ConfigError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      ConfigError::Io(e) => Some(e),
      ConfigError::Parse(e) => Some(e),
      ConfigError::Invalid(e) => Some(e),
    }
  }
}

impl From<io::Error> for ConfigError {
  fn from(err: io::Error) -> Self {
    ConfigError::Io(err)
  }
}

impl From<toml::de::Error> for ConfigError {
  fn from(err: toml::de::Error) -> Self {
    ConfigError::Parse(err)
  }
}

impl From<ParameterError> for ConfigError {
  fn from(err: ParameterError) -> Self {
    ConfigError::Invalid(err)
  }
}

/// Error returned by [`PolygonGenerator::generate`](crate::PolygonGenerator::generate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneratorError {
  /// `generate` was called before `initialize` bound a mesh sink.
  NotInitialized,
}

impl fmt::Display for GeneratorError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GeneratorError::NotInitialized => write!(f, "generator has no mesh sink bound"),
    }
  }
}

impl Error for GeneratorError {}
