//! Polygon generation parameters.
//!
//! [`PolygonParameters`] is what the parameter source hands the builder each
//! cycle. Range enforcement belongs to the source ([`sanitized`] and
//! [`validate`]); the builder itself only applies the inner radius clamp.
//!
//! [`sanitized`]: PolygonParameters::sanitized
//! [`validate`]: PolygonParameters::validate

use serde::{Deserialize, Serialize};

use crate::error::ParameterError;

/// Fewest sides a polygon may have.
pub const MIN_SIDES: u32 = 3;

/// Most sides a polygon may have.
pub const MAX_SIDES: u32 = 100;

/// Smallest allowed outer radius.
pub const MIN_OUTER_RADIUS: f32 = 0.1;

/// Gap left between the radii when the inner radius is clamped.
pub const INNER_RADIUS_MARGIN: f32 = 0.1;

/// Smallest allowed texture repeat count.
pub const MIN_REPEAT_COUNT: u32 = 1;

/// Whether a polygon is drawn solid or as a ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PolygonMode {
  /// Solid polygon, triangle fan, one boundary ring.
  Filled,
  /// Annulus between two polygons, quad strip, two boundary rings.
  Hollow,
}

/// Shape parameters for one generated polygon.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolygonParameters {
  /// Number of polygon corners, in `[MIN_SIDES, MAX_SIDES]`.
  pub side_count: u32,
  /// Distance from the center to each outer corner.
  pub outer_radius: f32,
  /// Distance from the center to each inner corner. Zero means filled.
  pub inner_radius: f32,
  /// How many times the texture tiles across the outer diameter.
  pub uv_repeat_count: u32,
}

impl Default for PolygonParameters {
  fn default() -> Self {
    Self {
      side_count: 3,
      outer_radius: 3.0,
      inner_radius: 0.0,
      uv_repeat_count: 1,
    }
  }
}

impl PolygonParameters {
  /// Creates filled polygon parameters with a texture repeat of 1.
  pub fn filled(side_count: u32, outer_radius: f32) -> Self {
    Self {
      side_count,
      outer_radius,
      ..Self::default()
    }
  }

  /// Creates hollow polygon parameters with a texture repeat of 1.
  pub fn hollow(side_count: u32, outer_radius: f32, inner_radius: f32) -> Self {
    Self {
      side_count,
      outer_radius,
      inner_radius,
      ..Self::default()
    }
  }

  /// Sets the texture repeat count.
  pub fn with_repeat(mut self, uv_repeat_count: u32) -> Self {
    self.uv_repeat_count = uv_repeat_count;
    self
  }

  /// Returns the inner radius actually used for generation.
  ///
  /// An inner radius larger than the outer radius becomes
  /// `outer_radius - INNER_RADIUS_MARGIN`.
  pub fn effective_inner_radius(&self) -> f32 {
    if self.inner_radius > self.outer_radius {
      self.outer_radius - INNER_RADIUS_MARGIN
    } else {
      self.inner_radius
    }
  }

  /// Returns a copy with the inner radius clamp applied.
  pub fn clamped(&self) -> Self {
    Self {
      inner_radius: self.effective_inner_radius(),
      ..*self
    }
  }

  /// Selects the generation mode from the clamped inner radius.
  pub fn mode(&self) -> PolygonMode {
    if self.effective_inner_radius() == 0.0 {
      PolygonMode::Filled
    } else {
      PolygonMode::Hollow
    }
  }

  /// Forces every field into its recognized range.
  ///
  /// This is the parameter source's job, equivalent to editor range limits.
  /// Non-finite radii fall back to their minimums.
  pub fn sanitized(&self) -> Self {
    let outer_radius = if self.outer_radius.is_finite() {
      self.outer_radius.max(MIN_OUTER_RADIUS)
    } else {
      MIN_OUTER_RADIUS
    };
    let inner_radius = if self.inner_radius.is_finite() {
      self.inner_radius.max(0.0)
    } else {
      0.0
    };

    Self {
      side_count: self.side_count.clamp(MIN_SIDES, MAX_SIDES),
      outer_radius,
      inner_radius,
      uv_repeat_count: self.uv_repeat_count.max(MIN_REPEAT_COUNT),
    }
  }

  /// Checks the ranges the parameter source is expected to enforce.
  ///
  /// An inner radius above the outer radius is not an error; it is clamped
  /// during generation.
  pub fn validate(&self) -> Result<(), ParameterError> {
    if !(MIN_SIDES..=MAX_SIDES).contains(&self.side_count) {
      return Err(ParameterError::SideCount(self.side_count));
    }
    if !self.outer_radius.is_finite() || self.outer_radius < MIN_OUTER_RADIUS {
      return Err(ParameterError::OuterRadius(self.outer_radius));
    }
    if !self.inner_radius.is_finite() || self.inner_radius < 0.0 {
      return Err(ParameterError::InnerRadius(self.inner_radius));
    }
    if self.uv_repeat_count < MIN_REPEAT_COUNT {
      return Err(ParameterError::RepeatCount(self.uv_repeat_count));
    }
    Ok(())
  }
}
