//! Closed boundary polylines for 2D collision.

use bevy::math::Vec2;

/// Closes a ring of points by appending a copy of the first point.
///
/// The result has `points.len() + 1` entries. An empty ring stays empty.
pub fn close_ring(points: &[Vec2]) -> Vec<Vec2> {
  let Some(&first) = points.first() else {
    return Vec::new();
  };

  let mut closed = Vec::with_capacity(points.len() + 1);
  closed.extend_from_slice(points);
  closed.push(first);
  closed
}

/// Collision boundary of one generated polygon.
///
/// Holds one closed ring for a filled polygon, or the outer ring followed by
/// the inner ring for a hollow one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollisionGeometry {
  /// Closed rings, outer first.
  pub rings: Vec<Vec<Vec2>>,
}

impl CollisionGeometry {
  /// Builds a single-ring boundary.
  pub fn filled(outer: &[Vec2]) -> Self {
    Self {
      rings: vec![close_ring(outer)],
    }
  }

  /// Builds an outer and inner ring boundary.
  pub fn hollow(outer: &[Vec2], inner: &[Vec2]) -> Self {
    Self {
      rings: vec![close_ring(outer), close_ring(inner)],
    }
  }

  /// Returns true if there are no boundary points.
  pub fn is_empty(&self) -> bool {
    self.rings.iter().all(Vec::is_empty)
  }

  /// Returns the outer ring, if any.
  pub fn outer(&self) -> Option<&[Vec2]> {
    self.rings.first().map(Vec::as_slice)
  }

  /// Returns the inner ring of a hollow boundary.
  pub fn inner(&self) -> Option<&[Vec2]> {
    self.rings.get(1).map(Vec::as_slice)
  }

  /// Returns the total number of points across all rings.
  pub fn point_count(&self) -> usize {
    self.rings.iter().map(Vec::len).sum()
  }

  /// Concatenates the rings into one flat point list, outer ring first.
  pub fn flattened(&self) -> Vec<Vec2> {
    self.rings.iter().flatten().copied().collect()
  }

  /// Returns edge index pairs into [`flattened`](Self::flattened).
  ///
  /// Edges only join consecutive points of the same ring, so the outer and
  /// inner loops stay disconnected.
  pub fn segments(&self) -> Vec<[u32; 2]> {
    let mut segments = Vec::with_capacity(self.point_count());
    let mut offset = 0u32;
    for ring in &self.rings {
      let len = ring.len() as u32;
      for i in 1..len {
        segments.push([offset + i - 1, offset + i]);
      }
      offset += len;
    }
    segments
  }
}
