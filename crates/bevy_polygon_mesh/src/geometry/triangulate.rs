//! Index generation for filled and hollow regular polygons.
//!
//! Both layouts keep the winding the sampler's counter-clockwise ring needs:
//! each triangle is listed clockwise in the XY plane, so its face normal
//! points along -Z. Swapping the last two indices of any triple flips it.

/// A triangle represented by three vertex indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle {
  pub a: u32,
  pub b: u32,
  pub c: u32,
}

impl Triangle {
  pub const fn new(a: u32, b: u32, c: u32) -> Self {
    Self { a, b, c }
  }

  /// Returns the indices in listing order.
  pub const fn indices(&self) -> [u32; 3] {
    [self.a, self.b, self.c]
  }
}

impl From<(u32, u32, u32)> for Triangle {
  fn from((a, b, c): (u32, u32, u32)) -> Self {
    Self { a, b, c }
  }
}

/// Triangulates a convex ring of `vertex_count` points as a fan around
/// vertex 0.
///
/// Emits `(0, i + 2, i + 1)` for each `i` in `0..vertex_count - 2`. Fewer than
/// three vertices produce no triangles.
pub fn triangulate_fan(vertex_count: u32) -> Vec<Triangle> {
  let triangle_count = vertex_count.saturating_sub(2);
  (0..triangle_count)
    .map(|i| Triangle::new(0, i + 2, i + 1))
    .collect()
}

/// Triangulates the band between an outer and an inner ring.
///
/// The vertex buffer holds the outer ring at `0..side_count` followed by the
/// inner ring at `side_count..2 * side_count`, both sampled at the same
/// angles. Each ring segment becomes a quad of two triangles; the last
/// segment wraps back to indices `0` and `side_count`.
pub fn triangulate_ring(side_count: u32) -> Vec<Triangle> {
  let n = side_count;
  if n == 0 {
    return Vec::new();
  }

  let mut triangles = Vec::with_capacity(2 * n as usize);
  for i in 0..n {
    let outer = i;
    let inner = i + n;
    let next_outer = (outer + 1) % n;
    let next_inner = n + (inner + 1) % n;

    triangles.push(Triangle::new(outer, inner, next_outer));
    triangles.push(Triangle::new(inner, next_inner, next_outer));
  }
  triangles
}

/// Flattens triangles into an index buffer.
pub fn flatten_indices(triangles: &[Triangle]) -> Vec<u32> {
  triangles.iter().flat_map(Triangle::indices).collect()
}
