//! Integration tests for polygon geometry generation.

use std::f32::consts::TAU;

use bevy::math::Vec2;
use bevy_polygon_mesh::geometry::{
  Triangle, circumference_points, close_ring, map_uvs, triangulate_fan, triangulate_ring,
};
use bevy_polygon_mesh::{PolygonMode, PolygonParameters, build_polygon};

fn signed_area(a: Vec2, b: Vec2, c: Vec2) -> f32 {
  (b - a).perp_dot(c - a) * 0.5
}

fn polygon_area(points: &[Vec2]) -> f32 {
  let n = points.len();
  (0..n)
    .map(|i| points[i].perp_dot(points[(i + 1) % n]))
    .sum::<f32>()
    .abs()
    * 0.5
}

fn triangle_points(vertices: &[Vec2], tri: &Triangle) -> [Vec2; 3] {
  tri.indices().map(|i| vertices[i as usize])
}

#[test]
fn sampled_points_lie_on_circle_in_angle_order() {
  for sides in [3, 4, 7, 32, 100] {
    for radius in [0.1, 1.0, 3.5, 250.0] {
      let points = circumference_points(sides, radius);
      assert_eq!(points.len(), sides as usize);

      let mut previous = -1.0;
      for p in &points {
        assert!(
          (p.length() - radius).abs() <= radius * 1e-5,
          "point {p} not at radius {radius}"
        );
        let angle = p.y.atan2(p.x).rem_euclid(TAU);
        assert!(angle > previous, "angles not increasing for {sides} sides");
        previous = angle;
      }
    }
  }
}

#[test]
fn fan_covers_polygon_without_overlap() {
  for sides in [3, 4, 5, 12, 100] {
    let points = circumference_points(sides, 2.0);
    let tris = triangulate_fan(points.len() as u32);
    assert_eq!(tris.len(), sides as usize - 2);

    let mut covered = 0.0;
    for tri in &tris {
      assert!(tri.indices().iter().all(|&i| i < sides));
      let [a, b, c] = triangle_points(&points, tri);
      let area = signed_area(a, b, c);
      // Every triangle shares the same (clockwise) winding.
      assert!(area < 0.0, "triangle {tri:?} is not clockwise");
      covered += area.abs();
    }

    let expected = polygon_area(&points);
    assert!(
      (covered - expected).abs() < expected * 1e-4,
      "fan area {covered} != polygon area {expected}"
    );
  }
}

#[test]
fn ring_triangulation_wraps_last_segment() {
  for n in [3u32, 4, 9, 100] {
    let tris = triangulate_ring(n);
    assert_eq!(tris.len(), 2 * n as usize);
    assert!(tris.iter().flat_map(Triangle::indices).all(|i| i < 2 * n));

    // The quad starting at (n - 1, 2n - 1) closes the band at 0 and n.
    let last_quad = &tris[tris.len() - 2..];
    assert!(last_quad.iter().all(|t| t.indices().contains(&0)));
    assert_eq!(last_quad[0], Triangle::new(n - 1, 2 * n - 1, 0));
    assert_eq!(last_quad[1], Triangle::new(2 * n - 1, n, 0));
  }
}

#[test]
fn ring_covers_annulus() {
  let n = 10;
  let mut vertices = circumference_points(n, 4.0);
  let inner = circumference_points(n, 1.5);
  let inner_area = polygon_area(&inner);
  let outer_area = polygon_area(&vertices);
  vertices.extend(inner);

  let covered: f32 = triangulate_ring(n)
    .iter()
    .map(|t| {
      let [a, b, c] = triangle_points(&vertices, t);
      let area = signed_area(a, b, c);
      assert!(area < 0.0, "ring triangle {t:?} is not clockwise");
      area.abs()
    })
    .sum();

  let expected = outer_area - inner_area;
  assert!((covered - expected).abs() < expected * 1e-4);
}

#[test]
fn closed_ring_repeats_first_point() {
  for len in 1..6 {
    let points: Vec<Vec2> = (0..len).map(|i| Vec2::new(i as f32, 1.0)).collect();
    let closed = close_ring(&points);
    assert_eq!(closed.len(), points.len() + 1);
    assert_eq!(closed[0], points[0]);
    assert_eq!(closed[closed.len() - 1], points[0]);
    assert_eq!(&closed[..len], points.as_slice());
  }
}

#[test]
fn uv_mapping_reference_points() {
  let uvs = map_uvs(
    &[Vec2::new(3.0, 0.0), Vec2::new(-3.0, 0.0), Vec2::new(0.0, 0.0)],
    3.0,
    1,
  );
  assert_eq!(uvs[0], Vec2::new(1.0, 0.5));
  assert_eq!(uvs[1], Vec2::new(0.0, 0.5));
  assert_eq!(uvs[2], Vec2::new(0.5, 0.5));
}

#[test]
fn inner_ring_uvs_stay_inside_unit_square() {
  let geometry = build_polygon(&PolygonParameters::hollow(16, 4.0, 2.0));
  for uv in &geometry.mesh.uvs[16..] {
    assert!(uv.x > 0.0 && uv.x < 1.0 && uv.y > 0.0 && uv.y < 1.0);
  }
}

#[test]
fn clamp_applies_to_oversized_inner_radius() {
  let params = PolygonParameters::hollow(6, 3.0, 5.0);
  assert!((params.effective_inner_radius() - 2.9).abs() < 1e-6);

  let geometry = build_polygon(&params);
  assert_eq!(geometry.mode, PolygonMode::Hollow);
  assert!((geometry.params.inner_radius - 2.9).abs() < 1e-6);
}

#[test]
fn filled_square_end_to_end() {
  let geometry = build_polygon(&PolygonParameters::filled(4, 2.0));

  assert_eq!(geometry.mode, PolygonMode::Filled);
  assert_eq!(geometry.mesh.vertices.len(), 4);
  assert_eq!(geometry.mesh.uvs.len(), 4);
  assert_eq!(
    geometry.mesh.triangles,
    vec![Triangle::new(0, 2, 1), Triangle::new(0, 3, 2)]
  );

  assert_eq!(geometry.collision.rings.len(), 1);
  let ring = &geometry.collision.rings[0];
  assert_eq!(ring.len(), 5);
  assert_eq!(ring[4], ring[0]);
}

#[test]
fn hollow_square_end_to_end() {
  let geometry = build_polygon(&PolygonParameters::hollow(4, 2.0, 1.0));

  assert_eq!(geometry.mode, PolygonMode::Hollow);
  assert_eq!(geometry.mesh.vertices.len(), 8);
  assert_eq!(geometry.mesh.uvs.len(), 8);
  assert_eq!(geometry.mesh.triangles.len(), 8);
  assert_eq!(geometry.mesh.indices().len(), 24);

  // Outer ring first, inner ring second, same angles.
  for i in 0..4 {
    let outer = geometry.mesh.vertices[i];
    let inner = geometry.mesh.vertices[i + 4];
    assert!((outer.length() - 2.0).abs() < 1e-5);
    assert!((inner.length() - 1.0).abs() < 1e-5);
    assert!((outer * 0.5 - inner).length() < 1e-5);
  }

  let rings = &geometry.collision.rings;
  assert_eq!(rings.len(), 2);
  for ring in rings {
    assert_eq!(ring.len(), 5);
    assert_eq!(ring[4], ring[0]);
  }
  assert_eq!(geometry.collision.flattened().len(), 10);
}

#[test]
fn every_index_references_a_vertex() {
  for params in [
    PolygonParameters::filled(3, 0.1),
    PolygonParameters::filled(100, 10.0).with_repeat(4),
    PolygonParameters::hollow(3, 1.0, 0.5),
    PolygonParameters::hollow(100, 10.0, 9.99),
  ] {
    let geometry = build_polygon(&params);
    let count = geometry.mesh.vertices.len() as u32;
    assert!(geometry.mesh.indices().iter().all(|&i| i < count));
    assert_eq!(geometry.mesh.uvs.len(), geometry.mesh.vertices.len());
  }
}
