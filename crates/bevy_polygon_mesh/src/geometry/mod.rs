//! Pure geometry generation for regular polygons.
//!
//! Four independent stages, composed by [`build_polygon`](crate::build_polygon):
//! 1. [`circumference_points`] samples corners on a circle
//! 2. [`triangulate_fan`] / [`triangulate_ring`] produce triangle indices
//! 3. [`map_uvs`] computes texture coordinates
//! 4. [`close_ring`] turns each ring into a closed collision polyline

mod boundary;
mod sampler;
mod triangulate;
mod uv;

pub use boundary::{CollisionGeometry, close_ring};
pub use sampler::circumference_points;
pub use triangulate::{Triangle, flatten_indices, triangulate_fan, triangulate_ring};
pub use uv::map_uvs;
