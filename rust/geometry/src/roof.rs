// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roof mesh generation
//!
//! Fan-triangulates the roof vertex ring: every triangle shares vertex 0.
//! Valid for convex footprints and for concave ones where vertex 0 can see
//! every other vertex; other concave or self-overlapping rings produce
//! overlapping triangles. There is no general-polygon fallback.

use nalgebra::{Point3, Vector3};

use crate::error::{Error, Result};
use crate::mesh::{Material, Mesh};

/// Fan-triangulate the distinct roof vertices into a flat-shaded mesh.
///
/// Expects the ring without the closing duplicate; `N` vertices yield
/// `N-2` triangles `(0, i, i+1)`. All vertices share the ring's Newell
/// normal, flipped to point upward.
pub fn build_roof(ring: &[Point3<f64>]) -> Result<Mesh> {
    let n = ring.len();
    if n < 3 {
        return Err(Error::InsufficientVertices(n));
    }

    let mut normal = newell_normal(ring);
    if normal.y < 0.0 {
        normal = -normal;
    }

    let mut mesh = Mesh::with_capacity(Material::Roof, n, (n - 2) * 3);
    for vertex in ring {
        mesh.add_vertex(*vertex, normal);
    }
    for i in 1..n - 1 {
        mesh.add_triangle(0, i as u32, (i + 1) as u32);
    }

    Ok(mesh)
}

/// Newell's method over the ring; robust for rings whose first corner is
/// degenerate. Falls back to straight up for zero-area input.
fn newell_normal(points: &[Point3<f64>]) -> Vector3<f64> {
    let n = points.len();
    let mut normal = Vector3::<f64>::zeros();

    for i in 0..n {
        let current = &points[i];
        let next = &points[(i + 1) % n];

        normal.x += (current.y - next.y) * (current.z + next.z);
        normal.y += (current.z - next.z) * (current.x + next.x);
        normal.z += (current.x - next.x) * (current.y + next.y);
    }

    let len = normal.norm();
    if len > 1e-10 {
        normal / len
    } else {
        Vector3::new(0.0, 1.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn flat_square_ring(height: f64) -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, height, 0.0),
            Point3::new(2.0, height, 0.0),
            Point3::new(2.0, height, 2.0),
            Point3::new(0.0, height, 2.0),
        ]
    }

    #[test]
    fn test_square_fans_into_two_triangles() {
        let mesh = build_roof(&flat_square_ring(3.0)).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(mesh.material, Material::Roof);
    }

    #[test]
    fn test_fan_count_for_hexagon() {
        let ring: Vec<Point3<f64>> = (0..6)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as f64 / 6.0;
                Point3::new(angle.cos(), 2.0, angle.sin())
            })
            .collect();
        let mesh = build_roof(&ring).unwrap();
        assert_eq!(mesh.triangle_count(), 4);
        // Every triangle anchors at vertex 0.
        for tri in mesh.indices.chunks_exact(3) {
            assert_eq!(tri[0], 0);
        }
    }

    #[test]
    fn test_flat_roof_normal_points_up() {
        let mesh = build_roof(&flat_square_ring(3.0)).unwrap();
        for chunk in mesh.normals.chunks_exact(3) {
            assert_relative_eq!(chunk[0], 0.0);
            assert_relative_eq!(chunk[1], 1.0);
            assert_relative_eq!(chunk[2], 0.0);
        }
    }

    #[test]
    fn test_normal_flipped_up_for_reversed_ring() {
        let mut ring = flat_square_ring(3.0);
        ring.reverse();
        let mesh = build_roof(&ring).unwrap();
        assert!(mesh.normals[1] > 0.0);
    }

    #[test]
    fn test_tilted_ring_normal_matches_plane() {
        // Ring on the plane y = 1 + x: normal is (-1, 1, 0) / sqrt(2).
        let ring = vec![
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(2.0, 3.0, 0.0),
            Point3::new(2.0, 3.0, 2.0),
            Point3::new(0.0, 1.0, 2.0),
        ];
        let mesh = build_roof(&ring).unwrap();
        let inv_sqrt2 = std::f64::consts::FRAC_1_SQRT_2 as f32;
        assert_relative_eq!(mesh.normals[0], -inv_sqrt2, epsilon = 1e-6);
        assert_relative_eq!(mesh.normals[1], inv_sqrt2, epsilon = 1e-6);
        assert_relative_eq!(mesh.normals[2], 0.0);
    }

    #[test]
    fn test_insufficient_vertices_fail() {
        let ring = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        assert_eq!(build_roof(&ring), Err(Error::InsufficientVertices(2)));
    }
}
