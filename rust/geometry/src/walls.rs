// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall mesh generation
//!
//! Triangulates the vertical strip between paired ground and roof vertices
//! into flat-shaded quads. The builder walks consecutive pairs only; callers
//! wanting a fully closed shell must pass loops whose last vertex duplicates
//! the first. Winding is fixed as `(g_i, g_i+1, r_i+1)` / `(g_i, r_i+1, r_i)`.

use nalgebra::{Point3, Vector3};

use crate::error::{Error, Result};
use crate::mesh::{Material, Mesh};

/// Build the wall strip between two equal-length vertex runs.
///
/// Emits one quad (two triangles, four fresh flat-shaded vertices) per
/// consecutive pair, `N-1` quads for `N` input vertices. There is no
/// implicit wrap from the last vertex back to the first.
///
/// Degenerate zero-length edges still emit their quad so the count contract
/// holds; such quads have zero area and a zeroed normal.
pub fn build_walls(ground: &[Point3<f64>], roof: &[Point3<f64>]) -> Result<Mesh> {
    if ground.len() != roof.len() {
        return Err(Error::LoopMismatch {
            ground: ground.len(),
            roof: roof.len(),
        });
    }
    if ground.len() < 3 {
        return Err(Error::InsufficientVertices(ground.len()));
    }

    let quad_count = ground.len() - 1;
    let mut mesh = Mesh::with_capacity(Material::Walls, quad_count * 4, quad_count * 6);

    // Capture imposes no winding direction, so orient edge normals away from
    // the interior using the footprint's signed area.
    let outward = if signed_area_xz(ground) >= 0.0 {
        1.0
    } else {
        -1.0
    };

    for i in 0..quad_count {
        let g0 = ground[i];
        let g1 = ground[i + 1];
        let r0 = roof[i];
        let r1 = roof[i + 1];

        let edge = Vector3::new(g1.x - g0.x, 0.0, g1.z - g0.z);
        let normal = Vector3::new(edge.z, 0.0, -edge.x)
            .try_normalize(1e-10)
            .map(|n| n * outward)
            .unwrap_or_else(Vector3::zeros);

        let idx = mesh.vertex_count() as u32;
        mesh.add_vertex(g0, normal);
        mesh.add_vertex(g1, normal);
        mesh.add_vertex(r1, normal);
        mesh.add_vertex(r0, normal);

        mesh.add_triangle(idx, idx + 1, idx + 2);
        mesh.add_triangle(idx, idx + 2, idx + 3);
    }

    Ok(mesh)
}

/// Shoelace area of the loop's ground-plane projection. Positive for one
/// winding direction, negative for the other; only the sign is used.
fn signed_area_xz(points: &[Point3<f64>]) -> f64 {
    let n = points.len();
    let mut doubled = 0.0;
    for i in 0..n {
        let p = &points[i];
        let q = &points[(i + 1) % n];
        doubled += p.x * q.z - q.x * p.z;
    }
    doubled / 2.0
}
