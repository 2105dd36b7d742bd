// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Massing assembly pipeline
//!
//! Orchestrates plane solving and triangulation into a single deterministic
//! pipeline: closed footprint + parameters in, wall and roof meshes out.
//! Every call recomputes from scratch; identical inputs produce bit-identical
//! buffers and no partial state survives between calls.

use massing_lite_core::{BuildingParams, Polygon};
use nalgebra::Point3;

use crate::error::{Error, Result};
use crate::mesh::Mesh;
use crate::plane::project_roof;
use crate::roof::build_roof;
use crate::walls::build_walls;

/// The generated mesh set for one building.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingMeshes {
    pub walls: Mesh,
    pub roof: Mesh,
}

/// Generate the massing meshes for a closed footprint.
///
/// The footprint's stored loop (closing duplicate included) becomes the
/// ground loop at `y = 0` and is projected onto the roof plane; walls span
/// the full loop, while the roof fan runs over the distinct vertices only.
/// Plane-solver failures propagate unchanged.
pub fn assemble(polygon: &Polygon, params: &BuildingParams) -> Result<BuildingMeshes> {
    if !polygon.is_closed() {
        return Err(Error::OpenFootprint);
    }
    let distinct = polygon.ring().len();
    if distinct < 3 {
        return Err(Error::InsufficientVertices(distinct));
    }

    let loop_points = polygon.points();
    let ground: Vec<Point3<f64>> = loop_points
        .iter()
        .map(|p| Point3::new(p.x, 0.0, p.z))
        .collect();

    let roof_loop = project_roof(
        loop_points,
        params.height(),
        params.pitch(),
        params.azimuth(),
    )?;

    let walls = build_walls(&ground, &roof_loop)?;
    let roof = build_roof(&roof_loop[..roof_loop.len() - 1])?;

    tracing::debug!(
        footprint_vertices = distinct,
        wall_triangles = walls.triangle_count(),
        roof_triangles = roof.triangle_count(),
        "assembled massing meshes"
    );

    Ok(BuildingMeshes { walls, roof })
}

/// Degree-based convenience for UI-facing callers, which edit height in
/// scene units and angles in degrees. Parameter validation failures surface
/// as [`Error::Params`].
pub fn assemble_from_degrees(
    polygon: &Polygon,
    height: f64,
    pitch_deg: f64,
    azimuth_deg: f64,
) -> Result<BuildingMeshes> {
    let params = BuildingParams::from_degrees(height, pitch_deg, azimuth_deg)?;
    assemble(polygon, &params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use massing_lite_core::GroundPoint;
    use std::f64::consts::FRAC_PI_2;

    fn square() -> Polygon {
        Polygon::closed_ring(vec![
            GroundPoint::new(0.0, 0.0),
            GroundPoint::new(2.0, 0.0),
            GroundPoint::new(2.0, 2.0),
            GroundPoint::new(0.0, 2.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_flat_square_mesh_counts() {
        let meshes = assemble(&square(), &BuildingParams::flat(3.0).unwrap()).unwrap();
        assert_eq!(meshes.walls.triangle_count(), 8);
        assert_eq!(meshes.walls.vertex_count(), 16);
        assert_eq!(meshes.roof.triangle_count(), 2);
        assert_eq!(meshes.roof.vertex_count(), 4);
    }

    #[test]
    fn test_open_footprint_rejected() {
        let open = Polygon::open(vec![
            GroundPoint::new(0.0, 0.0),
            GroundPoint::new(2.0, 0.0),
            GroundPoint::new(2.0, 2.0),
            GroundPoint::new(0.0, 2.0),
        ]);
        let result = assemble(&open, &BuildingParams::flat(3.0).unwrap());
        assert_eq!(result, Err(Error::OpenFootprint));
    }

    #[test]
    fn test_vertical_pitch_propagates() {
        // Construct the near-vertical pitch directly; params reject >= 90
        // degrees but the solver's epsilon guard is what must fire here.
        let result = project_roof(square().points(), 3.0, FRAC_PI_2, 0.0);
        assert!(matches!(result, Err(Error::VerticalRoofPitch(_))));
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let polygon = square();
        let params = BuildingParams::from_degrees(4.0, 20.0, 45.0).unwrap();

        let first = assemble(&polygon, &params).unwrap();
        let second = assemble(&polygon, &params).unwrap();

        // Bit-identical buffers, not merely approximately equal.
        assert_eq!(first.walls.positions, second.walls.positions);
        assert_eq!(first.walls.normals, second.walls.normals);
        assert_eq!(first.walls.indices, second.walls.indices);
        assert_eq!(first.roof.positions, second.roof.positions);
        assert_eq!(first.roof.normals, second.roof.normals);
        assert_eq!(first.roof.indices, second.roof.indices);
    }

    #[test]
    fn test_degree_surface_forwards_param_errors() {
        let result = assemble_from_degrees(&square(), -1.0, 0.0, 0.0);
        assert!(matches!(result, Err(Error::Params(_))));

        let meshes = assemble_from_degrees(&square(), 3.0, 0.0, 0.0).unwrap();
        assert_eq!(meshes.roof.triangle_count(), 2);
    }

    #[test]
    fn test_roof_outline_matches_footprint() {
        let polygon = square();
        let params = BuildingParams::from_degrees(3.0, 30.0, 60.0).unwrap();
        let meshes = assemble(&polygon, &params).unwrap();

        // Roof vertices keep the footprint's x/z exactly.
        for (vertex, corner) in meshes
            .roof
            .positions
            .chunks_exact(3)
            .zip(polygon.ring().iter())
        {
            assert_eq!(vertex[0], corner.x as f32);
            assert_eq!(vertex[2], corner.z as f32);
        }
    }
}
