// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Trace an L-shaped footprint, close the loop and print the generated
//! mesh statistics.
//!
//! Run with: cargo run --example trace_building

use massing_lite_core::{BuildingParams, CaptureSession, CaptureState, GroundPoint};
use massing_lite_geometry::{assemble, Mesh};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Simulated clicks on the ground plane. Vertex 0 sees every other
    // vertex of this L, so the roof fan stays valid.
    let clicks = [
        (0.0, 0.0),
        (6.0, 0.0),
        (6.0, 3.0),
        (3.0, 3.0),
        (3.0, 5.0),
        (0.0, 5.0),
    ];

    let mut session = CaptureSession::new();
    for (x, z) in clicks {
        let state = session.add_point(GroundPoint::new(x, z))?;
        println!("click ({x:.1}, {z:.1}) -> {state:?}");
    }

    // A click near the first corner snaps the loop shut.
    let state = session.add_point(GroundPoint::new(0.15, -0.1))?;
    println!("click (0.15, -0.1) -> {state:?}");
    assert_eq!(state, CaptureState::Closed);

    let footprint = session.footprint().expect("session just closed");
    println!(
        "\nfootprint: {} corners, {} stored points (closing vertex duplicated)",
        footprint.ring().len(),
        footprint.points().len()
    );

    let params = BuildingParams::from_degrees(6.0, 22.5, 90.0)?;
    let meshes = assemble(footprint, &params)?;

    print_mesh("walls", &meshes.walls);
    print_mesh("roof", &meshes.roof);

    Ok(())
}

fn print_mesh(name: &str, mesh: &Mesh) {
    let (min, max) = mesh.bounds();
    println!(
        "\n{name}: {} vertices, {} triangles, color {}",
        mesh.vertex_count(),
        mesh.triangle_count(),
        mesh.material.color()
    );
    println!(
        "  bounds: ({:.2}, {:.2}, {:.2}) .. ({:.2}, {:.2}, {:.2})",
        min.x, min.y, min.z, max.x, max.y, max.z
    );
}
