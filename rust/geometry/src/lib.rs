// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Massing-Lite Geometry
//!
//! Mesh generation for traced building footprints: projects a closed
//! footprint onto a tilted roof plane and triangulates walls and roof into
//! renderable meshes. All operations are synchronous pure functions; the
//! assembler recomputes the full mesh set from scratch on every call.

pub mod assembler;
pub mod error;
pub mod mesh;
pub mod plane;
pub mod roof;
pub mod walls;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use assembler::{assemble, assemble_from_degrees, BuildingMeshes};
pub use error::{Error, Result};
pub use mesh::{Material, Mesh};
pub use plane::{project_roof, RoofPlane};
pub use roof::build_roof;
pub use walls::build_walls;
