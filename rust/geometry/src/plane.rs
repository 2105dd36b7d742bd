// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roof-plane solving
//!
//! Derives the roof plane from height, pitch and azimuth, then projects
//! footprint vertices vertically onto it. Because the projection is vertical,
//! the roof outline seen from above matches the footprint outline exactly.

use massing_lite_core::GroundPoint;
use nalgebra::{Point3, Vector3};

use crate::error::{Error, Result};

/// Minimum |cos(pitch)| for the plane to have a y-solution. Below this the
/// roof plane is treated as vertical.
const VERTICAL_PITCH_EPS: f64 = 1e-10;

/// Plane coefficients satisfying `a*x + b*y + c*z + d = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoofPlane {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl RoofPlane {
    /// Roof plane through `(0, height, 0)`, tilted by `pitch` radians from
    /// horizontal in the compass direction given by `azimuth` radians.
    ///
    /// The unit normal is `(-sin(pitch)*cos(azimuth), cos(pitch),
    /// -sin(pitch)*sin(azimuth))`. Pitch within epsilon of +/-90 degrees
    /// leaves the plane without a y-solution and fails.
    pub fn from_pitch_azimuth(height: f64, pitch: f64, azimuth: f64) -> Result<Self> {
        let (sin_pitch, cos_pitch) = pitch.sin_cos();
        if cos_pitch.abs() <= VERTICAL_PITCH_EPS {
            return Err(Error::VerticalRoofPitch(pitch));
        }

        let normal = Vector3::new(
            -sin_pitch * azimuth.cos(),
            cos_pitch,
            -sin_pitch * azimuth.sin(),
        );
        Ok(Self::from_normal_and_point(
            normal,
            Point3::new(0.0, height, 0.0),
        ))
    }

    /// Plane through `point` with the given normal.
    pub fn from_normal_and_point(normal: Vector3<f64>, point: Point3<f64>) -> Self {
        Self {
            a: normal.x,
            b: normal.y,
            c: normal.z,
            d: -(normal.x * point.x + normal.y * point.y + normal.z * point.z),
        }
    }

    /// Solve the plane equation for y at the given ground coordinates.
    #[inline]
    pub fn height_at(&self, x: f64, z: f64) -> f64 {
        (-self.d - self.a * x - self.c * z) / self.b
    }

    pub fn normal(&self) -> Vector3<f64> {
        Vector3::new(self.a, self.b, self.c)
    }
}

/// Project footprint vertices vertically onto the roof plane.
///
/// Returns one roof vertex per ground point, in input order; each keeps its
/// ground `x`/`z` and takes its `y` from the plane. Fails with
/// [`Error::VerticalRoofPitch`] when the pitch is within epsilon of
/// +/-90 degrees.
pub fn project_roof(
    ground: &[GroundPoint],
    height: f64,
    pitch: f64,
    azimuth: f64,
) -> Result<Vec<Point3<f64>>> {
    let plane = RoofPlane::from_pitch_azimuth(height, pitch, azimuth)?;
    Ok(ground
        .iter()
        .map(|p| Point3::new(p.x, plane.height_at(p.x, p.z), p.z))
        .collect())
}
