// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Footprint polygons
//!
//! A footprint is an ordered run of ground points with a `closed` flag.
//! Closed polygons are immutable and always store their closing vertex as an
//! exact copy of the first vertex, so the loop is bit-exact rather than
//! merely near-coincident.

use crate::error::{Error, Result};
use crate::point::GroundPoint;

/// Ordered sequence of ground points, open while being traced and
/// immutable once closed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    points: Vec<GroundPoint>,
    closed: bool,
}

impl Polygon {
    /// An in-progress (open) outline. Open polygons carry no geometric
    /// guarantees; they exist so callers can hand partial traces around.
    pub fn open(points: Vec<GroundPoint>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    /// Close a ring of distinct vertices into an immutable footprint.
    ///
    /// Accepts either the bare ring or a ring whose last vertex already
    /// duplicates the first; in both cases the stored sequence ends with an
    /// exact copy of the first vertex.
    pub fn closed_ring(mut points: Vec<GroundPoint>) -> Result<Self> {
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        if points.len() < 3 {
            return Err(Error::InsufficientVertices(points.len()));
        }
        let first = points[0];
        points.push(first);
        Ok(Self {
            points,
            closed: true,
        })
    }

    /// Axis-aligned rectangular footprint centered on the origin.
    pub fn rectangle(width: f64, depth: f64) -> Self {
        let hw = width / 2.0;
        let hd = depth / 2.0;
        let first = GroundPoint::new(-hw, -hd);
        Self {
            points: vec![
                first,
                GroundPoint::new(hw, -hd),
                GroundPoint::new(hw, hd),
                GroundPoint::new(-hw, hd),
                first,
            ],
            closed: true,
        }
    }

    /// Constructor for the capture session, which has already enforced the
    /// closure invariants on its own point run.
    pub(crate) fn closed_from_capture(points: Vec<GroundPoint>) -> Self {
        debug_assert!(points.len() >= 4);
        debug_assert_eq!(points.first(), points.last());
        Self {
            points,
            closed: true,
        }
    }

    /// Stored point sequence. For a closed polygon the last entry is the
    /// exact closing duplicate of the first.
    pub fn points(&self) -> &[GroundPoint] {
        &self.points
    }

    /// Distinct vertices: the stored sequence with the closing duplicate
    /// stripped when the polygon is closed.
    pub fn ring(&self) -> &[GroundPoint] {
        if self.closed {
            &self.points[..self.points.len() - 1]
        } else {
            &self.points
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
