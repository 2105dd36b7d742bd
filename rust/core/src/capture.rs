// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Footprint capture state machine
//!
//! Accumulates clicked ground points into an open polyline and detects loop
//! closure: once at least three points are down, a click landing within the
//! snap radius of the first point closes the footprint. The closing vertex is
//! an exact copy of the stored first point, never the raw click, so the loop
//! is bit-exact.

use crate::error::{Error, Result};
use crate::footprint::Polygon;
use crate::point::GroundPoint;

/// Default snap radius for loop closure, in scene units.
pub const CLOSE_DISTANCE: f64 = 0.4;

/// Capture lifecycle. `Closed` is terminal; only `reset` leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Empty,
    Capturing,
    Closed,
}

/// A single footprint-tracing interaction.
///
/// The session is exclusively owned by the active interaction; all mutation
/// goes through `&mut self`, so there is never more than one writer.
#[derive(Debug, Clone)]
pub struct CaptureSession {
    points: Vec<GroundPoint>,
    close_distance: f64,
    footprint: Option<Polygon>,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self::with_close_distance(CLOSE_DISTANCE)
    }

    /// Session with a non-default snap radius.
    pub fn with_close_distance(close_distance: f64) -> Self {
        Self {
            points: Vec::new(),
            close_distance,
            footprint: None,
        }
    }

    pub fn state(&self) -> CaptureState {
        if self.footprint.is_some() {
            CaptureState::Closed
        } else if self.points.is_empty() {
            CaptureState::Empty
        } else {
            CaptureState::Capturing
        }
    }

    /// Record a clicked point and report the resulting state.
    ///
    /// With three or more points accumulated, a click within the snap radius
    /// of the first point closes the footprint; the appended closing vertex
    /// is the stored first point's value, not `point`. With fewer than three
    /// points closure is never attempted, even right on top of the first
    /// point.
    ///
    /// Duplicate or near-duplicate successive points are accepted without
    /// deduplication and may later yield degenerate zero-length wall edges.
    pub fn add_point(&mut self, point: GroundPoint) -> Result<CaptureState> {
        if self.footprint.is_some() {
            return Err(Error::SessionClosed);
        }

        if self.points.len() >= 3 {
            let first = self.points[0];
            if point.distance_to(&first) < self.close_distance {
                let mut run = std::mem::take(&mut self.points);
                run.push(first);
                self.footprint = Some(Polygon::closed_from_capture(run));
                return Ok(CaptureState::Closed);
            }
        }

        self.points.push(point);
        Ok(CaptureState::Capturing)
    }

    /// Point run for live-line rendering: the captured points with the hover
    /// point appended. Read-only; capture state is untouched. Once the
    /// footprint is closed the hover point is ignored and the closed loop is
    /// returned as-is.
    pub fn preview(&self, hover: GroundPoint) -> Vec<GroundPoint> {
        match &self.footprint {
            Some(footprint) => footprint.points().to_vec(),
            None => {
                let mut line = Vec::with_capacity(self.points.len() + 1);
                line.extend_from_slice(&self.points);
                line.push(hover);
                line
            }
        }
    }

    /// Points captured so far; for a closed session this is the closed loop
    /// including the closing vertex.
    pub fn points(&self) -> &[GroundPoint] {
        match &self.footprint {
            Some(footprint) => footprint.points(),
            None => &self.points,
        }
    }

    /// The closed footprint, available exactly when the session is `Closed`.
    pub fn footprint(&self) -> Option<&Polygon> {
        self.footprint.as_ref()
    }

    /// Discard all captured points and return to `Empty`.
    pub fn reset(&mut self) {
        self.points.clear();
        self.footprint = None;
    }
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new()
    }
}
