// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building parameters
//!
//! Height, roof pitch and roof azimuth, stored in radians. The embedding UI
//! edits degrees; `from_degrees` covers that conversion.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::error::{Error, Result};

/// Massing parameters: extrusion height, roof pitch and roof azimuth.
///
/// Angles are radians internally. Pitch lies strictly inside (-90, 90)
/// degrees; azimuth is normalized into [0, 2pi).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingParams {
    height: f64,
    pitch: f64,
    azimuth: f64,
}

impl BuildingParams {
    pub fn new(height: f64, pitch: f64, azimuth: f64) -> Result<Self> {
        if !height.is_finite() || height < 0.0 {
            return Err(Error::InvalidHeight(height));
        }
        if !pitch.is_finite() || pitch.abs() >= FRAC_PI_2 {
            return Err(Error::PitchOutOfRange(pitch));
        }
        if !azimuth.is_finite() {
            return Err(Error::InvalidAzimuth(azimuth));
        }
        Ok(Self {
            height,
            pitch,
            azimuth: azimuth.rem_euclid(TAU),
        })
    }

    /// Degree-based constructor for UI-facing callers.
    pub fn from_degrees(height: f64, pitch_deg: f64, azimuth_deg: f64) -> Result<Self> {
        Self::new(height, pitch_deg.to_radians(), azimuth_deg.to_radians())
    }

    /// Flat roof at the given height: pitch 0, azimuth 0.
    pub fn flat(height: f64) -> Result<Self> {
        Self::new(height, 0.0, 0.0)
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }
}
