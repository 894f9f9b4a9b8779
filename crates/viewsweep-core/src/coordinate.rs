//! Spherical viewpoint coordinates.

use serde::{Deserialize, Serialize};

/// One camera viewpoint on a sphere centred at the origin.
///
/// Angles are in degrees. Generators may emit azimuths outside `[0, 360)`;
/// use [`SphericalCoordinate::normalized_azimuth`] when a canonical value is
/// needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalCoordinate {
    /// Distance from the origin.
    pub radius: f64,
    /// Rotation around the vertical axis, in degrees.
    pub azimuth: f64,
    /// Angle above (positive) or below (negative) the horizon, in `[-90, 90]`.
    pub elevation: f64,
    /// Rotation about the view axis, in degrees.
    pub roll: f64,
}

impl SphericalCoordinate {
    /// Creates a new coordinate.
    pub const fn new(radius: f64, azimuth: f64, elevation: f64, roll: f64) -> Self {
        Self {
            radius,
            azimuth,
            elevation,
            roll,
        }
    }

    /// Returns the azimuth wrapped into `[0, 360)`.
    pub fn normalized_azimuth(&self) -> f64 {
        wrap_degrees(self.azimuth)
    }
}

/// Wraps an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
