//! Rotation just off the poles.
//!
//! At exactly +/-90 degrees elevation the azimuth is undefined and every view
//! collapses to the same image, so the rings sit a small tilt away from the
//! pole to keep the rotation visible.

use crate::config::{Coverage, PathConfig};
use crate::coordinate::SphericalCoordinate;
use crate::error::Result;
use crate::generator::PathGenerator;

/// Views per revolution.
pub const POLE_FRAMES_PER_ROTATION: u32 = 30;

/// Distance of each ring from its pole, in degrees.
pub const POLE_TILT_OFFSET: f64 = 2.0;

/// One ring near the top pole, plus one near the bottom pole under full coverage.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoleRotationPath;

impl PoleRotationPath {
    fn ring(config: &PathConfig, elevation: f64) -> impl Iterator<Item = SphericalCoordinate> + '_ {
        (0..POLE_FRAMES_PER_ROTATION).map(move |i| {
            let azimuth = 360.0 * f64::from(i) / f64::from(POLE_FRAMES_PER_ROTATION);
            SphericalCoordinate::new(config.distance(), azimuth, elevation, config.roll())
        })
    }
}

impl PathGenerator for PoleRotationPath {
    fn name(&self) -> &'static str {
        "pole_rotation"
    }

    fn generate_positions(&self, config: &PathConfig) -> Result<Vec<SphericalCoordinate>> {
        let mut coords: Vec<_> = Self::ring(config, 90.0 - POLE_TILT_OFFSET).collect();
        match config.coverage() {
            Coverage::Full => coords.extend(Self::ring(config, -90.0 + POLE_TILT_OFFSET)),
            Coverage::Half => {}
        }
        Ok(coords)
    }
}
