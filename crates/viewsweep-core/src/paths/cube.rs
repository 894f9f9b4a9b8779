//! Six axis-aligned views.

use crate::config::{Coverage, PathConfig};
use crate::coordinate::SphericalCoordinate;
use crate::error::Result;
use crate::generator::PathGenerator;

/// (azimuth, elevation) of front, right, back, left, top, bottom.
const CUBE_FACES: [(f64, f64); 6] = [
    (0.0, 0.0),
    (90.0, 0.0),
    (180.0, 0.0),
    (270.0, 0.0),
    (0.0, 90.0),
    (0.0, -90.0),
];

/// Views the model from each face of a surrounding cube.
///
/// Half coverage drops the views below the horizon, leaving five.
/// Roll is always zero so the faces line up.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubePath;

impl PathGenerator for CubePath {
    fn name(&self) -> &'static str {
        "cube"
    }

    fn generate_positions(&self, config: &PathConfig) -> Result<Vec<SphericalCoordinate>> {
        let radius = config.distance();
        let views = CUBE_FACES
            .iter()
            .map(|&(azimuth, elevation)| SphericalCoordinate::new(radius, azimuth, elevation, 0.0))
            .filter(|view| match config.coverage() {
                Coverage::Full => true,
                Coverage::Half => view.elevation >= 0.0,
            })
            .collect();
        Ok(views)
    }
}
