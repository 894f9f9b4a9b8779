//! Horizontal orbit around the model.

use crate::config::PathConfig;
use crate::coordinate::SphericalCoordinate;
use crate::error::Result;
use crate::generator::PathGenerator;
use crate::paths::check_view_budget;

/// `density` views evenly spaced around the equator.
///
/// Coverage has no effect; the orbit is always a single ring at elevation 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrbitPath;

impl PathGenerator for OrbitPath {
    fn name(&self) -> &'static str {
        "orbit"
    }

    fn generate_positions(&self, config: &PathConfig) -> Result<Vec<SphericalCoordinate>> {
        let count = config.density();
        check_view_budget("density", self.name(), f64::from(count))?;
        let coords = (0..count)
            .map(|i| {
                let azimuth = 360.0 * f64::from(i) / f64::from(count);
                SphericalCoordinate::new(config.distance(), azimuth, 0.0, config.roll())
            })
            .collect();
        Ok(coords)
    }
}
