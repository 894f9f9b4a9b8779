//! Golden-ratio (Fibonacci sphere) sampling.

use crate::config::{Coverage, PathConfig};
use crate::coordinate::{wrap_degrees, SphericalCoordinate};
use crate::error::{Result, ViewsweepError};
use crate::generator::PathGenerator;
use crate::paths::check_view_budget;

/// Near-uniform points over the sphere, ordered from the top pole down.
///
/// Point `i` of `density` sits at `asin(-1 + 2i / (density - 1))` elevation
/// and `360 i / phi` azimuth. Half coverage skips points below the horizon
/// without re-spacing the rest, so it yields roughly half of `density`.
///
/// Roll is always zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpiralPhiPath;

impl SpiralPhiPath {
    /// Smallest density that spans both poles.
    pub const MIN_DENSITY: u32 = 2;
}

impl PathGenerator for SpiralPhiPath {
    fn name(&self) -> &'static str {
        "spiral_phi"
    }

    fn generate_positions(&self, config: &PathConfig) -> Result<Vec<SphericalCoordinate>> {
        let density = config.density();
        if density < Self::MIN_DENSITY {
            return Err(ViewsweepError::invalid_config(
                "density",
                format!(
                    "must be at least {} for spiral_phi (got {density})",
                    Self::MIN_DENSITY
                ),
            ));
        }
        check_view_budget("density", self.name(), f64::from(density))?;

        let golden_ratio = (1.0 + 5.0_f64.sqrt()) / 2.0;
        let last = f64::from(density - 1);

        let coords = (0..density)
            .rev()
            .filter_map(|i| {
                let i = f64::from(i);
                let sine = (-1.0 + 2.0 * i / last).clamp(-1.0, 1.0);
                let elevation = sine.asin().to_degrees();
                match config.coverage() {
                    Coverage::Half if elevation < 0.0 => return None,
                    Coverage::Half | Coverage::Full => {}
                }
                let azimuth = wrap_degrees(360.0 * (i / golden_ratio));
                Some(SphericalCoordinate::new(
                    config.distance(),
                    azimuth,
                    elevation,
                    0.0,
                ))
            })
            .collect();
        Ok(coords)
    }
}
