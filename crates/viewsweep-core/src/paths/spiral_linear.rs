//! Rings of views with adaptive azimuth stepping.

use crate::config::{Coverage, PathConfig};
use crate::coordinate::{wrap_degrees, SphericalCoordinate};
use crate::error::{Result, ViewsweepError};
use crate::generator::PathGenerator;
use crate::paths::check_view_budget;

/// Elevation of the first ring. Rings stay this far from the poles
/// regardless of the configured elevation bounds.
pub const SPIRAL_LINEAR_MAX_ELEVATION: f64 = 70.0;

/// Horizontal rings stepping down from 70 degrees.
///
/// Full coverage descends to -70, half coverage to the equator. Rings are
/// `angular_step` apart in elevation. Within a ring the azimuth step shrinks
/// towards the poles, from `angular_step` at the equator to half of it at
/// +/-70 degrees, so polar rings get proportionally more views.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpiralLinearPath;

impl SpiralLinearPath {
    /// Total elevation swept for the given coverage.
    pub fn elevation_range(coverage: Coverage) -> f64 {
        match coverage {
            Coverage::Full => 2.0 * SPIRAL_LINEAR_MAX_ELEVATION,
            Coverage::Half => SPIRAL_LINEAR_MAX_ELEVATION,
        }
    }

    /// Azimuth step used on the ring at `elevation`.
    ///
    /// Scales `angular_step` by 0.5 at +/-70 degrees up to 1.0 at the equator.
    pub fn ring_azimuth_step(angular_step: f64, elevation: f64) -> f64 {
        let elevation_factor = (elevation / SPIRAL_LINEAR_MAX_ELEVATION).abs();
        let scale = 0.5 + 0.5 * (1.0 - elevation_factor);
        angular_step * scale
    }
}

impl PathGenerator for SpiralLinearPath {
    fn name(&self) -> &'static str {
        "spiral_lin"
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn generate_positions(&self, config: &PathConfig) -> Result<Vec<SphericalCoordinate>> {
        let base_step = config.angular_step();
        let elevation_range = Self::elevation_range(config.coverage());

        let ring_steps = (elevation_range / base_step).floor();
        if ring_steps < 1.0 {
            return Err(ViewsweepError::invalid_config(
                "angular_step",
                format!(
                    "must not exceed {elevation_range} degrees for spiral_lin with {} coverage \
                     (got {base_step})",
                    config.coverage()
                ),
            ));
        }
        // the polar rings use half the step and are the densest
        let max_views = (ring_steps + 1.0) * (720.0 / base_step).floor();
        check_view_budget("angular_step", self.name(), max_views)?;
        let num_steps = ring_steps as u32;

        let mut coords = Vec::new();
        let mut last_azimuth = 0.0_f64;

        for i in 0..=num_steps {
            let t = f64::from(i) / f64::from(num_steps);
            let elevation = SPIRAL_LINEAR_MAX_ELEVATION - elevation_range * t;

            let azimuth_step = Self::ring_azimuth_step(base_step, elevation);
            let points_at_elevation = (360.0 / azimuth_step).floor() as u32;

            for j in 0..points_at_elevation {
                let mut azimuth = (f64::from(j) * azimuth_step) % 360.0;

                // keep consecutive views on the short side of the 0/360 seam
                if j > 0 {
                    let delta = azimuth - last_azimuth;
                    if delta > 180.0 {
                        azimuth -= 360.0;
                    } else if delta < -180.0 {
                        azimuth += 360.0;
                    }
                }

                coords.push(SphericalCoordinate::new(
                    config.distance(),
                    wrap_degrees(azimuth),
                    elevation,
                    config.roll(),
                ));
                last_azimuth = azimuth;
            }
        }

        Ok(coords)
    }
}
