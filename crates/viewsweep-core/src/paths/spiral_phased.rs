//! Two-phase spiral: a full turn near the zenith, then a stepped descent.

use crate::config::{Coverage, PathConfig};
use crate::coordinate::{wrap_degrees, SphericalCoordinate};
use crate::error::Result;
use crate::generator::PathGenerator;
use crate::paths::check_view_budget;

/// Elevation of the opening revolution.
pub const ZENITH_ELEVATION: f64 = 85.0;

/// Elevation of the first descent revolution.
pub const DESCENT_START_ELEVATION: f64 = 83.0;

/// Lowest descent elevation under full coverage.
const FULL_FINAL_ELEVATION: f64 = -85.0;

/// Lowest descent elevation under half coverage.
const HALF_FINAL_ELEVATION: f64 = 0.0;

/// One revolution at 85 degrees, then revolutions that each drop by
/// `angular_step / 2` until the final elevation is passed.
///
/// Every revolution has `round(360 / angular_step)` views, so a revolution
/// ends after a fixed number of steps even when `angular_step` does not
/// divide 360 exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpiralPhasedPath;

impl SpiralPhasedPath {
    /// Views per revolution for the given step; never zero.
    ///
    /// Clamped to `u32::MAX` for vanishingly small steps, which
    /// [`generate_positions`](PathGenerator::generate_positions) rejects
    /// before walking.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn steps_per_revolution(angular_step: f64) -> u32 {
        (360.0 / angular_step).round().clamp(1.0, f64::from(u32::MAX)) as u32
    }

    /// Total views for the given step and coverage, in floating point.
    fn view_count(angular_step: f64, coverage: Coverage) -> f64 {
        let per_revolution = (360.0 / angular_step).round().max(1.0);
        let drop = DESCENT_START_ELEVATION - Self::final_elevation(coverage);
        let descent_revolutions = (drop / (angular_step / 2.0)).floor() + 1.0;
        per_revolution * (1.0 + descent_revolutions)
    }

    /// Elevation below which the descent stops.
    pub fn final_elevation(coverage: Coverage) -> f64 {
        match coverage {
            Coverage::Full => FULL_FINAL_ELEVATION,
            Coverage::Half => HALF_FINAL_ELEVATION,
        }
    }
}

impl PathGenerator for SpiralPhasedPath {
    fn name(&self) -> &'static str {
        "spiral_phased"
    }

    fn generate_positions(&self, config: &PathConfig) -> Result<Vec<SphericalCoordinate>> {
        let views = Self::view_count(config.angular_step(), config.coverage());
        check_view_budget("angular_step", self.name(), views)?;

        let steps = Self::steps_per_revolution(config.angular_step());
        if (360.0 / config.angular_step()).fract() != 0.0 {
            log::debug!(
                "spiral_phased: angular step {} does not divide 360, \
                 using {steps} views per revolution",
                config.angular_step()
            );
        }
        Ok(PhasedWalk::new(config, steps).collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    ZenithRotation,
    Descent,
    Done,
}

/// Per-call walk state; a fresh walk is built for every generation request.
struct PhasedWalk<'a> {
    config: &'a PathConfig,
    steps_per_revolution: u32,
    final_elevation: f64,
    phase: Phase,
    /// Index of the next view within the current revolution.
    tick: u32,
    /// Completed descent revolutions.
    revolution: u32,
}

impl<'a> PhasedWalk<'a> {
    fn new(config: &'a PathConfig, steps_per_revolution: u32) -> Self {
        Self {
            config,
            steps_per_revolution,
            final_elevation: SpiralPhasedPath::final_elevation(config.coverage()),
            phase: Phase::ZenithRotation,
            tick: 0,
            revolution: 0,
        }
    }

    fn coordinate(&self, elevation: f64) -> SphericalCoordinate {
        let azimuth = wrap_degrees(f64::from(self.tick) * self.config.angular_step());
        SphericalCoordinate::new(self.config.distance(), azimuth, elevation, self.config.roll())
    }

    /// Advances the tick; returns true when a revolution just completed.
    fn advance(&mut self) -> bool {
        self.tick += 1;
        if self.tick == self.steps_per_revolution {
            self.tick = 0;
            true
        } else {
            false
        }
    }
}

impl Iterator for PhasedWalk<'_> {
    type Item = SphericalCoordinate;

    fn next(&mut self) -> Option<SphericalCoordinate> {
        match self.phase {
            Phase::ZenithRotation => {
                let coord = self.coordinate(ZENITH_ELEVATION);
                if self.advance() {
                    self.phase = Phase::Descent;
                }
                Some(coord)
            }
            Phase::Descent => {
                let elevation = DESCENT_START_ELEVATION
                    - f64::from(self.revolution) * self.config.angular_step() / 2.0;
                if elevation < self.final_elevation {
                    self.phase = Phase::Done;
                    return None;
                }
                let coord = self.coordinate(elevation);
                if self.advance() {
                    self.revolution += 1;
                }
                Some(coord)
            }
            Phase::Done => None,
        }
    }
}
