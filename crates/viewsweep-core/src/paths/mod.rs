//! Built-in camera path generators.
//!
//! Each submodule holds one [`PathGenerator`](crate::PathGenerator)
//! implementation:
//! - [`CubePath`] - six axis-aligned views
//! - [`OrbitPath`] - an evenly spaced equatorial ring
//! - [`SpiralPhiPath`] - golden-ratio sampling of the sphere
//! - [`PoleRotationPath`] - rotations just off the poles
//! - [`SpiralLinearPath`] - rings with adaptive azimuth stepping
//! - [`SpiralPhasedPath`] - zenith rotation followed by a helical descent

mod cube;
mod orbit;
mod pole_rotation;
mod spiral_linear;
mod spiral_phased;
mod spiral_phi;

pub use cube::CubePath;
pub use orbit::OrbitPath;
pub use pole_rotation::{PoleRotationPath, POLE_FRAMES_PER_ROTATION, POLE_TILT_OFFSET};
pub use spiral_linear::{SpiralLinearPath, SPIRAL_LINEAR_MAX_ELEVATION};
pub use spiral_phased::{SpiralPhasedPath, DESCENT_START_ELEVATION, ZENITH_ELEVATION};
pub use spiral_phi::SpiralPhiPath;

use crate::error::{Result, ViewsweepError};

/// Most views a single generation request may produce.
pub const MAX_PATH_VIEWS: u32 = 10_000;

/// Rejects a request whose view count would exceed [`MAX_PATH_VIEWS`].
///
/// `views` is computed in floating point before any integer conversion so
/// that tiny steps or huge densities cannot wrap or saturate.
pub(crate) fn check_view_budget(field: &'static str, path: &str, views: f64) -> Result<()> {
    if views <= f64::from(MAX_PATH_VIEWS) {
        return Ok(());
    }
    Err(ViewsweepError::invalid_config(
        field,
        format!("gives {views:.0} views for {path}, more than the limit of {MAX_PATH_VIEWS}"),
    ))
}

#[cfg(test)]
pub(crate) mod test_util {
    use crate::config::{Coverage, PathConfig, PathConfigParams, PathKind};

    pub fn config(kind: PathKind, coverage: Coverage) -> PathConfig {
        PathConfigParams::new()
            .with_path_kind(kind)
            .with_coverage(coverage)
            .validate()
            .unwrap()
    }

    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_budget() {
        assert!(check_view_budget("density", "orbit", 10_000.0).is_ok());
        let err = check_view_budget("angular_step", "spiral_lin", 3.6e10).unwrap_err();
        assert!(matches!(
            err,
            ViewsweepError::InvalidConfig {
                field: "angular_step",
                ..
            }
        ));
        assert!(err.to_string().contains("36000000000 views"));
    }
}
