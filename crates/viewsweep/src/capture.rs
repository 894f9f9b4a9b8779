//! Capture plans: the per-frame schedule handed to a renderer.

use serde::Serialize;

use viewsweep_core::{
    path_registry, PathConfig, PathKind, PathRegistry, Result, SphericalCoordinate,
};

use crate::pose::CameraPose;

/// Returns the output file name for frame `index` at `coord`.
///
/// The pattern is `render_{index:03}_az{az:03}_el{el:03}_roll{roll:03}.png`
/// with angles rounded to whole degrees. Downstream tooling parses these
/// names, so the format must not change.
pub fn frame_file_name(index: usize, coord: &SphericalCoordinate) -> String {
    format!(
        "render_{index:03}_az{:03.0}_el{:03.0}_roll{:03.0}.png",
        coord.azimuth, coord.elevation, coord.roll
    )
}

/// One scheduled frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptureFrame {
    /// Position of the frame in capture order.
    pub index: usize,
    /// Viewpoint produced by the path generator.
    pub coordinate: SphericalCoordinate,
    /// Camera placement for the viewpoint.
    pub pose: CameraPose,
    /// Output file name.
    pub file_name: String,
}

/// The full ordered list of frames for one configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapturePlan {
    path_kind: PathKind,
    frames: Vec<CaptureFrame>,
}

impl CapturePlan {
    /// Builds the plan for `config` using the process-wide registry.
    pub fn build(config: &PathConfig) -> Result<Self> {
        Self::build_with(path_registry(), config)
    }

    /// Builds the plan for `config` using an explicit registry.
    pub fn build_with(registry: &PathRegistry, config: &PathConfig) -> Result<Self> {
        let path_kind = config.path_kind();
        if config.has_elevation_bounds() {
            log::warn!(
                "elevation bounds [{}, {}] are not applied by the '{path_kind}' path",
                config.min_elevation(),
                config.max_elevation()
            );
        }

        let generator = registry.get(path_kind.name())?;
        let coordinates = generator.generate_positions(config)?;
        log::debug!(
            "'{}' generated {} camera positions",
            generator.name(),
            coordinates.len()
        );

        let frames: Vec<CaptureFrame> = coordinates
            .into_iter()
            .enumerate()
            .map(|(index, coordinate)| CaptureFrame {
                index,
                pose: CameraPose::from_coordinate(&coordinate),
                file_name: frame_file_name(index, &coordinate),
                coordinate,
            })
            .collect();

        log::info!("planned {} frames for path '{path_kind}'", frames.len());
        Ok(Self { path_kind, frames })
    }

    /// The path kind this plan was generated from.
    pub fn path_kind(&self) -> PathKind {
        self.path_kind
    }

    /// Returns all frames in capture order.
    pub fn frames(&self) -> &[CaptureFrame] {
        &self.frames
    }

    /// Returns an iterator over the frames.
    pub fn iter(&self) -> std::slice::Iter<'_, CaptureFrame> {
        self.frames.iter()
    }

    /// Returns the generated viewpoints in capture order.
    pub fn coordinates(&self) -> impl Iterator<Item = &SphericalCoordinate> + '_ {
        self.frames.iter().map(|f| &f.coordinate)
    }

    /// Returns the number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if the plan has no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl<'a> IntoIterator for &'a CapturePlan {
    type Item = &'a CaptureFrame;
    type IntoIter = std::slice::Iter<'a, CaptureFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewsweep_core::{Coverage, PathConfigParams, ViewsweepError};

    #[test]
    fn test_frame_file_name() {
        let coord = SphericalCoordinate::new(1.0, 12.000_000_000_000_002, 88.0, 0.0);
        assert_eq!(frame_file_name(3, &coord), "render_003_az012_el088_roll000.png");

        let coord = SphericalCoordinate::new(1.0, 270.4, -88.0, -15.0);
        assert_eq!(frame_file_name(42, &coord), "render_042_az270_el-88_roll-15.png");

        let coord = SphericalCoordinate::new(1.0, 359.6, 0.0, 0.0);
        assert_eq!(frame_file_name(1234, &coord), "render_1234_az360_el000_roll000.png");
    }

    #[test]
    fn test_cube_plan() {
        let config = PathConfigParams::new()
            .with_distance(2.0)
            .with_coverage(Coverage::Half)
            .validate()
            .unwrap();
        let plan = CapturePlan::build_with(&PathRegistry::with_builtin(), &config).unwrap();
        assert_eq!(plan.path_kind(), PathKind::Cube);
        assert_eq!(plan.len(), 5);

        let names: Vec<&str> = plan.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "render_000_az000_el000_roll000.png",
                "render_001_az090_el000_roll000.png",
                "render_002_az180_el000_roll000.png",
                "render_003_az270_el000_roll000.png",
                "render_004_az000_el090_roll000.png",
            ]
        );
        for frame in &plan {
            assert!((frame.pose.position.length() - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_plan_propagates_generator_errors() {
        let config = PathConfigParams::new()
            .with_path_kind(PathKind::SpiralPhi)
            .with_density(1)
            .validate()
            .unwrap();
        let err = CapturePlan::build_with(&PathRegistry::with_builtin(), &config).unwrap_err();
        assert!(matches!(err, ViewsweepError::InvalidConfig { .. }));
    }

    #[test]
    fn test_plan_against_empty_registry() {
        let config = PathConfigParams::new().validate().unwrap();
        let err = CapturePlan::build_with(&PathRegistry::new(), &config).unwrap_err();
        assert!(matches!(err, ViewsweepError::UnknownPathKind { .. }));
    }
}
