//! viewsweep: camera path planning for multi-view capture of 3D models.
//!
//! A virtual camera is swept over a sphere around the model. Each built-in
//! path kind trades coverage against smoothness differently; the result is an
//! ordered list of viewpoints, each with a camera pose and an output file name
//! ready for a renderer.
//!
//! # Quick Start
//!
//! ```no_run
//! use viewsweep::*;
//!
//! fn main() -> Result<()> {
//!     init();
//!
//!     let config = PathConfigParams::new()
//!         .with_path_kind(PathKind::SpiralPhi)
//!         .with_density(50)
//!         .with_distance(3.0)
//!         .validate()?;
//!
//!     let plan = CapturePlan::build(&config)?;
//!     for frame in &plan {
//!         let _view = frame.pose.view_matrix();
//!         // render with `_view`, write the image to `frame.file_name`
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Path kinds
//!
//! - `cube` - six axis-aligned views (five under half coverage)
//! - `orbit` - `density` views around the equator
//! - `spiral_phi` - golden-ratio sampling over the sphere
//! - `pole_rotation` - a turn just off each pole
//! - `spiral_lin` - rings with adaptive azimuth stepping
//! - `spiral_phased` - a zenith turn followed by a stepped descent

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod capture;
mod init;
mod pose;

pub use capture::{frame_file_name, CaptureFrame, CapturePlan};
pub use init::{init, init_with_registry, is_initialized};
pub use pose::{spherical_to_cartesian, CameraPose};

// Re-export core types
pub use viewsweep_core::{
    config::{Coverage, PathConfig, PathConfigParams, PathKind},
    coordinate::{wrap_degrees, SphericalCoordinate},
    error::{Result, ViewsweepError},
    generator::{GeneratorFactory, PathGenerator},
    path_registry,
    paths,
    registry::PathRegistry,
};

// Re-export glam types for convenience
pub use glam::{DMat4, DQuat, DVec3};
