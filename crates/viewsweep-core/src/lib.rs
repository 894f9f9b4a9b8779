//! Core abstractions for viewsweep.
//!
//! This crate provides the camera path generation subsystem:
//! - [`SphericalCoordinate`] viewpoints on a sphere around the model
//! - [`PathConfigParams`] and its validated form [`PathConfig`]
//! - The [`PathGenerator`] trait and six built-in generators in [`paths`]
//! - [`PathRegistry`] and the process-wide registry in [`state`]

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod coordinate;
pub mod error;
pub mod generator;
pub mod paths;
pub mod registry;
pub mod state;

pub use config::{Coverage, PathConfig, PathConfigParams, PathKind};
pub use coordinate::{wrap_degrees, SphericalCoordinate};
pub use error::{Result, ViewsweepError};
pub use generator::{GeneratorFactory, PathGenerator};
pub use registry::PathRegistry;
pub use state::{init_registry, path_registry};
