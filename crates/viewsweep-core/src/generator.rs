//! Path generator trait.
//!
//! A [`PathGenerator`] turns a validated [`PathConfig`] into an ordered list
//! of [`SphericalCoordinate`] viewpoints.

use crate::config::PathConfig;
use crate::coordinate::SphericalCoordinate;
use crate::error::Result;

/// A camera path algorithm.
///
/// Implementations are stateless: every call to
/// [`generate_positions`](PathGenerator::generate_positions) computes a fresh
/// sequence from `config` alone, so a single instance may be shared across
/// threads.
pub trait PathGenerator: Send + Sync {
    /// Returns the unique registry key of this generator (e.g. `"cube"`).
    fn name(&self) -> &'static str;

    /// Generates the camera positions for `config`, in capture order.
    ///
    /// Returns [`ViewsweepError::InvalidConfig`](crate::ViewsweepError::InvalidConfig)
    /// when `config` is valid in general but degenerate for this particular
    /// algorithm.
    fn generate_positions(&self, config: &PathConfig) -> Result<Vec<SphericalCoordinate>>;
}

/// Constructs a fresh generator instance.
pub type GeneratorFactory = fn() -> Box<dyn PathGenerator>;
