//! Camera path configuration.
//!
//! A [`PathConfigParams`] is the raw, user-editable parameter bundle. It only
//! becomes a [`PathConfig`] through [`PathConfigParams::validate`], so every
//! `PathConfig` in circulation satisfies all numeric constraints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewsweepError};

/// Which part of the sphere a path should cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Coverage {
    /// Upper hemisphere only.
    Half,
    /// The whole sphere.
    #[default]
    Full,
}

impl Coverage {
    /// Returns the lowercase identifier used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Coverage::Half => "half",
            Coverage::Full => "full",
        }
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Coverage {
    type Err = ViewsweepError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "half" => Ok(Coverage::Half),
            "full" => Ok(Coverage::Full),
            other => Err(ViewsweepError::invalid_config(
                "coverage",
                format!("must be 'half' or 'full' (got '{other}')"),
            )),
        }
    }
}

/// The built-in camera path kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PathKind {
    /// Six axis-aligned views.
    #[default]
    #[serde(rename = "cube")]
    Cube,
    /// Evenly spaced ring on the equator.
    #[serde(rename = "orbit")]
    Orbit,
    /// Golden-ratio (Fibonacci sphere) sampling.
    #[serde(rename = "spiral_phi")]
    SpiralPhi,
    /// Rotations just off the poles.
    #[serde(rename = "pole_rotation")]
    PoleRotation,
    /// Rings with adaptive azimuth stepping.
    #[serde(rename = "spiral_lin")]
    SpiralLinear,
    /// Zenith rotation followed by a helical descent.
    #[serde(rename = "spiral_phased")]
    SpiralPhased,
}

impl PathKind {
    /// Every built-in path kind, in registration order.
    pub const ALL: [PathKind; 6] = [
        PathKind::Cube,
        PathKind::Orbit,
        PathKind::SpiralPhi,
        PathKind::PoleRotation,
        PathKind::SpiralLinear,
        PathKind::SpiralPhased,
    ];

    /// Returns the registry key for this path kind.
    pub fn name(self) -> &'static str {
        match self {
            PathKind::Cube => "cube",
            PathKind::Orbit => "orbit",
            PathKind::SpiralPhi => "spiral_phi",
            PathKind::PoleRotation => "pole_rotation",
            PathKind::SpiralLinear => "spiral_lin",
            PathKind::SpiralPhased => "spiral_phased",
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PathKind {
    type Err = ViewsweepError;

    fn from_str(s: &str) -> Result<Self> {
        PathKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ViewsweepError::UnknownPathKind {
                requested: s.to_string(),
                available: PathKind::ALL.iter().map(|k| k.name().to_string()).collect(),
            })
    }
}

/// Unvalidated path parameters.
///
/// Missing fields fall back to their defaults when deserialized; unknown
/// fields are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathConfigParams {
    /// Camera distance from the origin.
    pub distance: f64,
    /// Lowest allowed elevation in degrees.
    pub min_elevation: f64,
    /// Highest allowed elevation in degrees.
    pub max_elevation: f64,
    /// Camera roll in degrees.
    pub roll: f64,
    /// Which generator to run.
    pub path_kind: PathKind,
    /// Number of views for orbit and golden-ratio paths.
    pub density: u32,
    /// Base angular step in degrees for the linear and phased spirals.
    pub angular_step: f64,
    /// Hemisphere or full sphere.
    pub coverage: Coverage,
}

impl Default for PathConfigParams {
    fn default() -> Self {
        Self {
            distance: 1.0,
            min_elevation: -90.0,
            max_elevation: 90.0,
            roll: 0.0,
            path_kind: PathKind::Cube,
            density: 35,
            angular_step: 45.0,
            coverage: Coverage::Full,
        }
    }
}

impl PathConfigParams {
    /// Creates parameters with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the path kind.
    pub fn with_path_kind(mut self, path_kind: PathKind) -> Self {
        self.path_kind = path_kind;
        self
    }

    /// Sets the camera distance.
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Sets the elevation bounds.
    pub fn with_elevation_range(mut self, min_elevation: f64, max_elevation: f64) -> Self {
        self.min_elevation = min_elevation;
        self.max_elevation = max_elevation;
        self
    }

    /// Sets the camera roll.
    pub fn with_roll(mut self, roll: f64) -> Self {
        self.roll = roll;
        self
    }

    /// Sets the view density.
    pub fn with_density(mut self, density: u32) -> Self {
        self.density = density;
        self
    }

    /// Sets the base angular step.
    pub fn with_angular_step(mut self, angular_step: f64) -> Self {
        self.angular_step = angular_step;
        self
    }

    /// Sets the sphere coverage.
    pub fn with_coverage(mut self, coverage: Coverage) -> Self {
        self.coverage = coverage;
        self
    }

    /// Checks every constraint and produces a [`PathConfig`].
    ///
    /// The first violated constraint is reported; nothing is partially
    /// constructed.
    pub fn validate(self) -> Result<PathConfig> {
        if !self.distance.is_finite() || self.distance <= 0.0 {
            return Err(ViewsweepError::invalid_config(
                "distance",
                format!("must be positive (got {})", self.distance),
            ));
        }
        check_elevation("min_elevation", self.min_elevation)?;
        check_elevation("max_elevation", self.max_elevation)?;
        if self.min_elevation > self.max_elevation {
            return Err(ViewsweepError::invalid_config(
                "min_elevation",
                format!(
                    "must not exceed max_elevation (got {} > {})",
                    self.min_elevation, self.max_elevation
                ),
            ));
        }
        if !(-180.0..=180.0).contains(&self.roll) {
            return Err(ViewsweepError::invalid_config(
                "roll",
                format!("must be between -180 and 180 degrees (got {})", self.roll),
            ));
        }
        if self.density == 0 {
            return Err(ViewsweepError::invalid_config(
                "density",
                "must be positive (got 0)",
            ));
        }
        if !self.angular_step.is_finite() || self.angular_step <= 0.0 {
            return Err(ViewsweepError::invalid_config(
                "angular_step",
                format!("must be positive (got {})", self.angular_step),
            ));
        }

        Ok(PathConfig { params: self })
    }
}

fn check_elevation(field: &'static str, value: f64) -> Result<()> {
    if (-90.0..=90.0).contains(&value) {
        Ok(())
    } else {
        Err(ViewsweepError::invalid_config(
            field,
            format!("must be between -90 and 90 degrees (got {value})"),
        ))
    }
}

fn check_json_density(density: &serde_json::Value) -> Result<()> {
    match density.as_u64().map(u32::try_from) {
        Some(Ok(d)) if d > 0 => Ok(()),
        _ => Err(ViewsweepError::invalid_config(
            "density",
            format!("must be a positive integer (got {density})"),
        )),
    }
}

/// A validated camera path configuration.
///
/// Only obtainable through [`PathConfigParams::validate`] or
/// [`PathConfig::from_json`].
#[derive(Debug, Clone, PartialEq)]
pub struct PathConfig {
    params: PathConfigParams,
}

impl PathConfig {
    /// Parses a JSON document and validates it.
    ///
    /// An unrecognised `path_kind` string is reported as
    /// [`ViewsweepError::UnknownPathKind`], and a `density` that is not a
    /// positive integer as [`ViewsweepError::InvalidConfig`]. Unknown fields
    /// are a [`ViewsweepError::JsonError`].
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(kind) = value.get("path_kind").and_then(serde_json::Value::as_str) {
            kind.parse::<PathKind>()?;
        }
        if let Some(density) = value.get("density") {
            check_json_density(density)?;
        }
        let params: PathConfigParams = serde_json::from_value(value)?;
        params.validate()
    }

    /// Camera distance from the origin.
    pub fn distance(&self) -> f64 {
        self.params.distance
    }

    /// Lowest allowed elevation in degrees.
    pub fn min_elevation(&self) -> f64 {
        self.params.min_elevation
    }

    /// Highest allowed elevation in degrees.
    pub fn max_elevation(&self) -> f64 {
        self.params.max_elevation
    }

    /// Camera roll in degrees.
    pub fn roll(&self) -> f64 {
        self.params.roll
    }

    /// The selected path kind.
    pub fn path_kind(&self) -> PathKind {
        self.params.path_kind
    }

    /// Number of views for orbit and golden-ratio paths.
    pub fn density(&self) -> u32 {
        self.params.density
    }

    /// Base angular step in degrees.
    pub fn angular_step(&self) -> f64 {
        self.params.angular_step
    }

    /// Sphere coverage mode.
    pub fn coverage(&self) -> Coverage {
        self.params.coverage
    }

    /// Returns whether the elevation bounds differ from the full `[-90, 90]`.
    pub fn has_elevation_bounds(&self) -> bool {
        self.params.min_elevation > -90.0 || self.params.max_elevation < 90.0
    }

    /// Returns the underlying parameters.
    pub fn params(&self) -> &PathConfigParams {
        &self.params
    }

    /// Consumes the configuration, returning its parameters for editing.
    pub fn into_params(self) -> PathConfigParams {
        self.params
    }
}

impl TryFrom<PathConfigParams> for PathConfig {
    type Error = ViewsweepError;

    fn try_from(params: PathConfigParams) -> Result<Self> {
        params.validate()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const FIELDS: [&str; 6] = [
        "distance",
        "min_elevation",
        "max_elevation",
        "roll",
        "density",
        "angular_step",
    ];

    fn coverage() -> impl Strategy<Value = Coverage> {
        prop_oneof![Just(Coverage::Half), Just(Coverage::Full)]
    }

    prop_compose! {
        fn loose_params()(
            distance in -5.0f64..5.0,
            min_elevation in -120.0f64..120.0,
            max_elevation in -120.0f64..120.0,
            roll in -360.0f64..360.0,
            path_kind in prop::sample::select(PathKind::ALL.to_vec()),
            density in 0u32..50,
            angular_step in -10.0f64..100.0,
            coverage in coverage(),
        ) -> PathConfigParams {
            PathConfigParams {
                distance,
                min_elevation,
                max_elevation,
                roll,
                path_kind,
                density,
                angular_step,
                coverage,
            }
        }
    }

    proptest! {
        #[test]
        fn validate_accepts_or_names_a_field(params in loose_params()) {
            match params.clone().validate() {
                Ok(config) => {
                    prop_assert_eq!(config.params(), &params);
                    prop_assert!(config.distance() > 0.0);
                    prop_assert!(config.min_elevation() <= config.max_elevation());
                    prop_assert!((-90.0..=90.0).contains(&config.min_elevation()));
                    prop_assert!((-90.0..=90.0).contains(&config.max_elevation()));
                    prop_assert!((-180.0..=180.0).contains(&config.roll()));
                    prop_assert!(config.density() > 0);
                    prop_assert!(config.angular_step() > 0.0);
                }
                Err(ViewsweepError::InvalidConfig { field, .. }) => {
                    prop_assert!(FIELDS.contains(&field), "unexpected field {}", field);
                }
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
        }

        #[test]
        fn json_density_is_invalid_config(density in -1000i64..1000) {
            let doc = format!(r#"{{"path_kind": "orbit", "density": {density}}}"#);
            match PathConfig::from_json(&doc) {
                Ok(config) => prop_assert_eq!(i64::from(config.density()), density),
                Err(ViewsweepError::InvalidConfig { field, .. }) => {
                    prop_assert!(density <= 0);
                    prop_assert_eq!(field, "density");
                }
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
        }
    }
}
