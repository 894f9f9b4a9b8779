//! Error types for viewsweep.

use thiserror::Error;

/// The main error type for viewsweep operations.
#[derive(Error, Debug)]
pub enum ViewsweepError {
    /// A path configuration violated one of its numeric constraints.
    #[error("invalid configuration: {field} {constraint}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description of the violated constraint.
        constraint: String,
    },

    /// No generator is registered under the requested path kind.
    #[error(
        "unknown camera path kind '{requested}'; available paths: {}",
        .available.join(", ")
    )]
    UnknownPathKind {
        /// The name that was looked up.
        requested: String,
        /// Every name registered at the time of the lookup.
        available: Vec<String>,
    },

    /// The process-wide registry was installed or read before this call.
    #[error("camera path registry already initialized")]
    RegistryAlreadyInitialized,

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ViewsweepError {
    /// Shorthand for building a [`ViewsweepError::InvalidConfig`].
    pub fn invalid_config(field: &'static str, constraint: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            constraint: constraint.into(),
        }
    }
}

/// A specialized Result type for viewsweep operations.
pub type Result<T> = std::result::Result<T, ViewsweepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message_names_field() {
        let err = ViewsweepError::invalid_config("distance", "must be positive (got -1)");
        assert_eq!(
            err.to_string(),
            "invalid configuration: distance must be positive (got -1)"
        );
    }

    #[test]
    fn test_unknown_path_kind_lists_available() {
        let err = ViewsweepError::UnknownPathKind {
            requested: "zigzag".to_string(),
            available: vec!["cube".to_string(), "orbit".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("zigzag"));
        assert!(msg.contains("cube, orbit"));
    }
}
