//! Process-wide generator registry.
//!
//! The registry is built once and is read-only afterwards, so lookups need no
//! locking.

use std::sync::OnceLock;

use crate::error::{Result, ViewsweepError};
use crate::registry::PathRegistry;

/// Global registry singleton.
static REGISTRY: OnceLock<PathRegistry> = OnceLock::new();

/// Installs `registry` as the process-wide registry.
///
/// Call this at startup to register generators beyond the built-in set.
/// Fails if the registry was already installed or already read.
pub fn init_registry(registry: PathRegistry) -> Result<()> {
    REGISTRY
        .set(registry)
        .map_err(|_| ViewsweepError::RegistryAlreadyInitialized)?;
    log::debug!("camera path registry initialized");
    Ok(())
}

/// Returns the process-wide registry, building the built-in one on first use.
pub fn path_registry() -> &'static PathRegistry {
    REGISTRY.get_or_init(PathRegistry::with_builtin)
}

/// Returns whether the process-wide registry has been built.
pub fn is_initialized() -> bool {
    REGISTRY.get().is_some()
}
