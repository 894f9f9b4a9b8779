//! Initialization for viewsweep.
//!
//! Neither function is required before planning captures: the built-in
//! registry is created on first use. Call [`init()`] to get log output, or
//! [`init_with_registry()`] to add generators beyond the built-in six.

use crate::{PathRegistry, Result};

/// Installs the logger and the built-in generator registry.
///
/// Logging goes through `env_logger`, so verbosity is controlled by
/// `RUST_LOG`. Calling this more than once is harmless.
///
/// # Example
///
/// ```no_run
/// use viewsweep::*;
///
/// fn main() -> Result<()> {
///     init();
///     let config = PathConfigParams::new()
///         .with_path_kind(PathKind::Orbit)
///         .with_density(24)
///         .validate()?;
///     for frame in &CapturePlan::build(&config)? {
///         println!("{}", frame.file_name);
///     }
///     Ok(())
/// }
/// ```
pub fn init() {
    let _ = env_logger::try_init();
    let registry = viewsweep_core::path_registry();
    log::info!(
        "viewsweep initialized with camera paths: {}",
        registry.available().join(", ")
    );
}

/// Installs the logger and `registry` as the process-wide registry.
///
/// # Errors
///
/// Returns an error if the process-wide registry was already initialized,
/// either explicitly or by an earlier lookup.
pub fn init_with_registry(registry: PathRegistry) -> Result<()> {
    let _ = env_logger::try_init();
    let names = registry.available().join(", ");
    viewsweep_core::init_registry(registry)?;
    log::info!("viewsweep initialized with camera paths: {names}");
    Ok(())
}

/// Returns whether the process-wide registry has been built.
#[must_use]
pub fn is_initialized() -> bool {
    viewsweep_core::state::is_initialized()
}
