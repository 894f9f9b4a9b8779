//! Path generator registry.

use crate::error::{Result, ViewsweepError};
use crate::generator::{GeneratorFactory, PathGenerator};
use crate::paths::{
    CubePath, OrbitPath, PoleRotationPath, SpiralLinearPath, SpiralPhasedPath, SpiralPhiPath,
};

/// A registered generator: its key and how to build it.
struct Entry {
    name: &'static str,
    factory: GeneratorFactory,
}

/// Registry mapping path kind names to generator factories.
///
/// Entries keep their registration order, which is the order reported by
/// [`PathRegistry::available`].
#[derive(Default)]
pub struct PathRegistry {
    entries: Vec<Entry>,
}

impl PathRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding all built-in generators.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(|| Box::new(CubePath));
        registry.register(|| Box::new(OrbitPath));
        registry.register(|| Box::new(SpiralPhiPath));
        registry.register(|| Box::new(PoleRotationPath));
        registry.register(|| Box::new(SpiralLinearPath));
        registry.register(|| Box::new(SpiralPhasedPath));
        registry
    }

    /// Registers a generator factory under the name its generator reports.
    ///
    /// Registering a name twice replaces the earlier factory in place.
    pub fn register(&mut self, factory: GeneratorFactory) {
        let name = factory().name();
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            log::warn!("replacing camera path generator '{name}'");
            entry.factory = factory;
        } else {
            self.entries.push(Entry { name, factory });
        }
    }

    /// Builds a fresh generator for `name`.
    ///
    /// Fails with [`ViewsweepError::UnknownPathKind`] listing every registered
    /// name when `name` is not registered.
    pub fn get(&self, name: &str) -> Result<Box<dyn PathGenerator>> {
        log::debug!("requesting generator for path kind '{name}'");
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| (e.factory)())
            .ok_or_else(|| ViewsweepError::UnknownPathKind {
                requested: name.to_string(),
                available: self.available().iter().map(|n| (*n).to_string()).collect(),
            })
    }

    /// Checks if a generator with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Returns all registered names in registration order.
    pub fn available(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    /// Returns the number of registered generators.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PathConfig, PathKind};
    use crate::coordinate::SphericalCoordinate;

    struct Fixed;

    impl PathGenerator for Fixed {
        fn name(&self) -> &'static str {
            "cube"
        }

        fn generate_positions(&self, config: &PathConfig) -> Result<Vec<SphericalCoordinate>> {
            Ok(vec![SphericalCoordinate::new(config.distance(), 1.0, 2.0, 3.0)])
        }
    }

    #[test]
    fn test_builtin_names_in_order() {
        let registry = PathRegistry::with_builtin();
        assert_eq!(
            registry.available(),
            vec![
                "cube",
                "orbit",
                "spiral_phi",
                "pole_rotation",
                "spiral_lin",
                "spiral_phased"
            ]
        );
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_builtin_matches_path_kinds() {
        let registry = PathRegistry::with_builtin();
        for kind in PathKind::ALL {
            let generator = registry.get(kind.name()).unwrap();
            assert_eq!(generator.name(), kind.name());
        }
    }

    #[test]
    fn test_unknown_kind_lists_available() {
        let registry = PathRegistry::with_builtin();
        let err = registry.get("unknown_kind").err().unwrap();
        let msg = err.to_string();
        for name in registry.available() {
            assert!(msg.contains(name), "'{msg}' is missing '{name}'");
        }
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let registry = PathRegistry::with_builtin();
        assert!(registry.get("Cube").is_err());
        assert!(registry.get("cube ").is_err());
        assert!(registry.contains("cube"));
    }

    #[test]
    fn test_register_overwrites_in_place() {
        let mut registry = PathRegistry::with_builtin();
        registry.register(|| Box::new(Fixed));
        assert_eq!(registry.len(), 6);
        assert_eq!(registry.available()[0], "cube");

        let config = crate::config::PathConfigParams::new().validate().unwrap();
        let coords = registry
            .get("cube")
            .unwrap()
            .generate_positions(&config)
            .unwrap();
        assert_eq!(coords.len(), 1);
    }

    #[test]
    fn test_empty_registry() {
        let registry = PathRegistry::new();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.get("cube"),
            Err(ViewsweepError::UnknownPathKind { .. })
        ));
    }
}
