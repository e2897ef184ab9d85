//! Protection registry.
//!
//! The registry is assembled once with [`ProtectionRegistryBuilder`], which
//! checks every entry as it is registered, and then frozen into an immutable
//! [`ProtectionRegistry`].

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::api::Protection;
use crate::basic_flooding::{self, BasicFlooding};
use crate::first_message_is_image::{self, FirstMessageIsImage};

/// Registry errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A protection was registered twice under the same name.
    #[error("Protection '{0}' is already registered")]
    Duplicate(String),

    /// A factory produced a protection whose name differs from its key.
    #[error("Protection registered as '{key}' reports its name as '{actual}'")]
    NameMismatch {
        /// Registry key.
        key: String,
        /// Name reported by the constructed protection.
        actual: String,
    },

    /// No protection with this name.
    #[error("Protection not found: {0}")]
    NotFound(String),
}

/// Factory producing a fresh protection instance.
pub type ProtectionFactory = Box<dyn Fn() -> Box<dyn Protection> + Send + Sync>;

/// A registered protection.
pub struct ProtectionDescriptor {
    name: String,
    description: String,
    factory: ProtectionFactory,
}

impl ProtectionDescriptor {
    /// Protection name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Factory for new instances.
    #[must_use]
    pub fn factory(&self) -> &ProtectionFactory {
        &self.factory
    }

    /// Construct a new, independent instance.
    #[must_use]
    pub fn instantiate(&self) -> Box<dyn Protection> {
        (self.factory)()
    }
}

impl fmt::Debug for ProtectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtectionDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Mutable registry used during initialization.
#[derive(Default)]
pub struct ProtectionRegistryBuilder {
    descriptors: Vec<ProtectionDescriptor>,
}

impl ProtectionRegistryBuilder {
    /// Create an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Register a protection.
    ///
    /// The factory is invoked once to check that the protection it builds
    /// reports `name` as its own name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Duplicate` if `name` is taken and
    /// `RegistryError::NameMismatch` if the constructed protection disagrees
    /// with `name`.
    pub fn register<F, P>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        factory: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn() -> P + Send + Sync + 'static,
        P: Protection + 'static,
    {
        let name = name.into();
        if self.descriptors.iter().any(|d| d.name == name) {
            return Err(RegistryError::Duplicate(name));
        }

        let sample = factory();
        if sample.name() != name {
            return Err(RegistryError::NameMismatch {
                key: name,
                actual: sample.name().to_string(),
            });
        }

        tracing::debug!(
            protection = %name,
            settings = sample.settings().len(),
            "Registering protection"
        );
        self.descriptors.push(ProtectionDescriptor {
            name,
            description: description.into(),
            factory: Box::new(move || Box::new(factory()) as Box<dyn Protection>),
        });
        Ok(())
    }

    /// Freeze the registry.
    #[must_use]
    pub fn build(self) -> ProtectionRegistry {
        tracing::info!(
            "Freezing protection registry with {} protections",
            self.descriptors.len()
        );
        let index = self
            .descriptors
            .iter()
            .enumerate()
            .map(|(i, d)| (d.name.clone(), i))
            .collect();
        ProtectionRegistry {
            descriptors: self.descriptors,
            index,
        }
    }

    /// Number of registered protections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// Immutable registry of available protections, in registration order.
#[derive(Debug)]
pub struct ProtectionRegistry {
    descriptors: Vec<ProtectionDescriptor>,
    index: HashMap<String, usize>,
}

impl ProtectionRegistry {
    /// Start building a registry.
    #[must_use]
    pub const fn builder() -> ProtectionRegistryBuilder {
        ProtectionRegistryBuilder::new()
    }

    /// Registry of the built-in protections.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in protection is misregistered.
    pub fn builtin() -> Result<Self, RegistryError> {
        let mut builder = Self::builder();
        builder.register(
            first_message_is_image::NAME,
            first_message_is_image::DESCRIPTION,
            FirstMessageIsImage::new,
        )?;
        builder.register(
            basic_flooding::NAME,
            basic_flooding::description(),
            BasicFlooding::new,
        )?;
        Ok(builder.build())
    }

    /// Get a protection by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ProtectionDescriptor> {
        self.index.get(name).map(|&i| &self.descriptors[i])
    }

    /// Iterate protections in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ProtectionDescriptor> {
        self.descriptors.iter()
    }

    /// List all protection names.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.descriptors.iter().map(|d| d.name.as_str()).collect()
    }

    /// Construct a protection by name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` for an unknown name.
    pub fn instantiate(&self, name: &str) -> Result<Box<dyn Protection>, RegistryError> {
        self.get(name)
            .map(ProtectionDescriptor::instantiate)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Number of registered protections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roomguard_core::settings::{Settings, StringListSetting};

    struct Misnamed {
        settings: Settings,
    }

    impl Protection for Misnamed {
        fn name(&self) -> &str {
            "SomethingElse"
        }

        fn settings(&self) -> &Settings {
            &self.settings
        }

        fn settings_mut(&mut self) -> &mut Settings {
            &mut self.settings
        }
    }

    struct Listed {
        settings: Settings,
    }

    impl Listed {
        fn new() -> Self {
            Self {
                settings: Settings::new().with("users", StringListSetting::new(["alice"])),
            }
        }
    }

    impl Protection for Listed {
        fn name(&self) -> &str {
            "Listed"
        }

        fn settings(&self) -> &Settings {
            &self.settings
        }

        fn settings_mut(&mut self) -> &mut Settings {
            &mut self.settings
        }
    }

    #[test]
    fn test_builtin_registry() {
        let registry = ProtectionRegistry::builtin().unwrap();
        assert_eq!(
            registry.names(),
            vec!["FirstMessageIsImageProtection", "BasicFloodingProtection"]
        );
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_registry_round_trip() {
        let registry = ProtectionRegistry::builtin().unwrap();
        for name in registry.names() {
            let descriptor = registry.get(name).unwrap();
            assert_eq!(descriptor.instantiate().name(), name);
            assert_eq!((descriptor.factory())().name(), name);
        }
    }

    #[test]
    fn test_descriptions() {
        let registry = ProtectionRegistry::builtin().unwrap();
        let image = registry.get("FirstMessageIsImageProtection").unwrap();
        assert!(image.description().contains("image or video"));

        let flooding = registry.get("BasicFloodingProtection").unwrap();
        assert!(flooding.description().contains("10 messages in 60s"));
    }

    #[test]
    fn test_name_mismatch_rejected() {
        let mut builder = ProtectionRegistry::builder();
        let result = builder.register("Expected", "desc", || Misnamed {
            settings: Settings::new(),
        });

        assert_eq!(
            result,
            Err(RegistryError::NameMismatch {
                key: "Expected".to_string(),
                actual: "SomethingElse".to_string(),
            })
        );
        assert!(builder.is_empty());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut builder = ProtectionRegistry::builder();
        builder.register("Listed", "first", Listed::new).unwrap();
        let result = builder.register("Listed", "second", Listed::new);

        assert_eq!(result, Err(RegistryError::Duplicate("Listed".to_string())));
        assert_eq!(builder.len(), 1);

        let registry = builder.build();
        assert_eq!(registry.get("Listed").unwrap().description(), "first");
    }

    #[test]
    fn test_lookup_missing() {
        let registry = ProtectionRegistry::builtin().unwrap();
        assert!(registry.get("NoSuchProtection").is_none());
        assert!(matches!(
            registry.instantiate("NoSuchProtection"),
            Err(RegistryError::NotFound(_))
        ));
    }

    #[test]
    fn test_instances_are_independent() {
        let mut builder = ProtectionRegistry::builder();
        builder.register("Listed", "list holder", Listed::new).unwrap();
        let registry = builder.build();

        let mut first = registry.instantiate("Listed").unwrap();
        let second = registry.instantiate("Listed").unwrap();

        first.settings_mut().add_from_str("users", "bob").unwrap();

        assert_eq!(
            first.settings().get("users").unwrap().as_list().unwrap(),
            ["alice", "bob"]
        );
        assert_eq!(
            second.settings().get("users").unwrap().as_list().unwrap(),
            ["alice"]
        );
    }

    #[test]
    fn test_enumeration_order() {
        let mut builder = ProtectionRegistry::builder();
        builder.register("Listed", "b", Listed::new).unwrap();
        builder
            .register(
                "FirstMessageIsImageProtection",
                "a",
                FirstMessageIsImage::new,
            )
            .unwrap();
        let registry = builder.build();

        let listed: Vec<_> = registry
            .iter()
            .map(|d| (d.name(), d.description()))
            .collect();
        assert_eq!(
            listed,
            vec![("Listed", "b"), ("FirstMessageIsImageProtection", "a")]
        );
    }
}
