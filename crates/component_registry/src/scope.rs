//! Service scopes — construction and ownership of registries.
//!
//! A [`ServiceScope`] owns at most one [`ComponentSystem`]. Every resolution
//! from the same scope hands back that same instance, so callers that resolve
//! the registry separately still share entity state. Separate scopes never
//! share state.

use tracing::debug;
use uuid::Uuid;

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::system::ComponentSystem;

/// Declares which services a [`ServiceScope`] provides.
#[derive(Debug, Default)]
pub struct ScopeBuilder {
    component_system: Option<RegistryConfig>,
}

impl ScopeBuilder {
    /// Create a builder with no services registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a [`ComponentSystem`] with the default configuration.
    #[must_use]
    pub fn add_component_system(self) -> Self {
        self.add_component_system_with(RegistryConfig::default())
    }

    /// Register a [`ComponentSystem`] built from `config`. A later call
    /// replaces the earlier configuration.
    #[must_use]
    pub fn add_component_system_with(mut self, config: RegistryConfig) -> Self {
        self.component_system = Some(config);
        self
    }

    /// Build the scope, constructing one empty instance of each registered
    /// service.
    #[must_use]
    pub fn build(self) -> ServiceScope {
        let id = Uuid::new_v4();
        let component_system = self.component_system.map(ComponentSystem::with_config);
        debug!(
            scope = %id,
            component_system = component_system.is_some(),
            "service scope built"
        );
        ServiceScope {
            id,
            component_system,
        }
    }
}

/// Owns the services registered through a [`ScopeBuilder`].
#[derive(Debug)]
pub struct ServiceScope {
    id: Uuid,
    component_system: Option<ComponentSystem>,
}

impl ServiceScope {
    /// Returns the unique identifier of this scope.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the scope's registry, or `None` if none was registered.
    #[must_use]
    pub fn component_system(&mut self) -> Option<&mut ComponentSystem> {
        self.component_system.as_mut()
    }

    /// Returns the scope's registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotRegistered`] if the scope was built without
    /// a [`ComponentSystem`].
    pub fn require_component_system(&mut self) -> Result<&mut ComponentSystem, RegistryError> {
        self.component_system
            .as_mut()
            .ok_or(RegistryError::NotRegistered("ComponentSystem"))
    }

    /// Consume the scope and return its registry.
    #[must_use]
    pub fn into_component_system(self) -> Option<ComponentSystem> {
        self.component_system
    }
}
