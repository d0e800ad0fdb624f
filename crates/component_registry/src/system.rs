//! The top-level component registry.
//!
//! A [`ComponentSystem`] maps each entity to its own [`EntityState`]. States
//! are created lazily on the first assignment with valid arguments, and an
//! entity that has been assigned to stays known from then on unless
//! [`RegistryConfig::prune_empty_states`] is enabled.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::component::{Component, ComponentTypeId};
use crate::config::RegistryConfig;
use crate::entity::Entity;
use crate::entity_state::EntityState;
use crate::error::RegistryError;

/// Registry of entity states, keyed by entity identity.
///
/// Components are stored without a `Send` bound, so a registry stays on the
/// thread that created it.
#[derive(Debug, Default)]
pub struct ComponentSystem {
    config: RegistryConfig,
    states: HashMap<Entity, EntityState>,
}

impl ComponentSystem {
    /// Create an empty registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with the given configuration.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            states: HashMap::with_capacity(config.initial_capacity),
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Attach `component` to `entity`.
    ///
    /// Returns `false` if `entity` is null, if `component` is an `Option`
    /// (so `assign(e, None::<T>)` is rejected like a null component), or if
    /// `entity` already holds a component of type `C`. See
    /// [`ComponentSystem::try_assign`] for the reason.
    pub fn assign<C: Component>(
        &mut self,
        entity: impl Into<Option<Entity>>,
        component: C,
    ) -> bool {
        self.try_assign(entity, Some(component)).is_ok()
    }

    /// Like [`ComponentSystem::assign`], but `component` may be absent.
    pub fn assign_optional<C: Component>(
        &mut self,
        entity: impl Into<Option<Entity>>,
        component: Option<C>,
    ) -> bool {
        self.try_assign(entity, component).is_ok()
    }

    /// Attach `component` to `entity`, reporting why on failure.
    ///
    /// With both arguments present the entity becomes known to the registry
    /// even when the component is then rejected as a duplicate.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NullEntity`] if `entity` is `None` or [`Entity::NULL`].
    /// - [`RegistryError::NullComponent`] if `component` is `None`.
    /// - [`RegistryError::OptionComponent`] if `C` is an `Option<_>`.
    /// - [`RegistryError::DuplicateComponent`] if a `C` is already attached.
    pub fn try_assign<C: Component>(
        &mut self,
        entity: impl Into<Option<Entity>>,
        component: Option<C>,
    ) -> Result<(), RegistryError> {
        let result = self.assign_inner(entity.into(), component);
        if let Err(err) = &result {
            trace!(%err, "assign rejected");
        }
        result
    }

    fn assign_inner<C: Component>(
        &mut self,
        entity: Option<Entity>,
        component: Option<C>,
    ) -> Result<(), RegistryError> {
        let entity = Entity::resolve(entity).ok_or(RegistryError::NullEntity)?;
        let component = component.ok_or(RegistryError::NullComponent)?;
        let type_id = ComponentTypeId::of::<C>();
        if type_id.is_option() {
            return Err(RegistryError::OptionComponent(type_id.name()));
        }

        let state = self.states.entry(entity).or_insert_with(|| {
            debug!(%entity, "registered entity state");
            EntityState::new()
        });

        if !state.add(component) {
            return Err(RegistryError::DuplicateComponent {
                entity,
                component: type_id.name(),
            });
        }

        debug!(%entity, component = type_id.name(), "component assigned");
        Ok(())
    }

    /// Detach the component of `component`'s type from `entity`.
    ///
    /// Only the type of `component` matters; its value is ignored.
    pub fn unassign<C: Component>(
        &mut self,
        entity: impl Into<Option<Entity>>,
        component: &C,
    ) -> bool {
        self.try_unassign(entity, component).is_ok()
    }

    /// Detach the component of type `T` from `entity`.
    pub fn unassign_type<T: Component>(&mut self, entity: impl Into<Option<Entity>>) -> bool {
        self.unassign_by_id(entity.into(), ComponentTypeId::of::<T>()).is_ok()
    }

    /// Detach the component of `component`'s type from `entity`, reporting
    /// why on failure.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NullEntity`] if `entity` is `None` or [`Entity::NULL`].
    /// - [`RegistryError::UnknownEntity`] if `entity` was never assigned to.
    /// - [`RegistryError::MissingComponent`] if no component of that type is
    ///   attached.
    pub fn try_unassign<C: Component>(
        &mut self,
        entity: impl Into<Option<Entity>>,
        component: &C,
    ) -> Result<(), RegistryError> {
        self.unassign_by_id(entity.into(), ComponentTypeId::of_val(component))
    }

    fn unassign_by_id(
        &mut self,
        entity: Option<Entity>,
        type_id: ComponentTypeId,
    ) -> Result<(), RegistryError> {
        let result = self.unassign_inner(entity, type_id);
        if let Err(err) = &result {
            trace!(%err, "unassign rejected");
        }
        result
    }

    fn unassign_inner(
        &mut self,
        entity: Option<Entity>,
        type_id: ComponentTypeId,
    ) -> Result<(), RegistryError> {
        let entity = Entity::resolve(entity).ok_or(RegistryError::NullEntity)?;
        let state = self
            .states
            .get_mut(&entity)
            .ok_or(RegistryError::UnknownEntity(entity))?;

        if !state.remove_by_id(type_id) {
            return Err(RegistryError::MissingComponent {
                entity,
                component: type_id.name(),
            });
        }
        debug!(%entity, component = type_id.name(), "component unassigned");

        if self.config.prune_empty_states && state.is_empty() {
            self.states.remove(&entity);
            debug!(%entity, "pruned empty entity state");
        }
        Ok(())
    }

    /// Returns the state registered for `entity`, or `None` if it was never
    /// assigned to.
    #[must_use]
    pub fn get(&self, entity: impl Into<Option<Entity>>) -> Option<&EntityState> {
        Entity::resolve(entity).and_then(|e| self.states.get(&e))
    }

    /// Returns a mutable reference to the state registered for `entity`.
    #[must_use]
    pub fn get_mut(&mut self, entity: impl Into<Option<Entity>>) -> Option<&mut EntityState> {
        Entity::resolve(entity).and_then(|e| self.states.get_mut(&e))
    }

    /// Returns `true` if `entity` has a registered state.
    #[must_use]
    pub fn contains(&self, entity: impl Into<Option<Entity>>) -> bool {
        self.get(entity).is_some()
    }

    /// Returns the number of entities with a registered state.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.states.len()
    }
}
