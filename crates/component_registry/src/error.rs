//! Registry error types.

use crate::entity::Entity;

/// Why a registry operation was rejected.
///
/// The boolean API on [`ComponentSystem`](crate::ComponentSystem) collapses
/// these into `false`; the `try_*` variants return them directly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The entity was `None` or [`Entity::NULL`].
    #[error("entity is null")]
    NullEntity,

    /// The component was `None`.
    #[error("component is null")]
    NullComponent,

    /// The component's type is itself an `Option`.
    #[error("component type {0} is an Option; pass the inner value instead")]
    OptionComponent(&'static str),

    /// The entity already holds a component of this type.
    #[error("{entity} already has a component of type {component}")]
    DuplicateComponent {
        entity: Entity,
        component: &'static str,
    },

    /// No state has ever been registered for the entity.
    #[error("{0} is not known to the registry")]
    UnknownEntity(Entity),

    /// The entity holds no component of this type.
    #[error("{entity} has no component of type {component}")]
    MissingComponent {
        entity: Entity,
        component: &'static str,
    },

    /// The requested service was never added to the scope.
    #[error("service not registered in scope: {0}")]
    NotRegistered(&'static str),
}
