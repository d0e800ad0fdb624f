//! Core [`Component`] trait and component type identity.
//!
//! Any `'static` value can be a component. The registry indexes components
//! only by their concrete type, so an entity holds at most one instance of a
//! given type.

use std::any::{Any, TypeId};
use std::hash::{Hash, Hasher};

/// Identifies a concrete component type.
///
/// Equality and hashing use the [`TypeId`] alone; the type name is kept for
/// log output and error messages.
#[derive(Debug, Clone, Copy)]
pub struct ComponentTypeId {
    id: TypeId,
    name: &'static str,
}

impl ComponentTypeId {
    /// Returns the [`ComponentTypeId`] for the type `T`.
    #[must_use]
    pub fn of<T: Component>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Returns the [`ComponentTypeId`] of the concrete type behind `value`.
    #[must_use]
    pub fn of_val<T: Component>(_value: &T) -> Self {
        Self::of::<T>()
    }

    /// The fully qualified Rust type name, e.g. `"alloc::string::String"`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if this is an `Option<_>` type.
    ///
    /// An `Option` stored as a component would make `None` a live value, so
    /// the registry refuses such types.
    #[must_use]
    pub fn is_option(&self) -> bool {
        self.name.starts_with("core::option::Option<")
    }
}

impl PartialEq for ComponentTypeId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ComponentTypeId {}

impl Hash for ComponentTypeId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for ComponentTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Marker trait for data that can be attached to an entity.
///
/// Blanket-implemented for every `'static` type, so callers never implement
/// it by hand.
///
/// # Examples
///
/// ```rust
/// use component_registry::{Component, ComponentTypeId};
///
/// struct Health {
///     current: f32,
///     max: f32,
/// }
///
/// assert_eq!(Health::component_type_id(), ComponentTypeId::of::<Health>());
/// assert_ne!(Health::component_type_id(), String::component_type_id());
/// ```
pub trait Component: Any {
    /// Returns the [`ComponentTypeId`] for this component type.
    fn component_type_id() -> ComponentTypeId
    where
        Self: Sized,
    {
        ComponentTypeId::of::<Self>()
    }
}

impl<T: Any> Component for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Health {
        current: f32,
        max: f32,
    }

    #[test]
    fn test_component_type_id_is_stable() {
        assert_eq!(Health::component_type_id(), Health::component_type_id());
    }

    #[test]
    fn test_component_type_id_differs_between_types() {
        struct Velocity {
            _x: f32,
        }

        assert_ne!(Health::component_type_id(), Velocity::component_type_id());
        assert_ne!(ComponentTypeId::of::<u32>(), ComponentTypeId::of::<u64>());
    }

    #[test]
    fn test_is_option() {
        struct OptionLike;

        assert!(ComponentTypeId::of::<Option<Health>>().is_option());
        assert!(ComponentTypeId::of::<Option<u8>>().is_option());
        assert!(!ComponentTypeId::of::<Health>().is_option());
        assert!(!ComponentTypeId::of::<OptionLike>().is_option());
    }

    #[test]
    fn test_of_val_ignores_value() {
        let a = Health {
            current: 1.0,
            max: 10.0,
        };
        let b = Health {
            current: 5.0,
            max: 5.0,
        };
        assert_eq!(ComponentTypeId::of_val(&a), ComponentTypeId::of_val(&b));
        assert_eq!(ComponentTypeId::of_val(&a), ComponentTypeId::of::<Health>());
    }

    #[test]
    fn test_name_is_type_name() {
        let id = ComponentTypeId::of::<String>();
        assert!(id.name().ends_with("String"));
        assert_eq!(id.to_string(), id.name());
    }
}
