//! Per-entity component storage.
//!
//! An [`EntityState`] holds at most one component per concrete type. Every
//! lookup, insertion and removal is keyed by [`ComponentTypeId`]; the values
//! themselves are never compared.

use std::any::Any;
use std::collections::HashMap;

use crate::component::{Component, ComponentTypeId};

/// The components attached to a single entity.
///
/// Owned by a [`ComponentSystem`](crate::ComponentSystem), which creates one
/// lazily the first time an entity is assigned to.
#[derive(Default)]
pub struct EntityState {
    components: HashMap<ComponentTypeId, Box<dyn Any>>,
}

impl EntityState {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `component` under its concrete type.
    ///
    /// Returns `false` and leaves the state untouched if a component of the
    /// same type is already stored. The rejected value is dropped.
    pub fn add<C: Component>(&mut self, component: C) -> bool {
        let type_id = ComponentTypeId::of::<C>();
        if self.components.contains_key(&type_id) {
            return false;
        }
        self.components.insert(type_id, Box::new(component));
        true
    }

    /// Returns the stored component of type `T`, if any.
    #[must_use]
    pub fn get<T: Component>(&self) -> Option<&T> {
        self.components
            .get(&ComponentTypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }

    /// Returns a mutable reference to the stored component of type `T`.
    #[must_use]
    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .get_mut(&ComponentTypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut::<T>())
    }

    /// Returns a clone of the stored `T`, or `T::default()` when none is
    /// stored.
    #[must_use]
    pub fn get_or_default<T: Component + Default + Clone>(&self) -> T {
        self.get::<T>().cloned().unwrap_or_default()
    }

    /// Returns `true` if a component of type `T` is stored.
    #[must_use]
    pub fn contains<T: Component>(&self) -> bool {
        self.components.contains_key(&ComponentTypeId::of::<T>())
    }

    /// Remove the stored component whose type matches `component`'s type.
    ///
    /// The argument only selects the type: the stored value is removed even
    /// if it differs from `component`. Returns `false` if nothing of that type
    /// was stored.
    pub fn remove<C: Component>(&mut self, component: &C) -> bool {
        self.remove_by_id(ComponentTypeId::of_val(component))
    }

    /// Remove the stored component of type `T`.
    pub fn remove_type<T: Component>(&mut self) -> bool {
        self.remove_by_id(ComponentTypeId::of::<T>())
    }

    /// Remove and return the stored component of type `T`.
    pub fn take<T: Component>(&mut self) -> Option<T> {
        let boxed = self.components.remove(&ComponentTypeId::of::<T>())?;
        boxed.downcast::<T>().ok().map(|value| *value)
    }

    /// Returns the number of stored components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if no components are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the types of all stored components, in no particular order.
    pub fn component_types(&self) -> impl Iterator<Item = ComponentTypeId> + '_ {
        self.components.keys().copied()
    }

    pub(crate) fn remove_by_id(&mut self, type_id: ComponentTypeId) -> bool {
        self.components.remove(&type_id).is_some()
    }
}

impl std::fmt::Debug for EntityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries(self.components.keys().map(ComponentTypeId::name))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Health {
        current: f32,
        max: f32,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Name(String);

    #[test]
    fn test_add_then_get() {
        let mut state = EntityState::new();
        assert!(state.add(Health {
            current: 80.0,
            max: 100.0
        }));
        assert_eq!(
            state.get::<Health>(),
            Some(&Health {
                current: 80.0,
                max: 100.0
            })
        );
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_add_rejects_duplicate_type() {
        let mut state = EntityState::new();
        assert!(state.add(Name("first".into())));
        assert!(!state.add(Name("second".into())));
        // The first value survives the rejected add.
        assert_eq!(state.get::<Name>(), Some(&Name("first".into())));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_distinct_types_coexist() {
        let mut state = EntityState::new();
        assert!(state.add(Health::default()));
        assert!(state.add(Name("orc".into())));
        assert!(state.add(7_u32));
        assert_eq!(state.len(), 3);
        assert!(state.contains::<Health>());
        assert!(state.contains::<Name>());
        assert!(state.contains::<u32>());
        assert!(!state.contains::<u64>());
    }

    #[test]
    fn test_get_unassigned_type_is_none() {
        let state = EntityState::new();
        assert!(state.get::<Health>().is_none());
        assert_eq!(state.get_or_default::<Health>(), Health::default());
        assert_eq!(state.get_or_default::<u32>(), 0);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut state = EntityState::new();
        state.add(Health {
            current: 10.0,
            max: 10.0,
        });
        if let Some(health) = state.get_mut::<Health>() {
            health.current = 3.0;
        }
        assert_eq!(state.get::<Health>().map(|h| h.current), Some(3.0));
    }

    #[test]
    fn test_remove_is_keyed_by_type() {
        let mut state = EntityState::new();
        state.add(Name("stored".into()));
        assert!(state.remove(&Name("something else".into())));
        assert!(state.get::<Name>().is_none());
        assert!(!state.remove(&Name("stored".into())));
    }

    #[test]
    fn test_remove_leaves_other_types() {
        let mut state = EntityState::new();
        state.add(Health::default());
        state.add(Name("keep".into()));
        assert!(state.remove_type::<Health>());
        assert!(!state.remove_type::<Health>());
        assert_eq!(state.get::<Name>(), Some(&Name("keep".into())));
    }

    #[test]
    fn test_take_returns_value() {
        let mut state = EntityState::new();
        state.add(Name("taken".into()));
        assert_eq!(state.take::<Name>(), Some(Name("taken".into())));
        assert_eq!(state.take::<Name>(), None);
        assert!(state.is_empty());
    }

    #[test]
    fn test_component_types() {
        let mut state = EntityState::new();
        state.add(1_i32);
        state.add(String::from("x"));
        let types: Vec<_> = state.component_types().collect();
        assert_eq!(types.len(), 2);
        assert!(types.contains(&ComponentTypeId::of::<i32>()));
        assert!(types.contains(&ComponentTypeId::of::<String>()));
    }
}
