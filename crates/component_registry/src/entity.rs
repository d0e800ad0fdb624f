//! Entity handles and allocation.
//!
//! An [`Entity`] is an opaque identity. The registry never looks inside it;
//! it only compares identities. Copies of a handle refer to the same entity,
//! while two handles returned by separate [`Entity::new`] calls are always
//! distinct, even when the components later attached to them are equal.
//! [`Entity::from_raw`] rebuilds a handle from a known id and so can alias
//! an entity that already exists.

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide counter backing [`Entity::new`]. Starts at 1 so that 0 stays
/// reserved for [`Entity::NULL`].
static NEXT_ENTITY: AtomicU64 = AtomicU64::new(1);

/// An opaque entity identity.
///
/// Entities carry no data of their own. Attaching components through a
/// [`ComponentSystem`](crate::ComponentSystem) gives them meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity(u64);

impl Entity {
    /// The null entity. Registry operations treat it the same as `None`.
    pub const NULL: Entity = Entity(0);

    /// Allocate a fresh, process-unique entity.
    #[must_use]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(NEXT_ENTITY.fetch_add(1, Ordering::Relaxed))
    }

    /// Create an entity from a raw identifier.
    ///
    /// Handles built from the same raw id are the same entity.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// Returns `true` unless this is [`Entity::NULL`].
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }

    /// Collapse an optional handle into a live entity, treating both `None`
    /// and [`Entity::NULL`] as absent.
    pub(crate) fn resolve(entity: impl Into<Option<Entity>>) -> Option<Entity> {
        entity.into().filter(|e| e.is_valid())
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entities_are_distinct() {
        let e1 = Entity::new();
        let e2 = Entity::new();
        assert_ne!(e1, e2);
        assert!(e1.is_valid());
        assert!(e2.is_valid());
    }

    #[test]
    fn test_copies_share_identity() {
        let e = Entity::new();
        let copy = e;
        assert_eq!(e, copy);
    }

    #[test]
    fn test_null_entity() {
        assert!(!Entity::NULL.is_valid());
        assert_eq!(Entity::NULL.id(), 0);
    }

    #[test]
    fn test_resolve_treats_null_as_absent() {
        assert_eq!(Entity::resolve(None), None);
        assert_eq!(Entity::resolve(Entity::NULL), None);
        let e = Entity::from_raw(7);
        assert_eq!(Entity::resolve(e), Some(e));
    }

    #[test]
    fn test_from_raw_same_id_same_entity() {
        assert_eq!(Entity::from_raw(9), Entity::from_raw(9));
        assert_eq!(Entity::from_raw(9).id(), 9);
    }

    #[test]
    fn test_from_raw_aliases_allocated_entity() {
        let e = Entity::new();
        assert_eq!(Entity::from_raw(e.id()), e);
    }

    #[test]
    fn test_display() {
        assert_eq!(Entity::from_raw(42).to_string(), "Entity(42)");
    }
}
