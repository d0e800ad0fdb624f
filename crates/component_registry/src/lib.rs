//! # component_registry
//!
//! Attaches typed components to opaque entities, at most one component per
//! type per entity.
//!
//! This crate provides:
//!
//! - [`Entity`] — opaque, identity-compared entity handles.
//! - [`Component`] — blanket trait covering every `'static` type.
//! - [`EntityState`] — one entity's components, keyed by type.
//! - [`ComponentSystem`] — the registry mapping entities to their state.
//! - [`ServiceScope`] — owns exactly one registry per scope.
//!
//! ## Usage
//!
//! ```rust
//! use component_registry::{ComponentSystem, Entity};
//!
//! let mut cs = ComponentSystem::new();
//! let e1 = Entity::new();
//!
//! assert!(cs.assign(e1, String::from("hello")));
//! assert!(!cs.assign(e1, String::from("world")));
//! assert_eq!(
//!     cs.get(e1).and_then(|s| s.get::<String>()).map(String::as_str),
//!     Some("hello")
//! );
//! assert!(cs.unassign(e1, &String::from("x")));
//! assert!(!cs.unassign(e1, &String::from("y")));
//! ```

pub mod component;
pub mod config;
pub mod entity;
pub mod entity_state;
pub mod error;
pub mod scope;
pub mod system;

pub use component::{Component, ComponentTypeId};
pub use config::RegistryConfig;
pub use entity::Entity;
pub use entity_state::EntityState;
pub use error::RegistryError;
pub use scope::{ScopeBuilder, ServiceScope};
pub use system::ComponentSystem;
