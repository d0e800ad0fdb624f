//! Registry configuration.

/// Configuration for a [`ComponentSystem`](crate::ComponentSystem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Drop an entity's state once its last component is unassigned.
    ///
    /// Off by default: a known entity stays known, and `get` keeps returning
    /// its (possibly empty) state. When on, the entity reverts to unknown.
    pub prune_empty_states: bool,
    /// Number of entities to reserve room for up front.
    pub initial_capacity: usize,
}

impl RegistryConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable pruning of empty entity states.
    #[must_use]
    pub fn with_prune_empty_states(mut self, prune: bool) -> Self {
        self.prune_empty_states = prune;
        self
    }

    /// Reserve room for `capacity` entities.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            prune_empty_states: false,
            initial_capacity: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_retains_empty_states() {
        let config = RegistryConfig::default();
        assert!(!config.prune_empty_states);
        assert_eq!(config.initial_capacity, 0);
    }

    #[test]
    fn test_builder_overrides() {
        let config = RegistryConfig::new()
            .with_prune_empty_states(true)
            .with_initial_capacity(64);
        assert!(config.prune_empty_states);
        assert_eq!(config.initial_capacity, 64);
    }
}
