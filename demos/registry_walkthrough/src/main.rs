//! # registry_walkthrough
//!
//! Builds a service scope holding one component registry, then:
//!
//! 1. Runs the string scenario: assign, duplicate assign, lookup, and
//!    type-keyed unassign on a single entity.
//! 2. Spawns `--entities` entities, gives each a `Position` and a `Name`,
//!    and strips the `Name` from every other one.
//! 3. Logs what the registry holds afterwards.

use anyhow::{Result, ensure};
use clap::Parser;
use component_registry::{ComponentSystem, Entity, RegistryConfig, ScopeBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "registry_walkthrough",
    about = "Exercise a component registry end to end"
)]
struct Args {
    /// Number of entities to populate
    #[arg(short, long, default_value_t = 4)]
    entities: u64,

    /// Drop an entity's state once its last component is removed
    #[arg(long)]
    prune_empty_states: bool,

    /// Number of entities to reserve room for
    #[arg(short, long, default_value_t = 0)]
    capacity: usize,
}

#[derive(Debug, Clone, PartialEq)]
struct Position {
    x: f32,
    y: f32,
}

#[derive(Debug, Clone, PartialEq)]
struct Name(String);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("registry_walkthrough=info".parse()?)
                .add_directive("component_registry=debug".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = RegistryConfig::new()
        .with_prune_empty_states(args.prune_empty_states)
        .with_initial_capacity(args.capacity);

    let mut scope = ScopeBuilder::new().add_component_system_with(config).build();
    info!(scope = %scope.id(), "scope ready");

    string_scenario(scope.require_component_system()?)?;
    populate(scope.require_component_system()?, args.entities)?;

    let cs = scope.require_component_system()?;
    info!(entities = cs.entity_count(), "walkthrough complete");
    Ok(())
}

fn string_scenario(cs: &mut ComponentSystem) -> Result<()> {
    let e1 = Entity::new();

    ensure!(cs.assign(e1, "hello"), "first assign must succeed");
    ensure!(!cs.assign(e1, "world"), "duplicate type must be rejected");

    let stored = cs.get(e1).and_then(|s| s.get::<&'static str>()).copied();
    ensure!(stored == Some("hello"), "expected hello, got {stored:?}");
    info!(%e1, ?stored, "lookup");

    ensure!(cs.unassign(e1, &"x"), "unassign is keyed by type");
    ensure!(!cs.unassign(e1, &"y"), "second unassign must fail");
    info!(%e1, "string scenario passed");
    Ok(())
}

fn populate(cs: &mut ComponentSystem, count: u64) -> Result<()> {
    let mut spawned = Vec::new();
    for i in 0..count {
        let entity = Entity::new();
        let offset = i as f32;
        ensure!(cs.assign(entity, Position { x: offset, y: -offset }));
        ensure!(cs.assign(entity, Name(format!("unit-{i}"))));
        spawned.push(entity);
    }

    for entity in spawned.iter().step_by(2) {
        ensure!(cs.unassign_type::<Name>(*entity), "{entity} should still hold its name");
    }

    for entity in &spawned {
        let Some(state) = cs.get(*entity) else {
            continue;
        };
        info!(
            %entity,
            position = ?state.get::<Position>(),
            name = ?state.get::<Name>(),
            components = state.len(),
            "entity state"
        );
    }
    Ok(())
}
