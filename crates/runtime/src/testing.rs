//! Shared fixtures for runtime unit tests.

use std::collections::BTreeMap;

use game_core::{
    Ability, AbilityKind, ActorTemplate, BehaviorSpec, Condition, EntityId, Effect, Faction,
    GameConfig, ItemCatalog, ItemDefinition, LevelSpec, Placement, PlacementKind,
    ProjectileSpec, StateSpec, Vec2, World,
};

use crate::{ContentBundle, ContentParts};

pub const ARENA: &str = "arena";

fn walker_behavior() -> BehaviorSpec {
    BehaviorSpec {
        states: vec![
            ("idle".into(), StateSpec::default_state()),
            (
                "chase".into(),
                StateSpec::weighted(vec![(Condition::TargetClose(400.0), 1)])
                    .with_effect(Effect::FaceAndPursueTarget, Condition::Always),
            ),
            (
                "dying".into(),
                StateSpec::weighted(vec![(Condition::Dead, 100)])
                    .with_effect(Effect::Kill, Condition::Always),
            ),
        ],
    }
}

fn template(faction: Faction, health: u32, speed: f32, attack: u32) -> ActorTemplate {
    ActorTemplate {
        faction,
        health,
        energy: 0,
        speed,
        half_extent: ActorTemplate::DEFAULT_HALF_EXTENT,
        attack,
        behavior: None,
        mods: Vec::new(),
        skills: BTreeMap::new(),
    }
}

fn placement(kind: PlacementKind, x: f32, y: f32, labels: &[&str]) -> Placement {
    Placement {
        kind,
        pos: Vec2::new(x, y),
        rot: 0.0,
        labels: labels.iter().map(|l| l.to_string()).collect(),
    }
}

pub fn parts() -> ContentParts {
    let player = ActorTemplate {
        energy: 50,
        mods: vec!["pistol".into()],
        skills: BTreeMap::from([("lockpicking".to_string(), 3)]),
        ..template(Faction::Player, 100, 200.0, 10)
    };
    let walker = ActorTemplate {
        behavior: Some("walker".into()),
        ..template(Faction::Enemy, 20, 60.0, 4)
    };

    let arena = LevelSpec {
        placements: vec![
            placement(PlacementKind::Actor("player".into()), 0.0, 0.0, &["hero"]),
            placement(PlacementKind::Actor("walker".into()), 300.0, 0.0, &["horde"]),
            placement(PlacementKind::Actor("walker".into()), -300.0, 200.0, &["horde"]),
            placement(PlacementKind::Item("medkit".into()), 0.0, 200.0, &[]),
            placement(
                PlacementKind::Zone {
                    half_extents: Vec2::new(32.0, 32.0),
                },
                0.0,
                -300.0,
                &["exit"],
            ),
            placement(
                PlacementKind::Wall {
                    half_extents: Vec2::new(8.0, 400.0),
                },
                600.0,
                0.0,
                &[],
            ),
        ],
    };

    ContentParts {
        config: GameConfig::with_seed(7),
        behaviors: vec![("walker".into(), walker_behavior())],
        templates: vec![("player".into(), player), ("walker".into(), walker)],
        mods: vec![
            Ability {
                label: "pistol".into(),
                kind: AbilityKind::Shoot {
                    projectile: ProjectileSpec::bullet(600.0, 10, 1000),
                    spread: 0.0,
                    count: 1,
                    kickback: 0.0,
                },
                cooldown_ms: 250,
                energy_cost: 0,
                uses: None,
                sound: Some("bang".into()),
                icon: None,
            },
            Ability {
                label: "medkit".into(),
                kind: AbilityKind::Heal { amount: 10 },
                cooldown_ms: 0,
                energy_cost: 0,
                uses: Some(3),
                sound: None,
                icon: None,
            },
        ],
        items: ItemCatalog::new(vec![
            ItemDefinition {
                label: "bolt".into(),
                image: None,
                grants_mod: None,
            },
            ItemDefinition {
                label: "medkit".into(),
                image: Some("medkit.png".into()),
                grants_mod: Some("medkit".into()),
            },
        ])
        .expect("fixture items are unique"),
        levels: vec![(ARENA.into(), arena)],
    }
}

pub fn bundle() -> ContentBundle {
    ContentBundle::new(parts()).expect("fixture content is valid")
}

/// A world holding the player at the origin and one walker 200px east.
pub fn seed_world(content: &ContentBundle) -> (World, EntityId, EntityId) {
    let mut world = World::new();
    let player = content
        .spawn_actor(&mut world, ContentBundle::PLAYER, Vec2::ZERO, 0.0)
        .expect("player template");
    let walker = content
        .spawn_actor(&mut world, "walker", Vec2::new(200.0, 0.0), 180.0)
        .expect("walker template");
    (world, player, walker)
}
