//! One frame of dungeon simulation.
//!
//! # Frame order
//!
//! 1. Behaviors, in spawn order: each actor's state is selected and its
//!    effects fired before the next actor is visited
//! 2. Motion: velocities are integrated and rotating projectiles spin
//! 3. Projectiles expire, stop at walls, or damage the first opposing actor
//!    they overlap; spent projectiles drop their item if they carry one
//! 4. The player picks up every item it overlaps
//! 5. Queued commands are applied
//!
//! Effects never mutate the world's registries directly, so spawns and
//! kills requested in step 1 land in step 5.

use std::sync::Arc;

use game_core::state::ApplyReport;
use game_core::{AudioSink, Command, Commands, EntityId, Frame, ModSlot, PropKind, Vec2, World};

use crate::ContentBundle;

/// What happened during one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub behaviors_run: usize,
    pub effects_fired: usize,
    pub hits: usize,
    /// Labels of the items the player picked up.
    pub picked_up: Vec<String>,
    pub applied: ApplyReport,
}

pub fn step(
    world: &mut World,
    frame: &mut Frame<'_>,
    content: &ContentBundle,
    commands: &mut Commands,
    audio: &mut dyn AudioSink,
) -> StepReport {
    let mut report = StepReport::default();

    run_behaviors(world, frame, content, commands, &mut report);

    let dt = frame.clock.dt();
    for actor in world.actors_mut() {
        actor.body.integrate(dt);
    }
    for projectile in world.projectiles_mut() {
        projectile.advance(dt);
    }

    resolve_projectiles(world, frame.clock.current_time(), commands, &mut report);
    collect_items(world, content, &mut report);

    report.applied = world.apply(commands, content.items(), audio);
    report
}

fn run_behaviors(
    world: &mut World,
    frame: &mut Frame<'_>,
    content: &ContentBundle,
    commands: &mut Commands,
    report: &mut StepReport,
) {
    for id in world.actor_ids() {
        let Some(name) = world.actor(id).and_then(|actor| actor.behavior.clone()) else {
            continue;
        };
        let Some(behavior) = content.behavior(&name).map(Arc::clone) else {
            tracing::warn!(actor = %id, behavior = %name, "actor runs an unknown behavior");
            continue;
        };

        if let Some(fired) = world.with_actor_context(id, frame, commands, |ctx| behavior.tick(ctx))
        {
            report.behaviors_run += 1;
            report.effects_fired += fired;
        }
    }
}

fn resolve_projectiles(
    world: &mut World,
    now: u64,
    commands: &mut Commands,
    report: &mut StepReport,
) {
    let mut spent: Vec<(EntityId, Vec2, Option<String>)> = Vec::new();
    let mut hits: Vec<(EntityId, u32)> = Vec::new();

    for projectile in world.projectiles() {
        let rect = projectile.body.rect();
        let expired = projectile.is_expired(now);
        let walled = || {
            world
                .props()
                .any(|prop| prop.kind == PropKind::Wall && prop.body.rect().overlaps(&rect))
        };
        let victim = || {
            world.actors().find(|actor| {
                projectile.faction.opposes(actor.faction)
                    && !actor.is_dead()
                    && actor.body.rect().overlaps(&rect)
            })
        };

        if expired || walled() {
            spent.push((projectile.id, projectile.body.pos, projectile.drops_on_kill.clone()));
        } else if let Some(actor) = victim() {
            hits.push((actor.id, projectile.damage));
            spent.push((projectile.id, projectile.body.pos, projectile.drops_on_kill.clone()));
        }
    }

    for (victim, damage) in hits {
        if let Some(actor) = world.actor_mut(victim) {
            actor.health.drain(damage);
            report.hits += 1;
        }
    }
    for (id, pos, drop) in spent {
        if let Some(label) = drop {
            commands.push(Command::DropItem { label, pos });
        }
        commands.push(Command::Kill(id));
    }
}

fn collect_items(world: &mut World, content: &ContentBundle, report: &mut StepReport) {
    let Some(player) = world.player() else {
        return;
    };
    let reach = player.body.rect();
    let touched: Vec<EntityId> = world
        .items()
        .filter(|item| item.body.rect().overlaps(&reach))
        .map(|item| item.id)
        .collect();

    for id in touched {
        let Some(item) = world.take_item(id) else {
            continue;
        };
        let granted = content
            .items()
            .get(&item.label)
            .and_then(|definition| definition.grants_mod.as_deref())
            .and_then(|label| content.ability(label));

        if let (Some(ability), Some(player)) = (granted, world.player_mut()) {
            if player.mod_index(&ability.label).is_none() {
                player.mods.push(ModSlot::new(Arc::clone(ability)));
            }
        }
        tracing::debug!(item = %item.label, "picked up");
        report.picked_up.push(item.label);
    }
}
