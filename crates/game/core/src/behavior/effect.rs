//! Effects fired by behaviors and mods.

use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;
use state_machine::Action;

use super::ActorContext;
use crate::state::{Command, ProjectileLaunch, ProjectileSpec, Vec2};

/// A single category of mutation applied to an actor.
///
/// Every effect is safe to activate unconditionally except
/// [`ExpendEnergy`](Self::ExpendEnergy), whose guard must ensure the energy
/// is available. Spawns, kills, and sounds are queued on the context's
/// command buffer and take effect at the end of the tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    PlaySound(String),

    /// Plays one sound picked uniformly from a non-empty list.
    PlayRandomSound(Vec<String>),

    /// Stamps an image onto the map surface under the actor.
    DrawOnSurface(String),

    StopMotion,

    /// Turns toward the target and moves along the new facing at full speed.
    FaceAndPursueTarget,

    /// Equips the mod with this label and uses it if its gate holds.
    EquipAndUseMod(String),

    DropItem(String),

    /// Removes the actor from the world at the end of the tick.
    Kill,

    Heal(u32),

    Recharge(u32),

    /// # Panics
    ///
    /// Activating with more than the actor's current energy panics.
    ExpendEnergy(u32),

    /// Fires `count` projectiles from the barrel, each deviating from the
    /// facing by an independent uniform draw in `[-spread, spread]` degrees.
    MakeProjectile {
        projectile: ProjectileSpec,
        #[cfg_attr(feature = "serde", serde(default))]
        spread: f32,
        #[cfg_attr(feature = "serde", serde(default = "Effect::single_shot"))]
        count: u32,
    },

    /// Overwrites velocity with a push opposite to the facing.
    Kickback(f32),

    /// Resets the cooldown clock for a key.
    UpdateLastUse(String),
}

impl Effect {
    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    fn single_shot() -> u32 {
        1
    }

    pub fn activate(&self, ctx: &mut ActorContext<'_>) {
        match self {
            Self::PlaySound(sound) => ctx.commands.push(Command::PlaySound(sound.clone())),
            Self::PlayRandomSound(sounds) => {
                if let Some(sound) = sounds.choose(&mut *ctx.rng) {
                    ctx.commands.push(Command::PlaySound(sound.clone()));
                }
            }
            Self::DrawOnSurface(image) => ctx.commands.push(Command::Decal {
                image: image.clone(),
                pos: ctx.actor.body.pos - ctx.config.decal_offset,
            }),
            Self::StopMotion => ctx.actor.body.vel = Vec2::ZERO,
            Self::FaceAndPursueTarget => {
                if let Some(target) = ctx.target {
                    let body = &mut ctx.actor.body;
                    let heading = target.pos - body.pos;
                    if heading != Vec2::ZERO {
                        body.rot = heading.angle();
                    }
                    body.vel = body.facing() * ctx.actor.speed;
                }
            }
            Self::EquipAndUseMod(label) => {
                let Some(slot) = ctx.actor.mod_index(label) else {
                    return;
                };
                ctx.actor.equipped = Some(slot);
                let ability = Arc::clone(&ctx.actor.mods[slot].ability);
                ability.try_use(slot, ctx);
            }
            Self::DropItem(label) => ctx.commands.push(Command::DropItem {
                label: label.clone(),
                pos: ctx.actor.body.pos,
            }),
            Self::Kill => ctx.commands.push(Command::Kill(ctx.actor.id)),
            Self::Heal(amount) => ctx.actor.health.restore(*amount),
            Self::Recharge(amount) => ctx.actor.energy.restore(*amount),
            Self::ExpendEnergy(amount) => ctx.actor.energy.expend(*amount),
            Self::MakeProjectile {
                projectile,
                spread,
                count,
            } => {
                let body = ctx.actor.body;
                let origin = body.pos + ctx.config.barrel_offset.rotated(body.rot);
                let spread = spread.abs();
                for _ in 0..*count {
                    let deviation = if spread > 0.0 {
                        ctx.rng.gen_range(-spread..=spread)
                    } else {
                        0.0
                    };
                    ctx.commands.push(Command::Launch(ProjectileLaunch {
                        spec: projectile.clone(),
                        faction: ctx.actor.faction,
                        origin,
                        direction: body.rot + deviation,
                        launched_at: ctx.clock.current_time(),
                    }));
                }
            }
            Self::Kickback(amount) => {
                ctx.actor.body.vel = Vec2::new(-amount, 0.0).rotated(ctx.actor.body.rot);
            }
            Self::UpdateLastUse(key) => ctx.actor.cooldowns.mark(key, ctx.clock.current_time()),
        }
    }
}

impl<'a> Action<ActorContext<'a>> for Effect {
    #[inline]
    fn activate(&self, ctx: &mut ActorContext<'a>) {
        Effect::activate(self, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::testing::{Harness, zombie};
    use crate::state::{Body, Faction};

    fn launches(harness: &Harness) -> Vec<&ProjectileLaunch> {
        harness
            .commands
            .iter()
            .filter_map(|command| match command {
                Command::Launch(launch) => Some(launch),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn spread_draws_are_independent_per_shot() {
        let mut harness = Harness::seeded(zombie(), 11);
        harness.actor.body.rot = 30.0;
        harness.activate(&Effect::MakeProjectile {
            projectile: ProjectileSpec::bullet(300.0, 4, 800),
            spread: 15.0,
            count: 6,
        });

        let shots = launches(&harness);
        assert_eq!(shots.len(), 6);
        for shot in &shots {
            assert!((15.0..=45.0).contains(&shot.direction), "{}", shot.direction);
            assert_eq!(shot.faction, Faction::Enemy);
        }
        let first = shots[0].direction;
        assert!(shots.iter().any(|shot| shot.direction != first));
    }

    #[test]
    fn zero_spread_fires_along_facing_from_barrel() {
        let mut harness = Harness::new(zombie());
        harness.actor.body.pos = Vec2::new(100.0, 100.0);
        harness.actor.body.rot = 90.0;
        harness.clock.advance(250);
        harness.activate(&Effect::MakeProjectile {
            projectile: ProjectileSpec::bullet(300.0, 4, 800),
            spread: 0.0,
            count: 2,
        });

        let shots = launches(&harness);
        assert_eq!(shots.len(), 2);
        for shot in shots {
            assert_eq!(shot.direction, 90.0);
            assert_eq!(shot.launched_at, 250);
            // Barrel (30, 10) rotated a quarter turn is (-10, 30).
            assert!((shot.origin.x - 90.0).abs() < 1e-3);
            assert!((shot.origin.y - 130.0).abs() < 1e-3);
        }
    }

    #[test]
    fn kickback_overwrites_velocity_against_facing() {
        let mut harness = Harness::new(zombie());
        harness.actor.body.vel = Vec2::new(5.0, 5.0);
        harness.actor.body.rot = 90.0;
        harness.activate(&Effect::Kickback(50.0));

        let vel = harness.actor.body.vel;
        assert!(vel.x.abs() < 1e-3);
        assert!((vel.y + 50.0).abs() < 1e-3);

        harness.activate(&Effect::StopMotion);
        assert_eq!(harness.actor.body.vel, Vec2::ZERO);
    }

    #[test]
    fn heal_and_recharge_clamp_to_maximum() {
        let mut harness = Harness::new(zombie());
        harness.actor.health.set(95);
        harness.activate(&Effect::Heal(10));
        assert_eq!(harness.actor.health.current(), 100);

        harness.actor.energy.set(45);
        harness.activate(&Effect::Recharge(3));
        assert_eq!(harness.actor.energy.current(), 48);
    }

    #[test]
    fn expend_energy_subtracts_exactly() {
        let mut harness = Harness::new(zombie());
        harness.activate(&Effect::ExpendEnergy(50));
        assert!(harness.actor.energy.is_depleted());
    }

    #[test]
    #[should_panic(expected = "cannot expend")]
    fn expend_energy_beyond_available_panics() {
        let mut harness = Harness::new(zombie());
        harness.actor.energy.set(3);
        harness.activate(&Effect::ExpendEnergy(4));
    }

    #[test]
    fn pursuit_faces_target_at_full_speed() {
        let mut harness = Harness::new(zombie());
        harness.target = Some(Body::new(Vec2::new(0.0, 200.0), Vec2::ZERO));
        harness.activate(&Effect::FaceAndPursueTarget);

        assert!((harness.actor.body.rot - 90.0).abs() < 1e-3);
        let vel = harness.actor.body.vel;
        assert!(vel.x.abs() < 1e-3);
        assert!((vel.y - harness.actor.speed).abs() < 1e-3);
    }

    #[test]
    fn pursuit_without_target_keeps_motion() {
        let mut harness = Harness::new(zombie());
        harness.actor.body.vel = Vec2::new(1.0, 0.0);
        harness.activate(&Effect::FaceAndPursueTarget);
        assert_eq!(harness.actor.body.vel, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn spawns_and_kills_are_deferred() {
        let mut harness = Harness::new(zombie());
        harness.actor.body.pos = Vec2::new(40.0, 50.0);
        harness.activate(&Effect::DropItem("ammo".into()));
        harness.activate(&Effect::DrawOnSurface("blood".into()));
        harness.activate(&Effect::Kill);

        let queued: Vec<_> = harness.commands.iter().cloned().collect();
        assert_eq!(
            queued,
            vec![
                Command::DropItem {
                    label: "ammo".into(),
                    pos: Vec2::new(40.0, 50.0),
                },
                Command::Decal {
                    image: "blood".into(),
                    pos: Vec2::new(8.0, 18.0),
                },
                Command::Kill(harness.actor.id),
            ]
        );
    }

    #[test]
    fn random_sound_comes_from_the_list() {
        let sounds = vec!["groan_1".to_string(), "groan_2".to_string()];
        let mut harness = Harness::seeded(zombie(), 3);
        for _ in 0..8 {
            harness.activate(&Effect::PlayRandomSound(sounds.clone()));
        }
        assert_eq!(harness.commands.len(), 8);
        assert!(harness.commands.iter().all(|command| matches!(
            command,
            Command::PlaySound(sound) if sounds.contains(sound)
        )));
    }

    #[test]
    fn update_last_use_stamps_current_time() {
        let mut harness = Harness::new(zombie());
        harness.clock.advance(1234);
        harness.activate(&Effect::UpdateLastUse("bite".into()));
        assert_eq!(harness.actor.cooldowns.last_use("bite"), Some(1234));
    }
}
