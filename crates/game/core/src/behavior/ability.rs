//! Mods: equippable abilities with a gate and a fixed effect list.

use super::{ActorContext, Condition, Effect, condition};
use crate::state::{Actor, Clock, ProjectileSpec};

/// What a mod does when used.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityKind {
    Heal {
        amount: u32,
    },
    Recharge {
        amount: u32,
    },
    Shoot {
        projectile: ProjectileSpec,
        #[cfg_attr(feature = "serde", serde(default))]
        spread: f32,
        #[cfg_attr(feature = "serde", serde(default = "AbilityKind::single_shot"))]
        count: u32,
        /// Push applied to the shooter opposite to its facing.
        #[cfg_attr(feature = "serde", serde(default))]
        kickback: f32,
    },
}

impl AbilityKind {
    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    fn single_shot() -> u32 {
        1
    }
}

/// An equippable mod.
///
/// The mod's label doubles as its cooldown key, so two actors carrying the
/// same mod keep independent cooldowns in their own ledgers. Remaining uses
/// live on the actor's [`ModSlot`](crate::state::ModSlot).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub label: String,
    pub kind: AbilityKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldown_ms: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub energy_cost: u32,
    /// `None` for unlimited uses.
    #[cfg_attr(feature = "serde", serde(default))]
    pub uses: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sound: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: Option<String>,
}

impl Ability {
    /// Condition that must hold, besides remaining uses, for the mod to fire.
    pub fn gate(&self) -> Condition {
        let mut all = Vec::new();
        if self.cooldown_ms > 0 {
            all.push(Condition::cooldown(self.label.clone(), self.cooldown_ms));
        }
        if self.energy_cost > 0 {
            all.push(Condition::EnergyAvailable(self.energy_cost));
        }
        match self.kind {
            AbilityKind::Heal { .. } => all.push(Condition::Damaged),
            AbilityKind::Recharge { .. } => all.push(Condition::EnergyNotFull),
            AbilityKind::Shoot { .. } => {}
        }
        Condition::And(all)
    }

    /// Effects fired, in order, on every use.
    pub fn effects(&self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.energy_cost > 0 {
            effects.push(Effect::ExpendEnergy(self.energy_cost));
        }
        match &self.kind {
            AbilityKind::Heal { amount } => effects.push(Effect::Heal(*amount)),
            AbilityKind::Recharge { amount } => effects.push(Effect::Recharge(*amount)),
            AbilityKind::Shoot {
                projectile,
                spread,
                count,
                kickback,
            } => {
                effects.push(Effect::MakeProjectile {
                    projectile: projectile.clone(),
                    spread: *spread,
                    count: *count,
                });
                if *kickback != 0.0 {
                    effects.push(Effect::Kickback(*kickback));
                }
            }
        }
        if let Some(sound) = &self.sound {
            effects.push(Effect::PlaySound(sound.clone()));
        }
        effects.push(Effect::UpdateLastUse(self.label.clone()));
        effects
    }

    /// Projectile fired by this mod, if it shoots.
    pub fn projectile(&self) -> Option<&ProjectileSpec> {
        match &self.kind {
            AbilityKind::Shoot { projectile, .. } => Some(projectile),
            _ => None,
        }
    }

    /// `true` if the actor's mod in `slot` has uses left and the gate holds.
    pub fn can_use(&self, slot: usize, ctx: &mut ActorContext<'_>) -> bool {
        let has_uses = ctx.actor.mods.get(slot).is_some_and(|m| m.has_uses());
        has_uses && self.gate().check(ctx)
    }

    /// Fires the mod held in `slot`.
    ///
    /// # Panics
    ///
    /// Panics if [`can_use`](Self::can_use) does not hold.
    pub fn activate(&self, slot: usize, ctx: &mut ActorContext<'_>) {
        assert!(
            self.can_use(slot, ctx),
            "mod '{}' used while gated",
            self.label
        );

        for effect in self.effects() {
            effect.activate(ctx);
        }
        if let Some(uses) = ctx.actor.mods[slot].uses_left.as_mut() {
            *uses -= 1;
        }
    }

    /// Fires the mod if it can be used; returns whether it fired.
    pub fn try_use(&self, slot: usize, ctx: &mut ActorContext<'_>) -> bool {
        if !self.can_use(slot, ctx) {
            return false;
        }
        self.activate(slot, ctx);
        true
    }

    /// Cooldown progress in `[0, 1]` for the HUD.
    pub fn cooldown_fraction(&self, actor: &Actor, clock: &Clock) -> f32 {
        condition::cooldown_fraction(actor, &self.label, self.cooldown_ms, clock)
    }
}
