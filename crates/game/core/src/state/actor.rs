//! Living actors: the player and enemies.
//!
//! Every actor carries both a health and an energy meter. Conditions and
//! effects that read either resource can therefore be evaluated against any
//! actor without a capability check; an actor with no energy simply has an
//! empty meter.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::{EntityId, Rect, ResourceMeter, Vec2};
use crate::behavior::Ability;

/// Side an actor fights for. Projectiles only damage the opposing side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Faction {
    Player,
    Enemy,
}

impl Faction {
    pub fn opposes(self, other: Faction) -> bool {
        self != other
    }
}

/// Kinematic state shared by every entity that occupies space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Body {
    pub pos: Vec2,
    /// Facing in degrees.
    pub rot: f32,
    pub vel: Vec2,
    pub half_extents: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, half_extents: Vec2) -> Self {
        Self {
            pos,
            rot: 0.0,
            vel: Vec2::ZERO,
            half_extents,
        }
    }

    pub fn facing(&self) -> Vec2 {
        Vec2::from_angle(self.rot)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.half_extents)
    }

    /// Moves by `vel * dt`.
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// Per-actor record of when each cooldown key was last used.
///
/// Keys are the labels carried by `Cooldown` conditions and
/// `UpdateLastUse` effects. A key that was never used is ready.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CooldownLedger {
    last_use: BTreeMap<String, u64>,
}

impl CooldownLedger {
    pub fn last_use(&self, key: &str) -> Option<u64> {
        self.last_use.get(key).copied()
    }

    pub fn mark(&mut self, key: &str, now: u64) {
        self.last_use.insert(key.to_string(), now);
    }
}

/// An equipped or carried mod together with its remaining uses.
#[derive(Clone, Debug, PartialEq)]
pub struct ModSlot {
    pub ability: Arc<Ability>,
    /// `None` for unlimited uses.
    pub uses_left: Option<u32>,
}

impl ModSlot {
    pub fn new(ability: Arc<Ability>) -> Self {
        let uses_left = ability.uses;
        Self { ability, uses_left }
    }

    pub fn label(&self) -> &str {
        &self.ability.label
    }

    pub fn has_uses(&self) -> bool {
        self.uses_left != Some(0)
    }
}

/// Static description of an actor kind, loaded from content.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorTemplate {
    pub faction: Faction,
    pub health: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub energy: u32,
    /// Pursuit speed in pixels per second.
    #[cfg_attr(feature = "serde", serde(default))]
    pub speed: f32,
    #[cfg_attr(feature = "serde", serde(default = "ActorTemplate::default_half_extent"))]
    pub half_extent: f32,
    /// Damage dealt per exchange in turn-based scenes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack: u32,
    /// Behavior name; `None` for actors driven by input.
    #[cfg_attr(feature = "serde", serde(default))]
    pub behavior: Option<String>,
    /// Labels of the mods this actor carries.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mods: Vec<String>,
    /// Skill ratings consulted by skill checks; only meaningful for the player.
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: BTreeMap<String, u32>,
}

impl ActorTemplate {
    pub const DEFAULT_HALF_EXTENT: f32 = 16.0;

    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    fn default_half_extent() -> f32 {
        Self::DEFAULT_HALF_EXTENT
    }
}

/// A living actor in the world.
#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    pub id: EntityId,
    /// Name of the template this actor was spawned from.
    pub kind: String,
    pub faction: Faction,
    pub body: Body,
    pub health: ResourceMeter,
    pub energy: ResourceMeter,
    pub speed: f32,
    pub attack: u32,
    pub behavior: Option<String>,
    /// State chosen by the behavior on the most recent tick.
    pub state: Option<String>,
    pub mods: Vec<ModSlot>,
    pub equipped: Option<usize>,
    pub cooldowns: CooldownLedger,
}

impl Actor {
    /// Spawns an actor from its template. `mods` must already be resolved
    /// from the template's mod labels.
    pub fn from_template(
        id: EntityId,
        kind: impl Into<String>,
        template: &ActorTemplate,
        pos: Vec2,
        mods: Vec<ModSlot>,
    ) -> Self {
        let half = template.half_extent;
        Self {
            id,
            kind: kind.into(),
            faction: template.faction,
            body: Body::new(pos, Vec2::new(half, half)),
            health: ResourceMeter::full(template.health),
            energy: ResourceMeter::full(template.energy),
            speed: template.speed,
            attack: template.attack,
            behavior: template.behavior.clone(),
            state: None,
            mods,
            equipped: None,
            cooldowns: CooldownLedger::default(),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_depleted()
    }

    pub fn mod_index(&self, label: &str) -> Option<usize> {
        self.mods.iter().position(|slot| slot.label() == label)
    }

    pub fn equipped_mod(&self) -> Option<&ModSlot> {
        self.equipped.and_then(|index| self.mods.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factions_oppose_each_other_only() {
        assert!(Faction::Player.opposes(Faction::Enemy));
        assert!(!Faction::Enemy.opposes(Faction::Enemy));
    }

    #[test]
    fn ledger_tracks_last_use_per_key() {
        let mut ledger = CooldownLedger::default();
        assert_eq!(ledger.last_use("bite"), None);
        ledger.mark("bite", 40);
        ledger.mark("spit", 90);
        assert_eq!(ledger.last_use("bite"), Some(40));
        assert_eq!(ledger.last_use("spit"), Some(90));
    }
}
