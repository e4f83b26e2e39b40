use std::collections::BTreeMap;

use super::{Actor, ActorTemplate, ModSlot, ResourceMeter};

/// Player data that persists across scenes.
///
/// Controllers hand this snapshot to the quest runner when their scene ends
/// and receive it back through `set_player_data` when the next scene starts.
#[derive(Clone, Debug, PartialEq)]
pub struct HumanoidData {
    pub health: ResourceMeter,
    pub energy: ResourceMeter,
    pub mods: Vec<ModSlot>,
    pub equipped: Option<usize>,
    /// Labels of picked-up items.
    pub inventory: Vec<String>,
    pub skills: BTreeMap<String, u32>,
}

impl HumanoidData {
    /// Fresh player data at full health and energy.
    pub fn fresh(template: &ActorTemplate, mods: Vec<ModSlot>) -> Self {
        Self {
            health: ResourceMeter::full(template.health),
            energy: ResourceMeter::full(template.energy),
            mods,
            equipped: None,
            inventory: Vec::new(),
            skills: template.skills.clone(),
        }
    }

    pub fn skill(&self, name: &str) -> u32 {
        self.skills.get(name).copied().unwrap_or(0)
    }

    /// Copies the live actor's state into this snapshot.
    pub fn capture(&mut self, actor: &Actor) {
        self.health = actor.health;
        self.energy = actor.energy;
        self.mods = actor.mods.clone();
        self.equipped = actor.equipped;
    }

    /// Writes this snapshot onto a freshly spawned player actor.
    pub fn apply_to(&self, actor: &mut Actor) {
        actor.health = self.health;
        actor.energy = self.energy;
        actor.mods = self.mods.clone();
        actor.equipped = self.equipped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EntityId, Faction, Vec2};

    fn template() -> ActorTemplate {
        ActorTemplate {
            faction: Faction::Player,
            health: 100,
            energy: 50,
            speed: 200.0,
            half_extent: 16.0,
            attack: 10,
            behavior: None,
            mods: Vec::new(),
            skills: BTreeMap::from([("lockpicking".to_string(), 3)]),
        }
    }

    #[test]
    fn snapshot_round_trips_through_actor() {
        let template = template();
        let mut data = HumanoidData::fresh(&template, Vec::new());
        assert_eq!(data.skill("lockpicking"), 3);
        assert_eq!(data.skill("swimming"), 0);

        let mut actor = Actor::from_template(EntityId(1), "player", &template, Vec2::ZERO, Vec::new());
        actor.health.drain(30);
        data.capture(&actor);
        assert_eq!(data.health.current(), 70);

        let mut next = Actor::from_template(EntityId(9), "player", &template, Vec2::ZERO, Vec::new());
        data.apply_to(&mut next);
        assert_eq!(next.health.current(), 70);
        assert_eq!(next.energy.current(), 50);
    }
}
