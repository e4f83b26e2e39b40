//! The world registry.
//!
//! The world owns every entity of a dungeon scene, grouped by category
//! (actors, projectiles, items, props) and addressable by designer labels.
//! Removing an entity removes it from every label group at once.

use std::collections::{BTreeMap, BTreeSet};

use super::{
    Actor, Body, Command, Commands, EntityId, Faction, ItemFactory, Prop, PropKind, Projectile,
    ProjectileLaunch, Vec2, WorldItem,
};
use crate::behavior::ActorContext;
use crate::env::{AudioSink, Frame};

/// Label → entity ids, used to bind resolutions to live entities.
pub type SpriteIndex = BTreeMap<String, BTreeSet<EntityId>>;

/// A sprite permanently stamped onto the map surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Decal {
    pub image: String,
    pub pos: Vec2,
}

/// Outcome of applying a command buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub spawned: usize,
    pub killed: usize,
    /// Item drops whose label the factory did not recognise.
    pub dropped: usize,
}

#[derive(Clone, Debug, Default)]
pub struct World {
    next_id: u32,
    player: Option<EntityId>,
    actors: BTreeMap<EntityId, Actor>,
    projectiles: BTreeMap<EntityId, Projectile>,
    items: BTreeMap<EntityId, WorldItem>,
    props: BTreeMap<EntityId, Prop>,
    groups: SpriteIndex,
    /// Final snapshots of actors that have left the world.
    departed: BTreeMap<EntityId, Actor>,
    decals: Vec<Decal>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    // ------------------------------------------------------------------
    // Spawning
    // ------------------------------------------------------------------

    /// Spawns an actor built by `build` with a freshly allocated id.
    ///
    /// The first player-faction actor becomes the world's player.
    pub fn spawn_actor(&mut self, build: impl FnOnce(EntityId) -> Actor) -> EntityId {
        let id = self.allocate();
        let actor = build(id);
        if actor.faction == Faction::Player && self.player.is_none() {
            self.player = Some(id);
        }
        self.actors.insert(id, actor);
        id
    }

    pub fn spawn_projectile(&mut self, launch: ProjectileLaunch) -> EntityId {
        let id = self.allocate();
        self.projectiles.insert(id, Projectile::launch(id, launch));
        id
    }

    /// Spawns an item through `factory`; `None` if the label is unknown.
    pub fn spawn_item(
        &mut self,
        factory: &dyn ItemFactory,
        label: &str,
        pos: Vec2,
    ) -> Option<EntityId> {
        if !factory.knows(label) {
            return None;
        }
        let id = self.allocate();
        let item = factory.make_item(id, label, pos)?;
        self.items.insert(id, item);
        Some(id)
    }

    pub fn spawn_prop(&mut self, kind: PropKind, pos: Vec2, half_extents: Vec2) -> EntityId {
        let id = self.allocate();
        self.props.insert(
            id,
            Prop {
                id,
                kind,
                body: Body::new(pos, half_extents),
            },
        );
        id
    }

    /// Adds `id` to the label group `label`.
    pub fn tag(&mut self, id: EntityId, label: impl Into<String>) {
        self.groups.entry(label.into()).or_default().insert(id);
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn sprite_index(&self) -> &SpriteIndex {
        &self.groups
    }

    pub fn group(&self, label: &str) -> Option<&BTreeSet<EntityId>> {
        self.groups.get(label)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.actors.contains_key(&id)
            || self.projectiles.contains_key(&id)
            || self.items.contains_key(&id)
            || self.props.contains_key(&id)
    }

    /// Body of any live entity.
    pub fn body(&self, id: EntityId) -> Option<&Body> {
        self.actors
            .get(&id)
            .map(|a| &a.body)
            .or_else(|| self.projectiles.get(&id).map(|p| &p.body))
            .or_else(|| self.items.get(&id).map(|i| &i.body))
            .or_else(|| self.props.get(&id).map(|p| &p.body))
    }

    pub fn actor(&self, id: EntityId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut Actor> {
        self.actors.get_mut(&id)
    }

    /// Final snapshot of an actor that has been killed.
    pub fn departed(&self, id: EntityId) -> Option<&Actor> {
        self.departed.get(&id)
    }

    pub fn player_id(&self) -> Option<EntityId> {
        self.player
    }

    pub fn player(&self) -> Option<&Actor> {
        self.player.and_then(|id| self.actors.get(&id))
    }

    pub fn player_mut(&mut self) -> Option<&mut Actor> {
        self.player.and_then(|id| self.actors.get_mut(&id))
    }

    /// Ids of live actors in spawn order.
    pub fn actor_ids(&self) -> Vec<EntityId> {
        self.actors.keys().copied().collect()
    }

    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.values()
    }

    pub fn actors_mut(&mut self) -> impl Iterator<Item = &mut Actor> {
        self.actors.values_mut()
    }

    pub fn projectiles(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.values()
    }

    pub fn projectiles_mut(&mut self) -> impl Iterator<Item = &mut Projectile> {
        self.projectiles.values_mut()
    }

    pub fn items(&self) -> impl Iterator<Item = &WorldItem> {
        self.items.values()
    }

    pub fn props(&self) -> impl Iterator<Item = &Prop> {
        self.props.values()
    }

    pub fn decals(&self) -> &[Decal] {
        &self.decals
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Removes an entity from its registry and from every label group.
    ///
    /// Killed actors are kept as departed snapshots. Returns `false` if the
    /// entity was not alive.
    pub fn kill(&mut self, id: EntityId) -> bool {
        let removed = if let Some(actor) = self.actors.remove(&id) {
            self.departed.insert(id, actor);
            true
        } else {
            self.projectiles.remove(&id).is_some()
                || self.items.remove(&id).is_some()
                || self.props.remove(&id).is_some()
        };

        if removed {
            for members in self.groups.values_mut() {
                members.remove(&id);
            }
        }
        removed
    }

    /// Nearest live actor of a faction opposing `id`'s, ties going to the
    /// earliest spawned.
    pub fn nearest_opponent(&self, id: EntityId) -> Option<&Actor> {
        let actor = self.actors.get(&id).or_else(|| self.departed.get(&id))?;
        let pos = actor.body.pos;
        let faction = actor.faction;

        self.actors
            .values()
            .filter(|other| other.id != id && faction.opposes(other.faction))
            .fold(None, |best: Option<&Actor>, other| match best {
                Some(best) if best.body.pos.distance(pos) <= other.body.pos.distance(pos) => {
                    Some(best)
                }
                _ => Some(other),
            })
    }

    /// Removes an item from the world, handing it to the caller.
    pub fn take_item(&mut self, id: EntityId) -> Option<WorldItem> {
        let item = self.items.remove(&id)?;
        for members in self.groups.values_mut() {
            members.remove(&id);
        }
        Some(item)
    }

    /// Runs `f` with a behavior context for actor `id`.
    ///
    /// Live actors are looked up first, then departed snapshots. The target
    /// is the nearest opposing actor, which for enemies is the player.
    /// Returns `None` if no such actor ever existed.
    pub fn with_actor_context<R>(
        &mut self,
        id: EntityId,
        frame: &mut Frame<'_>,
        commands: &mut Commands,
        f: impl FnOnce(&mut ActorContext<'_>) -> R,
    ) -> Option<R> {
        let target = self.nearest_opponent(id).map(|opponent| opponent.body);

        let actor = match self.actors.get_mut(&id) {
            Some(actor) => actor,
            None => self.departed.get_mut(&id)?,
        };

        let mut ctx = ActorContext {
            actor,
            target,
            clock: frame.clock,
            rng: &mut *frame.rng,
            commands,
            config: frame.config,
        };
        Some(f(&mut ctx))
    }

    /// Applies queued commands in order.
    pub fn apply(
        &mut self,
        commands: &mut Commands,
        items: &dyn ItemFactory,
        audio: &mut dyn AudioSink,
    ) -> ApplyReport {
        let mut report = ApplyReport::default();

        for command in commands.drain() {
            match command {
                Command::Launch(launch) => {
                    self.spawn_projectile(launch);
                    report.spawned += 1;
                }
                Command::DropItem { label, pos } => {
                    if self.spawn_item(items, &label, pos).is_some() {
                        report.spawned += 1;
                    } else {
                        tracing::warn!("dropped request for unknown item '{}'", label);
                        report.dropped += 1;
                    }
                }
                Command::Kill(id) => {
                    if self.kill(id) {
                        report.killed += 1;
                    }
                }
                Command::PlaySound(sound) => audio.play_sound(&sound),
                Command::Decal { image, pos } => self.decals.push(Decal { image, pos }),
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActorTemplate, ItemCatalog, ItemDefinition, ProjectileSpec};

    struct Silence;
    impl AudioSink for Silence {
        fn play_sound(&mut self, _: &str) {}
    }

    fn zombie(id: EntityId, faction: Faction) -> Actor {
        let template = ActorTemplate {
            faction,
            health: 20,
            energy: 0,
            speed: 50.0,
            half_extent: 16.0,
            attack: 2,
            behavior: None,
            mods: Vec::new(),
            skills: Default::default(),
        };
        Actor::from_template(id, "zombie", &template, Vec2::ZERO, Vec::new())
    }

    #[test]
    fn first_player_faction_actor_becomes_player() {
        let mut world = World::new();
        let enemy = world.spawn_actor(|id| zombie(id, Faction::Enemy));
        let player = world.spawn_actor(|id| zombie(id, Faction::Player));
        world.spawn_actor(|id| zombie(id, Faction::Player));

        assert_eq!(world.player_id(), Some(player));
        assert_ne!(enemy, player);
        assert_eq!(world.actor_ids().len(), 3);
    }

    #[test]
    fn kill_removes_from_every_group() {
        let mut world = World::new();
        let id = world.spawn_actor(|id| zombie(id, Faction::Enemy));
        world.tag(id, "horde");
        world.tag(id, "boss");

        assert!(world.kill(id));
        assert!(!world.contains(id));
        assert!(world.group("horde").unwrap().is_empty());
        assert!(world.group("boss").unwrap().is_empty());
        assert!(world.departed(id).is_some());
        assert!(!world.kill(id));
    }

    #[test]
    fn target_is_nearest_opposing_actor() {
        let mut world = World::new();
        let player = world.spawn_actor(|id| zombie(id, Faction::Player));
        let far = world.spawn_actor(|id| {
            let mut actor = zombie(id, Faction::Enemy);
            actor.body.pos = Vec2::new(300.0, 0.0);
            actor
        });
        let near = world.spawn_actor(|id| {
            let mut actor = zombie(id, Faction::Enemy);
            actor.body.pos = Vec2::new(0.0, 100.0);
            actor
        });

        assert_eq!(world.nearest_opponent(player).map(|a| a.id), Some(near));
        assert_eq!(world.nearest_opponent(far).map(|a| a.id), Some(player));

        world.kill(near);
        assert_eq!(world.nearest_opponent(player).map(|a| a.id), Some(far));
    }

    #[test]
    fn apply_runs_commands_in_order() {
        let mut world = World::new();
        let id = world.spawn_actor(|id| zombie(id, Faction::Enemy));
        let catalog = ItemCatalog::new(vec![ItemDefinition {
            label: "health_pack".into(),
            image: None,
            grants_mod: None,
        }])
        .unwrap();

        let mut commands = Commands::new();
        commands.push(Command::Launch(ProjectileLaunch {
            spec: ProjectileSpec::bullet(100.0, 1, 500),
            faction: Faction::Enemy,
            origin: Vec2::ZERO,
            direction: 0.0,
            launched_at: 0,
        }));
        commands.push(Command::DropItem {
            label: "health_pack".into(),
            pos: Vec2::new(1.0, 1.0),
        });
        commands.push(Command::DropItem {
            label: "mystery".into(),
            pos: Vec2::ZERO,
        });
        commands.push(Command::Kill(id));
        commands.push(Command::Decal {
            image: "splat".into(),
            pos: Vec2::ZERO,
        });

        let report = world.apply(&mut commands, &catalog, &mut Silence);

        assert_eq!(
            report,
            ApplyReport {
                spawned: 2,
                killed: 1,
                dropped: 1
            }
        );
        assert!(commands.is_empty());
        assert_eq!(world.projectiles().count(), 1);
        assert_eq!(world.items().count(), 1);
        assert_eq!(world.decals().len(), 1);
        assert!(world.actor(id).is_none());
    }
}
