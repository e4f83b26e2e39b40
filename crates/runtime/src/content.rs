//! Validated, shareable game content.
//!
//! Loaders produce independent files; [`ContentBundle`] cross-checks them
//! (behaviors against items, templates against behaviors and mods, levels
//! against templates and items) and turns behavior specs into shared
//! [`Behavior`]s. Scenes and controllers only ever see a bundle that passed
//! these checks.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use game_content::ContentFactory;
use game_core::{
    Ability, Actor, ActorTemplate, Behavior, BehaviorSpec, ConfigError, EntityId, GameConfig,
    HumanoidData, ItemCatalog, ItemFactory, LevelSpec, ModSlot, PlacementKind, QuestGraph,
    SceneSpec, Vec2, World,
};

use crate::{Result, RuntimeError};

/// Raw content as read from disk.
#[derive(Clone, Debug, Default)]
pub struct ContentParts {
    pub config: GameConfig,
    pub behaviors: Vec<(String, BehaviorSpec)>,
    pub templates: Vec<(String, ActorTemplate)>,
    pub mods: Vec<Ability>,
    pub items: ItemCatalog,
    pub levels: Vec<(String, LevelSpec)>,
}

#[derive(Debug)]
pub struct ContentBundle {
    config: GameConfig,
    behaviors: BTreeMap<String, Arc<Behavior>>,
    templates: BTreeMap<String, ActorTemplate>,
    mods: BTreeMap<String, Arc<Ability>>,
    items: ItemCatalog,
    levels: BTreeMap<String, LevelSpec>,
}

impl ContentBundle {
    /// Template name of the player character.
    pub const PLAYER: &'static str = "player";

    /// Validates and assembles content.
    ///
    /// # Errors
    ///
    /// Any dangling reference between files, a malformed behavior, or a
    /// missing player template.
    pub fn new(parts: ContentParts) -> Result<Self> {
        let ContentParts {
            config,
            behaviors: behavior_specs,
            templates: template_list,
            mods: mod_list,
            items,
            levels: level_list,
        } = parts;

        let mut mods = BTreeMap::new();
        for ability in mod_list {
            let label = ability.label.clone();
            if mods.insert(label.clone(), Arc::new(ability)).is_some() {
                return Err(ConfigError::DuplicateLabel { kind: "mod", label }.into());
            }
        }

        for (item, label) in items_granting_mods(&items) {
            if !mods.contains_key(&label) {
                return Err(ConfigError::UnknownMod { owner: item, label }.into());
            }
        }

        let mut behaviors = BTreeMap::new();
        for (name, spec) in &behavior_specs {
            let behavior = Behavior::from_spec(name.clone(), spec, &items)?;
            if behaviors.insert(name.clone(), Arc::new(behavior)).is_some() {
                return Err(ConfigError::DuplicateLabel {
                    kind: "behavior",
                    label: name.clone(),
                }
                .into());
            }
        }

        let mut templates = BTreeMap::new();
        for (name, template) in template_list {
            validate_template(&name, &template, &behaviors, &mods)?;
            if templates.contains_key(&name) {
                return Err(ConfigError::DuplicateLabel {
                    kind: "actor template",
                    label: name,
                }
                .into());
            }
            templates.insert(name, template);
        }
        if !templates.contains_key(Self::PLAYER) {
            return Err(ConfigError::UnknownTemplate {
                template: Self::PLAYER.to_string(),
            }
            .into());
        }

        let mut levels = BTreeMap::new();
        for (name, level) in level_list {
            validate_level(&name, &level, &templates, &items)?;
            levels.insert(name, level);
        }

        tracing::debug!(
            behaviors = behaviors.len(),
            templates = templates.len(),
            mods = mods.len(),
            items = items.len(),
            levels = levels.len(),
            "content bundle assembled"
        );

        Ok(Self {
            config,
            behaviors,
            templates,
            mods,
            items,
            levels,
        })
    }

    /// Loads every file under the factory's data directory, plus the level
    /// of each dungeon scene in `graph`.
    pub fn load(factory: &ContentFactory, graph: &QuestGraph) -> Result<Self> {
        let mut level_names = BTreeSet::new();
        for label in graph.labels() {
            if let Some(SceneSpec::Dungeon { level, .. }) = graph.scene(label) {
                level_names.insert(level.clone());
            }
        }

        let mut levels = Vec::new();
        for name in level_names {
            let level = loaded(factory, &format!("level '{}'", name), factory.load_level(&name))?;
            levels.push((name, level));
        }

        let bundle = Self::new(ContentParts {
            config: loaded(factory, "config", factory.load_config())?,
            behaviors: loaded(factory, "behaviors", factory.load_behaviors())?,
            templates: loaded(factory, "actor templates", factory.load_actors())?,
            mods: loaded(factory, "mods", factory.load_mods())?,
            items: loaded(factory, "items", factory.load_items())?,
            levels,
        })?;
        bundle.check_quest(graph)?;
        Ok(bundle)
    }

    /// Ensures every dungeon scene of `graph` plays a known level and every
    /// turn-based scene fights known templates.
    pub fn check_quest(&self, graph: &QuestGraph) -> Result<()> {
        for label in graph.labels() {
            match graph.scene(label) {
                Some(SceneSpec::Dungeon { level, .. }) if !self.levels.contains_key(level) => {
                    return Err(RuntimeError::UnknownLevel {
                        scene: label.to_string(),
                        level: level.clone(),
                    });
                }
                Some(SceneSpec::TurnBased { enemies }) => {
                    if let Some(unknown) = enemies
                        .iter()
                        .find(|name| !self.templates.contains_key(name.as_str()))
                    {
                        return Err(ConfigError::UnknownTemplate {
                            template: unknown.clone(),
                        }
                        .into());
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn behavior(&self, name: &str) -> Option<&Arc<Behavior>> {
        self.behaviors.get(name)
    }

    pub fn template(&self, name: &str) -> Option<&ActorTemplate> {
        self.templates.get(name)
    }

    pub fn player_template(&self) -> &ActorTemplate {
        &self.templates[Self::PLAYER]
    }

    pub fn ability(&self, label: &str) -> Option<&Arc<Ability>> {
        self.mods.get(label)
    }

    pub fn items(&self) -> &ItemCatalog {
        &self.items
    }

    pub fn level(&self, name: &str) -> Option<&LevelSpec> {
        self.levels.get(name)
    }

    /// Fresh slots for the given mod labels, each with its full use count.
    pub fn mod_slots(&self, labels: &[String]) -> std::result::Result<Vec<ModSlot>, ConfigError> {
        labels
            .iter()
            .map(|label| {
                self.mods
                    .get(label)
                    .map(|ability| ModSlot::new(Arc::clone(ability)))
                    .ok_or_else(|| ConfigError::UnknownMod {
                        owner: "content".to_string(),
                        label: label.clone(),
                    })
            })
            .collect()
    }

    /// Player data at the start of a quest.
    pub fn fresh_player_data(&self) -> HumanoidData {
        let template = self.player_template();
        let mods = self.mod_slots(&template.mods).unwrap_or_default();
        HumanoidData::fresh(template, mods)
    }

    /// Builds an actor from a template without placing it in a world.
    pub fn make_actor(
        &self,
        id: EntityId,
        template_name: &str,
        pos: Vec2,
    ) -> std::result::Result<Actor, ConfigError> {
        let template = self
            .template(template_name)
            .ok_or_else(|| ConfigError::UnknownTemplate {
                template: template_name.to_string(),
            })?;
        let mods = self.mod_slots(&template.mods)?;
        Ok(Actor::from_template(id, template_name, template, pos, mods))
    }

    /// Spawns an actor from a template into `world`.
    pub fn spawn_actor(
        &self,
        world: &mut World,
        template_name: &str,
        pos: Vec2,
        rot: f32,
    ) -> std::result::Result<EntityId, ConfigError> {
        // Built once with a placeholder id so errors surface before the
        // world allocates one.
        let mut actor = self.make_actor(EntityId(0), template_name, pos)?;
        actor.body.rot = rot;
        Ok(world.spawn_actor(move |id| Actor { id, ..actor }))
    }
}

fn loaded<T>(factory: &ContentFactory, what: &str, result: anyhow::Result<T>) -> Result<T> {
    result.map_err(|e| {
        RuntimeError::content(format!("{} from {}", what, factory.data_dir().display()), e)
    })
}

/// `(item, mod)` pairs for every item that grants a mod on pickup.
fn items_granting_mods(items: &ItemCatalog) -> Vec<(String, String)> {
    items
        .iter()
        .filter_map(|item| {
            item.grants_mod
                .as_ref()
                .map(|label| (item.label.clone(), label.clone()))
        })
        .collect()
}

fn validate_template(
    name: &str,
    template: &ActorTemplate,
    behaviors: &BTreeMap<String, Arc<Behavior>>,
    mods: &BTreeMap<String, Arc<Ability>>,
) -> std::result::Result<(), ConfigError> {
    for label in &template.mods {
        if !mods.contains_key(label) {
            return Err(ConfigError::UnknownMod {
                owner: name.to_string(),
                label: label.clone(),
            });
        }
    }

    let Some(behavior_name) = &template.behavior else {
        return Ok(());
    };
    let behavior = behaviors
        .get(behavior_name)
        .ok_or_else(|| ConfigError::UnknownBehavior {
            owner: name.to_string(),
            behavior: behavior_name.clone(),
        })?;

    // Behaviors equip mods by label; every actor running one must carry them.
    for label in behavior.required_mods() {
        if !template.mods.iter().any(|carried| carried == label) {
            return Err(ConfigError::UnknownMod {
                owner: name.to_string(),
                label: label.to_string(),
            });
        }
    }
    Ok(())
}

fn validate_level(
    name: &str,
    level: &LevelSpec,
    templates: &BTreeMap<String, ActorTemplate>,
    items: &ItemCatalog,
) -> Result<()> {
    for placement in &level.placements {
        match &placement.kind {
            PlacementKind::Actor(template) if !templates.contains_key(template) => {
                return Err(ConfigError::UnknownTemplate {
                    template: template.clone(),
                }
                .into());
            }
            PlacementKind::Item(item) if !items.knows(item) => {
                return Err(RuntimeError::UnknownItem {
                    level: name.to_string(),
                    item: item.clone(),
                });
            }
            _ => {}
        }
    }
    Ok(())
}
