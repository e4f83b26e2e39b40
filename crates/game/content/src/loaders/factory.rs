//! Content factory for loading every data file of a game.

use std::path::{Path, PathBuf};

use game_core::{
    Ability, ActorTemplate, BehaviorSpec, GameConfig, ItemCatalog, LevelSpec, QuestGraph,
};

use crate::loaders::{
    ActorLoader, BehaviorLoader, ConfigLoader, ItemLoader, LevelLoader, LoadResult, ModLoader,
    QuestLoader,
};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── behaviors.ron
/// ├── actors.ron
/// ├── mods.ron
/// ├── items.ron
/// ├── quest.ron
/// └── levels/
///     ├── mall.ron
///     └── rooftop.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!("no config.toml in {}, using defaults", self.data_dir.display());
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load behavior specs from `behaviors.ron`.
    pub fn load_behaviors(&self) -> LoadResult<Vec<(String, BehaviorSpec)>> {
        BehaviorLoader::load(&self.data_dir.join("behaviors.ron"))
    }

    /// Load actor templates from `actors.ron`.
    pub fn load_actors(&self) -> LoadResult<Vec<(String, ActorTemplate)>> {
        ActorLoader::load(&self.data_dir.join("actors.ron"))
    }

    /// Load mods from `mods.ron`.
    pub fn load_mods(&self) -> LoadResult<Vec<Ability>> {
        ModLoader::load(&self.data_dir.join("mods.ron"))
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load a level from `levels/{level_name}.ron`.
    pub fn load_level(&self, level_name: &str) -> LoadResult<LevelSpec> {
        let path = self
            .data_dir
            .join("levels")
            .join(format!("{}.ron", level_name));
        LevelLoader::load(&path)
    }

    /// Load and validate the quest graph from `quest.ron`.
    pub fn load_quest(&self) -> LoadResult<QuestGraph> {
        QuestLoader::load(&self.data_dir.join("quest.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
        assert!(factory.load_quest().is_err());
    }

    #[test]
    fn levels_resolve_under_levels_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("levels")).unwrap();
        std::fs::write(dir.path().join("levels/yard.ron"), "(placements: [])").unwrap();

        let factory = ContentFactory::new(dir.path());
        assert!(factory.load_level("yard").unwrap().placements.is_empty());
        assert!(factory.load_level("roof").is_err());
    }
}
