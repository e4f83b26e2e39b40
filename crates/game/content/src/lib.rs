//! Data-driven content definitions and loaders.
//!
//! This crate reads authored game data from RON/TOML files:
//! - Enemy behaviors (state tables of conditions and effects)
//! - Actor templates, including the player
//! - Mods (equippable abilities)
//! - Item catalogs
//! - Dungeon levels (entity placements)
//! - The quest graph
//! - Game configuration
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.
//! Cross-file references (behaviors naming items, templates naming mods) are
//! validated by the runtime when it assembles the content.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ActorLoader, BehaviorLoader, ConfigLoader, ContentFactory, ItemLoader, LevelLoader,
    LoadResult, ModLoader, QuestLoader, QuestSpec,
};
