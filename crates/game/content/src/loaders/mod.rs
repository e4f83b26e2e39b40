//! Content loaders for reading game data from files.
//!
//! Each loader converts one RON/TOML file into game-core types. Parse errors
//! carry the offending path.

pub mod actors;
pub mod behavior;
pub mod config;
pub mod factory;
pub mod item;
pub mod level;
pub mod mods;
pub mod quest;

pub use actors::ActorLoader;
pub use behavior::BehaviorLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use level::LevelLoader;
pub use mods::ModLoader;
pub use quest::{QuestLoader, QuestSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Rejects the first label that appears twice.
pub(crate) fn ensure_unique<'a>(
    kind: &str,
    labels: impl IntoIterator<Item = &'a str>,
) -> LoadResult<()> {
    let mut seen = std::collections::BTreeSet::new();
    for label in labels {
        if !seen.insert(label) {
            anyhow::bail!("Duplicate {} '{}'", kind, label);
        }
    }
    Ok(())
}
