//! Item catalog loader.

use std::path::Path;

use game_core::{ItemCatalog, ItemDefinition};

use crate::loaders::{LoadResult, read_file};

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// RON format: `Vec<ItemDefinition>`
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        let items: Vec<ItemDefinition> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        ItemCatalog::new(items).map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }
}
