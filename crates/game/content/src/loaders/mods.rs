//! Mod (ability) loader.

use std::path::Path;

use game_core::Ability;

use crate::loaders::{LoadResult, ensure_unique, read_file};

/// Loader for mods from RON files.
pub struct ModLoader;

impl ModLoader {
    /// Load mods from a RON file.
    ///
    /// RON format: `Vec<Ability>`. Labels must be unique; a mod's label is
    /// also its cooldown key.
    pub fn load(path: &Path) -> LoadResult<Vec<Ability>> {
        let content = read_file(path)?;
        let mods: Vec<Ability> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse mods RON: {}", e))?;

        ensure_unique("mod", mods.iter().map(|m| m.label.as_str()))?;
        for ability in &mods {
            if ability.uses == Some(0) {
                anyhow::bail!("Mod '{}' is declared with zero uses", ability.label);
            }
        }

        Ok(mods)
    }
}
