//! Dungeon level loader.

use std::path::Path;

use game_core::{LevelSpec, PlacementKind};

use crate::loaders::{LoadResult, read_file};

/// Loader for dungeon levels from RON files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load a level from a RON file.
    ///
    /// RON format: `LevelSpec`. Template and item names are resolved when
    /// the level is played.
    pub fn load(path: &Path) -> LoadResult<LevelSpec> {
        let content = read_file(path)?;
        let level: LevelSpec = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level RON at {}: {}", path.display(), e))?;

        for placement in &level.placements {
            if let PlacementKind::Wall { half_extents } | PlacementKind::Zone { half_extents } =
                placement.kind
            {
                if half_extents.x <= 0.0 || half_extents.y <= 0.0 {
                    anyhow::bail!(
                        "{}: prop at ({}, {}) has a degenerate extent",
                        path.display(),
                        placement.pos.x,
                        placement.pos.y
                    );
                }
            }
        }

        Ok(level)
    }
}
