//! Enemy behavior loader.
//!
//! Behaviors are loaded as declarative specs. Turning a spec into a live
//! [`Behavior`](game_core::Behavior) needs the item catalog, so that step
//! happens when the runtime assembles its content bundle.

use std::path::Path;

use game_core::BehaviorSpec;

use crate::loaders::{LoadResult, ensure_unique, read_file};

/// Loader for behavior specs from RON files.
pub struct BehaviorLoader;

impl BehaviorLoader {
    /// Load behavior specs from a RON file.
    ///
    /// RON format: `Vec<(String, BehaviorSpec)>`
    ///
    /// Unknown condition or effect names are reported by the RON parser.
    pub fn load(path: &Path) -> LoadResult<Vec<(String, BehaviorSpec)>> {
        let content = read_file(path)?;
        let behaviors: Vec<(String, BehaviorSpec)> = ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse behaviors RON at {}: {}", path.display(), e)
        })?;

        ensure_unique("behavior", behaviors.iter().map(|(name, _)| name.as_str()))?;
        tracing::debug!(count = behaviors.len(), "loaded behavior specs");

        Ok(behaviors)
    }
}
