//! Actor template loader.
//!
//! Loads the player and every enemy kind from one RON file.

use std::path::Path;

use game_core::{ActorTemplate, Faction};

use crate::loaders::{LoadResult, ensure_unique, read_file};

/// Loader for actor templates from RON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Template name of the player character.
    pub const PLAYER: &'static str = "player";

    /// Load actor templates from a RON file.
    ///
    /// RON format: `Vec<(String, ActorTemplate)>`
    ///
    /// The file must contain a player-faction template named
    /// [`PLAYER`](Self::PLAYER).
    pub fn load(path: &Path) -> LoadResult<Vec<(String, ActorTemplate)>> {
        let content = read_file(path)?;
        let actors: Vec<(String, ActorTemplate)> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse actor catalog RON: {}", e))?;

        ensure_unique("actor template", actors.iter().map(|(name, _)| name.as_str()))?;

        match actors.iter().find(|(name, _)| name == Self::PLAYER) {
            None => anyhow::bail!("{} has no '{}' template", path.display(), Self::PLAYER),
            Some((_, template)) if template.faction != Faction::Player => {
                anyhow::bail!("Template '{}' must belong to the player faction", Self::PLAYER)
            }
            Some(_) => {}
        }

        Ok(actors)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_templates_with_defaults() {
        let file = write(
            r#"[
                ("player", (faction: Player, health: 100, energy: 50, speed: 220.0,
                            mods: ["pistol"], skills: {"lockpicking": 2})),
                ("walker", (faction: Enemy, health: 30, behavior: Some("walker"))),
            ]"#,
        );
        let actors = ActorLoader::load(file.path()).unwrap();

        let (_, walker) = &actors[1];
        assert_eq!(walker.energy, 0);
        assert_eq!(walker.half_extent, ActorTemplate::DEFAULT_HALF_EXTENT);
        assert_eq!(walker.behavior.as_deref(), Some("walker"));
        assert_eq!(actors[0].1.skills.get("lockpicking"), Some(&2));
    }

    #[test]
    fn requires_a_player_template() {
        let file = write(r#"[("walker", (faction: Enemy, health: 30))]"#);
        assert!(ActorLoader::load(file.path()).is_err());

        let file = write(r#"[("player", (faction: Enemy, health: 30))]"#);
        let err = ActorLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("player faction"));
    }
}
