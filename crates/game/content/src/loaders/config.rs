//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.frame_ms == 0 {
            anyhow::bail!("frame_ms must be positive in {}", path.display());
        }
        if config.skill_die == 0 {
            anyhow::bail!("skill_die must be positive in {}", path.display());
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use game_core::Vec2;

    use super::*;

    fn write(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let file = write("rng_seed = 7\nbarrel_offset = { x = 20.0, y = 0.0 }\n");
        let config = ConfigLoader::load(file.path()).unwrap();

        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.barrel_offset, Vec2::new(20.0, 0.0));
        assert_eq!(config.frame_ms, GameConfig::DEFAULT_FRAME_MS);
        assert_eq!(config.decal_offset, GameConfig::DEFAULT_DECAL_OFFSET);
    }

    #[test]
    fn rejects_zero_frame_length() {
        let file = write("frame_ms = 0\n");
        let err = ConfigLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("frame_ms"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = ConfigLoader::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/config.toml"));
    }
}
