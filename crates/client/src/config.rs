//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Settings of a headless quest run.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `quest.ron` and the other content files.
    pub data_dir: PathBuf,
    /// Directory for the log file; stderr only when `None`.
    pub log_dir: Option<PathBuf>,
    /// Upper bound on simulated frames before giving up.
    pub max_frames: u64,
    /// Option picked at every menu.
    pub choice: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"),
            log_dir: None,
            max_frames: 20_000,
            choice: 0,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ZOMBIE_DATA_DIR` - Content directory (default: the bundled `data/`)
    /// - `ZOMBIE_LOG_DIR` - Also write logs to `zombie-quest.log` here
    /// - `ZOMBIE_MAX_FRAMES` - Frame budget (default: 20000)
    /// - `ZOMBIE_CHOICE` - Menu option to pick (default: 0)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("ZOMBIE_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.log_dir = env::var("ZOMBIE_LOG_DIR").ok().map(PathBuf::from);
        if let Some(frames) = read_env::<u64>("ZOMBIE_MAX_FRAMES") {
            config.max_frames = frames.max(1);
        }
        if let Some(choice) = read_env::<usize>("ZOMBIE_CHOICE") {
            config.choice = choice;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
