//! Unified error type surfaced by the runtime API.
//!
//! Content problems found while assembling a bundle or entering a scene are
//! reported here. Simulation itself never fails once a scene has started.
use game_core::{ConfigError, ErrorSeverity, GameError, QuestError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Quest(#[from] QuestError),

    #[error("failed to load {what}")]
    Content {
        what: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("scene '{scene}' plays unknown level '{level}'")]
    UnknownLevel { scene: String, level: String },

    #[error("level '{level}' places unknown item '{item}'")]
    UnknownItem { level: String, item: String },

    #[error("quest has no scene '{label}'")]
    UnknownScene { label: String },

    #[error("level '{level}' has no player")]
    MissingPlayer { level: String },
}

impl RuntimeError {
    /// Wraps a loader failure.
    pub fn content(
        what: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Content {
            what: what.into(),
            source: source.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Config(e) => e.severity(),
            Self::Quest(e) => e.severity(),
            _ => ErrorSeverity::Fatal,
        }
    }
}
