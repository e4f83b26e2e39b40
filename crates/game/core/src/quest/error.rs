use crate::error::{ErrorSeverity, GameError};

/// Errors raised while binding resolutions or validating a quest graph.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuestError {
    #[error("resolution refers to unknown label '{label}'")]
    UnknownLabel { label: String },

    #[error("label '{label}' must name exactly one entity, found {count}")]
    AmbiguousLabel { label: String, count: usize },

    #[error("label '{label}' must name an actor")]
    NotAnActor { label: String },

    #[error("quest has no 'root' scene")]
    MissingRoot,

    #[error("scene '{label}' is declared twice")]
    DuplicateScene { label: String },

    #[error("edge {from} -> {to} refers to an unknown scene")]
    UnknownScene { from: String, to: String },

    #[error("scene '{scene}' has two edges keyed {key}")]
    DuplicateEdge { scene: String, key: usize },

    #[error("scene '{scene}' has {resolutions} resolutions but edge keys {keys:?}")]
    EdgeKeysMismatch {
        scene: String,
        resolutions: usize,
        keys: Vec<usize>,
    },
}

impl GameError for QuestError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownLabel { .. } | Self::AmbiguousLabel { .. } | Self::NotAnActor { .. } => {
                ErrorSeverity::Validation
            }
            _ => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownLabel { .. } => "UNKNOWN_LABEL",
            Self::AmbiguousLabel { .. } => "AMBIGUOUS_LABEL",
            Self::NotAnActor { .. } => "NOT_AN_ACTOR",
            Self::MissingRoot => "MISSING_ROOT",
            Self::DuplicateScene { .. } => "DUPLICATE_SCENE",
            Self::UnknownScene { .. } => "UNKNOWN_SCENE",
            Self::DuplicateEdge { .. } => "DUPLICATE_EDGE",
            Self::EdgeKeysMismatch { .. } => "EDGE_KEYS_MISMATCH",
        }
    }
}
