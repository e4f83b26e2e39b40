//! Common error infrastructure for game-core.
//!
//! Configuration problems are detected while content is turned into live
//! behaviors, resolutions, and quest graphs, and are reported through the
//! typed errors here. Once construction succeeds, simulation never fails:
//! violated preconditions at tick time are programming errors and panic.
//!
//! Quest-specific errors live in [`crate::quest`] next to the graph they
//! validate.

use state_machine::TableError;

/// Severity level of an error, used for categorization and reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: unknown label, ambiguous binding
    Validation,

    /// Content cannot be used at all.
    ///
    /// Examples: missing default state, missing root scene
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by whether the content could be fixed locally
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while building behaviors, mods, and catalogs from content.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("behavior '{behavior}': {source}")]
    StateTable {
        behavior: String,
        #[source]
        source: TableError,
    },

    #[error("duplicate {kind} label '{label}'")]
    DuplicateLabel { kind: &'static str, label: String },

    #[error("behavior '{behavior}' drops unknown item '{item}'")]
    UnknownItem { behavior: String, item: String },

    #[error("behavior '{behavior}' resets cooldown '{key}' which no condition declares")]
    UnknownCooldown { behavior: String, key: String },

    #[error("behavior '{behavior}' plays a random sound from an empty list")]
    EmptySoundList { behavior: String },

    #[error("'{owner}' references unknown mod '{label}'")]
    UnknownMod { owner: String, label: String },

    #[error("'{owner}' references unknown behavior '{behavior}'")]
    UnknownBehavior { owner: String, behavior: String },

    #[error("unknown actor template '{template}'")]
    UnknownTemplate { template: String },

    #[error("'{owner}': {reason}")]
    Invalid { owner: String, reason: String },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::StateTable { .. } => ErrorSeverity::Fatal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::StateTable { .. } => "STATE_TABLE",
            Self::DuplicateLabel { .. } => "DUPLICATE_LABEL",
            Self::UnknownItem { .. } => "UNKNOWN_ITEM",
            Self::UnknownCooldown { .. } => "UNKNOWN_COOLDOWN",
            Self::EmptySoundList { .. } => "EMPTY_SOUND_LIST",
            Self::UnknownMod { .. } => "UNKNOWN_MOD",
            Self::UnknownBehavior { .. } => "UNKNOWN_BEHAVIOR",
            Self::UnknownTemplate { .. } => "UNKNOWN_TEMPLATE",
            Self::Invalid { .. } => "INVALID",
        }
    }
}
