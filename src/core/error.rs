use std::path::PathBuf;

use super::player::PlayerId;

/// Rejected moderator input.
///
/// Every variant is caller-correctable: the engine validates before it
/// mutates, so a returned error means the game state is exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("player count must be between {min} and {max}, got {count}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    #[error("no such player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("unrecognized role: {0:?}")]
    InvalidRole(String),

    #[error("cannot {action} during {phase}")]
    ActionOutOfPhase { action: &'static str, phase: String },

    #[error("{0} is not alive")]
    TargetNotAlive(PlayerId),

    #[error("{0} is not alive and cannot vote")]
    VoterNotAlive(PlayerId),

    #[error("the witch's {0} potion has already been used")]
    PotionUnavailable(&'static str),

    #[error("nobody was attacked tonight, there is no one to save")]
    NoTargetToSave,

    #[error("no night target has been selected")]
    NoTargetSelected,

    #[error("cannot reassign {0}: roles are locked once night has started")]
    DuplicateRoleAssignmentAfterNightStart(PlayerId),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
