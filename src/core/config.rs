//! Game configuration.
//!
//! Tables configure the engine at startup through builder methods or a TOML
//! file. Every field has a default, so an empty file is a valid config:
//!
//! ```toml
//! discussion_seconds = 300
//! min_players = 6
//! max_players = 10
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default length of the day discussion, in seconds.
pub const DEFAULT_DISCUSSION_SECONDS: u32 = 600;

/// Smallest table the engine supports.
pub const MIN_PLAYERS: usize = 6;

/// Largest table the engine supports.
pub const MAX_PLAYERS: usize = 12;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Countdown loaded at the start of every day discussion.
    pub discussion_seconds: u32,

    /// Fewest players `initialize_game` accepts.
    pub min_players: usize,

    /// Most players `initialize_game` accepts.
    pub max_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            discussion_seconds: DEFAULT_DISCUSSION_SECONDS,
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the discussion countdown.
    #[must_use]
    pub fn with_discussion_seconds(mut self, seconds: u32) -> Self {
        self.discussion_seconds = seconds;
        self
    }

    /// Narrow the accepted table size. Anything outside 6..=12 fails
    /// [`validate`](Self::validate).
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.discussion_seconds == 0 {
            return Err(ConfigError::Validation(
                "discussion_seconds must be > 0".into(),
            ));
        }
        if self.min_players < MIN_PLAYERS || self.max_players > MAX_PLAYERS {
            return Err(ConfigError::Validation(format!(
                "player range must lie within {MIN_PLAYERS}..={MAX_PLAYERS}"
            )));
        }
        if self.min_players > self.max_players {
            return Err(ConfigError::Validation(
                "min_players must not exceed max_players".into(),
            ));
        }
        Ok(())
    }

    /// Is `count` an acceptable table size? Never outside 6..=12, whatever
    /// the configured range says.
    #[must_use]
    pub fn accepts_player_count(&self, count: usize) -> bool {
        let min = self.min_players.max(MIN_PLAYERS);
        let max = self.max_players.min(MAX_PLAYERS);
        (min..=max).contains(&count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.discussion_seconds, 600);
        assert!(config.accepts_player_count(6));
        assert!(config.accepts_player_count(12));
        assert!(!config.accepts_player_count(5));
        assert!(!config.accepts_player_count(13));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_discussion_seconds(90)
            .with_player_range(8, 10);

        assert_eq!(config.discussion_seconds, 90);
        assert!(!config.accepts_player_count(7));
        assert!(config.accepts_player_count(9));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_config_stays_bounded() {
        let config = GameConfig::new().with_player_range(2, 300);
        assert!(config.validate().is_err());
        assert!(!config.accepts_player_count(3));
        assert!(!config.accepts_player_count(13));
        assert!(!config.accepts_player_count(300));
        assert!(config.accepts_player_count(6));
        assert!(config.accepts_player_count(12));
    }

    #[test]
    fn test_from_toml_partial() {
        let config = GameConfig::from_toml_str("discussion_seconds = 120\n").unwrap();
        assert_eq!(config.discussion_seconds, 120);
        assert_eq!(config.min_players, MIN_PLAYERS);
        assert_eq!(config.max_players, MAX_PLAYERS);
    }

    #[test]
    fn test_from_toml_empty() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_validation_errors() {
        let err = GameConfig::from_toml_str("discussion_seconds = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = GameConfig::from_toml_str("min_players = 4").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = GameConfig::from_toml_str("min_players = 10\nmax_players = 8").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = GameConfig::from_toml_str("discussion_seconds = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let path = Path::new("definitely/not/here/werewolf.toml");
        let config = GameConfig::load_or_default(path).unwrap();
        assert_eq!(config, GameConfig::default());

        let err = GameConfig::load(path).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
