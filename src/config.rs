use std::path::Path;

use tracing::warn;

use crate::board::{Stone, BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::engine::Difficulty;
use crate::error::ConfigError;

/// Game settings, loadable from TOML.
///
/// ```toml
/// board_size = 15
/// difficulty = "hard"
/// human_color = "white"
/// ai_delay_ms = 300
/// seed = 42
/// log_filter = "gomoku=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board
    pub board_size: usize,
    /// Agent tier for new games
    pub difficulty: Difficulty,
    /// Color the human plays in the window; the agent takes the other one
    pub human_color: Stone,
    /// Pause before the agent replies, in milliseconds
    pub ai_delay_ms: u64,
    /// Fixed RNG seed for reproducible agent play
    pub seed: Option<u64>,
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: BOARD_SIZE,
            difficulty: Difficulty::Easy,
            human_color: Stone::Black,
            ai_delay_ms: 300,
            seed: None,
            log_filter: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Validation(format!(
                "board_size must be in {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        if self.human_color == Stone::Empty {
            return Err(ConfigError::Validation(
                "human_color must be black or white".into(),
            ));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Validation("log_filter must not be empty".into()));
        }
        Ok(())
    }

    /// Color the agent plays against the human
    #[inline]
    pub fn agent_color(&self) -> Stone {
        self.human_color.opponent()
    }
}
