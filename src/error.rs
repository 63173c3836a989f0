use std::path::PathBuf;

use crate::board::Pos;

/// Errors returned by board mutations.
///
/// All of them are recoverable: the board is left untouched when one is
/// returned, so the caller may surface a message or simply ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("position ({}, {}) is outside the {size}x{size} board", .pos.row, .pos.col)]
    OutOfBounds { pos: Pos, size: usize },

    #[error("position ({}, {}) is already occupied", .pos.row, .pos.col)]
    CellOccupied { pos: Pos },

    #[error("game is already finished")]
    GameAlreadyFinished,

    #[error("no moves to undo")]
    NoMovesToUndo,
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

/// Returned when a difficulty name is not one of easy, medium or hard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::OutOfBounds {
            pos: Pos::new(15, 3),
            size: 15,
        };
        assert_eq!(err.to_string(), "position (15, 3) is outside the 15x15 board");

        let err = BoardError::CellOccupied { pos: Pos::new(7, 7) };
        assert_eq!(err.to_string(), "position (7, 7) is already occupied");

        assert_eq!(BoardError::NoMovesToUndo.to_string(), "no moves to undo");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board_size must be in 5..=26".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board_size must be in 5..=26"
        );
    }

    #[test]
    fn test_parse_difficulty_error_display() {
        let err = ParseDifficultyError("expert".to_string());
        assert_eq!(
            err.to_string(),
            "unknown difficulty 'expert' (expected easy, medium or hard)"
        );
    }
}
