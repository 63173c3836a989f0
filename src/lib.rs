//! Gomoku engine with a tiered heuristic AI
//!
//! Free-style gomoku on a square board (15x15 by default):
//! - Black moves first
//! - Five or more in a row wins, on any of the four axes
//! - No captures, no forbidden moves
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board state machine with move history and undo
//! - [`rules`]: Win detection
//! - [`eval`]: Line-pattern detectors and position scoring
//! - [`search`]: Single-ply threat scans and move selection
//! - [`engine`]: The [`Agent`] and its difficulty cascades
//! - [`config`]: TOML game settings
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Agent, Board, Difficulty, Pos, Stone};
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7)).unwrap();
//!
//! // AI responds as White
//! let agent = Agent::new(Stone::White, Difficulty::Medium);
//! if let Some(pos) = agent.choose_move(&board) {
//!     board.place_stone(pos).unwrap();
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Decision Priority
//!
//! Every tier plays a winning move first and blocks the opponent's winning
//! move second. What follows depends on the tier:
//! 1. Easy: cap forming lines, otherwise a weighted random cell near play
//! 2. Medium: make or block open fours, make open threes, cap forming lines,
//!    otherwise the best-scoring cell
//! 3. Hard: make or block open fours and double-threes, make or block open
//!    threes, otherwise the best-scoring cell under a richer score

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::GameConfig;
pub use engine::{Agent, Difficulty, MoveResult, SearchType};
pub use error::{BoardError, ConfigError, ParseDifficultyError};
