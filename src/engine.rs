//! Tiered move-selection agent
//!
//! Each difficulty is an ordered list of strategy steps. The agent runs the
//! steps of its tier in order and plays the first move one of them returns;
//! a tier that runs out of steps hands over to the next easier tier:
//!
//! 1. **Easy**: win, block a win, block a forming line, weighted random pick
//! 2. **Medium**: win, block a win, open fours and threes both ways, block a
//!    forming line, best medium score
//! 3. **Hard**: win, block a win, open four or double-three both ways, open
//!    threes both ways, best hard score
//!
//! # Example
//!
//! ```
//! use gomoku::{Agent, Board, Difficulty, Pos, Stone};
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7)).unwrap();
//!
//! let agent = Agent::new(Stone::White, Difficulty::Hard);
//! let result = agent.analyze(&board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use rand::RngCore;
use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::error::ParseDifficultyError;
use crate::eval::{evaluate_position_hard, evaluate_position_medium};
use crate::search::{
    best_by_score, find_advanced_threat_move, find_open_four_move, find_open_three_move,
    find_threat_block, find_winning_move, weighted_pick,
};

/// Playing strength of an [`Agent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Every tier, weakest first
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Tier consulted when this one's steps all come up empty
    pub fn fallback(self) -> Option<Difficulty> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(Difficulty::Easy),
            Difficulty::Hard => Some(Difficulty::Medium),
        }
    }

    fn cascade(self) -> &'static [Step] {
        match self {
            Difficulty::Easy => EASY,
            Difficulty::Medium => MEDIUM,
            Difficulty::Hard => HARD,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Cascade step that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Completes five for the agent
    ImmediateWin,
    /// Occupies the cell where the opponent would complete five
    BlockWin,
    /// Makes an open four
    OpenFour,
    /// Occupies the cell where the opponent would make an open four
    BlockOpenFour,
    /// Makes an open four or a double-three
    AdvancedThreat,
    /// Occupies the cell where the opponent would make an open four or a
    /// double-three
    BlockAdvancedThreat,
    /// Makes an open three
    OpenThree,
    /// Occupies the cell where the opponent would make an open three
    BlockOpenThree,
    /// Caps an opponent line of two or more that is still open
    BlockThreat,
    /// Weighted random cell near the stones
    WeightedRandom,
    /// Highest tier score over every empty cell
    BestScore,
    /// First empty cell in row-major order
    FirstEmpty,
}

/// Strategy run by one step, given the scratch board and the agent's color
type Strategy = fn(&mut Board, Stone, &mut dyn RngCore) -> Option<Pos>;

type Step = (SearchType, Strategy);

const EASY: &[Step] = &[
    (SearchType::ImmediateWin, own_win),
    (SearchType::BlockWin, block_win),
    (SearchType::BlockThreat, block_threat),
    (SearchType::WeightedRandom, weighted_random),
    (SearchType::FirstEmpty, first_empty),
];

const MEDIUM: &[Step] = &[
    (SearchType::ImmediateWin, own_win),
    (SearchType::BlockWin, block_win),
    (SearchType::OpenFour, own_open_four),
    (SearchType::BlockOpenFour, block_open_four),
    (SearchType::OpenThree, own_open_three),
    (SearchType::BlockThreat, block_threat),
    (SearchType::BestScore, best_medium),
];

const HARD: &[Step] = &[
    (SearchType::ImmediateWin, own_win),
    (SearchType::BlockWin, block_win),
    (SearchType::AdvancedThreat, own_advanced_threat),
    (SearchType::BlockAdvancedThreat, block_advanced_threat),
    (SearchType::OpenThree, own_open_three),
    (SearchType::BlockOpenThree, block_open_three),
    (SearchType::BestScore, best_hard),
];

fn own_win(board: &mut Board, color: Stone, _: &mut dyn RngCore) -> Option<Pos> {
    find_winning_move(board, color)
}

fn block_win(board: &mut Board, color: Stone, _: &mut dyn RngCore) -> Option<Pos> {
    find_winning_move(board, color.opponent())
}

fn own_open_four(board: &mut Board, color: Stone, _: &mut dyn RngCore) -> Option<Pos> {
    find_open_four_move(board, color)
}

fn block_open_four(board: &mut Board, color: Stone, _: &mut dyn RngCore) -> Option<Pos> {
    find_open_four_move(board, color.opponent())
}

fn own_open_three(board: &mut Board, color: Stone, _: &mut dyn RngCore) -> Option<Pos> {
    find_open_three_move(board, color)
}

fn block_open_three(board: &mut Board, color: Stone, _: &mut dyn RngCore) -> Option<Pos> {
    find_open_three_move(board, color.opponent())
}

fn own_advanced_threat(board: &mut Board, color: Stone, _: &mut dyn RngCore) -> Option<Pos> {
    find_advanced_threat_move(board, color)
}

fn block_advanced_threat(board: &mut Board, color: Stone, _: &mut dyn RngCore) -> Option<Pos> {
    find_advanced_threat_move(board, color.opponent())
}

fn block_threat(board: &mut Board, color: Stone, _: &mut dyn RngCore) -> Option<Pos> {
    find_threat_block(board, color.opponent())
}

fn weighted_random(board: &mut Board, color: Stone, rng: &mut dyn RngCore) -> Option<Pos> {
    weighted_pick(board, color, rng)
}

fn best_medium(board: &mut Board, color: Stone, _: &mut dyn RngCore) -> Option<Pos> {
    best_by_score(board, color, evaluate_position_medium).map(|(pos, _)| pos)
}

fn best_hard(board: &mut Board, color: Stone, _: &mut dyn RngCore) -> Option<Pos> {
    best_by_score(board, color, evaluate_position_hard).map(|(pos, _)| pos)
}

fn first_empty(board: &mut Board, _: Stone, _: &mut dyn RngCore) -> Option<Pos> {
    board.empty_cells().next()
}

/// Outcome of one [`Agent::analyze`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen cell, `None` only when the board is full
    pub best_move: Option<Pos>,
    /// Step that produced the move
    pub search_type: Option<SearchType>,
    /// Tier whose cascade the step belongs to, after any fallback
    pub difficulty: Difficulty,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Computer player for one color.
///
/// Stateless across calls: every decision works on a private copy of the
/// board it is handed, so the caller's board is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent {
    player: Stone,
    difficulty: Difficulty,
}

impl Agent {
    /// # Panics
    ///
    /// Panics if `player` is [`Stone::Empty`].
    #[must_use]
    pub fn new(player: Stone, difficulty: Difficulty) -> Self {
        assert!(player != Stone::Empty, "agent must play a color");
        Self { player, difficulty }
    }

    #[inline]
    pub fn player(&self) -> Stone {
        self.player
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Pick a move for this agent's color, using the thread-local RNG for the
    /// easy tier's random draw.
    #[must_use]
    pub fn choose_move(&self, board: &Board) -> Option<Pos> {
        self.choose_move_with_rng(board, &mut rand::rng())
    }

    /// Same as [`Agent::choose_move`] with a caller-supplied RNG. A seeded
    /// `StdRng` makes every tier fully reproducible.
    #[must_use]
    pub fn choose_move_with_rng(&self, board: &Board, rng: &mut dyn RngCore) -> Option<Pos> {
        self.analyze_with_rng(board, rng).best_move
    }

    /// Pick a move and report which cascade step produced it.
    #[must_use]
    pub fn analyze(&self, board: &Board) -> MoveResult {
        self.analyze_with_rng(board, &mut rand::rng())
    }

    #[must_use]
    pub fn analyze_with_rng(&self, board: &Board, rng: &mut dyn RngCore) -> MoveResult {
        let start = Instant::now();
        let mut scratch = board.clone();

        let mut tier = Some(self.difficulty);
        while let Some(difficulty) = tier {
            for &(search_type, strategy) in difficulty.cascade() {
                if let Some(pos) = strategy(&mut scratch, self.player, rng) {
                    let time_ms = start.elapsed().as_millis() as u64;
                    debug!(
                        player = self.player.name(),
                        %difficulty,
                        step = ?search_type,
                        row = pos.row,
                        col = pos.col,
                        time_ms,
                        "cascade step chose move"
                    );
                    return MoveResult {
                        best_move: Some(pos),
                        search_type: Some(search_type),
                        difficulty,
                        time_ms,
                    };
                }
            }
            debug!(%difficulty, "cascade exhausted");
            tier = difficulty.fallback();
        }

        MoveResult {
            best_move: None,
            search_type: None,
            difficulty: self.difficulty,
            time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
