//! Game state management for the Gomoku GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::rules::find_five_line_at_pos;
use crate::{Agent, Board, BoardError, ConfigError, Difficulty, GameConfig, MoveResult, Pos, Stone};

/// Agent computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// `None` when the board filled up without a five
    pub winner: Option<Stone>,
    pub winning_line: Option<[Pos; 5]>,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.start_time = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub agent: Agent,
    pub human_color: Stone,
    pub game_over: Option<GameResult>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
    /// Tier chosen in the selector, applied by the next new game
    pub selected_difficulty: Difficulty,

    board_size: usize,
    ai_delay: Duration,
    seed: Option<u64>,
}

impl GameState {
    /// Start a session from `config`, rejecting settings that fail
    /// [`GameConfig::validate`].
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = Self {
            board: Board::with_size(config.board_size),
            agent: Agent::new(config.agent_color(), config.difficulty),
            human_color: config.human_color,
            game_over: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
            selected_difficulty: config.difficulty,
            board_size: config.board_size,
            ai_delay: Duration::from_millis(config.ai_delay_ms),
            seed: config.seed,
        };
        info!(
            size = state.board_size,
            human = state.human_color.name(),
            difficulty = %state.agent.difficulty(),
            "new game"
        );
        Ok(state)
    }

    /// Start over with the selected difficulty, the human playing `human_color`.
    /// A pending agent reply is dropped with its receiver.
    pub fn new_game(&mut self, human_color: Stone) {
        self.board = Board::with_size(self.board_size);
        self.agent = Agent::new(human_color.opponent(), self.selected_difficulty);
        self.human_color = human_color;
        self.game_over = None;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.message = None;
        info!(
            size = self.board_size,
            human = human_color.name(),
            difficulty = %self.agent.difficulty(),
            "new game"
        );
    }

    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.board.current_player()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.board.last_move()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.game_over.is_none() && self.current_turn() == self.human_color
    }

    /// Check if it's the agent's turn
    pub fn is_ai_turn(&self) -> bool {
        self.game_over.is_none() && self.current_turn() == self.agent.player()
    }

    /// Check if the agent is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a human stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pos).map_err(|e| {
            warn!(row = pos.row, col = pos.col, error = %e, "rejected human move");
            e.to_string()
        })
    }

    /// Execute a move (for both human and agent)
    fn execute_move(&mut self, pos: Pos) -> Result<(), BoardError> {
        let color = self.current_turn();
        self.board.place_stone(pos)?;
        self.move_timer.stop();
        self.message = None;

        if self.board.is_finished() {
            let result = GameResult {
                winner: self.board.winner(),
                winning_line: find_five_line_at_pos(&self.board, pos),
            };
            info!(winner = color.name(), moves = self.board.stone_count(), "game finished");
            self.game_over = Some(result);
        } else if self.board.is_full() {
            info!(moves = self.board.stone_count(), "game drawn");
            self.game_over = Some(GameResult {
                winner: None,
                winning_line: None,
            });
        } else {
            self.move_timer.start();
        }
        Ok(())
    }

    /// Start the agent on a worker thread with a snapshot of the board
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let board = self.board.clone();
        let agent = self.agent;
        let delay = self.ai_delay;
        let seed = self
            .seed
            .map(|s| s.wrapping_add(board.stone_count() as u64));

        let (tx, rx) = channel();

        thread::spawn(move || {
            thread::sleep(delay);
            let result = match seed {
                Some(seed) => agent.analyze_with_rng(&board, &mut StdRng::seed_from_u64(seed)),
                None => agent.analyze(&board),
            };
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if the agent has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(move_result);
            self.move_timer.set_ai_time(elapsed);

            match move_result.best_move {
                Some(pos) => {
                    if let Err(e) = self.execute_move(pos) {
                        warn!(row = pos.row, col = pos.col, error = %e, "agent move rejected");
                        self.message = Some(e.to_string());
                    }
                }
                None => self.message = Some("AI could not find a move".to_string()),
            }
        }
    }

    /// Get agent thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Undo is offered while the game runs and the agent is idle
    pub fn can_undo(&self) -> bool {
        self.game_over.is_none() && !self.is_ai_thinking() && self.board.stone_count() > 0
    }

    /// Take back the last move, and the one before it as well when that
    /// leaves the agent to move, so the human is back on turn.
    pub fn undo(&mut self) {
        if !self.can_undo() {
            return;
        }

        if let Err(e) = self.board.undo() {
            warn!(error = %e, "undo failed");
            return;
        }
        // With the agent's opening gone there is nothing left to take back
        if self.current_turn() == self.agent.player() && self.board.stone_count() > 0 {
            if let Err(e) = self.board.undo() {
                warn!(error = %e, "undo of the agent reply failed");
            }
        }
        self.message = None;
        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(human_color: Stone, difficulty: Difficulty) -> GameConfig {
        GameConfig {
            human_color,
            difficulty,
            ai_delay_ms: 0,
            seed: Some(1),
            ..GameConfig::default()
        }
    }

    fn finish_ai(state: &mut GameState) {
        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_ai_thinking() {
            assert!(Instant::now() < deadline, "agent did not answer");
            state.check_ai_result();
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_human_then_agent_reply() {
        let mut state = GameState::new(&config(Stone::Black, Difficulty::Medium)).unwrap();
        assert!(state.is_human_turn());
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        assert!(state.is_ai_turn());
        assert!(state.try_place_stone(Pos::new(0, 0)).is_err());

        state.start_ai_thinking();
        finish_ai(&mut state);
        assert_eq!(state.board.stone_count(), 2);
        assert!(state.is_human_turn());
        assert!(state.last_ai_result.is_some());
    }

    #[test]
    fn test_undo_takes_back_pair() {
        let mut state = GameState::new(&config(Stone::Black, Difficulty::Easy)).unwrap();
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        state.start_ai_thinking();
        finish_ai(&mut state);
        assert_eq!(state.board.stone_count(), 2);

        state.undo();
        assert_eq!(state.board.stone_count(), 0);
        assert_eq!(state.current_turn(), Stone::Black);
    }

    #[test]
    fn test_occupied_cell_reported() {
        let mut state = GameState::new(&config(Stone::White, Difficulty::Hard)).unwrap();
        // Agent opens as Black
        state.start_ai_thinking();
        finish_ai(&mut state);
        assert_eq!(state.last_move(), Some(Pos::new(7, 7)));

        let err = state.try_place_stone(Pos::new(7, 7)).unwrap_err();
        assert_eq!(err, "position (7, 7) is already occupied");
        assert_eq!(state.board.stone_count(), 1);
    }

    #[test]
    fn test_win_locks_undo_and_input() {
        let mut state = GameState::new(&config(Stone::Black, Difficulty::Easy)).unwrap();
        // Human builds five directly by feeding the board through the state
        for c in 0..4 {
            state.board.place_stone(Pos::new(0, c)).unwrap();
            state.board.place_stone(Pos::new(14, c)).unwrap();
        }
        state.try_place_stone(Pos::new(0, 4)).unwrap();

        let result = state.game_over.unwrap();
        assert_eq!(result.winner, Some(Stone::Black));
        assert_eq!(
            result.winning_line,
            Some([0, 1, 2, 3, 4].map(|c| Pos::new(0, c)))
        );
        assert!(!state.can_undo());
        assert!(!state.is_ai_turn());
        assert!(state.try_place_stone(Pos::new(5, 5)).is_err());
    }

    #[test]
    fn test_new_game_applies_selected_difficulty() {
        let mut state = GameState::new(&config(Stone::Black, Difficulty::Easy)).unwrap();
        state.try_place_stone(Pos::new(3, 3)).unwrap();
        state.selected_difficulty = Difficulty::Hard;
        state.new_game(Stone::White);

        assert_eq!(state.agent.difficulty(), Difficulty::Hard);
        assert_eq!(state.agent.player(), Stone::Black);
        assert_eq!(state.board.stone_count(), 0);
        assert!(state.is_ai_turn());
    }

    #[test]
    fn test_undo_agent_opening_leaves_agent_to_move() {
        let mut state = GameState::new(&config(Stone::White, Difficulty::Hard)).unwrap();
        state.start_ai_thinking();
        finish_ai(&mut state);
        assert_eq!(state.board.stone_count(), 1);
        assert!(state.can_undo());

        state.undo();
        assert_eq!(state.board.stone_count(), 0);
        assert_eq!(state.current_turn(), Stone::Black);
        assert!(state.is_ai_turn());
        assert!(state.message.is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let bad = GameConfig {
            board_size: 4,
            ..config(Stone::Black, Difficulty::Easy)
        };
        assert!(matches!(
            GameState::new(&bad),
            Err(ConfigError::Validation(_))
        ));
    }
}
