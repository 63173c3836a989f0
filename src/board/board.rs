//! Board structure with turn order and move history

use std::fmt;

use super::speculation::Speculation;
use super::{Pos, Stone, BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::BoardError;
use crate::rules::has_five_at_pos;

/// Game board.
///
/// Mutated only through [`Board::place_stone`] and [`Board::undo`]; a new
/// game replaces the board wholesale. The board is not internally
/// synchronized: concurrent calls into one instance are undefined behavior
/// from the game's point of view, so a host that wants the agent off its UI
/// thread must hand the worker an owned clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major cells, `size * size` long
    cells: Vec<Stone>,
    /// Player to move; stays with the winner once the game is finished
    current: Stone,
    /// Placement order only. The mover at index i is Black for even i.
    history: Vec<Pos>,
    finished: bool,
}

impl Board {
    /// Empty board of the default size with Black to move
    pub fn new() -> Self {
        Self::with_size(BOARD_SIZE)
    }

    /// Empty board of the given size with Black to move.
    ///
    /// # Panics
    ///
    /// Panics if `size` is outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    /// Configuration validation rejects such sizes before a board is built.
    pub fn with_size(size: usize) -> Self {
        assert!(
            (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size),
            "board size {size} outside {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}"
        );
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            current: Stone::Black,
            history: Vec::with_capacity(size * size),
            finished: false,
        }
    }

    /// Build a position from text rows (`X` black, `O` white, `.` empty).
    ///
    /// History interleaves black and white stones in row-major order, any
    /// surplus of one color coming last; the side with fewer stones (Black on
    /// a tie) is to move. Meant for fixtures and analysis, not for replaying
    /// a real game.
    ///
    /// # Panics
    ///
    /// Panics if the rows are not square, the size is unsupported, or a row
    /// contains another character.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::with_size(rows.len());
        let mut black = Vec::new();
        let mut white = Vec::new();

        for (r, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), rows.len(), "row {r} is not {} wide", rows.len());
            for (c, ch) in line.chars().enumerate() {
                let pos = Pos::new(r as u8, c as u8);
                match ch {
                    'X' => black.push(pos),
                    'O' => white.push(pos),
                    '.' => {}
                    other => panic!("unexpected cell '{other}' at ({r}, {c})"),
                }
            }
        }

        for &pos in &black {
            board.set_cell(pos, Stone::Black);
        }
        for &pos in &white {
            board.set_cell(pos, Stone::White);
        }

        let (mut b, mut w) = (black.iter(), white.iter());
        loop {
            match (b.next(), w.next()) {
                (None, None) => break,
                (x, y) => board.history.extend(x.into_iter().chain(y).copied()),
            }
        }

        board.current = if black.len() > white.len() {
            Stone::White
        } else {
            Stone::Black
        };
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Center intersection
    #[inline]
    pub fn center(&self) -> Pos {
        let c = (self.size / 2) as u8;
        Pos::new(c, c)
    }

    /// Check if position lies on the board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.size + pos.col as usize
    }

    /// Stone at position, or `None` outside the board
    #[inline]
    pub fn stone_at(&self, pos: Pos) -> Option<Stone> {
        self.contains(pos).then(|| self.cells[self.index(pos)])
    }

    /// Stone one or more steps away along a direction, `None` past the edge
    #[inline]
    pub fn stone_along(&self, pos: Pos, dir: (i32, i32), steps: i32) -> Option<Stone> {
        pos.offset(dir, steps).and_then(|p| self.stone_at(p))
    }

    /// Stone at position; off-board positions read as empty
    #[inline]
    pub fn cell_at(&self, pos: Pos) -> Stone {
        self.stone_at(pos).unwrap_or(Stone::Empty)
    }

    /// Check if position is an empty on-board cell
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.stone_at(pos) == Some(Stone::Empty)
    }

    /// Player to move
    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current
    }

    /// True once a five-in-a-row has been played
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Winner of a finished game
    pub fn winner(&self) -> Option<Stone> {
        self.finished.then_some(self.current)
    }

    /// Moves in placement order
    #[inline]
    pub fn move_history(&self) -> &[Pos] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().copied()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.history.len()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.history.len() == self.cells.len()
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size as u8;
        (0..size).flat_map(move |row| (0..size).map(move |col| Pos::new(row, col)))
    }

    /// Empty positions in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(move |&pos| self.is_empty(pos))
    }

    /// Place the current player's stone.
    ///
    /// On a five-in-a-row the game finishes and the turn stays with the
    /// winner; otherwise the turn passes to the opponent.
    pub fn place_stone(&mut self, pos: Pos) -> Result<(), BoardError> {
        if !self.contains(pos) {
            return Err(BoardError::OutOfBounds {
                pos,
                size: self.size,
            });
        }
        if !self.is_empty(pos) {
            return Err(BoardError::CellOccupied { pos });
        }
        if self.finished {
            return Err(BoardError::GameAlreadyFinished);
        }

        self.set_cell(pos, self.current);
        self.history.push(pos);

        if self.check_win(pos) {
            self.finished = true;
            return Ok(());
        }

        self.current = self.current.opponent();
        Ok(())
    }

    /// Take back the last move and return it.
    ///
    /// The turn flips and the finished flag is cleared unconditionally,
    /// without re-checking the remaining stones. Since a winning move keeps
    /// the turn with the winner, undoing it hands the turn to the loser;
    /// hosts undo in human/agent pairs, which lines the turn up again.
    pub fn undo(&mut self) -> Result<Pos, BoardError> {
        let pos = self.history.pop().ok_or(BoardError::NoMovesToUndo)?;
        self.set_cell(pos, Stone::Empty);
        self.current = self.current.opponent();
        self.finished = false;
        Ok(pos)
    }

    /// Check for five or more in a row through `pos`, using the color of the
    /// stone already there. Independent of move history.
    #[inline]
    pub fn check_win(&self, pos: Pos) -> bool {
        match self.stone_at(pos) {
            Some(Stone::Empty) | None => false,
            Some(color) => has_five_at_pos(self, pos, color),
        }
    }

    /// Run `f` with a hypothetical stone at `pos`; the cell is empty again
    /// once this returns.
    #[inline]
    pub fn speculate<R>(&mut self, pos: Pos, stone: Stone, f: impl FnOnce(&Board) -> R) -> R {
        let guard = Speculation::new(self, pos, stone);
        f(&guard)
    }

    /// Raw cell write. Bypasses history and turn bookkeeping.
    #[inline]
    pub(crate) fn set_cell(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        self.cells[idx] = stone;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: String = row.iter().map(|s| s.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
