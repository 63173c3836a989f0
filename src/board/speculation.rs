//! Scoped hypothetical placements
//!
//! Every pattern detector answers "what if a stone stood here?" by writing
//! the stone, evaluating, and clearing the cell again. The guard below owns
//! that last step so no exit path can leave a hypothetical stone behind.

use std::ops::Deref;

use super::{Board, Pos, Stone};

/// A hypothetical stone on a board, removed when the guard is dropped.
///
/// The target cell must be empty. History, turn and the finished flag are
/// never touched.
pub struct Speculation<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl<'a> Speculation<'a> {
    pub fn new(board: &'a mut Board, pos: Pos, stone: Stone) -> Self {
        debug_assert!(board.is_empty(pos), "speculating on occupied cell {pos:?}");
        board.set_cell(pos, stone);
        Self { board, pos }
    }

    /// Where the hypothetical stone stands
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.set_cell(self.pos, Stone::Empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speculation_reverts_on_drop() {
        let mut board = Board::new();
        let before = board.clone();
        let pos = Pos::new(3, 4);
        {
            let guard = Speculation::new(&mut board, pos, Stone::White);
            assert_eq!(guard.cell_at(pos), Stone::White);
            assert_eq!(guard.pos(), pos);
            // Bookkeeping is untouched while the stone is up
            assert_eq!(guard.stone_count(), 0);
            assert_eq!(guard.current_player(), Stone::Black);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_speculate_reverts_on_early_return() {
        let mut board = Board::new();
        let pos = Pos::new(7, 7);

        fn first_black(board: &Board) -> Option<Pos> {
            for pos in board.positions() {
                if board.cell_at(pos) == Stone::Black {
                    return Some(pos);
                }
            }
            None
        }

        let found = board.speculate(pos, Stone::Black, first_black);
        assert_eq!(found, Some(pos));
        assert!(board.is_empty(pos));
    }
}
