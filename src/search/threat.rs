//! Single-ply threat scans
//!
//! Each scan visits the empty cells in row-major order and returns the first
//! one that satisfies its shape test. That order is the tie-break every
//! difficulty tier relies on, so a scan never looks for a "better" hit once
//! it has one.

use crate::board::{Board, Pos, Stone};
use crate::eval::{has_double_three, has_open_four, has_open_three, is_threat_cell};

/// First empty cell where a speculative `color` stone satisfies `shape`.
fn first_speculative_hit(
    board: &mut Board,
    color: Stone,
    shape: impl Fn(&Board, Pos) -> bool,
) -> Option<Pos> {
    let candidates: Vec<Pos> = board.empty_cells().collect();
    candidates
        .into_iter()
        .find(|&pos| board.speculate(pos, color, |b| shape(b, pos)))
}

/// First cell where `color` completes five. Called with the opponent's
/// color it finds the cell that must be blocked.
pub fn find_winning_move(board: &mut Board, color: Stone) -> Option<Pos> {
    first_speculative_hit(board, color, |b, pos| b.check_win(pos))
}

/// First cell where `color` makes an open four.
pub fn find_open_four_move(board: &mut Board, color: Stone) -> Option<Pos> {
    first_speculative_hit(board, color, has_open_four)
}

/// First cell where `color` makes an open three.
pub fn find_open_three_move(board: &mut Board, color: Stone) -> Option<Pos> {
    first_speculative_hit(board, color, has_open_three)
}

/// First cell where `color` makes an open four or, failing that on the same
/// cell, a double-three.
pub fn find_advanced_threat_move(board: &mut Board, color: Stone) -> Option<Pos> {
    first_speculative_hit(board, color, |b, pos| {
        has_open_four(b, pos) || has_double_three(b, pos)
    })
}

/// First empty cell next to an `opponent` line of two or more that is still
/// open at one end.
pub fn find_threat_block(board: &Board, opponent: Stone) -> Option<Pos> {
    board
        .empty_cells()
        .find(|&pos| is_threat_cell(board, pos, opponent))
}
