//! Line-pattern detectors
//!
//! Every detector looks at the stone already standing on `pos` (usually a
//! speculative one) and walks each axis outwards from it. A walk stops at
//! the first cell that is not the walker's color; what it stopped on decides
//! whether that end of the run is open.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

/// Walk length used for open-four detection
pub const FOUR_LOOKAHEAD: i32 = 4;
/// Walk length used for open-three and threat detection
pub const THREE_LOOKAHEAD: i32 = 3;

/// How a single-direction walk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnd {
    /// Stopped on an empty on-board cell
    Open,
    /// Stopped on the board edge or a stone of the other color
    Blocked,
    /// Took every allowed step without stopping
    Exhausted,
}

/// Result of walking one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walk {
    /// Consecutive `color` stones passed, excluding the origin
    pub stones: usize,
    pub end: LineEnd,
}

/// Walk from `pos` along `dir` for at most `max_steps` cells, counting
/// `color` stones until something else comes up.
pub fn walk(board: &Board, pos: Pos, dir: (i32, i32), color: Stone, max_steps: i32) -> Walk {
    for step in 1..=max_steps {
        let stones = (step - 1) as usize;
        match board.stone_along(pos, dir, step) {
            Some(s) if s == color => continue,
            Some(Stone::Empty) => return Walk { stones, end: LineEnd::Open },
            _ => return Walk { stones, end: LineEnd::Blocked },
        }
    }
    Walk {
        stones: max_steps as usize,
        end: LineEnd::Exhausted,
    }
}

/// Run through a stone along one axis, both directions combined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRun {
    /// Run length including the stone on `pos`
    pub stones: usize,
    pub open_ends: u8,
    pub blocked_ends: u8,
}

impl AxisRun {
    /// Exactly `len` stones with an empty cell beyond each end
    #[inline]
    pub fn is_open(&self, len: usize) -> bool {
        self.stones == len && self.open_ends == 2
    }
}

/// Measure the run through the stone on `pos` along the axis `dir`.
pub fn axis_run(board: &Board, pos: Pos, dir: (i32, i32), lookahead: i32) -> AxisRun {
    let color = board.cell_at(pos);
    let mut run = AxisRun {
        stones: 1,
        open_ends: 0,
        blocked_ends: 0,
    };
    for d in [dir, (-dir.0, -dir.1)] {
        let w = walk(board, pos, d, color, lookahead);
        run.stones += w.stones;
        match w.end {
            LineEnd::Open => run.open_ends += 1,
            LineEnd::Blocked => run.blocked_ends += 1,
            LineEnd::Exhausted => {}
        }
    }
    run
}

#[inline]
fn occupied(board: &Board, pos: Pos) -> bool {
    !matches!(board.stone_at(pos), Some(Stone::Empty) | None)
}

/// True if the stone on `pos` is part of an open four on any axis.
pub fn has_open_four(board: &Board, pos: Pos) -> bool {
    occupied(board, pos)
        && DIRECTIONS
            .iter()
            .any(|&dir| axis_run(board, pos, dir, FOUR_LOOKAHEAD).is_open(4))
}

/// True if the stone on `pos` is part of an open three on any axis.
pub fn has_open_three(board: &Board, pos: Pos) -> bool {
    occupied(board, pos)
        && DIRECTIONS
            .iter()
            .any(|&dir| axis_run(board, pos, dir, THREE_LOOKAHEAD).is_open(3))
}

/// Number of axes on which the stone on `pos` forms an unblocked open three
pub fn open_three_axes(board: &Board, pos: Pos) -> usize {
    if !occupied(board, pos) {
        return 0;
    }
    DIRECTIONS
        .iter()
        .map(|&dir| axis_run(board, pos, dir, THREE_LOOKAHEAD))
        .filter(|run| run.is_open(3) && run.blocked_ends == 0)
        .count()
}

/// True if the stone on `pos` makes open threes on two or more axes at once.
pub fn has_double_three(board: &Board, pos: Pos) -> bool {
    open_three_axes(board, pos) >= 2
}

/// True if the empty cell `pos` sits next to a line of at least two
/// `opponent` stones (counted over a short walk each way) that is not
/// closed off at both ends.
pub fn is_threat_cell(board: &Board, pos: Pos, opponent: Stone) -> bool {
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let mut count = 0;
        let mut blocked = 0;
        for d in [(dr, dc), (-dr, -dc)] {
            let w = walk(board, pos, d, opponent, THREE_LOOKAHEAD);
            count += w.stones;
            if w.end == LineEnd::Blocked {
                blocked += 1;
            }
        }
        count >= 2 && blocked < 2
    })
}
