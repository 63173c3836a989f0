//! Board representation for Gomoku

pub mod board;
pub mod speculation;


// Re-exports
pub use board::Board;
pub use speculation::Speculation;

/// Default board size (15x15)
pub const BOARD_SIZE: usize = 15;

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Smallest and largest supported board sizes
pub const MIN_BOARD_SIZE: usize = WIN_LENGTH;
pub const MAX_BOARD_SIZE: usize = 26;

/// Direction vectors for line checking, one per axis.
/// Every pattern scan walks each of these both ways from a cell.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Vertical
    (0, 1),  // Horizontal
    (1, 1),  // Diagonal
    (1, -1), // Anti-diagonal
];

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Human-readable color name
    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
            Stone::Empty => "Empty",
        }
    }

    /// Single-character glyph used by the text renderer
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
            Stone::Empty => '.',
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Step `steps` times along `dir`, or `None` when the result would be
    /// negative. Upper bounds are checked by the board.
    #[inline]
    pub fn offset(self, dir: (i32, i32), steps: i32) -> Option<Pos> {
        let r = self.row as i32 + dir.0 * steps;
        let c = self.col as i32 + dir.1 * steps;
        if r < 0 || c < 0 || r > u8::MAX as i32 || c > u8::MAX as i32 {
            return None;
        }
        Some(Pos::new(r as u8, c as u8))
    }

    /// Manhattan distance to another position
    #[inline]
    pub fn manhattan(self, other: Pos) -> i32 {
        (self.row as i32 - other.row as i32).abs() + (self.col as i32 - other.col as i32).abs()
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    /// Row-major order, the scan order every strategy relies on for ties.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
