//! Game rules for Gomoku
//!
//! Free-style rules: five or more in a row wins, no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{count_in_direction, find_five_line_at_pos, has_five_at_pos};
