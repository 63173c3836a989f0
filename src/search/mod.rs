//! Move search primitives for the Gomoku agent
//!
//! Contains:
//! - Single-ply threat scans (win, open four/three, advanced threats, threat blocks)
//! - Whole-board arg-max and weighted random selection

pub mod select;
pub mod threat;

pub use select::{best_by_score, search_region, weighted_pick, ScoreFn};
pub use threat::{
    find_advanced_threat_move, find_open_four_move, find_open_three_move, find_threat_block,
    find_winning_move,
};
