//! Evaluation module
//!
//! Contains:
//! - Line-pattern detectors (open three/four, double-three, threat cells)
//! - Score weights for every difficulty tier
//! - Heuristic scoring of candidate cells

pub mod heuristic;
pub mod lines;
pub mod patterns;

pub use heuristic::{
    easy_weight, evaluate_direction, evaluate_position, evaluate_position_hard,
    evaluate_position_medium, in_edge_band, neighborhood_density, occupied_neighbors,
};
pub use lines::{
    axis_run, has_double_three, has_open_four, has_open_three, is_threat_cell, open_three_axes,
    walk, AxisRun, LineEnd, Walk,
};
pub use patterns::{EasyWeight, HardScore, MediumScore, PatternScore};
