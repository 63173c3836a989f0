//! Score weights for position evaluation
//!
//! Each difficulty tier layers its own bonuses on top of the shared base
//! score. The exact values drive move choice and tie-breaking, so they are
//! kept together here.

/// Base scores shared by every tier
pub struct PatternScore;

impl PatternScore {
    /// Own stone here completes five
    pub const WIN: i32 = 10_000;
    /// Opponent stone here would complete five
    pub const BLOCK_WIN: i32 = 9_000;

    // Per-axis window scores (cell ±4 along the axis)
    /// Own run of four or more in the window
    pub const OWN_FOUR: i32 = 2_000;
    /// Own run of three with at least 2 empties in the window
    pub const OWN_THREE: i32 = 1_000;
    /// Own run of two with at least 3 empties in the window
    pub const OWN_TWO: i32 = 100;
    /// Opponent run of three or more
    pub const OPP_THREE: i32 = 1_500;
    /// Opponent run of two with at least 3 empties in the window
    pub const OPP_TWO: i32 = 200;
    /// Per own stone in the window
    pub const OWN_STONE: i32 = 10;
    /// Per empty cell in the window
    pub const EMPTY_CELL: i32 = 2;

    /// Penalty per Manhattan step from the center
    pub const CENTER_DISTANCE: i32 = 10;
    /// Penalty per Manhattan step from the last move
    pub const LAST_MOVE_DISTANCE: i32 = 5;
}

/// Medium tier bonuses
pub struct MediumScore;

impl MediumScore {
    pub const OPEN_FOUR: i32 = 800;
    pub const OPEN_THREE: i32 = 400;
    pub const BLOCK_OPEN_FOUR: i32 = 700;
    pub const BLOCK_OPEN_THREE: i32 = 300;
}

/// Hard tier bonuses
pub struct HardScore;

impl HardScore {
    pub const OPEN_FOUR: i32 = 1_200;
    pub const DOUBLE_THREE: i32 = 1_000;
    pub const OPEN_THREE: i32 = 600;
    pub const BLOCK_OPEN_FOUR: i32 = 1_000;
    pub const BLOCK_DOUBLE_THREE: i32 = 800;
    pub const BLOCK_OPEN_THREE: i32 = 500;

    /// Extra penalty per Manhattan step from the center
    pub const CENTER_DISTANCE: i32 = 15;
    /// Multiplier for the neighborhood density
    pub const DENSITY: i32 = 10;
    /// Density weight of a stone at Manhattan distance 1
    pub const ADJACENT_STONE: i32 = 3;
    /// Density weight of any other stone within the radius-2 square
    pub const NEARBY_STONE: i32 = 1;
}

/// Easy tier sampling weights
pub struct EasyWeight;

impl EasyWeight {
    /// Starting weight of every candidate
    pub const BASE: i32 = 100;
    /// Within 2 steps of the last move
    pub const NEAR_LAST_MOVE: i32 = 100;
    /// Within 4 steps of the last move
    pub const MID_LAST_MOVE: i32 = 50;
    /// Within 2 steps of the center
    pub const NEAR_CENTER: i32 = 150;
    /// Within 4 steps of the center
    pub const MID_CENTER: i32 = 80;
    /// Per occupied neighbor
    pub const NEIGHBOR: i32 = 30;
}
