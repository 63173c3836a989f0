//! Heuristic evaluation of candidate cells
//!
//! All scores are from the perspective of `color`, the side about to play,
//! and are computed for an empty cell. Speculative placements made here are
//! always reverted before returning, so the board reads the same afterwards.
//! The board is taken mutably only for that reason.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

use super::lines::{has_double_three, has_open_four, has_open_three};
use super::patterns::{EasyWeight, HardScore, MediumScore, PatternScore};

/// Half-width of the per-axis scoring window
const WINDOW_RADIUS: i32 = 4;

/// Radius of the square scanned for the hard-tier density score
const DENSITY_RADIUS: i32 = 2;

/// Width of the border band treated as "edge"
const EDGE_BAND: usize = 2;

/// Score one axis through `pos`: longest runs of each side and empties
/// within ±4 cells.
pub fn evaluate_direction(board: &Board, pos: Pos, dir: (i32, i32), color: Stone) -> i32 {
    let mut my_count = 0;
    let mut empty = 0;
    let mut my_run = 0;
    let mut opp_run = 0;
    let mut max_my_run = 0;
    let mut max_opp_run = 0;

    for i in -WINDOW_RADIUS..=WINDOW_RADIUS {
        let Some(stone) = board.stone_along(pos, dir, i) else {
            continue;
        };
        if stone == color {
            my_count += 1;
            my_run += 1;
            opp_run = 0;
            max_my_run = max_my_run.max(my_run);
        } else if stone == Stone::Empty {
            empty += 1;
            my_run = 0;
            opp_run = 0;
        } else {
            opp_run += 1;
            my_run = 0;
            max_opp_run = max_opp_run.max(opp_run);
        }
    }

    let mut score = 0;

    if max_my_run >= 4 {
        score += PatternScore::OWN_FOUR;
    } else if max_my_run == 3 && empty >= 2 {
        score += PatternScore::OWN_THREE;
    } else if max_my_run == 2 && empty >= 3 {
        score += PatternScore::OWN_TWO;
    }

    if max_opp_run >= 3 {
        score += PatternScore::OPP_THREE;
    } else if max_opp_run == 2 && empty >= 3 {
        score += PatternScore::OPP_TWO;
    }

    score + my_count * PatternScore::OWN_STONE + empty * PatternScore::EMPTY_CELL
}

/// Base score of playing `color` on the empty cell `pos`.
///
/// An immediate win or a forced block short-circuits everything else.
/// Otherwise the four axis windows are summed and distance from the center
/// and from the last move are penalized.
pub fn evaluate_position(board: &mut Board, pos: Pos, color: Stone) -> i32 {
    if board.speculate(pos, color, |b| b.check_win(pos)) {
        return PatternScore::WIN;
    }
    if board.speculate(pos, color.opponent(), |b| b.check_win(pos)) {
        return PatternScore::BLOCK_WIN;
    }

    let mut score: i32 = DIRECTIONS
        .iter()
        .map(|&dir| evaluate_direction(board, pos, dir, color))
        .sum();

    score -= pos.manhattan(board.center()) * PatternScore::CENTER_DISTANCE;

    if let Some(last) = board.last_move() {
        score -= pos.manhattan(last) * PatternScore::LAST_MOVE_DISTANCE;
    }

    score
}

/// Medium tier: base score plus open-four/open-three bonuses for making
/// the shape and for taking the cell away from the opponent.
pub fn evaluate_position_medium(board: &mut Board, pos: Pos, color: Stone) -> i32 {
    let mut score = evaluate_position(board, pos, color);

    score += board.speculate(pos, color, |b| {
        let mut bonus = 0;
        if has_open_four(b, pos) {
            bonus += MediumScore::OPEN_FOUR;
        }
        if has_open_three(b, pos) {
            bonus += MediumScore::OPEN_THREE;
        }
        bonus
    });

    score += board.speculate(pos, color.opponent(), |b| {
        let mut bonus = 0;
        if has_open_four(b, pos) {
            bonus += MediumScore::BLOCK_OPEN_FOUR;
        }
        if has_open_three(b, pos) {
            bonus += MediumScore::BLOCK_OPEN_THREE;
        }
        bonus
    });

    score
}

/// Hard tier: base score plus shape bonuses including double-threes, a
/// stronger pull to the center, a pull towards existing stones, and half
/// value on the outer two rings.
pub fn evaluate_position_hard(board: &mut Board, pos: Pos, color: Stone) -> i32 {
    let mut score = evaluate_position(board, pos, color);

    score += board.speculate(pos, color, |b| {
        let mut bonus = 0;
        if has_open_four(b, pos) {
            bonus += HardScore::OPEN_FOUR;
        }
        if has_double_three(b, pos) {
            bonus += HardScore::DOUBLE_THREE;
        }
        if has_open_three(b, pos) {
            bonus += HardScore::OPEN_THREE;
        }
        bonus
    });

    score += board.speculate(pos, color.opponent(), |b| {
        let mut bonus = 0;
        if has_open_four(b, pos) {
            bonus += HardScore::BLOCK_OPEN_FOUR;
        }
        if has_double_three(b, pos) {
            bonus += HardScore::BLOCK_DOUBLE_THREE;
        }
        if has_open_three(b, pos) {
            bonus += HardScore::BLOCK_OPEN_THREE;
        }
        bonus
    });

    score -= pos.manhattan(board.center()) * HardScore::CENTER_DISTANCE;
    score += neighborhood_density(board, pos) * HardScore::DENSITY;

    if in_edge_band(board, pos) {
        score /= 2;
    }

    score
}

/// Weighted stone count in the 5x5 square around `pos`: orthogonal
/// neighbors weigh 3, everything else 1.
pub fn neighborhood_density(board: &Board, pos: Pos) -> i32 {
    let mut density = 0;
    for dr in -DENSITY_RADIUS..=DENSITY_RADIUS {
        for dc in -DENSITY_RADIUS..=DENSITY_RADIUS {
            match board.stone_along(pos, (dr, dc), 1) {
                Some(Stone::Empty) | None => {}
                Some(_) if dr.abs() + dc.abs() <= 1 => density += HardScore::ADJACENT_STONE,
                Some(_) => density += HardScore::NEARBY_STONE,
            }
        }
    }
    density
}

/// Occupied cells among the 8 neighbors of `pos`
pub fn occupied_neighbors(board: &Board, pos: Pos) -> i32 {
    let mut count = 0;
    for dr in -1..=1 {
        for dc in -1..=1 {
            if (dr, dc) == (0, 0) {
                continue;
            }
            if matches!(board.stone_along(pos, (dr, dc), 1), Some(s) if s != Stone::Empty) {
                count += 1;
            }
        }
    }
    count
}

/// True on the outer two rows/columns of the board
#[inline]
pub fn in_edge_band(board: &Board, pos: Pos) -> bool {
    let far = board.size() - EDGE_BAND;
    let (r, c) = (pos.row as usize, pos.col as usize);
    r < EDGE_BAND || c < EDGE_BAND || r >= far || c >= far
}

/// Sampling weight of `pos` for the easy tier. May be zero or negative far
/// from the action; callers clamp before drawing.
pub fn easy_weight(board: &mut Board, pos: Pos, color: Stone) -> i32 {
    let mut weight = EasyWeight::BASE + evaluate_position(board, pos, color);

    let center = board.center();
    let last = board.last_move().unwrap_or(center);

    weight += match pos.manhattan(last) {
        0..=2 => EasyWeight::NEAR_LAST_MOVE,
        3..=4 => EasyWeight::MID_LAST_MOVE,
        _ => 0,
    };

    weight += match pos.manhattan(center) {
        0..=2 => EasyWeight::NEAR_CENTER,
        3..=4 => EasyWeight::MID_CENTER,
        _ => 0,
    };

    let neighbors = occupied_neighbors(board, pos);
    weight += neighbors * EasyWeight::NEIGHBOR;
    if neighbors == 0 {
        weight /= 2;
    }

    if in_edge_band(board, pos) {
        weight /= 3;
    }

    weight
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(black: &[(u8, u8)], white: &[(u8, u8)]) -> Board {
        let mut board = Board::new();
        for &(r, c) in black {
            board.set_cell(Pos::new(r, c), Stone::Black);
        }
        for &(r, c) in white {
            board.set_cell(Pos::new(r, c), Stone::White);
        }
        board
    }

    #[test]
    fn test_evaluate_empty_board_center() {
        let mut board = Board::new();
        // 9 empty cells on each of 4 axes, no distance penalty
        assert_eq!(evaluate_position(&mut board, Pos::new(7, 7), Stone::White), 72);
    }

    #[test]
    fn test_evaluate_corner_less_valuable() {
        let mut board = Board::new();
        let center = evaluate_position(&mut board, Pos::new(7, 7), Stone::Black);
        let corner = evaluate_position(&mut board, Pos::new(0, 0), Stone::Black);
        // 5 + 5 + 5 + 1 in-bounds window cells, 14 steps from center
        assert_eq!(corner, 32 - 140);
        assert!(center > corner);
    }

    #[test]
    fn test_evaluate_direction_own_three() {
        let board = board_with(&[(7, 8), (7, 9), (7, 10)], &[]);
        let score = evaluate_direction(&board, Pos::new(7, 7), (0, 1), Stone::Black);
        assert_eq!(score, PatternScore::OWN_THREE + 3 * 10 + 6 * 2);
    }

    #[test]
    fn test_evaluate_direction_opponent_three() {
        let board = board_with(&[], &[(7, 4), (7, 5), (7, 6)]);
        let score = evaluate_direction(&board, Pos::new(7, 7), (0, 1), Stone::Black);
        assert_eq!(score, PatternScore::OPP_THREE + 6 * 2);
    }

    #[test]
    fn test_evaluate_winning_cell() {
        let mut board = board_with(&[(3, 3), (3, 4), (3, 5), (3, 6)], &[]);
        assert_eq!(evaluate_position(&mut board, Pos::new(3, 7), Stone::Black), PatternScore::WIN);
        assert_eq!(
            evaluate_position(&mut board, Pos::new(3, 7), Stone::White),
            PatternScore::BLOCK_WIN
        );
        assert!(board.is_empty(Pos::new(3, 7)));
    }

    #[test]
    fn test_evaluate_last_move_penalty() {
        let mut board = Board::new();
        let before = evaluate_position(&mut board, Pos::new(7, 7), Stone::White);
        board.place_stone(Pos::new(0, 0)).unwrap();
        let after = evaluate_position(&mut board, Pos::new(7, 7), Stone::White);
        // (0,0) is outside every axis window of the center, only the
        // distance term changes
        assert_eq!(before - after, 14 * PatternScore::LAST_MOVE_DISTANCE);
    }

    #[test]
    fn test_medium_open_three_bonus() {
        let mut board = board_with(&[(7, 6), (7, 8)], &[]);
        let base = evaluate_position(&mut board, Pos::new(7, 7), Stone::Black);
        let medium = evaluate_position_medium(&mut board, Pos::new(7, 7), Stone::Black);
        assert_eq!(medium - base, MediumScore::OPEN_THREE);
    }

    #[test]
    fn test_medium_blocking_bonus() {
        let mut board = board_with(&[(7, 6), (7, 8)], &[]);
        let base = evaluate_position(&mut board, Pos::new(7, 7), Stone::White);
        let medium = evaluate_position_medium(&mut board, Pos::new(7, 7), Stone::White);
        assert_eq!(medium - base, MediumScore::BLOCK_OPEN_THREE);
    }

    #[test]
    fn test_hard_double_three_bonus() {
        let mut board = board_with(&[(7, 6), (7, 8), (6, 7), (8, 7)], &[]);
        let pos = Pos::new(7, 7);
        let base = evaluate_position(&mut board, pos, Stone::Black);
        let hard = evaluate_position_hard(&mut board, pos, Stone::Black);
        let density = neighborhood_density(&board, pos);
        assert_eq!(density, 4 * HardScore::ADJACENT_STONE);
        assert_eq!(
            hard - base,
            HardScore::DOUBLE_THREE + HardScore::OPEN_THREE + density * HardScore::DENSITY
        );
    }

    #[test]
    fn test_hard_halves_edge_band() {
        let board = Board::new();
        assert!(in_edge_band(&board, Pos::new(1, 7)));
        assert!(in_edge_band(&board, Pos::new(7, 13)));
        assert!(!in_edge_band(&board, Pos::new(2, 12)));
    }

    #[test]
    fn test_neighborhood_density_weights() {
        let board = board_with(&[(7, 8)], &[(9, 9)]);
        // One orthogonal neighbor, one stone two steps diagonally
        assert_eq!(neighborhood_density(&board, Pos::new(7, 7)), 3 + 1);
    }

    #[test]
    fn test_occupied_neighbors() {
        let board = board_with(&[(6, 6), (8, 8)], &[(7, 8), (5, 5)]);
        assert_eq!(occupied_neighbors(&board, Pos::new(7, 7)), 3);
        assert_eq!(occupied_neighbors(&board, Pos::new(0, 0)), 0);
    }

    #[test]
    fn test_easy_weight_prefers_action() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7)).unwrap();
        let near = easy_weight(&mut board, Pos::new(7, 8), Stone::White);
        let far = easy_weight(&mut board, Pos::new(2, 2), Stone::White);
        assert!(near > far, "near {near} should beat far {far}");
    }

    #[test]
    fn test_scoring_leaves_board_untouched() {
        let mut board = board_with(&[(7, 6), (7, 8), (6, 7)], &[(8, 8)]);
        let before = board.clone();
        for pos in before.empty_cells() {
            evaluate_position_hard(&mut board, pos, Stone::White);
        }
        assert_eq!(board, before);
    }
}
