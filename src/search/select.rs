//! Whole-board move selection by score
//!
//! Exhaustive arg-max for the medium and hard tiers, weighted random
//! sampling for the easy tier.

use rand::Rng;

use crate::board::{Board, Pos, Stone};
use crate::eval::easy_weight;

/// Scoring function for a candidate cell
pub type ScoreFn = fn(&mut Board, Pos, Stone) -> i32;

/// Margin added around the stones when bounding the easy search area
const REGION_MARGIN: i32 = 2;

/// Rows/columns kept clear of the easy search area at each edge
const REGION_EDGE: i32 = 2;

/// Highest-scoring empty cell for `color`, with the earliest cell in
/// row-major order winning ties. `None` only on a full board.
pub fn best_by_score(board: &mut Board, color: Stone, score: ScoreFn) -> Option<(Pos, i32)> {
    let candidates: Vec<Pos> = board.empty_cells().collect();
    let mut best: Option<(Pos, i32)> = None;

    for pos in candidates {
        let s = score(board, pos, color);
        if best.map_or(true, |(_, top)| s > top) {
            best = Some((pos, s));
        }
    }

    best
}

/// Inclusive row/column bounds of the easy search area: the bounding box of
/// all stones grown by 2, kept off the outer two rings. `None` on an empty
/// board.
pub fn search_region(board: &Board) -> Option<(Pos, Pos)> {
    let mut stones = board.positions().filter(|&p| !board.is_empty(p));
    let first = stones.next()?;
    let (mut min_r, mut max_r) = (first.row as i32, first.row as i32);
    let (mut min_c, mut max_c) = (first.col as i32, first.col as i32);

    for p in stones {
        min_r = min_r.min(p.row as i32);
        max_r = max_r.max(p.row as i32);
        min_c = min_c.min(p.col as i32);
        max_c = max_c.max(p.col as i32);
    }

    let far = board.size() as i32 - 1 - REGION_EDGE;
    let lo = |v: i32| (v - REGION_MARGIN).max(REGION_EDGE) as u8;
    let hi = |v: i32| (v + REGION_MARGIN).min(far) as u8;

    Some((
        Pos::new(lo(min_r), lo(min_c)),
        Pos::new(hi(max_r), hi(max_c)),
    ))
}

/// Easy tier pick: the center on an empty board, otherwise a weighted
/// random empty cell inside [`search_region`]. Weights below 1 are raised
/// to 1 so every candidate stays drawable.
pub fn weighted_pick<R: Rng + ?Sized>(board: &mut Board, color: Stone, rng: &mut R) -> Option<Pos> {
    let Some((lo, hi)) = search_region(board) else {
        return Some(board.center());
    };

    let mut candidates = Vec::new();
    for row in lo.row..=hi.row {
        for col in lo.col..=hi.col {
            let pos = Pos::new(row, col);
            if board.is_empty(pos) {
                let weight = easy_weight(board, pos, color).max(1) as u64;
                candidates.push((pos, weight));
            }
        }
    }

    let total: u64 = candidates.iter().map(|&(_, w)| w).sum();
    if total == 0 {
        return None;
    }

    let draw = rng.random_range(0..total);
    let mut cumulative = 0;
    for &(pos, weight) in &candidates {
        cumulative += weight;
        if cumulative > draw {
            return Some(pos);
        }
    }

    // Unreachable with draw < total, kept as the heaviest cell
    candidates
        .iter()
        .max_by_key(|&&(pos, w)| (w, std::cmp::Reverse(pos)))
        .map(|&(pos, _)| pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{evaluate_position, evaluate_position_hard};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_best_by_score_empty_board_center() {
        let mut board = Board::new();
        let (pos, _) = best_by_score(&mut board, Stone::White, evaluate_position_hard).unwrap();
        assert_eq!(pos, Pos::new(7, 7));
    }

    #[test]
    fn test_best_by_score_first_wins_ties() {
        fn flat(_: &mut Board, _: Pos, _: Stone) -> i32 {
            7
        }
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0)).unwrap();
        let best = best_by_score(&mut board, Stone::White, flat);
        assert_eq!(best, Some((Pos::new(0, 1), 7)));
    }

    #[test]
    fn test_best_by_score_full_board() {
        let mut board = Board::from_rows(&["XOXOX", "XOXOX", "OXOXO", "OXOXO", "XOXOX"]);
        assert_eq!(best_by_score(&mut board, Stone::Black, evaluate_position), None);
    }

    #[test]
    fn test_search_region_clamped() {
        let mut board = Board::new();
        assert_eq!(search_region(&board), None);

        board.place_stone(Pos::new(0, 7)).unwrap();
        board.place_stone(Pos::new(6, 14)).unwrap();
        let (lo, hi) = search_region(&board).unwrap();
        assert_eq!(lo, Pos::new(2, 5));
        assert_eq!(hi, Pos::new(8, 12));
    }

    #[test]
    fn test_weighted_pick_empty_board_center() {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(weighted_pick(&mut board, Stone::Black, &mut rng), Some(Pos::new(7, 7)));
    }

    #[test]
    fn test_weighted_pick_stays_in_region() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7)).unwrap();
        board.place_stone(Pos::new(8, 8)).unwrap();
        let before = board.clone();

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let pos = weighted_pick(&mut board, Stone::Black, &mut rng).unwrap();
            assert!(board.is_empty(pos));
            assert!((5..=10).contains(&pos.row) && (5..=10).contains(&pos.col), "{pos:?}");
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_weighted_pick_is_reproducible() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7)).unwrap();

        let picks = |seed| {
            let mut b = board.clone();
            let mut rng = StdRng::seed_from_u64(seed);
            (0..5)
                .map(|_| weighted_pick(&mut b, Stone::White, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(9), picks(9));
    }
}
