//! Win condition checking
//!
//! A game is won by five or more stones of one color in a row along any of
//! the four axes. Overlines count.

use crate::board::{Board, Pos, Stone, DIRECTIONS, WIN_LENGTH};

/// Count consecutive `color` stones stepping away from `pos` along `dir`,
/// not counting `pos` itself. Stops after `max_steps`, at the edge, or at the
/// first other cell.
#[inline]
pub fn count_in_direction(
    board: &Board,
    pos: Pos,
    dir: (i32, i32),
    color: Stone,
    max_steps: usize,
) -> usize {
    (1..=max_steps as i32)
        .take_while(|&i| board.stone_along(pos, dir, i) == Some(color))
        .count()
}

/// Fast five-in-a-row check at a specific position.
///
/// Only checks the 4 axes through `pos`, counting up to four stones each way.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let forward = count_in_direction(board, pos, (dr, dc), color, WIN_LENGTH - 1);
        let backward = count_in_direction(board, pos, (-dr, -dc), color, WIN_LENGTH - 1);
        1 + forward + backward >= WIN_LENGTH
    })
}

/// Find five stones of a winning line through `pos`, ordered from one end.
///
/// Returns `None` if `pos` is empty or no axis through it holds five.
pub fn find_five_line_at_pos(board: &Board, pos: Pos) -> Option<[Pos; WIN_LENGTH]> {
    let color = board.stone_at(pos)?;
    if color == Stone::Empty {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let backward = count_in_direction(board, pos, (-dr, -dc), color, board.size());
        let forward = count_in_direction(board, pos, (dr, dc), color, board.size());
        if 1 + forward + backward < WIN_LENGTH {
            continue;
        }

        // Start from the far end behind `pos` so the line reads forwards
        let start = pos.offset((dr, dc), -(backward as i32))?;
        let mut line = [start; WIN_LENGTH];
        for (i, slot) in line.iter_mut().enumerate() {
            *slot = start.offset((dr, dc), i as i32)?;
        }
        return Some(line);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_stones(stones: &[(u8, u8)], color: Stone) -> Board {
        let mut board = Board::new();
        for &(r, c) in stones {
            board.set_cell(Pos::new(r, c), color);
        }
        board
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let board = with_stones(&[(9, 0), (9, 1), (9, 2), (9, 3), (9, 4)], Stone::Black);
        assert!(has_five_at_pos(&board, Pos::new(9, 2), Stone::Black));
        assert!(board.check_win(Pos::new(9, 0)));
        assert!(!has_five_at_pos(&board, Pos::new(9, 2), Stone::White));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let board = with_stones(&[(3, 7), (4, 7), (5, 7), (6, 7), (7, 7)], Stone::White);
        assert!(board.check_win(Pos::new(7, 7)));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let board = with_stones(&[(2, 2), (3, 3), (4, 4), (5, 5), (6, 6)], Stone::Black);
        assert!(board.check_win(Pos::new(4, 4)));
    }

    #[test]
    fn test_five_in_row_anti_diagonal() {
        let board = with_stones(&[(2, 10), (3, 9), (4, 8), (5, 7), (6, 6)], Stone::Black);
        assert!(board.check_win(Pos::new(6, 6)));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let board = with_stones(
            &[(9, 3), (9, 4), (9, 5), (9, 6), (9, 7), (9, 8)],
            Stone::Black,
        );
        assert!(board.check_win(Pos::new(9, 5)));
    }

    #[test]
    fn test_blocked_four_not_win() {
        let mut board = with_stones(&[(9, 3), (9, 4), (9, 5), (9, 6)], Stone::Black);
        board.set_cell(Pos::new(9, 2), Stone::White);
        board.set_cell(Pos::new(9, 7), Stone::White);
        assert!(!board.check_win(Pos::new(9, 4)));
    }

    #[test]
    fn test_five_at_corner() {
        let board = with_stones(&[(14, 10), (14, 11), (14, 12), (14, 13), (14, 14)], Stone::White);
        assert!(board.check_win(Pos::new(14, 14)));
    }

    #[test]
    fn test_empty_not_five() {
        let board = Board::new();
        assert!(!board.check_win(Pos::new(7, 7)));
        assert_eq!(find_five_line_at_pos(&board, Pos::new(7, 7)), None);
    }

    #[test]
    fn test_find_five_line() {
        let board = with_stones(&[(2, 10), (3, 9), (4, 8), (5, 7), (6, 6)], Stone::Black);
        let line = find_five_line_at_pos(&board, Pos::new(4, 8)).unwrap();
        assert_eq!(
            line,
            [
                Pos::new(2, 10),
                Pos::new(3, 9),
                Pos::new(4, 8),
                Pos::new(5, 7),
                Pos::new(6, 6)
            ]
        );
    }

    #[test]
    fn test_count_in_direction_stops_at_gap() {
        let board = with_stones(&[(0, 1), (0, 2), (0, 4)], Stone::Black);
        assert_eq!(count_in_direction(&board, Pos::new(0, 0), (0, 1), Stone::Black, 4), 2);
    }
}
