//! End-to-end play through the public API

use rand::rngs::StdRng;
use rand::SeedableRng;

use gomoku::rules::find_five_line_at_pos;
use gomoku::{Agent, Board, BoardError, Difficulty, GameConfig, Pos, Stone};

/// Black stones at (7,5)..=(7,8), White scattered far away
fn open_four_board() -> Board {
    let mut board = Board::new();
    let moves = [
        (7, 5),
        (0, 0),
        (7, 6),
        (0, 14),
        (7, 7),
        (14, 0),
        (7, 8),
    ];
    for (r, c) in moves {
        board.place_stone(Pos::new(r, c)).unwrap();
    }
    board
}

#[test]
fn test_every_agent_answers_open_four_at_an_end() {
    let board = open_four_board();
    for d in Difficulty::ALL {
        for player in [Stone::Black, Stone::White] {
            let agent = Agent::new(player, d);
            let pos = agent
                .choose_move_with_rng(&board, &mut StdRng::seed_from_u64(17))
                .unwrap();
            assert!(
                pos == Pos::new(7, 4) || pos == Pos::new(7, 9),
                "{d} as {} chose {pos:?}",
                player.name()
            );
        }
    }
}

#[test]
fn test_hard_white_opens_center() {
    let agent = Agent::new(Stone::White, Difficulty::Hard);
    assert_eq!(agent.choose_move(&Board::new()), Some(Pos::new(7, 7)));
}

#[test]
fn test_agent_never_touches_callers_board() {
    let board = open_four_board();
    let snapshot = board.clone();
    for d in Difficulty::ALL {
        let _ = Agent::new(Stone::White, d).analyze(&board);
    }
    assert_eq!(board, snapshot);
}

#[test]
fn test_seeded_selfplay_is_reproducible() {
    fn play(seed: u64) -> Board {
        let mut rng = StdRng::seed_from_u64(seed);
        let black = Agent::new(Stone::Black, Difficulty::Easy);
        let white = Agent::new(Stone::White, Difficulty::Easy);
        let mut board = Board::with_size(9);
        while !board.is_finished() && !board.is_full() {
            let agent = if board.current_player() == Stone::Black {
                &black
            } else {
                &white
            };
            let pos = agent.choose_move_with_rng(&board, &mut rng).unwrap();
            board.place_stone(pos).unwrap();
        }
        board
    }

    let a = play(2024);
    assert_eq!(a, play(2024));
    assert_eq!(a.move_history().len(), a.stone_count());
}

#[test]
fn test_hard_vs_easy_game_ends_legally() {
    let mut rng = StdRng::seed_from_u64(5);
    let hard = Agent::new(Stone::Black, Difficulty::Hard);
    let easy = Agent::new(Stone::White, Difficulty::Easy);
    let mut board = Board::new();

    while !board.is_finished() && !board.is_full() {
        let agent = if board.current_player() == Stone::Black {
            &hard
        } else {
            &easy
        };
        let pos = agent.choose_move_with_rng(&board, &mut rng).unwrap();
        board.place_stone(pos).unwrap();
    }

    if let Some(winner) = board.winner() {
        let last = board.last_move().unwrap();
        assert_eq!(board.cell_at(last), winner);
        let line = find_five_line_at_pos(&board, last).unwrap();
        assert!(line.iter().all(|&p| board.cell_at(p) == winner));
        assert_eq!(
            board.place_stone(Pos::new(0, 0)).unwrap_err(),
            if board.is_empty(Pos::new(0, 0)) {
                BoardError::GameAlreadyFinished
            } else {
                BoardError::CellOccupied { pos: Pos::new(0, 0) }
            }
        );
    }
}

#[test]
fn test_undo_whole_game_restores_fresh_board() {
    let mut board = open_four_board();
    let played = board.move_history().to_vec();
    for &expected in played.iter().rev() {
        assert_eq!(board.undo(), Ok(expected));
    }
    assert_eq!(board, Board::new());
    assert_eq!(board.undo(), Err(BoardError::NoMovesToUndo));
}

#[test]
fn test_config_drives_agent() {
    let config = GameConfig::from_toml_str(
        r#"
        board_size = 9
        difficulty = "hard"
        human_color = "white"
        "#,
    )
    .unwrap();
    let agent = Agent::new(config.agent_color(), config.difficulty);
    let board = Board::with_size(config.board_size);
    assert_eq!(agent.player(), Stone::Black);
    assert_eq!(agent.choose_move(&board), Some(Pos::new(4, 4)));
}
