use kingrace::{Board, Color, Game, GameState, MoveError, Role, Square};

fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

fn setup(pieces: &[(&str, kingrace::Piece)], turn: Color) -> Game {
    let mut board = Board::empty();
    for &(name, piece) in pieces {
        board.set_piece_at(sq(name), piece);
    }
    Game::from_board(board, turn).expect("valid setup")
}

#[test]
fn test_first_rook_move() {
    let mut game = Game::new();
    assert!(game.make_move("a2", "a3"));
    assert_eq!(game.board().piece_at(sq("a2")), None);
    assert_eq!(
        game.board().piece_at(sq("a3")),
        Some(Role::Rook.of(Color::White))
    );
}

#[test]
fn test_empty_source_changes_nothing() {
    let mut game = Game::new();
    let before = game.board().clone();
    assert!(!game.make_move("d4", "d5"));
    assert_eq!(game.board(), &before);
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn test_black_cannot_move_first() {
    let mut game = Game::new();
    assert!(!game.make_move("h2", "h3"));
    assert_eq!(game.play("h2", "h3"), Err(MoveError::WrongTurn));
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn test_blocked_bishop() {
    let mut game = Game::new();
    // c2 holds the white knight.
    assert!(!game.make_move("b1", "d3"));
    assert_eq!(game.play("b1", "d3"), Err(MoveError::IllegalGeometry));
}

#[test]
fn test_white_wins_on_second_sighting() {
    let mut game = setup(
        &[
            ("b7", Color::White.king()),
            ("g7", Color::Black.king()),
            ("a1", Role::Rook.of(Color::White)),
        ],
        Color::White,
    );

    // The black king stands one rank short and may still draw level.
    assert!(game.make_move("b7", "b8"));
    assert_eq!(game.game_state(), GameState::Unfinished);
    assert_eq!(game.win_progress(), 1);

    // Black declines.
    assert!(game.make_move("g7", "g6"));
    assert_eq!(game.win_progress(), 2);
    assert_eq!(game.game_state(), GameState::WhiteWon);
}

#[test]
fn test_black_draws_level() {
    let mut game = setup(
        &[("b7", Color::White.king()), ("g7", Color::Black.king())],
        Color::White,
    );
    assert!(game.make_move("b7", "b8"));
    assert!(game.make_move("g7", "g8"));
    assert_eq!(game.game_state(), GameState::Tie);
    assert_eq!(game.game_state().winner(), None);
}

#[test]
fn test_fresh_game_is_unfinished() {
    let game = Game::new();
    assert_eq!(game.game_state(), GameState::Unfinished);
    assert_eq!(game.game_state().to_string(), "UNFINISHED");
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn test_check_rejection_restores_board() {
    let mut game = Game::new();
    assert!(game.make_move("a2", "a3"));
    assert!(game.make_move("h2", "h3"));

    // Taking the rook on h3 would put the black king on h1 in check.
    let before = game.board().clone();
    assert_eq!(game.play("a3", "h3"), Err(MoveError::Check));
    assert_eq!(game.board(), &before);
    assert_eq!(game.turn(), Color::White);
    assert!(game.registry().is_alive(Role::Rook.of(Color::Black)));
}

#[test]
fn test_turns_alternate() {
    let mut game = Game::new();
    let moves = [("a2", "a3"), ("h2", "h3"), ("c1", "d3"), ("f1", "e3")];
    for (i, &(from, to)) in moves.iter().enumerate() {
        let expected = if i % 2 == 0 { Color::White } else { Color::Black };
        assert_eq!(game.turn(), expected);
        assert_eq!(game.play(from, to), Ok(()));
    }
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn test_finished_game_rejects_everything() {
    let mut game = Game::new();
    assert!(game.make_move("a2", "a8"));
    assert_eq!(game.game_state(), GameState::WhiteWon);

    let before = game.board().clone();
    for _ in 0..2 {
        assert_eq!(game.play("h2", "h3"), Err(MoveError::GameOver));
        assert_eq!(game.play("zz", "h3"), Err(MoveError::GameOver));
    }
    assert_eq!(game.board(), &before);
    assert_eq!(game.game_state(), GameState::WhiteWon);
    assert!(game.legal_moves().is_empty());
}

#[test]
fn test_malformed_squares() {
    let mut game = Game::new();
    for (from, to) in [("a9", "a3"), ("a2", "i2"), ("", "a3"), ("a2", "a33")] {
        assert!(
            matches!(game.play(from, to), Err(MoveError::InvalidSquare(_))),
            "{from} {to}"
        );
    }
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn test_legal_moves_are_accepted() {
    let game = Game::new();
    let moves = game.legal_moves();
    assert!(!moves.is_empty());
    for m in moves {
        assert!(game.is_legal(m), "{m}");
        let mut copy = game.clone();
        assert_eq!(copy.play_move(m), Ok(()), "{m}");
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() {
    assert_eq!(serde_json::to_string(&sq("e4")).expect("serialize"), r#""e4""#);
    assert_eq!(
        serde_json::from_str::<GameState>(r#""WHITE_WON""#).expect("deserialize"),
        GameState::WhiteWon
    );
    assert_eq!(
        serde_json::from_str::<Color>(r#""black""#).expect("deserialize"),
        Color::Black
    );
}
