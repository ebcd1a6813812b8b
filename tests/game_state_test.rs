//! Tests for the round state machine.

use cross_zero::{
    Board, CELLS, GameState, GameStatus, IgnoreReason, LINES, Outcome, Player, Position, Square,
    Transition, find_winner,
};

fn play(indices: &[usize]) -> GameState {
    let mut game = GameState::new();
    for &index in indices {
        game.place(index);
    }
    game
}

#[test]
fn test_new_game_starts_with_x() {
    let game = GameState::new();
    assert_eq!(game.turn(), Some(Player::X));
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.board(), &Board::new());
}

#[test]
fn test_turn_alternates() {
    let mut game = GameState::new();
    assert_eq!(game.place(4), Transition::Continued(Player::X));
    assert_eq!(game.turn(), Some(Player::O));
    assert_eq!(game.place(0), Transition::Continued(Player::O));
    assert_eq!(game.turn(), Some(Player::X));
}

#[test]
fn test_open_positions_shrink_with_play() {
    let game = play(&[0, 4]);
    let open = Position::open_positions(game.board());
    assert_eq!(open.len(), 7);
    assert!(!open.contains(&Position::TopLeft));
    assert!(!open.contains(&Position::Center));
    assert!(open.contains(&Position::BottomRight));
}

#[test]
fn test_top_row_win() {
    let mut game = play(&[0, 4, 1, 5]);
    assert_eq!(game.place(2), Transition::Won(Player::X, LINES[0]));

    let x = Square::Occupied(Player::X);
    let o = Square::Occupied(Player::O);
    let e = Square::Empty;
    assert_eq!(game.board().squares(), &[x, x, x, e, o, o, e, e, e]);
    assert_eq!(
        game.status(),
        GameStatus::Won {
            player: Player::X,
            line: LINES[0]
        }
    );
    assert_eq!(game.winning_line(), Some(LINES[0]));
    assert_eq!(game.turn(), None);
    assert!(!game.is_active());
}

#[test]
fn test_o_can_win() {
    // X: 0, 1, 8  O: 3, 4, 5
    let game = play(&[0, 3, 1, 4, 8, 5]);
    assert_eq!(
        game.status(),
        GameStatus::Won {
            player: Player::O,
            line: LINES[1]
        }
    );
}

#[test]
fn test_full_board_draw() {
    let mut game = play(&[0, 1, 2, 3, 4, 6, 5, 8]);
    assert_eq!(game.place(7), Transition::Drawn(Player::X));

    let x = Square::Occupied(Player::X);
    let o = Square::Occupied(Player::O);
    assert_eq!(game.board().squares(), &[x, o, x, o, x, x, o, x, o]);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.board().empty_count(), 0);
    assert_eq!(game.turn(), None);
}

#[test]
fn test_win_on_last_cell_is_a_win_not_a_draw() {
    // X completes the 0-4-8 diagonal with the ninth mark.
    let game = play(&[0, 1, 2, 5, 3, 6, 4, 7, 8]);
    assert!(matches!(
        game.status(),
        GameStatus::Won {
            player: Player::X,
            ..
        }
    ));
}

#[test]
fn test_status_reports_outcome_once_finished() {
    let ongoing = play(&[0, 4]);
    assert!(!ongoing.status().is_terminal());
    assert_eq!(ongoing.status().outcome(), None);

    let won = play(&[0, 4, 1, 5, 2]);
    assert!(won.status().is_terminal());
    assert_eq!(won.status().outcome(), Some(Outcome::Winner(Player::X)));

    let drawn = play(&[0, 1, 2, 3, 4, 6, 5, 8, 7]);
    assert!(drawn.status().is_terminal());
    assert_eq!(drawn.status().outcome(), Some(Outcome::Draw));
}

#[test]
fn test_invalid_placements_change_nothing() {
    let mut game = play(&[4]);
    let before = game;

    assert_eq!(
        game.place(4),
        Transition::Ignored(IgnoreReason::Occupied(4))
    );
    assert_eq!(
        game.place(9),
        Transition::Ignored(IgnoreReason::OutOfRange(9))
    );
    assert_eq!(
        game.place(usize::MAX),
        Transition::Ignored(IgnoreReason::OutOfRange(usize::MAX))
    );
    assert_eq!(game, before);
}

#[test]
fn test_no_placement_after_win() {
    let mut game = play(&[0, 4, 1, 5, 2]);
    let before = game;
    for index in 0..CELLS {
        assert_eq!(game.place(index), Transition::Ignored(IgnoreReason::Inactive));
    }
    assert_eq!(game, before);
}

#[test]
fn test_reset_from_every_state() {
    let fresh = GameState::new();
    for moves in [&[][..], &[4, 0][..], &[0, 4, 1, 5, 2][..], &[0, 1, 2, 3, 4, 6, 5, 8, 7][..]] {
        let mut game = play(moves);
        game.reset();
        assert_eq!(game, fresh, "after {:?}", moves);
        assert_eq!(game.turn(), Some(Player::X));
    }
}

/// Walks every legal game to its end and checks each transition.
fn explore(game: GameState, terminals: &mut usize) {
    for index in 0..CELLS {
        let mut next = game;
        let transition = next.place(index);

        if !game.board().is_empty(index) {
            assert!(matches!(transition, Transition::Ignored(_)));
            assert_eq!(next, game);
            continue;
        }

        let mover = game.turn().expect("Active game has a turn");
        assert_eq!(transition.placed(), Some(mover));
        assert_eq!(
            next.board().squares()[index],
            Square::Occupied(mover)
        );

        match transition {
            Transition::Won(winner, line) => {
                assert_eq!(winner, mover);
                assert!(line.contains(index), "Win must involve the new mark");
                assert_eq!(find_winner(next.board()), Some((winner, line)));
                *terminals += 1;
                assert_frozen(next);
            }
            Transition::Drawn(_) => {
                assert_eq!(next.board().empty_count(), 0);
                assert_eq!(find_winner(next.board()), None);
                *terminals += 1;
                assert_frozen(next);
            }
            Transition::Continued(_) => {
                assert_eq!(find_winner(next.board()), None);
                assert!(next.board().empty_count() > 0);
                assert_eq!(next.turn(), Some(mover.opponent()));
                explore(next, terminals);
            }
            Transition::Ignored(reason) => panic!("Empty cell rejected: {}", reason),
        }
    }
}

fn assert_frozen(game: GameState) {
    for index in 0..CELLS {
        let mut copy = game;
        assert_eq!(copy.place(index), Transition::Ignored(IgnoreReason::Inactive));
        assert_eq!(copy, game);
    }
}

#[test]
fn test_every_legal_game() {
    let mut terminals = 0;
    explore(GameState::new(), &mut terminals);
    // Number of distinct tic-tac-toe games.
    assert_eq!(terminals, 255_168);
}
