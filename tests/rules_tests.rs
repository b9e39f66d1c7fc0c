use dama_core::{
    apply_move, create_initial_board, legal_moves, status, Board, Color, GameState, GameStatus,
    Move, Piece, Square, BOARD_SIZE,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn sq(row: usize, col: usize) -> Square {
    Square::new(row, col).unwrap()
}

fn place(board: &mut Board, piece: Piece, squares: &[(usize, usize)]) {
    for &(row, col) in squares {
        board.set(sq(row, col), Some(piece));
    }
}

#[test]
fn adjacent_enemy_is_jumped_two_squares() {
    let mut board = Board::empty();
    place(&mut board, Piece::man(Color::White), &[(4, 4)]);
    place(&mut board, Piece::man(Color::Black), &[(4, 5)]);

    let moves = legal_moves(&board, Color::White);
    assert_eq!(moves.len(), 1);
    let capture = &moves[0];
    assert_eq!(capture.from(), sq(4, 4));
    assert_eq!(capture.to(), sq(4, 6));
    assert_eq!(capture.captured(), &[sq(4, 5)]);

    let next = apply_move(&board, capture);
    assert!(next.at(sq(4, 5)).is_none());
    assert_eq!(next.at(sq(4, 6)), Some(Piece::man(Color::White)));
}

#[test]
fn capture_onto_back_row_promotes_and_stops() {
    // A further jump from the promotion square exists geometrically, but
    // promotion ends the turn; the new king captures on the next move.
    let mut board = Board::empty();
    place(&mut board, Piece::man(Color::White), &[(2, 3)]);
    place(&mut board, Piece::man(Color::Black), &[(1, 3), (0, 4)]);
    // A Black piece far away so the game continues.
    place(&mut board, Piece::man(Color::Black), &[(7, 7)]);

    let moves = legal_moves(&board, Color::White);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].captured(), &[sq(1, 3)]);
    assert_eq!(moves[0].to(), sq(0, 3));

    let next = apply_move(&board, &moves[0]);
    assert_eq!(next.at(sq(0, 3)), Some(Piece::king(Color::White)));
    assert_eq!(next.at(sq(0, 4)), Some(Piece::man(Color::Black)));
}

#[test]
fn whole_chain_is_a_single_move() {
    let mut board = Board::empty();
    place(&mut board, Piece::man(Color::White), &[(6, 2)]);
    place(&mut board, Piece::man(Color::Black), &[(5, 2), (3, 2), (3, 4)]);

    let moves = legal_moves(&board, Color::White);
    assert_eq!(moves.len(), 1);
    let capture = &moves[0];
    assert_eq!(capture.captured(), &[sq(5, 2), sq(3, 2)]);
    assert_eq!(capture.to(), sq(2, 2));

    let next = apply_move(&board, capture);
    assert_eq!(next.piece_count(Color::Black), 1);
    assert_eq!(next.piece_count(Color::White), 1);
}

#[test]
fn game_over_when_all_pieces_fall() {
    let mut state = {
        let mut board = Board::empty();
        place(&mut board, Piece::king(Color::White), &[(7, 3)]);
        place(&mut board, Piece::man(Color::Black), &[(3, 3)]);
        GameState::from_position(board, Color::White)
    };

    let moves = state.legal_moves();
    assert!(moves.iter().all(Move::is_capture));
    let capture = moves[0].clone();
    state.make_move(&capture).unwrap();

    assert_eq!(state.status, GameStatus::Won(Color::White));
    assert_eq!(status(&state.board, Color::Black), GameStatus::Won(Color::White));
}

#[test]
fn captures_never_mix_with_quiet_moves() {
    let mut board = Board::empty();
    place(&mut board, Piece::man(Color::White), &[(4, 4), (6, 0), (6, 7)]);
    place(&mut board, Piece::man(Color::Black), &[(4, 5)]);

    let moves = legal_moves(&board, Color::White);
    assert!(moves.iter().all(Move::is_capture));
}

#[test]
fn initial_position_move_count() {
    let board = create_initial_board();
    let moves = legal_moves(&board, Color::White);

    // Front-rank men (row 5) each have a forward step; sideways steps are
    // blocked by neighbours except at the flanks where the sideways square
    // is also occupied. Row 6 men are fully blocked forward.
    assert!(moves.iter().all(|m| !m.is_capture()));
    assert_eq!(moves.len(), BOARD_SIZE);
    for mv in &moves {
        assert_eq!(mv.from().row, 5);
        assert_eq!(mv.to().row, 4);
    }
}

#[test]
fn random_playout_conserves_pieces() {
    let mut rng = StdRng::seed_from_u64(0xDA11A5);
    let mut state = GameState::new();
    let mut total = state.board.piece_count(Color::White) + state.board.piece_count(Color::Black);

    for _ in 0..200 {
        let moves = state.legal_moves();
        if moves.is_empty() {
            assert_ne!(state.status, GameStatus::InProgress);
            break;
        }

        // Mandatory capture: a mixed list of captures and quiet moves is
        // never legal.
        let any_capture = moves.iter().any(Move::is_capture);
        if any_capture {
            let max_len = moves.iter().map(|m| m.captured().len()).max().unwrap();
            assert!(moves
                .iter()
                .all(|m| m.is_capture() && m.captured().len() == max_len));
        }

        let mv = moves[rng.gen_range(0..moves.len())].clone();
        state.make_move(&mv).unwrap();

        let now =
            state.board.piece_count(Color::White) + state.board.piece_count(Color::Black);
        assert_eq!(now, total - mv.captured().len());
        total = now;

        // Men never sit on their promotion row unpromoted.
        for color in [Color::White, Color::Black] {
            for col in 0..BOARD_SIZE {
                if let Some(piece) = state.board.get(color.promotion_row(), col) {
                    if piece.color == color {
                        assert!(piece.is_king());
                    }
                }
            }
        }
    }
}
