use dama_core::{
    AlphaBetaEngine, Board, Color, EngineConfig, GameState, GameStatus, Piece, Square,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

fn sq(row: usize, col: usize) -> Square {
    Square::new(row, col).unwrap()
}

fn pruned_engine() -> AlphaBetaEngine {
    AlphaBetaEngine::new(Arc::new(EngineConfig::default()))
}

fn unpruned_engine() -> AlphaBetaEngine {
    AlphaBetaEngine::new(Arc::new(EngineConfig {
        use_pruning: false,
        ..EngineConfig::default()
    }))
}

/// Pruning must never change the selected move, only cut the node count.
fn assert_equivalent(board: &Board, to_move: Color, depth: u8) {
    let mut pruned = pruned_engine();
    let mut full = unpruned_engine();

    let pruned_move = pruned.choose_move(board, to_move, depth);
    let full_move = full.choose_move(board, to_move, depth);

    assert_eq!(pruned_move, full_move);
    assert!(pruned.nodes_searched() <= full.nodes_searched());
}

#[test]
fn pruning_is_transparent_on_the_opening() {
    assert_equivalent(&Board::new(), Color::White, 3);
    assert_equivalent(&Board::new(), Color::Black, 3);
}

#[test]
fn pruning_is_transparent_in_a_tactical_position() {
    let mut board = Board::empty();
    board.set(sq(5, 4), Some(Piece::man(Color::White)));
    board.set(sq(5, 1), Some(Piece::man(Color::White)));
    board.set(sq(0, 0), Some(Piece::king(Color::White)));
    board.set(sq(3, 4), Some(Piece::man(Color::Black)));
    board.set(sq(2, 1), Some(Piece::man(Color::Black)));
    board.set(sq(7, 6), Some(Piece::king(Color::Black)));

    assert_equivalent(&board, Color::White, 4);
    assert_equivalent(&board, Color::Black, 4);
}

#[test]
fn pruning_is_transparent_along_a_random_game() {
    // Sample positions from a seeded playout and check the property in the
    // middlegame, where the trees actually diverge in size.
    let mut rng = StdRng::seed_from_u64(7);
    let mut state = GameState::new();

    for ply in 0..40 {
        let moves = state.legal_moves();
        if moves.is_empty() {
            break;
        }
        if ply % 8 == 0 {
            assert_equivalent(&state.board, state.turn, 3);
        }
        let mv = moves[rng.gen_range(0..moves.len())].clone();
        state.make_move(&mv).unwrap();
    }
}

#[test]
fn pruning_saves_nodes_on_a_full_width_tree() {
    let mut pruned = pruned_engine();
    let mut full = unpruned_engine();

    pruned.choose_move(&Board::new(), Color::White, 4);
    full.choose_move(&Board::new(), Color::White, 4);

    assert!(pruned.nodes_searched() < full.nodes_searched());
}

#[test]
fn engine_takes_the_winning_capture() {
    // Black's last piece sits on the White king's file.
    let mut board = Board::empty();
    board.set(sq(7, 2), Some(Piece::king(Color::White)));
    board.set(sq(3, 2), Some(Piece::man(Color::Black)));
    let mut state = GameState::from_position(board, Color::White);

    let mv = pruned_engine()
        .choose_move(&state.board, Color::White, 4)
        .unwrap();
    assert_eq!(mv.captured(), &[sq(3, 2)]);

    state.make_move(&mv).unwrap();
    assert_eq!(state.status, GameStatus::Won(Color::White));
}

#[test]
fn engine_defends_the_attacked_man() {
    // Black to move; White threatens to jump the Black man on (3,4) if it
    // steps into range. A depth-2 Black search keeps its man out of take.
    let mut board = Board::empty();
    board.set(sq(3, 4), Some(Piece::man(Color::Black)));
    board.set(sq(5, 4), Some(Piece::man(Color::White)));

    let mv = pruned_engine()
        .choose_move(&board, Color::Black, 2)
        .unwrap();
    // Stepping to (4,4) hands White a capture; anything else is safe.
    assert_ne!(mv.to(), sq(4, 4));
}

#[test]
fn deeper_search_never_picks_an_illegal_move() {
    let mut state = GameState::new();
    let mut engine = pruned_engine();

    for _ in 0..6 {
        let Some(mv) = engine.choose_move(&state.board, state.turn, 4) else {
            break;
        };
        assert!(state.legal_moves().contains(&mv));
        state.make_move(&mv).unwrap();
        if state.is_over() {
            break;
        }
    }
}
