//! Rules engine and search for Turkish draughts (dama).
//!
//! The 8x8 variant played here moves men orthogonally (forward and
//! sideways), captures by the short jump in all four orthogonal
//! directions, and gives kings flying moves along orthogonals and
//! diagonals. Captures are mandatory and the longest available chain must
//! be taken; a side with no pieces or no legal moves has lost.
//!
//! [`logic`] holds the board model, move generator and rules;
//! [`engine`] holds the evaluator and the alpha-beta search. The
//! free functions below cover the common embedding cases without any
//! engine setup.

pub mod engine;
pub mod logic;

pub use engine::config::EngineConfig;
pub use engine::eval::SimpleEvaluator;
pub use engine::search::AlphaBetaEngine;
pub use engine::{Evaluator, Move, SearchStats, Searcher};
pub use logic::board::{Board, Color, Piece, Rank, Square, BOARD_SIZE};
pub use logic::game::{GameState, GameStatus};
pub use logic::generator::{MoveGenerator, PieceMoves, Ruleset};
pub use logic::rules::MoveError;

use std::sync::Arc;

/// The fixed starting position.
#[must_use]
pub fn create_initial_board() -> Board {
    Board::new()
}

/// Every legal move for `color` under default rules, with mandatory
/// maximum captures already filtered in.
#[must_use]
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    logic::rules::legal_moves(board, color)
}

/// The position after `mv`, leaving `board` untouched.
#[must_use]
pub fn apply_move(board: &Board, mv: &Move) -> Board {
    logic::rules::apply_move(board, mv)
}

/// Game status with `to_move` about to play.
#[must_use]
pub fn status(board: &Board, to_move: Color) -> GameStatus {
    logic::rules::status(board, to_move)
}

/// One-shot search with a default-configured engine. Returns `None` when
/// `color` has no legal move.
#[must_use]
pub fn choose_move(board: &Board, color: Color, depth: u8) -> Option<Move> {
    AlphaBetaEngine::new(Arc::new(EngineConfig::default())).choose_move(board, color, depth)
}
