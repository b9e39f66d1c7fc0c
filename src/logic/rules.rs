use crate::engine::Move;
use crate::logic::board::{Board, Color, Piece, Square};
use crate::logic::game::GameStatus;
use crate::logic::generator::MoveGenerator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reasons a requested move is rejected by [`crate::logic::game::GameState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveError {
    /// The game already has a winner.
    GameOver,
    /// No piece on the source square.
    NoPieceAtSource,
    /// The piece on the source square belongs to the opponent.
    NotYourTurn,
    /// The move is not in the legal move list (wrong geometry, or a
    /// capture was available and this move ignores or under-captures it).
    IllegalMove,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::GameOver => "the game is over",
            Self::NoPieceAtSource => "no piece on the source square",
            Self::NotYourTurn => "that piece belongs to the opponent",
            Self::IllegalMove => "move is not legal in this position",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for MoveError {}

/// Every legal move for `color` under default rules. When any capture
/// exists, captures are mandatory and only the chains matching the global
/// maximum length are legal; otherwise all simple moves are.
#[must_use]
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    legal_moves_with(&MoveGenerator::new(), board, color)
}

/// As [`legal_moves`], with an explicit generator for non-default rules.
#[must_use]
pub fn legal_moves_with(generator: &MoveGenerator, board: &Board, color: Color) -> Vec<Move> {
    let mut simple = Vec::new();
    let mut captures = Vec::new();

    for (sq, _) in board.pieces(color) {
        let mut piece_moves = generator.moves_for(board, sq.row, sq.col);
        simple.append(&mut piece_moves.simple);
        captures.append(&mut piece_moves.captures);
    }

    if captures.is_empty() {
        return simple;
    }

    // Mandatory capture with the maximum-capture tie-break, enforced across
    // the whole board: a piece with a shorter chain may not move at all
    // while another piece has a longer one.
    let max_len = captures
        .iter()
        .map(|m| m.captured().len())
        .max()
        .unwrap_or(0);
    captures.retain(|m| m.captured().len() == max_len);
    captures
}

/// Applies `mv` to a copy of `board` and returns the resulting position.
/// `mv` must come from [`legal_moves`] for this board; passing an
/// arbitrary move is a caller bug and panics rather than corrupting state.
#[must_use]
pub fn apply_move(board: &Board, mv: &Move) -> Board {
    let mut next = board.clone();
    let piece = next
        .at(mv.from())
        .expect("apply_move: source square is empty");

    next.set(mv.from(), None);
    for &captured_sq in mv.captured() {
        debug_assert!(
            next.at(captured_sq)
                .is_some_and(|p| p.color != piece.color),
            "captured square does not hold an enemy piece"
        );
        next.set(captured_sq, None);
    }

    let landed = if mv.to().row == piece.color.promotion_row() {
        Piece::king(piece.color)
    } else {
        piece
    };
    next.set(mv.to(), Some(landed));
    next
}

/// Game status with `to_move` about to play. A side loses when it has no
/// pieces or no legal moves; being stalemated is a loss, not a draw.
#[must_use]
pub fn status(board: &Board, to_move: Color) -> GameStatus {
    status_with(&MoveGenerator::new(), board, to_move)
}

#[must_use]
pub fn status_with(generator: &MoveGenerator, board: &Board, to_move: Color) -> GameStatus {
    for color in [Color::White, Color::Black] {
        if board.piece_count(color) == 0 {
            return GameStatus::Won(color.opposite());
        }
    }
    if !generator.has_any_move(board, to_move) {
        return GameStatus::Won(to_move.opposite());
    }
    GameStatus::InProgress
}

/// Squares of `color` attacked by at least one opposing capture. Used by
/// the evaluator's threat term.
#[must_use]
pub fn threatened_squares(generator: &MoveGenerator, board: &Board, color: Color) -> Vec<Square> {
    let mut threatened = Vec::new();
    for (sq, _) in board.pieces(color.opposite()) {
        for capture in generator.moves_for(board, sq.row, sq.col).captures {
            for &victim in capture.captured() {
                if !threatened.contains(&victim) {
                    threatened.push(victim);
                }
            }
        }
    }
    threatened
}
