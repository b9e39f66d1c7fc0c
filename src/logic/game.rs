use crate::engine::Move;
use crate::logic::board::{Board, Color};
use crate::logic::generator::{MoveGenerator, Ruleset};
use crate::logic::rules::{self, MoveError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Color),
}

/// A full game position plus whose turn it is. `make_move` is the only
/// mutating entry point and validates against the legal move list, so a
/// `GameState` can never hold an unreachable position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub status: GameStatus,
    pub last_move: Option<Move>,
    #[serde(default)]
    rules: Ruleset,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(Ruleset::default())
    }

    #[must_use]
    pub fn with_rules(rules: Ruleset) -> Self {
        Self {
            board: Board::new(),
            turn: Color::White,
            status: GameStatus::InProgress,
            last_move: None,
            rules,
        }
    }

    /// Rebuilds a state from an arbitrary position, recomputing the status.
    #[must_use]
    pub fn from_position(board: Board, turn: Color) -> Self {
        let rules = Ruleset::default();
        let status = rules::status_with(&MoveGenerator::with_rules(rules), &board, turn);
        Self {
            board,
            turn,
            status,
            last_move: None,
            rules,
        }
    }

    #[must_use]
    pub const fn rules(&self) -> Ruleset {
        self.rules
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Legal moves for the side to move; empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        rules::legal_moves_with(&MoveGenerator::with_rules(self.rules), &self.board, self.turn)
    }

    /// Plays `mv` for the side to move. Rejects anything not in the legal
    /// move list, then applies it, flips the turn and refreshes the status.
    pub fn make_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let piece = self.board.at(mv.from()).ok_or(MoveError::NoPieceAtSource)?;
        if piece.color != self.turn {
            return Err(MoveError::NotYourTurn);
        }
        if !self.legal_moves().contains(mv) {
            return Err(MoveError::IllegalMove);
        }

        self.board = rules::apply_move(&self.board, mv);
        self.last_move = Some(mv.clone());
        self.turn = self.turn.opposite();
        self.update_status();
        Ok(())
    }

    fn update_status(&mut self) {
        self.status = rules::status_with(
            &MoveGenerator::with_rules(self.rules),
            &self.board,
            self.turn,
        );
    }
}
