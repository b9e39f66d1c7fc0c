use crate::logic::board::{Board, Color, Square};
use crate::logic::game::GameState;
use serde::{Deserialize, Serialize};

pub mod config;
pub mod eval;
pub mod eval_constants;
pub mod search;

/// A candidate transition. Capture moves carry the ordered list of enemy
/// squares jumped along the chain; the split into two variants lets the
/// mandatory-capture and chain-length rules be enforced by matching instead
/// of optional-field checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Simple {
        from: Square,
        to: Square,
    },
    Capture {
        from: Square,
        to: Square,
        captured: Vec<Square>,
    },
}

impl Move {
    #[must_use]
    pub const fn from(&self) -> Square {
        match self {
            Self::Simple { from, .. } | Self::Capture { from, .. } => *from,
        }
    }

    #[must_use]
    pub const fn to(&self) -> Square {
        match self {
            Self::Simple { to, .. } | Self::Capture { to, .. } => *to,
        }
    }

    /// Squares captured by this move, empty for a simple step.
    #[must_use]
    pub fn captured(&self) -> &[Square] {
        match self {
            Self::Simple { .. } => &[],
            Self::Capture { captured, .. } => captured,
        }
    }

    #[must_use]
    pub const fn is_capture(&self) -> bool {
        matches!(self, Self::Capture { .. })
    }

    /// Convenience for tests and callers that address moves by coordinates.
    #[must_use]
    pub fn matches(&self, from: (usize, usize), to: (usize, usize)) -> bool {
        self.from().row == from.0
            && self.from().col == from.1
            && self.to().row == to.0
            && self.to().col == to.1
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: u32,
}

pub trait Evaluator {
    /// Static score of `board`, positive when White is better.
    fn evaluate(&self, board: &Board) -> i32;
}

pub trait Searcher {
    /// Best move for the side to move in `state`, searched to `depth` plies,
    /// or `None` when that side has no legal move.
    fn search(&mut self, state: &GameState, depth: u8) -> Option<(Move, SearchStats)>;
}

/// Side-relative view used by the evaluator and search: positive means
/// `color` is better off.
pub(crate) fn signed_for(color: Color, white_score: i32) -> i32 {
    match color {
        Color::White => white_score,
        Color::Black => -white_score,
    }
}
