use crate::engine::Move;
use crate::logic::board::{Board, Color, Piece, Rank, Square};
use serde::{Deserialize, Serialize};

/// Men step forward and sideways; captures for men run along all four
/// orthogonals (backward captures are legal in this variant).
const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Kings move and capture along orthogonals and diagonals.
const KING_DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Tunable rule parameters. `man_capture_range` is the number of squares a
/// man's capture scan may look ahead for an enemy piece: 1 is the classic
/// adjacent jump, larger values give the extended-range jump variant. Kings
/// are unaffected (their rays are already unbounded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ruleset {
    pub man_capture_range: usize,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self {
            man_capture_range: 1,
        }
    }
}

/// Moves available to a single piece, before the whole-board
/// mandatory-capture filter is applied.
#[derive(Debug, Clone, Default)]
pub struct PieceMoves {
    pub simple: Vec<Move>,
    pub captures: Vec<Move>,
}

impl PieceMoves {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.simple.is_empty() && self.captures.is_empty()
    }
}

pub struct MoveGenerator {
    rules: Ruleset,
}

impl Default for MoveGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(Ruleset::default())
    }

    #[must_use]
    pub const fn with_rules(rules: Ruleset) -> Self {
        Self { rules }
    }

    #[must_use]
    pub const fn rules(&self) -> Ruleset {
        self.rules
    }

    /// All simple moves and all maximal capture chains for the piece on
    /// `(row, col)`. An empty or out-of-range square yields empty lists so
    /// callers can probe any coordinate without pre-checking occupancy.
    ///
    /// Capture chains are returned unfiltered; the board-wide
    /// maximum-capture rule is applied during aggregation in
    /// [`crate::logic::rules::legal_moves`].
    #[must_use]
    pub fn moves_for(&self, board: &Board, row: usize, col: usize) -> PieceMoves {
        let Some(from) = Square::new(row, col) else {
            return PieceMoves::default();
        };
        let Some(piece) = board.at(from) else {
            return PieceMoves::default();
        };

        let mut moves = PieceMoves {
            simple: self.simple_moves(board, from, piece),
            captures: Vec::new(),
        };
        self.find_captures(board, piece, from, from, &[], &mut moves.captures);
        moves
    }

    fn simple_moves(&self, board: &Board, from: Square, piece: Piece) -> Vec<Move> {
        let mut moves = Vec::new();
        match piece.rank {
            Rank::Man => {
                for (d_row, d_col) in Self::man_step_directions(piece.color) {
                    if let Some(to) = from.offset(d_row, d_col) {
                        if board.at(to).is_none() {
                            moves.push(Move::Simple { from, to });
                        }
                    }
                }
            }
            Rank::King => {
                for (d_row, d_col) in KING_DIRECTIONS {
                    let mut to = from.offset(d_row, d_col);
                    while let Some(sq) = to {
                        if board.at(sq).is_some() {
                            break;
                        }
                        moves.push(Move::Simple { from, to: sq });
                        to = sq.offset(d_row, d_col);
                    }
                }
            }
        }
        moves
    }

    /// Step directions for a man: forward plus both sideways, never backward.
    const fn man_step_directions(color: Color) -> [(isize, isize); 3] {
        [(color.forward(), 0), (0, -1), (0, 1)]
    }

    /// Depth-first search for maximal capture chains starting from `pos`.
    /// Each jump is simulated on a board copy with the captured piece
    /// removed immediately, then the landing square is re-probed; one
    /// terminal `Move::Capture` is emitted per chain that cannot extend.
    fn find_captures(
        &self,
        board: &Board,
        piece: Piece,
        origin: Square,
        pos: Square,
        captured: &[Square],
        out: &mut Vec<Move>,
    ) {
        match piece.rank {
            Rank::Man => self.man_captures(board, piece.color, origin, pos, captured, out),
            Rank::King => self.king_captures(board, piece.color, origin, pos, captured, out),
        }
    }

    fn man_captures(
        &self,
        board: &Board,
        color: Color,
        origin: Square,
        pos: Square,
        captured: &[Square],
        out: &mut Vec<Move>,
    ) {
        let range = self.rules.man_capture_range.max(1);

        for (d_row, d_col) in ORTHOGONAL {
            // First occupied square within range must be an enemy; the
            // landing square is the one immediately past it.
            let mut enemy = None;
            let mut sq = pos;
            for _ in 0..range {
                let Some(next) = sq.offset(d_row, d_col) else {
                    break;
                };
                sq = next;
                match board.at(sq) {
                    None => {}
                    Some(p) if p.color != color => {
                        enemy = Some(sq);
                        break;
                    }
                    Some(_) => break,
                }
            }

            let Some(enemy_sq) = enemy else { continue };
            let Some(landing) = enemy_sq.offset(d_row, d_col) else {
                continue;
            };
            if board.at(landing).is_some() {
                continue;
            }

            let mut chain = captured.to_vec();
            chain.push(enemy_sq);

            let mut next = board.clone();
            next.set(pos, None);
            next.set(enemy_sq, None);

            if landing.row == color.promotion_row() {
                // Promotion ends the turn: the chain stops here even if
                // further jumps would be geometrically available.
                out.push(Move::Capture {
                    from: origin,
                    to: landing,
                    captured: chain,
                });
            } else {
                next.set(landing, Some(Piece::man(color)));
                let before = out.len();
                self.man_captures(&next, color, origin, landing, &chain, out);
                if out.len() == before {
                    out.push(Move::Capture {
                        from: origin,
                        to: landing,
                        captured: chain,
                    });
                }
            }
        }
    }

    fn king_captures(
        &self,
        board: &Board,
        color: Color,
        origin: Square,
        pos: Square,
        captured: &[Square],
        out: &mut Vec<Move>,
    ) {
        for (d_row, d_col) in KING_DIRECTIONS {
            // Slide to the first occupied square on the ray.
            let mut enemy = None;
            let mut sq = pos;
            while let Some(next) = sq.offset(d_row, d_col) {
                sq = next;
                match board.at(sq) {
                    None => {}
                    Some(p) if p.color != color => {
                        enemy = Some(sq);
                        break;
                    }
                    Some(_) => break,
                }
            }

            let Some(enemy_sq) = enemy else { continue };

            // Every empty square beyond the jumped piece, up to the next
            // blocker, is a distinct landing; each landing branches its own
            // continuation search.
            let mut landing = enemy_sq.offset(d_row, d_col);
            while let Some(land_sq) = landing {
                if board.at(land_sq).is_some() {
                    break;
                }

                let mut chain = captured.to_vec();
                chain.push(enemy_sq);

                let mut next = board.clone();
                next.set(pos, None);
                next.set(enemy_sq, None);
                next.set(land_sq, Some(Piece::king(color)));

                let before = out.len();
                self.king_captures(&next, color, origin, land_sq, &chain, out);
                if out.len() == before {
                    out.push(Move::Capture {
                        from: origin,
                        to: land_sq,
                        captured: chain,
                    });
                }

                landing = land_sq.offset(d_row, d_col);
            }
        }
    }

    /// Whether `color` has at least one move anywhere, short-circuiting as
    /// soon as one is found. A piece with any single jump also has a chain,
    /// so chains never need expanding here.
    #[must_use]
    pub fn has_any_move(&self, board: &Board, color: Color) -> bool {
        board
            .pieces(color)
            .any(|(sq, piece)| self.piece_can_move(board, sq, piece))
    }

    fn piece_can_move(&self, board: &Board, from: Square, piece: Piece) -> bool {
        let step_dirs: &[(isize, isize)] = match piece.rank {
            Rank::Man => &Self::man_step_directions(piece.color),
            Rank::King => &KING_DIRECTIONS,
        };
        for &(d_row, d_col) in step_dirs {
            if let Some(to) = from.offset(d_row, d_col) {
                if board.at(to).is_none() {
                    return true;
                }
            }
        }

        // No step available; look for a first jump.
        let mut probe = Vec::new();
        self.find_captures(board, piece, from, from, &[], &mut probe);
        !probe.is_empty()
    }
}
