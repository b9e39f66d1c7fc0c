use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 8;

/// Number of men each side starts with.
pub const PIECES_PER_SIDE: usize = 2 * BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row direction this side's men advance in.
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// The opponent's back row; a man ending a move here becomes a king.
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Self::White => 0,
            Self::Black => BOARD_SIZE - 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rank {
    Man,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    #[must_use]
    pub const fn man(color: Color) -> Self {
        Self {
            color,
            rank: Rank::Man,
        }
    }

    #[must_use]
    pub const fn king(color: Color) -> Self {
        Self {
            color,
            rank: Rank::King,
        }
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }
}

/// A validated board coordinate. Constructing one checks bounds, so
/// everything downstream can index without re-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Steps by a signed offset, returning `None` when the result would
    /// leave the board.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Self::new(row, col)
    }
}

/// The 8x8 playing field. A `Board` is a value: the rules engine and the
/// search never mutate a caller's board, they clone and return new ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The fixed Turkish draughts starting position: two full rows of men
    /// per side, with the back rows and the two centre rows empty.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_pieces(Color::Black, 1);
        board.setup_pieces(Color::White, BOARD_SIZE - 3);
        board
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    fn setup_pieces(&mut self, color: Color, first_row: usize) {
        for row in first_row..first_row + 2 {
            for col in 0..BOARD_SIZE {
                if let Some(sq) = Square::new(row, col) {
                    self.set(sq, Some(Piece::man(color)));
                }
            }
        }
    }

    /// Occupant of `(row, col)`. Out-of-range coordinates read as empty so
    /// callers can probe freely.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Piece> {
        Square::new(row, col).and_then(|sq| self.at(sq))
    }

    #[must_use]
    pub fn at(&self, sq: Square) -> Option<Piece> {
        self.grid
            .get(sq.row)
            .and_then(|r| r.get(sq.col))
            .copied()
            .flatten()
    }

    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        if let Some(cell) = self.grid.get_mut(sq.row).and_then(|r| r.get_mut(sq.col)) {
            *cell = piece;
        }
    }

    /// Iterates every piece of `color` with its square, row-major.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.grid.iter().enumerate().flat_map(move |(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                let piece = (*cell)?;
                if piece.color == color {
                    Some((Square { row, col }, piece))
                } else {
                    None
                }
            })
        })
    }

    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }
}
