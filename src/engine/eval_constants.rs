use crate::logic::board::{Color, Rank, BOARD_SIZE};

pub const VAL_MAN: i32 = 100;
pub const VAL_KING: i32 = 300;

/// Positional bonus for a man, from White's point of view (White advances
/// toward row 0). Combines advancement with a mild centre-control shading;
/// Black reads the same table with the row flipped.
#[rustfmt::skip]
pub const PST_MAN: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [ 55,  60,  65,  70,  70,  65,  60,  55],
    [ 50,  55,  60,  65,  65,  60,  55,  50],
    [ 45,  50,  55,  60,  60,  55,  50,  45],
    [ 40,  45,  50,  55,  55,  50,  45,  40],
    [ 30,  35,  40,  45,  45,  40,  35,  30],
    [ 15,  20,  25,  30,  30,  25,  20,  15],
    [  0,   5,  10,  15,  15,  10,   5,   0],
    [-15, -10,  -5,   0,   0,  -5, -10, -15],
];

/// Positional bonus for a king. Kings have no advancement incentive, only
/// centralization; the table is symmetric so the row flip is a no-op, kept
/// for uniformity with `PST_MAN`.
#[rustfmt::skip]
pub const PST_KING: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [-30, -20, -10,   0,   0, -10, -20, -30],
    [-20, -10,   0,  10,  10,   0, -10, -20],
    [-10,   0,  10,  20,  20,  10,   0, -10],
    [  0,  10,  20,  30,  30,  20,  10,   0],
    [  0,  10,  20,  30,  30,  20,  10,   0],
    [-10,   0,  10,  20,  20,  10,   0, -10],
    [-20, -10,   0,  10,  10,   0, -10, -20],
    [-30, -20, -10,   0,   0, -10, -20, -30],
];

#[must_use]
pub const fn get_piece_value(rank: Rank) -> i32 {
    match rank {
        Rank::Man => VAL_MAN,
        Rank::King => VAL_KING,
    }
}

/// Positional value for a piece of `color` standing on `(row, col)`.
/// Tables are written for White; Black mirrors by flipping the row.
#[must_use]
pub const fn get_pst_value(rank: Rank, color: Color, row: usize, col: usize) -> i32 {
    let row = match color {
        Color::White => row,
        Color::Black => BOARD_SIZE - 1 - row,
    };
    match rank {
        Rank::Man => PST_MAN[row][col],
        Rank::King => PST_KING[row][col],
    }
}
