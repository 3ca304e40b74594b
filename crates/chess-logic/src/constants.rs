//! # Board Encoding Constants
//!
//! The board is a 64-entry mailbox of signed bytes, indexed `rank * 8 + file`
//! so that `0` is a1 and `63` is h8:
//!
//! - Positive values (1-6) are white pieces
//! - Negative values (-1 to -6) are black pieces
//! - Zero is an empty square
//!
//! The sign carries the colour and the absolute value carries the role, so a
//! single comparison answers "does this square hold one of my pieces?".
//!
//! Directions are expressed as `(file, rank)` deltas rather than raw index
//! offsets. Adding a delta to a square can then be bounds-checked per axis,
//! which rules out the classic a-file/h-file wrap-around bug.

pub const VOID_ID: i8 = 0;
pub const PAWN_ID: i8 = 1;
pub const KNIGHT_ID: i8 = 2;
pub const BISHOP_ID: i8 = 3;
pub const ROOK_ID: i8 = 4;
pub const QUEEN_ID: i8 = 5;
pub const KING_ID: i8 = 6;

pub const W_PAWN: i8 = PAWN_ID;
pub const W_KNIGHT: i8 = KNIGHT_ID;
pub const W_BISHOP: i8 = BISHOP_ID;
pub const W_ROOK: i8 = ROOK_ID;
pub const W_QUEEN: i8 = QUEEN_ID;
pub const W_KING: i8 = KING_ID;

pub const B_PAWN: i8 = -PAWN_ID;
pub const B_KNIGHT: i8 = -KNIGHT_ID;
pub const B_BISHOP: i8 = -BISHOP_ID;
pub const B_ROOK: i8 = -ROOK_ID;
pub const B_QUEEN: i8 = -QUEEN_ID;
pub const B_KING: i8 = -KING_ID;

pub const COLOR_WHITE: i8 = 1;
pub const COLOR_BLACK: i8 = -1;

/// Orthogonal directions `(file, rank)`: north, east, south, west.
pub const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Diagonal directions `(file, rank)`: north-east, south-east, south-west, north-west.
pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

pub const KNIGHT_DIRS: [(i8, i8); 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2),
    (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];

pub const KING_DIRS: [(i8, i8); 8] = [
    (0, 1), (1, 1), (1, 0), (1, -1),
    (0, -1), (-1, -1), (-1, 0), (-1, 1),
];

pub const SETUP: [i8; 64] = [
    W_ROOK, W_KNIGHT, W_BISHOP, W_QUEEN, W_KING, W_BISHOP, W_KNIGHT, W_ROOK,
    W_PAWN, W_PAWN, W_PAWN, W_PAWN, W_PAWN, W_PAWN, W_PAWN, W_PAWN,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    B_PAWN, B_PAWN, B_PAWN, B_PAWN, B_PAWN, B_PAWN, B_PAWN, B_PAWN,
    B_ROOK, B_KNIGHT, B_BISHOP, B_QUEEN, B_KING, B_BISHOP, B_KNIGHT, B_ROOK,
];

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

// Castling right bits
pub const WHITE_KINGSIDE: u8 = 0b0001;
pub const WHITE_QUEENSIDE: u8 = 0b0010;
pub const BLACK_KINGSIDE: u8 = 0b0100;
pub const BLACK_QUEENSIDE: u8 = 0b1000;
pub const ALL_CASTLING: u8 = 0b1111;

pub const WR0: usize = 0;
pub const WK4: usize = 4;
pub const WR7: usize = 7;
pub const BR56: usize = 56;
pub const BK60: usize = 60;
pub const BR63: usize = 63;

/// Castling rights that survive a move touching each square.
///
/// A move's rights become `rights & CASTLE_MASK[from] & CASTLE_MASK[to]`, which
/// covers both a king/rook leaving home and a rook being captured at home.
pub const CASTLE_MASK: [u8; 64] = castle_mask();

const fn castle_mask() -> [u8; 64] {
    let mut mask = [ALL_CASTLING; 64];
    mask[WR0] = ALL_CASTLING & !WHITE_QUEENSIDE;
    mask[WK4] = ALL_CASTLING & !(WHITE_KINGSIDE | WHITE_QUEENSIDE);
    mask[WR7] = ALL_CASTLING & !WHITE_KINGSIDE;
    mask[BR56] = ALL_CASTLING & !BLACK_QUEENSIDE;
    mask[BK60] = ALL_CASTLING & !(BLACK_KINGSIDE | BLACK_QUEENSIDE);
    mask[BR63] = ALL_CASTLING & !BLACK_KINGSIDE;
    mask
}
