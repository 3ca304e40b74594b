//! Core value types shared by the rules and the search
//!
//! Everything here is a small `Copy` value. The mailbox board stores pieces as
//! signed bytes (see [`crate::constants`]); [`Piece::encode`] and
//! [`Piece::decode`] are the only places that translate between the two
//! representations.

use crate::constants::*;
use crate::error::ChessLogicError;
use std::fmt;
use std::str::FromStr;

pub type Board = [i8; 64];

/// Side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Board sign for this colour (`1` for White, `-1` for Black)
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Color::White => COLOR_WHITE,
            Color::Black => COLOR_BLACK,
        }
    }

    /// Rank direction pawns of this colour advance in
    #[inline]
    pub fn forward(self) -> i8 {
        self.sign()
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

impl FromStr for Color {
    type Err = ChessLogicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            other => Err(ChessLogicError::InvalidColor {
                value: other.to_string(),
            }),
        }
    }
}

/// Kind of piece, independent of colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Pawn,
        Role::Knight,
        Role::Bishop,
        Role::Rook,
        Role::Queen,
        Role::King,
    ];

    /// Promotion choices in generation order
    pub const PROMOTIONS: [Role; 4] = [Role::Queen, Role::Rook, Role::Bishop, Role::Knight];

    #[inline]
    pub fn id(self) -> i8 {
        match self {
            Role::Pawn => PAWN_ID,
            Role::Knight => KNIGHT_ID,
            Role::Bishop => BISHOP_ID,
            Role::Rook => ROOK_ID,
            Role::Queen => QUEEN_ID,
            Role::King => KING_ID,
        }
    }

    #[inline]
    pub fn from_id(id: i8) -> Option<Role> {
        match id {
            PAWN_ID => Some(Role::Pawn),
            KNIGHT_ID => Some(Role::Knight),
            BISHOP_ID => Some(Role::Bishop),
            ROOK_ID => Some(Role::Rook),
            QUEEN_ID => Some(Role::Queen),
            KING_ID => Some(Role::King),
            _ => None,
        }
    }

    /// Lowercase letter used by FEN and UCI
    pub fn char(self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        }
    }

    pub fn from_char(c: char) -> Option<Role> {
        match c.to_ascii_lowercase() {
            'p' => Some(Role::Pawn),
            'n' => Some(Role::Knight),
            'b' => Some(Role::Bishop),
            'r' => Some(Role::Rook),
            'q' => Some(Role::Queen),
            'k' => Some(Role::King),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    pub fn new(color: Color, role: Role) -> Self {
        Piece { color, role }
    }

    /// Signed mailbox encoding of this piece
    #[inline]
    pub fn encode(self) -> i8 {
        self.role.id() * self.color.sign()
    }

    /// Decode a mailbox entry; `None` for an empty square
    #[inline]
    pub fn decode(value: i8) -> Option<Piece> {
        let role = Role::from_id(value.abs())?;
        let color = if value > 0 { Color::White } else { Color::Black };
        Some(Piece { color, role })
    }

    /// FEN symbol: uppercase for White, lowercase for Black
    pub fn symbol(self) -> char {
        match self.color {
            Color::White => self.role.char().to_ascii_uppercase(),
            Color::Black => self.role.char(),
        }
    }

    pub fn from_symbol(c: char) -> Option<Piece> {
        let role = Role::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece { color, role })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A board square, `0` = a1 through `63` = h8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);

    #[inline]
    pub fn new(index: u8) -> Option<Square> {
        (index < 64).then_some(Square(index))
    }

    /// Square from zero-based file (a = 0) and rank (1st rank = 0)
    #[inline]
    pub fn from_coords(file: i8, rank: i8) -> Option<Square> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn file(self) -> i8 {
        (self.0 % 8) as i8
    }

    #[inline]
    pub fn rank(self) -> i8 {
        (self.0 / 8) as i8
    }

    /// Step by a `(file, rank)` delta, `None` when leaving the board
    #[inline]
    pub fn offset(self, (df, dr): (i8, i8)) -> Option<Square> {
        Square::from_coords(self.file() + df, self.rank() + dr)
    }

    /// Light squares are the ones where file + rank is odd (h1 is light, a1 is dark)
    #[inline]
    pub fn is_light(self) -> bool {
        (self.file() + self.rank()) % 2 == 1
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file() as u8) as char;
        let rank = (b'1' + self.rank() as u8) as char;
        write!(f, "{}{}", file, rank)
    }
}

impl FromStr for Square {
    type Err = ChessLogicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessLogicError::InvalidSquare {
            square: s.to_string(),
        };
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Square::from_coords((file - b'a') as i8, (rank - b'1') as i8).ok_or_else(invalid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// What a move does besides relocating the moving piece
///
/// The variants carry exactly what make/unmake needs to be exact inverses: a
/// capture remembers the captured role, en passant and castling identify the
/// extra square that changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Quiet,
    DoublePush,
    Capture(Role),
    EnPassant,
    Castle(CastleSide),
}

/// A move as produced by legal move generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
    pub promotion: Option<Role>,
}

impl Move {
    pub fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Move {
            from,
            to,
            kind,
            promotion: None,
        }
    }

    pub fn with_promotion(mut self, role: Role) -> Self {
        self.promotion = Some(role);
        self
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        matches!(self.kind, MoveKind::Capture(_) | MoveKind::EnPassant)
    }

    /// Role removed from the board by this move, if any
    #[inline]
    pub fn captured(&self) -> Option<Role> {
        match self.kind {
            MoveKind::Capture(role) => Some(role),
            MoveKind::EnPassant => Some(Role::Pawn),
            _ => None,
        }
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }
}

impl fmt::Display for Move {
    /// UCI long algebraic notation, e.g. `e2e4` or `e7e8q`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(role) = self.promotion {
            write!(f, "{}", role.char())?;
        }
        Ok(())
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
}

impl Outcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } => Some(winner),
            Outcome::Stalemate | Outcome::InsufficientMaterial => None,
        }
    }
}
