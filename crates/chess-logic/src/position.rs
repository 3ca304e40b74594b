//! Game position and its queries
//!
//! A [`Position`] owns everything needed to continue a game: the mailbox,
//! the side to move, castling rights, the en-passant square, both move
//! counters and the undo stack. Mutation goes through
//! [`Position::play`]/[`Position::undo`] (see `make_unmake`); everything in
//! this file is a read-only query.

use crate::board::{find_king, init_board};
use crate::constants::*;
use crate::error::{ChessLogicError, ChessLogicResult};
use crate::make_unmake::UndoInfo;
use crate::move_gen::{self, attack::is_king_attacked};
use crate::types::*;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) turn: Color,
    pub(crate) castling: u8,
    pub(crate) ep_square: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) history: Vec<UndoInfo>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// The standard starting position, White to move
    pub fn new() -> Self {
        Position {
            board: init_board(),
            turn: Color::White,
            castling: ALL_CASTLING,
            ep_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        Piece::decode(self.board[square.index()])
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        find_king(&self.board, color)
    }

    /// Castling rights as the four-bit mask of [`crate::constants`]
    #[inline]
    pub fn castling_rights(&self) -> u8 {
        self.castling
    }

    #[inline]
    pub fn ep_square(&self) -> Option<Square> {
        self.ep_square
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Most recently played move still on the undo stack
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|undo| undo.mv)
    }

    /// All legal moves for the side to move, in generation order (a1 to h8)
    pub fn legal_moves(&self) -> Vec<Move> {
        move_gen::generate_legal_moves(self)
    }

    /// Legal moves of the piece standing on `from`
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        let mut moves = self.legal_moves();
        moves.retain(|mv| mv.from == from);
        moves
    }

    fn has_legal_move(&self) -> bool {
        move_gen::generate_pseudo_legal_moves(self)
            .into_iter()
            .any(|mv| move_gen::is_legal(self, mv))
    }

    /// Is the side to move in check?
    pub fn is_check(&self) -> bool {
        is_king_attacked(&self.board, self.turn)
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_check() && !self.has_legal_move()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && !self.has_legal_move()
    }

    /// Neither side has mating material left
    ///
    /// True when no pawn, rook or queen remains and either at most one minor
    /// piece is on the board, or every minor piece is a bishop and all of them
    /// stand on squares of the same colour.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = 0;
        let mut knights = 0;
        let mut light_bishops = 0;
        let mut dark_bishops = 0;

        for square in Square::all() {
            match self.board[square.index()].abs() {
                PAWN_ID | ROOK_ID | QUEEN_ID => return false,
                KNIGHT_ID => {
                    minors += 1;
                    knights += 1;
                }
                BISHOP_ID => {
                    minors += 1;
                    if square.is_light() {
                        light_bishops += 1;
                    } else {
                        dark_bishops += 1;
                    }
                }
                _ => {}
            }
        }

        minors <= 1 || (knights == 0 && (light_bishops == 0 || dark_bishops == 0))
    }

    pub fn is_game_over(&self) -> bool {
        self.is_insufficient_material() || !self.has_legal_move()
    }

    /// How the game ended, or `None` while it is still going
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.has_legal_move() {
            return Some(if self.is_check() {
                Outcome::Checkmate {
                    winner: self.turn.other(),
                }
            } else {
                Outcome::Stalemate
            });
        }
        if self.is_insufficient_material() {
            return Some(Outcome::InsufficientMaterial);
        }
        None
    }

    /// Does `mv` remove an opponent piece? Includes en passant.
    #[inline]
    pub fn is_capture(&self, mv: Move) -> bool {
        mv.is_capture()
    }

    /// Resolve UCI notation (`e2e4`, `e7e8q`) against the legal move list
    ///
    /// A pawn move to the last rank written without a promotion letter
    /// promotes to a queen.
    ///
    /// # Errors
    ///
    /// [`ChessLogicError::InvalidUci`] for malformed text and
    /// [`ChessLogicError::IllegalMove`] for a well-formed move that is not
    /// legal here.
    pub fn parse_uci(&self, notation: &str) -> ChessLogicResult<Move> {
        let text = notation.trim();
        let invalid = || ChessLogicError::InvalidUci {
            notation: text.to_string(),
        };

        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(invalid());
        }
        let from: Square = text[0..2].parse().map_err(|_| invalid())?;
        let to: Square = text[2..4].parse().map_err(|_| invalid())?;
        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => match Role::from_char(c) {
                Some(role) if Role::PROMOTIONS.contains(&role) => Some(role),
                _ => return Err(invalid()),
            },
        };

        let candidates: Vec<Move> = self
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.from == from && mv.to == to)
            .collect();

        let wanted = promotion.or_else(|| {
            candidates
                .iter()
                .any(Move::is_promotion)
                .then_some(Role::Queen)
        });

        candidates
            .into_iter()
            .find(|mv| mv.promotion == wanted)
            .ok_or_else(|| ChessLogicError::IllegalMove {
                notation: text.to_string(),
            })
    }
}

impl fmt::Display for Position {
    /// Text diagram from White's side, rank 8 on top
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let symbol = Square::from_coords(file, rank)
                    .and_then(|sq| self.piece_at(sq))
                    .map(Piece::symbol)
                    .unwrap_or('.');
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
