//! Move making and unmaking
//!
//! [`Position::play_unchecked`] records an [`UndoInfo`] for every move it
//! applies and [`Position::undo`] consumes it, so the pair are exact inverses
//! for every move kind: captures put the captured role back, en passant
//! restores the pawn beside the destination, castling returns the rook, and
//! promotion turns the promoted piece back into a pawn. Castling rights, the
//! en-passant square and the halfmove clock are restored from the record.

use crate::constants::*;
use crate::error::{ChessLogicError, ChessLogicResult};
use crate::move_gen::castle_path;
use crate::position::Position;
use crate::types::*;

/// Information needed to undo a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UndoInfo {
    pub mv: Move,
    pub castling: u8,
    pub ep_square: Option<Square>,
    pub halfmove_clock: u32,
}

/// Square of the pawn removed by an en-passant capture
#[inline]
fn en_passant_victim(mv: Move) -> Square {
    Square::from_coords(mv.to.file(), mv.from.rank()).unwrap_or(mv.to)
}

/// Relocate pieces on a bare board as `mv` would, for the side `color`
///
/// Only placement changes; game metadata is the position's business.
pub(crate) fn apply_to_board(board: &mut Board, mv: Move, color: Color) {
    let moving = board[mv.from.index()];
    board[mv.from.index()] = VOID_ID;

    match mv.kind {
        MoveKind::EnPassant => board[en_passant_victim(mv).index()] = VOID_ID,
        MoveKind::Castle(side) => {
            let path = castle_path(color, side);
            board[path.rook_to.index()] = board[path.rook_from.index()];
            board[path.rook_from.index()] = VOID_ID;
        }
        _ => {}
    }

    board[mv.to.index()] = match mv.promotion {
        Some(role) => Piece::new(color, role).encode(),
        None => moving,
    };
}

impl Position {
    /// Apply a move without checking that it is legal
    ///
    /// The move must come from [`Position::legal_moves`] for this exact
    /// position; anything else leaves the position in an unspecified state.
    pub fn play_unchecked(&mut self, mv: Move) {
        let us = self.turn;
        let moving = self.board[mv.from.index()];

        self.history.push(UndoInfo {
            mv,
            castling: self.castling,
            ep_square: self.ep_square,
            halfmove_clock: self.halfmove_clock,
        });

        apply_to_board(&mut self.board, mv, us);

        self.castling &= CASTLE_MASK[mv.from.index()] & CASTLE_MASK[mv.to.index()];

        self.ep_square = match mv.kind {
            MoveKind::DoublePush => Square::from_coords(mv.from.file(), mv.from.rank() + us.forward()),
            _ => None,
        };

        if moving.abs() == PAWN_ID || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        if us == Color::Black {
            self.fullmove_number += 1;
        }
        self.turn = us.other();
    }

    /// Apply a move after checking it against the legal move list
    ///
    /// # Errors
    ///
    /// [`ChessLogicError::IllegalMove`] when `mv` is not legal here; the
    /// position is left untouched.
    pub fn play(&mut self, mv: Move) -> ChessLogicResult<()> {
        if !self.legal_moves().contains(&mv) {
            return Err(ChessLogicError::IllegalMove {
                notation: mv.to_string(),
            });
        }
        self.play_unchecked(mv);
        Ok(())
    }

    /// Take back the most recently played move
    ///
    /// # Errors
    ///
    /// [`ChessLogicError::NothingToUndo`] when no move has been played on this
    /// position since it was created.
    pub fn undo(&mut self) -> ChessLogicResult<Move> {
        let undo = self.history.pop().ok_or(ChessLogicError::NothingToUndo)?;
        let mv = undo.mv;
        let us = self.turn.other();
        let them = us.other();

        let original = match mv.promotion {
            Some(_) => Piece::new(us, Role::Pawn).encode(),
            None => self.board[mv.to.index()],
        };
        self.board[mv.from.index()] = original;

        self.board[mv.to.index()] = match mv.kind {
            MoveKind::Capture(role) => Piece::new(them, role).encode(),
            _ => VOID_ID,
        };

        match mv.kind {
            MoveKind::EnPassant => {
                self.board[en_passant_victim(mv).index()] = Piece::new(them, Role::Pawn).encode();
            }
            MoveKind::Castle(side) => {
                let path = castle_path(us, side);
                self.board[path.rook_from.index()] = self.board[path.rook_to.index()];
                self.board[path.rook_to.index()] = VOID_ID;
            }
            _ => {}
        }

        self.castling = undo.castling;
        self.ep_square = undo.ep_square;
        self.halfmove_clock = undo.halfmove_clock;
        if us == Color::Black {
            self.fullmove_number -= 1;
        }
        self.turn = us;

        Ok(mv)
    }

    /// Number of moves that can currently be undone
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
