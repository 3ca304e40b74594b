//! Chess rules for Satranc
//!
//! Owns the canonical game position and everything the search engine asks of
//! it: legal move generation, exact make/unmake, and game-end detection.
//!
//! ## Module Organization
//!
//! - `constants` - Mailbox encoding, direction deltas, castling bits
//! - `types` - Colour, role, piece, square and move values
//! - `board` - Raw mailbox helpers
//! - `move_gen` - Move tables, pseudo-legal/legal generation, attack detection
//! - `make_unmake` - `play`/`undo` with full metadata restoration
//! - `position` - The [`Position`] type and its queries
//! - `fen` - FEN import/export
//! - `perft` - Move-tree node counting
//!
//! ## Example
//!
//! ```
//! use chess_logic::Position;
//!
//! let mut pos = Position::new();
//! let mv = pos.parse_uci("e2e4").unwrap();
//! pos.play(mv).unwrap();
//! assert_eq!(pos.legal_moves().len(), 20);
//! pos.undo().unwrap();
//! assert_eq!(pos, Position::new());
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod fen;
pub mod make_unmake;
pub mod move_gen;
pub mod perft;
pub mod position;
pub mod types;

pub use constants::STARTING_FEN;
pub use error::{ChessLogicError, ChessLogicResult};
pub use perft::{perft, perft_divide};
pub use position::Position;
pub use types::{Board, CastleSide, Color, Move, MoveKind, Outcome, Piece, Role, Square};
