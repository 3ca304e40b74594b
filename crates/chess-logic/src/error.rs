//! Error types for the chess rules
//!
//! Covers position parsing, move notation and make/unmake misuse.

use thiserror::Error;

/// Errors that can occur while building or mutating a position
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessLogicError {
    /// FEN string could not be parsed
    #[error("Invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    /// Square name outside a1-h8
    #[error("Invalid square: '{square}'")]
    InvalidSquare { square: String },

    /// Colour name not recognised
    #[error("Invalid colour: '{value}' (expected white or black)")]
    InvalidColor { value: String },

    /// Move text is not well-formed UCI notation
    #[error("Invalid move notation: '{notation}'")]
    InvalidUci { notation: String },

    /// Move is well-formed but not legal in the current position
    #[error("Illegal move: {notation}")]
    IllegalMove { notation: String },

    /// Undo requested with an empty move history
    #[error("No move to undo")]
    NothingToUndo,
}

/// Result type alias for rules operations
pub type ChessLogicResult<T> = Result<T, ChessLogicError>;
