//! Error types for the search engine
//!
//! Covers configuration validation, calls made in the wrong game state, and
//! faults raised by the rules authority while the search walks the tree.

use chess_logic::Color;
use thiserror::Error;

/// Errors that can occur while configuring or running the engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration rejected at construction time
    #[error("Invalid engine configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Engine asked to move when it is not its turn
    #[error("Invalid state: engine plays {engine} but {to_move} is to move")]
    InvalidState { engine: Color, to_move: Color },

    /// Rules authority failed to apply or undo a move; passed through unchanged
    #[error("Rules authority error: {0}")]
    Rules(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl EngineError {
    /// Wrap an authority error without altering it
    pub fn rules<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        EngineError::Rules(Box::new(err))
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
