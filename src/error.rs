//! Error types for the terminal front-end
//!
//! Provides custom error types for the game session and for settings
//! persistence.

use chess_engine::EngineError;
use chess_logic::ChessLogicError;
use thiserror::Error;

/// Errors that can occur while playing a game
#[derive(Debug, Error)]
pub enum GameError {
    /// Move text rejected by the rules
    #[error("Invalid move: {message}")]
    InvalidMove { message: String },

    /// Player tried to move while the engine is to move
    #[error("It is not your turn")]
    NotYourTurn,

    /// Move attempted after the game has ended
    #[error("The game is over; type 'restart' for a new game")]
    GameOver,

    /// Undo requested with nothing played
    #[error("Nothing to undo")]
    NothingToUndo,

    /// Input line not understood
    #[error("Unknown command '{input}'; type 'help' for the list of commands")]
    UnknownCommand { input: String },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Rules(#[from] ChessLogicError),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while reading or writing settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
