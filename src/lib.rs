//! Satranc: play chess in the terminal against a depth-limited engine
//!
//! The rules live in `chess_logic` and the search in `chess_engine`; this
//! crate is the front-end that ties them to a human player.

pub mod cli;
pub mod error;
pub mod render;
pub mod session;
pub mod settings;

pub use error::{GameError, GameResult, SettingsError, SettingsResult};
pub use session::GameSession;
pub use settings::Settings;
