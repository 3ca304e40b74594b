//! Move-searching opponent for Satranc
//!
//! Given a position, a depth budget and a side, the engine explores the game
//! tree with depth-limited negamax and alpha-beta pruning, scores the leaves
//! with a static evaluator, and returns the root move with the best score.
//! It never decides legality itself: all moves come from a [`RulesAuthority`].
//!
//! ## Module Organization
//!
//! - `api` - [`Engine`]: construction, `best_move`, `search`
//! - `config` - [`EngineConfig`] and its validation
//! - `rules` - The [`RulesAuthority`] seam and its `chess_logic` implementation
//! - `evaluation` - [`Evaluate`] and the bundled evaluators
//! - `search` - Alpha-beta search and move ordering
//! - `constants` - Piece values and score bounds
//! - `error` - [`EngineError`]
//!
//! ## Example
//!
//! ```
//! use chess_engine::{Engine, EngineConfig};
//! use chess_logic::{Color, Position};
//!
//! let engine = Engine::new(EngineConfig::new(2, Color::White).unwrap()).unwrap();
//! let mut position = Position::new();
//! let mv = engine.best_move(&mut position).unwrap().unwrap();
//! assert!(position.legal_moves().contains(&mv));
//! ```

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod rules;
pub mod search;

pub use api::Engine;
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use evaluation::{terminal_score, Evaluate, MaterialEvaluator, PieceSquareEvaluator};
pub use rules::RulesAuthority;
pub use search::{SearchOutcome, SearchStats};
