//! Public API for the search engine
//!
//! ## Module Organization
//!
//! - `engine` - [`Engine`] construction and move selection

mod engine;

pub use engine::Engine;
