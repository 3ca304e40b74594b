//! Engine configuration
//!
//! Fixed when the engine is built and never changed afterwards. A new game
//! with a different colour or depth gets a new engine.

use crate::constants::{DEFAULT_DEPTH, MAX_DEPTH};
use crate::error::{EngineError, EngineResult};
use chess_logic::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Search depth in plies, `1..=MAX_DEPTH`
    pub max_depth: u32,
    /// Side the engine moves for
    pub side: Color,
    /// Alpha-beta pruning; off means exhaustive minimax
    #[serde(default = "enabled")]
    pub pruning: bool,
    /// Captures-first move ordering
    #[serde(default = "enabled")]
    pub move_ordering: bool,
}

fn enabled() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_depth: DEFAULT_DEPTH,
            side: Color::Black,
            pruning: true,
            move_ordering: true,
        }
    }
}

impl EngineConfig {
    /// Validated configuration with pruning and ordering enabled
    pub fn new(max_depth: u32, side: Color) -> EngineResult<Self> {
        let config = EngineConfig {
            max_depth,
            side,
            ..EngineConfig::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_move_ordering(mut self, move_ordering: bool) -> Self {
        self.move_ordering = move_ordering;
        self
    }

    /// Check the depth bounds
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidConfig`] when `max_depth` is zero or above
    /// [`MAX_DEPTH`].
    pub fn validate(&self) -> EngineResult<()> {
        if self.max_depth == 0 {
            return Err(EngineError::InvalidConfig {
                reason: "max_depth must be at least 1".to_string(),
            });
        }
        if self.max_depth > MAX_DEPTH {
            return Err(EngineError::InvalidConfig {
                reason: format!("max_depth {} exceeds the limit of {}", self.max_depth, MAX_DEPTH),
            });
        }
        Ok(())
    }
}
