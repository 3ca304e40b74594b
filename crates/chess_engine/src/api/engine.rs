//! Engine construction and move selection
//!
//! An [`Engine`] holds only its configuration and evaluator. The position is
//! lent to it for the length of one call through `&mut`, which is what keeps a
//! single search at a time on any position. Nothing is remembered between
//! calls.
//!
//! ## Call policy
//!
//! - Not the engine's turn: [`EngineError::InvalidState`], logged at `warn`
//! - Finished position (checkmate, stalemate, insufficient material): `Ok(None)`
//! - Rules authority failure: [`EngineError::Rules`] carrying the original error

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::evaluation::{Evaluate, PieceSquareEvaluator};
use crate::rules::RulesAuthority;
use crate::search::{SearchOutcome, Searcher};
use chess_logic::Color;
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone)]
pub struct Engine<E = PieceSquareEvaluator> {
    config: EngineConfig,
    evaluator: E,
}

impl Engine<PieceSquareEvaluator> {
    /// Engine with the default piece-square evaluator
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        Self::with_evaluator(config, PieceSquareEvaluator)
    }
}

impl<E> Engine<E> {
    pub fn with_evaluator(config: EngineConfig, evaluator: E) -> EngineResult<Self> {
        config.validate()?;
        Ok(Engine { config, evaluator })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn side(&self) -> Color {
        self.config.side
    }

    /// Best move for the engine's side, or `None` when the game is over
    ///
    /// The position is back in its original state when this returns, whether
    /// or not it succeeded.
    pub fn best_move<R>(&self, position: &mut R) -> EngineResult<Option<R::Move>>
    where
        R: RulesAuthority + ?Sized,
        E: Evaluate<R>,
    {
        Ok(self.search(position)?.best_move)
    }

    /// Full search result: best move, its score, and search counters
    #[instrument(skip_all, fields(side = %self.config.side, depth = self.config.max_depth))]
    pub fn search<R>(&self, position: &mut R) -> EngineResult<SearchOutcome<R::Move>>
    where
        R: RulesAuthority + ?Sized,
        E: Evaluate<R>,
    {
        let to_move = position.turn();
        if to_move != self.config.side {
            warn!(%to_move, "engine asked to move out of turn");
            return Err(EngineError::InvalidState {
                engine: self.config.side,
                to_move,
            });
        }

        let mut searcher = Searcher::new(
            &self.evaluator,
            self.config.pruning,
            self.config.move_ordering,
        );
        let (best_move, score) = searcher.search_root(position, self.config.max_depth)?;
        let stats = searcher.stats();

        match best_move {
            Some(mv) => debug!(
                %mv,
                score,
                nodes = stats.nodes,
                cutoffs = stats.cutoffs,
                "search complete"
            ),
            None => debug!(score, "no move to search: game is over"),
        }

        Ok(SearchOutcome {
            best_move,
            score,
            stats,
        })
    }
}
