//! Alpha-beta search with negamax
//!
//! Every node is scored from the side to move's point of view and a child's
//! score is negated on the way up. The position is walked with
//! apply/undo: each applied move is undone before the child's result is
//! inspected, so an error anywhere below still leaves the position restored
//! on the way out.
//!
//! The root is handled separately from inner nodes so it can remember which
//! move produced the best score. A root move replaces the current best only
//! when it scores strictly higher, which makes the first best move in search
//! order the winner of any tie.

use super::ordering::order_moves;
use super::SearchStats;
use crate::constants::AB_INF;
use crate::error::{EngineError, EngineResult};
use crate::evaluation::Evaluate;
use crate::rules::RulesAuthority;
use tracing::trace;

/// One search over one position
pub(crate) struct Searcher<'e, E> {
    evaluator: &'e E,
    pruning: bool,
    move_ordering: bool,
    stats: SearchStats,
}

impl<'e, E> Searcher<'e, E> {
    pub(crate) fn new(evaluator: &'e E, pruning: bool, move_ordering: bool) -> Self {
        Searcher {
            evaluator,
            pruning,
            move_ordering,
            stats: SearchStats::default(),
        }
    }

    pub(crate) fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search `depth` plies below `position` and pick the best root move
    ///
    /// Returns `(None, score)` when the position is already finished.
    pub(crate) fn search_root<R>(
        &mut self,
        position: &mut R,
        depth: u32,
    ) -> EngineResult<(Option<R::Move>, i32)>
    where
        R: RulesAuthority + ?Sized,
        E: Evaluate<R>,
    {
        self.stats.nodes += 1;

        let mut moves = position.legal_moves();
        if moves.is_empty() || position.is_insufficient_material() {
            let score = self.evaluator.evaluate(position, position.turn(), 0);
            return Ok((None, score));
        }
        if self.move_ordering {
            order_moves(position, &mut moves);
        }

        let mut best_move = None;
        let mut best_score = -AB_INF;
        let mut alpha = -AB_INF;
        let beta = AB_INF;

        for mv in moves {
            position.apply_move(mv).map_err(EngineError::rules)?;
            let child = self.negamax(position, depth.saturating_sub(1), 1, -beta, -alpha);
            position.undo_move().map_err(EngineError::rules)?;
            let score = -child?;

            trace!(%mv, score, "root move scored");

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            if self.pruning {
                alpha = alpha.max(score);
            }
        }

        Ok((best_move, best_score))
    }

    fn negamax<R>(
        &mut self,
        position: &mut R,
        depth: u32,
        ply: u32,
        mut alpha: i32,
        beta: i32,
    ) -> EngineResult<i32>
    where
        R: RulesAuthority + ?Sized,
        E: Evaluate<R>,
    {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(ply);

        if depth == 0 {
            return Ok(self.evaluator.evaluate(position, position.turn(), ply));
        }

        let mut moves = position.legal_moves();
        if moves.is_empty() || position.is_insufficient_material() {
            return Ok(self.evaluator.evaluate(position, position.turn(), ply));
        }
        if self.move_ordering {
            order_moves(position, &mut moves);
        }

        let mut best_score = -AB_INF;
        for mv in moves {
            position.apply_move(mv).map_err(EngineError::rules)?;
            let child = self.negamax(position, depth - 1, ply + 1, -beta, -alpha);
            position.undo_move().map_err(EngineError::rules)?;
            let score = -child?;

            best_score = best_score.max(score);

            if self.pruning {
                alpha = alpha.max(score);
                // Beta cutoff
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }

        Ok(best_score)
    }
}
