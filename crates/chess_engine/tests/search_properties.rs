//! Search Property Tests
//!
//! Checks the engine's observable guarantees:
//! - Determinism and legality of the chosen move
//! - Position restoration after every call
//! - Pruning equivalence against exhaustive minimax
//! - Mate preferred over material, stalemate avoided when ahead
//! - Finished positions and out-of-turn calls
//! - Growth of the node count with depth
//!
//! Chess positions run through `chess_logic::Position`; the synthetic
//! `TreeGame` below gives exact control over the tree shape and leaf values.

use chess_engine::constants::{DRAW_SCORE, MATE_SCORE};
use chess_engine::{
    Engine, EngineConfig, EngineError, Evaluate, MaterialEvaluator, RulesAuthority,
};
use chess_logic::{Color, MoveKind, Position};
use std::fmt;

const MIDDLEGAME_FENS: [&str; 4] = [
    chess_logic::STARTING_FEN,
    "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "6k1/5ppp/8/8/8/1q6/5PPP/3BR1K1 w - - 0 1",
];

fn engine(depth: u32, side: Color) -> Engine {
    Engine::new(EngineConfig::new(depth, side).expect("valid config")).expect("valid engine")
}

fn position(fen: &str) -> Position {
    Position::from_fen(fen).expect("test FEN parses")
}

// ============================================================================
// Determinism, Legality, Restoration
// ============================================================================

#[test]
fn test_repeated_calls_return_same_move() {
    for fen in MIDDLEGAME_FENS {
        let mut pos = position(fen);
        let engine = engine(2, pos.turn());

        let first = engine.search(&mut pos).unwrap();
        let second = engine.search(&mut pos).unwrap();
        assert_eq!(first, second, "{}", fen);
    }
}

#[test]
fn test_best_move_is_legal_and_position_restored() {
    for fen in MIDDLEGAME_FENS {
        let mut pos = position(fen);
        let before = pos.clone();
        let legal = pos.legal_moves();

        let mv = engine(3, pos.turn()).best_move(&mut pos).unwrap();

        assert!(mv.is_some_and(|mv| legal.contains(&mv)), "{}", fen);
        assert_eq!(pos, before, "position changed by search of {}", fen);
        assert_eq!(pos.to_fen(), fen);
    }
}

#[test]
fn test_restoration_after_played_history() {
    let mut pos = Position::new();
    for uci in ["e2e4", "c7c5", "g1f3"] {
        let mv = pos.parse_uci(uci).unwrap();
        pos.play(mv).unwrap();
    }
    let before = pos.clone();

    engine(3, Color::Black).best_move(&mut pos).unwrap();

    assert_eq!(pos, before);
    assert_eq!(pos.history_len(), 3);
}

#[test]
fn test_restoration_with_en_passant_in_fen() {
    let cases = [
        // real double push: exd6 is available
        "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
        // knight on e5, so the e6 square cannot stand for a capture
        "4k3/8/8/3Pn3/8/8/8/4K3 w - e6 0 1",
    ];

    for fen in cases {
        let mut pos = position(fen);
        let before = pos.clone();
        let legal = pos.legal_moves();

        for depth in 1..=3 {
            let mv = engine(depth, Color::White).best_move(&mut pos).unwrap();
            assert!(mv.is_some_and(|mv| legal.contains(&mv)), "{}", fen);
            assert_eq!(pos, before, "position changed at depth {} for {}", depth, fen);
        }
    }

    let pos = position("4k3/8/8/3Pn3/8/8/8/4K3 w - e6 0 1");
    assert!(!pos.legal_moves().iter().any(|mv| mv.kind == MoveKind::EnPassant));
    assert_eq!(pos.to_fen(), "4k3/8/8/3Pn3/8/8/8/4K3 w - - 0 1");
}

// ============================================================================
// Pruning Equivalence
// ============================================================================

#[test]
fn test_pruning_matches_exhaustive_minimax_on_chess() {
    for (fen, depth) in [
        (MIDDLEGAME_FENS[0], 3),
        (MIDDLEGAME_FENS[1], 2),
        (MIDDLEGAME_FENS[2], 2),
        (MIDDLEGAME_FENS[3], 3),
    ] {
        let mut pos = position(fen);
        let config = EngineConfig::new(depth, pos.turn()).unwrap();

        let pruned = Engine::new(config).unwrap().search(&mut pos).unwrap();
        let full = Engine::new(config.with_pruning(false))
            .unwrap()
            .search(&mut pos)
            .unwrap();

        assert_eq!(pruned.best_move, full.best_move, "{}", fen);
        assert_eq!(pruned.score, full.score, "{}", fen);
        assert!(pruned.stats.nodes <= full.stats.nodes);
        assert_eq!(full.stats.cutoffs, 0);
    }
}

#[test]
fn test_ordering_does_not_change_score() {
    let mut pos = position(MIDDLEGAME_FENS[1]);
    let config = EngineConfig::new(3, Color::White).unwrap();

    let ordered = Engine::new(config).unwrap().search(&mut pos).unwrap();
    let unordered = Engine::new(config.with_move_ordering(false))
        .unwrap()
        .search(&mut pos)
        .unwrap();

    assert_eq!(ordered.score, unordered.score);
}

// ============================================================================
// Terminal Dominance
// ============================================================================

#[test]
fn test_mate_in_one_preferred_over_winning_queen() {
    // Re8 mates; Bxb3 wins the queen
    let mut pos = position("6k1/5ppp/8/8/8/1q6/5PPP/3BR1K1 w - - 0 1");

    for depth in 1..=3 {
        let outcome = engine(depth, Color::White).search(&mut pos).unwrap();
        assert_eq!(
            outcome.best_move.map(|mv| mv.to_string()),
            Some("e1e8".to_string()),
            "depth {}",
            depth
        );
        assert_eq!(outcome.score, MATE_SCORE - 1);
    }
}

#[test]
fn test_stalemate_avoided_when_ahead() {
    // Qc7 would stalemate the a8 king
    let mut pos = position("k7/8/1K6/8/8/8/8/2Q5 w - - 0 1");
    let config = EngineConfig::new(1, Color::White).unwrap();
    let engine = Engine::with_evaluator(config, MaterialEvaluator).unwrap();

    let mv = engine.best_move(&mut pos).unwrap().unwrap();
    assert_ne!(mv.to_string(), "c1c7");

    pos.play(mv).unwrap();
    assert!(!pos.is_stalemate());
}

// ============================================================================
// Finished Positions and Turn Checks
// ============================================================================

#[test]
fn test_stalemated_position_returns_none() {
    let mut pos = position("k7/2Q5/1K6/8/8/8/8/8 b - - 0 1");
    let outcome = engine(3, Color::Black).search(&mut pos).unwrap();
    assert_eq!(outcome.best_move, None);
    assert_eq!(outcome.score, DRAW_SCORE);
}

#[test]
fn test_checkmated_position_returns_none() {
    let mut pos = position("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    assert_eq!(engine(2, Color::White).best_move(&mut pos).unwrap(), None);
}

#[test]
fn test_wrong_side_is_invalid_state() {
    let mut pos = Position::new();
    let before = pos.clone();
    let result = engine(3, Color::Black).best_move(&mut pos);
    assert!(matches!(result, Err(EngineError::InvalidState { .. })));
    assert_eq!(pos, before);
}

// ============================================================================
// Search Effort
// ============================================================================

#[test]
fn test_node_count_grows_with_depth() {
    let mut pos = position(MIDDLEGAME_FENS[1]);
    let shallow = engine(1, Color::White).search(&mut pos).unwrap();
    let deeper = engine(2, Color::White).search(&mut pos).unwrap();

    assert!(deeper.stats.nodes >= shallow.stats.nodes);
    assert_eq!(shallow.stats.max_depth, 1);
    assert_eq!(deeper.stats.max_depth, 2);
}

// ============================================================================
// Synthetic Game Trees
// ============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("tree corrupted at ply {ply}")]
struct TreeError {
    ply: usize,
}

/// Uniform game tree whose leaves carry pseudo-random values
struct TreeGame {
    branching: u8,
    depth: usize,
    seed: u64,
    path: Vec<u8>,
    undos: usize,
    fail_on_undo: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Branch(u8);

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl TreeGame {
    fn new(branching: u8, depth: usize, seed: u64) -> Self {
        TreeGame {
            branching,
            depth,
            seed,
            path: Vec::new(),
            undos: 0,
            fail_on_undo: None,
        }
    }

    /// Leaf value from White's side; a narrow range so ties are common
    fn leaf_value(&self) -> i32 {
        let mut h = self.seed;
        for &step in &self.path {
            h = h
                .wrapping_mul(6364136223846793005)
                .wrapping_add(step as u64 + 1442695040888963407);
        }
        ((h >> 33) % 11) as i32 - 5
    }
}

impl RulesAuthority for TreeGame {
    type Move = Branch;
    type Error = TreeError;

    fn legal_moves(&self) -> Vec<Branch> {
        if self.path.len() < self.depth {
            (0..self.branching).map(Branch).collect()
        } else {
            Vec::new()
        }
    }

    fn apply_move(&mut self, mv: Branch) -> Result<(), TreeError> {
        self.path.push(mv.0);
        Ok(())
    }

    fn undo_move(&mut self) -> Result<(), TreeError> {
        self.undos += 1;
        if self.fail_on_undo == Some(self.undos) {
            return Err(TreeError {
                ply: self.path.len(),
            });
        }
        self.path.pop();
        Ok(())
    }

    fn is_checkmate(&self) -> bool {
        false
    }

    fn is_stalemate(&self) -> bool {
        false
    }

    fn is_insufficient_material(&self) -> bool {
        false
    }

    fn turn(&self) -> Color {
        if self.path.len() % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    fn is_capture(&self, mv: Branch) -> bool {
        self.exchange_hint(mv) > 0
    }

    fn exchange_hint(&self, mv: Branch) -> i32 {
        (mv.0 as i32 * 7 + self.path.len() as i32) % 3
    }
}

struct LeafEvaluator;

impl Evaluate<TreeGame> for LeafEvaluator {
    fn static_score(&self, position: &TreeGame, perspective: Color) -> i32 {
        position.leaf_value() * i32::from(perspective.sign())
    }
}

/// Plain negamax, no pruning, no ordering
fn reference_negamax(game: &mut TreeGame, depth: usize) -> i32 {
    if depth == 0 {
        return LeafEvaluator.static_score(game, game.turn());
    }
    let mut best = i32::MIN;
    for mv in game.legal_moves() {
        game.apply_move(mv).unwrap();
        best = best.max(-reference_negamax(game, depth - 1));
        game.undo_move().unwrap();
    }
    best
}

/// First root move with the maximal negamax score, in enumeration order
fn reference_root(game: &mut TreeGame, depth: usize) -> (Branch, i32) {
    let mut best: Option<(Branch, i32)> = None;
    for mv in game.legal_moves() {
        game.apply_move(mv).unwrap();
        let score = -reference_negamax(game, depth - 1);
        game.undo_move().unwrap();
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
    }
    best.unwrap()
}

fn tree_engine(depth: usize, pruning: bool, ordering: bool) -> Engine<LeafEvaluator> {
    let config = EngineConfig::new(depth as u32, Color::White)
        .unwrap()
        .with_pruning(pruning)
        .with_move_ordering(ordering);
    Engine::with_evaluator(config, LeafEvaluator).unwrap()
}

#[test]
fn test_tree_search_matches_reference_minimax() {
    for seed in 0..40u64 {
        for (branching, depth) in [(2u8, 5usize), (3, 4), (5, 3)] {
            let mut game = TreeGame::new(branching, depth, seed);
            let (expected_move, expected_score) = reference_root(&mut game, depth);

            for pruning in [false, true] {
                let outcome = tree_engine(depth, pruning, false).search(&mut game).unwrap();
                assert_eq!(
                    outcome.best_move,
                    Some(expected_move),
                    "seed {} b{} d{} pruning {}",
                    seed,
                    branching,
                    depth,
                    pruning
                );
                assert_eq!(outcome.score, expected_score);
                assert!(game.path.is_empty());
            }
        }
    }
}

#[test]
fn test_tree_pruning_equivalence_with_ordering() {
    for seed in 0..40u64 {
        let mut game = TreeGame::new(4, 4, seed);
        let full = tree_engine(4, false, true).search(&mut game).unwrap();
        let pruned = tree_engine(4, true, true).search(&mut game).unwrap();

        assert_eq!(pruned.best_move, full.best_move, "seed {}", seed);
        assert_eq!(pruned.score, full.score);
        assert!(pruned.stats.nodes <= full.stats.nodes);
    }
}

#[test]
fn test_exhaustive_node_count() {
    // 1 + 3 + 9 + 27 nodes in a full ternary tree of depth 3
    let mut game = TreeGame::new(3, 3, 7);
    let outcome = tree_engine(3, false, false).search(&mut game).unwrap();
    assert_eq!(outcome.stats.nodes, 40);
    assert_eq!(outcome.stats.cutoffs, 0);
}

#[test]
fn test_authority_error_propagates_unchanged() {
    let mut game = TreeGame::new(3, 3, 1);
    game.fail_on_undo = Some(5);

    let err = tree_engine(3, true, false).search(&mut game).unwrap_err();
    match err {
        EngineError::Rules(source) => {
            assert_eq!(source.downcast_ref::<TreeError>(), Some(&TreeError { ply: 3 }));
        }
        other => panic!("unexpected error: {}", other),
    }
}
