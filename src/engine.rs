//! Main AI Engine integrating all search components
//!
//! This module provides the decision driver that turns a board and a side to
//! move into one chosen move. Each decision follows the same order:
//!
//! 1. **Critical move**: win now, block the opponent's five, or stop an
//!    open four before it appears. The search is skipped.
//! 2. **Iterative deepening**: root candidates are generated and ordered
//!    once, then searched at depth 1, 2, ... up to the configured maximum
//!    or until the time budget runs out.
//!
//! The transposition table is cleared at the start of every decision.
//!
//! # Example
//!
//! ```
//! use gomoku_bot::{AIEngine, EngineConfig, GameBoard, Grid, Pos, Side};
//!
//! let config = EngineConfig { max_depth: 2, time_limit_ms: 300, ..EngineConfig::default() };
//! let mut engine = AIEngine::with_config(config);
//! let mut board = Grid::square(9).unwrap();
//! board.play(Pos::new(4, 4), Side::Black).unwrap();
//!
//! let result = engine.get_move_with_stats(&mut board, Side::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! assert_eq!(board.stone_count(), 1);
//! ```

use tracing::{debug, info, trace};

use crate::board::{simulate, GameBoard, Pos, Side};
use crate::config::{Difficulty, EngineConfig};
use crate::error::BoardError;
use crate::eval::{evaluate_with_fork_limit, WIN_SCORE};
use crate::search::{
    find_critical_move, generate_moves, order_moves, CriticalKind, SearchClock, SearchStats, Searcher, INF,
};

/// Which phase of the decision produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Forced move found without searching
    Critical(CriticalKind),
    /// Iterative deepening alpha-beta result
    AlphaBeta,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` when the board has no empty cell
    pub best_move: Option<Pos>,
    /// Score of the chosen move from the mover's point of view
    pub score: i32,
    pub search_type: SearchType,
    /// Deepest iteration that scored at least one root move
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
    pub stats: SearchStats,
}

impl MoveResult {
    #[inline]
    fn critical(pos: Pos, kind: CriticalKind, score: i32, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score,
            search_type: SearchType::Critical(kind),
            depth: 0,
            nodes: 0,
            time_ms,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type: SearchType::AlphaBeta,
            depth: 0,
            nodes: 0,
            time_ms,
            stats: SearchStats::default(),
        }
    }
}

/// Move-selection engine for one side at a time.
///
/// The engine never keeps the board. Every call borrows it, simulates moves
/// on it, and leaves it exactly as it was (plus the chosen move for
/// [`AIEngine::make_move`]).
#[derive(Debug)]
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    /// Create a new AI engine with default settings (depth 5, 5 s budget).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::new(config),
        }
    }

    /// Engine tuned for a difficulty level
    #[must_use]
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::with_config(difficulty.config())
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        self.searcher.config()
    }

    pub fn set_config(&mut self, config: EngineConfig) {
        self.searcher.set_config(config);
    }

    pub fn set_max_depth(&mut self, depth: u8) {
        let config = EngineConfig {
            max_depth: depth,
            ..self.config().clone()
        };
        self.set_config(config);
    }

    pub fn set_time_limit(&mut self, time_ms: u64) {
        let config = EngineConfig {
            time_limit_ms: time_ms,
            ..self.config().clone()
        };
        self.set_config(config);
    }

    /// Transposition table statistics of the last decision
    #[must_use]
    pub fn tt_stats(&self) -> crate::search::TTStats {
        self.searcher.tt_stats()
    }

    /// Decide a move for `side` and apply it to the board.
    ///
    /// Returns `Ok(None)` when no empty cell is left, which the caller should
    /// treat as a draw. Errors only come from the board rejecting the move.
    pub fn make_move<B: GameBoard + ?Sized>(&mut self, board: &mut B, side: Side) -> Result<Option<Pos>, BoardError> {
        let result = self.get_move_with_stats(board, side);
        match result.best_move {
            Some(pos) => {
                board.play(pos, side)?;
                Ok(Some(pos))
            }
            None => {
                info!("[AI] {side:?} has no legal move");
                Ok(None)
            }
        }
    }

    /// Best move for `side` without playing it
    pub fn get_move<B: GameBoard + ?Sized>(&mut self, board: &mut B, side: Side) -> Option<Pos> {
        self.get_move_with_stats(board, side).best_move
    }

    /// Decide a move for `side` and report how it was found.
    ///
    /// The board is used for simulation only and is unchanged on return.
    pub fn get_move_with_stats<B: GameBoard + ?Sized>(&mut self, board: &mut B, side: Side) -> MoveResult {
        let config = self.searcher.config().clone();
        self.searcher.begin(side, SearchClock::start(config.time_limit()));

        let moves = generate_moves(&*board, config.search_radius());

        if let Some(critical) = find_critical_move(board, &moves, side) {
            let score = match critical.kind {
                CriticalKind::Win => WIN_SCORE,
                _ => {
                    let mut sim = simulate(&mut *board, critical.pos, side);
                    evaluate_with_fork_limit(&mut *sim, side, config.fork_board_limit)
                }
            };
            let result = MoveResult::critical(critical.pos, critical.kind, score, self.elapsed_ms());
            debug!("[AI] Critical {:?} at {:?}", critical.kind, critical.pos);
            self.log_decision(side, &result);
            return result;
        }

        let root = order_moves(board, &moves, side);
        if root.is_empty() {
            info!("[AI] {side:?} has no legal move");
            return MoveResult::no_move(self.elapsed_ms());
        }

        let mut best: Option<(Pos, i32)> = None;
        let mut depth_reached = 0;
        for depth in 1..=config.search_depth() {
            let mut depth_best: Option<(Pos, i32)> = None;
            for mv in &root {
                let score = {
                    let mut sim = simulate(&mut *board, mv.pos, side);
                    self.searcher.minimax(&mut *sim, depth - 1, -INF, INF, false)
                };
                if depth_best.map_or(true, |(_, s)| score > s) {
                    depth_best = Some((mv.pos, score));
                }
                if self.searcher.timed_out() {
                    break;
                }
            }

            if let Some((pos, score)) = depth_best {
                best = Some((pos, score));
                depth_reached = depth;
                debug!("[AI] Depth {depth}: {pos:?} score {score} ({} nodes)", self.searcher.stats().nodes);
            }
            if self.searcher.timed_out() {
                debug!("[AI] Time budget exhausted during depth {depth}");
                break;
            }
        }

        let stats = self.searcher.stats().clone();
        trace!(
            "[AI] TT probes {} hits {} ({:.1}%), cutoffs {}, {:?}",
            stats.tt_probes,
            stats.tt_hits,
            stats.tt_hit_rate(),
            stats.cutoffs,
            self.searcher.tt_stats()
        );

        let result = MoveResult {
            best_move: best.map(|(pos, _)| pos),
            score: best.map_or(0, |(_, score)| score),
            search_type: SearchType::AlphaBeta,
            depth: depth_reached,
            nodes: stats.nodes,
            time_ms: self.elapsed_ms(),
            stats,
        };
        self.log_decision(side, &result);
        result
    }

    #[allow(clippy::cast_possible_truncation)]
    fn elapsed_ms(&self) -> u64 {
        self.searcher.clock().elapsed().as_millis() as u64
    }

    fn log_decision(&self, side: Side, result: &MoveResult) {
        info!(
            "[AI] {:?} plays {:?} via {:?} (score {}, depth {}, {} nodes, {}ms)",
            side, result.best_move, result.search_type, result.score, result.depth, result.nodes, result.time_ms
        );
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Grid;

    fn quick_engine(max_depth: u8, time_limit_ms: u64) -> AIEngine {
        AIEngine::with_config(EngineConfig {
            max_depth,
            time_limit_ms,
            ..EngineConfig::default()
        })
    }

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.config().max_depth, 5);
        assert_eq!(AIEngine::with_difficulty(Difficulty::Easy).config().max_depth, 1);
    }

    #[test]
    fn test_engine_setters() {
        let mut engine = AIEngine::default();
        engine.set_max_depth(3);
        engine.set_time_limit(250);
        assert_eq!(engine.config().max_depth, 3);
        assert_eq!(engine.config().time_limit_ms, 250);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Grid::square(15).unwrap();
        for y in 0..4 {
            board.play(Pos::new(9, y), Side::Black).unwrap();
        }
        board.play(Pos::new(3, 3), Side::White).unwrap();

        let mut engine = quick_engine(3, 1000);
        let result = engine.get_move_with_stats(&mut board, Side::Black);

        assert_eq!(result.best_move, Some(Pos::new(9, 4)));
        assert_eq!(result.search_type, SearchType::Critical(CriticalKind::Win));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = Grid::square(15).unwrap();
        for y in 0..4 {
            board.play(Pos::new(9, y), Side::White).unwrap();
        }
        board.play(Pos::new(10, 5), Side::Black).unwrap();

        let mut engine = quick_engine(3, 1000);
        let result = engine.get_move_with_stats(&mut board, Side::Black);

        assert_eq!(result.best_move, Some(Pos::new(9, 4)));
        assert_eq!(result.search_type, SearchType::Critical(CriticalKind::Block));
    }

    #[test]
    fn test_engine_blocks_open_three() {
        let mut board = Grid::square(15).unwrap();
        for x in 5..8 {
            board.play(Pos::new(x, 7), Side::Black).unwrap();
        }
        board.play(Pos::new(6, 9), Side::White).unwrap();

        let mut engine = quick_engine(2, 1000);
        let pos = engine.make_move(&mut board, Side::White).unwrap().unwrap();
        assert!(pos == Pos::new(4, 7) || pos == Pos::new(8, 7));
        assert!(board.get(pos).is(Side::White));
    }

    #[test]
    fn test_engine_empty_board() {
        let mut board = Grid::square(15).unwrap();
        let mut engine = quick_engine(2, 500);
        let pos = engine.make_move(&mut board, Side::Black).unwrap().unwrap();

        assert!(pos.manhattan(Pos::new(7, 7)) <= 2);
        assert_eq!(board.stone_count(), 1);
    }

    #[test]
    fn test_engine_tiny_budget_still_moves() {
        let mut board = Grid::square(15).unwrap();
        board.play(Pos::new(7, 7), Side::Black).unwrap();
        board.play(Pos::new(8, 8), Side::White).unwrap();

        let mut engine = quick_engine(5, 0);
        let result = engine.get_move_with_stats(&mut board, Side::Black);
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        assert_eq!(result.depth, 1);

        let pos = engine.make_move(&mut board, Side::Black).unwrap().unwrap();
        assert!(board.get(pos).is(Side::Black));
        assert_eq!(board.stone_count(), 3);
    }

    #[test]
    fn test_engine_full_board_no_move() {
        let mut board = Grid::from_rows(&["XOX", "XOO", "OXX"]).unwrap();
        let before = board.key();

        let mut engine = quick_engine(3, 1000);
        assert_eq!(engine.make_move(&mut board, Side::Black), Ok(None));
        assert_eq!(board.key(), before);
    }

    #[test]
    fn test_engine_leaves_board_untouched() {
        let mut board = Grid::square(9).unwrap();
        board.play(Pos::new(4, 4), Side::Black).unwrap();
        board.play(Pos::new(5, 5), Side::White).unwrap();
        let before = board.key();

        let mut engine = quick_engine(2, 2000);
        let result = engine.get_move_with_stats(&mut board, Side::Black);
        assert!(result.best_move.is_some());
        assert_eq!(board.key(), before);
        assert_eq!(board.history().len(), 2);
    }

    #[test]
    fn test_engine_depth_and_nodes_reported() {
        let mut board = Grid::square(9).unwrap();
        board.play(Pos::new(4, 4), Side::Black).unwrap();

        let mut engine = quick_engine(2, 60_000);
        let result = engine.get_move_with_stats(&mut board, Side::White);
        assert_eq!(result.depth, 2);
        assert!(result.nodes > 0);
        assert_eq!(result.nodes, result.stats.nodes);
    }

    #[test]
    fn test_engine_alternating_sides() {
        let mut board = Grid::square(9).unwrap();
        let mut engine = quick_engine(1, 1000);
        for turn in 0..4 {
            let side = if turn % 2 == 0 { Side::Black } else { Side::White };
            assert!(engine.make_move(&mut board, side).unwrap().is_some());
        }
        assert_eq!(board.stone_count(), 4);
        assert_eq!(board.history().len(), 4);
    }

    #[test]
    fn test_engine_zero_depth_or_radius_still_moves() {
        let zero_depth = EngineConfig {
            max_depth: 0,
            ..EngineConfig::default()
        };
        let zero_radius = EngineConfig {
            max_depth: 1,
            neighborhood_radius: 0,
            ..EngineConfig::default()
        };

        for config in [zero_depth, zero_radius] {
            let mut board = Grid::square(9).unwrap();
            board.play(Pos::new(4, 4), Side::Black).unwrap();

            let mut engine = AIEngine::with_config(config);
            let pos = engine.make_move(&mut board, Side::White).unwrap().unwrap();
            assert!(board.get(pos).is(Side::White));
            assert_eq!(board.stone_count(), 2);
        }

        let mut engine = AIEngine::default();
        engine.set_max_depth(0);
        let mut board = Grid::square(9).unwrap();
        board.play(Pos::new(4, 4), Side::Black).unwrap();
        let result = engine.get_move_with_stats(&mut board, Side::White);
        assert!(result.best_move.is_some());
        assert_eq!(result.depth, 1);
    }
}
