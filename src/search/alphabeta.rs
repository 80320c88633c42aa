//! Alpha-Beta minimax search with a transposition table
//!
//! This module implements the core search algorithm. It is a plain
//! two-sided minimax: the deciding side maximizes, the opponent minimizes,
//! and every leaf is scored from the deciding side's point of view with
//! [`evaluate_with_fork_limit`]. Iterative deepening over root moves lives
//! in [`crate::engine`].
//!
//! # Example
//!
//! ```
//! use gomoku_bot::board::{GameBoard, Grid, Pos, Side};
//! use gomoku_bot::search::{Searcher, SearchClock, INF};
//! use gomoku_bot::EngineConfig;
//!
//! let mut grid = Grid::square(9).unwrap();
//! grid.play(Pos::new(4, 4), Side::Black).unwrap();
//!
//! let mut searcher = Searcher::new(EngineConfig::default());
//! searcher.begin(Side::White, SearchClock::unlimited());
//! let score = searcher.minimax(&mut grid, 1, -INF, INF, true);
//! assert!(score.abs() < 1_000_000);
//! ```

use crate::board::{simulate, GameBoard, Side};
use crate::config::EngineConfig;
use crate::eval::{evaluate_with_fork_limit, WIN_SCORE};

use super::clock::SearchClock;
use super::moves::{generate_moves, order_moves};
use super::tt::{EntryType, TTKey, TTStats, TranspositionTable};

/// Infinity score for alpha-beta bounds
pub const INF: i32 = i32::MAX;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, root children included
    pub nodes: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
    /// Total TT probes
    pub tt_probes: u64,
    /// TT probes that returned a usable score
    pub tt_hits: u64,
    /// Nodes that stopped early because the budget ran out
    pub timeouts: u64,
}

impl SearchStats {
    /// TT hit rate in percent
    #[allow(clippy::cast_precision_loss)]
    pub fn tt_hit_rate(&self) -> f64 {
        if self.tt_probes == 0 {
            0.0
        } else {
            self.tt_hits as f64 / self.tt_probes as f64 * 100.0
        }
    }
}

/// Minimax searcher for one deciding side.
///
/// Call [`Searcher::begin`] before each decision: it resets the cache,
/// the statistics and the clock.
#[derive(Debug)]
pub struct Searcher {
    config: EngineConfig,
    tt: TranspositionTable,
    stats: SearchStats,
    clock: SearchClock,
    me: Side,
}

impl Searcher {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            tt: TranspositionTable::new(),
            stats: SearchStats::default(),
            clock: SearchClock::unlimited(),
            me: Side::Black,
        }
    }

    /// Start a new decision for `me`
    pub fn begin(&mut self, me: Side, clock: SearchClock) {
        self.me = me;
        self.clock = clock;
        self.tt.clear();
        self.stats = SearchStats::default();
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn tt_stats(&self) -> TTStats {
        self.tt.stats()
    }

    #[must_use]
    pub fn clock(&self) -> &SearchClock {
        &self.clock
    }

    /// Whether the decision's time budget is used up
    #[inline]
    #[must_use]
    pub fn timed_out(&self) -> bool {
        self.clock.expired()
    }

    /// Minimax value of `board` with `depth` plies left.
    ///
    /// `maximizing` is true when the deciding side is to move. The result is
    /// fail-soft: outside `(alpha, beta)` it is only a bound. The board is
    /// restored before returning.
    pub fn minimax<B: GameBoard + ?Sized>(
        &mut self,
        board: &mut B,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        let key = self
            .config
            .use_transposition_table
            .then(|| TTKey::new(board.key(), depth, maximizing));
        if let Some(key) = &key {
            self.stats.tt_probes += 1;
            if let Some(score) = self.tt.probe(key, alpha, beta) {
                self.stats.tt_hits += 1;
                return score;
            }
        }

        let eval = evaluate_with_fork_limit(board, self.me, self.config.fork_board_limit);
        if eval.abs() >= WIN_SCORE || depth == 0 {
            self.store(key, eval, EntryType::Exact);
            return eval;
        }
        if self.clock.expired() {
            self.stats.timeouts += 1;
            self.store(key, eval, EntryType::Exact);
            return eval;
        }

        let moves = generate_moves(&*board, self.config.search_radius());
        if moves.is_empty() {
            self.store(key, eval, EntryType::Exact);
            return eval;
        }
        let ordered = order_moves(board, &moves, self.me);

        let to_move = if maximizing { self.me } else { self.me.opponent() };
        let (alpha_orig, beta_orig) = (alpha, beta);
        let mut best = if maximizing { -INF } else { INF };
        let mut complete = true;

        for mv in ordered {
            let score = {
                let mut sim = simulate(board, mv.pos, to_move);
                self.minimax(&mut *sim, depth - 1, alpha, beta, !maximizing)
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
            if self.clock.expired() {
                self.stats.timeouts += 1;
                complete = false;
                break;
            }
        }

        if complete {
            self.store(key, best, EntryType::classify(best, alpha_orig, beta_orig));
        }
        best
    }

    fn store(&mut self, key: Option<TTKey>, score: i32, entry_type: EntryType) {
        if let Some(key) = key {
            self.tt.store(key, score, entry_type);
        }
    }
}
