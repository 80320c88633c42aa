//! Search module
//!
//! Contains:
//! - Candidate generation and move ordering
//! - Critical move detection (win, block, open-four defence)
//! - Transposition table for caching search results
//! - Alpha-Beta minimax with a wall-clock budget

pub mod alphabeta;
pub mod clock;
pub mod critical;
pub mod moves;
pub mod tt;

pub use alphabeta::{SearchStats, Searcher, INF};
pub use clock::SearchClock;
pub use critical::{find_critical_move, CriticalKind, CriticalMove};
pub use moves::{generate_moves, order_moves, ScoredMove};
pub use tt::{EntryType, TTEntry, TTKey, TTStats, TranspositionTable};
