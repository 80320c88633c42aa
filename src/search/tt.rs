//! Transposition Table for caching search results
//!
//! The table stores minimax values keyed by the packed board, the remaining
//! depth and whose turn it is. It lives for one decision: the engine clears
//! it before every search.
//!
//! Values are stored together with the kind of bound the alpha-beta window
//! produced, and a probe only answers when that bound settles the current
//! window. Otherwise the node is searched again.
//!
//! # Example
//!
//! ```
//! use gomoku_bot::board::{GameBoard, Grid};
//! use gomoku_bot::search::{EntryType, TTKey, TranspositionTable};
//!
//! let grid = Grid::square(9).unwrap();
//! let mut tt = TranspositionTable::new();
//!
//! let key = TTKey::new(grid.key(), 3, true);
//! tt.store(key.clone(), 100, EntryType::Exact);
//!
//! assert_eq!(tt.probe(&key, -1000, 1000), Some(100));
//! ```

use std::collections::HashMap;

use crate::board::BoardKey;

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the search completed inside the window
    Exact,
    /// Lower bound - score >= stored value (beta cutoff)
    LowerBound,
    /// Upper bound - score <= stored value (alpha fail-low)
    UpperBound,
}

impl EntryType {
    /// Classify a fail-soft result against the window it was searched with
    pub fn classify(score: i32, alpha: i32, beta: i32) -> Self {
        if score <= alpha {
            EntryType::UpperBound
        } else if score >= beta {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        }
    }
}

/// Position identity: board contents, remaining depth, side to move
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TTKey {
    pub board: BoardKey,
    pub depth: u8,
    /// True when the deciding side is to move
    pub maximizing: bool,
}

impl TTKey {
    pub fn new(board: BoardKey, depth: u8, maximizing: bool) -> Self {
        Self {
            board,
            depth,
            maximizing,
        }
    }
}

/// Transposition table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    pub score: i32,
    pub entry_type: EntryType,
}

/// Hash map from [`TTKey`] to the last stored result
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<TTKey, TTEntry>,
    stores: u64,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe the table for a position.
    ///
    /// Returns the stored score when it is exact, or when it is a bound that
    /// already falls outside `(alpha, beta)`.
    #[must_use]
    pub fn probe(&self, key: &TTKey, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.entries.get(key)?;
        match entry.entry_type {
            EntryType::Exact => Some(entry.score),
            EntryType::LowerBound if entry.score >= beta => Some(entry.score),
            EntryType::UpperBound if entry.score <= alpha => Some(entry.score),
            _ => None,
        }
    }

    /// Store a result, replacing any previous entry for the same key
    pub fn store(&mut self, key: TTKey, score: i32, entry_type: EntryType) {
        self.stores += 1;
        self.entries.insert(key, TTEntry { score, entry_type });
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stores = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get statistics about table usage.
    #[must_use]
    pub fn stats(&self) -> TTStats {
        TTStats {
            entries: self.entries.len(),
            stores: self.stores,
        }
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TTStats {
    /// Distinct positions currently cached
    pub entries: usize,
    /// Total stores since the last clear
    pub stores: u64,
}
