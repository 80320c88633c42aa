//! Five-in-a-row AI engine
//!
//! An adversarial move-selection engine for free-style Gomoku on any board
//! up to 255x255:
//! - Five or more stones in a row wins (overlines allowed)
//! - No captures, no forbidden moves
//! - The engine borrows the board, simulates on it, and applies one move
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board collaborator trait, concrete [`Grid`], scoped simulation
//! - [`rules`]: Win detection
//! - [`eval`]: Pattern scoring, threat counting and static evaluation
//! - [`search`]: Move generation, critical moves, alpha-beta with a cache
//! - [`engine`]: Decision driver with iterative deepening
//! - [`config`]: Engine settings and difficulty presets
//! - [`ui`]: Desktop host built on egui
//!
//! # Quick Start
//!
//! ```
//! use gomoku_bot::{AIEngine, EngineConfig, GameBoard, Grid, Pos, Side};
//!
//! // Small depth and budget for a fast doc test
//! let config = EngineConfig { max_depth: 2, time_limit_ms: 300, ..EngineConfig::default() };
//! let mut engine = AIEngine::with_config(config);
//! let mut board = Grid::square(15).unwrap();
//!
//! board.play(Pos::new(7, 7), Side::Black).unwrap();
//!
//! // AI responds as White and plays its move on the board
//! if let Ok(Some(pos)) = engine.make_move(&mut board, Side::White) {
//!     println!("AI plays at ({}, {})", pos.x, pos.y);
//! }
//! assert_eq!(board.stone_count(), 2);
//! ```
//!
//! # Decision Priority
//!
//! 1. Immediate winning move
//! 2. Block the opponent's immediate win
//! 3. Stop the opponent from making an open four
//! 4. Iterative deepening alpha-beta with a transposition table
//!
//! Logging goes through `tracing`; the library never installs a subscriber.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{GameBoard, Grid, Pos, Side, Stone, DEFAULT_SIZE};
pub use config::{Difficulty, EngineConfig};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{BoardError, ConfigError};
