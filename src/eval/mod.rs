//! Position evaluation
//!
//! - [`patterns`]: score constants and single-run pattern scanning
//! - [`threats`]: threat counting, open-four probe and fork detection
//! - [`heuristic`]: static board evaluation used at search leaves

pub mod heuristic;
pub mod patterns;
pub mod threats;

pub use heuristic::{evaluate, evaluate_with_fork_limit, DEFAULT_FORK_BOARD_LIMIT, OPPONENT_WEIGHT};
pub use patterns::{evaluate_pattern, PatternScore, ThreatInfo, WIN_SCORE};
pub use threats::{count_threats, evaluate_forks, has_open_four, ThreatFilter};
