//! Engine configuration and difficulty presets

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Search tuning for [`crate::AIEngine`]
///
/// Missing keys fall back to the defaults when parsed from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Deepest iterative deepening iteration
    pub max_depth: u8,
    /// Wall-clock budget per decision in milliseconds
    pub time_limit_ms: u64,
    /// When false the search runs every depth to completion
    pub use_time_limit: bool,
    pub use_transposition_table: bool,
    /// Chebyshev distance from existing stones for candidate moves
    pub neighborhood_radius: u8,
    /// Fork detection runs on boards no larger than this in either dimension
    pub fork_board_limit: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            time_limit_ms: 5000,
            use_time_limit: true,
            use_transposition_table: true,
            neighborhood_radius: 2,
            fork_board_limit: 10,
        }
    }
}

impl EngineConfig {
    /// Parse a config from TOML text and validate it
    ///
    /// ```
    /// use gomoku_bot::EngineConfig;
    ///
    /// let config = EngineConfig::from_toml_str("max_depth = 3\ntime_limit_ms = 800").unwrap();
    /// assert_eq!(config.max_depth, 3);
    /// assert!(config.use_transposition_table);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the engine cannot search with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid {
                message: "max_depth must be at least 1".to_string(),
            });
        }
        if self.neighborhood_radius == 0 {
            return Err(ConfigError::Invalid {
                message: "neighborhood_radius must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Budget as a duration, `None` when the time limit is off
    pub fn time_limit(&self) -> Option<Duration> {
        self.use_time_limit.then(|| Duration::from_millis(self.time_limit_ms))
    }

    /// Deepest iteration actually searched; at least one ply
    pub fn search_depth(&self) -> u8 {
        self.max_depth.max(1)
    }

    /// Candidate radius actually used; at least one cell
    pub fn search_radius(&self) -> u8 {
        self.neighborhood_radius.max(1)
    }
}

/// AI strength levels offered by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Engine settings for this level
    pub fn config(self) -> EngineConfig {
        let (max_depth, time_limit_ms) = match self {
            Difficulty::Easy => (1, 500),
            Difficulty::Medium => (3, 2000),
            Difficulty::Hard => (5, 5000),
        };
        EngineConfig {
            max_depth,
            time_limit_ms,
            ..EngineConfig::default()
        }
    }
}

impl From<Difficulty> for EngineConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}
