//! Error types
//!
//! The search core has no failure paths. Errors only come from the board
//! collaborator (rejected permanent moves) and from parsing configuration.

/// Errors raised by a board when a permanent move or size is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Coordinates outside the board
    #[error("position ({x}, {y}) is outside the board")]
    OutOfBounds { x: u8, y: u8 },

    /// Cell already holds a stone
    #[error("position ({x}, {y}) is already occupied")]
    Occupied { x: u8, y: u8 },

    /// Zero-sized boards cannot be played on
    #[error("invalid board size {width}x{height}")]
    InvalidSize { width: u8, height: u8 },
}

/// Errors raised while loading an engine configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Malformed TOML or wrong field types
    #[error("failed to parse engine config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field holds a value the engine cannot run with
    #[error("invalid engine config: {message}")]
    Invalid { message: String },
}
