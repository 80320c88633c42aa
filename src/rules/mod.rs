//! Game rules for free-style five-in-a-row
//!
//! Five or more stones in a row along a line wins; there are no captures
//! and no forbidden moves.

pub mod win;

/// Run length that wins the game
pub const WIN_LENGTH: usize = 5;

pub use win::{find_winning_line, has_five_at, is_winning_state};
