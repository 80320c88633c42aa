//! Desktop host for playing against the engine
//!
//! Built on egui/eframe. The engine runs on a worker thread so the window
//! stays responsive while it thinks.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::{GameMode, GameResult, GameState};
