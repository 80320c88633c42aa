//! Game state management for the desktop host

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::warn;

use crate::board::{GameBoard, Grid, Pos, Side, DEFAULT_SIZE};
use crate::config::Difficulty;
use crate::error::BoardError;
use crate::rules::find_winning_line;
use crate::{AIEngine, EngineConfig, MoveResult};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_side: Side, difficulty: Difficulty },
    /// Player vs Player (hotseat)
    PvP { show_suggestions: bool },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_side: Side::Black,
            difficulty: Difficulty::default(),
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win { winner: Side, line: Option<[Pos; 5]> },
    /// Board filled without five in a row
    Draw,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Grid,
    pub mode: GameMode,
    pub current_turn: Side,
    pub game_over: Option<GameResult>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    board_size: u8,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self::with_size(mode, DEFAULT_SIZE)
    }

    /// New game on a square board; sizes below 5 are raised to 5
    pub fn with_size(mode: GameMode, size: u8) -> Self {
        let board_size = size.max(5);
        Self {
            board: Self::fresh_board(board_size),
            mode,
            current_turn: Side::Black,
            game_over: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            board_size,
        }
    }

    fn fresh_board(size: u8) -> Grid {
        Grid::square(size).unwrap_or_default()
    }

    pub fn board_size(&self) -> u8 {
        self.board_size
    }

    pub fn reset(&mut self) {
        *self = Self::with_size(self.mode, self.board_size);
    }

    /// Start over on a board of a different size
    pub fn resize(&mut self, size: u8) {
        *self = Self::with_size(self.mode, size);
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.board.last_move().map(|(pos, _)| pos)
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_side, .. } => self.current_turn == human_side,
            GameMode::PvP { .. } => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a stone for the human player
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pos).map_err(|e| e.to_string())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) -> Result<(), BoardError> {
        let side = self.current_turn;
        self.board.play(pos, side)?;

        self.suggested_move = None;
        self.message = None;
        self.move_timer.stop();

        if let Some(line) = find_winning_line(&self.board, pos, side) {
            self.game_over = Some(GameResult::Win {
                winner: side,
                line: Some(line),
            });
            return Ok(());
        }
        if self.board.is_full() {
            self.game_over = Some(GameResult::Draw);
            return Ok(());
        }

        self.current_turn = side.opponent();
        self.move_timer.start();
        Ok(())
    }

    fn engine_config(&self) -> EngineConfig {
        match self.mode {
            GameMode::PvE { difficulty, .. } => difficulty.config(),
            GameMode::PvP { .. } => Difficulty::Easy.config(),
        }
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let mut board = self.board.clone();
        let side = self.current_turn;
        let config = self.engine_config();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(config);
            let result = engine.get_move_with_stats(&mut board, side);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(move_result.clone());
            self.move_timer.set_ai_time(elapsed);

            match move_result.best_move {
                Some(pos) => {
                    if let Err(e) = self.execute_move(pos) {
                        warn!("[AI] Engine move rejected: {e}");
                        self.message = Some(format!("AI move rejected: {e}"));
                    }
                }
                None => {
                    self.game_over = Some(GameResult::Draw);
                }
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request move suggestion for PvP mode
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        let mut engine = AIEngine::with_config(self.engine_config());
        let result = engine.get_move_with_stats(&mut self.board, self.current_turn);

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo last move; in PvE the AI's reply is taken back too
    pub fn undo(&mut self) {
        if self.board.history().is_empty() || self.is_ai_thinking() {
            return;
        }

        let undo_count = match self.mode {
            GameMode::PvE { .. } if self.board.history().len() >= 2 => 2,
            _ => 1,
        };

        for _ in 0..undo_count {
            if let Some((_, side)) = self.board.undo_last() {
                self.current_turn = side;
            }
        }

        self.game_over = None;
        self.suggested_move = None;
        self.message = None;
        self.move_timer.start();
    }
}
