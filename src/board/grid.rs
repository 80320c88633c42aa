//! In-memory board with move history

use super::key::BoardKey;
use super::{GameBoard, Pos, Side, Stone, DEFAULT_SIZE};
use crate::error::BoardError;

/// Concrete board used by the desktop host, tests and benchmarks
#[derive(Debug, Clone)]
pub struct Grid {
    width: u8,
    height: u8,
    cells: Vec<Stone>,
    /// Packed mirror of `cells`, kept in sync on every change
    key: BoardKey,
    /// Permanent moves in play order
    history: Vec<(Pos, Side)>,
}

impl Grid {
    /// Create an empty board
    pub fn new(width: u8, height: u8) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidSize { width, height });
        }
        let cells = usize::from(width) * usize::from(height);
        Ok(Self {
            width,
            height,
            cells: vec![Stone::Empty; cells],
            key: BoardKey::empty(width, height),
            history: Vec::with_capacity(cells),
        })
    }

    /// Empty square board
    pub fn square(size: u8) -> Result<Self, BoardError> {
        Self::new(size, size)
    }

    /// Build a board from an ASCII diagram, one string per row (`y`).
    ///
    /// `X` is black, `O` is white, anything else is empty. Stones placed this
    /// way are not part of the move history.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let height = u8::try_from(rows.len()).unwrap_or(0);
        let width = rows
            .iter()
            .map(|r| r.chars().count())
            .max()
            .and_then(|w| u8::try_from(w).ok())
            .unwrap_or(0);
        let mut grid = Self::new(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let stone = match ch {
                    'X' | 'x' => Stone::Black,
                    'O' | 'o' => Stone::White,
                    _ => continue,
                };
                #[allow(clippy::cast_possible_truncation)]
                grid.set(Pos::new(x as u8, y as u8), stone);
            }
        }
        Ok(grid)
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        usize::from(pos.x) * usize::from(self.height) + usize::from(pos.y)
    }

    #[inline]
    fn set(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        self.cells[idx] = stone;
        self.key.set(idx, stone);
    }

    /// Permanent moves in play order
    pub fn history(&self) -> &[(Pos, Side)] {
        &self.history
    }

    /// Most recent permanent move
    pub fn last_move(&self) -> Option<(Pos, Side)> {
        self.history.last().copied()
    }

    /// Take back the most recent permanent move
    pub fn undo_last(&mut self) -> Option<(Pos, Side)> {
        let (pos, side) = self.history.pop()?;
        self.set(pos, Stone::Empty);
        Some((pos, side))
    }

    /// Clear every cell and the history
    pub fn clear(&mut self) {
        self.cells.fill(Stone::Empty);
        self.key = BoardKey::empty(self.width, self.height);
        self.history.clear();
    }

    /// Check that a permanent move is allowed
    pub fn validate(&self, pos: Pos) -> Result<(), BoardError> {
        if !self.contains(i32::from(pos.x), i32::from(pos.y)) {
            return Err(BoardError::OutOfBounds { x: pos.x, y: pos.y });
        }
        if !self.get(pos).is_empty() {
            return Err(BoardError::Occupied { x: pos.x, y: pos.y });
        }
        Ok(())
    }
}

impl Default for Grid {
    /// Empty board of [`DEFAULT_SIZE`] squared
    fn default() -> Self {
        let cells = usize::from(DEFAULT_SIZE) * usize::from(DEFAULT_SIZE);
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            cells: vec![Stone::Empty; cells],
            key: BoardKey::empty(DEFAULT_SIZE, DEFAULT_SIZE),
            history: Vec::with_capacity(cells),
        }
    }
}

impl GameBoard for Grid {
    #[inline]
    fn width(&self) -> u8 {
        self.width
    }

    #[inline]
    fn height(&self) -> u8 {
        self.height
    }

    #[inline]
    fn get(&self, pos: Pos) -> Stone {
        self.cells[self.index(pos)]
    }

    fn play(&mut self, pos: Pos, side: Side) -> Result<(), BoardError> {
        self.validate(pos)?;
        self.set(pos, side.stone());
        self.history.push((pos, side));
        Ok(())
    }

    #[inline]
    fn place_temporary(&mut self, pos: Pos, side: Side) {
        debug_assert!(self.get(pos).is_empty(), "temporary move on occupied cell");
        self.set(pos, side.stone());
    }

    #[inline]
    fn undo_temporary(&mut self, pos: Pos) {
        self.set(pos, Stone::Empty);
    }

    #[inline]
    fn stone_count(&self) -> usize {
        self.key.count() as usize
    }

    #[inline]
    fn is_board_empty(&self) -> bool {
        self.key.count() == 0
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.key.count() as usize == self.cells.len()
    }

    #[inline]
    fn key(&self) -> BoardKey {
        self.key.clone()
    }
}
