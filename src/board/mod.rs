//! Board representation for the five-in-a-row engine
//!
//! The engine never owns the board. It borrows anything implementing
//! [`GameBoard`] for the duration of one decision and only ever mutates it
//! through temporary moves that are undone before returning, plus the single
//! permanent move it finally chooses.

pub mod grid;
pub mod key;
pub mod simulate;


pub use grid::Grid;
pub use key::BoardKey;
pub use simulate::{simulate, Simulated};

use crate::error::BoardError;

/// Default board width and height used by the desktop host.
pub const DEFAULT_SIZE: u8 = 15;

/// Scan directions: horizontal, vertical and the two diagonals.
pub const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Cell state this side leaves behind
    #[inline]
    pub fn stone(self) -> Stone {
        match self {
            Side::Black => Stone::Black,
            Side::White => Stone::White,
        }
    }
}

/// Cell state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Owner of the cell, `None` when empty
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Stone::Empty => None,
            Stone::Black => Some(Side::Black),
            Stone::White => Some(Side::White),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Stone::Empty
    }

    /// True when the cell is occupied by `side`
    #[inline]
    pub fn is(self, side: Side) -> bool {
        self.side() == Some(side)
    }
}

impl From<Side> for Stone {
    fn from(side: Side) -> Self {
        side.stone()
    }
}

/// Position on the board, `x` is the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Step `steps` cells along `(dx, dy)`; the result may lie off the board
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, steps: i32) -> (i32, i32) {
        (i32::from(self.x) + dx * steps, i32::from(self.y) + dy * steps)
    }

    /// Manhattan distance to another position
    #[inline]
    pub fn manhattan(self, other: Pos) -> i32 {
        (i32::from(self.x) - i32::from(other.x)).abs() + (i32::from(self.y) - i32::from(other.y)).abs()
    }
}

/// The board collaborator consumed by the engine.
///
/// Implementors own the cells. Temporary moves exist only for simulation and
/// must not trigger any turn processing; [`GameBoard::play`] is the one
/// permanent, side-effecting operation.
pub trait GameBoard {
    fn width(&self) -> u8;

    fn height(&self) -> u8;

    /// Cell state at an in-bounds position
    fn get(&self, pos: Pos) -> Stone;

    /// Apply a permanent move. The host may treat this as "turn complete".
    fn play(&mut self, pos: Pos, side: Side) -> Result<(), BoardError>;

    /// Occupy an empty cell for simulation only
    fn place_temporary(&mut self, pos: Pos, side: Side);

    /// Revert a cell occupied with [`GameBoard::place_temporary`]
    fn undo_temporary(&mut self, pos: Pos);

    /// Check that signed coordinates fall inside the board
    #[inline]
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < i32::from(self.width()) && y < i32::from(self.height())
    }

    /// Cell state at signed coordinates, `None` off the board
    #[inline]
    fn stone_at(&self, x: i32, y: i32) -> Option<Stone> {
        if self.contains(x, y) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Some(self.get(Pos::new(x as u8, y as u8)))
        } else {
            None
        }
    }

    /// Iterate every position in x-major order
    fn positions(&self) -> Positions {
        Positions::new(self.width(), self.height())
    }

    /// Number of occupied cells
    fn stone_count(&self) -> usize {
        self.positions().filter(|&p| !self.get(p).is_empty()).count()
    }

    fn is_board_empty(&self) -> bool {
        self.positions().all(|p| self.get(p).is_empty())
    }

    fn is_full(&self) -> bool {
        self.positions().all(|p| !self.get(p).is_empty())
    }

    /// Packed serialization used as the transposition key
    fn key(&self) -> BoardKey {
        BoardKey::from_board(self)
    }
}

/// Iterator over all positions, x outer and y inner
#[derive(Debug, Clone)]
pub struct Positions {
    width: u8,
    height: u8,
    next: usize,
}

impl Positions {
    fn new(width: u8, height: u8) -> Self {
        Self { width, height, next: 0 }
    }
}

impl Iterator for Positions {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        let h = usize::from(self.height);
        let total = usize::from(self.width) * h;
        if self.next >= total || h == 0 {
            return None;
        }
        let idx = self.next;
        self.next += 1;
        #[allow(clippy::cast_possible_truncation)]
        Some(Pos::new((idx / h) as u8, (idx % h) as u8))
    }
}
