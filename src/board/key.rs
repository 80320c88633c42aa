//! Packed board serialization used for transposition lookups

use super::{GameBoard, Stone};

const CELLS_PER_WORD: usize = 32;
const BLACK_BITS: u64 = 0b01;
const WHITE_BITS: u64 = 0b10;

/// Binary board key, 2 bits per cell (00 empty, 01 black, 10 white).
///
/// The dimensions are part of the key, so equal keys imply equal boards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardKey {
    width: u8,
    height: u8,
    words: Vec<u64>,
}

impl BoardKey {
    /// Key of an empty board
    pub fn empty(width: u8, height: u8) -> Self {
        let cells = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            words: vec![0; cells.div_ceil(CELLS_PER_WORD)],
        }
    }

    /// Serialize any board cell by cell
    pub fn from_board<B: GameBoard + ?Sized>(board: &B) -> Self {
        let mut key = Self::empty(board.width(), board.height());
        for (idx, pos) in board.positions().enumerate() {
            key.set(idx, board.get(pos));
        }
        key
    }

    /// Overwrite the cell at a linear index
    #[inline]
    pub fn set(&mut self, idx: usize, stone: Stone) {
        let word = idx / CELLS_PER_WORD;
        let shift = (idx % CELLS_PER_WORD) * 2;
        let bits = match stone {
            Stone::Empty => 0,
            Stone::Black => BLACK_BITS,
            Stone::White => WHITE_BITS,
        };
        self.words[word] = (self.words[word] & !(0b11 << shift)) | (bits << shift);
    }

    /// Read the cell at a linear index
    #[inline]
    pub fn get(&self, idx: usize) -> Stone {
        let word = idx / CELLS_PER_WORD;
        let shift = (idx % CELLS_PER_WORD) * 2;
        match (self.words[word] >> shift) & 0b11 {
            BLACK_BITS => Stone::Black,
            WHITE_BITS => Stone::White,
            _ => Stone::Empty,
        }
    }

    /// Number of occupied cells
    #[inline]
    pub fn count(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    #[inline]
    pub fn dimensions(&self) -> (u8, u8) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut key = BoardKey::empty(15, 15);
        key.set(0, Stone::Black);
        key.set(31, Stone::White);
        key.set(32, Stone::Black);
        key.set(224, Stone::White);

        assert_eq!(key.get(0), Stone::Black);
        assert_eq!(key.get(31), Stone::White);
        assert_eq!(key.get(32), Stone::Black);
        assert_eq!(key.get(224), Stone::White);
        assert_eq!(key.get(100), Stone::Empty);
        assert_eq!(key.count(), 4);

        key.set(31, Stone::Empty);
        assert_eq!(key.get(31), Stone::Empty);
        assert_eq!(key.count(), 3);
    }

    #[test]
    fn test_dimensions_distinguish_keys() {
        assert_ne!(BoardKey::empty(4, 8), BoardKey::empty(8, 4));
        assert_eq!(BoardKey::empty(9, 9), BoardKey::empty(9, 9));
    }

    #[test]
    fn test_overwrite_switches_color() {
        let mut a = BoardKey::empty(5, 5);
        let mut b = BoardKey::empty(5, 5);
        a.set(7, Stone::Black);
        a.set(7, Stone::White);
        b.set(7, Stone::White);
        assert_eq!(a, b);
    }
}
