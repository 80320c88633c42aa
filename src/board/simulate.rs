//! Scoped temporary moves
//!
//! [`simulate`] places a temporary stone and returns a guard that removes it
//! again when dropped. Guards borrow the board mutably, so nested simulations
//! are forced into stack order and the board is restored on every exit path,
//! including early `break`s out of a pruned move loop.

use std::ops::{Deref, DerefMut};

use super::{GameBoard, Pos, Side};

/// Board with one temporary stone on it
pub struct Simulated<'a, B: GameBoard + ?Sized> {
    board: &'a mut B,
    pos: Pos,
}

/// Occupy `pos` for `side` until the returned guard is dropped
#[inline]
pub fn simulate<B: GameBoard + ?Sized>(board: &mut B, pos: Pos, side: Side) -> Simulated<'_, B> {
    board.place_temporary(pos, side);
    Simulated { board, pos }
}

impl<B: GameBoard + ?Sized> Simulated<'_, B> {
    /// The temporarily occupied cell
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl<B: GameBoard + ?Sized> Deref for Simulated<'_, B> {
    type Target = B;

    #[inline]
    fn deref(&self) -> &B {
        &*self.board
    }
}

impl<B: GameBoard + ?Sized> DerefMut for Simulated<'_, B> {
    #[inline]
    fn deref_mut(&mut self) -> &mut B {
        &mut *self.board
    }
}

impl<B: GameBoard + ?Sized> Drop for Simulated<'_, B> {
    fn drop(&mut self) {
        self.board.undo_temporary(self.pos);
    }
}
