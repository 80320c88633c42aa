//! Heuristic evaluation function for board positions
//!
//! This module provides the static evaluation used at search leaves.
//! It evaluates board positions based on:
//! - Win/loss detection
//! - Pattern scoring (fours, threes, twos) for both sides
//! - Fork bonuses on small boards
//!
//! The evaluation is deliberately asymmetric: opponent material is weighted
//! by [`OPPONENT_WEIGHT`], so the engine prefers blocking over building when
//! the raw pattern values are equal.

use crate::board::{GameBoard, Side, DIRECTIONS};
use crate::rules::is_winning_state;

use super::patterns::{evaluate_pattern, WIN_SCORE};
use super::threats::evaluate_forks;

/// Multiplier applied to the opponent's pattern total
pub const OPPONENT_WEIGHT: i32 = 3;

/// Fork detection only runs when both board dimensions are at most this
pub const DEFAULT_FORK_BOARD_LIMIT: u8 = 10;

/// Evaluate the board from the perspective of `me`.
///
/// Returns a score where:
/// - `WIN_SCORE` means `me` already has five in a row
/// - `-WIN_SCORE` means the opponent does
/// - otherwise `own - 3 * opponent`
///
/// The board is only touched through temporary moves that are undone
/// before returning.
pub fn evaluate<B: GameBoard + ?Sized>(board: &mut B, me: Side) -> i32 {
    evaluate_with_fork_limit(board, me, DEFAULT_FORK_BOARD_LIMIT)
}

/// [`evaluate`] with a configurable board size limit for fork detection
pub fn evaluate_with_fork_limit<B: GameBoard + ?Sized>(board: &mut B, me: Side, fork_limit: u8) -> i32 {
    let opp = me.opponent();
    if is_winning_state(&*board, me) {
        return WIN_SCORE;
    }
    if is_winning_state(&*board, opp) {
        return -WIN_SCORE;
    }

    let mut own = 0;
    let mut theirs = 0;
    for pos in board.positions() {
        let Some(side) = board.get(pos).side() else {
            continue;
        };
        let sum: i32 = DIRECTIONS
            .into_iter()
            .map(|dir| evaluate_pattern(&*board, pos, dir, side).score)
            .sum();
        if side == me {
            own += sum;
        } else {
            theirs += sum;
        }
    }

    if board.width() <= fork_limit && board.height() <= fork_limit {
        let (own_forks, opp_forks) = evaluate_forks(board, me);
        own += own_forks;
        theirs += opp_forks;
    }

    own - OPPONENT_WEIGHT * theirs
}
