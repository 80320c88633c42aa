//! Win condition checking
//!
//! A side wins with five or more of its stones in a row along one of the
//! four scan directions. Overlines count.

use crate::board::{GameBoard, Pos, Side, DIRECTIONS};

use super::WIN_LENGTH;

/// Check if `side` has five in a row anywhere on the board
pub fn is_winning_state<B: GameBoard + ?Sized>(board: &B, side: Side) -> bool {
    board
        .positions()
        .filter(|&pos| board.get(pos).is(side))
        .any(|pos| DIRECTIONS.iter().any(|&(dx, dy)| run_forward(board, pos, dx, dy, side) >= WIN_LENGTH))
}

/// Fast check through a single position, used after a move is played
pub fn has_five_at<B: GameBoard + ?Sized>(board: &B, pos: Pos, side: Side) -> bool {
    if !board.get(pos).is(side) {
        return false;
    }
    DIRECTIONS.iter().any(|&(dx, dy)| {
        let forward = run_forward(board, pos, dx, dy, side);
        let backward = run_forward(board, pos, -dx, -dy, side);
        forward + backward - 1 >= WIN_LENGTH
    })
}

/// Find five winning stones through `pos`, in line order
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
pub fn find_winning_line<B: GameBoard + ?Sized>(board: &B, pos: Pos, side: Side) -> Option<[Pos; 5]> {
    if !board.get(pos).is(side) {
        return None;
    }
    for &(dx, dy) in &DIRECTIONS {
        let back = run_forward(board, pos, -dx, -dy, side) - 1;
        if back + run_forward(board, pos, dx, dy, side) < WIN_LENGTH {
            continue;
        }
        let (sx, sy) = pos.offset(-dx, -dy, back as i32);
        let mut line = [pos; 5];
        for (i, cell) in line.iter_mut().enumerate() {
            let (x, y) = (sx + dx * i as i32, sy + dy * i as i32);
            *cell = Pos::new(x as u8, y as u8);
        }
        return Some(line);
    }
    None
}

/// Count consecutive `side` stones starting at `pos` (inclusive) along a
/// direction, capped at the win length
fn run_forward<B: GameBoard + ?Sized>(board: &B, pos: Pos, dx: i32, dy: i32, side: Side) -> usize {
    let mut count = 0;
    for step in 0..WIN_LENGTH {
        #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
        let (x, y) = pos.offset(dx, dy, step as i32);
        match board.stone_at(x, y) {
            Some(stone) if stone.is(side) => count += 1,
            _ => break,
        }
    }
    count
}
