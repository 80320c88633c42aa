//! Candidate move generation and ordering

use crate::board::{simulate, GameBoard, Pos, Side};
use crate::eval::{count_threats, has_open_four, ThreatFilter};
use crate::rules::is_winning_state;

/// Ordering bonus when the move wins on the spot
const WIN_BONUS: i32 = 10_000;
/// Ordering bonus when the opponent would win on this cell
const BLOCK_WIN_BONUS: i32 = 9_500;
/// Ordering bonus when the opponent would get an open four on this cell
const BLOCK_OPEN_FOUR_BONUS: i32 = 9_000;
/// Ordering bonus when taking the cell breaks one of the opponent's open threes
const BREAK_THREE_BONUS: i32 = 8_000;
/// Per occupied cell in the surrounding 3x3 block
const NEIGHBOR_WEIGHT: i32 = 10;
/// Per unit of closeness to the board centre
const CENTER_WEIGHT: i32 = 5;
/// Manhattan distance at which the centre bonus reaches zero
const CENTER_RANGE: i32 = 10;

/// A candidate move with its ordering score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub pos: Pos,
    pub score: i32,
}

/// Empty cells worth considering.
///
/// An empty board yields every cell. Otherwise only empty cells within
/// Chebyshev distance `radius` of a stone are returned. Order is x-major
/// (x outer, y inner) and every cell appears at most once.
pub fn generate_moves<B: GameBoard + ?Sized>(board: &B, radius: u8) -> Vec<Pos> {
    if board.is_board_empty() {
        return board.positions().collect();
    }

    let height = usize::from(board.height());
    let index = |x: i32, y: i32| {
        #[allow(clippy::cast_sign_loss)]
        let (x, y) = (x as usize, y as usize);
        x * height + y
    };

    let r = i32::from(radius);
    let mut near = vec![false; usize::from(board.width()) * height];
    for pos in board.positions().filter(|&p| !board.get(p).is_empty()) {
        for dx in -r..=r {
            for dy in -r..=r {
                let (x, y) = pos.offset(dx, dy, 1);
                if board.contains(x, y) {
                    near[index(x, y)] = true;
                }
            }
        }
    }

    board
        .positions()
        .filter(|&p| near[index(i32::from(p.x), i32::from(p.y))] && board.get(p).is_empty())
        .collect()
}

/// Sort candidates most promising first, from `me`'s point of view.
///
/// Ties keep their generation order. Ordering never changes which move
/// the search returns, only how much of the tree gets pruned.
pub fn order_moves<B: GameBoard + ?Sized>(board: &mut B, moves: &[Pos], me: Side) -> Vec<ScoredMove> {
    let opp = me.opponent();
    let center = Pos::new(board.width() / 2, board.height() / 2);
    let opp_threes = count_threats(&*board, opp, ThreatFilter::OpenThrees);

    let mut scored: Vec<ScoredMove> = moves
        .iter()
        .map(|&pos| {
            let mut score = 0;
            {
                let sim = simulate(board, pos, me);
                if is_winning_state(&*sim, me) {
                    score += WIN_BONUS;
                }
                if count_threats(&*sim, opp, ThreatFilter::OpenThrees) < opp_threes {
                    score += BREAK_THREE_BONUS;
                }
            }
            {
                let sim = simulate(board, pos, opp);
                if is_winning_state(&*sim, opp) {
                    score += BLOCK_WIN_BONUS;
                }
                if has_open_four(&*sim, opp) {
                    score += BLOCK_OPEN_FOUR_BONUS;
                }
            }
            score += NEIGHBOR_WEIGHT * neighbors(&*board, pos);
            score += CENTER_WEIGHT * (CENTER_RANGE - pos.manhattan(center)).max(0);
            ScoredMove { pos, score }
        })
        .collect();

    // stable: equal scores stay in generation order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Occupied cells in the 3x3 block around `pos`
fn neighbors<B: GameBoard + ?Sized>(board: &B, pos: Pos) -> i32 {
    let mut count = 0;
    for dx in -1..=1 {
        for dy in -1..=1 {
            let (x, y) = pos.offset(dx, dy, 1);
            if board.stone_at(x, y).is_some_and(|s| !s.is_empty()) {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Grid;

    #[test]
    fn test_empty_board_all_cells() {
        let grid = Grid::square(15).unwrap();
        let moves = generate_moves(&grid, 2);
        assert_eq!(moves.len(), 225);
        assert_eq!(moves[0], Pos::new(0, 0));
        assert_eq!(moves[1], Pos::new(0, 1));
    }

    #[test]
    fn test_generate_moves_radius() {
        let mut grid = Grid::square(15).unwrap();
        grid.play(Pos::new(7, 7), Side::Black).unwrap();

        let moves = generate_moves(&grid, 2);
        assert_eq!(moves.len(), 24);
        assert!(!moves.contains(&Pos::new(7, 7)));
        assert!(moves.contains(&Pos::new(5, 5)));
        assert!(!moves.contains(&Pos::new(4, 7)));

        assert_eq!(generate_moves(&grid, 1).len(), 8);
    }

    #[test]
    fn test_generate_moves_no_duplicates_and_ordered() {
        let mut grid = Grid::square(15).unwrap();
        grid.play(Pos::new(7, 7), Side::Black).unwrap();
        grid.play(Pos::new(8, 8), Side::White).unwrap();

        let moves = generate_moves(&grid, 2);
        let mut sorted = moves.clone();
        sorted.sort_by_key(|p| (p.x, p.y));
        sorted.dedup();
        assert_eq!(moves, sorted);
    }

    #[test]
    fn test_generate_moves_at_edge() {
        let mut grid = Grid::square(15).unwrap();
        grid.play(Pos::new(0, 0), Side::White).unwrap();
        assert_eq!(generate_moves(&grid, 2).len(), 8);
    }

    #[test]
    fn test_full_board_no_moves() {
        let grid = Grid::from_rows(&["XO", "OX"]).unwrap();
        assert!(generate_moves(&grid, 2).is_empty());
    }

    #[test]
    fn test_order_prefers_win_then_block() {
        let mut grid = Grid::from_rows(&[
            "...........",
            ".XXXX......",
            "...........",
            ".OOOO......",
            "...........",
            "...........",
        ])
        .unwrap();
        let moves = generate_moves(&grid, 2);
        let ordered = order_moves(&mut grid, &moves, Side::Black);

        let win = ordered[0].pos;
        assert!(win == Pos::new(0, 1) || win == Pos::new(5, 1));
        assert!(ordered[0].score >= WIN_BONUS);
        let blocks: Vec<Pos> = ordered[2..4].iter().map(|m| m.pos).collect();
        assert!(blocks.contains(&Pos::new(0, 3)) && blocks.contains(&Pos::new(5, 3)));
        assert_eq!(ordered.len(), moves.len());
    }

    #[test]
    fn test_order_restores_board() {
        let mut grid = Grid::from_rows(&["........", "..XO....", "..OX....", "........"]).unwrap();
        let before = grid.key();
        let moves = generate_moves(&grid, 2);
        order_moves(&mut grid, &moves, Side::White);
        assert_eq!(grid.key(), before);
    }

    #[test]
    fn test_empty_board_order_starts_at_center() {
        let mut grid = Grid::square(15).unwrap();
        let moves = generate_moves(&grid, 2);
        let ordered = order_moves(&mut grid, &moves, Side::Black);
        assert_eq!(ordered[0].pos, Pos::new(7, 7));
        assert_eq!(ordered[0].score, CENTER_WEIGHT * CENTER_RANGE);
    }
}
