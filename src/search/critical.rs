//! Forced-move detection ahead of the full search
//!
//! Some positions have an answer that no search needs to confirm: complete a
//! five, block the opponent's five, or stop an open four before it appears.

use crate::board::{simulate, GameBoard, Pos, Side};
use crate::eval::{count_threats, has_open_four, ThreatFilter};
use crate::rules::is_winning_state;

/// Weight for cells where the opponent would make an open four
const OPEN_FOUR_WEIGHT: i32 = 1000;
/// Weight per open three the deciding side gains on a cell
const OWN_THREE_WEIGHT: i32 = 50;
/// Scores at or above this are forced defences
const DEFEND_THRESHOLD: i32 = 1000;

/// Why a critical move was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriticalKind {
    /// Completes five in a row
    Win,
    /// Takes the cell where the opponent would complete five
    Block,
    /// Takes the cell where the opponent would make an open four
    Defend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriticalMove {
    pub pos: Pos,
    pub kind: CriticalKind,
}

/// Look for a move that must be played now.
///
/// `moves` is scanned in the given order; the first qualifying move wins
/// within each priority. Returns `None` when the position needs a search.
pub fn find_critical_move<B: GameBoard + ?Sized>(board: &mut B, moves: &[Pos], me: Side) -> Option<CriticalMove> {
    let opp = me.opponent();

    let wins_for = |board: &mut B, side: Side| {
        moves.iter().copied().find(|&pos| {
            let sim = simulate(&mut *board, pos, side);
            is_winning_state(&*sim, side)
        })
    };

    if let Some(pos) = wins_for(&mut *board, me) {
        return Some(CriticalMove {
            pos,
            kind: CriticalKind::Win,
        });
    }
    if let Some(pos) = wins_for(&mut *board, opp) {
        return Some(CriticalMove {
            pos,
            kind: CriticalKind::Block,
        });
    }

    let my_threes = count_threats(&*board, me, ThreatFilter::OpenThrees);
    let mut best: Option<(Pos, i32)> = None;
    for &pos in moves {
        let mut score = 0;
        {
            let sim = simulate(&mut *board, pos, opp);
            if has_open_four(&*sim, opp) {
                score += OPEN_FOUR_WEIGHT;
            }
        }
        {
            let sim = simulate(&mut *board, pos, me);
            let gained = count_threats(&*sim, me, ThreatFilter::OpenThrees).saturating_sub(my_threes);
            score += OWN_THREE_WEIGHT * i32::try_from(gained).unwrap_or(i32::MAX / OWN_THREE_WEIGHT);
        }
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((pos, score));
        }
    }

    best.filter(|&(_, score)| score >= DEFEND_THRESHOLD)
        .map(|(pos, _)| CriticalMove {
            pos,
            kind: CriticalKind::Defend,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Grid;
    use crate::search::generate_moves;

    fn critical(grid: &mut Grid, me: Side) -> Option<CriticalMove> {
        let moves = generate_moves(&*grid, 2);
        find_critical_move(grid, &moves, me)
    }

    #[test]
    fn test_completes_own_four() {
        let mut grid = Grid::from_rows(&[
            "...........",
            "OXXXX......",
            "...........",
            "...O.......",
            "...........",
        ])
        .unwrap();
        let found = critical(&mut grid, Side::Black).unwrap();
        assert_eq!(found.pos, Pos::new(5, 1));
        assert_eq!(found.kind, CriticalKind::Win);
    }

    #[test]
    fn test_win_beats_block() {
        let mut grid = Grid::from_rows(&["..........", ".XXXX.....", "..........", ".OOOO....."]).unwrap();
        let found = critical(&mut grid, Side::White).unwrap();
        assert_eq!(found.kind, CriticalKind::Win);
        assert!(found.pos == Pos::new(0, 3) || found.pos == Pos::new(5, 3));
    }

    #[test]
    fn test_blocks_opponent_five() {
        let mut grid = Grid::from_rows(&[
            "..........",
            "..........",
            "...X......",
            "...X......",
            "...X......",
            "...X......",
            "..........",
            ".....O....",
        ])
        .unwrap();
        let found = critical(&mut grid, Side::White).unwrap();
        assert_eq!(found.kind, CriticalKind::Block);
        assert!(found.pos == Pos::new(3, 1) || found.pos == Pos::new(3, 6));
    }

    #[test]
    fn test_blocks_open_three_end() {
        let mut grid = Grid::from_rows(&[
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
            ".....XXX.......",
            "...............",
            "...............",
            "...............",
        ])
        .unwrap();
        let found = critical(&mut grid, Side::White).unwrap();
        assert_eq!(found.kind, CriticalKind::Defend);
        assert!(found.pos == Pos::new(4, 5) || found.pos == Pos::new(8, 5));
    }

    #[test]
    fn test_block_that_builds_own_three_preferred() {
        // both ends of the black three stop an open four; only (8, 7) also
        // extends the white pair into an open three
        let mut grid = Grid::from_rows(&[
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
            "........O......",
            "........O......",
            ".....XXX.......",
            "...............",
            "...............",
            "...............",
        ])
        .unwrap();
        let found = critical(&mut grid, Side::White).unwrap();
        assert_eq!(found.kind, CriticalKind::Defend);
        assert_eq!(found.pos, Pos::new(8, 7));
    }

    #[test]
    fn test_quiet_position_needs_search() {
        let mut grid = Grid::from_rows(&["........", "...X....", "....O...", "........", "........"]).unwrap();
        assert_eq!(critical(&mut grid, Side::Black), None);
    }

    #[test]
    fn test_board_restored_after_detection() {
        let mut grid = Grid::from_rows(&["........", ".XXX....", "..O.....", "........"]).unwrap();
        let before = grid.key();
        critical(&mut grid, Side::White);
        assert_eq!(grid.key(), before);
    }
}
