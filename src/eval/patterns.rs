//! Pattern scores and single-run pattern evaluation
//!
//! A pattern is one run of same-colored stones scanned from its first stone
//! along one of the four directions. Each physical run is scored exactly once:
//! scanning from any stone that has a friendly stone directly behind it
//! yields [`ThreatInfo::NONE`].

use crate::board::{GameBoard, Pos, Side, Stone};

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - the game is over
    pub const FIVE: i32 = 1_000_000;
    /// Open four: _OOOO_ (wins next move whatever the opponent does)
    pub const OPEN_FOUR: i32 = 500_000;
    /// Four with one open end: XOOOO_ (forces a block)
    pub const FOUR: i32 = 100_000;
    /// Open three: _OOO_ (becomes an open four if ignored)
    pub const OPEN_THREE: i32 = 1_000;
    /// Three with one open end
    pub const THREE: i32 = 100;
    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 50;
    /// One empty cell that creates two forcing threats at once
    pub const DOUBLE_THREAT: i32 = 8_000;
}

/// Score returned by the board evaluator when a side has won
pub const WIN_SCORE: i32 = PatternScore::FIVE;

/// Cells past the run's first stone that are scanned for more stones
const MAX_FORWARD: i32 = 4;

/// Empty cells probed beyond the end of a run
const MAX_EMPTY_AFTER: u8 = 2;

/// Result of scanning one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThreatInfo {
    pub score: i32,
    /// Both ends empty and neither end blocked
    pub is_open: bool,
    /// Consecutive stones counted from the start, at most 5
    pub length: u8,
}

impl ThreatInfo {
    /// Not a run start, or nothing worth scoring
    pub const NONE: ThreatInfo = ThreatInfo {
        score: 0,
        is_open: false,
        length: 0,
    };
}

/// Evaluate the run of `side` stones starting at `start` along `(dx, dy)`.
///
/// Off-board cells are treated exactly like opponent stones: they block
/// the end of the run.
pub fn evaluate_pattern<B: GameBoard + ?Sized>(
    board: &B,
    start: Pos,
    (dx, dy): (i32, i32),
    side: Side,
) -> ThreatInfo {
    if !board.get(start).is(side) {
        return ThreatInfo::NONE;
    }

    let (px, py) = start.offset(dx, dy, -1);
    let before = board.stone_at(px, py);
    if before.is_some_and(|s| s.is(side)) {
        return ThreatInfo::NONE;
    }

    let mut blocked = false;
    let open_before = match before {
        Some(Stone::Empty) => true,
        // opponent stone or board edge
        _ => {
            blocked = true;
            false
        }
    };

    let mut length: u8 = 1;
    let mut empty_after: u8 = 0;
    for step in 1..=MAX_FORWARD {
        let (x, y) = start.offset(dx, dy, step);
        match board.stone_at(x, y) {
            Some(s) if s.is(side) => length += 1,
            Some(Stone::Empty) => {
                let mut probe = step;
                while empty_after < MAX_EMPTY_AFTER {
                    let (ex, ey) = start.offset(dx, dy, probe);
                    if board.stone_at(ex, ey) != Some(Stone::Empty) {
                        break;
                    }
                    empty_after += 1;
                    probe += 1;
                }
                break;
            }
            _ => {
                blocked = true;
                break;
            }
        }
    }

    let is_open = !blocked && open_before && empty_after > 0;
    let one_end_open = open_before || empty_after > 0;

    let score = match length {
        4.. if is_open => PatternScore::OPEN_FOUR,
        4.. if one_end_open => PatternScore::FOUR,
        3 if is_open => PatternScore::OPEN_THREE,
        3 if one_end_open => PatternScore::THREE,
        2 if is_open => PatternScore::OPEN_TWO,
        _ => 0,
    };

    ThreatInfo {
        score,
        is_open,
        length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Grid, DIRECTIONS};

    const H: (i32, i32) = (1, 0);

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::FOUR);
        assert!(PatternScore::FOUR > PatternScore::DOUBLE_THREAT);
        assert!(PatternScore::DOUBLE_THREAT > PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::THREE);
        assert!(PatternScore::THREE > PatternScore::OPEN_TWO);
    }

    #[test]
    fn test_open_four() {
        let grid = Grid::from_rows(&["..XXXX..."]).unwrap();
        let info = evaluate_pattern(&grid, Pos::new(2, 0), H, Side::Black);
        assert_eq!(info.length, 4);
        assert!(info.is_open);
        assert_eq!(info.score, PatternScore::OPEN_FOUR);
    }

    #[test]
    fn test_four_blocked_by_edge() {
        let grid = Grid::from_rows(&["XXXX....."]).unwrap();
        let info = evaluate_pattern(&grid, Pos::new(0, 0), H, Side::Black);
        assert_eq!(info.length, 4);
        assert!(!info.is_open);
        assert_eq!(info.score, PatternScore::FOUR);
    }

    #[test]
    fn test_four_blocked_by_opponent() {
        let grid = Grid::from_rows(&[".OXXXX.."]).unwrap();
        let info = evaluate_pattern(&grid, Pos::new(2, 0), H, Side::Black);
        assert_eq!(info.score, PatternScore::FOUR);
        assert!(!info.is_open);
    }

    #[test]
    fn test_dead_four_scores_zero() {
        let grid = Grid::from_rows(&["OXXXXO"]).unwrap();
        let info = evaluate_pattern(&grid, Pos::new(1, 0), H, Side::Black);
        assert_eq!(info.length, 4);
        assert_eq!(info.score, 0);
    }

    #[test]
    fn test_open_and_closed_three() {
        let open = Grid::from_rows(&["..OOO.."]).unwrap();
        let info = evaluate_pattern(&open, Pos::new(2, 0), H, Side::White);
        assert_eq!(info.length, 3);
        assert!(info.is_open);
        assert_eq!(info.score, PatternScore::OPEN_THREE);

        let closed = Grid::from_rows(&["XOOO..."]).unwrap();
        let info = evaluate_pattern(&closed, Pos::new(1, 0), H, Side::White);
        assert!(!info.is_open);
        assert_eq!(info.score, PatternScore::THREE);
    }

    #[test]
    fn test_open_two_and_lone_stone() {
        let grid = Grid::from_rows(&[".XX..X."]).unwrap();
        assert_eq!(
            evaluate_pattern(&grid, Pos::new(1, 0), H, Side::Black).score,
            PatternScore::OPEN_TWO
        );
        let single = evaluate_pattern(&grid, Pos::new(5, 0), H, Side::Black);
        assert_eq!(single.length, 1);
        assert_eq!(single.score, 0);
    }

    #[test]
    fn test_wrong_side_or_empty_start() {
        let grid = Grid::from_rows(&[".XX.."]).unwrap();
        assert_eq!(evaluate_pattern(&grid, Pos::new(1, 0), H, Side::White), ThreatInfo::NONE);
        assert_eq!(evaluate_pattern(&grid, Pos::new(0, 0), H, Side::Black), ThreatInfo::NONE);
    }

    #[test]
    fn test_run_scored_from_exactly_one_start() {
        let grid = Grid::from_rows(&[
            ".........",
            "..XXX....",
            ".........",
            ".........",
        ])
        .unwrap();

        for &dir in &DIRECTIONS {
            let starts: Vec<Pos> = (2..=4)
                .map(|x| Pos::new(x, 1))
                .filter(|&p| evaluate_pattern(&grid, p, dir, Side::Black).score != 0)
                .collect();
            if dir == H {
                assert_eq!(starts, vec![Pos::new(2, 1)]);
            } else {
                assert!(starts.is_empty(), "lone stones score nothing along {dir:?}");
            }
        }
    }

    #[test]
    fn test_vertical_and_diagonal_runs() {
        let grid = Grid::from_rows(&[".....", ".O...", "..O..", "...O.", "....."]).unwrap();
        let diag = evaluate_pattern(&grid, Pos::new(1, 1), (1, 1), Side::White);
        assert_eq!(diag.length, 3);
        assert_eq!(diag.score, PatternScore::OPEN_THREE);

        let vertical = Grid::from_rows(&["X", "X", ".", "."]).unwrap();
        let info = evaluate_pattern(&vertical, Pos::new(0, 0), (0, 1), Side::Black);
        assert_eq!(info.length, 2);
        assert!(!info.is_open);
        assert_eq!(info.score, 0);
    }
}
