//! Threat counting and fork detection

use crate::board::{simulate, GameBoard, Side, DIRECTIONS};

use super::patterns::{evaluate_pattern, PatternScore, ThreatInfo};

/// Which patterns [`count_threats`] counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatFilter {
    /// Open runs of exactly three
    OpenThrees,
    /// Open threes and better, plus fours with one open end
    Forcing,
}

impl ThreatFilter {
    #[inline]
    fn accepts(self, info: ThreatInfo) -> bool {
        match self {
            ThreatFilter::OpenThrees => info.is_open && info.length == 3,
            ThreatFilter::Forcing => info.score >= PatternScore::OPEN_THREE || info.score == PatternScore::FOUR,
        }
    }
}

/// Every pattern `side` has on the board, one per run start and direction
fn patterns_of<B: GameBoard + ?Sized>(board: &B, side: Side) -> impl Iterator<Item = ThreatInfo> + '_ {
    board
        .positions()
        .filter(move |&pos| board.get(pos).is(side))
        .flat_map(move |pos| DIRECTIONS.into_iter().map(move |dir| evaluate_pattern(board, pos, dir, side)))
}

/// Count the patterns of `side` that pass `filter`
pub fn count_threats<B: GameBoard + ?Sized>(board: &B, side: Side, filter: ThreatFilter) -> u32 {
    let count = patterns_of(board, side).filter(|&info| filter.accepts(info)).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// True when `side` has a four with both ends open
pub fn has_open_four<B: GameBoard + ?Sized>(board: &B, side: Side) -> bool {
    patterns_of(board, side).any(|info| info.length >= 4 && info.is_open)
}

/// Bonus for empty cells that would give a side two forcing threats at once.
///
/// Each empty cell is tried for both sides in turn. Returns
/// `(me_bonus, opponent_bonus)`, each a multiple of
/// [`PatternScore::DOUBLE_THREAT`].
pub fn evaluate_forks<B: GameBoard + ?Sized>(board: &mut B, me: Side) -> (i32, i32) {
    let opp = me.opponent();
    let empties: Vec<_> = board.positions().filter(|&pos| board.get(pos).is_empty()).collect();

    let mut mine = 0;
    let mut theirs = 0;
    for pos in empties {
        {
            let sim = simulate(board, pos, me);
            if count_threats(&*sim, me, ThreatFilter::Forcing) >= 2 {
                mine += PatternScore::DOUBLE_THREAT;
            }
        }
        let sim = simulate(board, pos, opp);
        if count_threats(&*sim, opp, ThreatFilter::Forcing) >= 2 {
            theirs += PatternScore::DOUBLE_THREAT;
        }
    }
    (mine, theirs)
}
