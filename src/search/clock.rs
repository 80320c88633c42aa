//! Wall-clock budget for one decision

use std::time::{Duration, Instant};

/// Cooperative time budget, checked at node entry and between siblings
#[derive(Debug, Clone, Copy)]
pub struct SearchClock {
    start: Instant,
    budget: Option<Duration>,
}

impl SearchClock {
    /// Start timing now; `None` never expires
    pub fn start(budget: Option<Duration>) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    /// A clock with no budget
    pub fn unlimited() -> Self {
        Self::start(None)
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// True once the budget has been used up
    #[inline]
    pub fn expired(&self) -> bool {
        self.budget.is_some_and(|budget| self.start.elapsed() >= budget)
    }
}

impl Default for SearchClock {
    fn default() -> Self {
        Self::unlimited()
    }
}
