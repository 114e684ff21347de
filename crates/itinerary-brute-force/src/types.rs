use itinerary_core::DayAssignment;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Worker threads. `0` and `1` both mean a plain sequential scan.
    pub workers: usize,
    /// Checked between split sizes; once passed, remaining sizes are skipped.
    pub deadline: Option<Duration>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            workers: 1,
            deadline: None,
        }
    }
}

impl SearchOptions {
    pub fn sequential() -> Self {
        Self::default()
    }

    pub fn parallel(workers: usize) -> Self {
        Self {
            workers,
            ..Self::default()
        }
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SearchStats {
    /// Candidate combinations enumerated, feasible or not.
    pub candidates: u64,
    /// Candidates within the ceiling on both open days.
    pub feasible: u64,
    /// Times the incumbent was replaced.
    pub improvements: u64,
    /// True when the deadline cut the enumeration short.
    pub truncated: bool,
    pub elapsed: Duration,
}

impl SearchStats {
    pub(crate) fn absorb(&mut self, other: &SearchStats) {
        self.candidates += other.candidates;
        self.feasible += other.feasible;
        self.improvements += other.improvements;
        self.truncated |= other.truncated;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub assignment: DayAssignment,
    pub total_distance_km: f64,
    /// Per-day elapsed hours, Day 1 first.
    pub day_hours: [f64; 3],
    pub day_distance_km: [f64; 3],
    pub stats: SearchStats,
}

/// Why no itinerary was returned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Infeasibility {
    /// The pinned day alone exceeds the ceiling; no split was examined.
    FixedDayOverCeiling { hours: f64, ceiling: f64 },
    /// Every split and ordering broke the ceiling on Day 1 or Day 3.
    NoFeasibleSplit,
}

impl fmt::Display for Infeasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Infeasibility::FixedDayOverCeiling { hours, ceiling } => write!(
                f,
                "the fixed day takes {hours:.2} h, over the {ceiling:.2} h daily limit"
            ),
            Infeasibility::NoFeasibleSplit => write!(
                f,
                "no split of the free locations fits both open days within the daily limit"
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    Found(SearchResult),
    Infeasible {
        cause: Infeasibility,
        stats: SearchStats,
    },
}

impl SearchOutcome {
    pub fn result(&self) -> Option<&SearchResult> {
        match self {
            SearchOutcome::Found(r) => Some(r),
            SearchOutcome::Infeasible { .. } => None,
        }
    }

    pub fn into_result(self) -> Option<SearchResult> {
        match self {
            SearchOutcome::Found(r) => Some(r),
            SearchOutcome::Infeasible { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Found(r) => &r.stats,
            SearchOutcome::Infeasible { stats, .. } => stats,
        }
    }
}
