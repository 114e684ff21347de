//! Lazy enumeration of (split size, Day 1 selection, Day 3 ordering).
//!
//! Order is fixed and is what makes ties deterministic: split sizes
//! ascending, then Day 1 selections in lexicographic order of positions in
//! the free list, then Day 3 orderings of the remaining locations (kept in
//! free-list order) lexicographically by position.

use itertools::Itertools;
use itinerary_core::LocationId;
use std::ops::Range;

/// One way to split and order the free locations over the two open days.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Number of free locations visited on Day 1.
    pub split: usize,
    pub day1: Vec<LocationId>,
    pub day3: Vec<LocationId>,
}

/// Owns the free list; every call to [`SplitPlan::candidates`] starts a
/// fresh enumeration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitPlan {
    free: Vec<LocationId>,
}

impl SplitPlan {
    pub fn new(free: Vec<LocationId>) -> Self {
        Self { free }
    }

    pub fn free(&self) -> &[LocationId] {
        &self.free
    }

    /// `1..f`: both open days get at least one free location. Empty when
    /// fewer than two locations are free.
    pub fn split_sizes(&self) -> Range<usize> {
        1..self.free.len().max(1)
    }

    pub fn candidates(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.split_sizes()
            .flat_map(move |k| self.candidates_for_split(k))
    }

    pub fn candidates_for_split(&self, k: usize) -> impl Iterator<Item = Candidate> + '_ {
        let free = &self.free;
        free.iter()
            .copied()
            .permutations(k)
            .flat_map(move |day1| {
                let rest: Vec<LocationId> = free
                    .iter()
                    .copied()
                    .filter(|loc| !day1.contains(loc))
                    .collect();
                let n = rest.len();
                rest.into_iter()
                    .permutations(n)
                    .map(move |day3| Candidate {
                        split: k,
                        day1: day1.clone(),
                        day3,
                    })
            })
    }

    /// `(f - 1) * f!`, saturating.
    pub fn candidate_count(&self) -> u128 {
        let f = self.free.len();
        if f < 2 {
            return 0;
        }
        let factorial = (2..=f as u128).fold(1u128, |acc, x| acc.saturating_mul(x));
        factorial.saturating_mul((f - 1) as u128)
    }
}
