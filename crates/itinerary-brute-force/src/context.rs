use crate::candidates::{Candidate, SplitPlan};
use crate::types::SearchStats;
use itinerary_core::{measure, ItineraryModel, LocationId};
use log::debug;

#[derive(Clone, Debug)]
pub(crate) struct Incumbent {
    pub distance: f64,
    pub candidate: Candidate,
}

pub(crate) struct SearchContext<'a> {
    model: &'a ItineraryModel,

    ceiling: f64,
    gateway: LocationId,
    lodging: LocationId,
    fixed_distance: f64,

    // Scratch route buffers, reused across candidates
    day1: Vec<LocationId>,
    day3: Vec<LocationId>,

    pub best: Option<Incumbent>,
    pub stats: SearchStats,
}

impl<'a> SearchContext<'a> {
    pub fn new(model: &'a ItineraryModel, fixed_distance: f64) -> Self {
        let cap = model.len();
        SearchContext {
            model,
            ceiling: model.max_hours_per_day(),
            gateway: model.gateway(),
            lodging: model.lodging(),
            fixed_distance,
            day1: Vec::with_capacity(cap),
            day3: Vec::with_capacity(cap),
            best: None,
            stats: SearchStats::default(),
        }
    }

    /// Scores one candidate; replaces the incumbent only on a strictly
    /// shorter total, so the first of several equal optima is kept.
    pub fn evaluate(&mut self, candidate: Candidate) {
        self.stats.candidates += 1;

        self.day1.clear();
        self.day1.push(self.gateway);
        self.day1.extend_from_slice(&candidate.day1);
        self.day1.push(self.lodging);
        let d1 = measure(self.model, &self.day1);
        if d1.hours > self.ceiling {
            return;
        }

        self.day3.clear();
        self.day3.push(self.lodging);
        self.day3.extend_from_slice(&candidate.day3);
        self.day3.push(self.gateway);
        let d3 = measure(self.model, &self.day3);
        if d3.hours > self.ceiling {
            return;
        }

        self.stats.feasible += 1;
        let total = d1.distance_km + self.fixed_distance + d3.distance_km;

        let improves = match &self.best {
            Some(best) => total < best.distance,
            None => true,
        };
        if improves {
            debug!(
                "new best {:.1} km (split {}, day 1 {:?}, day 3 {:?})",
                total, candidate.split, candidate.day1, candidate.day3
            );
            self.stats.improvements += 1;
            self.best = Some(Incumbent {
                distance: total,
                candidate,
            });
        }
    }

    /// Evaluates every candidate with `k` locations on Day 1.
    pub fn scan_split(&mut self, plan: &SplitPlan, k: usize) {
        let before = self.stats;
        for candidate in plan.candidates_for_split(k) {
            self.evaluate(candidate);
        }
        debug!(
            "split {}: {} candidates, {} feasible",
            k,
            self.stats.candidates - before.candidates,
            self.stats.feasible - before.feasible
        );
    }
}
