#![deny(clippy::all)]

pub mod candidates;
mod context;
mod parallel;
pub mod types;

use context::{Incumbent, SearchContext};
use itinerary_core::{measure, Day, DayAssignment, ItineraryModel, Route};
use log::{info, warn};
use std::time::Instant;

pub use candidates::{Candidate, SplitPlan};
pub use types::{Infeasibility, SearchOptions, SearchOutcome, SearchResult, SearchStats};

/// Sequential scan over split sizes, deadline checked between sizes.
fn search_sequential(
    model: &ItineraryModel,
    plan: &SplitPlan,
    fixed_distance: f64,
    started: Instant,
    options: &SearchOptions,
) -> (Option<Incumbent>, SearchStats) {
    let mut ctx = SearchContext::new(model, fixed_distance);
    for k in plan.split_sizes() {
        if options.deadline.is_some_and(|d| started.elapsed() >= d) {
            warn!("deadline reached before split {}, stopping", k);
            ctx.stats.truncated = true;
            break;
        }
        ctx.scan_split(plan, k);
    }
    (ctx.best, ctx.stats)
}

fn reconstruct(model: &ItineraryModel, best: Incumbent, stats: SearchStats) -> SearchResult {
    let gateway = model.gateway();
    let lodging = model.lodging();
    let assignment = DayAssignment::new(
        Route::between(gateway, &best.candidate.day1, lodging),
        model.fixed_day_route(),
        Route::between(lodging, &best.candidate.day3, gateway),
    );

    let mut day_hours = [0.0; 3];
    let mut day_distance_km = [0.0; 3];
    for (day, route) in assignment.iter() {
        let m = measure(model, route.locations());
        day_hours[day.number() - 1] = m.hours;
        day_distance_km[day.number() - 1] = m.distance_km;
    }

    SearchResult {
        assignment,
        total_distance_km: best.distance,
        day_hours,
        day_distance_km,
        stats,
    }
}

/// Exhaustive search for the shortest 3-day itinerary within the daily
/// ceiling. Infeasibility is an outcome, not an error.
pub fn solve(model: &ItineraryModel, options: &SearchOptions) -> SearchOutcome {
    let started = Instant::now();
    let ceiling = model.max_hours_per_day();

    let fixed = measure(model, model.fixed_day_route().locations());
    if fixed.hours > ceiling {
        warn!(
            "{} alone takes {:.2} h against a {:.2} h ceiling, skipping search",
            Day::Fixed,
            fixed.hours,
            ceiling
        );
        return SearchOutcome::Infeasible {
            cause: Infeasibility::FixedDayOverCeiling {
                hours: fixed.hours,
                ceiling,
            },
            stats: SearchStats {
                elapsed: started.elapsed(),
                ..SearchStats::default()
            },
        };
    }

    let plan = SplitPlan::new(model.free_locations());
    info!(
        "searching {} candidates over {} free locations ({} worker(s))",
        plan.candidate_count(),
        plan.free().len(),
        options.workers.max(1)
    );

    let (best, mut stats) = if options.workers > 1 {
        parallel::search(
            model,
            &plan,
            fixed.distance_km,
            options.workers,
            started,
            options.deadline,
        )
    } else {
        search_sequential(model, &plan, fixed.distance_km, started, options)
    };
    stats.elapsed = started.elapsed();

    match best {
        Some(best) => {
            info!(
                "best itinerary {:.1} km after {} candidates ({} feasible) in {:?}",
                best.distance, stats.candidates, stats.feasible, stats.elapsed
            );
            SearchOutcome::Found(reconstruct(model, best, stats))
        }
        None => {
            warn!(
                "no feasible split among {} candidates within {:.2} h/day",
                stats.candidates, ceiling
            );
            SearchOutcome::Infeasible {
                cause: Infeasibility::NoFeasibleSplit,
                stats,
            }
        }
    }
}
