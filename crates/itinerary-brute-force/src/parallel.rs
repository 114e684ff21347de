use crate::candidates::SplitPlan;
use crate::context::{Incumbent, SearchContext};
use crate::types::SearchStats;
use crossbeam_channel::unbounded;
use itinerary_core::ItineraryModel;
use log::{debug, warn};
use std::thread;
use std::time::{Duration, Instant};

/// Result of scanning one split size.
struct SplitScan {
    split: usize,
    best: Option<Incumbent>,
    stats: SearchStats,
}

/// Split sizes are dealt round-robin to `workers` threads; each scan's local
/// best comes back over a channel. The merge walks splits in ascending order
/// with a strict `<`, which is exactly the order the sequential scan sees.
pub(crate) fn search(
    model: &ItineraryModel,
    plan: &SplitPlan,
    fixed_distance: f64,
    workers: usize,
    started: Instant,
    deadline: Option<Duration>,
) -> (Option<Incumbent>, SearchStats) {
    let splits: Vec<usize> = plan.split_sizes().collect();
    let workers = workers.min(splits.len()).max(1);
    let (tx, rx) = unbounded::<SplitScan>();

    let mut scans: Vec<SplitScan> = thread::scope(|s| {
        for w in 0..workers {
            let tx = tx.clone();
            let mine: Vec<usize> = splits.iter().copied().skip(w).step_by(workers).collect();
            s.spawn(move || {
                for k in mine {
                    let mut ctx = SearchContext::new(model, fixed_distance);
                    if deadline.is_some_and(|d| started.elapsed() >= d) {
                        ctx.stats.truncated = true;
                    } else {
                        ctx.scan_split(plan, k);
                    }
                    let scan = SplitScan {
                        split: k,
                        best: ctx.best,
                        stats: ctx.stats,
                    };
                    if tx.send(scan).is_err() {
                        break;
                    }
                }
                debug!("worker {} finished", w);
            });
        }
        drop(tx);
        rx.iter().collect()
    });

    scans.sort_by_key(|scan| scan.split);

    let mut best: Option<Incumbent> = None;
    let mut stats = SearchStats::default();
    for scan in scans {
        stats.absorb(&scan.stats);
        if let Some(local) = scan.best {
            let improves = match &best {
                Some(b) => local.distance < b.distance,
                None => true,
            };
            if improves {
                best = Some(local);
            }
        }
    }
    if stats.truncated {
        warn!("deadline reached, some split sizes were not examined");
    }
    (best, stats)
}
