//! Human-readable and JSON rendering of a search outcome.

use itinerary_brute_force::{SearchOutcome, SearchStats};
use itinerary_core::{segments, ItineraryModel, Route};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SegmentReport {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub travel_hours: f64,
    /// `None` for the day's closing leg into the gateway or lodging.
    pub dwell_hours: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DayReport {
    pub day: usize,
    pub route: Vec<String>,
    pub segments: Vec<SegmentReport>,
    pub distance_km: f64,
    pub hours: f64,
    pub stops: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatsReport {
    pub candidates: u64,
    pub feasible: u64,
    pub truncated: bool,
    pub elapsed_ms: u128,
}

impl From<&SearchStats> for StatsReport {
    fn from(s: &SearchStats) -> Self {
        Self {
            candidates: s.candidates,
            feasible: s.feasible,
            truncated: s.truncated,
            elapsed_ms: s.elapsed.as_millis(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItineraryReport {
    Found {
        days: Vec<DayReport>,
        total_distance_km: f64,
        total_hours: f64,
        stats: StatsReport,
    },
    Infeasible {
        reason: String,
        stats: StatsReport,
    },
}

fn day_report(
    model: &ItineraryModel,
    day: usize,
    route: &Route,
    distance_km: f64,
    hours: f64,
) -> DayReport {
    let anchors = [model.gateway(), model.lodging()];
    let legs = segments(model, route.locations());
    let last = legs.len().saturating_sub(1);
    let segments = legs
        .iter()
        .enumerate()
        .map(|(i, seg)| SegmentReport {
            from: model.name(seg.from).to_string(),
            to: model.name(seg.to).to_string(),
            distance_km: seg.distance_km,
            travel_hours: seg.travel_hours,
            dwell_hours: (i != last || !anchors.contains(&seg.to)).then_some(seg.dwell_hours),
        })
        .collect();

    DayReport {
        day,
        route: route
            .locations()
            .iter()
            .map(|&l| model.name(l).to_string())
            .collect(),
        segments,
        distance_km,
        hours,
        stops: route
            .stops()
            .iter()
            .map(|&l| model.name(l).to_string())
            .collect(),
    }
}

impl ItineraryReport {
    pub fn new(model: &ItineraryModel, outcome: &SearchOutcome) -> Self {
        let stats = StatsReport::from(outcome.stats());
        match outcome {
            SearchOutcome::Found(result) => {
                let days = result
                    .assignment
                    .iter()
                    .map(|(day, route)| {
                        let slot = day.number() - 1;
                        day_report(
                            model,
                            day.number(),
                            route,
                            result.day_distance_km[slot],
                            result.day_hours[slot],
                        )
                    })
                    .collect();
                ItineraryReport::Found {
                    days,
                    total_distance_km: result.total_distance_km,
                    total_hours: result.day_hours.iter().sum(),
                    stats,
                }
            }
            SearchOutcome::Infeasible { cause, .. } => ItineraryReport::Infeasible {
                reason: cause.to_string(),
                stats,
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ItineraryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItineraryReport::Infeasible { reason, stats } => {
                writeln!(f, "No itinerary satisfies the daily time limit: {reason}.")?;
                if stats.truncated {
                    writeln!(f, "(search stopped early at the deadline)")?;
                }
                Ok(())
            }
            ItineraryReport::Found {
                days,
                total_distance_km,
                total_hours,
                stats,
            } => {
                for day in days {
                    writeln!(f, "\n========== Day {} ==========", day.day)?;
                    writeln!(f, "Route: {}", day.route.join(" → "))?;
                    writeln!(f, "\nSegments:")?;
                    for seg in &day.segments {
                        writeln!(f, "  {} → {}:", seg.from, seg.to)?;
                        writeln!(f, "    - travel: {:.2} h", seg.travel_hours)?;
                        if let Some(dwell) = seg.dwell_hours {
                            writeln!(f, "    - at {}: {:.2} h", seg.to, dwell)?;
                        }
                    }
                    writeln!(f, "\nDay {} summary:", day.day)?;
                    writeln!(f, "  - distance: {} km", day.distance_km)?;
                    writeln!(f, "  - total time (travel + visits): {:.2} h", day.hours)?;
                }

                writeln!(f, "\n========== TOTALS ==========")?;
                writeln!(f, "Total distance: {total_distance_km} km")?;
                writeln!(f, "Total trip time: {total_hours:.2} h")?;

                writeln!(f, "\nPlaces visited per day:")?;
                for day in days {
                    if day.stops.is_empty() {
                        writeln!(f, "Day {}: (transfer day)", day.day)?;
                    } else {
                        writeln!(f, "Day {}: {}", day.day, day.stops.join(", "))?;
                    }
                }
                if stats.truncated {
                    writeln!(
                        f,
                        "\n(search stopped early at the deadline; result may not be optimal)"
                    )?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itinerary_brute_force::{solve, SearchOptions};
    use itinerary_core::ItineraryConfig;

    fn houston_report() -> ItineraryReport {
        let model = ItineraryConfig::houston().build().unwrap();
        let outcome = solve(&model, &SearchOptions::default());
        ItineraryReport::new(&model, &outcome)
    }

    #[test]
    fn found_report_lists_days_and_totals() {
        let ItineraryReport::Found {
            days,
            total_distance_km,
            total_hours,
            ..
        } = houston_report()
        else {
            panic!("houston instance should be feasible");
        };
        assert_eq!(days.len(), 3);
        assert_eq!(total_distance_km, 192.0);
        let summed: f64 = days.iter().map(|d| d.hours).sum();
        assert!((total_hours - summed).abs() < 1e-9);

        assert_eq!(days[1].route, ["Hotel", "NASA", "Hotel"]);
        assert_eq!(days[1].stops, ["NASA"]);
        assert_eq!(days[2].stops, ["Daikin Park", "USS Texas Museum"]);
    }

    #[test]
    fn closing_anchor_dwell_is_not_listed() {
        let ItineraryReport::Found { days, .. } = houston_report() else {
            panic!("houston instance should be feasible");
        };
        for day in &days {
            let (last, rest) = day.segments.split_last().unwrap();
            assert_eq!(last.dwell_hours, None, "day {}", day.day);
            assert!(rest.iter().all(|s| s.dwell_hours.is_some()));
        }
        // Day totals still include it.
        let listed: f64 = days[0]
            .segments
            .iter()
            .map(|s| s.travel_hours + s.dwell_hours.unwrap_or(0.0))
            .sum();
        assert!((days[0].hours - listed - 1.0).abs() < 1e-9);
    }

    #[test]
    fn text_rendering_mentions_every_stop() {
        let text = houston_report().to_string();
        assert!(text.contains(
            "Route: Airport → Health Museum → NRG Stadium → Toyota Center → Hotel"
        ));
        assert!(text.contains("Total distance: 192 km"));
        assert!(text.contains("Day 3: Daikin Park, USS Texas Museum"));
    }

    #[test]
    fn infeasible_report_names_the_cause() {
        let mut cfg = ItineraryConfig::houston();
        cfg.max_hours_per_day = 1.0;
        let model = cfg.build().unwrap();
        let report = ItineraryReport::new(&model, &solve(&model, &SearchOptions::default()));
        let text = report.to_string();
        assert!(text.starts_with("No itinerary satisfies the daily time limit"));
        assert!(text.contains("fixed day"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["status"], "infeasible");
        assert_eq!(json["stats"]["candidates"], 0);
    }

    #[test]
    fn json_rendering_is_tagged() {
        let json: serde_json::Value =
            serde_json::from_str(&houston_report().to_json().unwrap()).unwrap();
        assert_eq!(json["status"], "found");
        assert_eq!(json["total_distance_km"], 192.0);
        assert_eq!(json["days"][0]["stops"][0], "Health Museum");
    }
}
