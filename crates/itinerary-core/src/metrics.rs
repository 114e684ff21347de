//! Time and distance accumulation over an ordered location sequence.
//!
//! Dwell time is charged at every arrival, the day's terminal anchor
//! included. Everything here takes a plain slice so the search can evaluate
//! its scratch buffers without building a [`crate::route::Route`].

use crate::model::{ItineraryModel, LocationId};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct RouteMetrics {
    pub distance_km: f64,
    pub hours: f64,
}

/// One leg of a route.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub from: LocationId,
    pub to: LocationId,
    pub distance_km: f64,
    pub travel_hours: f64,
    pub dwell_hours: f64,
}

/// Travel plus dwell hours, each added to the running total on its own.
pub fn route_time(model: &ItineraryModel, route: &[LocationId]) -> f64 {
    let mut hours = 0.0;
    for w in route.windows(2) {
        hours += model.travel_time(w[0], w[1]);
        hours += model.dwell_time(w[1]);
    }
    hours
}

pub fn route_distance(model: &ItineraryModel, route: &[LocationId]) -> f64 {
    route.windows(2).map(|w| model.distance(w[0], w[1])).sum()
}

/// Both totals in a single pass.
pub fn measure(model: &ItineraryModel, route: &[LocationId]) -> RouteMetrics {
    route
        .windows(2)
        .fold(RouteMetrics::default(), |mut acc, w| {
            let (from, to) = (w[0], w[1]);
            acc.distance_km += model.distance(from, to);
            acc.hours += model.travel_time(from, to);
            acc.hours += model.dwell_time(to);
            acc
        })
}

pub fn segments(model: &ItineraryModel, route: &[LocationId]) -> Vec<Segment> {
    route
        .windows(2)
        .map(|w| Segment {
            from: w[0],
            to: w[1],
            distance_km: model.distance(w[0], w[1]),
            travel_hours: model.travel_time(w[0], w[1]),
            dwell_hours: model.dwell_time(w[1]),
        })
        .collect()
}
