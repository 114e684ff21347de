use crate::metrics::route_distance;
use crate::model::{ItineraryModel, LocationId};
use serde::Serialize;
use std::fmt;

/// One day's ordered travel plan: anchor, zero or more stops, anchor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Route {
    locations: Vec<LocationId>,
}

impl Route {
    pub fn between(start: LocationId, stops: &[LocationId], end: LocationId) -> Self {
        let mut locations = Vec::with_capacity(stops.len() + 2);
        locations.push(start);
        locations.extend_from_slice(stops);
        locations.push(end);
        Self { locations }
    }

    #[inline]
    pub fn locations(&self) -> &[LocationId] {
        &self.locations
    }

    #[inline]
    pub fn start(&self) -> LocationId {
        self.locations[0]
    }

    #[inline]
    pub fn end(&self) -> LocationId {
        self.locations[self.locations.len() - 1]
    }

    /// Intermediate locations, anchors excluded.
    #[inline]
    pub fn stops(&self) -> &[LocationId] {
        &self.locations[1..self.locations.len() - 1]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Always false: a route holds at least its two anchors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Day {
    /// gateway -> stops -> lodging
    Arrival,
    /// lodging -> fixed destination -> lodging
    Fixed,
    /// lodging -> stops -> gateway
    Departure,
}

impl Day {
    pub const ALL: [Day; 3] = [Day::Arrival, Day::Fixed, Day::Departure];

    /// 1-based day number.
    pub const fn number(self) -> usize {
        match self {
            Day::Arrival => 1,
            Day::Fixed => 2,
            Day::Departure => 3,
        }
    }

    const fn slot(self) -> usize {
        self.number() - 1
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}", self.number())
    }
}

/// Exactly three routes, one per [`Day`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DayAssignment {
    routes: [Route; 3],
}

impl DayAssignment {
    pub fn new(arrival: Route, fixed: Route, departure: Route) -> Self {
        Self {
            routes: [arrival, fixed, departure],
        }
    }

    #[inline]
    pub fn route(&self, day: Day) -> &Route {
        &self.routes[day.slot()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Day, &Route)> {
        Day::ALL.into_iter().zip(self.routes.iter())
    }

    pub fn total_distance(&self, model: &ItineraryModel) -> f64 {
        self.routes
            .iter()
            .map(|r| route_distance(model, r.locations()))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(i: usize) -> LocationId {
        LocationId::new(i)
    }

    #[test]
    fn between_places_anchors_around_stops() {
        let r = Route::between(id(0), &[id(2), id(3)], id(7));
        assert_eq!(r.locations(), &[id(0), id(2), id(3), id(7)]);
        assert_eq!(r.start(), id(0));
        assert_eq!(r.end(), id(7));
        assert_eq!(r.stops(), &[id(2), id(3)]);
    }

    #[test]
    fn route_without_stops_keeps_both_anchors() {
        let r = Route::between(id(7), &[], id(7));
        assert_eq!(r.len(), 2);
        assert!(r.stops().is_empty());
    }

    #[test]
    fn assignment_indexes_by_day() {
        let a = Route::between(id(0), &[id(1)], id(7));
        let f = Route::between(id(7), &[id(4)], id(7));
        let d = Route::between(id(7), &[id(2)], id(0));
        let asg = DayAssignment::new(a.clone(), f.clone(), d.clone());
        assert_eq!(asg.route(Day::Arrival), &a);
        assert_eq!(asg.route(Day::Fixed), &f);
        assert_eq!(asg.route(Day::Departure), &d);
        let days: Vec<usize> = asg.iter().map(|(day, _)| day.number()).collect();
        assert_eq!(days, vec![1, 2, 3]);
    }
}
