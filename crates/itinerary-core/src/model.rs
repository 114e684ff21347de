use crate::route::Route;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index into the location table of an [`ItineraryModel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(usize);

impl LocationId {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    /// Hours spent once arrived.
    pub dwell_hours: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, dwell_hours: f64) -> Self {
        Self {
            name: name.into(),
            dwell_hours,
        }
    }
}

/// Square km table, flattened row-major for cache locality.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    km: Vec<f64>,
}

impl DistanceMatrix {
    /// Rows must already be validated as square.
    pub(crate) fn from_rows(rows: &[Vec<f64>]) -> Self {
        let n = rows.len();
        let mut km = vec![0.0; n * n];
        for (i, row) in rows.iter().enumerate() {
            km[i * n..(i + 1) * n].copy_from_slice(row);
        }
        Self { n, km }
    }

    #[inline(always)]
    pub fn get(&self, from: LocationId, to: LocationId) -> f64 {
        self.km[from.index() * self.n + to.index()]
    }
}

/// The role a location plays in the 3-day plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roles {
    /// Day 1 start and Day 3 end.
    pub gateway: LocationId,
    /// Day 1 end, both ends of Day 2, Day 3 start.
    pub lodging: LocationId,
    /// Pinned round-trip destination of Day 2.
    pub fixed_destination: LocationId,
}

/// Validated, immutable problem instance.
///
/// Built through [`crate::config::ItineraryConfig::build`]; every accessor
/// assumes in-range ids and panics otherwise.
#[derive(Clone, Debug)]
pub struct ItineraryModel {
    pub(crate) locations: Vec<Location>,
    pub(crate) distances: DistanceMatrix,
    pub(crate) average_speed_kmh: f64,
    pub(crate) max_hours_per_day: f64,
    pub(crate) roles: Roles,
}

impl ItineraryModel {
    #[inline(always)]
    pub fn distance(&self, from: LocationId, to: LocationId) -> f64 {
        self.distances.get(from, to)
    }

    #[inline(always)]
    pub fn dwell_time(&self, loc: LocationId) -> f64 {
        self.locations[loc.index()].dwell_hours
    }

    #[inline(always)]
    pub fn travel_time(&self, from: LocationId, to: LocationId) -> f64 {
        self.distance(from, to) / self.average_speed_kmh
    }

    pub fn name(&self, loc: LocationId) -> &str {
        &self.locations[loc.index()].name
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn location_ids(&self) -> impl Iterator<Item = LocationId> + '_ {
        (0..self.locations.len()).map(LocationId::new)
    }

    pub fn max_hours_per_day(&self) -> f64 {
        self.max_hours_per_day
    }

    pub fn gateway(&self) -> LocationId {
        self.roles.gateway
    }

    pub fn lodging(&self) -> LocationId {
        self.roles.lodging
    }

    pub fn fixed_destination(&self) -> LocationId {
        self.roles.fixed_destination
    }

    /// Locations to be split over the two open days, ascending by id.
    pub fn free_locations(&self) -> Vec<LocationId> {
        let Roles {
            gateway,
            lodging,
            fixed_destination,
        } = self.roles;
        self.location_ids()
            .filter(|&id| id != gateway && id != lodging && id != fixed_destination)
            .collect()
    }

    pub fn fixed_day_route(&self) -> Route {
        Route::between(
            self.roles.lodging,
            &[self.roles.fixed_destination],
            self.roles.lodging,
        )
    }
}
