use crate::error::{ConfigError, ConfigLoadError};
use crate::model::{DistanceMatrix, ItineraryModel, Location, LocationId, Roles};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Loadable configuration bundle. Role locations are referenced by name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItineraryConfig {
    pub locations: Vec<Location>,
    pub distances_km: Vec<Vec<f64>>,
    pub average_speed_kmh: f64,
    pub max_hours_per_day: f64,
    pub gateway: String,
    pub lodging: String,
    pub fixed_destination: String,
}

impl ItineraryConfig {
    /// The 8-location Houston instance the tool ships with.
    pub fn houston() -> Self {
        let locations = [
            ("Airport", 2.0),
            ("Daikin Park", 3.0),
            ("Health Museum", 3.0),
            ("NRG Stadium", 5.0),
            ("NASA", 8.0),
            ("Toyota Center", 2.0),
            ("USS Texas Museum", 3.0),
            ("Hotel", 1.0),
        ]
        .into_iter()
        .map(|(name, dwell)| Location::new(name, dwell))
        .collect();

        let distances_km = [
            [0.0, 30.0, 25.0, 35.0, 40.0, 32.0, 45.0, 35.0],
            [30.0, 0.0, 12.0, 18.0, 45.0, 15.0, 35.0, 5.0],
            [25.0, 12.0, 0.0, 8.0, 42.0, 5.0, 38.0, 2.0],
            [35.0, 18.0, 8.0, 0.0, 40.0, 3.0, 39.0, 5.0],
            [40.0, 45.0, 42.0, 40.0, 0.0, 38.0, 20.0, 35.0],
            [32.0, 15.0, 5.0, 3.0, 38.0, 0.0, 36.0, 1.0],
            [45.0, 35.0, 38.0, 39.0, 20.0, 36.0, 0.0, 30.0],
            [35.0, 5.0, 2.0, 5.0, 35.0, 1.0, 30.0, 0.0],
        ]
        .iter()
        .map(|row| row.to_vec())
        .collect();

        Self {
            locations,
            distances_km,
            average_speed_kmh: 60.0,
            max_hours_per_day: 12.0,
            gateway: "Airport".to_string(),
            lodging: "Hotel".to_string(),
            fixed_destination: "NASA".to_string(),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigLoadError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_reader<R: Read>(r: R) -> Result<Self, ConfigLoadError> {
        Ok(serde_json::from_reader(BufReader::new(r))?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        Self::from_reader(File::open(path)?)
    }

    /// Validates the bundle and freezes it into an [`ItineraryModel`].
    pub fn build(&self) -> Result<ItineraryModel, ConfigError> {
        let n = self.locations.len();
        if n == 0 {
            return Err(ConfigError::EmptyLocations);
        }

        let mut seen = HashSet::with_capacity(n);
        for loc in &self.locations {
            if !seen.insert(loc.name.as_str()) {
                return Err(ConfigError::DuplicateLocation(loc.name.clone()));
            }
            if !(loc.dwell_hours.is_finite() && loc.dwell_hours >= 0.0) {
                return Err(ConfigError::NegativeDwell {
                    name: loc.name.clone(),
                    value: loc.dwell_hours,
                });
            }
        }

        self.validate_matrix(n)?;

        if !(self.average_speed_kmh.is_finite() && self.average_speed_kmh > 0.0) {
            return Err(ConfigError::InvalidSpeed(self.average_speed_kmh));
        }
        if !(self.max_hours_per_day.is_finite() && self.max_hours_per_day >= 0.0) {
            return Err(ConfigError::InvalidCeiling(self.max_hours_per_day));
        }

        let roles = self.resolve_roles()?;

        debug!(
            "built itinerary model: {} locations, {} km/h, {} h/day",
            n, self.average_speed_kmh, self.max_hours_per_day
        );

        Ok(ItineraryModel {
            locations: self.locations.clone(),
            distances: DistanceMatrix::from_rows(&self.distances_km),
            average_speed_kmh: self.average_speed_kmh,
            max_hours_per_day: self.max_hours_per_day,
            roles,
        })
    }

    fn validate_matrix(&self, n: usize) -> Result<(), ConfigError> {
        let rows = &self.distances_km;
        if rows.len() != n {
            return Err(ConfigError::MatrixSizeMismatch {
                rows: rows.len(),
                locations: n,
            });
        }
        for (row, r) in rows.iter().enumerate() {
            if r.len() != n {
                return Err(ConfigError::NonSquareMatrix {
                    expected: n,
                    row,
                    found: r.len(),
                });
            }
        }
        for (i, r) in rows.iter().enumerate() {
            if let Some((j, &v)) = r
                .iter()
                .enumerate()
                .find(|(_, v)| !(v.is_finite() && **v >= 0.0))
            {
                return Err(ConfigError::NegativeDistance {
                    from: i,
                    to: j,
                    value: v,
                });
            }
        }
        for (i, r) in rows.iter().enumerate() {
            if r[i] != 0.0 {
                return Err(ConfigError::NonZeroDiagonal {
                    index: i,
                    value: r[i],
                });
            }
            for (j, &ab) in r.iter().enumerate().skip(i + 1) {
                let ba = rows[j][i];
                if ab != ba {
                    return Err(ConfigError::AsymmetricDistance { a: i, b: j, ab, ba });
                }
            }
        }
        Ok(())
    }

    fn resolve_roles(&self) -> Result<Roles, ConfigError> {
        let lookup = |role: &'static str, name: &str| {
            self.locations
                .iter()
                .position(|l| l.name == name)
                .map(LocationId::new)
                .ok_or_else(|| ConfigError::UnknownLocation {
                    role,
                    name: name.to_string(),
                })
        };

        let gateway = lookup("gateway", &self.gateway)?;
        let lodging = lookup("lodging", &self.lodging)?;
        let fixed_destination = lookup("fixed destination", &self.fixed_destination)?;

        let named = [
            ("gateway", gateway),
            ("lodging", lodging),
            ("fixed destination", fixed_destination),
        ];
        for (i, &(first, a)) in named.iter().enumerate() {
            for &(second, b) in &named[i + 1..] {
                if a == b {
                    return Err(ConfigError::RoleConflict {
                        name: self.locations[a.index()].name.clone(),
                        first,
                        second,
                    });
                }
            }
        }

        Ok(Roles {
            gateway,
            lodging,
            fixed_destination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn houston() -> ItineraryModel {
        ItineraryConfig::houston().build().unwrap()
    }

    #[test]
    fn houston_instance_resolves_roles() {
        let m = houston();
        assert_eq!(m.len(), 8);
        assert_eq!(m.name(m.gateway()), "Airport");
        assert_eq!(m.name(m.lodging()), "Hotel");
        assert_eq!(m.name(m.fixed_destination()), "NASA");
        let free: Vec<usize> = m.free_locations().iter().map(|l| l.index()).collect();
        assert_eq!(free, vec![1, 2, 3, 5, 6]);
    }

    #[test]
    fn distances_are_symmetric_with_zero_diagonal() {
        let m = houston();
        for a in m.location_ids() {
            assert_eq!(m.distance(a, a), 0.0);
            for b in m.location_ids() {
                assert_eq!(m.distance(a, b), m.distance(b, a));
            }
        }
    }

    #[test]
    fn travel_time_uses_average_speed() {
        let m = houston();
        let (hotel, nasa) = (m.lodging(), m.fixed_destination());
        assert!((m.travel_time(hotel, nasa) - 35.0 / 60.0).abs() < 1e-12);
        assert_eq!(m.dwell_time(nasa), 8.0);
    }

    #[test]
    fn rejects_non_square_matrix() {
        let mut cfg = ItineraryConfig::houston();
        cfg.distances_km[3].pop();
        assert_eq!(
            cfg.build().unwrap_err(),
            ConfigError::NonSquareMatrix {
                expected: 8,
                row: 3,
                found: 7
            }
        );
    }

    #[test]
    fn rejects_missing_row() {
        let mut cfg = ItineraryConfig::houston();
        cfg.distances_km.pop();
        assert!(matches!(
            cfg.build(),
            Err(ConfigError::MatrixSizeMismatch { rows: 7, locations: 8 })
        ));
    }

    #[test]
    fn rejects_negative_values() {
        let mut cfg = ItineraryConfig::houston();
        cfg.distances_km[1][2] = -12.0;
        cfg.distances_km[2][1] = -12.0;
        assert!(matches!(
            cfg.build(),
            Err(ConfigError::NegativeDistance { from: 1, to: 2, .. })
        ));

        let mut cfg = ItineraryConfig::houston();
        cfg.locations[2].dwell_hours = -1.0;
        assert!(matches!(cfg.build(), Err(ConfigError::NegativeDwell { .. })));

        let mut cfg = ItineraryConfig::houston();
        cfg.average_speed_kmh = 0.0;
        assert_eq!(cfg.build().unwrap_err(), ConfigError::InvalidSpeed(0.0));

        let mut cfg = ItineraryConfig::houston();
        cfg.max_hours_per_day = f64::NAN;
        assert!(matches!(cfg.build(), Err(ConfigError::InvalidCeiling(_))));
    }

    #[test]
    fn rejects_asymmetric_and_diagonal() {
        let mut cfg = ItineraryConfig::houston();
        cfg.distances_km[0][1] = 31.0;
        assert!(matches!(
            cfg.build(),
            Err(ConfigError::AsymmetricDistance { a: 0, b: 1, .. })
        ));

        let mut cfg = ItineraryConfig::houston();
        cfg.distances_km[4][4] = 1.0;
        assert!(matches!(
            cfg.build(),
            Err(ConfigError::NonZeroDiagonal { index: 4, .. })
        ));
    }

    #[test]
    fn rejects_unknown_and_conflicting_roles() {
        let mut cfg = ItineraryConfig::houston();
        cfg.fixed_destination = "Space Center".to_string();
        assert_eq!(
            cfg.build().unwrap_err(),
            ConfigError::UnknownLocation {
                role: "fixed destination",
                name: "Space Center".to_string()
            }
        );

        let mut cfg = ItineraryConfig::houston();
        cfg.fixed_destination = "Hotel".to_string();
        assert!(matches!(
            cfg.build(),
            Err(ConfigError::RoleConflict {
                first: "lodging",
                second: "fixed destination",
                ..
            })
        ));
    }

    #[test]
    fn rejects_duplicate_names_and_empty_table() {
        let mut cfg = ItineraryConfig::houston();
        cfg.locations[1].name = "Hotel".to_string();
        assert_eq!(
            cfg.build().unwrap_err(),
            ConfigError::DuplicateLocation("Hotel".to_string())
        );

        let cfg = ItineraryConfig {
            locations: vec![],
            distances_km: vec![],
            ..ItineraryConfig::houston()
        };
        assert_eq!(cfg.build().unwrap_err(), ConfigError::EmptyLocations);
    }

    #[test]
    fn json_round_trip() {
        let cfg = ItineraryConfig::houston();
        let text = serde_json::to_string(&cfg).unwrap();
        let back = ItineraryConfig::from_json_str(&text).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn malformed_json_is_a_load_error() {
        let err = ItineraryConfig::from_json_str("{\"locations\": 3}").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Json(_)));
    }
}
