use itinerary_core::{ConfigLoadError, ItineraryConfig};
use std::path::PathBuf;

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data")
        .join(name)
}

#[test]
fn shipped_houston_file_matches_builtin_instance() {
    let cfg = ItineraryConfig::from_path(data_file("houston.json")).unwrap();
    assert_eq!(cfg, ItineraryConfig::houston());
    let model = cfg.build().unwrap();
    assert_eq!(model.free_locations().len(), 5);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = ItineraryConfig::from_path(data_file("does-not-exist.json")).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Io(_)));
}

#[test]
fn inline_json_with_unknown_role_fails_validation() {
    let json = r#"{
        "locations": [
            { "name": "Gate", "dwell_hours": 0.5 },
            { "name": "Inn", "dwell_hours": 1 },
            { "name": "Summit", "dwell_hours": 4 }
        ],
        "distances_km": [[0, 10, 20], [10, 0, 15], [20, 15, 0]],
        "average_speed_kmh": 50,
        "max_hours_per_day": 10,
        "gateway": "Gate",
        "lodging": "Inn",
        "fixed_destination": "Peak"
    }"#;
    let cfg = ItineraryConfig::from_json_str(json).unwrap();
    let err = cfg.build().unwrap_err();
    assert_eq!(err.to_string(), "fixed destination 'Peak' is not in the location table");
}
