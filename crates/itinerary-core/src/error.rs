use thiserror::Error;

/// Malformed fixed inputs. Fatal: the search never starts on a model that
/// failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("location table is empty")]
    EmptyLocations,
    #[error("distance matrix must be {expected}x{expected}, row {row} has {found} entries")]
    NonSquareMatrix {
        expected: usize,
        row: usize,
        found: usize,
    },
    #[error("distance matrix has {rows} rows but there are {locations} locations")]
    MatrixSizeMismatch { rows: usize, locations: usize },
    #[error("distance from {from} to {to} must be finite and non-negative, got {value}")]
    NegativeDistance { from: usize, to: usize, value: f64 },
    #[error("distance from location {index} to itself must be 0, got {value}")]
    NonZeroDiagonal { index: usize, value: f64 },
    #[error("distance matrix is not symmetric at ({a}, {b}): {ab} vs {ba}")]
    AsymmetricDistance { a: usize, b: usize, ab: f64, ba: f64 },
    #[error("dwell time of '{name}' must be finite and non-negative, got {value}")]
    NegativeDwell { name: String, value: f64 },
    #[error("average speed must be finite and positive, got {0}")]
    InvalidSpeed(f64),
    #[error("daily time ceiling must be finite and non-negative, got {0}")]
    InvalidCeiling(f64),
    #[error("location name '{0}' appears more than once")]
    DuplicateLocation(String),
    #[error("{role} '{name}' is not in the location table")]
    UnknownLocation { role: &'static str, name: String },
    #[error("'{name}' cannot be both {first} and {second}")]
    RoleConflict {
        name: String,
        first: &'static str,
        second: &'static str,
    },
}

/// Failure to read or parse a configuration bundle.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}
