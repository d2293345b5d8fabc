//! Error types for wing load analysis

use thiserror::Error;

/// Main error type for load analysis operations
#[derive(Error, Debug)]
pub enum LoadsError {
    #[error("Invalid flight envelope: {0}")]
    InvalidEnvelope(String),

    #[error("Dimension mismatch for {what}: expected {expected} values, found {found}")]
    DimensionMismatch {
        what: String,
        expected: usize,
        found: usize,
    },

    #[error("Point mass '{name}' at y = {position} m lies outside the span [{root}, {tip}] m")]
    UnplacedMass {
        name: String,
        position: f64,
        root: f64,
        tip: f64,
    },

    #[error("Invalid span extent for {what}: [{start}, {end}] m within span [{root}, {tip}] m")]
    InvalidExtent {
        what: String,
        start: f64,
        end: f64,
        root: f64,
        tip: f64,
    },

    #[error("Non-positive velocity {velocity} m/s at y = {position} m where CL is nonzero")]
    ZeroVelocity { position: f64, velocity: f64 },

    #[error("Raw integrated lift is zero - trim factor is undefined")]
    TrimInfeasible,

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate name '{0}' already exists")]
    DuplicateName(String),

    #[error("Variable '{0}' not found in store")]
    VariableNotFound(String),

    #[error("Variable '{key}' has units '{found}', which cannot be converted to '{expected}'")]
    UnitMismatch {
        key: String,
        expected: String,
        found: String,
    },

    #[error("Unknown unit '{0}'")]
    UnknownUnit(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for load analysis operations
pub type LoadsResult<T> = Result<T, LoadsError>;
