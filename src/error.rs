use thiserror::Error;

/// Top-level error type for the alignment engine.
#[derive(Debug, Error)]
pub enum AlignmentError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error(transparent)]
    Interchange(#[from] InterchangeError),
}

/// Errors raised while solving vertex geometry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("invalid radius {0}: radius must be finite and non-negative")]
    InvalidRadius(f64),

    #[error("degenerate curve: {0}")]
    DegenerateCurve(String),
}

/// Structural errors against the control-point sequence.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("control point index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors related to station queries.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QueryError {
    #[error("station {station} is outside the alignment [0, {total_length}]")]
    StationOutOfRange { station: f64, total_length: f64 },

    #[error("alignment has no segments")]
    EmptyAlignment,
}

/// Errors related to sampling the alignment for display.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SamplingError {
    #[error("invalid sampling parameters: {0}")]
    InvalidParameters(String),
}

/// Errors related to interchange export.
#[derive(Debug, Error)]
pub enum InterchangeError {
    #[error("failed to serialize interchange records: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`AlignmentError`].
pub type Result<T> = std::result::Result<T, AlignmentError>;
