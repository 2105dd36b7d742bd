use thiserror::Error;

/// Result type for capture and parameter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while capturing a footprint or building parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("capture session is already closed; reset it before adding points")]
    SessionClosed,

    #[error("a closed footprint needs at least 3 vertices, got {0}")]
    InsufficientVertices(usize),

    #[error("height must be finite and non-negative, got {0}")]
    InvalidHeight(f64),

    #[error("pitch must lie strictly between -90 and 90 degrees, got {0} rad")]
    PitchOutOfRange(f64),

    #[error("azimuth must be finite, got {0}")]
    InvalidAzimuth(f64),
}
