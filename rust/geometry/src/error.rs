use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during mesh generation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("roof plane is vertical: pitch {0} rad is within epsilon of +/-90 degrees")]
    VerticalRoofPitch(f64),

    #[error("triangulation needs at least 3 vertices, got {0}")]
    InsufficientVertices(usize),

    #[error("footprint polygon is not closed")]
    OpenFootprint,

    #[error("ground and roof loops differ in length: {ground} vs {roof}")]
    LoopMismatch { ground: usize, roof: usize },

    #[error("invalid building parameters: {0}")]
    Params(#[from] massing_lite_core::Error),
}
