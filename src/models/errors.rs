use thiserror::Error;

use super::combatant::CombatantId;

/// Errors raised while building a scene for the geometry engine.
///
/// The geometry functions themselves never fail; these cover loading and
/// validating the caller-supplied snapshot.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Failed to read a scene file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Scene file is not valid JSON for a scene
    #[error("invalid scene description: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown or malformed command-line argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A flag was given without its value
    #[error("{0} requires a value")]
    MissingValue(&'static str),

    /// Footprint smaller than one grid cell
    #[error("combatant {id} footprint {width}x{height} is smaller than a {cell}px cell")]
    DegenerateFootprint {
        id: CombatantId,
        width: f64,
        height: f64,
        cell: f64,
    },

    #[error("combatant id {0} appears more than once")]
    DuplicateId(CombatantId),

    #[error("invalid grid: {0}")]
    InvalidGrid(String),
}

/// Type alias for Results using SceneError
pub type SceneResult<T> = Result<T, SceneError>;

impl From<std::num::ParseIntError> for SceneError {
    fn from(err: std::num::ParseIntError) -> Self {
        SceneError::InvalidArgument(err.to_string())
    }
}
