//! Error types for grid_search_planner

use thiserror::Error;

/// Main error type for grid planning
///
/// An unreachable goal is not an error: planners report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum PlanningError {
    /// Start or goal outside the grid, or placed on an obstacle
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
    /// Grid rejected at construction (bad extents, ragged rows, stray cells)
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Visualization error
    #[error("Visualization error: {0}")]
    Visualization(String),
}

/// Result type alias for planning operations
pub type PlanningResult<T> = Result<T, PlanningError>;
