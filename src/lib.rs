//! grid_search_planner - shortest paths on 8-connected occupancy grids
//!
//! This crate provides Dijkstra and A* planners that share one search loop,
//! a dense occupancy grid to plan on, and gnuplot rendering of the result.

// Core modules
pub mod common;
pub mod config;
pub mod utils;

// Algorithm modules
pub mod path_planning;

// Re-export common types for convenience
pub use common::{CellClass, GridNode, GridPath};
pub use common::{GridAnnotator, GridPlanner, GridQuery, NoopAnnotator};
pub use common::{PlanningError, PlanningResult};
pub use path_planning::{AStarConfig, AStarPlanner, DijkstraPlanner, Heuristic};
pub use utils::OccupancyGrid;
