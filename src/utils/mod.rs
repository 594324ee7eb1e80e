//! Utility modules for grid_search_planner

pub mod grid_map;
pub mod visualization;

pub use grid_map::*;
pub use visualization::{Visualizer, GridCanvas, PathStyle, colors};
