//! Common types used throughout grid_search_planner

use serde::{Deserialize, Serialize};

/// Integer cell coordinate on the occupancy grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridNode {
    pub x: i32,
    pub y: i32,
}

impl GridNode {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Euclidean length of the straight segment to `other`
    pub fn distance(&self, other: &GridNode) -> f64 {
        (((self.x - other.x).pow(2) + (self.y - other.y).pow(2)) as f64).sqrt()
    }

    /// True when `other` is one of the eight surrounding cells
    pub fn is_neighbor(&self, other: &GridNode) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
    }
}

impl From<(i32, i32)> for GridNode {
    fn from(tuple: (i32, i32)) -> Self {
        Self { x: tuple.0, y: tuple.1 }
    }
}

/// Classification of a single cell as seen by the search core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellClass {
    Free,
    Obstacle,
    Goal,
}

/// Planned path on the grid, start to goal inclusive
#[derive(Debug, Clone, PartialEq)]
pub struct GridPath {
    pub cells: Vec<GridNode>,
    /// Accumulated motion cost along `cells`
    pub cost: f64,
    /// Number of cells finalized by the search that produced this path
    pub nodes_expanded: usize,
}

impl GridPath {
    pub fn new(cells: Vec<GridNode>, cost: f64, nodes_expanded: usize) -> Self {
        Self { cells, cost, nodes_expanded }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Option<GridNode> {
        self.cells.first().copied()
    }

    pub fn goal(&self) -> Option<GridNode> {
        self.cells.last().copied()
    }

    pub fn contains(&self, node: &GridNode) -> bool {
        self.cells.contains(node)
    }

    pub fn x_coords(&self) -> Vec<f64> {
        self.cells.iter().map(|c| c.x as f64).collect()
    }

    pub fn y_coords(&self) -> Vec<f64> {
        self.cells.iter().map(|c| c.y as f64).collect()
    }

    /// Geometric length of the polyline through the cell centers
    pub fn total_length(&self) -> f64 {
        if self.cells.len() < 2 {
            return 0.0;
        }
        self.cells.windows(2)
            .map(|w| w[0].distance(&w[1]))
            .sum()
    }
}
