//! Per-call cost and visited tables sized to the grid
//!
//! Both tables are dense matrices indexed `(x, y)`. Callers only pass
//! in-bounds cells.

use nalgebra::DMatrix;

use crate::common::GridNode;

/// Best known path cost from the start for every cell
#[derive(Debug, Clone)]
pub struct CostTable {
    costs: DMatrix<f64>,
}

impl CostTable {
    /// All cells start unreached (`f64::INFINITY`)
    pub fn new(width: i32, height: i32) -> Self {
        let costs = DMatrix::from_element(width as usize, height as usize, f64::INFINITY);
        Self { costs }
    }

    pub fn get(&self, cell: GridNode) -> f64 {
        self.costs[(cell.x as usize, cell.y as usize)]
    }

    /// Lower the entry to `candidate` if it improves it
    pub fn relax(&mut self, cell: GridNode, candidate: f64) -> bool {
        let entry = &mut self.costs[(cell.x as usize, cell.y as usize)];
        if candidate < *entry {
            *entry = candidate;
            true
        } else {
            false
        }
    }
}

/// Finalized flag for every cell
#[derive(Debug, Clone)]
pub struct VisitedTable {
    visited: DMatrix<bool>,
    count: usize,
}

impl VisitedTable {
    pub fn new(width: i32, height: i32) -> Self {
        let visited = DMatrix::from_element(width as usize, height as usize, false);
        Self { visited, count: 0 }
    }

    pub fn is_visited(&self, cell: GridNode) -> bool {
        self.visited[(cell.x as usize, cell.y as usize)]
    }

    /// Finalize a cell; returns false if it was already finalized
    pub fn mark(&mut self, cell: GridNode) -> bool {
        let entry = &mut self.visited[(cell.x as usize, cell.y as usize)];
        if *entry {
            return false;
        }
        *entry = true;
        self.count += 1;
        true
    }

    /// Number of finalized cells
    pub fn count(&self) -> usize {
        self.count
    }
}
