//! Common traits defining the seams between the search core and its collaborators

use crate::common::types::*;
use crate::common::error::PlanningResult;
use crate::path_planning::heuristic::Heuristic;

/// Read-only view of an occupancy grid as needed by the planners
///
/// Coordinates passed to `classify` and `heuristic` are always inside
/// `extents()`; planners bounds-check before asking.
pub trait GridQuery {
    /// Classify a cell as free, obstacle, or goal
    fn classify(&self, x: i32, y: i32) -> CellClass;

    /// Start cell of the planning problem
    fn start(&self) -> GridNode;

    /// Goal cell of the planning problem
    fn goal(&self) -> GridNode;

    /// Grid size as (width, height)
    fn extents(&self) -> (i32, i32);

    /// Estimated remaining cost from (x, y) to the goal
    ///
    /// Must be admissible and consistent for A* to return optimal paths.
    /// Defaults to the octile distance, which is both on the 8-connected
    /// motion table.
    fn heuristic(&self, x: i32, y: i32) -> f64 {
        Heuristic::Octile.estimate(GridNode::new(x, y), self.goal())
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        let (width, height) = self.extents();
        x >= 0 && y >= 0 && x < width && y < height
    }
}

/// Receiver for display-only annotations emitted during search
pub trait GridAnnotator {
    /// A cell was finalized by the search
    fn mark_visited(&mut self, x: i32, y: i32);

    /// A cell belongs to the reconstructed path
    fn mark_path(&mut self, x: i32, y: i32);
}

/// Annotator that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnnotator;

impl GridAnnotator for NoopAnnotator {
    fn mark_visited(&mut self, _x: i32, _y: i32) {}

    fn mark_path(&mut self, _x: i32, _y: i32) {}
}

/// Trait for grid-based shortest-path planners
pub trait GridPlanner {
    /// Short algorithm name used in logs
    fn name(&self) -> &'static str;

    /// Plan from `grid.start()` to `grid.goal()`, reporting annotations
    ///
    /// Returns `Ok(None)` when the goal is unreachable.
    fn plan_annotated(
        &self,
        grid: &dyn GridQuery,
        annotator: &mut dyn GridAnnotator,
    ) -> PlanningResult<Option<GridPath>>;

    /// Plan from `grid.start()` to `grid.goal()`
    fn plan(&self, grid: &dyn GridQuery) -> PlanningResult<Option<GridPath>> {
        self.plan_annotated(grid, &mut NoopAnnotator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OpenField;

    impl GridQuery for OpenField {
        fn classify(&self, x: i32, y: i32) -> CellClass {
            if (x, y) == (3, 4) {
                CellClass::Goal
            } else {
                CellClass::Free
            }
        }

        fn start(&self) -> GridNode {
            GridNode::new(0, 0)
        }

        fn goal(&self) -> GridNode {
            GridNode::new(3, 4)
        }

        fn extents(&self) -> (i32, i32) {
            (5, 5)
        }
    }

    #[test]
    fn test_default_heuristic_is_octile() {
        let grid = OpenField;
        let expected = 3.0 * std::f64::consts::SQRT_2 + 1.0;
        assert!((grid.heuristic(0, 0) - expected).abs() < 1e-10);
        assert_eq!(grid.heuristic(3, 4), 0.0);
    }

    #[test]
    fn test_in_bounds() {
        let grid = OpenField;
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(4, 4));
        assert!(!grid.in_bounds(5, 0));
        assert!(!grid.in_bounds(0, -1));
    }
}
