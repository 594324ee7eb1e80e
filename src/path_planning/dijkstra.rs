//! Dijkstra path planning on an 8-connected occupancy grid
//!
//! Uniform-cost search: the frontier is keyed by the accumulated path cost
//! alone. Optimal for the non-negative costs of the motion table.

use crate::common::{GridAnnotator, GridNode, GridPath, GridPlanner, GridQuery, PlanningResult};
use crate::path_planning::motion::MIN_MOTION_COST;
use crate::path_planning::search::{search, SearchStrategy};

/// Dijkstra planner
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraPlanner;

impl DijkstraPlanner {
    pub fn new() -> Self {
        DijkstraPlanner
    }
}

impl SearchStrategy for DijkstraPlanner {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn priority(&self, _grid: &dyn GridQuery, _cell: GridNode, cost: f64) -> f64 {
        cost
    }

    fn termination_slack(&self) -> f64 {
        // the goal is at least one motion away from any frontier cell
        MIN_MOTION_COST
    }
}

impl GridPlanner for DijkstraPlanner {
    fn name(&self) -> &'static str {
        SearchStrategy::name(self)
    }

    fn plan_annotated(
        &self,
        grid: &dyn GridQuery,
        annotator: &mut dyn GridAnnotator,
    ) -> PlanningResult<Option<GridPath>> {
        search(self, grid, annotator)
    }
}
