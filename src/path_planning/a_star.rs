//! A* path planning on an 8-connected occupancy grid
//!
//! The frontier key is the accumulated path cost plus the weighted grid
//! heuristic. The heuristic only orders the frontier; it never enters the
//! path cost. With weight 1.0 and an admissible, consistent heuristic the
//! result is as cheap as Dijkstra's.

use serde::{Deserialize, Serialize};

use crate::common::{
    GridAnnotator, GridNode, GridPath, GridPlanner, GridQuery, PlanningError, PlanningResult,
};
use crate::path_planning::search::{search, SearchStrategy};

/// Configuration for A* planner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AStarConfig {
    /// Heuristic weight (1.0 = optimal, >1.0 = faster but suboptimal)
    pub heuristic_weight: f64,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self { heuristic_weight: 1.0 }
    }
}

/// A* planner
#[derive(Debug, Clone)]
pub struct AStarPlanner {
    config: AStarConfig,
}

impl AStarPlanner {
    pub fn new(config: AStarConfig) -> PlanningResult<Self> {
        let w = config.heuristic_weight;
        if !w.is_finite() || w < 0.0 {
            return Err(PlanningError::InvalidParameter(format!(
                "heuristic_weight must be finite and non-negative, got {}",
                w
            )));
        }
        Ok(AStarPlanner { config })
    }

    pub fn config(&self) -> &AStarConfig {
        &self.config
    }
}

impl Default for AStarPlanner {
    fn default() -> Self {
        AStarPlanner { config: AStarConfig::default() }
    }
}

impl SearchStrategy for AStarPlanner {
    fn name(&self) -> &'static str {
        "AStar"
    }

    fn priority(&self, grid: &dyn GridQuery, cell: GridNode, cost: f64) -> f64 {
        cost + self.config.heuristic_weight * grid.heuristic(cell.x, cell.y)
    }

    fn termination_slack(&self) -> f64 {
        0.0
    }
}

impl GridPlanner for AStarPlanner {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::CellClass;
    use crate::path_planning::{DijkstraPlanner, Heuristic};
    use crate::utils::OccupancyGrid;
    use std::f64::consts::SQRT_2;

    fn create_two_wall_grid() -> OccupancyGrid {
        #[rustfmt::skip]
        let grid = OccupancyGrid::from_rows(&[
            "..........",
            ".S........",
            "..........",
            "######....",
            "..........",
            "..........",
            "....######",
            "..........",
            "........G.",
            "..........",
        ]).unwrap();
        grid
    }

    #[test]
    fn test_a_star_open_grid_diagonal() {
        let grid = OccupancyGrid::new(5, 5, GridNode::new(0, 0), GridNode::new(4, 4), &[]).unwrap();
        let path = AStarPlanner::default().plan(&grid).unwrap().unwrap();
        assert_eq!(path.len(), 5);
        assert!((path.cost - 4.0 * SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn test_a_star_matches_dijkstra_cost() {
        let grid = create_two_wall_grid();
        let dijkstra = DijkstraPlanner::new().plan(&grid).unwrap().unwrap();

        for heuristic in [Heuristic::Octile, Heuristic::Euclidean] {
            let grid = create_two_wall_grid().with_heuristic(heuristic);
            let a_star = AStarPlanner::default().plan(&grid).unwrap().unwrap();
            assert!((a_star.cost - dijkstra.cost).abs() < 1e-9);
            assert!(a_star.nodes_expanded <= dijkstra.nodes_expanded);
        }
    }

    #[test]
    fn test_a_star_path_is_valid() {
        let grid = create_two_wall_grid();
        let path = AStarPlanner::default().plan(&grid).unwrap().unwrap();

        assert_eq!(path.start(), Some(grid.start()));
        assert_eq!(path.goal(), Some(grid.goal()));
        for w in path.cells.windows(2) {
            assert!(w[0].is_neighbor(&w[1]));
        }
        for cell in &path.cells {
            assert_ne!(grid.classify(cell.x, cell.y), CellClass::Obstacle);
        }
        assert!((path.total_length() - path.cost).abs() < 1e-9);
    }

    #[test]
    fn test_a_star_zero_weight_is_uniform_cost() {
        let grid = create_two_wall_grid();
        let planner = AStarPlanner::new(AStarConfig { heuristic_weight: 0.0 }).unwrap();
        let path = planner.plan(&grid).unwrap().unwrap();
        let dijkstra = DijkstraPlanner::new().plan(&grid).unwrap().unwrap();
        assert!((path.cost - dijkstra.cost).abs() < 1e-9);
    }

    #[test]
    fn test_a_star_rejects_bad_weight() {
        for w in [-1.0, f64::NAN, f64::INFINITY] {
            let result = AStarPlanner::new(AStarConfig { heuristic_weight: w });
            assert!(matches!(result, Err(PlanningError::InvalidParameter(_))));
        }
    }

    #[test]
    fn test_a_star_enclosed_goal() {
        #[rustfmt::skip]
        let grid = OccupancyGrid::from_rows(&[
            "S....",
            ".###.",
            ".#G#.",
            ".###.",
        ]).unwrap();
        assert!(AStarPlanner::default().plan(&grid).unwrap().is_none());
    }
}
