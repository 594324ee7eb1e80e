//! Shared best-first search loop behind the Dijkstra and A* planners
//!
//! The loop pops the lowest-priority frontier entry, discards it if its cell
//! is already finalized, finalizes it otherwise and expands the eight motions.
//! The goal cell is never pushed: it is detected while expanding its
//! neighbors, and the terminal node links straight to the expanding cell.
//!
//! After a goal connection is recorded the loop keeps popping only while an
//! entry could still beat it, i.e. while `priority + termination_slack` is
//! below the recorded cost. For A* with a heuristic that is exact next to the
//! goal this ends at the very next pop.

use log::{debug, trace};

use crate::common::{
    CellClass, GridAnnotator, GridNode, GridPath, GridQuery, PlanningError, PlanningResult,
};
use crate::path_planning::frontier::Frontier;
use crate::path_planning::motion::MOTIONS;
use crate::path_planning::node::{NodeArena, NodeId, SearchNode};
use crate::path_planning::reconstruct::reconstruct_path;
use crate::path_planning::tables::{CostTable, VisitedTable};

/// The part of a planner that differs between variants
pub trait SearchStrategy {
    /// Short algorithm name used in logs
    fn name(&self) -> &'static str;

    /// Frontier key for `cell` reached with path cost `cost`
    fn priority(&self, grid: &dyn GridQuery, cell: GridNode, cost: f64) -> f64;

    /// Lower bound on the cost still needed past a popped entry's priority
    fn termination_slack(&self) -> f64;
}

/// Reject problems the search must not start on
pub fn validate_problem(grid: &dyn GridQuery) -> PlanningResult<(GridNode, GridNode)> {
    let (width, height) = grid.extents();
    if width <= 0 || height <= 0 {
        return Err(PlanningError::InvalidGrid(format!(
            "grid extents must be positive, got {}x{}",
            width, height
        )));
    }

    let start = grid.start();
    let goal = grid.goal();
    for (label, cell) in [("start", start), ("goal", goal)] {
        if !grid.in_bounds(cell.x, cell.y) {
            return Err(PlanningError::InvalidCoordinates(format!(
                "{} ({}, {}) outside {}x{} grid",
                label, cell.x, cell.y, width, height
            )));
        }
        if grid.classify(cell.x, cell.y) == CellClass::Obstacle {
            return Err(PlanningError::InvalidCoordinates(format!(
                "{} ({}, {}) is an obstacle",
                label, cell.x, cell.y
            )));
        }
    }
    if grid.classify(goal.x, goal.y) != CellClass::Goal {
        return Err(PlanningError::InvalidCoordinates(format!(
            "goal ({}, {}) is not classified as goal",
            goal.x, goal.y
        )));
    }

    Ok((start, goal))
}

/// Run one planning call with `strategy` over `grid`
///
/// Returns `Ok(None)` when the frontier empties without reaching the goal.
pub fn search<S: SearchStrategy + ?Sized>(
    strategy: &S,
    grid: &dyn GridQuery,
    annotator: &mut dyn GridAnnotator,
) -> PlanningResult<Option<GridPath>> {
    let name = strategy.name();
    let (start, goal) = validate_problem(grid).map_err(|e| {
        debug!("[{}] FAILED: {}", name, e);
        e
    })?;
    debug!(
        "[{}] plan: start=({},{}) goal=({},{})",
        name, start.x, start.y, goal.x, goal.y
    );

    if start == goal {
        annotator.mark_path(start.x, start.y);
        return Ok(Some(GridPath::new(vec![start], 0.0, 0)));
    }

    let (width, height) = grid.extents();
    let mut costs = CostTable::new(width, height);
    let mut visited = VisitedTable::new(width, height);
    let mut arena = NodeArena::new();
    let mut frontier = Frontier::new();

    costs.relax(start, 0.0);
    let start_priority = strategy.priority(grid, start, 0.0);
    let start_id = arena.alloc(SearchNode::new(start.x, start.y, start_priority, None));
    frontier.push(start_id, start_priority)?;

    let slack = strategy.termination_slack();
    let mut terminal: Option<(NodeId, f64)> = None;

    while let Some((priority, id)) = frontier.pop() {
        if let Some((_, best)) = terminal {
            if priority + slack >= best {
                break;
            }
        }

        let current = arena[id].cell();
        // stale duplicate
        if !visited.mark(current) {
            continue;
        }
        annotator.mark_visited(current.x, current.y);

        let current_cost = costs.get(current);
        trace!(
            "[{}] expand ({},{}) cost={:.3} priority={:.3} open={}",
            name, current.x, current.y, current_cost, priority, frontier.len()
        );

        for motion in MOTIONS.iter() {
            let next = current.offset(motion.dx, motion.dy);
            if !grid.in_bounds(next.x, next.y) {
                continue;
            }
            let next_cost = current_cost + motion.cost;

            match grid.classify(next.x, next.y) {
                CellClass::Goal => {
                    if terminal.map_or(true, |(_, best)| next_cost < best) {
                        let goal_id =
                            arena.alloc(SearchNode::new(next.x, next.y, next_cost, Some(id)));
                        terminal = Some((goal_id, next_cost));
                        trace!(
                            "[{}] goal reached from ({},{}) cost={:.3}",
                            name, current.x, current.y, next_cost
                        );
                    }
                    break;
                }
                CellClass::Obstacle => continue,
                CellClass::Free => {}
            }
            if visited.is_visited(next) {
                continue;
            }

            costs.relax(next, next_cost);
            let next_priority = strategy.priority(grid, next, next_cost);
            let next_id = arena.alloc(SearchNode::new(next.x, next.y, next_priority, Some(id)));
            frontier.push(next_id, next_priority)?;
        }
    }

    let expanded = visited.count();
    match terminal {
        Some((goal_id, cost)) => {
            let cells = reconstruct_path(&arena, Some(goal_id));
            for cell in &cells {
                annotator.mark_path(cell.x, cell.y);
            }
            debug!(
                "[{}] SUCCESS: path length={} cells, cost={:.3}, nodes_expanded={}, nodes_created={}",
                name,
                cells.len(),
                cost,
                expanded,
                arena.len()
            );
            Ok(Some(GridPath::new(cells, cost, expanded)))
        }
        None => {
            debug!(
                "[{}] NoPath: frontier exhausted after expanding {} nodes",
                name, expanded
            );
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::OccupancyGrid;

    /// Uniform-cost key without the one-motion slack
    struct NoSlack;

    impl SearchStrategy for NoSlack {
        fn name(&self) -> &'static str {
            "NoSlack"
        }

        fn priority(&self, _grid: &dyn GridQuery, _cell: GridNode, cost: f64) -> f64 {
            cost
        }

        fn termination_slack(&self) -> f64 {
            0.0
        }
    }

    #[derive(Default)]
    struct Recorder {
        visited: Vec<GridNode>,
        path: Vec<GridNode>,
    }

    impl GridAnnotator for Recorder {
        fn mark_visited(&mut self, x: i32, y: i32) {
            self.visited.push(GridNode::new(x, y));
        }

        fn mark_path(&mut self, x: i32, y: i32) {
            self.path.push(GridNode::new(x, y));
        }
    }

    #[test]
    fn test_goal_never_finalized() {
        let grid = OccupancyGrid::from_rows(&["S...", "....", "...G"]).unwrap();
        let mut recorder = Recorder::default();
        let path = search(&NoSlack, &grid, &mut recorder).unwrap().unwrap();

        assert!(!recorder.visited.contains(&grid.goal()));
        assert_eq!(recorder.visited.len(), path.nodes_expanded);
        assert_eq!(recorder.path, path.cells);
    }

    #[test]
    fn test_slack_only_shortens_the_tail() {
        #[rustfmt::skip]
        let grid = OccupancyGrid::from_rows(&[
            "....S",
            ".##..",
            "G#...",
            ".....",
        ]).unwrap();
        let loose = search(&NoSlack, &grid, &mut Recorder::default()).unwrap().unwrap();
        let tight = search(&crate::path_planning::DijkstraPlanner, &grid, &mut Recorder::default())
            .unwrap()
            .unwrap();

        assert!((loose.cost - (4.0 + std::f64::consts::SQRT_2)).abs() < 1e-9);
        assert_eq!(loose.cost, tight.cost);
        assert!(loose.nodes_expanded > tight.nodes_expanded);
    }

    #[test]
    fn test_validate_rejects_goal_on_obstacle() {
        let mut grid = OccupancyGrid::from_rows(&["S..", "..G"]).unwrap();
        grid.set_obstacle(GridNode::new(2, 1), true).unwrap();
        let err = validate_problem(&grid).unwrap_err();
        assert!(matches!(err, PlanningError::InvalidCoordinates(_)));
    }

    #[test]
    fn test_start_equals_goal_skips_search() {
        let grid = OccupancyGrid::new(3, 3, GridNode::new(1, 1), GridNode::new(1, 1), &[]).unwrap();
        let mut recorder = Recorder::default();
        let path = search(&NoSlack, &grid, &mut recorder).unwrap().unwrap();
        assert_eq!(path.cells, vec![GridNode::new(1, 1)]);
        assert_eq!(path.cost, 0.0);
        assert!(recorder.visited.is_empty());
    }
}
