//! Distance-to-goal estimates for A*
//!
//! Both estimates are admissible and consistent on the 8-connected motion
//! table and are exact for cells adjacent to the goal.

use serde::{Deserialize, Serialize};

use crate::common::GridNode;

/// Heuristic used by A* to estimate the remaining cost to the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    /// Exact obstacle-free cost with unit straight and sqrt(2) diagonal moves
    #[default]
    Octile,
    /// Straight-line distance; weaker than octile, expands more cells
    Euclidean,
}

impl Heuristic {
    pub fn estimate(&self, from: GridNode, to: GridNode) -> f64 {
        let dx = (from.x - to.x).abs() as f64;
        let dy = (from.y - to.y).abs() as f64;
        match self {
            Heuristic::Octile => {
                let d_min = dx.min(dy);
                let d_max = dx.max(dy);
                d_min * std::f64::consts::SQRT_2 + (d_max - d_min)
            }
            Heuristic::Euclidean => dx.hypot(dy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_planning::motion::MOTIONS;

    #[test]
    fn test_octile_matches_free_space_cost() {
        let h = Heuristic::Octile.estimate(GridNode::new(0, 0), GridNode::new(4, 1));
        assert!((h - (std::f64::consts::SQRT_2 + 3.0)).abs() < 1e-10);
    }

    #[test]
    fn test_heuristics_exact_next_to_goal() {
        let goal = GridNode::new(5, 5);
        for motion in MOTIONS.iter() {
            let cell = goal.offset(motion.dx, motion.dy);
            for heuristic in [Heuristic::Octile, Heuristic::Euclidean] {
                assert!((heuristic.estimate(cell, goal) - motion.cost).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_heuristics_consistent() {
        let goal = GridNode::new(3, 7);
        for heuristic in [Heuristic::Octile, Heuristic::Euclidean] {
            for x in -2..10 {
                for y in -2..10 {
                    let cell = GridNode::new(x, y);
                    let h = heuristic.estimate(cell, goal);
                    for motion in MOTIONS.iter() {
                        let next = cell.offset(motion.dx, motion.dy);
                        assert!(h <= motion.cost + heuristic.estimate(next, goal) + 1e-9);
                    }
                }
            }
        }
    }
}
