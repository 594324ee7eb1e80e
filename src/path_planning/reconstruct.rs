//! Predecessor walk from the terminal node back to the start

use crate::common::GridNode;
use crate::path_planning::node::{NodeArena, NodeId};

/// Cells from the start to `terminal`, or empty when no terminal exists
pub fn reconstruct_path(arena: &NodeArena, terminal: Option<NodeId>) -> Vec<GridNode> {
    let mut cells = Vec::new();
    let mut current = terminal;

    while let Some(id) = current {
        let node = &arena[id];
        cells.push(node.cell());
        current = node.parent;
    }

    cells.reverse();
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_planning::node::SearchNode;

    #[test]
    fn test_reconstruct_start_to_goal() {
        let mut arena = NodeArena::new();
        let start = arena.alloc(SearchNode::new(0, 0, 0.0, None));
        let mid = arena.alloc(SearchNode::new(1, 1, 1.4, Some(start)));
        // sibling sharing the same predecessor, not on the path
        arena.alloc(SearchNode::new(1, 0, 1.0, Some(start)));
        let goal = arena.alloc(SearchNode::new(2, 1, 2.4, Some(mid)));

        let cells = reconstruct_path(&arena, Some(goal));
        assert_eq!(
            cells,
            vec![GridNode::new(0, 0), GridNode::new(1, 1), GridNode::new(2, 1)]
        );
    }

    #[test]
    fn test_reconstruct_without_terminal() {
        let arena = NodeArena::new();
        assert!(reconstruct_path(&arena, None).is_empty());
    }
}
