//! Search nodes and the per-call arena that owns them

use std::ops::Index;

use crate::common::GridNode;

/// Index of a node inside a [`NodeArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One grid cell as reached during search
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub x: i32,
    pub y: i32,
    /// Priority key the node was pushed with (path cost for the goal node)
    pub cost: f64,
    pub parent: Option<NodeId>,
}

impl SearchNode {
    pub fn new(x: i32, y: i32, cost: f64, parent: Option<NodeId>) -> Self {
        SearchNode { x, y, cost, parent }
    }

    pub fn cell(&self) -> GridNode {
        GridNode::new(self.x, self.y)
    }
}

/// Append-only node storage; dropping it releases every node at once
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Index<NodeId> for NodeArena {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}
