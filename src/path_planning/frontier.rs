//! Min-priority frontier with lazy deletion
//!
//! Duplicate entries for a cell are allowed; the search discards entries
//! whose cell is already finalized when they are popped.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ordered_float::NotNan;

use crate::common::{PlanningError, PlanningResult};
use crate::path_planning::node::NodeId;

#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry {
    priority: NotNan<f64>,
    seq: u64,
    node: NodeId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior, FIFO among equal priorities
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Open set ordered by ascending priority
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: NodeId, priority: f64) -> PlanningResult<()> {
        let priority = NotNan::new(priority).map_err(|_| {
            PlanningError::InvalidParameter("frontier priority is NaN".to_string())
        })?;
        self.heap.push(FrontierEntry { priority, seq: self.next_seq, node });
        self.next_seq += 1;
        Ok(())
    }

    /// Remove the lowest-priority entry, returning `(priority, node)`
    pub fn pop(&mut self) -> Option<(f64, NodeId)> {
        self.heap.pop().map(|entry| (entry.priority.into_inner(), entry.node))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
