//! Minimum-priority frontier for the goal-directed search.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::types::Position;

/// Heap entry. Field order matters: entries compare by priority first and by insertion sequence
/// second, so equal priorities come out first-in first-out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    /// Estimated total cost through this position.
    priority: usize,
    /// Insertion counter.
    sequence: u64,
    /// Queued position.
    position: Position,
}

/// Positions ordered by ascending priority, ties broken by insertion order.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    /// Min-heap of queued entries.
    heap: BinaryHeap<Reverse<Entry>>,
    /// Sequence number handed to the next pushed entry.
    next_sequence: u64,
}

impl Frontier {
    /// Creates an empty frontier.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queues `position` with the given priority.
    pub(crate) fn push(&mut self, position: Position, priority: usize) {
        self.heap.push(Reverse(Entry {
            priority,
            sequence: self.next_sequence,
            position,
        }));
        self.next_sequence += 1;
    }

    /// Removes the position with the lowest priority, the oldest one among equals.
    pub(crate) fn pop(&mut self) -> Option<Position> {
        self.heap.pop().map(|Reverse(entry)| entry.position)
    }

    /// Number of queued entries.
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
