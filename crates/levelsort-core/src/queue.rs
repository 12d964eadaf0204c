//! Min-priority queue of pending nodes with lazy deletion.
//!
//! `BinaryHeap` has no decrease-key, so a node whose count drops is pushed
//! again with a fresh snapshot. Older entries for the same node stay in the
//! heap; the scheduler discards them once the node has been placed. This costs
//! one extra push per edge.
//!
//! Entries order by `(snapshot, ordinal)`. The ordinal is the node's
//! declaration position, which makes extraction order among equal snapshots
//! deterministic.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A queued `(node, count)` snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pending {
    /// The node's remaining count when the entry was pushed.
    pub snapshot: usize,
    /// The node's declaration ordinal.
    pub ordinal: usize,
}

/// Min-heap over [`Pending`] entries.
#[derive(Debug, Clone, Default)]
pub struct PendingQueue {
    heap: BinaryHeap<Reverse<Pending>>,
    pushes: usize,
}

impl PendingQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            pushes: 0,
        }
    }

    /// Queues a snapshot of `ordinal` with the given count.
    pub fn push(&mut self, ordinal: usize, snapshot: usize) {
        self.heap.push(Reverse(Pending { snapshot, ordinal }));
        self.pushes += 1;
    }

    /// Returns the entry with the smallest snapshot (lowest ordinal on ties).
    pub fn peek(&self) -> Option<Pending> {
        self.heap.peek().map(|Reverse(entry)| *entry)
    }

    /// Removes and returns the entry with the smallest snapshot.
    pub fn pop(&mut self) -> Option<Pending> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    /// Returns the number of queued entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if no entries are queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the total number of pushes since construction.
    pub fn pushes(&self) -> usize {
        self.pushes
    }
}
