//! Remaining-dependency bookkeeping.
//!
//! [`dependency_counts`] derives, for every node, how many of its direct
//! predecessors have not yet been placed. The scheduler then mutates the
//! table as levels complete. A node that has been placed moves to
//! [`Remaining::Placed`], which keeps it distinct from an unplaced node whose
//! count happens to be zero.

use std::hash::Hash;

use crate::graph::DependencyGraph;

/// Per-node scheduling state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remaining {
    /// Not yet placed; holds the number of unplaced direct predecessors.
    Pending(usize),
    /// Placed in the level with this index.
    Placed(usize),
}

/// Remaining dependency counts for every node of a [`DependencyGraph`].
///
/// Borrows the graph read-only; building or updating counts never touches
/// the graph itself.
#[derive(Debug, Clone)]
pub struct DependencyCount<'g, N> {
    graph: &'g DependencyGraph<N>,
    slots: Vec<Remaining>,
    unplaced: usize,
}

/// Builds the initial dependency counts for `graph`.
///
/// Every node starts at zero, then each distinct edge `a ⇒ b` adds one to
/// `b`. Nodes with neither predecessors nor dependents therefore still get a
/// defined count of zero.
pub fn dependency_counts<N>(graph: &DependencyGraph<N>) -> DependencyCount<'_, N> {
    let mut slots = vec![Remaining::Pending(0); graph.nodes().len()];
    for from in 0..slots.len() {
        for &to in graph.dependents_at(from) {
            if let Remaining::Pending(count) = &mut slots[to] {
                *count += 1;
            }
        }
    }
    DependencyCount {
        graph,
        unplaced: slots.len(),
        slots,
    }
}

impl<N: Eq + Hash + Clone> DependencyCount<'_, N> {
    /// Returns the state of `node`, or `None` if it is not in the graph.
    pub fn state(&self, node: &N) -> Option<Remaining> {
        self.graph.ordinal(node).map(|ordinal| self.slots[ordinal])
    }

    /// Returns the number of unplaced direct predecessors of `node`.
    ///
    /// `None` if the node is unknown or already placed.
    pub fn get(&self, node: &N) -> Option<usize> {
        match self.state(node)? {
            Remaining::Pending(count) => Some(count),
            Remaining::Placed(_) => None,
        }
    }

    /// Returns `true` if `node` has been placed in a level.
    pub fn is_placed(&self, node: &N) -> bool {
        matches!(self.state(node), Some(Remaining::Placed(_)))
    }
}

impl<N> DependencyCount<'_, N> {
    /// Iterates, in declaration order, over the unplaced nodes whose count is
    /// zero.
    pub fn ready(&self) -> impl Iterator<Item = &N> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|&(_, slot)| *slot == Remaining::Pending(0))
            .map(|(ordinal, _)| self.graph.node_at(ordinal))
    }

    /// Returns the number of nodes not yet placed.
    pub fn unplaced(&self) -> usize {
        self.unplaced
    }

    pub(crate) fn at(&self, ordinal: usize) -> Remaining {
        self.slots[ordinal]
    }

    pub(crate) fn place(&mut self, ordinal: usize, level: usize) {
        if let Remaining::Pending(_) = self.slots[ordinal] {
            self.unplaced -= 1;
        }
        self.slots[ordinal] = Remaining::Placed(level);
    }

    /// Accounts for one placed predecessor of `ordinal` and returns the new
    /// count, or `None` if the node is already placed.
    pub(crate) fn release(&mut self, ordinal: usize) -> Option<usize> {
        match &mut self.slots[ordinal] {
            Remaining::Pending(count) => {
                *count = count.saturating_sub(1);
                Some(*count)
            }
            Remaining::Placed(_) => None,
        }
    }
}
