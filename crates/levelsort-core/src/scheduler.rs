//! Level scheduling: partitions a [`DependencyGraph`] into ordered groups.
//!
//! # Algorithm
//!
//! 1. Seed a [`PendingQueue`] with one `(count, node)` entry per node.
//! 2. While the queue is non-empty:
//!    - drop entries for nodes already placed (stale re-insertions);
//!    - if the head's current count is still positive, no node is ready and
//!      the graph contains a cycle;
//!    - otherwise pop every ready node into the current group, mark it
//!      placed, and emit the group;
//!    - for every dependent of the group, decrement its count and queue a
//!      fresh snapshot.
//!
//! Within a group nodes appear in declaration order. Since every unplaced
//! node always has an entry whose snapshot equals its current count, the
//! head of the queue is ready exactly when some node is ready.
//!
//! On a cycle the whole computation fails: no partial [`LevelList`] is
//! returned.

use std::cmp::Ordering;
use std::hash::Hash;
use std::num::NonZeroUsize;

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::LevelConfig;
use crate::counter::{DependencyCount, Remaining, dependency_counts};
use crate::error::{LevelError, LevelResult};
use crate::graph::DependencyGraph;
use crate::queue::PendingQueue;

// ---------------------------------------------------------------------------
// LevelList
// ---------------------------------------------------------------------------

/// The ordered groups produced by [`level`].
///
/// Every node's predecessors lie in strictly earlier groups; concatenating
/// the groups yields a valid topological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LevelList<N> {
    groups: Vec<Vec<N>>,
}

impl<N> Default for LevelList<N> {
    fn default() -> Self {
        Self { groups: Vec::new() }
    }
}

impl<N> LevelList<N> {
    /// Returns the number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the groups in order.
    pub fn groups(&self) -> &[Vec<N>] {
        &self.groups
    }

    /// Iterates over the groups in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Vec<N>> {
        self.groups.iter()
    }

    /// Returns the total number of nodes across all groups.
    pub fn node_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Returns the index of the group containing `node`.
    pub fn level_of(&self, node: &N) -> Option<usize>
    where
        N: PartialEq,
    {
        self.groups.iter().position(|group| group.contains(node))
    }

    /// Reorders the nodes inside each group with `compare`.
    ///
    /// Group membership and group order are unchanged.
    pub fn sort_groups_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&N, &N) -> Ordering,
    {
        for group in &mut self.groups {
            group.sort_by(&mut compare);
        }
    }

    /// Concatenates the groups into a single topological order.
    pub fn flatten(self) -> Vec<N> {
        self.groups.into_iter().flatten().collect()
    }

    /// Consumes the list and returns the raw groups.
    pub fn into_groups(self) -> Vec<Vec<N>> {
        self.groups
    }
}

impl<N> IntoIterator for LevelList<N> {
    type Item = Vec<N>;
    type IntoIter = std::vec::IntoIter<Vec<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, N> IntoIterator for &'a LevelList<N> {
    type Item = &'a Vec<N>;
    type IntoIter = std::slice::Iter<'a, Vec<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Partitions `graph` into dependency levels with the default configuration.
///
/// # Errors
///
/// Returns [`LevelError::CycleFound`] if the graph is not acyclic.
pub fn level<N>(graph: &DependencyGraph<N>) -> LevelResult<LevelList<N>, N>
where
    N: Eq + Hash + Clone,
{
    level_with(graph, &LevelConfig::default())
}

/// Partitions `graph` into dependency levels.
///
/// Only [`LevelConfig::max_group_size`] affects scheduling; the missing-node
/// policy applies when the graph is built.
///
/// # Errors
///
/// Returns [`LevelError::CycleFound`] if the graph is not acyclic.
pub fn level_with<N>(
    graph: &DependencyGraph<N>,
    config: &LevelConfig,
) -> LevelResult<LevelList<N>, N>
where
    N: Eq + Hash + Clone,
{
    let groups = level_ordinals(graph)?;
    let groups = split_groups(groups, config.max_group_size);
    Ok(LevelList {
        groups: groups
            .into_iter()
            .map(|group| {
                group
                    .into_iter()
                    .map(|ordinal| graph.node_at(ordinal).clone())
                    .collect()
            })
            .collect(),
    })
}

/// Returns a topological order of `graph`: the concatenation of its levels.
///
/// # Errors
///
/// Returns [`LevelError::CycleFound`] if the graph is not acyclic.
pub fn topological_order<N>(graph: &DependencyGraph<N>) -> LevelResult<Vec<N>, N>
where
    N: Eq + Hash + Clone,
{
    level(graph).map(LevelList::flatten)
}

// ---------------------------------------------------------------------------
// Core loop
// ---------------------------------------------------------------------------

/// Runs the scheduler over declaration ordinals.
pub(crate) fn level_ordinals<N>(graph: &DependencyGraph<N>) -> LevelResult<Vec<Vec<usize>>, N>
where
    N: Clone,
{
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let node_count = graph.nodes().len();
    if node_count == 0 {
        return Ok(groups);
    }

    let mut counts = dependency_counts(graph);
    let mut queue = PendingQueue::with_capacity(node_count);
    for ordinal in 0..node_count {
        if let Remaining::Pending(count) = counts.at(ordinal) {
            queue.push(ordinal, count);
        }
    }

    while let Some(head) = queue.peek() {
        match counts.at(head.ordinal) {
            Remaining::Placed(_) => {
                queue.pop();
                continue;
            }
            Remaining::Pending(0) => {}
            Remaining::Pending(_) => return Err(cycle_error(graph, &counts, head.ordinal)),
        }

        let level = groups.len();
        let mut group: Vec<usize> = Vec::new();
        while let Some(next) = queue.peek() {
            match counts.at(next.ordinal) {
                Remaining::Placed(_) => {}
                Remaining::Pending(0) => {
                    counts.place(next.ordinal, level);
                    group.push(next.ordinal);
                }
                Remaining::Pending(_) => break,
            }
            queue.pop();
        }
        debug!(
            level,
            size = group.len(),
            unplaced = counts.unplaced(),
            "level complete"
        );

        if !queue.is_empty() {
            for &placed in &group {
                for &dependent in graph.dependents_at(placed) {
                    if let Some(count) = counts.release(dependent) {
                        queue.push(dependent, count);
                    }
                }
            }
        }
        groups.push(group);
    }

    trace!(
        levels = groups.len(),
        pushes = queue.pushes(),
        "pending queue drained"
    );
    Ok(groups)
}

/// Builds the single-witness cycle diagnostic for the node at `ordinal`.
fn cycle_error<N: Clone>(
    graph: &DependencyGraph<N>,
    counts: &DependencyCount<'_, N>,
    ordinal: usize,
) -> LevelError<N> {
    debug!(
        witness = ordinal,
        unplaced = counts.unplaced(),
        "no ready node left, dependency cycle detected"
    );
    LevelError::CycleFound {
        node: graph.node_at(ordinal).clone(),
        dependents: graph
            .dependents_at(ordinal)
            .iter()
            .map(|&d| graph.node_at(d).clone())
            .collect(),
        unplaced: counts.unplaced(),
    }
}

/// Splits each group into chunks of at most `cap` nodes.
pub(crate) fn split_groups(groups: Vec<Vec<usize>>, cap: Option<NonZeroUsize>) -> Vec<Vec<usize>> {
    let Some(cap) = cap else {
        return groups;
    };
    groups
        .into_iter()
        .flat_map(|group| {
            group
                .chunks(cap.get())
                .map(<[usize]>::to_vec)
                .collect::<Vec<_>>()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
