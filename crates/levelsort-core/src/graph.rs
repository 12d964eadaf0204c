//! The dependency graph model.
//!
//! A [`DependencyGraph`] maps every node to the set of nodes that directly
//! depend on it: an edge `a ⇒ b` means `a` must be placed in a strictly
//! earlier level than `b`.
//!
//! # Representation
//!
//! Nodes are stored once, in **declaration order** (the order in which they
//! were first seen, as a key or as a dependent), and addressed internally by
//! their ordinal in that order. Dependents are kept as ordinal lists, also in
//! insertion order, with duplicate edges collapsed. The ordinal doubles as the
//! deterministic tie-break used by the scheduler.
//!
//! # Two-Pass Construction
//!
//! [`DependencyGraph::from_adjacency`] runs two passes over its input:
//! 1. **Key pass** declares every key, so forward references resolve.
//! 2. **Dependent pass** resolves each dependent. A dependent that was never a
//!    key is rejected or auto-registered according to [`MissingNodePolicy`];
//!    it is never silently dropped.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use tracing::debug;

use crate::config::MissingNodePolicy;
use crate::error::{LevelError, LevelResult};

/// A directed graph of "must precede" edges over caller-supplied nodes.
///
/// The node type only needs identity: `Eq + Hash`, plus `Clone` because
/// each node is held both in the declaration list and in the lookup index.
#[derive(Debug, Clone)]
pub struct DependencyGraph<N> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    dependents: Vec<Vec<usize>>,
    edges: HashSet<(usize, usize)>,
}

impl<N> Default for DependencyGraph<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            dependents: Vec::new(),
            edges: HashSet::new(),
        }
    }
}

impl<N: Eq + Hash + Clone> DependencyGraph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
            dependents: Vec::with_capacity(nodes),
            edges: HashSet::new(),
        }
    }

    /// Builds a graph from `(key, dependents)` entries.
    ///
    /// Keys are declared in input order before any dependent is resolved, so
    /// an entry may name a dependent whose own entry comes later. A key that
    /// appears twice has its dependent sets merged.
    ///
    /// # Errors
    ///
    /// With [`MissingNodePolicy::Reject`], returns
    /// [`LevelError::UndeclaredNode`] for the first dependent that is never a
    /// key. With [`MissingNodePolicy::AutoRegister`] such nodes are added
    /// (after all keys, in encounter order) with no dependents of their own.
    pub fn from_adjacency<I, D>(entries: I, policy: MissingNodePolicy) -> LevelResult<Self, N>
    where
        I: IntoIterator<Item = (N, D)>,
        D: IntoIterator<Item = N>,
    {
        let entries: Vec<(N, D)> = entries.into_iter().collect();
        let mut graph = Self::with_capacity(entries.len());

        for (key, _) in &entries {
            graph.add_node(key.clone());
        }
        let declared = graph.len();

        for (key, dependents) in entries {
            let from = graph.add_node(key.clone());
            for dependent in dependents {
                let to = match graph.ordinal(&dependent) {
                    Some(to) => to,
                    None => match policy {
                        MissingNodePolicy::Reject => {
                            return Err(LevelError::UndeclaredNode {
                                node: dependent,
                                referenced_by: key,
                            });
                        }
                        MissingNodePolicy::AutoRegister => graph.add_node(dependent),
                    },
                };
                graph.link(from, to);
            }
        }

        debug!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            auto_registered = graph.len() - declared,
            "dependency graph built"
        );
        Ok(graph)
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Declares `node` and returns its ordinal. Declaring an existing node is
    /// a no-op that returns the existing ordinal.
    pub fn add_node(&mut self, node: N) -> usize {
        if let Some(&ordinal) = self.index.get(&node) {
            return ordinal;
        }
        let ordinal = self.nodes.len();
        self.index.insert(node.clone(), ordinal);
        self.nodes.push(node);
        self.dependents.push(Vec::new());
        ordinal
    }

    /// Records that `before` must be placed strictly before `after`,
    /// declaring either endpoint if needed.
    ///
    /// Returns `false` if the edge was already present.
    pub fn add_edge(&mut self, before: N, after: N) -> bool {
        let from = self.add_node(before);
        let to = self.add_node(after);
        self.link(from, to)
    }

    /// Returns `true` if `node` has been declared.
    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Returns the declaration ordinal of `node`.
    pub fn ordinal(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    /// Returns `true` if the edge `before ⇒ after` is present.
    pub fn has_edge(&self, before: &N, after: &N) -> bool {
        self.ordinal(before)
            .zip(self.ordinal(after))
            .is_some_and(|edge| self.edges.contains(&edge))
    }

    /// Returns the direct dependents of `node` in insertion order, or `None`
    /// if `node` is not declared.
    pub fn dependents<'a>(
        &'a self,
        node: &N,
    ) -> Option<impl Iterator<Item = &'a N> + use<'a, N>> {
        let ordinal = self.ordinal(node)?;
        Some(self.dependents_at(ordinal).iter().map(|&d| &self.nodes[d]))
    }

    /// Iterates over every edge as `(before, after)`, grouped by `before` in
    /// declaration order.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.dependents.iter().enumerate().flat_map(move |(from, tos)| {
            tos.iter().map(move |&to| (&self.nodes[from], &self.nodes[to]))
        })
    }

    fn link(&mut self, from: usize, to: usize) -> bool {
        if !self.edges.insert((from, to)) {
            return false;
        }
        self.dependents[from].push(to);
        true
    }
}

impl<N> DependencyGraph<N> {
    /// Returns all nodes in declaration order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub(crate) fn node_at(&self, ordinal: usize) -> &N {
        &self.nodes[ordinal]
    }

    pub(crate) fn dependents_at(&self, ordinal: usize) -> &[usize] {
        &self.dependents[ordinal]
    }
}

impl<N: Eq + Hash + Clone> FromIterator<(N, N)> for DependencyGraph<N> {
    fn from_iter<T: IntoIterator<Item = (N, N)>>(iter: T) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<N: Eq + Hash + Clone> Extend<(N, N)> for DependencyGraph<N> {
    fn extend<T: IntoIterator<Item = (N, N)>>(&mut self, iter: T) {
        for (before, after) in iter {
            self.add_edge(before, after);
        }
    }
}
