/// Full cycle enumeration for dependency graphs.
///
/// The scheduler reports a single witness when it gets stuck. Callers that
/// need every offending node use [`find_cycles`], which mirrors the graph
/// into a `petgraph` [`DiGraph`] and runs Tarjan's strongly connected
/// components algorithm over it.
///
/// A component is cyclic when it has more than one member, or when its only
/// member has a self-loop.
use petgraph::algo::{is_cyclic_directed, tarjan_scc};
use petgraph::graph::{DiGraph, NodeIndex};

use crate::graph::DependencyGraph;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Returns every cyclic strongly connected component of `graph`.
///
/// Members of each component are listed in declaration order, and components
/// are ordered by their first member. An acyclic graph yields an empty `Vec`.
pub fn find_cycles<N: Clone>(graph: &DependencyGraph<N>) -> Vec<Vec<N>> {
    let mirror = mirror(graph);

    let mut components: Vec<Vec<usize>> = tarjan_scc(&mirror)
        .into_iter()
        .filter(|component| match component.as_slice() {
            [only] => mirror.contains_edge(*only, *only),
            members => members.len() > 1,
        })
        .map(|component| {
            let mut ordinals: Vec<usize> = component.into_iter().map(NodeIndex::index).collect();
            ordinals.sort_unstable();
            ordinals
        })
        .collect();
    components.sort_unstable_by_key(|ordinals| ordinals.first().copied());

    components
        .into_iter()
        .map(|ordinals| {
            ordinals
                .into_iter()
                .map(|ordinal| graph.node_at(ordinal).clone())
                .collect()
        })
        .collect()
}

/// Returns `true` if `graph` has no cycles (self-loops included).
pub fn is_acyclic<N>(graph: &DependencyGraph<N>) -> bool {
    !is_cyclic_directed(&mirror(graph))
}

// ---------------------------------------------------------------------------
// Internal: petgraph mirror
// ---------------------------------------------------------------------------

/// Copies the topology of `graph` into a `DiGraph` whose node indices equal
/// declaration ordinals. Node values are not copied.
fn mirror<N>(graph: &DependencyGraph<N>) -> DiGraph<(), ()> {
    let node_count = graph.nodes().len();
    let mut mirror = DiGraph::with_capacity(node_count, node_count);
    for _ in 0..node_count {
        mirror.add_node(());
    }
    for from in 0..node_count {
        for &to in graph.dependents_at(from) {
            mirror.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
        }
    }
    mirror
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(pairs: &[(&'static str, &'static str)]) -> DependencyGraph<&'static str> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn dag_has_no_cycles() {
        let g = edges(&[("a", "b"), ("b", "c"), ("a", "c")]);
        assert!(find_cycles(&g).is_empty());
        assert!(is_acyclic(&g));
    }

    #[test]
    fn empty_graph_is_acyclic() {
        let g: DependencyGraph<&str> = DependencyGraph::new();
        assert!(find_cycles(&g).is_empty());
        assert!(is_acyclic(&g));
    }

    #[test]
    fn self_loop_is_reported_alone() {
        let g = edges(&[("a", "b"), ("b", "b")]);
        assert_eq!(find_cycles(&g), vec![vec!["b"]]);
        assert!(!is_acyclic(&g));
    }

    #[test]
    fn triangle_is_one_component_in_declaration_order() {
        let g = edges(&[("x", "y"), ("y", "z"), ("z", "x"), ("z", "tail")]);
        assert_eq!(find_cycles(&g), vec![vec!["x", "y", "z"]]);
    }

    #[test]
    fn independent_cycles_are_separate() {
        let g = edges(&[
            ("p", "q"),
            ("q", "p"),
            ("bridge", "r"),
            ("r", "s"),
            ("s", "r"),
        ]);
        assert_eq!(find_cycles(&g), vec![vec!["p", "q"], vec!["r", "s"]]);
    }

    #[test]
    fn nodes_downstream_of_cycle_are_not_members() {
        let g = edges(&[("a", "b"), ("b", "a"), ("b", "c"), ("c", "d")]);
        let cycles = find_cycles(&g);
        assert_eq!(cycles, vec![vec!["a", "b"]]);
    }
}
