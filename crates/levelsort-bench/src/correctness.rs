//! Post-leveling invariant checkers for correctness validation.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use levelsort_core::{DependencyGraph, LevelError, LevelList};

/// Verifies the level partition invariants:
/// - every declared node appears in exactly one level
/// - every edge points from an earlier level to a later one
/// - every node outside level 0 has a prerequisite in the previous level
/// - nodes inside a level appear in ascending declaration order
pub fn check_level_invariants<N>(
    graph: &DependencyGraph<N>,
    levels: &LevelList<N>,
) -> Result<(), String>
where
    N: Eq + Hash + Clone + std::fmt::Debug,
{
    let level_of = placement(graph, levels)?;

    for (before, after) in graph.edges() {
        if level_of[before] >= level_of[after] {
            return Err(format!(
                "edge {before:?} -> {after:?} does not cross forward ({} -> {})",
                level_of[before], level_of[after]
            ));
        }
    }

    let anchored: HashSet<&N> = graph
        .edges()
        .filter(|(before, after)| level_of[before] + 1 == level_of[after])
        .map(|(_, after)| after)
        .collect();
    for (node, &level) in &level_of {
        if level > 0 && !anchored.contains(node) {
            return Err(format!(
                "{node:?} sits in level {level} without a prerequisite in level {}",
                level - 1
            ));
        }
    }

    for (i, group) in levels.iter().enumerate() {
        let ordinals: Vec<Option<usize>> = group.iter().map(|n| graph.ordinal(n)).collect();
        if ordinals.windows(2).any(|w| w[0] >= w[1]) {
            return Err(format!("level {i} is not in declaration order"));
        }
    }
    Ok(())
}

/// Verifies that each node landed in the level it was generated for.
pub fn check_expected_levels<N>(
    levels: &LevelList<N>,
    expected: &HashMap<N, usize>,
) -> Result<(), String>
where
    N: Eq + Hash + std::fmt::Debug,
{
    for (i, group) in levels.iter().enumerate() {
        for node in group {
            match expected.get(node) {
                Some(&want) if want == i => {}
                Some(&want) => {
                    return Err(format!("{node:?} placed in level {i}, expected {want}"));
                }
                None => return Err(format!("{node:?} has no expected level")),
            }
        }
    }
    Ok(())
}

/// Verifies that a cycle error is a consistent witness for `graph`:
/// - it is a `CycleFound` error
/// - the witness is declared and its dependents match the graph
/// - the unplaced count is between 1 and the node count
pub fn check_cycle_witness<N>(
    graph: &DependencyGraph<N>,
    error: &LevelError<N>,
) -> Result<(), String>
where
    N: Eq + Hash + Clone + std::fmt::Debug,
{
    let LevelError::CycleFound {
        node,
        dependents,
        unplaced,
    } = error
    else {
        return Err(format!("expected a cycle error, got {error:?}"));
    };

    let recorded: Vec<&N> = graph
        .dependents(node)
        .ok_or_else(|| format!("witness {node:?} is not declared"))?
        .collect();
    if recorded != dependents.iter().collect::<Vec<_>>() {
        return Err(format!(
            "witness dependents {dependents:?} differ from graph {recorded:?}"
        ));
    }
    if *unplaced == 0 || *unplaced > graph.len() {
        return Err(format!(
            "unplaced count {unplaced} outside 1..={}",
            graph.len()
        ));
    }
    Ok(())
}

fn placement<'a, N>(
    graph: &'a DependencyGraph<N>,
    levels: &LevelList<N>,
) -> Result<HashMap<&'a N, usize>, String>
where
    N: Eq + Hash + Clone + std::fmt::Debug,
{
    let mut level_of: HashMap<&'a N, usize> = HashMap::with_capacity(graph.len());
    for (i, group) in levels.iter().enumerate() {
        for node in group {
            let Some(ordinal) = graph.ordinal(node) else {
                return Err(format!("{node:?} is not declared in the graph"));
            };
            if level_of.insert(&graph.nodes()[ordinal], i).is_some() {
                return Err(format!("{node:?} appears in more than one level"));
            }
        }
    }
    if level_of.len() != graph.len() {
        return Err(format!(
            "placed {} of {} nodes",
            level_of.len(),
            graph.len()
        ));
    }
    Ok(level_of)
}
