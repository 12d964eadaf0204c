//! Dependency grouping of caller-owned items.
//!
//! Batch registration needs records in an order where every record's
//! prerequisites (a container, a parent, a referenced record) are registered
//! in an earlier batch. [`group_by_dependencies`] builds the dependency graph
//! from the items themselves, levels it, and hands the items back grouped.

use std::hash::Hash;

use crate::config::MissingNodePolicy;
use crate::error::{LevelError, LevelResult};
use crate::graph::DependencyGraph;
use crate::scheduler::level_ordinals;

/// Groups `items` so every item's prerequisites sit in an earlier group.
///
/// `key_of` identifies an item; `prerequisites_of` names the keys that must
/// be registered before it. Items keep their input order inside a group.
///
/// A prerequisite that is not the key of any item is handled per `policy`:
/// [`MissingNodePolicy::AutoRegister`] treats it as already satisfied (it
/// imposes no order among the given items), while
/// [`MissingNodePolicy::Reject`] fails.
///
/// # Errors
///
/// - [`LevelError::DuplicateNode`] if two items share a key.
/// - [`LevelError::UndeclaredNode`] for an unknown prerequisite under
///   [`MissingNodePolicy::Reject`].
/// - [`LevelError::CycleFound`] if the items depend on each other cyclically.
pub fn group_by_dependencies<T, K, FK, FP, P>(
    items: Vec<T>,
    mut key_of: FK,
    mut prerequisites_of: FP,
    policy: MissingNodePolicy,
) -> LevelResult<Vec<Vec<T>>, K>
where
    K: Eq + Hash + Clone,
    FK: FnMut(&T) -> K,
    FP: FnMut(&T) -> P,
    P: IntoIterator<Item = K>,
{
    let mut graph = DependencyGraph::with_capacity(items.len());
    let mut keys: Vec<K> = Vec::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        let key = key_of(item);
        if graph.add_node(key.clone()) != position {
            return Err(LevelError::DuplicateNode { node: key });
        }
        keys.push(key);
    }

    for (item, key) in items.iter().zip(&keys) {
        for prerequisite in prerequisites_of(item) {
            if graph.contains(&prerequisite) {
                graph.add_edge(prerequisite, key.clone());
                continue;
            }
            match policy {
                MissingNodePolicy::AutoRegister => {}
                MissingNodePolicy::Reject => {
                    return Err(LevelError::UndeclaredNode {
                        node: prerequisite,
                        referenced_by: key.clone(),
                    });
                }
            }
        }
    }

    let ordinals = level_ordinals(&graph)?;
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    Ok(ordinals
        .into_iter()
        .map(|group| {
            group
                .into_iter()
                .filter_map(|ordinal| slots.get_mut(ordinal).and_then(Option::take))
                .collect()
        })
        .collect())
}
