//! Leveling configuration.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// What to do with a node that is referenced as a dependent but never
/// declared as a key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingNodePolicy {
    /// Fail with [`crate::LevelError::UndeclaredNode`].
    #[default]
    Reject,
    /// Register the node with an empty dependent set.
    AutoRegister,
}

/// Options for [`crate::level_with`] and [`crate::DependencyGraph::from_adjacency`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Handling of undeclared dependents during graph construction.
    ///
    /// Default: [`MissingNodePolicy::Reject`].
    pub missing_nodes: MissingNodePolicy,

    /// Upper bound on the size of an emitted group.
    ///
    /// A level larger than this is emitted as consecutive groups of at most
    /// this many nodes. Nodes of one level never depend on each other, so the
    /// split output is still a valid leveling, only finer.
    ///
    /// Default: `None` (one group per level).
    pub max_group_size: Option<NonZeroUsize>,
}

impl LevelConfig {
    /// Returns a copy of this configuration with the given missing-node policy.
    pub fn with_missing_nodes(mut self, policy: MissingNodePolicy) -> Self {
        self.missing_nodes = policy;
        self
    }

    /// Returns a copy of this configuration with the given group size cap.
    pub fn with_max_group_size(mut self, cap: Option<NonZeroUsize>) -> Self {
        self.max_group_size = cap;
        self
    }
}
