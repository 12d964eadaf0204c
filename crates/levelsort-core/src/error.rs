//! Error type shared by graph construction, leveling, and item grouping.
//!
//! Every failure carries the offending node(s) so callers can report a
//! concrete starting point. Node values are rendered with `Debug` in the
//! `Display` output.

use thiserror::Error;

/// Result alias for operations that can fail with a [`LevelError`].
pub type LevelResult<T, N> = Result<T, LevelError<N>>;

/// Errors produced while building a dependency graph or leveling it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError<N> {
    /// No remaining node reached a zero dependency count: the graph is not a
    /// DAG.
    ///
    /// `node` is the head of the pending queue at the time of failure and
    /// `dependents` its direct dependents in declaration order. This is a
    /// single witness, not the full cycle; use [`crate::find_cycles`] for
    /// complete components.
    #[error(
        "dependency cycle detected at {node:?} ({unplaced} node(s) left unplaced); \
         direct dependents: {dependents:?}"
    )]
    CycleFound {
        /// The implicated node.
        node: N,
        /// Direct dependents of `node` as recorded in the graph.
        dependents: Vec<N>,
        /// Number of nodes that had not been placed in any level.
        unplaced: usize,
    },

    /// A node appears as a dependent (or prerequisite) but is never declared.
    #[error("node {node:?} is referenced by {referenced_by:?} but never declared")]
    UndeclaredNode {
        /// The undeclared node.
        node: N,
        /// The declared node whose entry references it.
        referenced_by: N,
    },

    /// The same key was supplied for two distinct items.
    #[error("node {node:?} is declared more than once")]
    DuplicateNode {
        /// The duplicated key.
        node: N,
    },
}

impl<N> LevelError<N> {
    /// Returns `true` if this error signals a dependency cycle.
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::CycleFound { .. })
    }

    /// Returns the node implicated in a cycle, if this is a cycle error.
    pub fn witness(&self) -> Option<&N> {
        match self {
            Self::CycleFound { node, .. } => Some(node),
            Self::UndeclaredNode { .. } | Self::DuplicateNode { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_display_names_witness_and_dependents() {
        let err = LevelError::CycleFound {
            node: "build",
            dependents: vec!["test", "package"],
            unplaced: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("\"build\""), "message: {msg}");
        assert!(msg.contains("\"test\""), "message: {msg}");
        assert!(msg.contains("3 node(s)"), "message: {msg}");
        assert!(err.is_cycle());
        assert_eq!(err.witness(), Some(&"build"));
    }

    #[test]
    fn undeclared_display_names_both_nodes() {
        let err = LevelError::UndeclaredNode {
            node: "ghost",
            referenced_by: "a",
        };
        let msg = err.to_string();
        assert!(msg.contains("\"ghost\""), "message: {msg}");
        assert!(msg.contains("\"a\""), "message: {msg}");
        assert!(!err.is_cycle());
        assert_eq!(err.witness(), None);
    }

    #[test]
    fn error_trait_is_implemented() {
        let e: Box<dyn std::error::Error> = Box::new(LevelError::DuplicateNode { node: 7_u32 });
        assert_eq!(e.to_string(), "node 7 is declared more than once");
    }
}
