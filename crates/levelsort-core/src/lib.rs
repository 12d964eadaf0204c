//! Dependency-level grouping (topological leveling) with cycle diagnostics.
//!
//! Given nodes and "must precede" edges, [`level`] partitions the nodes into
//! an ordered sequence of groups such that every node's predecessors lie in
//! strictly earlier groups, or fails with [`LevelError::CycleFound`] when no
//! such partition exists.
//!
//! ```
//! use levelsort_core::{DependencyGraph, MissingNodePolicy, level};
//!
//! let graph = DependencyGraph::from_adjacency(
//!     [("A", vec!["B", "C"]), ("B", vec!["D"]), ("C", vec!["D"]), ("D", vec![])],
//!     MissingNodePolicy::Reject,
//! )?;
//! let levels = level(&graph)?;
//! assert_eq!(levels.groups(), &[vec!["A"], vec!["B", "C"], vec!["D"]]);
//! # Ok::<(), levelsort_core::LevelError<&str>>(())
//! ```
#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod config;
pub mod counter;
pub mod cycles;
pub mod error;
pub mod graph;
pub mod grouping;
pub mod queue;
pub mod scheduler;

pub use config::{LevelConfig, MissingNodePolicy};
pub use counter::{DependencyCount, Remaining, dependency_counts};
pub use cycles::{find_cycles, is_acyclic};
pub use error::{LevelError, LevelResult};
pub use graph::DependencyGraph;
pub use grouping::group_by_dependencies;
pub use queue::{Pending, PendingQueue};
pub use scheduler::{LevelList, level, level_with, topological_order};

/// Returns the current version of the levelsort-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
