//! Parsing of JSON dependency documents into a [`DependencyGraph`].
//!
//! A document is a JSON object whose keys are node names and whose values
//! are arrays of the names of the nodes that depend on them:
//!
//! ```json
//! { "compile": ["test", "package"], "test": ["package"], "package": [] }
//! ```
//!
//! Key order in the document is the declaration order, which is also the
//! order of nodes inside each emitted level.
use levelsort_core::{DependencyGraph, MissingNodePolicy};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::CliError;

/// Parses `content` and builds the dependency graph it describes.
///
/// # Errors
///
/// - [`CliError::ParseError`] if `content` is not a JSON object of string
///   arrays.
/// - [`CliError::GraphBuildError`] if a dependent is never declared and
///   `policy` is [`MissingNodePolicy::Reject`].
pub fn parse_graph(
    content: &str,
    policy: MissingNodePolicy,
) -> Result<DependencyGraph<String>, CliError> {
    let document: Map<String, Value> =
        serde_json::from_str(content).map_err(|e| CliError::ParseError {
            detail: e.to_string(),
        })?;

    let mut entries: Vec<(String, Vec<String>)> = Vec::with_capacity(document.len());
    for (key, value) in document {
        let dependents: Vec<String> =
            serde_json::from_value(value).map_err(|e| CliError::ParseError {
                detail: format!("dependents of {key:?}: {e}"),
            })?;
        entries.push((key, dependents));
    }
    debug!(keys = entries.len(), "dependency document parsed");

    DependencyGraph::from_adjacency(entries, policy).map_err(|e| CliError::GraphBuildError {
        detail: e.to_string(),
    })
}
