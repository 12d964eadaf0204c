//! Implementation of `levelsort check <file>`.
//!
//! Levels the graph without printing the levels. On success prints a one-line
//! summary; on a cycle prints the scheduler's witness (the node it was stuck
//! on and that node's direct dependents) and exits 1.
//!
//! Output (JSON mode): `{"acyclic": true, "level_count": N, "node_count": M}`
//! or `{"acyclic": false, "witness": "...", "dependents": [...], "unplaced": K}`.
use std::io::Write;

use levelsort_core::{LevelConfig, LevelError, level_with};

use crate::OutputFormat;
use crate::cmd::{join_nodes, with_stdout};
use crate::document::parse_graph;
use crate::error::CliError;

/// Runs the `check` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if `content` is not a valid dependency document.
/// - [`CliError`] exit code 1 if the graph contains a cycle.
pub fn run(content: &str, config: &LevelConfig, format: OutputFormat) -> Result<(), CliError> {
    let graph = parse_graph(content, config.missing_nodes)?;
    let outcome = level_with(&graph, config);

    with_stdout(|out| match (&outcome, format) {
        (Ok(levels), OutputFormat::Human) => writeln!(
            out,
            "acyclic: {} node(s) in {} level(s)",
            levels.node_count(),
            levels.len()
        ),
        (Ok(levels), OutputFormat::Json) => {
            let value = serde_json::json!({
                "acyclic": true,
                "level_count": levels.len(),
                "node_count": levels.node_count(),
            });
            writeln!(out, "{value}")
        }
        (Err(err), OutputFormat::Human) => print_witness_human(out, err),
        (Err(err), OutputFormat::Json) => print_witness_json(out, err),
    })?;

    outcome.map(|_| ()).map_err(|e| CliError::CycleFound {
        detail: e.to_string(),
    })
}

fn print_witness_human(out: &mut dyn Write, err: &LevelError<String>) -> std::io::Result<()> {
    match err {
        LevelError::CycleFound {
            node,
            dependents,
            unplaced,
        } => {
            writeln!(out, "cyclic: stuck at {node} with {unplaced} node(s) unplaced")?;
            writeln!(out, "  dependents of {node}: {}", join_nodes(dependents))
        }
        LevelError::UndeclaredNode { .. } | LevelError::DuplicateNode { .. } => {
            writeln!(out, "{err}")
        }
    }
}

fn print_witness_json(out: &mut dyn Write, err: &LevelError<String>) -> std::io::Result<()> {
    let value = match err {
        LevelError::CycleFound {
            node,
            dependents,
            unplaced,
        } => serde_json::json!({
            "acyclic": false,
            "witness": node,
            "dependents": dependents,
            "unplaced": unplaced,
        }),
        LevelError::UndeclaredNode { .. } | LevelError::DuplicateNode { .. } => {
            serde_json::json!({ "acyclic": false, "error": err.to_string() })
        }
    };
    writeln!(out, "{value}")
}
