//! Implementation of `levelsort cycles <file>`.
//!
//! Enumerates every cyclic strongly connected component, rather than the
//! single witness `check` reports.
//!
//! Output (human mode): `cycle N: a, b, c` per component, or `no cycles`.
//! Output (JSON mode): `{"cycles": [[...], ...], "count": N}`.
//!
//! Exit codes: 0 = no cycles, 1 = at least one cycle, 2 = invalid input.
use std::io::Write;

use levelsort_core::{LevelConfig, find_cycles};
use tracing::debug;

use crate::OutputFormat;
use crate::cmd::{join_nodes, with_stdout};
use crate::document::parse_graph;
use crate::error::CliError;

/// Runs the `cycles` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if `content` is not a valid dependency document.
/// - [`CliError`] exit code 1 if any cycle was found.
pub fn run(content: &str, config: &LevelConfig, format: OutputFormat) -> Result<(), CliError> {
    let graph = parse_graph(content, config.missing_nodes)?;
    let cycles = find_cycles(&graph);
    debug!(components = cycles.len(), "cycle enumeration complete");

    with_stdout(|out| match format {
        OutputFormat::Human => print_human(out, &cycles),
        OutputFormat::Json => print_json(out, &cycles),
    })?;

    if cycles.is_empty() {
        Ok(())
    } else {
        Err(CliError::CycleFound {
            detail: format!("{} cyclic component(s) found", cycles.len()),
        })
    }
}

fn print_human(out: &mut dyn Write, cycles: &[Vec<String>]) -> std::io::Result<()> {
    if cycles.is_empty() {
        return writeln!(out, "no cycles");
    }
    for (i, component) in cycles.iter().enumerate() {
        writeln!(out, "cycle {}: {}", i + 1, join_nodes(component))?;
    }
    Ok(())
}

fn print_json(out: &mut dyn Write, cycles: &[Vec<String>]) -> std::io::Result<()> {
    let value = serde_json::json!({
        "cycles": cycles,
        "count": cycles.len(),
    });
    writeln!(out, "{value}")
}
