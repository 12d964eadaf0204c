//! Implementation of `levelsort levels <file>`.
//!
//! Builds the dependency graph and prints its levels.
//!
//! Output (human mode): one line per level, `level N: a, b, c`.
//! Output (JSON mode): `{"levels": [[...], ...], "level_count": N, "node_count": M}`.
//!
//! Exit codes: 0 = success, 1 = cycle, 2 = unreadable or invalid input.
use std::io::Write;

use levelsort_core::{LevelConfig, LevelList, level_with};
use tracing::debug;

use crate::OutputFormat;
use crate::cmd::{join_nodes, with_stdout};
use crate::document::parse_graph;
use crate::error::CliError;

/// Runs the `levels` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if `content` is not a valid dependency document.
/// - [`CliError`] exit code 1 if the graph contains a cycle.
pub fn run(
    content: &str,
    config: &LevelConfig,
    sort: bool,
    format: OutputFormat,
) -> Result<(), CliError> {
    let levels = compute(content, config, sort)?;
    debug!(
        levels = levels.len(),
        nodes = levels.node_count(),
        "leveling complete"
    );

    with_stdout(|out| match format {
        OutputFormat::Human => print_human(out, &levels),
        OutputFormat::Json => print_json(out, &levels),
    })
}

/// Parses and levels `content`, optionally sorting each level by name.
pub(crate) fn compute(
    content: &str,
    config: &LevelConfig,
    sort: bool,
) -> Result<LevelList<String>, CliError> {
    let graph = parse_graph(content, config.missing_nodes)?;
    let mut levels = level_with(&graph, config).map_err(|e| CliError::CycleFound {
        detail: e.to_string(),
    })?;
    if sort {
        levels.sort_groups_by(Ord::cmp);
    }
    Ok(levels)
}

fn print_human(out: &mut dyn Write, levels: &LevelList<String>) -> std::io::Result<()> {
    for (i, group) in levels.iter().enumerate() {
        writeln!(out, "level {i}: {}", join_nodes(group))?;
    }
    Ok(())
}

fn print_json(out: &mut dyn Write, levels: &LevelList<String>) -> std::io::Result<()> {
    let value = serde_json::json!({
        "levels": levels,
        "level_count": levels.len(),
        "node_count": levels.node_count(),
    });
    writeln!(out, "{value}")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use levelsort_core::MissingNodePolicy;

    use super::*;

    const DIAMOND: &str = r#"{"A": ["B", "C"], "B": ["D"], "C": ["D"], "D": []}"#;

    fn render(levels: &LevelList<String>, format: OutputFormat) -> String {
        let mut buf: Vec<u8> = Vec::new();
        match format {
            OutputFormat::Human => print_human(&mut buf, levels),
            OutputFormat::Json => print_json(&mut buf, levels),
        }
        .expect("write to Vec");
        String::from_utf8(buf).expect("utf-8")
    }

    #[test]
    fn human_output_lists_levels() {
        let levels = compute(DIAMOND, &LevelConfig::default(), false).expect("acyclic");
        assert_eq!(
            render(&levels, OutputFormat::Human),
            "level 0: A\nlevel 1: B, C\nlevel 2: D\n"
        );
    }

    #[test]
    fn json_output_has_counts() {
        let levels = compute(DIAMOND, &LevelConfig::default(), false).expect("acyclic");
        let value: serde_json::Value =
            serde_json::from_str(&render(&levels, OutputFormat::Json)).expect("valid JSON");
        assert_eq!(value["level_count"], 3);
        assert_eq!(value["node_count"], 4);
        assert_eq!(value["levels"][1], serde_json::json!(["B", "C"]));
    }

    #[test]
    fn sort_orders_each_level_by_name() {
        let doc = r#"{"zeta": [], "alpha": [], "mid": []}"#;
        let levels = compute(doc, &LevelConfig::default(), true).expect("acyclic");
        assert_eq!(levels.groups(), &[vec!["alpha", "mid", "zeta"]]);
    }

    #[test]
    fn cycle_maps_to_exit_1() {
        let err = compute(r#"{"a": ["b"], "b": ["a"]}"#, &LevelConfig::default(), false)
            .expect_err("cycle");
        assert_eq!(err.exit_code(), 1);
        assert!(err.message().contains("cycle"), "{}", err.message());
    }

    #[test]
    fn auto_register_config_is_honoured() {
        let config = LevelConfig::default().with_missing_nodes(MissingNodePolicy::AutoRegister);
        let levels = compute(r#"{"a": ["ghost"]}"#, &config, false).expect("registered");
        assert_eq!(levels.groups(), &[vec!["a"], vec!["ghost"]]);
    }
}
