//! Implementation of `levelsort order <file>`.
//!
//! Prints one topological order: the levels concatenated.
//!
//! Output (human mode): one node per line.
//! Output (JSON mode): `{"order": [...], "node_count": N}`.
use std::io::Write;

use levelsort_core::LevelConfig;

use crate::OutputFormat;
use crate::cmd::{levels, with_stdout};
use crate::error::CliError;

/// Runs the `order` command.
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
    let order = levels::compute(content, config, sort)?.flatten();
    with_stdout(|out| match format {
        OutputFormat::Human => print_human(out, &order),
        OutputFormat::Json => print_json(out, &order),
    })
}

fn print_human(out: &mut dyn Write, order: &[String]) -> std::io::Result<()> {
    for node in order {
        writeln!(out, "{node}")?;
    }
    Ok(())
}

fn print_json(out: &mut dyn Write, order: &[String]) -> std::io::Result<()> {
    let value = serde_json::json!({
        "order": order,
        "node_count": order.len(),
    });
    writeln!(out, "{value}")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn human_order_is_one_per_line() {
        let order = vec!["socks".to_owned(), "shoes".to_owned()];
        let mut buf: Vec<u8> = Vec::new();
        print_human(&mut buf, &order).expect("write");
        assert_eq!(String::from_utf8(buf).expect("utf-8"), "socks\nshoes\n");
    }

    #[test]
    fn json_order_round_trips() {
        let order = vec!["a".to_owned(), "b".to_owned()];
        let mut buf: Vec<u8> = Vec::new();
        print_json(&mut buf, &order).expect("write");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("valid JSON");
        assert_eq!(value["order"], serde_json::json!(["a", "b"]));
        assert_eq!(value["node_count"], 2);
    }
}
