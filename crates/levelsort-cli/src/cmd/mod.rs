/// Command module for the `levelsort` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the input document and parsed arguments and returns `Ok(())`
/// on success or a [`crate::error::CliError`] on failure.
pub mod check;
pub mod cycles;
pub mod levels;
pub mod order;

use std::io::Write;

use crate::error::CliError;

/// Runs `write` against a locked stdout, mapping write failures to
/// [`CliError::IoError`].
pub(crate) fn with_stdout<F>(write: F) -> Result<(), CliError>
where
    F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
{
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write(&mut out)
        .and_then(|()| out.flush())
        .map_err(|e| CliError::IoError {
            source: "stdout".to_owned(),
            detail: e.to_string(),
        })
}

/// Renders a node list for human output: `a, b, c`.
pub(crate) fn join_nodes(nodes: &[String]) -> String {
    nodes.join(", ")
}
