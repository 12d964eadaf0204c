//! `tracing` subscriber setup for the `levelsort` binary.
//!
//! Logs go to stderr so stdout stays machine-readable. `RUST_LOG` takes
//! precedence; otherwise the level follows `--verbose` / `--quiet`.
use tracing_subscriber::EnvFilter;

/// Returns the default filter directive for the given verbosity flags.
pub fn default_directive(quiet: bool, verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    }
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init(quiet: bool, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
