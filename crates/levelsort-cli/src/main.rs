use std::time::Instant;

use clap::Parser as _;
use tracing::debug;

mod cli;
mod cmd;
mod document;
mod error;
mod io;
mod logging;

pub use cli::{Cli, Command, GraphArgs, OutputFormat, PathOrStdin};

use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Dispatches the parsed command line to its subcommand.
fn run(cli: &Cli) -> Result<(), CliError> {
    let started = Instant::now();
    let config = cli.command.level_config();

    let result = match &cli.command {
        Command::Levels { graph, sort, .. } => {
            let content = read(cli, graph)?;
            cmd::levels::run(&content, &config, *sort, cli.format)
        }
        Command::Order { graph, sort } => {
            let content = read(cli, graph)?;
            cmd::order::run(&content, &config, *sort, cli.format)
        }
        Command::Check { graph } => {
            let content = read(cli, graph)?;
            cmd::check::run(&content, &config, cli.format)
        }
        Command::Cycles { graph } => {
            let content = read(cli, graph)?;
            cmd::cycles::run(&content, &config, cli.format)
        }
        Command::Version => {
            println!("{}", levelsort_core::version());
            Ok(())
        }
    };

    debug!(
        elapsed_ms = started.elapsed().as_millis(),
        ok = result.is_ok(),
        "command finished"
    );
    result
}

fn read(cli: &Cli, graph: &GraphArgs) -> Result<String, CliError> {
    let content = io::read_input(&graph.file, cli.max_file_size)?;
    debug!(bytes = content.len(), "input read");
    Ok(content)
}
