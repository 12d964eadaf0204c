//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use levelsort_core::{LevelConfig, MissingNodePolicy};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` emits plain text to stdout. `Json` emits a single JSON object.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default).
    Human,
    /// Structured JSON output.
    Json,
}

/// Arguments shared by every command that reads a dependency document.
#[derive(Args, Clone, Debug)]
pub struct GraphArgs {
    /// Path to a JSON dependency document, or `-` for stdin.
    ///
    /// The document is an object mapping each node to the array of nodes
    /// that depend on it, e.g. `{"compile": ["test"], "test": []}`.
    #[arg(value_name = "FILE")]
    pub file: PathOrStdin,

    /// Register dependents that never appear as keys instead of rejecting
    /// the document.
    #[arg(long)]
    pub auto_register: bool,
}

impl GraphArgs {
    /// Returns the missing-node policy selected by `--auto-register`.
    pub fn policy(&self) -> MissingNodePolicy {
        if self.auto_register {
            MissingNodePolicy::AutoRegister
        } else {
            MissingNodePolicy::Reject
        }
    }
}

/// All top-level subcommands exposed by the `levelsort` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Partition the graph into dependency levels.
    Levels {
        #[command(flatten)]
        graph: GraphArgs,
        /// Split levels into groups of at most N nodes.
        #[arg(long, value_name = "N")]
        max_group_size: Option<NonZeroUsize>,
        /// Sort nodes inside each level by name instead of declaration order.
        #[arg(long)]
        sort: bool,
    },

    /// Print a single topological order (levels concatenated).
    Order {
        #[command(flatten)]
        graph: GraphArgs,
        /// Sort nodes inside each level by name instead of declaration order.
        #[arg(long)]
        sort: bool,
    },

    /// Check that the graph is acyclic; exit 1 with a witness if it is not.
    Check {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// List every cyclic component of the graph; exit 1 if there are any.
    Cycles {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Print the levelsort-core library version.
    Version,
}

impl Command {
    /// Returns the leveling configuration implied by this command's flags.
    pub fn level_config(&self) -> LevelConfig {
        match self {
            Command::Levels {
                graph,
                max_group_size,
                ..
            } => LevelConfig::default()
                .with_missing_nodes(graph.policy())
                .with_max_group_size(*max_group_size),
            Command::Order { graph, .. } | Command::Check { graph } | Command::Cycles { graph } => {
                LevelConfig::default().with_missing_nodes(graph.policy())
            }
            Command::Version => LevelConfig::default(),
        }
    }
}

/// Root CLI struct for the `levelsort` binary.
///
/// All global flags are marked `global = true` so that clap propagates them
/// to every subcommand.
#[derive(Parser)]
#[command(
    name = "levelsort",
    version,
    about = "Dependency-level grouping for JSON dependency graphs",
    long_about = "Partitions a dependency graph into ordered levels so that every node's\n\
                  predecessors lie in earlier levels, and diagnoses cycles when no such\n\
                  partition exists."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Only log errors to stderr (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug detail (graph size, per-level progress, timing) to stderr
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input size in bytes.
    ///
    /// Can also be set via the `LEVELSORT_MAX_FILE_SIZE` environment
    /// variable. Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "LEVELSORT_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,
}
