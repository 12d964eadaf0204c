/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `levelsort` binary.
/// Every variant maps to a stable exit code via [`CliError::exit_code`]:
///
/// - Exit code **2**: the input could not be read, parsed, or turned into a
///   dependency graph.
/// - Exit code **1**: the input was well-formed but is not acyclic.
use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `levelsort` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, otherwise the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes; `None` for stdin.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, otherwise the filesystem path.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// Any other I/O error, on input or output.
    IoError {
        /// The file, `"stdin"`, or `"stdout"`.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input is not a JSON object of string arrays.
    ParseError {
        /// The parser's message.
        detail: String,
    },

    /// The document parsed but does not form a valid dependency graph
    /// (for example an undeclared dependent under the default policy).
    GraphBuildError {
        /// The graph builder's message.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// The graph contains at least one cycle.
    CycleFound {
        /// A description of the cycle witness or the cyclic components.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseError { .. }
            | Self::GraphBuildError { .. } => 2,

            Self::CycleFound { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::ParseError { detail } => {
                format!("error: invalid dependency document: {detail}")
            }
            Self::GraphBuildError { detail } => {
                format!("error: invalid dependency graph: {detail}")
            }
            Self::CycleFound { detail } => {
                format!("error: {detail}")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn input_failures_are_exit_2() {
        let errors = [
            CliError::FileNotFound {
                path: PathBuf::from("graph.json"),
            },
            CliError::StdinReadError {
                detail: "broken pipe".to_owned(),
            },
            CliError::ParseError {
                detail: "expected value".to_owned(),
            },
            CliError::GraphBuildError {
                detail: "node \"x\" is referenced by \"a\" but never declared".to_owned(),
            },
        ];
        for e in &errors {
            assert_eq!(e.exit_code(), 2, "{e:?}");
        }
    }

    #[test]
    fn cycle_is_exit_1() {
        let e = CliError::CycleFound {
            detail: "dependency cycle detected at \"a\"".to_owned(),
        };
        assert_eq!(e.exit_code(), 1);
    }

    #[test]
    fn file_too_large_with_actual_mentions_sizes() {
        let e = CliError::FileTooLarge {
            source: "big.json".to_owned(),
            limit: 1_000,
            actual: Some(2_000),
        };
        let msg = e.message();
        assert!(msg.contains("2000"), "message: {msg}");
        assert!(msg.contains("1000"), "message: {msg}");
    }

    #[test]
    fn parse_error_message_carries_detail() {
        let e = CliError::ParseError {
            detail: "trailing comma at line 3".to_owned(),
        };
        assert!(e.message().contains("line 3"), "message: {}", e.message());
    }

    #[test]
    fn display_matches_message() {
        let e = CliError::FileNotFound {
            path: PathBuf::from("x.json"),
        };
        assert_eq!(format!("{e}"), e.message());
    }
}
