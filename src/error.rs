//! Error types for frogklan_release operations.
//!
//! Every variant is fatal for the current invocation: packaging stops at the
//! first error and the binary exits non-zero with the error message and a few
//! recovery suggestions.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for frogklan_release operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all frogklan_release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// A pre-built artifact or builder script is absent.
    #[error("missing {what}: {path}")]
    MissingInput {
        /// Human description of the artifact (e.g. "Linux executable")
        what: &'static str,
        /// Path where the artifact was expected
        path: PathBuf,
    },

    /// The external tool exited successfully but its output is absent.
    #[error("missing {what}: {path}")]
    MissingOutput {
        /// Human description of the output (e.g. "AppImage output")
        what: &'static str,
        /// Path where the output was expected
        path: PathBuf,
    },

    /// The external tool could not be located.
    #[error("tool not found: {program} ({reason})")]
    ToolNotFound {
        /// Program name or path as configured
        program: String,
        /// Lookup failure reported by `which`
        reason: String,
    },

    /// The external tool exited with a non-zero status.
    #[error("command failed with {}: {command}", exit_code_label(.code))]
    ToolFailed {
        /// Printed command line
        command: String,
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
    },

    /// The external tool could not be spawned.
    #[error("failed to run command {command}: {error}")]
    CommandFailed {
        /// Printed command line
        command: String,
        /// The underlying error
        error: io::Error,
    },

    /// File system error with path context.
    #[error("{context} {path}: {error}")]
    Fs {
        /// Operation being performed (e.g. "creating output directory")
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),
}

fn exit_code_label(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("exit code {code}"),
        None => "termination by signal".to_string(),
    }
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl ReleaseError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ReleaseError::MissingInput { what, path } => vec![
                format!("Build or copy the {what} to {}", path.display()),
                "Run the packager from the repository root, or pass --root".to_string(),
            ],
            ReleaseError::MissingOutput { path, .. } => vec![
                format!(
                    "Check the builder's output above; it must write exactly {}",
                    path.display()
                ),
                "Make sure the builder script honours its output directory argument".to_string(),
            ],
            ReleaseError::ToolNotFound { program, .. } => vec![
                format!("Install {program} or add it to PATH"),
                "Point --makensis (or MAKENSIS) at the NSIS compiler".to_string(),
            ],
            ReleaseError::ToolFailed { .. } => {
                vec!["Re-run the printed command by hand to see the full failure".to_string()]
            }
            ReleaseError::Cli(_) => vec!["Pass a plain version such as --version 1.2.3".to_string()],
            _ => vec![],
        }
    }
}

/// Attach path context to filesystem errors.
pub trait ErrorExt<T> {
    /// Convert an `io::Error` into [`ReleaseError::Fs`] naming the operation and path.
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| ReleaseError::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}
