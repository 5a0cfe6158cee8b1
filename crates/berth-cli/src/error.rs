//! CLI error types with exit code handling
//!
//! This module provides a unified error type for CLI operations that
//! maps errors to appropriate exit codes.

use berth_client::ClientError;
use miette::Diagnostic;
use thiserror::Error;

use crate::endpoint::HOST_ENV_VAR;
use crate::exit_codes;

/// CLI-specific error type that includes exit code information
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// Wrong number of positional arguments
    #[error("This command needs {expected} {noun}: {label}", noun = argument_noun(.expected))]
    #[diagnostic(
        code(berth::cli::usage),
        help("See 'berth install --help' for accepted chart references")
    )]
    InvalidArgumentCount {
        expected: usize,
        actual: usize,
        label: &'static str,
    },

    /// The install request failed on the client or server side
    #[error("Install failed: {message}")]
    #[diagnostic(code(berth::cli::install))]
    RemoteInstall {
        message: String,
        #[help]
        help: Option<String>,
        /// The release server could not be reached
        unreachable: bool,
    },

    /// Writing output failed
    #[error("IO error: {message}")]
    #[diagnostic(code(berth::cli::io))]
    Io { message: String },
}

fn argument_noun(count: &usize) -> &'static str {
    if *count == 1 { "argument" } else { "arguments" }
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgumentCount { .. } => exit_codes::USAGE_ERROR,
            CliError::RemoteInstall {
                unreachable: true, ..
            } => exit_codes::UNAVAILABLE,
            CliError::RemoteInstall { .. } => exit_codes::ERROR,
            CliError::Io { .. } => exit_codes::IO_ERROR,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
        }
    }
}

/// Wrap a release server error for presentation
///
/// The message is kept as reported; a hint is attached where the operator
/// can act on it.
pub fn pretty_error(err: ClientError) -> CliError {
    let help = match &err {
        ClientError::Connection { .. } | ClientError::Timeout { .. } => Some(format!(
            "Is the release server running? Point berth at it with --host or {}",
            HOST_ENV_VAR
        )),
        ClientError::InvalidEndpoint { .. } => {
            Some("Use an address like ':44134', 'host:port' or 'http://host:port'".to_string())
        }
        ClientError::Server { status, .. } if *status >= 500 => {
            Some("The release server failed internally; check its logs".to_string())
        }
        _ => None,
    };

    CliError::RemoteInstall {
        message: err.to_string(),
        help,
        unreachable: err.is_unreachable(),
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
