//! Error types for the shell engine.

use std::time::Duration;

use thiserror::Error;

/// Result type for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;

/// Errors that can occur inside a strategy or the process runner.
///
/// None of these cross the dispatch boundary: strategies turn them into
/// failed [`va_core::CommandResult`]s.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The external process could not be started.
    #[error("failed to spawn process: {0}")]
    Spawn(#[source] std::io::Error),

    /// Waiting on or reading from the external process failed.
    #[error("failed to wait on process: {0}")]
    Wait(#[source] std::io::Error),

    /// The external process exceeded its time limit and was killed.
    #[error("Command timeout after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The process runner was handed an empty argument list.
    #[error("empty command")]
    EmptyCommand,
}
