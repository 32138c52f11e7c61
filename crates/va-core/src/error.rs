use crate::session::SessionId;

/// Alias for `Result<T, VaError>`.
pub type VaResult<T> = Result<T, VaError>;

/// Errors raised by the core model and by storage ports.
#[derive(Debug, thiserror::Error)]
pub enum VaError {
    /// A session identifier could not be parsed.
    #[error("invalid session id: \"{0}\"")]
    InvalidSessionId(String),

    /// An update was attempted on a session that was never created.
    #[error("session not found: {0}")]
    SessionNotFound(SessionId),

    /// A command-history record with the given id does not exist.
    #[error("command record not found: {0}")]
    RecordNotFound(u64),

    /// The backing store failed.
    #[error("storage error: {0}")]
    Storage(String),
}
