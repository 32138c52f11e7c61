use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::result::CommandIntent;
use crate::session::SessionId;

/// A flattened, persistable record of one executed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// Store-assigned identifier; `None` until saved.
    pub id: Option<u64>,
    /// The session the command ran in.
    pub session_id: SessionId,
    /// The raw command line as typed.
    pub command: String,
    /// Joined output on success, the first error text otherwise.
    pub response: String,
    /// Intent of the strategy that ran, if any.
    pub intent: Option<CommandIntent>,
    /// When the command was executed.
    pub timestamp: DateTime<Utc>,
}

impl CommandRecord {
    /// Create an unsaved record stamped with the current time.
    pub fn new(
        session_id: SessionId,
        command: impl Into<String>,
        response: impl Into<String>,
        intent: Option<CommandIntent>,
    ) -> Self {
        Self {
            id: None,
            session_id,
            command: command.into(),
            response: response.into(),
            intent,
            timestamp: Utc::now(),
        }
    }
}
