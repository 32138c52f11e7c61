//! Command-history queries.

use std::sync::Arc;

use tracing::info;

use va_core::{CommandHistory, CommandRecord, SessionId, VaResult};

/// Read and write access to the command log.
#[derive(Clone)]
pub struct HistoryService {
    repository: Arc<dyn CommandHistory>,
}

impl HistoryService {
    /// Create a service over `repository`.
    pub fn new(repository: Arc<dyn CommandHistory>) -> Self {
        Self { repository }
    }

    /// The underlying port.
    pub fn repository(&self) -> &dyn CommandHistory {
        self.repository.as_ref()
    }

    /// Store a record.
    pub async fn save(&self, record: CommandRecord) -> VaResult<CommandRecord> {
        let saved = self.repository.save(record).await?;
        info!(id = ?saved.id, command = %saved.command, "command saved");
        Ok(saved)
    }

    /// Look up one record.
    pub async fn get(&self, id: u64) -> VaResult<Option<CommandRecord>> {
        self.repository.find_by_id(id).await
    }

    /// Every record of a session, oldest first.
    pub async fn session_history(&self, session: SessionId) -> VaResult<Vec<CommandRecord>> {
        self.repository.find_by_session(session).await
    }

    /// The latest `limit` records, newest first.
    pub async fn recent(&self, session: SessionId, limit: usize) -> VaResult<Vec<CommandRecord>> {
        self.repository.find_recent(session, limit).await
    }

    /// How many commands the session has run.
    pub async fn count(&self, session: SessionId) -> VaResult<usize> {
        self.repository.count_by_session(session).await
    }

    /// Records whose command or response contains `keyword`, ignoring case.
    pub async fn search(&self, session: SessionId, keyword: &str) -> VaResult<Vec<CommandRecord>> {
        let needle = keyword.to_lowercase();
        Ok(self
            .repository
            .find_by_session(session)
            .await?
            .into_iter()
            .filter(|r| {
                r.command.to_lowercase().contains(&needle)
                    || r.response.to_lowercase().contains(&needle)
            })
            .collect())
    }
}
