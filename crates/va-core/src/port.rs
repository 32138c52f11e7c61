use async_trait::async_trait;

use crate::error::VaResult;
use crate::history::CommandRecord;
use crate::session::SessionId;
use crate::state::GameState;

/// Loads a session's game state from durable storage.
#[async_trait]
pub trait LoadGameState: Send + Sync {
    /// Returns `None` if the session has no stored state.
    async fn load(&self, session_id: SessionId) -> VaResult<Option<GameState>>;
}

/// Persists a session's game state.
#[async_trait]
pub trait SaveGameState: Send + Sync {
    /// Upsert `state` and return what was stored.
    async fn save(&self, state: GameState) -> VaResult<GameState>;
}

/// Durable log of executed commands.
#[async_trait]
pub trait CommandHistory: Send + Sync {
    /// Store a record, assigning it an id.
    async fn save(&self, record: CommandRecord) -> VaResult<CommandRecord>;

    /// Look up a record by id.
    async fn find_by_id(&self, id: u64) -> VaResult<Option<CommandRecord>>;

    /// All records of a session, oldest first.
    async fn find_by_session(&self, session_id: SessionId) -> VaResult<Vec<CommandRecord>>;

    /// The `limit` most recent records of a session, newest first.
    async fn find_recent(&self, session_id: SessionId, limit: usize)
    -> VaResult<Vec<CommandRecord>>;

    /// Number of records stored for a session.
    async fn count_by_session(&self, session_id: SessionId) -> VaResult<usize>;
}
