//! In-memory storage adapters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use va_core::{
    CommandHistory, CommandRecord, GameState, LoadGameState, SaveGameState, SessionId, VaResult,
};

/// Game states keyed by session, implementing both state ports.
#[derive(Debug, Default)]
pub struct InMemoryGameStates {
    states: RwLock<HashMap<SessionId, GameState>>,
    saves: AtomicUsize,
}

impl InMemoryGameStates {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `save` calls served so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl LoadGameState for InMemoryGameStates {
    async fn load(&self, session_id: SessionId) -> VaResult<Option<GameState>> {
        Ok(self.states.read().await.get(&session_id).cloned())
    }
}

#[async_trait]
impl SaveGameState for InMemoryGameStates {
    async fn save(&self, state: GameState) -> VaResult<GameState> {
        self.saves.fetch_add(1, Ordering::Relaxed);
        self.states
            .write()
            .await
            .insert(state.session_id, state.clone());
        Ok(state)
    }
}

/// Append-only command log with increasing ids starting at 1.
#[derive(Debug)]
pub struct InMemoryCommandHistory {
    records: RwLock<Vec<CommandRecord>>,
    next_id: AtomicU64,
}

impl Default for InMemoryCommandHistory {
    fn default() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl InMemoryCommandHistory {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommandHistory for InMemoryCommandHistory {
    async fn save(&self, mut record: CommandRecord) -> VaResult<CommandRecord> {
        record.id = Some(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: u64) -> VaResult<Option<CommandRecord>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.id == Some(id))
            .cloned())
    }

    async fn find_by_session(&self, session_id: SessionId) -> VaResult<Vec<CommandRecord>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.session_id == session_id)
            .cloned()
            .collect())
    }

    async fn find_recent(
        &self,
        session_id: SessionId,
        limit: usize,
    ) -> VaResult<Vec<CommandRecord>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .rev()
            .filter(|r| r.session_id == session_id)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count_by_session(&self, session_id: SessionId) -> VaResult<usize> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.session_id == session_id)
            .count())
    }
}
