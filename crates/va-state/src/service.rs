//! Game-state lifecycle on top of the load and save ports.

use std::sync::Arc;

use tracing::{debug, info};

use va_core::{
    Ending, EventType, GameState, LoadGameState, SaveGameState, SessionId, VaError, VaResult,
};

/// Creates and updates per-session [`GameState`] records.
///
/// Every `update_*` call requires the session to exist already. Updating a
/// session that was never created returns [`VaError::SessionNotFound`].
#[derive(Clone)]
pub struct GameStateService {
    load: Arc<dyn LoadGameState>,
    save: Arc<dyn SaveGameState>,
}

impl GameStateService {
    /// Create a service over the given ports.
    pub fn new(load: Arc<dyn LoadGameState>, save: Arc<dyn SaveGameState>) -> Self {
        Self { load, save }
    }

    /// Load the session's state, creating and saving a fresh one if absent.
    pub async fn get_or_create(&self, session: SessionId) -> VaResult<GameState> {
        if let Some(state) = self.load.load(session).await? {
            return Ok(state);
        }
        info!(%session, "creating game state");
        self.save.save(GameState::new(session)).await
    }

    /// Set the current act.
    pub async fn update_act(&self, session: SessionId, act: u32) -> VaResult<GameState> {
        self.update(session, |s| s.act = act).await
    }

    /// Set the logic seal.
    pub async fn update_logic_seal(&self, session: SessionId, broken: bool) -> VaResult<GameState> {
        self.update(session, |s| s.logic_seal_broken = broken).await
    }

    /// Set the data seal.
    pub async fn update_data_seal(&self, session: SessionId, broken: bool) -> VaResult<GameState> {
        self.update(session, |s| s.data_seal_broken = broken).await
    }

    /// Set the power seal.
    pub async fn update_power_seal(&self, session: SessionId, broken: bool) -> VaResult<GameState> {
        self.update(session, |s| s.power_seal_broken = broken).await
    }

    /// Record the ending.
    pub async fn update_ending(&self, session: SessionId, ending: Ending) -> VaResult<GameState> {
        self.update(session, |s| s.ending = Some(ending)).await
    }

    /// Set whether Elara has made contact.
    pub async fn update_elara_contacted(
        &self,
        session: SessionId,
        contacted: bool,
    ) -> VaResult<GameState> {
        self.update(session, |s| s.elara_contacted = contacted).await
    }

    /// Set whether a hidden entry has been found.
    pub async fn update_hidden_directory_found(
        &self,
        session: SessionId,
        found: bool,
    ) -> VaResult<GameState> {
        self.update(session, |s| s.hidden_directory_found = found)
            .await
    }

    /// Set whether the system log has been read.
    pub async fn update_system_log_read(&self, session: SessionId, read: bool) -> VaResult<GameState> {
        self.update(session, |s| s.system_log_read = read).await
    }

    /// Set whether `/secure` has been accessed.
    pub async fn update_secure_directory_accessed(
        &self,
        session: SessionId,
        accessed: bool,
    ) -> VaResult<GameState> {
        self.update(session, |s| s.secure_directory_accessed = accessed)
            .await
    }

    /// Mirror a fired narrative event into the durable record.
    ///
    /// Events with no progress flag leave the state unchanged, but still
    /// require the session to exist.
    pub async fn apply_event(&self, session: SessionId, event: EventType) -> VaResult<GameState> {
        match event {
            EventType::ElaraFirstContact => self.update_elara_contacted(session, true).await,
            EventType::HiddenDirectoryFound => {
                self.update_hidden_directory_found(session, true).await
            }
            EventType::SystemLogRead => self.update_system_log_read(session, true).await,
            EventType::SecureDirectoryAccessed => {
                self.update_secure_directory_accessed(session, true).await
            }
            EventType::LogicSealBroken => self.update_logic_seal(session, true).await,
            EventType::DataSealBroken => self.update_data_seal(session, true).await,
            EventType::PowerSealBroken => self.update_power_seal(session, true).await,
            EventType::ElaraRevealed | EventType::FinalChoice => self
                .load
                .load(session)
                .await?
                .ok_or(VaError::SessionNotFound(session)),
        }
    }

    async fn update(
        &self,
        session: SessionId,
        mutate: impl FnOnce(&mut GameState) + Send,
    ) -> VaResult<GameState> {
        let mut state = self
            .load
            .load(session)
            .await?
            .ok_or(VaError::SessionNotFound(session))?;
        mutate(&mut state);
        debug!(%session, "saving game state");
        self.save.save(state).await
    }
}
