//! Per-session execution locks.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use va_core::SessionId;

/// One async mutex per session so commands within a session run one at a
/// time while different sessions proceed in parallel.
#[derive(Debug, Default)]
pub struct SessionLocks {
    locks: Mutex<HashMap<SessionId, Arc<Mutex<()>>>>,
}

impl SessionLocks {
    /// Create an empty lock table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `session`.
    pub async fn acquire(&self, session: SessionId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            Arc::clone(locks.entry(session).or_default())
        };
        lock.lock_owned().await
    }

    /// Forget the session's lock. Holders of a guard are unaffected.
    pub async fn remove(&self, session: SessionId) {
        self.locks.lock().await.remove(&session);
    }
}
