//! Per-session in-memory virtual filesystem.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::{debug, info};

use va_core::{SessionId, VirtualFile, normalize_path, parent_path};

use crate::content;

type FileMap = HashMap<String, VirtualFile>;

/// Session-keyed file trees.
///
/// Operations on a session that was never initialized return empty results
/// rather than errors.
#[derive(Debug, Default)]
pub struct VirtualFileSystem {
    sessions: RwLock<HashMap<SessionId, FileMap>>,
}

impl VirtualFileSystem {
    /// Create an empty filesystem with no sessions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace (or create) the session's tree with the seed set for `act`.
    pub async fn initialize_session(&self, session: SessionId, act: u32) {
        let files: FileMap = content::files_for_act(act)
            .into_iter()
            .map(|f| (f.path.clone(), f))
            .collect();
        info!(%session, act, files = files.len(), "initialized virtual filesystem");
        self.sessions.write().await.insert(session, files);
    }

    /// Drop the session's tree. Returns true if it existed.
    pub async fn end_session(&self, session: SessionId) -> bool {
        self.sessions.write().await.remove(&session).is_some()
    }

    /// Returns true if the session has been initialized.
    pub async fn has_session(&self, session: SessionId) -> bool {
        self.sessions.read().await.contains_key(&session)
    }

    /// Direct children of `path`, sorted by name, hidden entries only when
    /// `show_hidden` is set.
    pub async fn list_files(
        &self,
        session: SessionId,
        path: &str,
        show_hidden: bool,
    ) -> Vec<VirtualFile> {
        let sessions = self.sessions.read().await;
        let Some(files) = sessions.get(&session) else {
            return Vec::new();
        };
        let dir = normalize_path(path);

        let mut entries: Vec<VirtualFile> = files
            .values()
            .filter(|f| f.parent_path() == dir)
            .filter(|f| show_hidden || !f.is_hidden)
            .cloned()
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    /// Exact lookup by normalized path.
    pub async fn read_file(&self, session: SessionId, path: &str) -> Option<VirtualFile> {
        let sessions = self.sessions.read().await;
        sessions.get(&session)?.get(&normalize_path(path)).cloned()
    }

    /// True if `path` is a key, or if any file names it as its parent.
    pub async fn exists(&self, session: SessionId, path: &str) -> bool {
        let sessions = self.sessions.read().await;
        let Some(files) = sessions.get(&session) else {
            return false;
        };
        let path = normalize_path(path);
        files.contains_key(&path) || files.values().any(|f| parent_path(&f.path) == path)
    }

    /// Upsert by the file's own path.
    pub async fn write_file(&self, session: SessionId, file: VirtualFile) {
        debug!(%session, path = %file.path, "write file");
        self.sessions
            .write()
            .await
            .entry(session)
            .or_default()
            .insert(file.path.clone(), file);
    }

    /// Remove the entry at `path`. Absent entries are ignored.
    pub async fn delete_file(&self, session: SessionId, path: &str) {
        if let Some(files) = self.sessions.write().await.get_mut(&session) {
            files.remove(&normalize_path(path));
        }
    }

    /// True if `path` exists and is marked executable.
    pub async fn is_executable(&self, session: SessionId, path: &str) -> bool {
        self.read_file(session, path)
            .await
            .is_some_and(|f| f.is_executable)
    }
}
