use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default permission string for regular files.
pub const FILE_PERMISSIONS: &str = "rw-r--r--";
/// Default permission string for directories.
pub const DIRECTORY_PERMISSIONS: &str = "drwxr-xr-x";
/// Default permission string for executable scripts.
pub const SCRIPT_PERMISSIONS: &str = "rwxr-xr-x";

/// A file or directory in a session's virtual filesystem.
///
/// `path` is the unique key within one session. Directories may also exist
/// implicitly, without a record of their own, by being the parent of another
/// file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualFile {
    /// Absolute path, e.g. `/secure/containment_log`.
    pub path: String,
    /// Display name, usually the last path segment.
    pub name: String,
    /// File content; empty for directories.
    pub content: String,
    /// Whether this entry is a directory.
    pub is_directory: bool,
    /// Whether `ls` hides this entry without `-a`.
    pub is_hidden: bool,
    /// Whether `run` may execute this entry.
    pub is_executable: bool,
    /// Unix-style permission string shown by `ls -l`.
    pub permissions: String,
    /// Size in bytes.
    pub size: u64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub modified_at: DateTime<Utc>,
}

impl VirtualFile {
    /// Create a regular file.
    pub fn file(path: impl Into<String>, name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let now = Utc::now();
        Self {
            path: path.into(),
            name: name.into(),
            size: content.len() as u64,
            content,
            is_directory: false,
            is_hidden: false,
            is_executable: false,
            permissions: FILE_PERMISSIONS.to_string(),
            created_at: now,
            modified_at: now,
        }
    }

    /// Create an empty directory record.
    pub fn directory(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            is_directory: true,
            permissions: DIRECTORY_PERMISSIONS.to_string(),
            ..Self::file(path, name, "")
        }
    }

    /// Create an executable script.
    pub fn script(
        path: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            is_executable: true,
            permissions: SCRIPT_PERMISSIONS.to_string(),
            ..Self::file(path, name, content)
        }
    }

    /// Mark this entry hidden.
    pub fn hidden(mut self) -> Self {
        self.is_hidden = true;
        self
    }

    /// The directory that structurally contains this entry.
    pub fn parent_path(&self) -> &str {
        parent_path(&self.path)
    }
}

/// Prepend `/` if missing. No other canonicalization is performed.
pub fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Everything before the last `/`, or `/` when that slash is the root
/// separator. A path with no slash is its own parent.
pub fn parent_path(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(idx) => &path[..idx],
        None => path,
    }
}
