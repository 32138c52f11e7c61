//! Configuration for a shell instance.

use std::time::Duration;

/// Host commands `exec` may run when no allow-list is configured.
pub const DEFAULT_ALLOWED_COMMANDS: &[&str] = &["echo", "date", "pwd", "whoami"];

/// Configuration for a shell.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Hard limit on an external process's run time.
    pub exec_timeout: Duration,
    /// First tokens `exec` accepts.
    pub allowed_commands: Vec<String>,
    /// Working directory used when a caller does not supply one.
    pub default_working_directory: String,
    /// Act whose file tree `start_session` seeds.
    pub initial_act: u32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            exec_timeout: Duration::from_secs(30),
            allowed_commands: DEFAULT_ALLOWED_COMMANDS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            default_working_directory: "/".to_string(),
            initial_act: 1,
        }
    }
}

impl ShellConfig {
    /// Set the external process timeout.
    pub fn with_exec_timeout(mut self, timeout: Duration) -> Self {
        self.exec_timeout = timeout;
        self
    }

    /// Replace the `exec` allow-list.
    pub fn with_allowed_commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_commands = commands.into_iter().map(Into::into).collect();
        self
    }

    /// Set the default working directory (a leading `/` is added if missing).
    pub fn with_working_directory(mut self, dir: impl Into<String>) -> Self {
        self.default_working_directory = va_core::normalize_path(&dir.into());
        self
    }

    /// Set the act seeded for new sessions.
    pub fn with_act(mut self, act: u32) -> Self {
        self.initial_act = act;
        self
    }

    /// Returns true if `command` is on the allow-list (exact match).
    pub fn is_allowed(&self, command: &str) -> bool {
        self.allowed_commands.iter().any(|c| c == command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = ShellConfig::default();
        assert_eq!(cfg.exec_timeout, Duration::from_secs(30));
        assert_eq!(cfg.default_working_directory, "/");
        assert_eq!(cfg.initial_act, 1);
        assert!(cfg.is_allowed("echo"));
        assert!(!cfg.is_allowed("rm"));
    }

    #[test]
    fn builder_methods() {
        let cfg = ShellConfig::default()
            .with_exec_timeout(Duration::from_millis(500))
            .with_allowed_commands(["uname"])
            .with_act(2);
        assert_eq!(cfg.exec_timeout, Duration::from_millis(500));
        assert!(cfg.is_allowed("uname"));
        assert!(!cfg.is_allowed("echo"));
        assert_eq!(cfg.initial_act, 2);
    }

    #[test]
    fn working_directory_is_absolute() {
        let cfg = ShellConfig::default().with_working_directory("secure");
        assert_eq!(cfg.default_working_directory, "/secure");
    }
}
