//! The shell facade: session lifecycle and command execution.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{info, instrument, warn};
use va_core::{CommandHistory, CommandIntent, CommandResult, ResponseMessage, SessionId};

use crate::config::ShellConfig;
use crate::content;
use crate::context::CommandContext;
use crate::dispatcher::Dispatcher;
use crate::events::EventTracker;
use crate::fs::VirtualFileSystem;
use crate::lock::SessionLocks;
use crate::process::{ProcessRunner, SystemProcessRunner};
use crate::strategy::ShellEnv;

/// A multi-session maintenance shell.
///
/// Commands for one session run one at a time; different sessions run
/// concurrently. Session state lives from [`Shell::start_session`] to
/// [`Shell::end_session`].
pub struct Shell {
    config: ShellConfig,
    fs: VirtualFileSystem,
    events: EventTracker,
    runner: Arc<dyn ProcessRunner>,
    dispatcher: Dispatcher,
    locks: SessionLocks,
}

impl Shell {
    /// Create a shell that spawns real host processes for `exec`.
    pub fn new(config: ShellConfig) -> Self {
        Self::with_runner(config, Arc::new(SystemProcessRunner))
    }

    /// Create a shell with a custom process runner.
    pub fn with_runner(config: ShellConfig, runner: Arc<dyn ProcessRunner>) -> Self {
        Self {
            config,
            fs: VirtualFileSystem::new(),
            events: EventTracker::new(),
            runner,
            dispatcher: Dispatcher::new(),
            locks: SessionLocks::new(),
        }
    }

    /// Replace the strategy registry.
    pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    /// The crash-to-maintenance-shell sequence shown before any session.
    pub fn boot(&self) -> Vec<ResponseMessage> {
        content::boot_sequence()
    }

    /// Seed the session's filesystem for the configured act and return the
    /// welcome sequence.
    pub async fn start_session(&self, session: SessionId) -> Vec<ResponseMessage> {
        let _guard = self.locks.acquire(session).await;
        self.fs
            .initialize_session(session, self.config.initial_act)
            .await;
        content::welcome()
    }

    /// Drop every piece of per-session state.
    pub async fn end_session(&self, session: SessionId) {
        {
            let _guard = self.locks.acquire(session).await;
            self.fs.end_session(session).await;
            self.events.end_session(session).await;
        }
        self.locks.remove(session).await;
        info!(%session, "session ended");
    }

    /// Execute one command line. `working_directory` defaults to the
    /// configured directory.
    #[instrument(skip_all, fields(%session, line))]
    pub async fn execute(
        &self,
        session: SessionId,
        line: &str,
        working_directory: Option<&str>,
    ) -> CommandResult {
        let wd = working_directory.unwrap_or(&self.config.default_working_directory);
        let ctx = CommandContext::parse(session, line, wd);
        let env = ShellEnv {
            fs: &self.fs,
            events: &self.events,
            runner: self.runner.as_ref(),
            config: &self.config,
            strategies: self.dispatcher.strategies(),
        };

        let _guard = self.locks.acquire(session).await;
        self.dispatcher.dispatch(&ctx, &env).await
    }

    /// Execute, then hand a flattened record to `history`. A history failure
    /// is logged and does not affect the returned result.
    pub async fn execute_and_record(
        &self,
        session: SessionId,
        line: &str,
        working_directory: Option<&str>,
        history: &dyn CommandHistory,
    ) -> CommandResult {
        let result = self.execute(session, line, working_directory).await;
        if let Err(e) = history.save(result.to_record(session, line)).await {
            warn!(%session, error = %e, "failed to save command history");
        }
        result
    }

    /// Every known alias, sorted.
    pub fn available_commands(&self) -> Vec<String> {
        self.dispatcher.available_commands()
    }

    /// Aliases grouped by intent.
    pub fn commands_by_intent(&self) -> BTreeMap<CommandIntent, Vec<String>> {
        self.dispatcher.commands_by_intent()
    }

    /// Help for the first token of `verb`, or the general listing.
    pub fn help(&self, verb: Option<&str>) -> String {
        let verb = verb.and_then(|v| v.split_whitespace().next());
        self.dispatcher.help(verb, &self.config)
    }

    /// The session filesystem store.
    pub fn filesystem(&self) -> &VirtualFileSystem {
        &self.fs
    }

    /// The narrative event tracker.
    pub fn events(&self) -> &EventTracker {
        &self.events
    }

    /// This shell's configuration.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use va_core::{CommandRecord, EventType, ExitCode, VaError, VaResult};

    struct FailingHistory;

    #[async_trait]
    impl CommandHistory for FailingHistory {
        async fn save(&self, _record: CommandRecord) -> VaResult<CommandRecord> {
            Err(VaError::Storage("disk full".into()))
        }
        async fn find_by_id(&self, _id: u64) -> VaResult<Option<CommandRecord>> {
            Ok(None)
        }
        async fn find_by_session(&self, _s: SessionId) -> VaResult<Vec<CommandRecord>> {
            Ok(Vec::new())
        }
        async fn find_recent(&self, _s: SessionId, _limit: usize) -> VaResult<Vec<CommandRecord>> {
            Ok(Vec::new())
        }
        async fn count_by_session(&self, _s: SessionId) -> VaResult<usize> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn start_session_seeds_and_welcomes() {
        let shell = Shell::default();
        let s = SessionId::new();
        let welcome = shell.start_session(s).await;
        assert!(welcome[0].text.contains("CONNECTION ESTABLISHED"));
        assert!(shell.filesystem().has_session(s).await);
    }

    #[tokio::test]
    async fn uninitialized_session_lists_nothing() {
        let shell = Shell::default();
        let result = shell.execute(SessionId::new(), "ls", None).await;
        assert_eq!(result.exit_code, ExitCode::NotFound);
    }

    #[tokio::test]
    async fn end_session_forgets_everything() {
        let shell = Shell::default();
        let s = SessionId::new();
        shell.start_session(s).await;
        shell.execute(s, "cat system_log", None).await;
        assert!(shell.events().has_occurred(s, EventType::SystemLogRead).await);

        shell.end_session(s).await;
        assert!(!shell.filesystem().has_session(s).await);
        assert!(!shell.events().has_occurred(s, EventType::SystemLogRead).await);
    }

    #[tokio::test]
    async fn history_failure_does_not_fail_command() {
        let shell = Shell::default();
        let s = SessionId::new();
        shell.start_session(s).await;
        let result = shell
            .execute_and_record(s, "cat readme.txt", None, &FailingHistory)
            .await;
        assert!(result.is_success());
    }

    #[tokio::test]
    async fn configured_working_directory() {
        let shell = Shell::new(ShellConfig::default().with_working_directory("/secure"));
        let s = SessionId::new();
        shell.start_session(s).await;
        let result = shell.execute(s, "cat containment_log", None).await;
        assert!(result.is_success());
        let explicit = shell.execute(s, "cat readme.txt", Some("/")).await;
        assert!(explicit.is_success());
    }

    #[test]
    fn help_uses_first_token() {
        let shell = Shell::default();
        assert_eq!(shell.help(Some("ls -la")), shell.help(Some("ls")));
        assert!(shell.help(None).starts_with("Available Commands:"));
        assert_eq!(shell.help(Some("zap")), "Unknown command: zap");
    }

    #[test]
    fn boot_sequence_is_static() {
        let shell = Shell::default();
        assert_eq!(shell.boot(), shell.boot());
    }
}
