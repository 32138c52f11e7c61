//! Command strategies.
//!
//! Each verb family is one variant of [`Strategy`]. A strategy knows its
//! aliases, its intent, its help text, and how to execute a parsed command
//! against a session's filesystem and event set.

mod control;
mod exec;
pub(crate) mod help;
mod list;
mod read;
mod run;

use va_core::{CommandIntent, CommandResult};

use crate::config::ShellConfig;
use crate::context::CommandContext;
use crate::events::EventTracker;
use crate::fs::VirtualFileSystem;
use crate::process::ProcessRunner;

/// A verb family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// `ls`, `list`, `dir`.
    ListFiles,
    /// `cat`, `read`, `view`.
    ReadFile,
    /// `run`, `./`.
    RunScript,
    /// `exec`, `bash`, `sh`.
    ExecuteAllowlisted,
    /// `kill`, `terminate`.
    KillProcess,
    /// `help`, `?`, `man`.
    Help,
    /// `abort`, `exit`, `quit`, `bye`.
    Abort,
    /// Catch-all for every other verb.
    Unknown,
}

impl Strategy {
    /// Registered strategies in matching priority order. The catch-all is
    /// not included.
    pub const PRIORITY: [Strategy; 7] = [
        Self::ListFiles,
        Self::ReadFile,
        Self::RunScript,
        Self::ExecuteAllowlisted,
        Self::KillProcess,
        Self::Help,
        Self::Abort,
    ];

    /// The intent tag attached to this strategy's results.
    pub fn intent(self) -> CommandIntent {
        match self {
            Self::ListFiles => CommandIntent::ListFiles,
            Self::ReadFile => CommandIntent::ReadFile,
            Self::RunScript | Self::ExecuteAllowlisted => CommandIntent::ExecuteScript,
            Self::KillProcess => CommandIntent::KillProcess,
            Self::Help => CommandIntent::Help,
            Self::Abort => CommandIntent::Abort,
            Self::Unknown => CommandIntent::Unknown,
        }
    }

    /// Verbs this strategy answers to. Empty for the catch-all.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::ListFiles => list::ALIASES,
            Self::ReadFile => read::ALIASES,
            Self::RunScript => run::ALIASES,
            Self::ExecuteAllowlisted => exec::ALIASES,
            Self::KillProcess => control::KILL_ALIASES,
            Self::Help => help::ALIASES,
            Self::Abort => control::ABORT_ALIASES,
            Self::Unknown => &[],
        }
    }

    /// Case-insensitive exact alias match. The catch-all matches anything.
    pub fn matches(self, verb: &str) -> bool {
        match self {
            Self::Unknown => true,
            _ => self.aliases().iter().any(|a| a.eq_ignore_ascii_case(verb)),
        }
    }

    /// Usage text for this verb family.
    pub fn help_text(self, config: &ShellConfig) -> String {
        match self {
            Self::ListFiles => list::HELP.to_string(),
            Self::ReadFile => read::HELP.to_string(),
            Self::RunScript => run::HELP.to_string(),
            Self::ExecuteAllowlisted => exec::help(config),
            Self::KillProcess => control::KILL_HELP.to_string(),
            Self::Help => help::HELP.to_string(),
            Self::Abort => control::ABORT_HELP.to_string(),
            Self::Unknown => control::UNKNOWN_HELP.to_string(),
        }
    }

    pub(crate) async fn execute(self, ctx: &CommandContext, env: &ShellEnv<'_>) -> CommandResult {
        match self {
            Self::ListFiles => list::execute(ctx, env).await,
            Self::ReadFile => read::execute(ctx, env).await,
            Self::RunScript => run::execute(ctx, env).await,
            Self::ExecuteAllowlisted => exec::execute(ctx, env).await,
            Self::KillProcess => control::kill(ctx),
            Self::Help => help::execute(ctx, env),
            Self::Abort => control::abort(),
            Self::Unknown => control::unknown(ctx, env),
        }
    }
}

/// Shared services a strategy executes against.
pub(crate) struct ShellEnv<'a> {
    pub fs: &'a VirtualFileSystem,
    pub events: &'a EventTracker,
    pub runner: &'a dyn ProcessRunner,
    pub config: &'a ShellConfig,
    pub strategies: &'a [Strategy],
}

/// Resolve `arg` against `working_directory`.
///
/// Absolute arguments are kept as given. Relative ones are joined with `/`
/// and a doubled slash collapsed. A trailing slash is dropped except on
/// root.
pub(crate) fn resolve_path(working_directory: &str, arg: &str) -> String {
    let joined = if arg.starts_with('/') {
        arg.to_string()
    } else {
        format!("{working_directory}/{arg}").replace("//", "/")
    };
    match joined.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => joined,
    }
}
