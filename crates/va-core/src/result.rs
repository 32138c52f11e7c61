use std::fmt;

use serde::{Deserialize, Serialize};

use crate::history::CommandRecord;
use crate::message::{MessageKind, ResponseMessage};
use crate::session::SessionId;

/// Process-style exit status carried by every command result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ExitCode {
    /// `0`: the command succeeded.
    Success,
    /// `1`: bad usage, read error, or an internal error caught at the strategy boundary.
    Failure,
    /// `2`: the target does not exist.
    NotFound,
    /// `124`: the external process timed out.
    Timeout,
    /// `126`: permission or allow-list denial.
    PermissionDenied,
    /// `127`: no strategy recognizes the verb.
    UnknownCommand,
    /// Any other code, propagated from an external process.
    Other(i32),
}

impl ExitCode {
    /// The numeric exit code.
    pub fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
            Self::NotFound => 2,
            Self::Timeout => 124,
            Self::PermissionDenied => 126,
            Self::UnknownCommand => 127,
            Self::Other(code) => code,
        }
    }
}

impl From<i32> for ExitCode {
    fn from(code: i32) -> Self {
        match code {
            0 => Self::Success,
            1 => Self::Failure,
            2 => Self::NotFound,
            124 => Self::Timeout,
            126 => Self::PermissionDenied,
            127 => Self::UnknownCommand,
            other => Self::Other(other),
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.code()
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Coarse category tag attached to a result for history and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandIntent {
    /// Directory listing.
    ListFiles,
    /// Reading a file.
    ReadFile,
    /// Running a game script or an allow-listed host command.
    ExecuteScript,
    /// Process termination placeholder.
    KillProcess,
    /// Help text.
    Help,
    /// Session termination acknowledgement.
    Abort,
    /// Unrecognized verb.
    Unknown,
}

impl CommandIntent {
    /// The wire name of this intent (e.g. `LIST_FILES`).
    pub fn name(self) -> &'static str {
        match self {
            Self::ListFiles => "LIST_FILES",
            Self::ReadFile => "READ_FILE",
            Self::ExecuteScript => "EXECUTE_SCRIPT",
            Self::KillProcess => "KILL_PROCESS",
            Self::Help => "HELP",
            Self::Abort => "ABORT",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for CommandIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The structured outcome of executing one command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    /// Ordered output lines.
    pub messages: Vec<ResponseMessage>,
    /// Exit status.
    pub exit_code: ExitCode,
    /// Category of the command that produced this result.
    pub intent: Option<CommandIntent>,
}

impl CommandResult {
    /// A successful result with a single system message.
    pub fn success(output: impl Into<String>, intent: CommandIntent) -> Self {
        Self::with_messages(vec![ResponseMessage::system(output)], intent)
    }

    /// A successful result with several messages.
    pub fn with_messages(messages: Vec<ResponseMessage>, intent: CommandIntent) -> Self {
        Self {
            messages,
            exit_code: ExitCode::Success,
            intent: Some(intent),
        }
    }

    /// A failed result carrying one error message.
    pub fn failure(error: impl AsRef<str>, exit_code: ExitCode) -> Self {
        Self {
            messages: vec![ResponseMessage::error(format!(
                "[ERROR] {}",
                error.as_ref()
            ))],
            exit_code,
            intent: None,
        }
    }

    /// The result for a verb no strategy recognizes, optionally naming the
    /// closest known alias.
    pub fn unknown(verb: &str, suggestion: Option<&str>) -> Self {
        let text = match suggestion {
            Some(alias) => format!("[ERROR] Unknown command: {verb} (did you mean '{alias}'?)"),
            None => format!("[ERROR] Unknown command: {verb}"),
        };
        Self {
            messages: vec![ResponseMessage::error(text)],
            exit_code: ExitCode::UnknownCommand,
            intent: Some(CommandIntent::Unknown),
        }
    }

    /// Returns true if the exit code is zero.
    pub fn is_success(&self) -> bool {
        self.exit_code == ExitCode::Success
    }

    /// All message texts joined with newlines.
    pub fn output(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Text of the first error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.kind == MessageKind::Error)
            .map(|m| m.text.as_str())
    }

    /// Flatten this result into a history record for `command_line`.
    pub fn to_record(&self, session_id: SessionId, command_line: &str) -> CommandRecord {
        let response = if self.is_success() {
            self.output()
        } else {
            self.error().unwrap_or("Unknown error").to_string()
        };
        CommandRecord::new(session_id, command_line, response, self.intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_roundtrip() {
        for code in [0, 1, 2, 124, 126, 127, 3, -1] {
            assert_eq!(ExitCode::from(code).code(), code);
        }
        assert_eq!(ExitCode::from(42), ExitCode::Other(42));
    }

    #[test]
    fn exit_code_serializes_as_integer() {
        let json = serde_json::to_string(&ExitCode::PermissionDenied).unwrap();
        assert_eq!(json, "126");
        let back: ExitCode = serde_json::from_str("124").unwrap();
        assert_eq!(back, ExitCode::Timeout);
    }

    #[test]
    fn success_views() {
        let result = CommandResult::with_messages(
            vec![
                ResponseMessage::system("one"),
                ResponseMessage::narrator("Elara", "two"),
            ],
            CommandIntent::ListFiles,
        );
        assert!(result.is_success());
        assert_eq!(result.output(), "one\ntwo");
        assert!(result.error().is_none());
    }

    #[test]
    fn failure_prefixes_error() {
        let result = CommandResult::failure("No such file: x", ExitCode::NotFound);
        assert!(!result.is_success());
        assert_eq!(result.exit_code.code(), 2);
        assert_eq!(result.error(), Some("[ERROR] No such file: x"));
        assert!(result.intent.is_none());
    }

    #[test]
    fn unknown_with_suggestion() {
        let result = CommandResult::unknown("lss", Some("ls"));
        assert_eq!(result.exit_code, ExitCode::UnknownCommand);
        assert_eq!(result.intent, Some(CommandIntent::Unknown));
        assert!(result.output().contains("did you mean 'ls'?"));
    }

    #[test]
    fn record_uses_output_or_error() {
        let session = SessionId::new();

        let ok = CommandResult::success("listing", CommandIntent::ListFiles);
        let record = ok.to_record(session, "ls");
        assert_eq!(record.response, "listing");
        assert_eq!(record.intent, Some(CommandIntent::ListFiles));

        let failed = CommandResult::failure("nope", ExitCode::Failure);
        let record = failed.to_record(session, "cat");
        assert_eq!(record.response, "[ERROR] nope");
        assert_eq!(record.command, "cat");
    }

    #[test]
    fn intent_wire_name() {
        let json = serde_json::to_string(&CommandIntent::ExecuteScript).unwrap();
        assert_eq!(json, "\"EXECUTE_SCRIPT\"");
        assert_eq!(CommandIntent::ListFiles.to_string(), "LIST_FILES");
    }
}
