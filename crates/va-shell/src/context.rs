//! Parsed command lines.

use std::collections::HashMap;

use va_core::{SessionId, normalize_path};

/// Everything a strategy needs to know about one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    /// The session the command runs in.
    pub session_id: SessionId,
    /// First whitespace-separated token, or empty for a blank line.
    pub verb: String,
    /// Remaining tokens.
    pub args: Vec<String>,
    /// Absolute working directory.
    pub working_directory: String,
    /// Environment variables. Currently always empty.
    pub environment: HashMap<String, String>,
}

impl CommandContext {
    /// Split `raw` on whitespace runs into a verb and arguments.
    ///
    /// An empty `working_directory` means `/`.
    pub fn parse(session_id: SessionId, raw: &str, working_directory: &str) -> Self {
        let mut tokens = raw.split_whitespace().map(str::to_string);
        let verb = tokens.next().unwrap_or_default();
        let args = tokens.collect();
        let working_directory = if working_directory.trim().is_empty() {
            "/".to_string()
        } else {
            normalize_path(working_directory.trim())
        };

        Self {
            session_id,
            verb,
            args,
            working_directory,
            environment: HashMap::new(),
        }
    }

    /// The first argument, if any.
    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}
