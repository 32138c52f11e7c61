use va_core::{CommandIntent, CommandResult, EventType, ExitCode, ResponseMessage};

use super::{ShellEnv, resolve_path};
use crate::context::CommandContext;

pub(super) const ALIASES: &[&str] = &["cat", "read", "view"];

pub(super) const HELP: &str = "\
cat <file>

Concatenate and display file contents

Examples:
  cat file.txt
  cat /path/to/file.log";

const SYSTEM_LOG: &str = "/system_log";

pub(super) async fn execute(ctx: &CommandContext, env: &ShellEnv<'_>) -> CommandResult {
    let Some(arg) = ctx.first_arg() else {
        return CommandResult::failure("Usage: cat <file>", ExitCode::Failure);
    };
    let path = resolve_path(&ctx.working_directory, arg);
    let session = ctx.session_id;

    if !env.fs.exists(session, &path).await {
        return CommandResult::failure(format!("No such file: {arg}"), ExitCode::Failure);
    }
    let Some(file) = env.fs.read_file(session, &path).await else {
        return CommandResult::failure(format!("Cannot read file: {arg}"), ExitCode::Failure);
    };
    if file.is_directory {
        return CommandResult::failure(format!("{arg} is a directory"), ExitCode::Failure);
    }

    let mut messages = vec![ResponseMessage::system(file.content)];
    if path == SYSTEM_LOG {
        messages.extend(
            env.events
                .trigger_once(session, EventType::SystemLogRead)
                .await,
        );
    }
    CommandResult::with_messages(messages, CommandIntent::ReadFile)
}
