use va_core::{CommandIntent, CommandResult, EventType, ExitCode, ResponseMessage, VirtualFile};

use super::{ShellEnv, resolve_path};
use crate::context::CommandContext;

pub(super) const ALIASES: &[&str] = &["ls", "list", "dir"];

pub(super) const HELP: &str = "\
ls [OPTIONS] [DIRECTORY]

List directory contents

Options:
  -l        Use a long listing format
  -a        Show hidden files
  -la       Long listing format with hidden files

Examples:
  ls
  ls -la
  ls /path/to/directory";

pub(super) async fn execute(ctx: &CommandContext, env: &ShellEnv<'_>) -> CommandResult {
    let has = |flag: &str| ctx.args.iter().any(|a| a == flag);
    let long = has("-l") || has("-la");
    let show_hidden = has("-a") || has("-la");

    let target = ctx
        .args
        .iter()
        .find(|a| !a.starts_with('-'))
        .map_or(ctx.working_directory.as_str(), String::as_str);
    let path = resolve_path(&ctx.working_directory, target);
    let session = ctx.session_id;

    if !env.fs.exists(session, &path).await {
        return CommandResult::failure(
            format!("No such file or directory: {target}"),
            ExitCode::NotFound,
        );
    }

    let files = env.fs.list_files(session, &path, show_hidden).await;
    if files.is_empty() {
        return CommandResult::success("", CommandIntent::ListFiles);
    }

    let output = if long {
        long_format(&files)
    } else {
        files
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    };
    let mut messages = vec![ResponseMessage::system(output)];

    if path.contains("/secure") {
        messages.extend(
            env.events
                .trigger_once(session, EventType::SecureDirectoryAccessed)
                .await,
        );
    }
    if show_hidden && files.iter().any(|f| f.is_hidden) {
        messages.extend(
            env.events
                .trigger_once(session, EventType::HiddenDirectoryFound)
                .await,
        );
    }

    CommandResult::with_messages(messages, CommandIntent::ListFiles)
}

fn long_format(files: &[VirtualFile]) -> String {
    files
        .iter()
        .map(|f| {
            let size = if f.is_directory {
                "DIR".to_string()
            } else {
                f.size.to_string()
            };
            format!("{}  {}  {}", f.permissions, size, f.name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
