use va_core::{CommandIntent, CommandResult, EventType, ExitCode};

use super::{ShellEnv, resolve_path};
use crate::content;
use crate::context::CommandContext;

pub(super) const ALIASES: &[&str] = &["run", "./"];

pub(super) const HELP: &str = "\
run <script>

Execute a script file

Examples:
  run connect.sh
  run /path/to/script.sh
  ./ connect.sh";

const CONNECT_SCRIPT: &str = "/connect.sh";

pub(super) async fn execute(ctx: &CommandContext, env: &ShellEnv<'_>) -> CommandResult {
    let Some(arg) = ctx.first_arg() else {
        return CommandResult::failure("Usage: run <script>", ExitCode::Failure);
    };
    let path = resolve_path(
        &ctx.working_directory,
        arg.strip_prefix("./").unwrap_or(arg),
    );
    let session = ctx.session_id;

    if !env.fs.exists(session, &path).await {
        return CommandResult::failure(format!("No such file: {arg}"), ExitCode::Failure);
    }
    if !env.fs.is_executable(session, &path).await {
        return CommandResult::failure(
            format!("Permission denied: {arg} is not executable"),
            ExitCode::PermissionDenied,
        );
    }

    if path == CONNECT_SCRIPT {
        if env
            .events
            .has_occurred(session, EventType::ElaraFirstContact)
            .await
        {
            return CommandResult::with_messages(
                vec![content::reconnect()],
                CommandIntent::ExecuteScript,
            );
        }
        let messages = env
            .events
            .handle(session, EventType::ElaraFirstContact.into())
            .await;
        return CommandResult::with_messages(messages, CommandIntent::ExecuteScript);
    }

    let output = match env.fs.read_file(session, &path).await {
        Some(file) => file.content,
        None => format!("Script executed: {arg}"),
    };
    CommandResult::success(output, CommandIntent::ExecuteScript)
}

#[cfg(test)]
mod tests {
    use super::super::Strategy;
    use super::super::testing::Harness;
    use super::*;
    use crate::content::ELARA;
    use va_core::VirtualFile;

    #[tokio::test]
    async fn first_contact_then_reconnect() {
        let h = Harness::act_one().await;
        let first = h.run(Strategy::RunScript, "run connect.sh").await;
        assert!(first.is_success());
        assert!(first.messages.len() > 1);
        assert!(first.messages.iter().any(|m| m.is_spoken_by(ELARA)));
        assert!(first.messages.iter().any(|m| m.delay_ms > 0));

        let again = h.run(Strategy::RunScript, "run ./connect.sh").await;
        assert_eq!(again.messages.len(), 1);
        assert!(again.output().contains("You're back"));
        assert_eq!(again.intent, Some(CommandIntent::ExecuteScript));
    }

    #[tokio::test]
    async fn non_executable_is_denied() {
        let h = Harness::act_one().await;
        let result = h.run(Strategy::RunScript, "run readme.txt").await;
        assert_eq!(result.exit_code, ExitCode::PermissionDenied);
        assert_eq!(
            result.error(),
            Some("[ERROR] Permission denied: readme.txt is not executable")
        );
    }

    #[tokio::test]
    async fn missing_script() {
        let h = Harness::act_one().await;
        let result = h.run(Strategy::RunScript, "run nope.sh").await;
        assert_eq!(result.exit_code, ExitCode::Failure);
        assert_eq!(result.error(), Some("[ERROR] No such file: nope.sh"));
    }

    #[tokio::test]
    async fn usage_without_argument() {
        let h = Harness::act_one().await;
        let result = h.run(Strategy::RunScript, "run").await;
        assert_eq!(result.error(), Some("[ERROR] Usage: run <script>"));
    }

    #[tokio::test]
    async fn other_scripts_echo_content() {
        let h = Harness::act_one().await;
        h.fs.write_file(
            h.session,
            VirtualFile::script("/secure/probe.sh", "probe.sh", "probing..."),
        )
        .await;
        let result = h.run_in(Strategy::RunScript, "run probe.sh", "/secure").await;
        assert_eq!(result.output(), "probing...");
        assert!(!h.events.has_occurred(h.session, EventType::ElaraFirstContact).await);
    }
}
