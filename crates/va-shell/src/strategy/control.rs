//! Placeholder verbs and the catch-all.

use strsim::jaro_winkler;
use va_core::{CommandIntent, CommandResult, ExitCode};

use super::ShellEnv;
use crate::context::CommandContext;

pub(super) const KILL_ALIASES: &[&str] = &["kill", "terminate"];
pub(super) const ABORT_ALIASES: &[&str] = &["abort", "exit", "quit", "bye"];

pub(super) const KILL_HELP: &str = "\
kill <pid>

Send a termination signal to a process

Examples:
  kill 404";

pub(super) const ABORT_HELP: &str = "\
abort

End the current session

Aliases: exit, quit, bye

Examples:
  abort
  exit
  quit";

pub(super) const UNKNOWN_HELP: &str = "\
Unknown command

Use 'help' to list the available commands.";

const SUGGESTION_THRESHOLD: f64 = 0.8;

pub(super) fn kill(ctx: &CommandContext) -> CommandResult {
    match ctx.first_arg() {
        Some(pid) => CommandResult::success(
            format!("Kill signal to process: {pid}"),
            CommandIntent::KillProcess,
        ),
        None => CommandResult::failure("Usage: kill <pid>", ExitCode::Failure),
    }
}

pub(super) fn abort() -> CommandResult {
    CommandResult::success("Session terminated by user.", CommandIntent::Abort)
}

pub(super) fn unknown(ctx: &CommandContext, env: &ShellEnv<'_>) -> CommandResult {
    let suggestion = suggest(&ctx.verb, env);
    CommandResult::unknown(&ctx.verb, suggestion)
}

fn suggest(verb: &str, env: &ShellEnv<'_>) -> Option<&'static str> {
    if verb.is_empty() {
        return None;
    }
    let verb = verb.to_lowercase();
    env.strategies
        .iter()
        .flat_map(|s| s.aliases().iter().copied())
        .map(|alias| (alias, jaro_winkler(&verb, alias)))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(alias, _)| alias)
}

#[cfg(test)]
mod tests {
    use super::super::Strategy;
    use super::super::testing::Harness;
    use super::*;

    #[tokio::test]
    async fn kill_is_a_placeholder() {
        let h = Harness::act_one().await;
        let result = h.run(Strategy::KillProcess, "kill 404").await;
        assert_eq!(result.output(), "Kill signal to process: 404");
        let usage = h.run(Strategy::KillProcess, "terminate").await;
        assert_eq!(usage.error(), Some("[ERROR] Usage: kill <pid>"));
    }

    #[tokio::test]
    async fn abort_acknowledges() {
        let h = Harness::act_one().await;
        let result = h.run(Strategy::Abort, "quit").await;
        assert!(result.is_success());
        assert_eq!(result.intent, Some(CommandIntent::Abort));
        assert!(h.fs.has_session(h.session).await);
    }

    #[tokio::test]
    async fn unknown_suggests_close_alias() {
        let h = Harness::act_one().await;
        let result = h.run(Strategy::Unknown, "lss").await;
        assert_eq!(result.exit_code, ExitCode::UnknownCommand);
        assert_eq!(
            result.error(),
            Some("[ERROR] Unknown command: lss (did you mean 'ls'?)")
        );
    }

    #[tokio::test]
    async fn unknown_without_suggestion() {
        let h = Harness::act_one().await;
        let result = h.run(Strategy::Unknown, "xyzzy").await;
        assert_eq!(result.error(), Some("[ERROR] Unknown command: xyzzy"));

        let blank = h.run(Strategy::Unknown, "").await;
        assert_eq!(blank.exit_code, ExitCode::UnknownCommand);
    }
}
