use tracing::warn;
use va_core::{CommandIntent, CommandResult, ExitCode};

use super::ShellEnv;
use crate::config::ShellConfig;
use crate::context::CommandContext;
use crate::error::ShellError;

pub(super) const ALIASES: &[&str] = &["exec", "bash", "sh"];

pub(super) fn help(config: &ShellConfig) -> String {
    format!(
        "\
exec <command> [args...]

Execute system command (limited for security)

Allowed commands: {}

Examples:
  exec echo \"Hello World\"
  exec date
  exec pwd",
        config.allowed_commands.join(", ")
    )
}

pub(super) async fn execute(ctx: &CommandContext, env: &ShellEnv<'_>) -> CommandResult {
    let Some(program) = ctx.first_arg() else {
        return CommandResult::failure("Usage: exec <command>", ExitCode::Failure);
    };
    if !env.config.is_allowed(program) {
        warn!(session = %ctx.session_id, %program, "exec denied by allow-list");
        return CommandResult::failure(
            format!(
                "Command not allowed: {program}. Allowed: {}",
                env.config.allowed_commands.join(", ")
            ),
            ExitCode::PermissionDenied,
        );
    }

    match env.runner.run(&ctx.args, env.config.exec_timeout).await {
        Ok(out) if out.exit_code == 0 => {
            CommandResult::success(out.output.trim(), CommandIntent::ExecuteScript)
        }
        Ok(out) => CommandResult::failure(out.output.trim(), ExitCode::from(out.exit_code)),
        Err(e @ ShellError::Timeout(_)) => CommandResult::failure(e.to_string(), ExitCode::Timeout),
        Err(e) => CommandResult::failure(format!("Execution error: {e}"), ExitCode::Failure),
    }
}
