use va_core::{CommandIntent, CommandResult};

use super::{ShellEnv, Strategy};
use crate::config::ShellConfig;
use crate::context::CommandContext;

pub(super) const ALIASES: &[&str] = &["help", "?", "man"];

pub(super) const HELP: &str = "\
help [command]

Display help information

Examples:
  help          Show all available commands
  help ls       Show help for 'ls' command";

pub(super) fn execute(ctx: &CommandContext, env: &ShellEnv<'_>) -> CommandResult {
    let text = render(env.strategies, ctx.first_arg(), env.config);
    CommandResult::success(text, CommandIntent::Help)
}

/// Help for `verb`, or the general listing when no verb is given.
pub(crate) fn render(strategies: &[Strategy], verb: Option<&str>, config: &ShellConfig) -> String {
    match verb {
        Some(verb) => strategies
            .iter()
            .filter(|s| **s != Strategy::Unknown)
            .find(|s| s.matches(verb))
            .map_or_else(|| format!("Unknown command: {verb}"), |s| s.help_text(config)),
        None => general(strategies),
    }
}

fn general(strategies: &[Strategy]) -> String {
    // One row per intent, in first-registration order.
    let mut rows: Vec<(CommandIntent, Vec<&str>)> = Vec::new();
    for strategy in strategies.iter().filter(|s| **s != Strategy::Unknown) {
        let intent = strategy.intent();
        match rows.iter_mut().find(|(i, _)| *i == intent) {
            Some((_, aliases)) => aliases.extend(strategy.aliases()),
            None => rows.push((intent, strategy.aliases().to_vec())),
        }
    }

    let lines: Vec<String> = rows
        .iter()
        .map(|(intent, aliases)| format!("  {:<20} {}", intent.name(), aliases.join(", ")))
        .collect();

    format!(
        "Available Commands:\n\n{}\n\nUse 'help <command>' for more information on a specific command.",
        lines.join("\n")
    )
}
