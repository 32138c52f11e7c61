use std::io::{self, Write};
use std::sync::Arc;

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use va_core::{CommandIntent, SessionId};
use va_shell::{Shell, ShellConfig};
use va_state::{GameStateService, HistoryService, InMemoryCommandHistory, InMemoryGameStates};

use crate::render::print_sequence;

pub fn print_commands(config: &ShellConfig) {
    let shell = Shell::new(config.clone());
    for (intent, aliases) in shell.commands_by_intent() {
        println!("{:<20} {}", intent.name().bold(), aliases.join(", "));
    }
}

fn prompt() -> Result<(), String> {
    print!("> ");
    io::stdout().flush().map_err(|e| e.to_string())
}

pub async fn run(config: ShellConfig, session: SessionId, pace: bool) -> Result<(), String> {
    let wd = config.default_working_directory.clone();
    let shell = Shell::new(config);
    let states = Arc::new(InMemoryGameStates::new());
    let progress = GameStateService::new(states.clone(), states);
    let history = HistoryService::new(Arc::new(InMemoryCommandHistory::new()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_sequence(&shell.boot(), pace).await;
    loop {
        prompt()?;
        match lines.next_line().await.map_err(|e| e.to_string())? {
            None => return Ok(()),
            Some(line) if line.trim().eq_ignore_ascii_case("start") => break,
            Some(_) => println!("> SYS: AUTHENTICATION_REQUIRED."),
        }
    }

    print_sequence(&shell.start_session(session).await, pace).await;
    progress
        .get_or_create(session)
        .await
        .map_err(|e| e.to_string())?;

    loop {
        prompt()?;
        let Some(line) = lines.next_line().await.map_err(|e| e.to_string())? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let before = shell.events().occurred(session).await;
        let result = shell
            .execute_and_record(session, &line, Some(wd.as_str()), history.repository())
            .await;
        print_sequence(&result.messages, pace).await;

        let fired = shell.events().occurred(session).await;
        for event in fired.into_iter().filter(|e| !before.contains(e)) {
            if let Err(e) = progress.apply_event(session, event).await {
                warn!(%session, error = %e, "failed to record progress");
            }
        }

        if result.intent == Some(CommandIntent::Abort) {
            break;
        }
    }

    let count = history.count(session).await.map_err(|e| e.to_string())?;
    shell.end_session(session).await;
    println!("{}", format!("[ SESSION CLOSED: {count} commands logged ]").dimmed());
    Ok(())
}
