//! End-to-end play-through scenarios against a fresh act-one session.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use va_core::{CommandIntent, ExitCode, SessionId};
use va_shell::{ProcessOutput, ProcessRunner, Shell, ShellConfig, ShellError, ShellResult};

struct HangingRunner;

#[async_trait]
impl ProcessRunner for HangingRunner {
    async fn run(&self, _args: &[String], timeout: Duration) -> ShellResult<ProcessOutput> {
        Err(ShellError::Timeout(timeout))
    }
}

async fn fresh() -> (Shell, SessionId) {
    let shell = Shell::default();
    let session = SessionId::new();
    shell.start_session(session).await;
    (shell, session)
}

#[tokio::test]
async fn fresh_root_listing() {
    let (shell, s) = fresh().await;
    let result = shell.execute(s, "ls", None).await;
    assert!(result.is_success());
    let output = result.output();
    let names: Vec<&str> = output.lines().collect();
    assert_eq!(names, vec!["connect.sh", "readme.txt", "system_log"]);
}

#[tokio::test]
async fn readme_names_the_archive() {
    let (shell, s) = fresh().await;
    let result = shell.execute(s, "cat readme.txt", None).await;
    assert!(result.is_success());
    assert!(result.output().contains("VOID_ARCHIVE"));
}

#[tokio::test]
async fn connect_then_reconnect() {
    let (shell, s) = fresh().await;
    let first = shell.execute(s, "run connect.sh", None).await;
    assert!(first.is_success());
    assert!(first.messages.iter().any(|m| m.is_spoken_by("Elara")));
    assert!(first.messages.iter().any(|m| m.delay_ms > 0));

    let second = shell.execute(s, "run connect.sh", None).await;
    assert!(second.is_success());
    assert_eq!(second.messages.len(), 1);
    assert!(second.messages[0].text.contains("You're back"));
}

#[tokio::test]
async fn secure_listing_alerts_warden() {
    let (shell, s) = fresh().await;
    let result = shell.execute(s, "ls /secure", None).await;
    assert!(result.is_success());
    assert!(
        result
            .messages
            .iter()
            .any(|m| m.is_spoken_by("Warden") && m.text.contains("UNAUTHORIZED"))
    );
}

#[tokio::test]
async fn hidden_secure_listing_wakes_elara() {
    let (shell, s) = fresh().await;
    let result = shell.execute(s, "ls -a /secure", None).await;
    assert!(result.output().contains(".warden_notes"));
    assert!(result.messages.iter().any(|m| m.is_spoken_by("Elara")));
}

#[tokio::test]
async fn exec_enforces_allow_list() {
    let (shell, s) = fresh().await;
    let denied = shell.execute(s, "exec rm -rf /", None).await;
    assert_eq!(denied.exit_code.code(), 126);

    let echoed = shell.execute(s, "exec echo hello", None).await;
    assert!(echoed.is_success());
    assert_eq!(echoed.output(), "hello");
}

#[tokio::test]
async fn exec_timeout_is_124() {
    let shell = Shell::with_runner(
        ShellConfig::default().with_exec_timeout(Duration::from_millis(10)),
        Arc::new(HangingRunner),
    );
    let s = SessionId::new();
    shell.start_session(s).await;
    let result = shell.execute(s, "exec date", None).await;
    assert_eq!(result.exit_code, ExitCode::Timeout);
}

#[tokio::test]
async fn unknown_verb_is_127() {
    let (shell, s) = fresh().await;
    let result = shell.execute(s, "teleport home", None).await;
    assert_eq!(result.exit_code.code(), 127);
    assert_eq!(result.intent, Some(CommandIntent::Unknown));

    let blank = shell.execute(s, "   ", None).await;
    assert_eq!(blank.exit_code.code(), 127);
}

#[tokio::test]
async fn never_created_path_is_not_found() {
    let (shell, s) = fresh().await;
    for path in ["/nowhere", "ghost", "/secure/vault"] {
        let result = shell.execute(s, &format!("ls {path}"), None).await;
        assert_eq!(result.exit_code.code(), 2, "{path}");
    }
}

#[tokio::test]
async fn system_log_reaction_plays_once() {
    let (shell, s) = fresh().await;
    let first = shell.execute(s, "cat system_log", None).await;
    assert_eq!(first.messages.len(), 3);
    let second = shell.execute(s, "read system_log", None).await;
    assert_eq!(second.messages.len(), 1);
}

#[tokio::test]
async fn verbs_are_case_insensitive() {
    let (shell, s) = fresh().await;
    let result = shell.execute(s, "CAT readme.txt", None).await;
    assert_eq!(result.intent, Some(CommandIntent::ReadFile));
}

#[tokio::test]
async fn sessions_do_not_share_events() {
    let (shell, a) = fresh().await;
    let b = SessionId::new();
    shell.start_session(b).await;

    shell.execute(a, "run connect.sh", None).await;
    let fresh_in_b = shell.execute(b, "run connect.sh", None).await;
    assert!(fresh_in_b.messages.len() > 1);
}

#[tokio::test]
async fn concurrent_secure_listings_fire_warden_once() {
    let shell = Arc::new(Shell::default());
    let s = SessionId::new();
    shell.start_session(s).await;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let shell = Arc::clone(&shell);
            tokio::spawn(async move { shell.execute(s, "ls /secure", None).await })
        })
        .collect();

    let mut warned = 0;
    for handle in handles {
        let result = handle.await.unwrap();
        if result.messages.iter().any(|m| m.is_spoken_by("Warden")) {
            warned += 1;
        }
    }
    assert_eq!(warned, 1);
}

#[test]
fn available_commands_are_sorted() {
    let shell = Shell::default();
    let commands = shell.available_commands();
    assert!(commands.windows(2).all(|w| w[0] < w[1]));
    assert!(commands.contains(&"ls".to_string()));
}
