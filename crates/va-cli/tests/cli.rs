//! End-to-end tests for the `va` command-line binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn va() -> Command {
    let mut cmd = Command::cargo_bin("va").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// boot
// ---------------------------------------------------------------------------

#[test]
fn boot_then_eof_exits_cleanly() {
    va().write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("VOID_ARCHIVE_v1.3a"))
        .stdout(predicate::str::contains("TYPE 'START'"));
}

#[test]
fn commands_are_gated_until_start() {
    va().write_stdin("ls\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("AUTHENTICATION_REQUIRED"))
        .stdout(predicate::str::contains("readme.txt").not());
}

#[test]
fn start_shows_welcome() {
    va().write_stdin("start\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("CONNECTION ESTABLISHED"))
        .stdout(predicate::str::contains("SESSION CLOSED: 0 commands logged"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn ls_and_cat() {
    va().write_stdin("start\nls\ncat readme.txt\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("connect.sh"))
        .stdout(predicate::str::contains("Maintenance Shell"))
        .stdout(predicate::str::contains("2 commands logged"));
}

#[test]
fn connect_meets_elara() {
    va().write_stdin("START\nrun connect.sh\nrun connect.sh\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("My name is Elara Vance"))
        .stdout(predicate::str::contains("You're back"));
}

#[test]
fn exec_outside_allow_list_is_refused() {
    va().write_stdin("start\nexec rm -rf /\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command not allowed: rm"));
}

#[test]
fn unknown_verb_suggests() {
    va().write_stdin("start\nlss\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("did you mean 'ls'?"));
}

#[test]
fn quit_stops_reading() {
    va().write_stdin("start\nquit\nls\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session terminated by user."))
        .stdout(predicate::str::contains("system_log").not())
        .stdout(predicate::str::contains("1 commands logged"));
}

#[test]
fn cwd_flag_sets_working_directory() {
    va().args(["--cwd", "secure"])
        .write_stdin("start\ncat containment_log\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("CONTAINMENT LOG"));
}

// ---------------------------------------------------------------------------
// flags
// ---------------------------------------------------------------------------

#[test]
fn commands_table() {
    va().arg("--commands")
        .assert()
        .success()
        .stdout(predicate::str::contains("LIST_FILES"))
        .stdout(predicate::str::contains("./, bash, exec, run, sh"));
}

#[test]
fn bad_session_id_fails() {
    va().args(["--session", "not-a-uuid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid session id"));
}

#[test]
fn explicit_session_id_is_accepted() {
    va().args(["--session", "67e55044-10b1-426f-9247-bb680e5fe0c8"])
        .write_stdin("start\nhelp\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Commands:"));
}
