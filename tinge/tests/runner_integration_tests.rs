// tinge/tests/runner_integration_tests.rs
//! Integration tests for command mode: spawning a child, reading the
//! merged stdout+stderr stream, and the double-blank-line end-of-stream
//! sentinel.

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use predicates::prelude::*;

fn run_tinge(args: &[&str]) -> Assert {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("tinge"));
    cmd.args(args).assert()
}

#[test]
fn command_mode_paints_child_output() {
    run_tinge(&["-r", "x=>red", "-c", "printf 'ax\\nbx\\n'"])
        .success()
        .stdout(predicate::str::diff(
            "a\u{1b}[31mx\u{1b}[0m\nb\u{1b}[31mx\u{1b}[0m\n",
        ));
}

#[test]
fn command_mode_merges_stderr_into_the_stream() {
    run_tinge(&["-r", "nothing=>red", "-c", "echo visible; echo hidden 1>&2"])
        .success()
        .stdout(
            predicate::str::contains("visible").and(predicate::str::contains("hidden")),
        );
}

#[test]
fn single_blank_line_passes_through() {
    run_tinge(&["-r", "z=>red", "-c", "printf 'a\\n\\nb\\n'"])
        .success()
        .stdout(predicate::str::diff("a\n\nb\n"));
}

#[test]
fn double_blank_line_ends_the_stream() {
    // The first blank line is forwarded; the second consecutive one stops
    // the loop, so the trailing "b" is never read.
    run_tinge(&["-r", "z=>red", "-c", "printf 'a\\n\\n\\nb\\n'"])
        .success()
        .stdout(predicate::str::diff("a\n\n"));
}

#[test]
fn command_mode_honors_match_only() {
    run_tinge(&[
        "-m",
        "-r",
        "keep=>green",
        "-c",
        "printf 'keep this\\ndrop that\\n'",
    ])
    .success()
    .stdout(predicate::str::diff("\u{1b}[32mkeep\u{1b}[0m this\n"));
}

#[test]
fn command_mode_honors_blind() {
    run_tinge(&[
        "-r",
        "secret=>blind shown=>cyan",
        "-c",
        "printf 'a secret line\\na shown line\\n'",
    ])
    .success()
    .stdout(predicate::str::diff("a \u{1b}[36mshown\u{1b}[0m line\n"));
}

#[test]
fn silent_child_ends_cleanly() {
    run_tinge(&["-r", "x=>red", "-c", "true"])
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn child_trailing_whitespace_is_trimmed() {
    run_tinge(&["-r", "x=>red", "-c", "printf 'x   \\n'"])
        .success()
        .stdout(predicate::str::diff("\u{1b}[31mx\u{1b}[0m\n"));
}
