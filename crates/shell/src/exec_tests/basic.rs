// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simple commands, exit codes, and AND/OR chains.

use super::*;

#[tokio::test]
async fn simple_echo() {
    let (code, out) = run_capture("echo foobar").await;
    assert_eq!(code, 0);
    assert_eq!(out, "foobar\n");
}

#[tokio::test]
async fn true_and_false_exit_codes() {
    let (code, _) = run_capture("true").await;
    assert_eq!(code, 0);
    let (code, _) = run_capture("false").await;
    assert_eq!(code, 1);
}

#[tokio::test]
async fn and_chain_runs_on_success() {
    let (code, out) = run_capture("true && echo ok || echo ko").await;
    assert_eq!(code, 0);
    assert_eq!(out, "ok\n");
}

#[tokio::test]
async fn or_chain_runs_on_failure() {
    let (code, out) = run_capture("false && echo ok || echo ko").await;
    assert_eq!(code, 0);
    assert_eq!(out, "ko\n");
}

#[tokio::test]
async fn and_skips_after_failure() {
    let (code, out) = run_capture("false && echo never").await;
    assert_eq!(code, 1);
    assert_eq!(out, "");
}

#[tokio::test]
async fn command_not_found_sets_nonzero_code() {
    // The miss reports to stderr and the chain branches on the code.
    let (code, out) = run_capture("definitely-not-a-command-anywhere || echo fallback").await;
    assert_eq!(code, 0);
    assert_eq!(out, "fallback\n");
}

#[tokio::test]
async fn nested_braces_expand_into_one_argv() {
    let (code, out) = run_capture("echo {{A,B},{1..3}}").await;
    assert_eq!(code, 0);
    assert_eq!(out, "A B 1 2 3\n");
}

#[tokio::test]
async fn statements_run_in_order() {
    let (_, out) = run_capture("echo one; echo two; echo three").await;
    assert_eq!(out, "one\ntwo\nthree\n");
}

#[tokio::test]
async fn errors_recover_at_statement_boundaries() {
    let (code, out) = run_capture("definitely-not-a-command-anywhere; echo after").await;
    assert_eq!(code, 0);
    assert_eq!(out, "after\n");
}

#[tokio::test]
async fn exit_ends_the_loop() {
    let mut shell = Shell::new();
    let captured = shell.capture_stdout();
    let code = shell.execute_str("echo before; exit 3; echo after").await.expect("execute");
    assert_eq!(code, 3);
    let bytes = captured.lock().await.clone();
    assert_eq!(String::from_utf8_lossy(&bytes), "before\n");
}

#[tokio::test]
async fn exit_defaults_to_last_code() {
    let mut shell = Shell::new();
    let code = shell.execute_str("false; exit").await.expect("execute");
    assert_eq!(code, 1);
}

#[tokio::test]
async fn echo_mode_prints_commands() {
    let shell = Shell::new().echo(true);
    let (_, out) = run_in(shell, "echo hi").await;
    assert_eq!(out, "echo hi\nhi\n");
}

#[tokio::test]
async fn script_args_bind_positionals() {
    let mut shell = Shell::new();
    let captured = shell.capture_stdout();
    let args = vec!["alpha".to_string(), "beta".to_string()];
    let code = shell
        .execute(
            tokio_util::sync::CancellationToken::new(),
            "echo $0 $1 $2 $#",
            "script",
            &args,
        )
        .await
        .expect("execute");
    assert_eq!(code, 0);
    let bytes = captured.lock().await.clone();
    assert_eq!(String::from_utf8_lossy(&bytes), "script alpha beta 2\n");
}

#[tokio::test]
async fn empty_expansion_is_an_error() {
    let (code, out) = run_capture("$(true) || echo empty").await;
    assert_eq!(code, 0);
    assert_eq!(out, "empty\n");
}
