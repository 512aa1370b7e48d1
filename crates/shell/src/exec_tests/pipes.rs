// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline execution and exit-code propagation.

use super::*;

#[tokio::test]
async fn two_stage_pipeline() {
    let (code, out) = run_capture("echo hello | cat").await;
    assert_eq!(code, 0);
    assert_eq!(out, "hello\n");
}

#[tokio::test]
async fn three_stage_pipeline() {
    let (code, out) = run_capture("echo one two three | tr ' ' '\n' | wc -l").await;
    assert_eq!(code, 0);
    assert_eq!(out.trim(), "3");
}

#[tokio::test]
async fn exit_code_is_the_rightmost() {
    let (code, _) = run_capture("false | true").await;
    assert_eq!(code, 0);

    let (code, _) = run_capture("true | false").await;
    assert_eq!(code, 1);
}

#[tokio::test]
async fn builtin_feeds_external() {
    let (code, out) = run_capture("seq 3 | tr ' ' '\n' | wc -l").await;
    assert_eq!(code, 0);
    assert_eq!(out.trim(), "3");
}

#[tokio::test]
async fn external_feeds_builtin_stage() {
    // `true` ignores its stdin; the pipeline still completes and takes the
    // rightmost exit code.
    let (code, _) = run_capture("echo ignored | true").await;
    assert_eq!(code, 0);
}

#[tokio::test]
async fn pipe_both_merges_stderr() {
    let (code, out) = run_capture("sh -c 'echo out; echo err 1>&2' |& sort").await;
    assert_eq!(code, 0);
    assert_eq!(out, "err\nout\n");
}

#[tokio::test]
async fn plain_pipe_keeps_stderr_out() {
    let (code, out) = run_capture("sh -c 'echo out; echo err 1>&2' 2> /dev/null | cat").await;
    assert_eq!(code, 0);
    assert_eq!(out, "out\n");
}

#[tokio::test]
async fn pipeline_stage_mutations_stay_local() {
    // `cd` inside a pipeline runs against a stage subshell.
    let mut shell = Shell::new();
    let before = shell.dir().to_path_buf();
    let _captured = shell.capture_stdout();
    let code = shell.execute_str("cd / | cat").await.expect("execute");
    assert_eq!(code, 0);
    assert_eq!(shell.dir(), before);
}

#[tokio::test]
async fn start_failure_aborts_the_pipeline() {
    let mut shell = Shell::new();
    let _captured = shell.capture_stdout();
    // Resolution misses are reported and recovered at the statement level.
    let code = shell
        .execute_str("echo hi | definitely-not-a-command-anywhere")
        .await
        .expect("execute");
    assert_eq!(code, 1);
}

#[tokio::test]
async fn pipeline_composes_with_chains() {
    let (code, out) = run_capture("echo x | cat && echo done_ok").await;
    assert_eq!(code, 0);
    assert_eq!(out, "x\ndone_ok\n");
}
