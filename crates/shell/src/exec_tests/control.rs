// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Loops, conditionals, and test statements.

use super::*;

#[tokio::test]
async fn for_loop_iterates_words() {
    let (code, out) = run_capture("for x in a b c; do echo $x; done").await;
    assert_eq!(code, 0);
    assert_eq!(out, "a\nb\nc\n");
}

#[tokio::test]
async fn for_loop_iterates_a_range() {
    let (_, out) = run_capture("for n in {1..3}; do echo $n; done").await;
    assert_eq!(out, "1\n2\n3\n");
}

#[tokio::test]
async fn for_else_runs_on_empty_iteration() {
    let (code, out) = run_capture("for x in $(true); do echo $x; else echo none; done").await;
    assert_eq!(code, 0);
    assert_eq!(out, "none\n");
}

#[tokio::test]
async fn while_loop_counts_down() {
    let (code, out) =
        run_capture("i=3; while [[ $i -gt 0 ]]; do echo $i; i=$((i - 1)); done").await;
    assert_eq!(code, 0);
    assert_eq!(out, "3\n2\n1\n");
}

#[tokio::test]
async fn until_loop_counts_up() {
    let (_, out) = run_capture("i=0; until [[ $i -ge 2 ]]; do echo $i; i=$((i + 1)); done").await;
    assert_eq!(out, "0\n1\n");
}

#[tokio::test]
async fn if_takes_the_then_branch() {
    let dir = tempfile::tempdir().expect("tempdir");
    let shell = Shell::new().cwd(dir.path());
    std::fs::create_dir(dir.path().join("testdata")).expect("mkdir");

    let (code, out) = run_in(
        shell,
        "if [[ -d testdata ]]; then echo yes; else echo no; fi",
    )
    .await;
    assert_eq!(code, 0);
    assert_eq!(out, "yes\n");
}

#[tokio::test]
async fn if_takes_the_else_branch() {
    let dir = tempfile::tempdir().expect("tempdir");
    let shell = Shell::new().cwd(dir.path());

    let (code, out) = run_in(
        shell,
        "if [[ -d testdata ]]; then echo yes; else echo no; fi",
    )
    .await;
    assert_eq!(code, 0);
    assert_eq!(out, "no\n");
}

#[tokio::test]
async fn elif_chain_picks_the_matching_branch() {
    let shell = Shell::new().var("n", ["2"]);
    let source = "if [[ $n -eq 1 ]]; then echo one; \
                  elif [[ $n -eq 2 ]]; then echo two; \
                  else echo many; fi";
    let (_, out) = run_in(shell, source).await;
    assert_eq!(out, "two\n");
}

#[tokio::test]
async fn standalone_test_sets_exit_code() {
    let (code, _) = run_capture("[[ -n nonempty ]]").await;
    assert_eq!(code, 0);
    let (code, _) = run_capture("[[ -z nonempty ]]").await;
    assert_eq!(code, 1);
}

#[tokio::test]
async fn test_with_command_chain() {
    let (_, out) = run_capture("[[ 3 -lt 5 ]] && echo smaller").await;
    assert_eq!(out, "smaller\n");
}

#[tokio::test]
async fn failed_test_condition_is_not_fatal() {
    // A test evaluation error (non-numeric operand) counts as false.
    let (code, out) = run_capture("if [[ abc -eq 3 ]]; then echo yes; else echo no; fi").await;
    assert_eq!(code, 0);
    assert_eq!(out, "no\n");
}

#[tokio::test]
async fn loop_bodies_recover_from_errors() {
    let (code, out) =
        run_capture("for x in a b; do definitely-not-a-command-anywhere; echo $x; done").await;
    assert_eq!(code, 0);
    assert_eq!(out, "a\nb\n");
}
