// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command substitution and subshell isolation.

use super::*;

#[tokio::test]
async fn substitution_captures_stdout() {
    let (code, out) = run_capture("echo $(echo inner)").await;
    assert_eq!(code, 0);
    assert_eq!(out, "inner\n");
}

#[tokio::test]
async fn substitution_splits_on_ifs() {
    let (_, out) = run_capture("for x in $(seq 1 3); do echo got $x; done").await;
    assert_eq!(out, "got 1\ngot 2\ngot 3\n");
}

#[tokio::test]
async fn substitution_nests() {
    let (_, out) = run_capture("echo $(echo $(echo deep))").await;
    assert_eq!(out, "deep\n");
}

#[tokio::test]
async fn substitution_in_assignment() {
    let mut shell = Shell::new();
    let _captured = shell.capture_stdout();
    shell.execute_str("version=$(echo 1.2.3)").await.expect("execute");
    assert_eq!(shell.resolve("version"), Some(vec!["1.2.3".to_string()]));
}

#[tokio::test]
async fn substitution_concatenates_with_literals() {
    let (_, out) = run_capture("echo v$(echo 42)!").await;
    assert_eq!(out, "v42!\n");
}

#[tokio::test]
async fn substitution_sees_shell_variables() {
    let shell = Shell::new().var("name", ["world"]);
    let (_, out) = run_in(shell, "echo $(echo hey $name)").await;
    assert_eq!(out, "hey world\n");
}

#[tokio::test]
async fn substitution_env_writes_do_not_escape() {
    let mut shell = Shell::new();
    let _captured = shell.capture_stdout();
    // `:=` defines in the subshell's scope only.
    shell.execute_str("echo $(echo ${inner:=hidden})").await.expect("execute");
    assert_eq!(shell.resolve("inner"), None);
}

#[tokio::test]
async fn substitution_inside_quotes() {
    let (_, out) = run_capture("echo \"result: $(echo ok)\"").await;
    assert_eq!(out, "result: ok\n");
}

#[tokio::test]
async fn subshell_keeps_aliases() {
    let (_, out) = run_capture("alias shout='echo loud'; echo $(shout)").await;
    assert_eq!(out, "loud\n");
}
