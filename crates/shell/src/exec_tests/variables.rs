// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Assignments, expansion operators, and environment propagation.

use super::*;

#[tokio::test]
async fn assignment_then_expansion() {
    let mut shell = Shell::new();
    let captured = shell.capture_stdout();
    let code = shell.execute_str("foobar=\"foo\"; echo $foobar").await.expect("execute");
    assert_eq!(code, 0);
    let bytes = captured.lock().await.clone();
    assert_eq!(String::from_utf8_lossy(&bytes), "foo\n");
    assert_eq!(shell.resolve("foobar"), Some(vec!["foo".to_string()]));
}

#[tokio::test]
async fn multi_word_assignment_stores_a_list() {
    let mut shell = Shell::new();
    let _captured = shell.capture_stdout();
    shell.execute_str("list=a b c").await.expect("execute");
    assert_eq!(
        shell.resolve("list"),
        Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    );
}

#[tokio::test]
async fn unquoted_list_splits_into_words() {
    let shell = Shell::new().var("list", ["a", "b"]);
    let (_, out) = run_in(shell, "echo $list").await;
    assert_eq!(out, "a b\n");
}

#[tokio::test]
async fn case_and_length_operators() {
    let shell = Shell::new()
        .var("lower", ["Hello"])
        .var("upper", ["hello"])
        .var("foobar", ["foo"]);
    let (code, out) = run_in(shell, "echo ${lower,,} ${upper^^} ${#foobar}").await;
    assert_eq!(code, 0);
    assert_eq!(out, "hello HELLO 3\n");
}

#[tokio::test]
async fn slice_and_trim_and_replace() {
    let shell = Shell::new().var("path", ["dir/archive.tar.gz"]);
    let (_, out) = run_in(
        shell,
        "echo ${path:0:3}; echo ${path%%.*}; echo ${path#*/}; echo ${path/tar/zip}",
    )
    .await;
    assert_eq!(out, "dir\ndir/archive\narchive.tar.gz\ndir/archive.zip.gz\n");
}

#[tokio::test]
async fn pad_operators() {
    let shell = Shell::new().var("id", ["7"]);
    let (_, out) = run_in(shell, "echo ${id<3:0} ${id>3:.}").await;
    assert_eq!(out, "007 7..\n");
}

#[tokio::test]
async fn val_if_unset_falls_back() {
    let (_, out) = run_capture("echo ${missing:-fallback}").await;
    assert_eq!(out, "fallback\n");
}

#[tokio::test]
async fn set_val_if_unset_defines() {
    let mut shell = Shell::new();
    let captured = shell.capture_stdout();
    shell.execute_str("echo ${missing:=seeded}; echo $missing").await.expect("execute");
    let bytes = captured.lock().await.clone();
    assert_eq!(String::from_utf8_lossy(&bytes), "seeded\nseeded\n");
    assert_eq!(shell.resolve("missing"), Some(vec!["seeded".to_string()]));
}

#[tokio::test]
async fn val_if_set_substitutes() {
    let shell = Shell::new().var("present", ["anything"]);
    let (_, out) = run_in(shell, "echo ${present:+replacement}").await;
    assert_eq!(out, "replacement\n");
}

#[tokio::test]
async fn exit_if_unset_fails_the_statement() {
    let (code, out) = run_capture("echo ${missing:?no value}; echo after").await;
    // The failed statement reports and recovery continues.
    assert_eq!(code, 0);
    assert_eq!(out, "after\n");
}

#[tokio::test]
async fn arithmetic_expansion() {
    let shell = Shell::new().var("n", ["20"]);
    let (_, out) = run_in(shell, "echo $((n * 2 + 2))").await;
    assert_eq!(out, "42\n");
}

#[tokio::test]
async fn special_variables_cannot_be_assigned() {
    let mut shell = Shell::new();
    let _captured = shell.capture_stdout();
    let code = shell.execute_str("PWD=/nowhere").await.expect("execute");
    assert_eq!(code, 1);
    assert!(matches!(
        shell.define("PWD", vec!["x".into()]),
        Err(ExecError::ReadOnly { .. })
    ));
}

#[tokio::test]
async fn exported_variables_reach_children() {
    let mut shell = Shell::new();
    let captured = shell.capture_stdout();
    shell
        .execute_str("GREETING=hello; export GREETING; sh -c 'echo $GREETING'")
        .await
        .expect("execute");
    let bytes = captured.lock().await.clone();
    assert_eq!(String::from_utf8_lossy(&bytes), "hello\n");
}

#[tokio::test]
async fn unexported_variables_stay_private() {
    let (_, out) = run_capture("PRIVATE=secret; sh -c 'echo [$PRIVATE]'").await;
    assert_eq!(out, "[]\n");
}

#[tokio::test]
async fn question_mark_reports_last_code() {
    let (_, out) = run_capture("false; echo $?; true; echo $?").await;
    assert_eq!(out, "1\n0\n");
}

#[tokio::test]
async fn quoted_variable_joins_values() {
    let shell = Shell::new().var("list", ["a", "b", "c"]);
    let (_, out) = run_in(shell, "echo \"$list\"").await;
    assert_eq!(out, "a b c\n");
}
