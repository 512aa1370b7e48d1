// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File redirections.

use super::*;

#[tokio::test]
async fn redirect_stdout_to_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let shell = Shell::new().cwd(dir.path());
    let (code, out) = run_in(shell, "echo content > out.txt").await;
    assert_eq!(code, 0);
    assert_eq!(out, "", "redirected output must not reach the shell sink");

    let written = std::fs::read_to_string(dir.path().join("out.txt")).expect("read");
    assert_eq!(written, "content\n");
}

#[tokio::test]
async fn append_accumulates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let shell = Shell::new().cwd(dir.path());
    let (_, _) = run_in(shell, "echo one > log; echo two >> log").await;

    let written = std::fs::read_to_string(dir.path().join("log")).expect("read");
    assert_eq!(written, "one\ntwo\n");
}

#[tokio::test]
async fn redirect_overwrites() {
    let dir = tempfile::tempdir().expect("tempdir");
    let shell = Shell::new().cwd(dir.path());
    let (_, _) = run_in(shell, "echo first > f; echo second > f").await;

    let written = std::fs::read_to_string(dir.path().join("f")).expect("read");
    assert_eq!(written, "second\n");
}

#[tokio::test]
async fn redirect_stdin_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("input.txt"), "from file\n").expect("write");
    let shell = Shell::new().cwd(dir.path());
    let (code, out) = run_in(shell, "cat < input.txt").await;
    assert_eq!(code, 0);
    assert_eq!(out, "from file\n");
}

#[tokio::test]
async fn redirect_stderr_to_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let shell = Shell::new().cwd(dir.path());
    let (_, out) = run_in(shell, "sh -c 'echo out; echo err 1>&2' 2> errs").await;
    assert_eq!(out, "out\n");

    let written = std::fs::read_to_string(dir.path().join("errs")).expect("read");
    assert_eq!(written, "err\n");
}

#[tokio::test]
async fn redirect_both_streams() {
    let dir = tempfile::tempdir().expect("tempdir");
    let shell = Shell::new().cwd(dir.path());
    let (_, out) = run_in(shell, "sh -c 'echo out; echo err 1>&2' &> all").await;
    assert_eq!(out, "");

    let written = std::fs::read_to_string(dir.path().join("all")).expect("read");
    assert!(written.contains("out"));
    assert!(written.contains("err"));
}

#[tokio::test]
async fn redirect_target_expands() {
    let dir = tempfile::tempdir().expect("tempdir");
    let shell = Shell::new().cwd(dir.path()).var("name", ["target"]);
    let (_, _) = run_in(shell, "echo x > $name.txt").await;
    assert!(dir.path().join("target.txt").exists());
}

#[tokio::test]
async fn missing_input_file_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let shell = Shell::new().cwd(dir.path());
    let (code, _) = run_in(shell, "cat < nope.txt").await;
    assert_eq!(code, 2);
}
