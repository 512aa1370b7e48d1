// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cancellation through the execution token.

use super::*;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn pre_cancelled_token_stops_immediately() {
    let token = CancellationToken::new();
    token.cancel();

    let mut shell = Shell::new();
    let _captured = shell.capture_stdout();
    let err = shell
        .execute(token, "echo never", "test", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, ExecError::Canceled));
}

#[tokio::test]
async fn cancellation_kills_a_running_command() {
    let token = CancellationToken::new();
    let trigger = token.clone();

    let handle = tokio::spawn(async move {
        let mut shell = Shell::new();
        let _captured = shell.capture_stdout();
        shell.execute(token, "sleep 30", "test", &[]).await
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    trigger.cancel();

    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("cancellation must not hang")
        .expect("task must not panic");
    assert!(matches!(result, Err(ExecError::Canceled)));
}

#[tokio::test]
async fn cancellation_stops_a_loop() {
    let token = CancellationToken::new();
    let trigger = token.clone();

    let handle = tokio::spawn(async move {
        let mut shell = Shell::new();
        let _captured = shell.capture_stdout();
        shell
            .execute(token, "while true; do sleep 1; done", "test", &[])
            .await
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    trigger.cancel();

    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("cancellation must not hang")
        .expect("task must not panic");
    assert!(matches!(result, Err(ExecError::Canceled)));
}
