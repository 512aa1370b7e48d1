// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the shell executor.

use super::*;

mod basic;
mod builtins;
mod cancel;
mod control;
mod pipes;
mod redirections;
mod substitution;
mod variables;

/// Run a source string in a fresh shell with captured stdout.
///
/// Returns the final exit code and the captured output. Runtime errors are
/// recovered statement by statement, so most failures show up as a non-zero
/// code rather than an `Err`.
pub(crate) async fn run_capture(source: &str) -> (i32, String) {
    run_in(Shell::new(), source).await
}

/// Run a source string in the given shell with captured stdout.
pub(crate) async fn run_in(mut shell: Shell, source: &str) -> (i32, String) {
    let captured = shell.capture_stdout();
    let code = shell
        .execute_str(source)
        .await
        .unwrap_or_else(|err| panic!("execute failed for {source:?}: {err}"));
    let bytes = captured.lock().await.clone();
    (code, String::from_utf8_lossy(&bytes).into_owned())
}
