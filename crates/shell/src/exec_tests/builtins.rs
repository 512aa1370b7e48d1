// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Builtin behaviors: directories, aliases, registry introspection.

use super::*;

#[tokio::test]
async fn seq_prints_one_space_joined_line() {
    let (code, out) = run_capture("seq 1 2 5").await;
    assert_eq!(code, 0);
    assert_eq!(out, "1 3 5\n");
}

#[tokio::test]
async fn seq_single_and_double_argument_forms() {
    let (_, out) = run_capture("seq 3").await;
    assert_eq!(out, "1 2 3\n");
    let (_, out) = run_capture("seq 2 4").await;
    assert_eq!(out, "2 3 4\n");
}

#[tokio::test]
async fn seq_descends_when_reversed() {
    let (_, out) = run_capture("seq 3 1").await;
    assert_eq!(out, "3 2 1\n");
}

#[tokio::test]
async fn seq_rejects_bad_arguments() {
    let (code, _) = run_capture("seq x").await;
    assert_eq!(code, 1);
}

#[tokio::test]
async fn cd_and_pwd() {
    let dir = tempfile::tempdir().expect("tempdir");
    let canonical = dir.path().canonicalize().expect("canonicalize");
    let mut shell = Shell::new();
    let captured = shell.capture_stdout();
    let source = format!("cd {}; pwd", canonical.display());
    let code = shell.execute_str(&source).await.expect("execute");
    assert_eq!(code, 0);
    let bytes = captured.lock().await.clone();
    assert_eq!(
        String::from_utf8_lossy(&bytes).trim(),
        canonical.display().to_string()
    );
    assert_eq!(shell.dir(), canonical);
}

#[tokio::test]
async fn cd_updates_pwd_and_oldpwd() {
    let dir = tempfile::tempdir().expect("tempdir");
    let canonical = dir.path().canonicalize().expect("canonicalize");
    let shell = Shell::new();
    let source = format!("cd {}; echo $PWD; echo $OLDPWD", canonical.display());
    let (_, out) = run_in(shell, &source).await;
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some(canonical.display().to_string().as_str()));
    assert!(lines.next().is_some());
}

#[tokio::test]
async fn cd_to_missing_directory_fails() {
    let (code, _) = run_capture("cd /definitely/not/a/real/path").await;
    assert_eq!(code, 1);
}

#[tokio::test]
async fn pushd_popd_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let canonical = dir.path().canonicalize().expect("canonicalize");
    let mut shell = Shell::new();
    let start = shell.dir().to_path_buf();
    let _captured = shell.capture_stdout();

    let source = format!("pushd {}", canonical.display());
    shell.execute_str(&source).await.expect("execute");
    assert_eq!(shell.dir(), canonical);

    shell.execute_str("popd").await.expect("execute");
    assert_eq!(shell.dir(), start);
}

#[tokio::test]
async fn popd_on_empty_stack_fails() {
    let (code, _) = run_capture("popd").await;
    assert_eq!(code, 1);
}

#[tokio::test]
async fn dirs_lists_the_stack() {
    let dir = tempfile::tempdir().expect("tempdir");
    let canonical = dir.path().canonicalize().expect("canonicalize");
    let mut shell = Shell::new();
    let start = shell.dir().to_path_buf();
    let captured = shell.capture_stdout();

    let source = format!("pushd {}; dirs", canonical.display());
    shell.execute_str(&source).await.expect("execute");
    let bytes = captured.lock().await.clone();
    let output = String::from_utf8_lossy(&bytes);
    let last_line = output.lines().last().expect("dirs output");
    assert_eq!(
        last_line,
        format!("{} {}", canonical.display(), start.display())
    );
}

#[tokio::test]
async fn alias_substitutes_argv0() {
    let (code, out) = run_capture("alias greet='echo hello'; greet world").await;
    assert_eq!(code, 0);
    assert_eq!(out, "hello world\n");
}

#[tokio::test]
async fn alias_expansion_is_single_level() {
    // An alias pointing at its own name resolves to the real command.
    let (code, out) = run_capture("alias echo='echo aliased'; echo hi").await;
    assert_eq!(code, 0);
    assert_eq!(out, "aliased hi\n");
}

#[tokio::test]
async fn alias_listing_and_removal() {
    let (_, out) = run_capture("alias ll='echo long'; alias").await;
    assert_eq!(out, "alias ll='echo long'\n");

    let (code, _) = run_capture("alias ll='echo long'; unalias ll; ll").await;
    // After removal the name misses resolution.
    assert_eq!(code, 1);
}

#[tokio::test]
async fn alias_rejects_compound_bodies() {
    let (code, _) = run_capture("alias bad='a && b'").await;
    assert_eq!(code, 1);
}

#[tokio::test]
async fn type_classifies_names() {
    let (_, out) = run_capture("alias ll='echo x'; type ll cd").await;
    assert_eq!(out, "ll is an alias for 'echo x'\ncd is a shell builtin\n");
}

#[tokio::test]
async fn type_finds_externals() {
    let (code, out) = run_capture("type sh").await;
    assert_eq!(code, 0);
    assert!(out.starts_with("sh is /"), "got {out:?}");
}

#[tokio::test]
async fn builtin_bypasses_aliases() {
    let (_, out) = run_capture("alias pwd='echo not-pwd'; builtin pwd").await;
    assert!(out.ends_with('\n'));
    assert_ne!(out, "not-pwd\n");
}

#[tokio::test]
async fn command_bypasses_user_commands() {
    let mut shell = Shell::new();
    shell.register("true", "echo shadowed").expect("register");
    let (code, out) = run_in(shell, "command true").await;
    assert_eq!(code, 0);
    assert_eq!(out, "");
}

#[tokio::test]
async fn enable_disables_and_restores() {
    // While disabled, `seq` resolves to the external seq (or misses).
    let (code, _) = run_capture("enable -n seq; enable seq; seq 1").await;
    assert_eq!(code, 0);
}

#[tokio::test]
async fn enable_rejects_dynamic_loading() {
    let (code, _) = run_capture("enable -f plugin.so").await;
    assert_eq!(code, 1);
}

#[tokio::test]
async fn help_lists_builtins() {
    let (code, out) = run_capture("help").await;
    assert_eq!(code, 0);
    for name in ["cd", "exit", "alias", "seq"] {
        assert!(out.contains(name), "help output missing {name}");
    }
}

#[tokio::test]
async fn help_shows_usage_for_one() {
    let (_, out) = run_capture("help seq").await;
    assert!(out.contains("seq [first [step]] last"));
}

#[tokio::test]
async fn builtins_lists_all_twenty() {
    let (_, out) = run_capture("builtins").await;
    assert_eq!(out.lines().count(), 20);
}

#[tokio::test]
async fn readonly_blocks_later_assignment() {
    let mut shell = Shell::new();
    let _captured = shell.capture_stdout();
    let code = shell.execute_str("fixed=1; readonly fixed; fixed=2").await.expect("execute");
    assert_eq!(code, 1);
    assert_eq!(shell.resolve("fixed"), Some(vec!["1".to_string()]));
}

#[tokio::test]
async fn export_with_assignment_form() {
    let (_, out) = run_capture("export MARKER=exported; sh -c 'echo $MARKER'").await;
    assert_eq!(out, "exported\n");
}

#[tokio::test]
async fn env_includes_exported_variables() {
    let (_, out) = run_capture("export BRINE_TEST_MARKER=present; env").await;
    assert!(out.contains("BRINE_TEST_MARKER=present"));
}

#[tokio::test]
async fn user_commands_run_with_positionals() {
    let mut shell = Shell::new();
    shell.register("greet", "echo hi $1").expect("register");
    let (code, out) = run_in(shell, "greet world").await;
    assert_eq!(code, 0);
    assert_eq!(out, "hi world\n");
}
