// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the scoped environment and special variables.

use super::*;
use crate::exec::ExecError;

#[test]
fn define_and_resolve() {
    let mut env = Environment::new();
    env.define("greeting", vec!["hello".into(), "world".into()]).expect("define");
    assert_eq!(
        env.resolve("greeting"),
        Some(vec!["hello".to_string(), "world".to_string()])
    );
}

#[test]
fn missing_name_resolves_to_none() {
    assert_eq!(Environment::new().resolve("nope"), None);
}

#[test]
fn child_scope_sees_parent() {
    let mut parent = Environment::new();
    parent.define("shared", vec!["value".into()]).expect("define");
    let child = parent.child();
    assert_eq!(child.resolve("shared"), Some(vec!["value".to_string()]));
}

#[test]
fn child_definitions_shadow_and_stay_local() {
    let mut parent = Environment::new();
    parent.define("name", vec!["outer".into()]).expect("define");

    let mut child = parent.child();
    child.define("name", vec!["inner".into()]).expect("define");
    assert_eq!(child.resolve("name"), Some(vec!["inner".to_string()]));

    // The parent is unchanged.
    assert_eq!(parent.resolve("name"), Some(vec!["outer".to_string()]));
}

#[test]
fn child_snapshots_parent() {
    let mut parent = Environment::new();
    parent.define("v", vec!["before".into()]).expect("define");
    let child = parent.child();
    parent.define("v", vec!["after".into()]).expect("define");
    // The child keeps the snapshot taken at creation.
    assert_eq!(child.resolve("v"), Some(vec!["before".to_string()]));
}

#[test]
fn delete_acts_on_innermost_scope() {
    let mut parent = Environment::new();
    parent.define("v", vec!["outer".into()]).expect("define");
    let mut child = parent.child();
    child.define("v", vec!["inner".into()]).expect("define");
    child.delete("v").expect("delete");
    // The parent's value shows through again.
    assert_eq!(child.resolve("v"), Some(vec!["outer".to_string()]));
}

#[test]
fn specials_are_read_only() {
    let mut env = Environment::new();
    for name in SPECIALS {
        let err = env.define(name, vec!["x".into()]).unwrap_err();
        assert!(matches!(err, ExecError::ReadOnly { .. }), "{name} must be read-only");
        let err = env.delete(name).unwrap_err();
        assert!(matches!(err, ExecError::ReadOnly { .. }), "{name} must not delete");
    }
}

#[test]
fn specials_resolve() {
    let env = Environment::new();
    for name in SPECIALS {
        assert!(env.resolve(name).is_some(), "{name} must resolve");
    }
}

#[test]
fn random_is_in_range() {
    let env = Environment::new();
    for _ in 0..64 {
        let values = env.resolve("RANDOM").expect("RANDOM resolves");
        let number: u32 = values[0].parse().expect("RANDOM is a number");
        assert!(number <= 32767);
    }
}

#[test]
fn pid_matches_process() {
    let env = Environment::new();
    let values = env.resolve("PID").expect("PID resolves");
    assert_eq!(values[0], std::process::id().to_string());
}

#[test]
fn pwd_tracks_scope_cwd() {
    let mut env = Environment::new();
    env.set_cwd(std::path::Path::new("/tmp"), std::path::Path::new("/"));
    assert_eq!(env.resolve("PWD"), Some(vec!["/tmp".to_string()]));
    assert_eq!(env.resolve("OLDPWD"), Some(vec!["/".to_string()]));
}

#[test]
fn subshell_cwd_does_not_leak() {
    let mut parent = Environment::new();
    parent.set_cwd(std::path::Path::new("/tmp"), std::path::Path::new("/"));
    let mut child = parent.child();
    child.set_cwd(std::path::Path::new("/var"), std::path::Path::new("/tmp"));

    assert_eq!(child.resolve("PWD"), Some(vec!["/var".to_string()]));
    assert_eq!(parent.resolve("PWD"), Some(vec!["/tmp".to_string()]));
}

#[test]
fn readonly_blocks_redefinition() {
    let mut env = Environment::new();
    env.define("fixed", vec!["v".into()]).expect("define");
    env.set_readonly("fixed").expect("readonly");
    assert!(matches!(
        env.define("fixed", vec!["w".into()]),
        Err(ExecError::ReadOnly { .. })
    ));
    assert!(matches!(env.delete("fixed"), Err(ExecError::ReadOnly { .. })));
}

#[test]
fn readonly_survives_into_child_scopes() {
    let mut parent = Environment::new();
    parent.define("fixed", vec!["v".into()]).expect("define");
    parent.set_readonly("fixed").expect("readonly");
    let mut child = parent.child();
    assert!(matches!(
        child.define("fixed", vec!["w".into()]),
        Err(ExecError::ReadOnly { .. })
    ));
}

#[test]
fn export_collects_pairs() {
    let mut env = Environment::new();
    env.define("a", vec!["1".into()]).expect("define");
    env.define("b", vec!["x".into(), "y".into()]).expect("define");
    env.export("a").expect("export");
    env.export("b").expect("export");

    let mut pairs = env.exported_pairs();
    pairs.sort();
    assert_eq!(
        pairs,
        vec![("a".to_string(), "1".to_string()), ("b".to_string(), "x y".to_string())]
    );
}

#[test]
fn export_mark_survives_redefinition() {
    let mut env = Environment::new();
    env.define("a", vec!["1".into()]).expect("define");
    env.export("a").expect("export");
    env.define("a", vec!["2".into()]).expect("define");
    assert_eq!(env.exported_pairs(), vec![("a".to_string(), "2".to_string())]);
}

#[test]
fn unexport_clears_the_mark() {
    let mut env = Environment::new();
    env.define("a", vec!["1".into()]).expect("define");
    env.export("a").expect("export");
    env.unexport("a").expect("unexport");
    assert!(env.exported_pairs().is_empty());
}

#[test]
fn inner_scope_wins_for_exports() {
    let mut parent = Environment::new();
    parent.define("a", vec!["outer".into()]).expect("define");
    parent.export("a").expect("export");
    let mut child = parent.child();
    child.define("a", vec!["inner".into()]).expect("define");
    assert_eq!(
        child.exported_pairs(),
        vec![("a".to_string(), "inner".to_string())]
    );
}

#[test]
fn names_deduplicate_across_scopes() {
    let mut parent = Environment::new();
    parent.define("a", vec!["1".into()]).expect("define");
    parent.define("b", vec!["2".into()]).expect("define");
    let mut child = parent.child();
    child.define("a", vec!["3".into()]).expect("define");

    assert_eq!(child.names(), vec!["a".to_string(), "b".to_string()]);
}
